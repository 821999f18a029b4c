pub mod add;
pub mod delete;
pub mod rm;

pub use add::{AddParams, AddReport, add};
pub use delete::{DeleteOutcome, DeleteReport, delete};
pub use rm::{RmReport, rm};

pub mod cli;
pub mod config;
pub mod confirm;
pub mod errors;
pub mod fs;
pub mod manifest;
pub mod project;
pub mod remote;
pub mod security;
pub mod table;
pub mod tools;

pub use errors::{CogsError, ErrorKind};
pub use project::Project;

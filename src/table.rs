use std::path::Path;

/// Delimited text format of a tracked table, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    /// `.csv` files are comma-delimited; everything else is treated as TSV.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("csv") => TableFormat::Csv,
            _ => TableFormat::Tsv,
        }
    }

    pub fn delimiter(self) -> u8 {
        match self {
            TableFormat::Csv => b',',
            TableFormat::Tsv => b'\t',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TableFormat::Csv => "CSV",
            TableFormat::Tsv => "TSV",
        }
    }
}

/// Read only the header row of a delimited file. An empty file yields no headers.
pub fn read_header_row(path: &Path, format: TableFormat) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?;
    Ok(headers.iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn format_follows_extension() {
        assert_eq!(TableFormat::from_path("data.csv"), TableFormat::Csv);
        assert_eq!(TableFormat::from_path("dir/data.tsv"), TableFormat::Tsv);
        assert_eq!(TableFormat::from_path("notes.txt"), TableFormat::Tsv);
        assert_eq!(TableFormat::from_path("archive.csv.bak"), TableFormat::Tsv);
    }

    #[test]
    fn reads_quoted_csv_headers_only() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("people.csv");
        fs::write(&path, "\"Last, First\",Age\n\"Doe, Jane\",41\n").expect("write");

        let headers = read_header_row(&path, TableFormat::Csv).expect("headers");
        assert_eq!(headers, vec!["Last, First".to_string(), "Age".to_string()]);
    }

    #[test]
    fn empty_file_has_no_headers() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("empty.tsv");
        fs::write(&path, "").expect("write");

        let headers = read_header_row(&path, TableFormat::Tsv).expect("headers");
        assert!(headers.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(read_header_row(&dir.path().join("nope.tsv"), TableFormat::Tsv).is_err());
    }
}

//! Filesystem writer for the page archive and its index

use crate::config::OutputConfig;
use crate::output::IndexRecord;
use std::fs;
use std::path::PathBuf;

/// Writes accepted pages and the final index to disk
///
/// Unlike transport failures, any I/O error here is fatal to the run: a page
/// file that failed to land would leave a gap between the sequence numbering
/// and the index, so errors propagate instead of being skipped.
pub struct ArchiveWriter {
    directory: PathBuf,
    index_path: PathBuf,
}

impl ArchiveWriter {
    /// Creates the writer, creating the output directory if absent
    pub fn new(config: &OutputConfig) -> std::io::Result<Self> {
        let directory = PathBuf::from(&config.directory);
        fs::create_dir_all(&directory)?;

        Ok(Self {
            directory,
            index_path: PathBuf::from(&config.index_file),
        })
    }

    /// Persists one accepted page under its sequence-derived filename
    ///
    /// Returns the filename written, for progress reporting.
    pub fn save_page(&self, sequence: u32, html: &str) -> std::io::Result<String> {
        let filename = page_filename(sequence);
        fs::write(self.directory.join(&filename), html)?;
        Ok(filename)
    }

    /// Writes the index file: a two-line header, then one
    /// `{sequence}\t{url}` line per record in sequence order
    pub fn write_index(&self, records: &[IndexRecord]) -> std::io::Result<()> {
        let mut contents = String::from("# File Number\tURL\n");
        contents.push('#');
        contents.push_str(&"=".repeat(60));
        contents.push('\n');

        for record in records {
            contents.push_str(&format!("{}\t{}\n", record.sequence, record.url));
        }

        fs::write(&self.index_path, contents)
    }

    /// Path the index will be written to
    pub fn index_path(&self) -> &std::path::Path {
        &self.index_path
    }
}

/// Filename for an accepted page; a pure function of its sequence number
pub fn page_filename(sequence: u32) -> String {
    format!("page_{:04}.txt", sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer_in(dir: &std::path::Path) -> ArchiveWriter {
        let config = OutputConfig {
            directory: dir.join("pages").to_string_lossy().into_owned(),
            index_file: dir.join("index.txt").to_string_lossy().into_owned(),
        };
        ArchiveWriter::new(&config).unwrap()
    }

    #[test]
    fn test_page_filename_is_zero_padded() {
        assert_eq!(page_filename(1), "page_0001.txt");
        assert_eq!(page_filename(42), "page_0042.txt");
        assert_eq!(page_filename(9999), "page_9999.txt");
    }

    #[test]
    fn test_new_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let _writer = writer_in(dir.path());
        assert!(dir.path().join("pages").is_dir());
    }

    #[test]
    fn test_save_page_writes_raw_html() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path());

        let filename = writer.save_page(3, "<html>тело</html>").unwrap();
        assert_eq!(filename, "page_0003.txt");

        let saved = fs::read_to_string(dir.path().join("pages").join(&filename)).unwrap();
        assert_eq!(saved, "<html>тело</html>");
    }

    #[test]
    fn test_write_index_format() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path());

        let records = vec![
            IndexRecord {
                sequence: 1,
                url: "https://example.com/news/a".to_string(),
            },
            IndexRecord {
                sequence: 2,
                url: "https://example.com/news/b".to_string(),
            },
        ];
        writer.write_index(&records).unwrap();

        let contents = fs::read_to_string(dir.path().join("index.txt")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "# File Number\tURL");
        assert_eq!(lines[1], format!("#{}", "=".repeat(60)));
        assert_eq!(lines[2], "1\thttps://example.com/news/a");
        assert_eq!(lines[3], "2\thttps://example.com/news/b");
    }

    #[test]
    fn test_write_index_with_no_records_is_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let writer = writer_in(dir.path());

        writer.write_index(&[]).unwrap();

        let contents = fs::read_to_string(dir.path().join("index.txt")).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}

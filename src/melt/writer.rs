use crate::error::{MeltError, Result};
use crate::melt::types::MenuItemRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes menu rows as CSV: header first, then one record per row
pub struct RowWriter<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> RowWriter<W> {
    /// Create a writer and emit the header line immediately, so an empty
    /// menu still produces a header-only file.
    pub fn new(writer: W) -> std::result::Result<Self, csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);
        writer.write_record(MenuItemRow::HEADER)?;

        Ok(RowWriter {
            writer,
            rows_written: 0,
        })
    }

    pub fn write_rows(&mut self, rows: &[MenuItemRow]) -> std::result::Result<(), csv::Error> {
        for row in rows {
            self.writer.serialize(row)?;
            self.rows_written += 1;
        }
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(self) -> std::result::Result<W, csv::Error> {
        self.writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))
    }
}

/// Write rows to `path`, replacing any existing file.
///
/// Output goes to `<path>.tmp` first and is renamed into place once complete;
/// on failure the temporary file is removed and `path` is left untouched.
pub fn write_csv_file(path: &Path, rows: &[MenuItemRow]) -> Result<usize> {
    let tmp_path = temp_path(path);
    debug!(tmp = %tmp_path.display(), "writing rows to temporary file");

    match write_to(&tmp_path, rows) {
        Ok(count) => {
            std::fs::rename(&tmp_path, path).map_err(|e| {
                let _ = std::fs::remove_file(&tmp_path);
                MeltError::write(path, e)
            })?;
            info!(rows = count, path = %path.display(), "wrote csv");
            Ok(count)
        }
        Err(source) => {
            let _ = std::fs::remove_file(&tmp_path);
            Err(MeltError::write(path, source))
        }
    }
}

fn write_to(tmp_path: &Path, rows: &[MenuItemRow]) -> std::io::Result<usize> {
    let file = File::create(tmp_path)?;
    let mut writer = RowWriter::new(BufWriter::new(file))?;
    writer.write_rows(rows)?;
    let count = writer.rows_written();

    let buffered = writer.finish()?;
    let file = buffered.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(count)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: u64, name: &str, description: &str) -> MenuItemRow {
        MenuItemRow {
            id,
            name: name.to_string(),
            price: 4.99,
            description: description.to_string(),
            restaurant_id: 13,
        }
    }

    fn render(rows: &[MenuItemRow]) -> String {
        let mut writer = RowWriter::new(Vec::new()).unwrap();
        writer.write_rows(rows).unwrap();
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_header_only() {
        assert_eq!(render(&[]), "id,name,price,description,restaurant_id\r\n");
    }

    #[test]
    fn test_rows() {
        let output = render(&[row(100, "Latte", "hot milk"), row(101, "Tea", "")]);
        assert_eq!(
            output,
            "id,name,price,description,restaurant_id\r\n\
             100,Latte,4.99,hot milk,13\r\n\
             101,Tea,4.99,,13\r\n"
        );
    }

    #[test]
    fn test_quotes_commas_and_quote_marks() {
        let output = render(&[row(100, "Mocha, Iced", "the \"best\" one")]);
        assert!(output.ends_with("100,\"Mocha, Iced\",4.99,\"the \"\"best\"\" one\",13\r\n"));
    }

    #[test]
    fn test_rows_written_counts() {
        let mut writer = RowWriter::new(Vec::new()).unwrap();
        writer.write_rows(&[row(100, "A", "")]).unwrap();
        writer.write_rows(&[row(101, "B", ""), row(102, "C", "")]).unwrap();
        assert_eq!(writer.rows_written(), 3);
    }

    #[test]
    fn test_temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("out/items.csv")),
            PathBuf::from("out/items.csv.tmp")
        );
    }
}

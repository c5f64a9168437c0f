use crate::Table2Model::model_builder::ModelBuilder;
use crate::TableParsers::row_reader::{RowReader, TableRowReader};
use crate::errors::ConversionError;
use csv::ReaderBuilder;
use log::info;
use std::fs::File;
use std::path::Path;

/// Reads a delimiter-separated table and feeds its rows, in file order, to
/// `reader`. The first line is a header and is skipped, empty lines are
/// ignored, rows may have any number of cells and quotes have no special
/// meaning. Returns the number of rows read.
///
/// A row that fails is reported with the table and its line number; the file
/// is closed on every exit path.
pub fn read_table(
    path: &Path,
    separator: u8,
    reader: &mut TableRowReader,
    builder: &mut ModelBuilder,
) -> Result<usize, ConversionError> {
    let file = File::open(path).map_err(|e| ConversionError::io(path, e))?;
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(separator)
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(file);

    let table = format!("{} table '{}'", reader.table_name(), path.display());
    let mut rows = 0;
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let columns: Vec<&str> = record.iter().collect();
        reader
            .read_row(&columns, builder)
            .map_err(|e| ConversionError::Row {
                table: table.clone(),
                line,
                source: Box::new(e),
            })?;
        rows += 1;
    }
    info!("Read {} rows from {}", rows, table);
    Ok(rows)
}

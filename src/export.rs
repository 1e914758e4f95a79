use std::fs;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::error::Error;
use crate::parser::records::QuarterTable;

/// Write the quarter table as CSV at `path`, creating missing parent
/// directories first.
pub fn write_csv(table: &QuarterTable, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    info!("Writing {} quarters to {}", table.rows.len(), path.display());
    let file = fs::File::create(path).map_err(|source| Error::WriteCsv {
        path: path.to_path_buf(),
        source: source.into(),
    })?;
    write_table(file, table).map_err(|source| Error::WriteCsv {
        path: path.to_path_buf(),
        source,
    })
}

fn write_table<W: Write>(out: W, table: &QuarterTable) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

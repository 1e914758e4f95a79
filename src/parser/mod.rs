pub mod locate;
pub mod records;
pub mod table;

use crate::error::Error;
use records::QuarterTable;

/// Section id carrying the quarterly results table on company pages.
pub const QUARTERS_SECTION_ID: &str = "quarters";

/// Three-pass pipeline: page html → table markup → raw rows → quarter table.
pub fn extract_quarters(html: &str, limit: usize) -> Result<QuarterTable, Error> {
    let section = locate::section_block(html, QUARTERS_SECTION_ID)?;
    let table = locate::table_block(section, QUARTERS_SECTION_ID)?;
    let rows = table::scan_rows(table);
    records::build_quarter_table(&rows, limit)
}

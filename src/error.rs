use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a scrape run. All variants are fatal: nothing is
/// retried, and no partial output is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("could not find section `{0}` in the page")]
    SectionNotFound(String),

    #[error("could not find a table in section `{0}`")]
    TableNotFound(String),

    #[error("quarterly results table is empty")]
    EmptyTable,

    #[error("unexpected header format in quarterly results table")]
    MalformedHeader,

    #[error("no quarterly data extracted")]
    NoData,

    #[error("could not create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write csv to {}", .path.display())]
    WriteCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

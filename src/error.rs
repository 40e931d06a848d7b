use thiserror::Error;

/// Errors that can occur when reading the element catalog.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Catalog file `{0}` was not found.")]
    FileNotFound(String),
    #[error("Could not read catalog `{path}`: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Catalog is not a valid list of elements: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Element #{index} has an empty symbol.")]
    EmptySymbol { index: usize },
    #[error("Element `{0}` appears more than once in the catalog.")]
    DuplicateSymbol(String),
    #[error("Element `{symbol}` has atomic number {atomic_number}, above the supported maximum.")]
    AtomicNumberOutOfRange { symbol: String, atomic_number: u32 },
    #[error("Element `{symbol}` has an invalid color `{color}`.")]
    InvalidColor { symbol: String, color: String },
}

/// Errors raised at the selection event boundary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Invalid selection input: {0}")]
    InvalidSelectionInput(String),
}

/// Errors in the process configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Could not parse `{0}` as a listen address.")]
    InvalidAddr(String),
    #[error("`{0}` cannot be used as the three.js module URL.")]
    InvalidThreeUrl(String),
}

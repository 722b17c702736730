use std::path::PathBuf;

use thiserror::Error;

/// Errors reported to the user with a nonzero exit status. None of these are
/// retried.
#[derive(Debug, Error)]
pub enum CliError {
    /// Stdin was selected but is attached to a terminal.
    #[error("the data won't be read from a terminal")]
    StdinIsTerminal,

    /// The named path exists but is not a regular file.
    #[error("'{}' is not a regular file", .0.display())]
    NotRegularFile(PathBuf),

    /// The input was empty.
    #[error("no data to process")]
    NoData,

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use bytehist::ByteHistogram;
use log::debug;

use crate::error::CliError;

const CHUNK_SIZE: usize = 8192;

/// Where the bytes come from. The histogram core is agnostic to the origin
/// and chunk size; this type owns the open/validate/read-until-EOF glue.
pub enum Input {
    Stdin(io::Stdin),
    File { path: PathBuf, file: File },
}

impl Input {
    /// Open the given path, or stdin when no path is provided. Stdin must be
    /// redirected; only regular files may be named.
    pub fn open(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            None => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    return Err(CliError::StdinIsTerminal);
                }
                Ok(Self::Stdin(stdin))
            }
            Some(path) => {
                let metadata = std::fs::metadata(path)?;
                if !metadata.is_file() {
                    return Err(CliError::NotRegularFile(path.to_path_buf()));
                }
                debug!("opened {}", path.display());
                Ok(Self::File {
                    path: path.to_path_buf(),
                    file: File::open(path)?,
                })
            }
        }
    }

    /// The name shown in the report summary.
    pub fn name(&self) -> String {
        match self {
            Self::Stdin(_) => "(stdin)".to_string(),
            Self::File { path, .. } => path.display().to_string(),
        }
    }

    /// Feed the whole input into the histogram, chunk by chunk, until EOF.
    pub fn read_into(&mut self, histogram: &mut ByteHistogram) -> Result<(), CliError> {
        let mut buf = [0; CHUNK_SIZE];

        loop {
            let n = match self {
                Self::Stdin(stdin) => stdin.read(&mut buf)?,
                Self::File { file, .. } => file.read(&mut buf)?,
            };

            if n == 0 {
                break;
            }

            histogram.update(&buf[..n]);
        }

        debug!("read {} bytes from {}", histogram.total(), self.name());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_a_regular_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[7, 7, 7, 0, 255]).unwrap();

        let mut input = Input::open(Some(file.path())).unwrap();
        let mut histogram = ByteHistogram::new();
        input.read_into(&mut histogram).unwrap();

        assert_eq!(histogram.total(), 5);
        assert_eq!(histogram.count(7), 3);
        assert_eq!(histogram.count(0), 1);
        assert_eq!(histogram.count(255), 1);
        assert_eq!(input.name(), file.path().display().to_string());
    }

    #[test]
    fn reads_across_chunk_boundaries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![42; CHUNK_SIZE * 2 + 17]).unwrap();

        let mut input = Input::open(Some(file.path())).unwrap();
        let mut histogram = ByteHistogram::new();
        input.read_into(&mut histogram).unwrap();

        assert_eq!(histogram.total(), (CHUNK_SIZE * 2 + 17) as u64);
        assert_eq!(histogram.count(42), (CHUNK_SIZE * 2 + 17) as u64);
    }

    #[test]
    fn empty_file_leaves_the_histogram_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let mut input = Input::open(Some(file.path())).unwrap();
        let mut histogram = ByteHistogram::new();
        input.read_into(&mut histogram).unwrap();

        assert_eq!(histogram.total(), 0);
    }

    #[test]
    fn rejects_a_directory() {
        let dir = tempfile::tempdir().unwrap();

        let result = Input::open(Some(dir.path()));
        assert!(matches!(result, Err(CliError::NotRegularFile(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = Input::open(Some(&missing));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}

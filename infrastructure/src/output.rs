//! Output file handling
//!
//! The result file is truncated before the first command runs so that a
//! run which produces no lines still leaves an empty file behind.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Could not create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not create output file {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Create (or truncate) the output file, creating parent directories
pub fn create_output(path: impl AsRef<Path>) -> Result<BufWriter<File>, OutputError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file = File::create(path).map_err(|source| OutputError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_existing_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        std::fs::write(&path, "old contents\n").unwrap();

        let writer = create_output(&path).unwrap();
        drop(writer);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("result.txt");

        let mut writer = create_output(&path).unwrap();
        writeln!(writer, "25").unwrap();
        writer.flush().unwrap();
        drop(writer);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "25\n");
    }

    #[test]
    fn test_directory_target_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            create_output(dir.path()),
            Err(OutputError::Create { .. })
        ));
    }
}

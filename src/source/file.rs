use std::fs;
use std::path::PathBuf;

use super::Source;
use crate::error::LoadError;

/// Session document on the local filesystem, re-read every cycle
pub(crate) struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source for FileSource {
    fn display_name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path).map_err(|e| self.unavailable(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn fetch_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"drivers": []}}"#).unwrap();
        let source = FileSource::new(file.path());
        assert_eq!(source.fetch().unwrap(), r#"{"drivers": []}"#);
    }

    #[test]
    fn fetch_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}

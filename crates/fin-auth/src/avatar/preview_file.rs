use std::io::{self, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

/// A downloaded avatar materialized as a temporary file.
///
/// The file is deleted when the value is dropped, which is the only way
/// it is released.
#[derive(Debug)]
pub struct PreviewFile {
    key: String,
    file: NamedTempFile,
}

impl PreviewFile {
    pub fn create(key: &str, bytes: &[u8]) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("fin-avatar-")
            .tempfile()?;
        file.write_all(bytes)?;
        file.flush()?;

        debug!("Created avatar preview {:?}", file.path());
        Ok(Self {
            key: key.to_string(),
            file,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Drop for PreviewFile {
    fn drop(&mut self) {
        debug!("Releasing avatar preview {:?}", self.file.path());
    }
}

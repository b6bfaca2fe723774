use crate::script::normalize_display_path;
use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Temporary file another process can open by path while this handle is
/// alive. The file is removed when the handle drops, on every exit path.
pub struct SharedTempFile {
    file: NamedTempFile,
}

impl SharedTempFile {
    /// Acquire a uniquely named file in the platform temp directory. No
    /// fallback location: creation failure propagates.
    pub fn with_suffix(suffix: &str) -> io::Result<Self> {
        let file = tempfile::Builder::new().suffix(suffix).tempfile()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Absolute path with separators normalized for the Lisp payload.
    pub fn display_path(&self) -> String {
        normalize_display_path(self.file.path())
    }

    /// Remove the file now and report any deletion error. Dropping instead
    /// removes it silently.
    pub fn close(self) -> io::Result<()> {
        self.file.close()
    }
}

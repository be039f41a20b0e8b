//! File sinks for generated documents.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::Result;

/// Content type of a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mime {
    Html,
    Json,
}

impl Mime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mime::Html => "text/html",
            Mime::Json => "application/json",
        }
    }
}

/// Destination for generated documents.
///
/// Overwrite and duplicate-name semantics belong to the implementation.
pub trait FileSink {
    fn write(&self, file_name: &str, content: &str, mime: Mime) -> Result<()>;
}

/// Writes documents into a fixed root directory, replacing existing files.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSink for DirectorySink {
    fn write(&self, file_name: &str, content: &str, mime: Mime) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.root.join(file_name);
        std::fs::write(&path, content)?;
        info!(path = %path.display(), mime = mime.as_str(), bytes = content.len(), "wrote document");
        Ok(())
    }
}

/// Collects documents in memory, in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: RefCell<Vec<(String, String, Mime)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of the last document written under `file_name`.
    pub fn content(&self, file_name: &str) -> Option<String> {
        self.files
            .borrow()
            .iter()
            .rev()
            .find(|(name, _, _)| name == file_name)
            .map(|(_, content, _)| content.clone())
    }

    /// Names of all documents written, in order.
    pub fn file_names(&self) -> Vec<String> {
        self.files
            .borrow()
            .iter()
            .map(|(name, _, _)| name.clone())
            .collect()
    }
}

impl FileSink for MemorySink {
    fn write(&self, file_name: &str, content: &str, mime: Mime) -> Result<()> {
        self.files
            .borrow_mut()
            .push((file_name.to_string(), content.to_string(), mime));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_directory_sink_writes_and_overwrites() {
        let dir = tempdir().unwrap();
        let sink = DirectorySink::new(dir.path().join("out"));

        sink.write("events.json", "[]", Mime::Json).unwrap();
        sink.write("events.json", "[{}]", Mime::Json).unwrap();

        let written = std::fs::read_to_string(dir.path().join("out/events.json")).unwrap();
        assert_eq!(written, "[{}]");
    }

    #[test]
    fn test_memory_sink_keeps_last_write() {
        let sink = MemorySink::new();
        sink.write("a.html", "one", Mime::Html).unwrap();
        sink.write("a.html", "two", Mime::Html).unwrap();

        assert_eq!(sink.content("a.html").as_deref(), Some("two"));
        assert_eq!(sink.file_names(), vec!["a.html", "a.html"]);
        assert!(sink.content("b.html").is_none());
    }

    #[test]
    fn test_mime_strings() {
        assert_eq!(Mime::Html.as_str(), "text/html");
        assert_eq!(Mime::Json.as_str(), "application/json");
    }
}

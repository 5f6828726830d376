use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use foodsafe_extract::Document;
use tokio::fs;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// Raw page content and the character encoding it was declared with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub content: Vec<u8>,
    pub encoding: String,
}
impl Page {
    pub fn new(content: impl Into<Vec<u8>>, encoding: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            encoding: encoding.into(),
        }
    }

    /// Decodes and parses the page under its declared encoding.
    pub fn parse(&self) -> foodsafe_extract::error::Result<Document> {
        Document::parse(&self.content, &self.encoding)
    }

    /// Writes the raw bytes to `path` so the page can be [`load`]ed later.
    #[instrument(skip(self), fields(size = self.content.len()))]
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Err(err) = fs::write(path, &self.content).await {
            exn::bail!(ErrorKind::Io(err));
        }
        Ok(())
    }
}

/// Loads a saved page, declaring its bytes to be in `encoding`.
#[instrument]
pub async fn load(path: &Path, encoding: &str) -> Result<Page> {
    match fs::read(path).await {
        Ok(content) => {
            tracing::debug!(size = content.len(), "loaded saved page");
            Ok(Page::new(content, encoding))
        },
        Err(err) if err.kind() == IoErrorKind::NotFound => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
        Err(err) => exn::bail!(ErrorKind::Io(err)),
    }
}

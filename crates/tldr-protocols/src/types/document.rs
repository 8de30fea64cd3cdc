//! Document categories.

use serde::{Deserialize, Serialize};

/// Kind of document a page represents.
///
/// The category decides which selector list the extractor tries before
/// falling back to generic article extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentCategory {
    /// Office Online / Word for the web.
    WordProcessor,
    /// Google Docs editor.
    DocsEditor,
    /// PDF rendered by an in-browser viewer.
    Pdf,
    /// Any other page.
    Webpage,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 4] = [
        Self::WordProcessor,
        Self::DocsEditor,
        Self::Pdf,
        Self::Webpage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WordProcessor => "word-processor",
            Self::DocsEditor => "docs-editor",
            Self::Pdf => "pdf",
            Self::Webpage => "webpage",
        }
    }
}

impl Default for DocumentCategory {
    fn default() -> Self {
        Self::Webpage
    }
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

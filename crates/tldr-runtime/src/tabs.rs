//! Access to the page the user is looking at.

use async_trait::async_trait;

use tldr_extract::PageSnapshot;

/// Source of the active page.
#[async_trait]
pub trait TabSource: Send + Sync {
    /// The active page, or `None` when there is no tab to act on.
    async fn active_page(&self) -> Option<PageSnapshot>;
}

/// A fixed page, or no page at all.
#[derive(Debug, Clone, Default)]
pub struct StaticTab {
    page: Option<PageSnapshot>,
}

impl StaticTab {
    pub fn new(page: PageSnapshot) -> Self {
        Self { page: Some(page) }
    }

    /// A tab source with nothing open.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TabSource for StaticTab {
    async fn active_page(&self) -> Option<PageSnapshot> {
        self.page.clone()
    }
}

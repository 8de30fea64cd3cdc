//! Loading a page from the web or from disk.

use std::error::Error;
use std::path::Path;

use tracing::debug;

use tldr_config::AppConfig;
use tldr_extract::PageSnapshot;

/// Fetch or read `source` and parse it as the active page.
///
/// `url_override` replaces the page URL used for classification.
pub(crate) async fn load_page(
    source: &str,
    url_override: Option<&str>,
    config: &AppConfig,
) -> Result<PageSnapshot, Box<dyn Error>> {
    let (location, html) = if is_remote(source) {
        (source.to_string(), fetch(source, config).await?)
    } else {
        read_file(Path::new(source)).await?
    };

    let url = url_override.unwrap_or(&location);
    debug!(%url, bytes = html.len(), "Loaded page");
    Ok(PageSnapshot::parse(url, &html)?)
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch(url: &str, config: &AppConfig) -> Result<String, Box<dyn Error>> {
    let mut builder = reqwest::Client::builder();
    if !config.backend.user_agent.is_empty() {
        builder = builder.user_agent(config.backend.user_agent.clone());
    }
    if let Some(secs) = config.backend.request_timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }

    let response = builder.build()?.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

async fn read_file(path: &Path) -> Result<(String, String), Box<dyn Error>> {
    let html = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let absolute = tokio::fs::canonicalize(path).await?;
    let url = url::Url::from_file_path(&absolute)
        .map_err(|_| format!("Cannot express {} as a file URL", absolute.display()))?;
    Ok((url.to_string(), html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.com"));
        assert!(is_remote("http://localhost:8000/page"));
        assert!(!is_remote("page.html"));
        assert!(!is_remote("/tmp/https.html"));
    }

    #[tokio::test]
    async fn test_local_file_gets_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf.html");
        std::fs::write(&path, "<html><body><p>Quarterly</p></body></html>").unwrap();

        let page = load_page(path.to_str().unwrap(), None, &AppConfig::default())
            .await
            .unwrap();
        assert!(page.url().starts_with("file://"));
        assert!(page.url().ends_with("report.pdf.html"));
        assert_eq!(page.hostname(), "");
    }

    #[tokio::test]
    async fn test_url_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.html");
        std::fs::write(&path, "<html><body><p>Saved doc</p></body></html>").unwrap();

        let page = load_page(
            path.to_str().unwrap(),
            Some("https://docs.google.com/document/d/1"),
            &AppConfig::default(),
        )
        .await
        .unwrap();
        assert_eq!(page.hostname(), "docs.google.com");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = load_page("/definitely/not/here.html", None, &AppConfig::default()).await;
        assert!(result.is_err());
    }
}

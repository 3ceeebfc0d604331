//! Landing page template.

use anyhow::Context;
use axum::body::Bytes;
use std::io::ErrorKind;
use std::path::Path;

const EMBEDDED_PAGE: &str = include_str!("../templates/index.html");

/// Read the landing page from `path`, falling back to the copy built into
/// the binary when the file does not exist.
pub fn load_page(path: &Path) -> anyhow::Result<Bytes> {
    match std::fs::read_to_string(path) {
        Ok(html) => {
            tracing::info!("Serving page from {}", path.display());
            Ok(Bytes::from(html))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No template at {}, using built-in page", path.display());
            Ok(Bytes::from_static(EMBEDDED_PAGE.as_bytes()))
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read template {}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_template_uses_embedded_page() {
        let page = load_page(Path::new("does/not/exist/index.html")).unwrap();
        assert_eq!(page, EMBEDDED_PAGE.as_bytes());
    }

    #[test]
    fn test_template_read_from_disk() {
        let path = std::env::temp_dir().join(format!("cyrelis-page-{}.html", std::process::id()));
        std::fs::write(&path, "<h1>custom</h1>").unwrap();

        let page = load_page(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(page, "<h1>custom</h1>".as_bytes());
    }

    #[test]
    fn test_embedded_page_posts_to_export_endpoint() {
        assert!(EMBEDDED_PAGE.contains("/api/export-bitwarden-csv"));
    }
}

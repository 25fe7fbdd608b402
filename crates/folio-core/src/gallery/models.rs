use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One slide of the achievements gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Image reference (file path or URL)
    pub image: String,
    /// Caption shown under the centered slide
    pub text: String,
}

impl GalleryItem {
    pub fn new(image: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            text: text.into(),
        }
    }
}

/// Parse a JSON array of `{ "image", "text" }` records
pub fn parse_items(json: &str) -> Result<Vec<GalleryItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Load gallery items from a JSON file
pub async fn load_items(path: &Path) -> Result<Vec<GalleryItem>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::Content(format!("content file not found: {}", path.display()))
        } else {
            Error::Io(e)
        }
    })?;

    let items = parse_items(&content)?;
    tracing::debug!(count = items.len(), path = %path.display(), "Loaded gallery items");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_keeps_order() {
        let items = parse_items(
            r#"[
                {"image": "/achievements/hackathon.jpg", "text": "Hackathon winner"},
                {"image": "/achievements/talk.jpg", "text": "Conference talk"}
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "Hackathon winner");
        assert_eq!(items[1].image, "/achievements/talk.jpg");
    }

    #[test]
    fn test_parse_items_empty_array() {
        assert!(parse_items("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_items_missing_field_is_json_error() {
        let err = parse_items(r#"[{"image": "a.jpg"}]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[tokio::test]
    async fn test_load_items_missing_file() {
        let path = std::env::temp_dir().join("folio-no-such-achievements.json");
        let err = load_items(&path).await.unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[tokio::test]
    async fn test_load_items_from_file() {
        let path = std::env::temp_dir().join(format!(
            "folio-achievements-{}.json",
            std::process::id()
        ));
        tokio::fs::write(&path, r#"[{"image": "a.jpg", "text": "A"}]"#)
            .await
            .unwrap();

        let items = load_items(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(items, vec![GalleryItem::new("a.jpg", "A")]);
    }
}

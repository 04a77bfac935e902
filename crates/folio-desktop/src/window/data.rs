//! Opaque window payloads
//!
//! The registry never looks inside a payload. Content windows read it back
//! through the typed views below, which mirror the shapes the content
//! catalog hands out.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DesktopResult;

/// Payload attached to a window slot
///
/// Wraps the raw JSON value so arbitrary catalog entries survive unchanged;
/// equality is structural.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowData(Value);

impl WindowData {
    /// Wrap a raw value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Serialize a typed payload
    pub fn from_payload<T: Serialize>(payload: &T) -> DesktopResult<Self> {
        Ok(Self(serde_json::to_value(payload)?))
    }

    /// Parse a payload from JSON text
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(Self(serde_json::from_str(json)?))
    }

    /// The raw value
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// View as a document (text window); `None` if the shape does not match
    pub fn document(&self) -> Option<DocumentPayload> {
        self.view()
    }

    /// View as an image (image viewer window)
    pub fn image(&self) -> Option<ImagePayload> {
        self.view()
    }

    /// View as a web page (browser window)
    pub fn page(&self) -> Option<PagePayload> {
        self.view()
    }

    fn view<T: DeserializeOwned>(&self) -> Option<T> {
        T::deserialize(&self.0).ok()
    }
}

impl From<Value> for WindowData {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Document shown in the text window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
}

/// Image shown in the image viewer window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub name: String,
    pub image_url: String,
}

/// Address loaded by the browser window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PagePayload {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_view() {
        let data = WindowData::new(json!({
            "name": "about-me.txt",
            "subtitle": "Hello",
            "description": ["one", "two"],
            "icon": "/images/txt.png",
        }));
        let doc = data.document().unwrap();
        assert_eq!(doc.name, "about-me.txt");
        assert_eq!(doc.subtitle.as_deref(), Some("Hello"));
        assert_eq!(doc.description.len(), 2);
        assert!(doc.image.is_none());
    }

    #[test]
    fn test_image_view_ignores_extra_fields() {
        let data = WindowData::new(json!({
            "id": 3,
            "name": "Gallery Image",
            "kind": "file",
            "fileType": "img",
            "imageUrl": "/images/gal3.png",
        }));
        let image = data.image().unwrap();
        assert_eq!(image.image_url, "/images/gal3.png");
        // The raw value is untouched
        assert_eq!(data.value()["kind"], "file");
    }

    #[test]
    fn test_mismatched_view_is_none() {
        let data = WindowData::new(json!({ "id": 1 }));
        assert!(data.document().is_none());
        assert!(data.image().is_none());
        assert!(data.page().is_none());
    }

    #[test]
    fn test_from_payload_roundtrip() {
        let page = PagePayload {
            url: "https://example.com".to_string(),
            name: None,
        };
        let data = WindowData::from_payload(&page).unwrap();
        assert_eq!(data.page(), Some(page));
        assert_eq!(data.value(), &json!({ "url": "https://example.com" }));
    }
}

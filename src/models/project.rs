use serde::Serialize;
use serde_json::Value;

/// Title used when a record carries no usable title.
pub const UNTITLED: &str = "Untitled project";

/// A single portfolio entry, with all optional fields resolved to their
/// defaults at construction time. Records come from an external JSON array;
/// unknown fields are ignored.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub alt: String,
    pub url: Option<String>,
    pub tech: Vec<String>,
}

impl Project {
    /// Build a project from one raw JSON record. Missing or empty text
    /// fields fall back to defaults; a `tech` value that is not an array of
    /// strings is treated as absent.
    pub fn from_value(value: &Value, placeholder_image: &str) -> Self {
        let text = |key: &str| -> Option<String> {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .filter(|s| !s.is_empty())
        };

        let title = text("title").unwrap_or_else(|| UNTITLED.to_string());
        let image = text("image").unwrap_or_else(|| placeholder_image.to_string());
        let alt = text("alt").unwrap_or_else(|| format!("{} screenshot", title));
        let description = text("description").unwrap_or_default();
        let url = text("url");
        let tech = value
            .get("tech")
            .and_then(|v| v.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|t| t.as_str())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Project {
            title,
            description,
            image,
            alt,
            url,
            tech,
        }
    }
}

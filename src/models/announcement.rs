//! Announcement data structures.

use serde::{Deserialize, Deserializer, Serialize};

/// A single announcement from the ministry feed.
///
/// Announcements are immutable once fetched; only their presence and
/// position across fetches matter. The feed serves them newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Announcement {
    /// Unique identifier, stable across fetches. The feed serves it as
    /// either a JSON string or a JSON number; both normalize to a string.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,

    /// Publish date as served by the feed
    #[serde(default)]
    pub date: Option<String>,

    /// French title
    #[serde(default)]
    pub title_fr: Option<String>,

    /// Arabic title
    #[serde(default)]
    pub title_ar: Option<String>,

    /// French description
    #[serde(default)]
    pub description_fr: Option<String>,

    /// Arabic description
    #[serde(default)]
    pub description_ar: Option<String>,

    /// Attached documents, URLs relative to the site base
    #[serde(default)]
    pub pdf: Vec<DocumentLink>,
}

impl Announcement {
    /// The first attached document, if it carries a usable URL.
    pub fn first_document(&self) -> Option<&DocumentLink> {
        self.pdf.first().filter(|doc| !doc.url.is_empty())
    }
}

/// A document attached to an announcement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentLink {
    /// Path relative to the site base URL
    pub url: String,

    /// French label
    #[serde(default)]
    pub label_fr: Option<String>,

    /// Arabic label
    #[serde(default)]
    pub label_ar: Option<String>,
}

/// Accept an id as either a JSON string or a JSON number.
///
/// The state file stores the marker as text, so ids must compare as
/// strings regardless of how the feed serialized them.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "announcement id must be a string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_announcement() -> Announcement {
        Announcement {
            id: "a-1024".to_string(),
            date: Some("2026-08-20".to_string()),
            title_fr: Some("Résultats du concours".to_string()),
            title_ar: Some("نتائج المباراة".to_string()),
            description_fr: Some("Publication des résultats.".to_string()),
            description_ar: Some("نشر النتائج.".to_string()),
            pdf: vec![DocumentLink {
                url: "docs/resultats.pdf".to_string(),
                label_fr: Some("Consulter".to_string()),
                label_ar: None,
            }],
        }
    }

    #[test]
    fn test_parse_string_id() {
        let json = r#"{"id": "2024-117", "title_fr": "Avis"}"#;
        let a: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, "2024-117");
        assert_eq!(a.title_fr.as_deref(), Some("Avis"));
        assert!(a.date.is_none());
        assert!(a.pdf.is_empty());
    }

    #[test]
    fn test_parse_numeric_id() {
        let json = r#"{"id": 1187}"#;
        let a: Announcement = serde_json::from_str(json).unwrap();
        assert_eq!(a.id, "1187");
    }

    #[test]
    fn test_parse_rejects_non_scalar_id() {
        let json = r#"{"id": {"nested": true}}"#;
        assert!(serde_json::from_str::<Announcement>(json).is_err());
    }

    #[test]
    fn test_first_document() {
        let a = sample_announcement();
        assert_eq!(a.first_document().unwrap().url, "docs/resultats.pdf");
    }

    #[test]
    fn test_first_document_skips_empty_url() {
        let mut a = sample_announcement();
        a.pdf[0].url.clear();
        assert!(a.first_document().is_none());

        a.pdf.clear();
        assert!(a.first_document().is_none());
    }
}

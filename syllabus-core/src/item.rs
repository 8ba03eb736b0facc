//! Syllabus items: the dated facts a syllabus is reduced to.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SyllabusError, SyllabusResult};

/// A single calendar-worthy fact extracted from a syllabus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SyllabusItem {
    pub fn new(id: &str, title: &str, kind: ItemKind, date: NaiveDate) -> Self {
        SyllabusItem {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            date,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

impl fmt::Display for SyllabusItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// What kind of work an item represents.
///
/// Unrecognized kinds are kept verbatim in `Other` so they can be rendered
/// with the fallback style instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
    Assignment,
    Exam,
    Reading,
    Other(String),
}

impl ItemKind {
    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::Assignment => "assignment",
            ItemKind::Exam => "exam",
            ItemKind::Reading => "reading",
            ItemKind::Other(kind) => kind,
        }
    }
}

impl From<&str> for ItemKind {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "assignment" => ItemKind::Assignment,
            "exam" => ItemKind::Exam,
            "reading" => ItemKind::Reading,
            _ => ItemKind::Other(value.to_string()),
        }
    }
}

impl From<String> for ItemKind {
    fn from(value: String) -> Self {
        ItemKind::from(value.as_str())
    }
}

impl From<ItemKind> for String {
    fn from(kind: ItemKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a JSON array of items, rejecting collections with repeated ids.
pub fn items_from_json(json: &str) -> SyllabusResult<Vec<SyllabusItem>> {
    let items: Vec<SyllabusItem> =
        serde_json::from_str(json).map_err(|e| SyllabusError::Serialization(e.to_string()))?;
    ensure_unique_ids(&items)?;
    Ok(items)
}

/// Ids are the only key for selection and list rendering, so they must be unique.
pub fn ensure_unique_ids(items: &[SyllabusItem]) -> SyllabusResult<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id.as_str()) {
            return Err(SyllabusError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_is_kept_as_other() {
        assert_eq!(ItemKind::from("Exam"), ItemKind::Exam);
        assert_eq!(
            ItemKind::from("seminar"),
            ItemKind::Other("seminar".to_string())
        );
        assert_eq!(ItemKind::Other("seminar".to_string()).to_string(), "seminar");
    }

    #[test]
    fn test_items_from_json_uses_type_field() {
        let json = r#"[
            {"id": "a", "title": "Torts Reading", "type": "reading", "date": "2025-09-03"},
            {"id": "b", "title": "Moot Court", "type": "oral argument", "date": "2025-09-04",
             "description": "Room 101"}
        ]"#;

        let items = items_from_json(json).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, ItemKind::Reading);
        assert_eq!(items[0].description, None);
        assert_eq!(items[1].kind, ItemKind::Other("oral argument".to_string()));
        assert_eq!(items[1].description.as_deref(), Some("Room 101"));
    }

    #[test]
    fn test_items_from_json_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "a", "title": "One", "type": "exam", "date": "2025-09-03"},
            {"id": "a", "title": "Two", "type": "exam", "date": "2025-09-04"}
        ]"#;

        let err = items_from_json(json).unwrap_err();
        assert!(matches!(err, SyllabusError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn test_items_from_json_rejects_malformed_dates() {
        let json = r#"[{"id": "a", "title": "One", "type": "exam", "date": "September 3rd"}]"#;

        assert!(matches!(
            items_from_json(json),
            Err(SyllabusError::Serialization(_))
        ));
    }
}

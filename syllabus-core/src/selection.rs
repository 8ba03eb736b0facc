//! Which syllabus items the user has ticked.

use std::collections::HashSet;

use crate::item::SyllabusItem;

/// Set of selected item ids. Independent of month and view mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    ids: HashSet<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if unselected, unselect it otherwise.
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn select_all(&mut self, items: &[SyllabusItem]) {
        self.ids.extend(items.iter().map(|i| i.id.clone()));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids, sorted for stable output.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;
    use chrono::NaiveDate;

    #[test]
    fn test_toggle_is_self_inverse() {
        let mut selection = SelectionStore::new();
        selection.toggle("keep");
        let before = selection.clone();

        assert!(selection.toggle("2"));
        assert!(selection.is_selected("2"));
        assert!(!selection.toggle("2"));

        assert_eq!(selection, before);
    }

    #[test]
    fn test_count_tracks_distinct_ids() {
        let mut selection = SelectionStore::new();
        selection.toggle("1");
        selection.toggle("3");

        assert_eq!(selection.count(), 2);
        assert_eq!(selection.ids(), vec!["1", "3"]);
        assert!(!selection.is_selected("2"));
    }

    #[test]
    fn test_select_all_and_clear() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
        let items = vec![
            SyllabusItem::new("1", "One", ItemKind::Reading, date),
            SyllabusItem::new("2", "Two", ItemKind::Exam, date),
        ];
        let mut selection = SelectionStore::new();
        selection.toggle("1");

        selection.select_all(&items);
        assert_eq!(selection.count(), 2);

        selection.clear();
        assert!(selection.is_empty());
    }
}

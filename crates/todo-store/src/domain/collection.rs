//! Todo Collection
//!
//! Ordered, immutable list of todo items. Every change produces a new value;
//! the stored `Vec` is never touched after construction.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::item::TodoItem;

/// Ordered set of todo items, insertion order, unique ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoCollection {
    items: Vec<TodoItem>,
}

impl TodoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn last(&self) -> Option<&TodoItem> {
        self.items.last()
    }

    /// Position of the item with the given id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.position_of(id).is_some()
    }

    /// Id for a new locally created item.
    ///
    /// Starts from `len + 1` and moves up past ids already taken, so lists
    /// that had earlier rows deleted never hand out a duplicate.
    pub fn next_local_id(&self) -> String {
        let mut candidate = self.items.len() + 1;
        loop {
            let id = candidate.to_string();
            if !self.contains_id(&id) {
                return id;
            }
            candidate += 1;
        }
    }

    /// New collection with `item` appended at the end
    pub fn with_appended(&self, item: TodoItem) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item);
        Self { items }
    }

    /// New collection without the item at `index`, `None` when out of range
    pub fn without_index(&self, index: usize) -> Option<Self> {
        if index >= self.items.len() {
            return None;
        }
        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect();
        Some(Self { items })
    }

    /// New collection without the item whose id matches, `None` when absent
    pub fn without_id(&self, id: &str) -> Option<Self> {
        self.position_of(id).and_then(|index| self.without_index(index))
    }
}

impl From<Vec<TodoItem>> for TodoCollection {
    fn from(items: Vec<TodoItem>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a TodoCollection {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_items() -> TodoCollection {
        TodoCollection::from(vec![
            TodoItem::new("1", "Buy milk"),
            TodoItem::new("2", "Walk dog"),
        ])
    }

    #[test]
    fn test_append_keeps_original() {
        let original = TodoCollection::new();
        let updated = original.with_appended(TodoItem::new("1", "Buy milk"));

        assert!(original.is_empty());
        assert_eq!(updated.len(), 1);
        assert_eq!(updated.last().unwrap().content, "Buy milk");
    }

    #[test]
    fn test_without_index() {
        let collection = two_items();
        let updated = collection.without_index(0).expect("index in range");

        assert_eq!(updated.items(), &[TodoItem::new("2", "Walk dog")]);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_without_index_out_of_range() {
        assert!(two_items().without_index(2).is_none());
    }

    #[test]
    fn test_without_id() {
        let updated = two_items().without_id("2").expect("id present");
        assert_eq!(updated.items(), &[TodoItem::new("1", "Buy milk")]);
        assert!(two_items().without_id("3").is_none());
    }

    #[test]
    fn test_next_local_id_follows_length() {
        assert_eq!(TodoCollection::new().next_local_id(), "1");
        assert_eq!(two_items().next_local_id(), "3");
    }

    #[test]
    fn test_next_local_id_skips_taken_ids() {
        // "1" was deleted, "2" remains: len + 1 would collide
        let collection = TodoCollection::from(vec![TodoItem::new("2", "Walk dog")]);
        assert_eq!(collection.next_local_id(), "3");
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let json = serde_json::to_string(&two_items()).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"1","content":"Buy milk"},{"id":"2","content":"Walk dog"}]"#
        );
    }
}

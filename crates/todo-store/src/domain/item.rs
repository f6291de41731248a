//! Todo Item Entity
//!
//! A single entry of the todo list: an identifier and the text the user typed.

use serde::{Deserialize, Deserializer, Serialize};
use super::entity::Entity;

/// A todo entry
///
/// `id` is always kept as a string. REST backends commonly hand out integer
/// primary keys, so both JSON strings and JSON integers are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier within the collection
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// User supplied text
    pub content: String,
}

impl TodoItem {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

impl Entity for TodoItem {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Integer(number) => number.to_string(),
    })
}

/// Identifies the item a deletion targets
///
/// Browser-storage lists address rows by position, REST lists by item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    /// Position in the current collection
    Index(usize),
    /// Item identifier
    Id(String),
}

impl std::fmt::Display for ItemRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemRef::Index(index) => write!(f, "index {}", index),
            ItemRef::Id(id) => write!(f, "id {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new("1", "Buy milk");
        assert_eq!(item.id(), "1");
        assert_eq!(item.content, "Buy milk");
    }

    #[test]
    fn test_integer_id_is_normalized() {
        let item: TodoItem = serde_json::from_str(r#"{"id": 42, "content": "Walk dog"}"#).unwrap();
        assert_eq!(item.id, "42");
        assert_eq!(item.content, "Walk dog");
    }

    #[test]
    fn test_string_id_is_kept() {
        let item: TodoItem = serde_json::from_str(r#"{"id": "abc", "content": "x"}"#).unwrap();
        assert_eq!(item.id, "abc");
    }

    #[test]
    fn test_item_serializes_id_as_string() {
        let json = serde_json::to_value(TodoItem::new("7", "Read")).unwrap();
        assert_eq!(json, serde_json::json!({"id": "7", "content": "Read"}));
    }

    #[test]
    fn test_item_ref_display() {
        assert_eq!(ItemRef::Index(3).to_string(), "index 3");
        assert_eq!(ItemRef::Id("9".into()).to_string(), "id 9");
    }
}

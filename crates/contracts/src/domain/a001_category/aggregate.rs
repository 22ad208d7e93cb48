use crate::domain::common::{AggregateRoot, EntityId, HasId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product category. Categories may nest through `parent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parent: Option<EntityId>,
}

impl HasId for Category {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

impl AggregateRoot for Category {
    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let c: Category = serde_json::from_str(r#"{"id": 3, "name": "Audio"}"#).unwrap();
        assert_eq!(c.id, 3);
        assert_eq!(c.description, None);
        assert_eq!(c.parent, None);
    }

    #[test]
    fn test_deserialize_nested() {
        let c: Category = serde_json::from_str(
            r#"{"id": 4, "name": "Headphones", "description": null, "parent": 3}"#,
        )
        .unwrap();
        assert_eq!(c.parent, Some(3));
        assert_eq!(Category::collection_name(), "categories");
    }
}

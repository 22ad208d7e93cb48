use serde::{Deserialize, Serialize};

/// Collection response of the REST backend.
///
/// List endpoints answer either with a bare JSON array or, when server-side
/// pagination is enabled, with a `{count, next, previous, results}` envelope.
/// Both shapes deserialize into this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Paginated {
        count: usize,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    /// Items carried by this response (one page for the paginated shape).
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Paginated { results, .. } => results,
        }
    }

    /// Total size of the collection as reported by the server.
    pub fn total_count(&self) -> usize {
        match self {
            ListEnvelope::Bare(items) => items.len(),
            ListEnvelope::Paginated { count, .. } => *count,
        }
    }

    /// Absolute URL of the following page, if the server paginates.
    pub fn next_page(&self) -> Option<&str> {
        match self {
            ListEnvelope::Bare(_) => None,
            ListEnvelope::Paginated { next, .. } => next.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_bare_array() {
        let env: ListEnvelope<Row> = serde_json::from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(env.total_count(), 2);
        assert_eq!(env.next_page(), None);
        assert_eq!(env.into_items(), vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_empty_bare_array() {
        let env: ListEnvelope<Row> = serde_json::from_str("[]").unwrap();
        assert_eq!(env.total_count(), 0);
        assert!(env.into_items().is_empty());
    }

    #[test]
    fn test_paginated_envelope() {
        let json = r#"{
            "count": 25,
            "next": "http://127.0.0.1:8000/api/products/?page=2",
            "previous": null,
            "results": [{"id": 7}]
        }"#;
        let env: ListEnvelope<Row> = serde_json::from_str(json).unwrap();
        assert_eq!(env.total_count(), 25);
        assert_eq!(
            env.next_page(),
            Some("http://127.0.0.1:8000/api/products/?page=2")
        );
        assert_eq!(env.into_items(), vec![Row { id: 7 }]);
    }

    #[test]
    fn test_envelope_without_links() {
        let env: ListEnvelope<Row> =
            serde_json::from_str(r#"{"count": 1, "results": [{"id": 3}]}"#).unwrap();
        assert_eq!(env.next_page(), None);
        assert_eq!(env.into_items().len(), 1);
    }
}

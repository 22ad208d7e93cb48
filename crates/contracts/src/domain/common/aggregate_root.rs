use super::HasId;

/// Root of a catalog aggregate.
///
/// Common metadata for every resource the dashboard reads from the REST API.
pub trait AggregateRoot: HasId {
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Human readable name used in confirmations and detail headers.
    fn display_name(&self) -> String;

    // ============================================================================
    // Static aggregate metadata
    // ============================================================================

    /// Aggregate index (e.g. "a002")
    fn aggregate_index() -> &'static str;

    /// Collection path segment under the API base (e.g. "products")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Product")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Products")
    fn list_name() -> &'static str;

    /// Confirmation text shown before deleting this record.
    fn delete_prompt(&self) -> String {
        format!(
            "Delete {} '{}'? This cannot be undone.",
            Self::element_name().to_lowercase(),
            self.display_name()
        )
    }
}

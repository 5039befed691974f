//! The JSON wrappers the panel puts around every resource.

use serde::{Deserialize, Serialize};

use crate::rest::pagination::Meta;

/// A single resource: `{"object": "...", "attributes": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The panel's type tag, e.g. `"user"` or `"server"`.
    #[serde(default)]
    pub object: String,
    /// The resource itself.
    pub attributes: T,
}

impl<T> Envelope<T> {
    /// Returns the unwrapped resource.
    #[must_use]
    pub fn into_attributes(self) -> T {
        self.attributes
    }
}

/// A list of resources with pagination metadata:
/// `{"object": "list", "data": [...], "meta": {"pagination": {...}}}`.
///
/// A few endpoints (file listings) omit `meta`; it then decodes to zeroed
/// counters, which read as a single last page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatedEnvelope<T> {
    /// The panel's type tag, normally `"list"`.
    #[serde(default)]
    pub object: String,
    /// The items, in server order.
    pub data: Vec<Envelope<T>>,
    /// Pagination metadata.
    #[serde(default)]
    pub meta: Meta,
}

impl<T> PaginatedEnvelope<T> {
    /// Flattens the items out of their envelopes, keeping server order.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Meta) {
        let items = self.data.into_iter().map(Envelope::into_attributes).collect();
        (items, self.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: u32,
    }

    #[test]
    fn test_envelope_unwraps_attributes() {
        let envelope: Envelope<Item> =
            serde_json::from_str(r#"{"object": "user", "attributes": {"id": 7}}"#).unwrap();
        assert_eq!(envelope.object, "user");
        assert_eq!(envelope.into_attributes(), Item { id: 7 });
    }

    #[test]
    fn test_paginated_envelope_keeps_server_order() {
        let json = r#"{
            "object": "list",
            "data": [
                {"object": "node", "attributes": {"id": 3}},
                {"object": "node", "attributes": {"id": 1}},
                {"object": "node", "attributes": {"id": 2}}
            ],
            "meta": {"pagination": {"total": 3, "count": 3, "per_page": 50, "current_page": 1, "total_pages": 1}}
        }"#;
        let envelope: PaginatedEnvelope<Item> = serde_json::from_str(json).unwrap();
        let (items, meta) = envelope.into_parts();

        let ids: Vec<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(meta.pagination.total, 3);
    }

    #[test]
    fn test_paginated_envelope_without_meta() {
        let json = r#"{"object": "list", "data": [{"object": "file_object", "attributes": {"id": 1}}]}"#;
        let envelope: PaginatedEnvelope<Item> = serde_json::from_str(json).unwrap();
        assert!(envelope.meta.pagination.is_last_page());
        assert_eq!(envelope.data.len(), 1);
    }

    #[test]
    fn test_envelope_requires_attributes() {
        let result: Result<Envelope<Item>, _> = serde_json::from_str(r#"{"object": "user"}"#);
        assert!(result.is_err());
    }
}

//! Path building infrastructure for REST resources.
//!
//! Resources declare their paths as constant [`ResourcePath`] tables; the
//! SDK picks the entry that matches the operation and the IDs at hand, then
//! interpolates those IDs into the template.
//!
//! # Example
//!
//! ```rust
//! use easypost::rest::{ResourcePath, ResourceOperation, get_path, build_path};
//! use easypost::HttpMethod;
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "shipments/{id}"),
//!     ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "shipments"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["id"]).unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("id", "shp_123");
//! assert_eq!(build_path(path.template, &ids), "shipments/shp_123");
//! ```

use crate::clients::HttpMethod;
use std::collections::HashMap;
use std::fmt::Display;

/// Operations that can be performed on a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Find a single resource by ID (GET /resources/{id}).
    Find,
    /// Create a new resource (POST /resources).
    Create,
}

impl ResourceOperation {
    /// Returns the operation name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::Create => "create",
        }
    }
}

/// A path configuration for a REST resource operation.
///
/// Templates use `{id_name}` placeholders for ID interpolation, e.g.
/// `shipments/{id}`.
///
/// # Example
///
/// ```rust
/// use easypost::rest::{ResourcePath, ResourceOperation};
/// use easypost::HttpMethod;
///
/// const SHIPMENT_FIND: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     ResourceOperation::Find,
///     &["id"],
///     "shipments/{id}",
/// );
/// assert_eq!(SHIPMENT_FIND.id_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// Required ID parameters in order.
    pub ids: &'static [&'static str],
    /// The URL template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Returns the number of required IDs for this path.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Checks if all required IDs are available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Selects the best matching path for an operation.
///
/// Among the paths for `operation` whose required IDs are all available,
/// the one with the most IDs wins.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Builds a URL from a template by interpolating IDs.
///
/// Each value is percent-encoded, so an ID can never add path segments.
///
/// # Example
///
/// ```rust
/// use easypost::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", "shp_1/../x");
///
/// assert_eq!(build_path("shipments/{id}/rates", &ids), "shipments/shp_1%2F..%2Fx/rates");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        let encoded = urlencoding::encode(&value.to_string()).into_owned();
        result = result.replace(&placeholder, &encoded);
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "shipments/{id}",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "shipments"),
    ];

    #[test]
    fn test_operation_names() {
        assert_eq!(ResourceOperation::Find.as_str(), "find");
        assert_eq!(ResourceOperation::Create.as_str(), "create");
    }

    #[test]
    fn test_get_path_requires_ids() {
        assert!(get_path(PATHS, ResourceOperation::Find, &[]).is_none());

        let path = get_path(PATHS, ResourceOperation::Find, &["id"]).unwrap();
        assert_eq!(path.template, "shipments/{id}");
    }

    #[test]
    fn test_get_path_filters_by_operation() {
        let path = get_path(PATHS, ResourceOperation::Create, &["id"]).unwrap();
        assert_eq!(path.template, "shipments");
        assert_eq!(path.http_method, HttpMethod::Post);
    }

    #[test]
    fn test_get_path_prefers_most_specific() {
        const NESTED: &[ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Find,
                &["shipment_id", "id"],
                "shipments/{shipment_id}/rates/{id}",
            ),
            ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "rates/{id}"),
        ];

        let path = get_path(NESTED, ResourceOperation::Find, &["shipment_id", "id"]).unwrap();
        assert_eq!(path.template, "shipments/{shipment_id}/rates/{id}");

        let path = get_path(NESTED, ResourceOperation::Find, &["id"]).unwrap();
        assert_eq!(path.template, "rates/{id}");
    }

    #[test]
    fn test_build_path_interpolates_ids() {
        let mut ids = HashMap::new();
        ids.insert("id", "shp_123");

        assert_eq!(build_path("shipments/{id}/buy", &ids), "shipments/shp_123/buy");
    }

    #[test]
    fn test_build_path_percent_encodes_values() {
        let mut ids = HashMap::new();
        ids.insert("id", "shp 1?x=y");

        assert_eq!(build_path("shipments/{id}", &ids), "shipments/shp%201%3Fx%3Dy");
    }

    #[test]
    fn test_build_path_leaves_unknown_placeholders() {
        let ids: HashMap<&str, String> = HashMap::new();
        assert_eq!(build_path("shipments/{id}", &ids), "shipments/{id}");
    }
}

//! Non-null field merging for resources updated in place.
//!
//! Several API actions return a full copy of the resource after the change.
//! [`merge`] overwrites the local resource's top-level fields with every
//! non-null field of that response, leaving everything else untouched.
//!
//! # Example
//!
//! ```rust
//! use easypost::rest::merge;
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Label {
//!     id: String,
//!     label_url: Option<String>,
//!     insurance: Option<String>,
//! }
//!
//! let mut label = Label {
//!     id: "shp_1".to_string(),
//!     label_url: None,
//!     insurance: Some("50.00".to_string()),
//! };
//!
//! merge(&mut label, &json!({"label_url": "https://x/label.zpl", "insurance": null})).unwrap();
//!
//! assert_eq!(label.label_url.as_deref(), Some("https://x/label.zpl"));
//! assert_eq!(label.insurance.as_deref(), Some("50.00"));
//! ```

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Overwrites `target`'s fields with the non-null fields of `source`.
///
/// Keys in `source` that `T` does not know are dropped when the merged
/// value is read back. A non-object `source` leaves `target` unchanged.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if `target` does not
/// serialize to a JSON object, or if a merged field has the wrong shape
/// for `T`.
pub fn merge<T>(target: &mut T, source: &Value) -> Result<(), serde_json::Error>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(source_map) = source else {
        return Ok(());
    };

    let mut current = serde_json::to_value(&*target)?;

    if let Value::Object(current_map) = &mut current {
        for (key, value) in source_map {
            if !value.is_null() {
                current_map.insert(key.clone(), value.clone());
            }
        }
    }

    *target = serde_json::from_value(current)?;
    Ok(())
}

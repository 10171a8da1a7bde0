//! REST Resource trait for API resources.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for EasyPost REST resources. Resources that implement this trait
//! gain `find()` and `create()`, plus path helpers for their own custom
//! actions.
//!
//! # Implementing a Resource
//!
//! 1. Define a struct with serde derives
//! 2. Implement the `RestResource` trait with associated types and constants
//! 3. Write custom actions on top of [`RestResource::instance_path`]
//!
//! # Example
//!
//! ```rust,ignore
//! use easypost::rest::{RestResource, ResourcePath, ResourceOperation};
//! use easypost::HttpMethod;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Parcel {
//!     pub id: Option<String>,
//!     pub weight: Option<f64>,
//! }
//!
//! impl RestResource for Parcel {
//!     type Id = String;
//!     type CreateParams = Parcel;
//!
//!     const NAME: &'static str = "Parcel";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "parcels/{id}"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "parcels"),
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id.clone()
//!     }
//! }
//!
//! let parcel = Parcel::find(&client, "prcl_123".to_string()).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, HttpResponse, RestClient, RestError};
use crate::rest::{
    build_path, get_path, ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
};

/// A REST resource that can be fetched and created.
///
/// # Associated Types
///
/// - `Id`: The type of the resource's identifier (EasyPost uses prefixed strings)
/// - `CreateParams`: The body sent by `create()`, wrapped in the resource key
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name (e.g., "Shipment")
/// - `PATHS`: Available paths for different operations
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Parameters for `create()` operations.
    type CreateParams: Serialize + Send + Sync;

    /// The singular name of the resource (e.g., "Shipment").
    ///
    /// Used in error messages and, lowercased, as the request body key.
    const NAME: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID if it exists.
    ///
    /// Returns `None` for resources that have not been created yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Returns the lowercase key used to wrap request bodies.
    #[must_use]
    fn resource_key() -> String {
        Self::NAME.to_lowercase()
    }

    /// Finds a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let shipment = Shipment::find(&client, "shp_123".to_string()).await?;
    /// println!("Tracking: {:?}", shipment.tracking_code);
    /// ```
    async fn find(
        client: &RestClient,
        id: Self::Id,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let id_string = id.to_string();
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id_string.clone());

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, ResourceOperation::Find, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: ResourceOperation::Find.as_str(),
            },
        )?;

        let full_path = build_path(path.template, &ids);

        tracing::debug!(resource = Self::NAME, id = %id_string, "Finding resource");

        let response = dispatch(client, path, &full_path, None)
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&id_string)))?;

        ResourceResponse::from_http_response(response, None)
    }

    /// Creates a new resource from the given parameters.
    ///
    /// The parameters are sent wrapped in the resource key, e.g.
    /// `{"shipment": {...}}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the API rejects the parameters.
    /// Returns [`ResourceError::PathResolutionFailed`] if no create path exists.
    async fn create(
        client: &RestClient,
        params: &Self::CreateParams,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let path = get_path(Self::PATHS, ResourceOperation::Create, &[]).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: ResourceOperation::Create.as_str(),
            },
        )?;

        let mut body_map = serde_json::Map::new();
        body_map.insert(Self::resource_key(), serialize_body(params)?);
        let body = Value::Object(body_map);

        tracing::debug!(resource = Self::NAME, "Creating resource");

        let response = dispatch(client, path, path.template, Some(body))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?;

        ResourceResponse::from_http_response(response, None)
    }

    /// Builds the path of a custom action on this instance.
    ///
    /// `template` uses the `{id}` placeholder, e.g. `shipments/{id}/buy`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no ID.
    fn instance_path(
        &self,
        template: &str,
        operation: &'static str,
    ) -> Result<String, ResourceError> {
        let id = self.get_id().ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation,
        })?;

        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id.to_string());

        Ok(build_path(template, &ids))
    }
}

/// Sends a request with the verb declared by `path`.
async fn dispatch(
    client: &RestClient,
    path: &ResourcePath,
    full_path: &str,
    body: Option<Value>,
) -> Result<HttpResponse, RestError> {
    match path.http_method {
        HttpMethod::Get => client.get(full_path, None).await,
        HttpMethod::Post => {
            let body = body.unwrap_or_else(|| Value::Object(serde_json::Map::new()));
            client.post(full_path, body).await
        }
    }
}

/// Serializes a request body value.
pub(crate) fn serialize_body<T: Serialize>(value: &T) -> Result<Value, ResourceError> {
    serde_json::to_value(value).map_err(|e| {
        ResourceError::Http(crate::clients::HttpError::Response(
            crate::clients::HttpResponseError {
                code: 400,
                message: format!("Failed to serialize request body: {e}"),
                error_reference: None,
            },
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HttpMethod;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct MockParcel {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        weight: f64,
    }

    impl RestResource for MockParcel {
        type Id = String;
        type CreateParams = Self;

        const NAME: &'static str = "Parcel";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Find,
                &["id"],
                "parcels/{id}",
            ),
            ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "parcels"),
        ];

        fn get_id(&self) -> Option<Self::Id> {
            self.id.clone()
        }
    }

    #[test]
    fn test_resource_key_lowercase() {
        assert_eq!(MockParcel::resource_key(), "parcel");
    }

    #[test]
    fn test_instance_path_requires_id() {
        let parcel = MockParcel {
            id: None,
            weight: 1.0,
        };

        assert!(matches!(
            parcel.instance_path("parcels/{id}/verify", "verify"),
            Err(ResourceError::PathResolutionFailed {
                resource: "Parcel",
                operation: "verify"
            })
        ));
    }

    #[test]
    fn test_instance_path_interpolates_and_encodes_id() {
        let parcel = MockParcel {
            id: Some("prcl 1".to_string()),
            weight: 1.0,
        };

        assert_eq!(
            parcel.instance_path("parcels/{id}/verify", "verify").unwrap(),
            "parcels/prcl%201/verify"
        );
    }


    #[test]
    fn test_serialize_body_produces_json_value() {
        let parcel = MockParcel {
            id: None,
            weight: 10.5,
        };

        assert_eq!(
            serialize_body(&parcel).unwrap(),
            serde_json::json!({"weight": 10.5})
        );
    }

    #[test]
    fn test_resource_trait_bounds() {
        fn assert_trait_bounds<T: RestResource>() {}
        assert_trait_bounds::<MockParcel>();
    }
}

//! Admin API request construction
//!
//! Builds fully-formed request descriptions (method, collection path,
//! parameters) for the `streaming_profiles` collection. Required
//! identifiers are validated here, before any network interaction.

use serde_json::{Map, Value};

use crate::error::AdminError;
use crate::transformation::Representation;

/// Extra parameters forwarded verbatim to the service.
pub type Options = Map<String, Value>;

/// Collection managed by the streaming profile client.
pub const STREAMING_PROFILES: &str = "streaming_profiles";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A request description ready for the transport: method, path segments
/// under the account root, and parameters. The transport sends parameters
/// as a JSON body for POST/PUT and as query parameters otherwise.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: Vec<String>,
    params: Map<String, Value>,
}

impl ApiRequest {
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    #[must_use]
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        self.path.iter().map(String::as_str)
    }

    /// Path under the account root, e.g. `streaming_profiles/custom_square`.
    #[must_use]
    pub fn uri(&self) -> String {
        self.path.join("/")
    }

    #[must_use]
    pub const fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// POST `streaming_profiles` creating a named profile.
    ///
    /// `representations` must be non-empty; each entry serializes to a
    /// mapping with a `transformation` key.
    pub fn create_streaming_profile(
        name: &str,
        display_name: Option<&str>,
        representations: &[Representation],
        options: Options,
    ) -> Result<Self, AdminError> {
        require_name(name)?;
        if representations.is_empty() {
            return Err(AdminError::Validation(
                "representations must not be empty".to_string(),
            ));
        }
        let mut params = profile_params(display_name, representations, options);
        params.insert("name".to_string(), Value::String(name.to_string()));
        Ok(Self {
            method: Method::Post,
            path: vec![STREAMING_PROFILES.to_string()],
            params,
        })
    }

    /// GET `streaming_profiles/{name}`.
    pub fn get_streaming_profile(name: &str) -> Result<Self, AdminError> {
        require_name(name)?;
        Ok(Self {
            method: Method::Get,
            path: vec![STREAMING_PROFILES.to_string(), name.to_string()],
            params: Map::new(),
        })
    }

    /// GET `streaming_profiles`, addressing the whole collection.
    #[must_use]
    pub fn list_streaming_profiles() -> Self {
        Self {
            method: Method::Get,
            path: vec![STREAMING_PROFILES.to_string()],
            params: Map::new(),
        }
    }

    /// PUT `streaming_profiles/{name}`, replacing the representation set.
    ///
    /// An empty `representations` slice is allowed and leaves the
    /// representation set untouched (only `display_name`/options are sent).
    pub fn update_streaming_profile(
        name: &str,
        display_name: Option<&str>,
        representations: &[Representation],
        options: Options,
    ) -> Result<Self, AdminError> {
        require_name(name)?;
        Ok(Self {
            method: Method::Put,
            path: vec![STREAMING_PROFILES.to_string(), name.to_string()],
            params: profile_params(display_name, representations, options),
        })
    }

    /// DELETE `streaming_profiles/{name}`.
    pub fn delete_streaming_profile(name: &str) -> Result<Self, AdminError> {
        require_name(name)?;
        Ok(Self {
            method: Method::Delete,
            path: vec![STREAMING_PROFILES.to_string(), name.to_string()],
            params: Map::new(),
        })
    }
}

fn require_name(name: &str) -> Result<(), AdminError> {
    if name.trim().is_empty() {
        return Err(AdminError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

/// Shared body shape of create and update: options first, then the named
/// fields so they cannot be clobbered by the options bag.
fn profile_params(
    display_name: Option<&str>,
    representations: &[Representation],
    options: Options,
) -> Map<String, Value> {
    let mut params = options;
    if let Some(display_name) = display_name {
        params.insert(
            "display_name".to_string(),
            Value::String(display_name.to_string()),
        );
    }
    if !representations.is_empty() {
        params.insert(
            "representations".to_string(),
            Value::Array(representations.iter().map(Representation::to_value).collect()),
        );
    }
    params
}

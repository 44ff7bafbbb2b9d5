// MediaCloud Admin API Client
//
// Administrative client for the MediaCloud media-management service,
// covering the streaming_profiles resource collection.
//
// Architecture:
// - admin: request construction, response interpretation, operation surface
// - transport: the HTTP seam (trait + shared reqwest implementation)
// - auth: request signing seam (basic-auth implementation)
// - config: static credentials and endpoint settings
// - transformation: encoding-target descriptors serialized into profiles

// Shared error types
pub mod error;

// Configuration and signing
pub mod auth;
pub mod config;

// Wire layer
pub mod transport;

// Admin API surface
pub mod admin;

// Value objects
pub mod transformation;

// Re-export the public surface for convenience
pub use admin::request::{ApiRequest, Method, Options};
pub use admin::response::ApiResponse;
pub use admin::streaming_profiles::StreamingProfileClient;
pub use auth::{BasicAuthSigner, RequestSigner};
pub use config::ApiConfig;
pub use error::AdminError;
pub use transformation::{Representation, Transformation};
pub use transport::{HttpTransport, RawResponse, Transport};

//! Admin API surface
//!
//! Request construction, response interpretation, and the public operation
//! surface for managed resource collections.

pub mod request;
pub mod response;
pub mod streaming_profiles;

pub use request::{ApiRequest, Method, Options};
pub use response::ApiResponse;
pub use streaming_profiles::StreamingProfileClient;

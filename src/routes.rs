pub mod index;
pub mod modal;
pub mod range;

/// JSON envelope shared by the API routes. Failures carry a message the
/// page renders as a banner.
#[derive(serde::Serialize)]
#[serde(untagged)]
pub enum Response<T> {
    Success(T),
    Error { error: String },
}

pub const UNAVAILABLE_MESSAGE: &str = "Price data is currently unavailable.";

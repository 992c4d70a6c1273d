//! Normalized HTTP layer: the single chokepoint for all backend calls.

mod client;
mod error;

pub use client::{FileUpload, HttpClient, RequestOptions};
pub use error::{HttpError, STATUS_TIMEOUT, STATUS_TRANSPORT};

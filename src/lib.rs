pub mod api;
pub mod commands;
pub mod config;
pub mod http;

pub use config::ApiConfig;
pub use http::{FileUpload, HttpClient, HttpError, RequestOptions};

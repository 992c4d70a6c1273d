//! Typed bindings for the backend API, one submodule per endpoint group.
//! Each binding is a thin struct over [`crate::http::HttpClient`]; the
//! backend owns all generation and analysis logic.

mod analyzer;
mod auth;
mod generator;
pub mod types;
mod user;

pub use analyzer::Analyzer;
pub use auth::Auth;
pub use generator::Generator;
pub use user::{UserApi, UserData};

#[cfg(test)]
pub use user::MockUserData;

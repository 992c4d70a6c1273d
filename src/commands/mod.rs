//! Command handlers for the CLI binary. Each handler owns the user-facing
//! messaging for one subcommand; failures from the client surface here.

mod analyze;
mod auth;
mod datasets;
mod generate;

pub use analyze::analyze;
pub use auth::{login, logout, me, signup};
pub use datasets::{list_analyses, list_datasets};
pub use generate::{GenerateMode, generate};

//! State machines and pure transforms behind the operations dashboard.
//!
//! Nothing in here touches the DOM, so the same code drives the Yew hooks
//! in `ui` and runs natively under tokio in tests.

pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod fetcher;
pub mod mutation;
#[cfg(feature = "telemetry")]
pub mod telemetry;
pub mod view_model;

pub use auth::AuthStatus;
pub use config::Config;
pub use error::{CoreError, error_message};
pub use fetch::{FetchMachine, FetchSnapshot, FetchState, Ticket, Trigger};
pub use fetcher::Fetcher;
pub use mutation::{MutationMachine, MutationSnapshot, Mutator};

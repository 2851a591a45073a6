//! Headless core of a single-user media browsing front end.
//!
//! Two components do the work: a catalog aggregation facade over a movie
//! catalog API (with a built-in seed fallback, so browsing never fails),
//! and a session gate driving a message-based view state machine. All
//! rendering stays outside; the crate exposes the state a front end binds
//! to and the actions it dispatches.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use app::AppController;
pub use config::Config;
pub use error::{AppError, AppResult};

//! Core library for the task manager
//!
//! This crate contains everything except the terminal shell:
//! - Task model, filtering and the remote task service
//! - View state machines (list, form, home, navbar)
//! - Client-side routing and the app shell that ties them together

pub mod app;
pub mod config;
pub mod error;
pub mod routing;
pub mod task;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

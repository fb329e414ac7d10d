//! Task module
//!
//! This module contains the task model, the title filter and the remote
//! task service.

mod filter;
mod http;
mod model;
mod service;

pub use filter::filter_tasks;
pub use http::HttpTaskService;
pub use model::*;
pub use service::TaskService;

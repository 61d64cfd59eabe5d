#![doc = "The `taskdesk` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, in-memory stores, credential checks,"]
#![doc = "routing configuration and error handling for the taskdesk HTTP API."]
#![doc = "It is used by the main binary (`main.rs`) to construct and run the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod store;

pub use crate::error::AppError;
pub use crate::store::{TaskStore, UserStore};

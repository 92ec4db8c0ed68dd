pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod gallery;
pub mod logging;

pub use error::{EnrollError, Result};

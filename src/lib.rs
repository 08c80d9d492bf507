pub mod cli;
pub mod clipboard;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod publish;
pub mod ui;

pub use error::{NextVersionError, Result};

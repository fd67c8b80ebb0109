pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod games;
pub mod gui;
pub mod manager;

pub use error::{Error, Result};

pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reveal;
pub mod services;

pub use error::{AppError, AppResult};

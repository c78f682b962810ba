// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod pages;
pub mod runner;

pub use error::{AppError, FetchError};

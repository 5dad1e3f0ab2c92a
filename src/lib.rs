pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod utils;

pub use catalog::{Catalog, Directory};
pub use error::{Error, Result};

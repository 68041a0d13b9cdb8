pub mod config;
pub mod error;
pub mod filter;
pub mod keyfile;
pub mod models;

pub use error::CoreError;

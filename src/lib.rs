pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod figure;
pub mod logger;
pub mod panel;
pub mod style;

pub use crate::data::ResultTable;
pub use crate::error::{Error, Result};

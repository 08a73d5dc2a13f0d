pub mod api;
pub mod components;
mod configs;
mod error;
pub mod theme;
mod utils;
pub mod views;

#[cfg(test)]
mod tests;

pub use crate::configs::api_base_url;
pub use crate::error::{ApiError, ThemeError};
pub use crate::utils::sleep;

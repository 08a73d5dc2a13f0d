mod api;
mod theme;

pub use api::ApiError;
pub use theme::ThemeError;

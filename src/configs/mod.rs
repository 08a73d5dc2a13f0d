mod env_validate;

pub use env_validate::api_base_url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Base URL of the student-record service. Overridable through
/// `TASK_API_URL`; anything that does not look like an http(s) URL falls
/// back to the development default.
pub fn api_base_url() -> String {
    match configured_api_base_url() {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url,
        Some(url) => {
            log::warn!(
                "TASK_API_URL {:?} is not an http(s) URL, using {}",
                url,
                DEFAULT_API_BASE_URL
            );
            DEFAULT_API_BASE_URL.to_string()
        }
        None => {
            log::debug!("TASK_API_URL not set, using {}", DEFAULT_API_BASE_URL);
            DEFAULT_API_BASE_URL.to_string()
        }
    }
}

// The browser build has no process environment, so the override is baked in
// at compile time there.
#[cfg(target_arch = "wasm32")]
fn configured_api_base_url() -> Option<String> {
    option_env!("TASK_API_URL").map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn configured_api_base_url() -> Option<String> {
    std::env::var("TASK_API_URL").ok()
}

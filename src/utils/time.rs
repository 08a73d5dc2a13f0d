use std::time::Duration;

/// Suspends the calling task for roughly the given duration. On the web this
/// rides `setTimeout`, so accuracy is whatever the browser grants a
/// background timer.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                .ok()
        });
        if scheduled.is_none() {
            // No window or the timer was refused: resolve now rather than
            // leaving the caller suspended forever.
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Native arm. Blocks the calling thread for the whole duration, which
/// stalls whatever executor polls it; only the wasm arm above is suitable
/// for UI work.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    std::thread::sleep(duration);
}

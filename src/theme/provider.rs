use dioxus::prelude::*;

use crate::theme::environment::session_environment;
use crate::theme::store::ThemeStore;

// Copy handles all point at the one session store, so every holder observes
// the same value and re-renders after a toggle.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    store: Signal<ThemeStore>,
}

impl ThemeHandle {
    pub fn is_dark(&self) -> bool {
        self.store.read().is_dark()
    }

    pub fn toggle(&mut self) {
        self.store.write().toggle();
    }
}

// Mount once, at the top of the app.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let store = use_signal(|| ThemeStore::initialize(session_environment()));
    use_context_provider(|| ThemeHandle { store });

    rsx! {
        {children}
    }
}

/// Panics unless a [`ThemeProvider`] sits above the calling component.
pub fn use_theme() -> ThemeHandle {
    use_hook(|| {
        try_consume_context::<ThemeHandle>()
            .expect("use_theme must be called under a ThemeProvider; wrap the app in one")
    })
}

use dioxus::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::theme::use_theme;

#[component]
pub fn Header() -> Element {
    let mut theme = use_theme();

    rsx! {
        header { class: "bg-white dark:bg-gray-800 shadow-sm transition-colors duration-200",
            div { class: "max-w-4xl mx-auto px-4 py-4 flex justify-between items-center",
                h1 { class: "text-2xl font-bold dark:text-white", "Task Manager" }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Sm,
                    onclick: move |_| theme.toggle(),
                    if theme.is_dark() {
                        "☀️ Light"
                    } else {
                        "🌙 Dark"
                    }
                }
            }
        }
    }
}

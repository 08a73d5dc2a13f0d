use dioxus::prelude::*;

use crate::components::{Articles, TaskManager};

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "py-8",
            div { class: "max-w-4xl mx-auto px-4",
                TaskManager {}
                Articles {}
            }
        }
    }
}

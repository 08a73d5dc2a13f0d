use chrono::{Datelike, Local};
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = Local::now().year();

    rsx! {
        footer { class: "bg-gray-800 text-white py-6 mt-8",
            div { class: "max-w-4xl mx-auto px-4 flex flex-col md:flex-row justify-between items-center",
                p { class: "text-sm", "© {year} Task Manager App. All rights reserved." }
                div { class: "flex gap-4 mt-4 md:mt-0 text-sm",
                    a { href: "#", class: "hover:text-gray-300", "Privacy" }
                    a { href: "#", class: "hover:text-gray-300", "Terms" }
                    a { href: "#", class: "hover:text-gray-300", "Contact" }
                }
            }
        }
    }
}

use dioxus::prelude::*;

#[component]
pub fn Card(title: String, children: Element) -> Element {
    rsx! {
        section { class: "bg-white dark:bg-gray-800 rounded-lg shadow-md p-6 mb-8 transition-colors duration-200",
            h2 { class: "text-xl font-bold mb-4 text-gray-900 dark:text-gray-100", "{title}" }
            {children}
        }
    }
}

use chrono::{DateTime, Local};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{Button, ButtonSize, ButtonVariant, Card};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(id: u32, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
            created_at: Local::now(),
        }
    }
}

// Blank and whitespace-only drafts are ignored.
fn normalized_title(raw: &str) -> Option<String> {
    let title = raw.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[component]
pub fn TaskManager() -> Element {
    let mut tasks = use_signal(Vec::<Task>::new);
    let mut draft = use_signal(String::new);
    let mut next_id = use_signal(|| 1u32);

    let mut add_task = move || {
        let title = match normalized_title(&draft.read()) {
            Some(title) => title,
            None => return,
        };
        let id = *next_id.read();
        next_id += 1;
        tasks.with_mut(|list| list.push(Task::new(id, title)));
        draft.set(String::new());
    };

    let mut toggle_task = move |id: u32| {
        tasks.with_mut(|list| {
            if let Some(task) = list.iter_mut().find(|task| task.id == id) {
                task.completed = !task.completed;
            }
        });
    };

    let mut remove_task = move |id: u32| {
        tasks.with_mut(|list| list.retain(|task| task.id != id));
    };

    let list = tasks.read();
    let done = list.iter().filter(|task| task.completed).count();
    let total = list.len();

    let rows = list.iter().map(|task| {
        let task_id = task.id;
        let created = task.created_at.format("%b %e, %H:%M").to_string();
        let title_class = if task.completed {
            "text-gray-400 dark:text-gray-500 line-through"
        } else {
            "text-gray-900 dark:text-gray-100"
        };
        rsx! {
            li {
                key: "{task.id}",
                class: "flex items-center justify-between gap-3 py-3 border-b border-gray-200 dark:border-gray-700 last:border-b-0",
                div { class: "flex items-center gap-3 min-w-0",
                    input {
                        r#type: "checkbox",
                        checked: task.completed,
                        onchange: move |_| toggle_task(task_id),
                        class: "h-4 w-4 rounded border-gray-300 dark:border-gray-600",
                    }
                    span { class: "truncate {title_class}", "{task.title}" }
                }
                div { class: "flex items-center gap-3 shrink-0",
                    span { class: "text-xs text-gray-500 dark:text-gray-500", "{created}" }
                    Button {
                        variant: ButtonVariant::Danger,
                        size: ButtonSize::Sm,
                        onclick: move |_| remove_task(task_id),
                        "Delete"
                    }
                }
            }
        }
    });

    rsx! {
        Card { title: "My Tasks",
            div { class: "flex gap-3 mb-6",
                input {
                    r#type: "text",
                    placeholder: "What needs doing?",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            add_task();
                        }
                    },
                    class: "flex-1 px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent dark:bg-gray-700 dark:border-gray-600 dark:text-gray-100 dark:placeholder-gray-400",
                }
                Button { onclick: move |_| add_task(), "Add" }
            }

            if total == 0 {
                p { class: "text-center py-6 text-gray-500 dark:text-gray-400",
                    "No tasks yet. Add one above to get started."
                }
            } else {
                ul { class: "mb-4", {rows} }
                p { class: "text-sm text-gray-600 dark:text-gray-400",
                    "{done} of {total} tasks completed"
                }
            }
        }
    }
}

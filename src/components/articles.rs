use std::time::Duration;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{Button, ButtonSize, Card};
use crate::utils::sleep;

/// How long the simulated article fetch takes. Long enough for the loading
/// state to be visible, short enough not to annoy.
const FETCH_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Beginner => {
                "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200"
            }
            Difficulty::Intermediate => {
                "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-200"
            }
            Difficulty::Advanced => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-200",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub body: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub read_time: String,
}

impl Article {
    fn new(
        id: u32,
        title: &str,
        body: &str,
        category: &str,
        difficulty: Difficulty,
        read_time: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            body: body.to_string(),
            category: category.to_string(),
            difficulty,
            read_time: read_time.to_string(),
        }
    }

    /// The curated feed shown until the remote posts endpoint is wired in.
    pub fn curated() -> Vec<Self> {
        vec![
            Article::new(
                1,
                "Getting Started with Dioxus Hooks",
                "Hooks keep component state and side effects next to the view that uses \
                 them. Learn use_signal, use_effect and how to factor your own hooks out \
                 of repeated patterns.",
                "Dioxus",
                Difficulty::Beginner,
                "5 min read",
            ),
            Article::new(
                2,
                "CSS Grid vs Flexbox: When to Use What",
                "Understanding the differences between CSS Grid and Flexbox helps you \
                 choose the right layout method. Grid excels at 2D layouts while Flexbox \
                 is perfect for 1D layouts.",
                "CSS",
                Difficulty::Intermediate,
                "7 min read",
            ),
            Article::new(
                3,
                "Async Rust in the Browser",
                "Futures compile to WebAssembly just fine, but the event loop belongs to \
                 the browser. See how spawned tasks, timers and fetch calls fit together \
                 without blocking a frame.",
                "Rust",
                Difficulty::Intermediate,
                "8 min read",
            ),
            Article::new(
                4,
                "Building Responsive Layouts with Tailwind CSS",
                "Tailwind provides utility-first classes that make responsive design \
                 simple. Learn how to create mobile-first designs with breakpoint \
                 prefixes.",
                "Tailwind",
                Difficulty::Beginner,
                "6 min read",
            ),
        ]
    }

    /// Case-insensitive substring match over title, body and category.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.body.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }
}

#[component]
pub fn Articles() -> Element {
    let mut articles = use_signal(Vec::<Article>::new);
    // Starts true so the very first frame is the loading state, not an empty
    // grid waiting for the effect to kick in.
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut search = use_signal(String::new);

    let load_articles = move || {
        spawn(async move {
            loading.set(true);
            error.set(None);
            log::debug!("loading curated articles");

            // Stand-in for the remote fetch: same latency, local data.
            sleep(FETCH_DELAY).await;
            articles.set(Article::curated());
            loading.set(false);
        });
    };

    use_effect(move || {
        load_articles();
    });

    if *loading.read() {
        return rsx! {
            Card { title: "Programming Articles",
                div { class: "flex items-center justify-center py-12",
                    div { class: "animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600" }
                    span { class: "ml-3 text-gray-600 dark:text-gray-400", "Loading articles..." }
                }
            }
        };
    }

    let failure = error.read();
    if let Some(message) = failure.as_ref() {
        return rsx! {
            Card { title: "Programming Articles",
                div { class: "text-center py-8",
                    p { class: "text-red-600 dark:text-red-400 mb-4", "Error: {message}" }
                    Button { onclick: move |_| load_articles(), "Retry" }
                }
            }
        };
    }

    let term = search();
    let all = articles.read();
    let filtered: Vec<Article> = all.iter().filter(|a| a.matches(&term)).cloned().collect();
    let shown = filtered.len();
    let total = all.len();

    let cards = filtered.into_iter().map(|post| {
        let badge = post.difficulty.badge_class();
        let level = post.difficulty.label();
        rsx! {
            article {
                key: "{post.id}",
                class: "border border-gray-200 dark:border-gray-700 rounded-lg p-6 hover:shadow-lg transition-all duration-200 bg-white dark:bg-gray-800",
                div { class: "flex items-center gap-2 mb-3",
                    span { class: "px-3 py-1 text-xs font-medium bg-blue-100 text-blue-800 rounded-full dark:bg-blue-900 dark:text-blue-200",
                        "{post.category}"
                    }
                    span { class: "px-3 py-1 text-xs font-medium rounded-full {badge}",
                        "{level}"
                    }
                }
                h3 { class: "font-bold text-lg mb-3 text-gray-900 dark:text-gray-100 leading-tight",
                    "{post.title}"
                }
                p { class: "text-gray-600 dark:text-gray-400 text-sm leading-relaxed mb-4",
                    "{post.body}"
                }
                div { class: "flex items-center justify-between pt-4 border-t border-gray-200 dark:border-gray-700",
                    span { class: "text-xs text-gray-500 dark:text-gray-500", "📖 {post.read_time}" }
                    Button { size: ButtonSize::Sm, "Read More" }
                }
            }
        }
    });

    rsx! {
        Card { title: "Latest Programming Articles",
            div { class: "mb-6",
                input {
                    r#type: "text",
                    placeholder: "Search articles by title, content, or category...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                    class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent dark:bg-gray-700 dark:border-gray-600 dark:text-gray-100 dark:placeholder-gray-400",
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-6 mb-6",
                if shown == 0 {
                    div { class: "col-span-full text-center py-8",
                        p { class: "text-gray-500 dark:text-gray-400",
                            "No articles found matching your search."
                        }
                    }
                } else {
                    {cards}
                }
            }

            div { class: "mt-6 p-4 bg-gray-50 dark:bg-gray-700 rounded-lg",
                p { class: "text-sm text-gray-600 dark:text-gray-400 text-center",
                    "📚 Showing {shown} of {total} programming articles"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_feed_is_stable() {
        let articles = Article::curated();
        assert_eq!(articles.len(), 4);

        let mut ids: Vec<u32> = articles.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4, "article ids must be unique");
    }

    #[test]
    fn matches_is_case_insensitive_over_all_fields() {
        let article = Article::new(
            9,
            "Ownership and Borrowing",
            "The borrow checker is the compiler feature everyone meets first.",
            "Rust",
            Difficulty::Advanced,
            "9 min read",
        );

        assert!(article.matches("ownership"));
        assert!(article.matches("OWNERSHIP"));
        assert!(article.matches("borrow checker"));
        assert!(article.matches("rust"));
        assert!(article.matches(""));
        assert!(!article.matches("javascript"));
    }

    #[test]
    fn badge_class_tracks_difficulty() {
        assert!(Difficulty::Beginner.badge_class().contains("green"));
        assert!(Difficulty::Intermediate.badge_class().contains("yellow"));
        assert!(Difficulty::Advanced.badge_class().contains("red"));
    }
}

mod articles;
mod button;
mod card;
mod task_manager;

pub use articles::Articles;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use task_manager::TaskManager;

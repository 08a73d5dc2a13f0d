pub mod common;

mod theme_store;

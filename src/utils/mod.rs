mod time;

pub use time::sleep;

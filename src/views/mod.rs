mod footer;
mod header;
mod home;

pub use footer::Footer;
pub use header::Header;
pub use home::Home;

//! Page components.
//!
//! Static content only: no page holds local state. Every embedded asset goes
//! through the asset resolver so the same markup works at `/` and under a
//! production subdirectory.

mod about;
mod blog;
mod contact;
mod gallery;
mod home;
mod not_found;
mod works;

pub use about::About;
pub use blog::{Blog, BlogVideo};
pub use contact::Contact;
pub use gallery::Gallery;
pub use home::Home;
pub use not_found::NotFound;
pub use works::Works;

//! Shared UI components: the shell layout, navbar and theme toggle.

pub mod layout;
pub mod nav;
pub mod theme;

pub use layout::{Footer, Shell};
pub use nav::Navbar;
pub use theme::ThemeToggle;

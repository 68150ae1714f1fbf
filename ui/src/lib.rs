//! Shared storefront UI: the navigation bar and the page shell around it.

mod navbar;
pub use navbar::{Navbar, NavigationBar};

mod layout;
pub use layout::Layout;

mod auth;
pub use auth::*;

pub mod motion;
pub mod nav;

mod cart;
mod login;
mod pages;
mod profile;

pub use cart::CartPage;
pub use login::LoginPage;
pub use pages::{AboutPage, ContactPage, HomePage, ShopPage};
pub use profile::ProfilePage;

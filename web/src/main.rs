use auth::{use_auth, AuthProvider};
use dioxus::prelude::*;

use ui::Layout;
use views::{AboutPage, CartPage, ContactPage, HomePage, LoginPage, ProfilePage, ShopPage};

mod auth;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AuthGuard)]
        #[layout(Storefront)]
            #[route("/")]
            HomePage {},
            #[route("/shop")]
            ShopPage {},
            #[route("/about")]
            AboutPage {},
            #[route("/contact")]
            ContactPage {},
            #[route("/profile")]
            ProfilePage {},
            #[route("/cart")]
            CartPage {},
            #[route("/login")]
            LoginPage {},
}

impl Route {
    /// Where the guard sends the visitor instead, if anywhere.
    fn redirect_for(&self, is_logged_in: bool) -> Option<Route> {
        match self {
            Route::ProfilePage {} | Route::CartPage {} if !is_logged_in => Some(Route::LoginPage {}),
            Route::LoginPage {} if is_logged_in => Some(Route::HomePage {}),
            _ => None,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "MsCafe" }

        AuthProvider { Router::<Route> {} }
    }
}

#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let current = use_route::<Route>();

    // Re-checked whenever the session or the route changes
    use_effect(use_reactive!(|current| {
        if let Some(target) = current.redirect_for(auth.is_logged_in()) {
            nav.replace(target);
        }
    }));

    rsx! {
        Outlet::<Route> {}
    }
}

#[component]
fn Storefront() -> Element {
    rsx! {
        Layout { Outlet::<Route> {} }
    }
}

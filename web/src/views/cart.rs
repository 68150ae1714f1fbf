use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn CartPage() -> Element {
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "Your cart" }
            p { class: "page-muted", "Your cart is empty." }
            Link { class: "page-action", to: Route::ShopPage {}, "Continue shopping" }
        }
    }
}

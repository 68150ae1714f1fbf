use dioxus::prelude::*;

use crate::auth::use_auth;

#[component]
pub fn ProfilePage() -> Element {
    let auth = use_auth();
    let username = auth.username().unwrap_or_default();

    rsx! {
        section { class: "page",
            h1 { class: "page-title", "Profile" }
            p { "Signed in as " strong { "{username}" } }
        }
    }
}

use dioxus::prelude::*;

#[component]
fn Page(#[props(into)] title: String, children: Element) -> Element {
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "{title}" }
            {children}
        }
    }
}

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Page { title: "Welcome to MsCafe",
            p { "Fresh coffee, pastries and beans, delivered to your door." }
        }
    }
}

#[component]
pub fn ShopPage() -> Element {
    rsx! {
        Page { title: "Shop",
            p { "Browse our roasts, brewing gear and gift boxes." }
        }
    }
}

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Page { title: "About",
            p { "A small neighbourhood cafe that started roasting its own beans." }
        }
    }
}

#[component]
pub fn ContactPage() -> Element {
    rsx! {
        Page { title: "Contact",
            p { "Drop by the counter or write to hello@mscafe.example." }
        }
    }
}

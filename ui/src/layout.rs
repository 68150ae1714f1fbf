use crate::navbar::Navbar;
use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      Navbar {}

      // Offset below the fixed header
      main { class: "storefront-main", {children} }
    }
}

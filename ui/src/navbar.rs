use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::motion::NavbarMotion;
use crate::nav::{MenuState, NavItem, Placement, SessionView, BRAND};

/// Navbar wired to the session store found in context.
#[component]
pub fn Navbar() -> Element {
    let mut auth = use_auth();
    let session = SessionView::from_logged_in(auth.is_logged_in());

    rsx! {
        NavigationBar { session, on_logout: move |_| auth.logout() }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    /// Which link set to show
    pub session: SessionView,
    /// Receives the logout intent; never awaited
    pub on_logout: EventHandler,
    /// Entrance, panel and hover timings
    #[props(optional, default)]
    pub motion: NavbarMotion,
}

#[component]
pub fn NavigationBar(props: Props) -> Element {
    let mut menu = use_signal(MenuState::default);
    let items = props.session.items();
    let on_logout = props.on_logout;

    let mut select = move |item: NavItem, placement: Placement| {
        let outcome = item.activate(placement, menu());
        if outcome.menu != menu() {
            menu.set(outcome.menu);
        }
        if outcome.intent.is_some() {
            on_logout.call(());
        }
    };

    let entrance_style = props.motion.entrance.style();
    let panel_style = props.motion.panel.style();
    let scale_style = props.motion.scale_style();

    rsx! {
      header {
        class: "navbar navbar-enter",
        style: "{entrance_style} {scale_style}",

        div { class: "navbar-brand scalable tappable",
          Link { to: BRAND.path, {BRAND.label} }
        }

        nav { class: "navbar-links",
          for item in items.iter().copied() {
            NavEntry {
              key: "{item:?}",
              item,
              class: "navbar-link scalable",
              onselect: move |_| select(item, Placement::Desktop),
            }
          }
        }

        button {
          class: "navbar-toggle scalable tappable",
          aria_label: "Toggle menu",
          aria_expanded: menu().is_open(),
          onclick: move |_| {
              let next = menu().toggle();
              debug!(open = next.is_open(), "Menu toggled");
              menu.set(next);
          },
          "☰"
        }
      }

      if menu().is_open() {
        div { class: "navbar-panel navbar-panel-enter", style: "{panel_style} {scale_style}",
          for item in items.iter().copied() {
            NavEntry {
              key: "{item:?}",
              item,
              class: "navbar-panel-link panel-scalable",
              onselect: move |_| select(item, Placement::MobilePanel),
            }
          }
        }
      }
    }
}

#[component]
fn NavEntry(item: NavItem, class: &'static str, onselect: EventHandler) -> Element {
    match item {
        NavItem::Link(link) => rsx! {
          div { class, "data-nav-item": link.label,
            Link { to: link.path, onclick: move |_| onselect.call(()), {link.label} }
          }
        },
        NavItem::Logout => rsx! {
          div {
            class,
            "data-nav-item": item.label(),
            onclick: move |_| onselect.call(()),
            {item.label()}
          }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{AttributeValue, ElementId, Mutation};
    use dioxus_html::{
        set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
    };
    use std::{any::Any, cell::Cell, rc::Rc};

    #[derive(Clone)]
    struct Fixture {
        session: SessionView,
        logouts: Rc<Cell<usize>>,
    }

    #[derive(Routable, Clone, PartialEq, Debug)]
    #[rustfmt::skip]
    enum Shelf {
        #[layout(Frame)]
            #[route("/")]
            Front {},
            #[route("/:page")]
            Page { page: String },
    }

    #[component]
    fn Frame() -> Element {
        let fixture = use_context::<Fixture>();
        let logouts = fixture.logouts.clone();

        rsx! {
            NavigationBar {
                session: fixture.session,
                on_logout: move |_| logouts.set(logouts.get() + 1),
            }
            Outlet::<Shelf> {}
        }
    }

    #[component]
    fn Front() -> Element {
        rsx! {}
    }

    #[component]
    fn Page(page: String) -> Element {
        rsx! { "{page}" }
    }

    fn shell() -> Element {
        rsx! { Router::<Shelf> {} }
    }

    fn mount(session: SessionView) -> (VirtualDom, Rc<Cell<usize>>, Vec<Mutation>) {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let logouts = Rc::new(Cell::new(0));
        let mut dom = VirtualDom::new(shell).with_root_context(Fixture {
            session,
            logouts: logouts.clone(),
        });
        let edits = dom.rebuild_to_vec().edits;
        (dom, logouts, edits)
    }

    fn click(dom: &mut VirtualDom, id: ElementId) -> Vec<Mutation> {
        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            true,
        );
        dom.runtime().handle_event("click", event, id);

        let mut edits = Vec::new();
        for _ in 0..4 {
            edits.extend(dom.render_immediate_to_vec().edits);
        }
        edits
    }

    /// Latest element that received `attr="value"`.
    fn element_with(edits: &[Mutation], attr: &str, value: &str) -> ElementId {
        edits
            .iter()
            .rev()
            .find_map(|edit| match edit {
                Mutation::SetAttribute {
                    name,
                    value: AttributeValue::Text(text),
                    id,
                    ..
                } if *name == attr && text == value => Some(*id),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no element with {attr}={value}"))
    }

    fn toggle_button(edits: &[Mutation]) -> ElementId {
        edits
            .iter()
            .find_map(|edit| match edit {
                Mutation::SetAttribute {
                    name: "aria-expanded",
                    id,
                    ..
                } => Some(*id),
                _ => None,
            })
            .expect("toggle button")
    }

    fn panel_open(dom: &VirtualDom) -> bool {
        dioxus_ssr::render(dom).contains("navbar-panel")
    }

    #[test]
    fn panel_hidden_at_mount() {
        let (dom, logouts, _) = mount(SessionView::Anonymous);
        assert!(!panel_open(&dom));
        assert_eq!(logouts.get(), 0);
    }

    #[test]
    fn anonymous_desktop_links() {
        let (dom, _, _) = mount(SessionView::Anonymous);
        let html = dioxus_ssr::render(&dom);

        for label in ["MsCafe", "Home", "Shop", "About", "Contact", "Login"] {
            assert!(html.contains(&format!(">{label}<")), "missing {label}");
        }
        for label in ["Profile", "Cart", "Logout"] {
            assert!(!html.contains(label), "unexpected {label}");
        }
    }

    #[test]
    fn authenticated_desktop_links() {
        let (dom, _, _) = mount(SessionView::Authenticated);
        let html = dioxus_ssr::render(&dom);

        for label in ["Home", "Shop", "About", "Contact", "Profile", "Cart", "Logout"] {
            assert!(html.contains(&format!(">{label}<")), "missing {label}");
        }
        assert!(!html.contains(">Login<"));
    }

    #[test]
    fn toggle_shows_and_hides_panel() {
        let (mut dom, _, edits) = mount(SessionView::Anonymous);
        let toggle = toggle_button(&edits);

        click(&mut dom, toggle);
        assert!(panel_open(&dom));

        click(&mut dom, toggle);
        assert!(!panel_open(&dom));
    }

    #[test]
    fn cart_in_panel_closes_it() {
        let (mut dom, logouts, edits) = mount(SessionView::Authenticated);
        let panel_edits = click(&mut dom, toggle_button(&edits));
        assert!(panel_open(&dom));

        click(&mut dom, element_with(&panel_edits, "href", "/cart"));
        assert!(!panel_open(&dom));
        assert_eq!(logouts.get(), 0);
    }

    #[test]
    fn logout_in_panel_dispatches_once_and_closes() {
        let (mut dom, logouts, edits) = mount(SessionView::Authenticated);
        let panel_edits = click(&mut dom, toggle_button(&edits));

        click(&mut dom, element_with(&panel_edits, "data-nav-item", "Logout"));
        assert_eq!(logouts.get(), 1);
        assert!(!panel_open(&dom));
    }

    #[test]
    fn desktop_logout_dispatches_once_whatever_the_panel() {
        let (mut dom, logouts, edits) = mount(SessionView::Authenticated);
        let desktop_logout = element_with(&edits, "data-nav-item", "Logout");

        click(&mut dom, desktop_logout);
        assert_eq!(logouts.get(), 1);

        click(&mut dom, toggle_button(&edits));
        click(&mut dom, desktop_logout);
        assert_eq!(logouts.get(), 2);
        assert!(panel_open(&dom));
    }
}

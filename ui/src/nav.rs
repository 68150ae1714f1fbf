//! Renderer-independent model of the navigation bar.
//!
//! The rendered item set is a pure function of [`SessionView`] and the
//! [`MenuState`] of the mobile panel.

use crate::auth::AuthIntent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, path: &'static str) -> Self {
        Self { label, path }
    }
}

pub const BRAND: NavLink = NavLink::new("MsCafe", "/");

pub const HOME: NavLink = NavLink::new("Home", "/");
pub const SHOP: NavLink = NavLink::new("Shop", "/shop");
pub const ABOUT: NavLink = NavLink::new("About", "/about");
pub const CONTACT: NavLink = NavLink::new("Contact", "/contact");
pub const PROFILE: NavLink = NavLink::new("Profile", "/profile");
pub const CART: NavLink = NavLink::new("Cart", "/cart");
pub const LOGIN: NavLink = NavLink::new("Login", "/login");

/// Links shown regardless of the session.
const UNIVERSAL: [NavLink; 4] = [HOME, SHOP, ABOUT, CONTACT];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link(NavLink),
    Logout,
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Link(link) => link.label,
            NavItem::Logout => "Logout",
        }
    }

    /// Resolve a selection of this item.
    ///
    /// Anything picked inside the mobile panel closes it. Logout always
    /// yields exactly one intent, wherever it was picked from.
    pub fn activate(&self, placement: Placement, menu: MenuState) -> Activation {
        let menu = match placement {
            Placement::Desktop => menu,
            Placement::MobilePanel => menu.close(),
        };
        let intent = match self {
            NavItem::Link(_) => None,
            NavItem::Logout => Some(AuthIntent::Logout),
        };

        Activation { menu, intent }
    }
}

/// Outcome of selecting a [`NavItem`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation {
    pub menu: MenuState,
    pub intent: Option<AuthIntent>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Desktop,
    MobilePanel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn close(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// What the bar shows, depending on whether someone is signed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionView {
    Authenticated,
    Anonymous,
}

impl SessionView {
    pub fn from_logged_in(is_logged_in: bool) -> Self {
        if is_logged_in {
            SessionView::Authenticated
        } else {
            SessionView::Anonymous
        }
    }

    pub fn items(self) -> Vec<NavItem> {
        let mut items: Vec<NavItem> = UNIVERSAL.iter().copied().map(NavItem::Link).collect();
        match self {
            SessionView::Authenticated => {
                items.push(NavItem::Link(PROFILE));
                items.push(NavItem::Link(CART));
                items.push(NavItem::Logout);
            }
            SessionView::Anonymous => items.push(NavItem::Link(LOGIN)),
        }
        items
    }
}

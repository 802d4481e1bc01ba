//! Mobile navigation dropdown.
//!
//! DESIGN
//! ======
//! Open/closed is an explicit [`MenuState`]. [`menu_styles`] maps it to the full
//! set of inline style pairs, so closing always writes the same properties
//! that opening touched, only blank.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::PortfolioConfig;
use crate::icons::{self, Icon, SharedIcons};

/// Inline style properties the dropdown overrides.
pub const MENU_STYLE_PROPERTIES: [&str; 12] = [
    "display",
    "position",
    "top",
    "left",
    "right",
    "background-color",
    "flex-direction",
    "padding",
    "box-shadow",
    "border-radius",
    "border",
    "border-top",
];

const OPEN_VALUES: [&str; 12] = [
    "flex",
    "absolute",
    "100%",
    "0",
    "0",
    "var(--background-color)",
    "column",
    "1rem",
    "var(--shadow-medium)",
    "0 0 var(--border-radius) var(--border-radius)",
    "1px solid var(--border-color)",
    "none",
];

/// Whether the dropdown is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inline style pairs for `state`. `Closed` yields empty values for every property.
#[must_use]
pub fn menu_styles(state: MenuState) -> [(&'static str, &'static str); 12] {
    std::array::from_fn(|i| {
        let value = match state {
            MenuState::Open => OPEN_VALUES[i],
            MenuState::Closed => "",
        };
        (MENU_STYLE_PROPERTIES[i], value)
    })
}

/// Icon shown on the toggle button for `state`.
#[must_use]
pub fn toggle_icon(state: MenuState) -> Icon {
    match state {
        MenuState::Open => Icon::Close,
        MenuState::Closed => Icon::Menu,
    }
}

/// DOM hooks for the menu panel and its toggle button.
pub trait MenuSurface {
    fn apply_styles(&mut self, styles: &[(&str, &str)]);
    fn set_toggle_icon(&mut self, icon: Icon);
}

/// Page events the navigation reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    /// The hamburger/close button was clicked.
    ToggleClicked,
    /// A `.nav-link` inside the menu was clicked.
    LinkClicked,
    /// A click landed outside the `.nav` container.
    OutsideClicked,
    /// The window resized to `width` CSS pixels.
    Resized { width: f64 },
}

pub struct MobileNavigation<M> {
    surface: M,
    icons: SharedIcons,
    breakpoint_px: f64,
    state: MenuState,
}

impl<M: MenuSurface> MobileNavigation<M> {
    /// Starts closed. Nothing is written to the DOM until the first transition.
    pub fn new(surface: M, icons: SharedIcons, config: &PortfolioConfig) -> Self {
        Self { surface, icons, breakpoint_px: config.nav_breakpoint_px, state: MenuState::Closed }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn open_menu(&mut self) {
        self.transition(MenuState::Open);
    }

    pub fn close_menu(&mut self) {
        self.transition(MenuState::Closed);
    }

    pub fn toggle_menu(&mut self) {
        if self.is_open() {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Route a page event to the matching transition.
    pub fn handle(&mut self, event: NavEvent) {
        match event {
            NavEvent::ToggleClicked => self.toggle_menu(),
            NavEvent::LinkClicked | NavEvent::OutsideClicked => {
                if self.is_open() {
                    self.close_menu();
                }
            }
            NavEvent::Resized { width } => {
                if width > self.breakpoint_px && self.is_open() {
                    self.close_menu();
                }
            }
        }
    }

    #[must_use]
    pub fn surface(&self) -> &M {
        &self.surface
    }

    fn transition(&mut self, next: MenuState) {
        self.surface.apply_styles(&menu_styles(next));
        self.surface.set_toggle_icon(toggle_icon(next));
        self.state = next;
        icons::refresh(&self.icons);
        log::debug!("mobile menu {next:?}");
    }
}

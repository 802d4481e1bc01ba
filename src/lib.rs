//! # portfolio-ui
//!
//! WASM enhancement layer for a static portfolio page.
//!
//! The crate attaches seven independent controllers to server-rendered HTML:
//! theme switching, the mobile navigation panel, contact-form feedback, smooth
//! anchor scrolling, scroll reveal, page-load styling and load-time logging.
//!
//! ARCHITECTURE
//! ============
//! Every controller is a plain state type written against small surface traits
//! (`ThemeSurface`, `MenuSurface`, `SubmitButton`, ...). The `browser` module
//! implements those traits over `web-sys` and wires DOM events to controller
//! methods. Native builds leave `browser` out, which keeps the controllers
//! testable without a JS runtime.

pub mod config;
pub mod contact;
pub mod error;
pub mod icons;
pub mod loader;
pub mod nav;
pub mod perf;
pub mod reveal;
pub mod schedule;
pub mod scroll;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;

pub use config::PortfolioConfig;
pub use error::UiError;

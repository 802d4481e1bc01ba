//! Feather icon placeholders and the optional renderer hook.
//!
//! The page loads the Feather script separately. Controllers only write
//! `<i data-feather="...">` placeholders and ask the renderer, when present,
//! to rescan the DOM.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use std::rc::Rc;

/// Glyphs swapped in by the controllers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Menu,
    Close,
    Check,
    AlertCircle,
}

impl Icon {
    /// Feather icon name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Close => "x",
            Self::Check => "check",
            Self::AlertCircle => "alert-circle",
        }
    }

    /// Placeholder markup, optionally with a CSS class.
    #[must_use]
    pub fn placeholder(self, class: Option<&str>) -> String {
        match class {
            Some(class) => format!(r#"<i data-feather="{}" class="{class}"></i>"#, self.name()),
            None => format!(r#"<i data-feather="{}"></i>"#, self.name()),
        }
    }
}

/// Something that turns icon placeholders into rendered SVG.
pub trait IconRenderer {
    fn render_icons(&self);
}

/// Shared optional renderer, resolved once at startup.
pub type SharedIcons = Option<Rc<dyn IconRenderer>>;

/// Rescan icons if a renderer is installed.
pub fn refresh(icons: &SharedIcons) {
    if let Some(renderer) = icons {
        renderer.render_icons();
    }
}

//! Scroll-triggered reveal of cards and timeline items.
//!
//! The browser's intersection observer reports visibility changes. An element
//! gets the reveal class the first time it intersects and keeps it for the
//! rest of the session; non-intersecting reports are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::PortfolioConfig;

/// Elements that animate in.
pub const ANIMATED_SELECTOR: &str = ".skill-card, .project-card, .testimonial-card, .work-item, .timeline-item";

/// Intersection observer settings.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
    pub class_name: String,
}

impl RevealOptions {
    #[must_use]
    pub fn from_config(config: &PortfolioConfig) -> Self {
        Self {
            threshold: config.reveal_threshold,
            root_margin: config.reveal_root_margin.clone(),
            class_name: config.reveal_class.clone(),
        }
    }
}

/// An observed element. There is deliberately no way to un-reveal.
pub trait Revealable {
    fn add_class(&self, class_name: &str);
}

pub struct ScrollAnimations {
    options: RevealOptions,
}

impl ScrollAnimations {
    #[must_use]
    pub fn new(options: RevealOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Apply one observer callback. Returns the elements revealed by it.
    pub fn handle_entries<E, I>(&self, entries: I) -> Vec<E>
    where
        E: Revealable,
        I: IntoIterator<Item = (E, bool)>,
    {
        let shown: Vec<E> = entries
            .into_iter()
            .filter_map(|(element, intersecting)| intersecting.then_some(element))
            .collect();
        for element in &shown {
            element.add_class(&self.options.class_name);
        }
        shown
    }
}

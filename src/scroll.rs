//! Smooth scrolling for in-page anchors.
//!
//! Any click on an `a[href^="#"]` is taken over: default navigation is
//! suppressed first, then the fragment is resolved as a selector. A fragment
//! with no matching element still has its navigation suppressed.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Selector a click target must match to be handled.
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Returns the selector to resolve when `href` is an in-page fragment.
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    href.starts_with('#').then_some(href)
}

/// Resolves selectors and performs the scroll.
pub trait ScrollTargets {
    type Target;

    /// Look up the first element matching `selector`. Invalid selectors
    /// resolve to `None`.
    fn find(&self, selector: &str) -> Option<Self::Target>;

    /// Smoothly scroll `target` so its top aligns with the viewport start.
    fn scroll_into_view(&self, target: &Self::Target);
}

/// What handling a click did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    pub prevent_default: bool,
    pub scrolled: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothScroll;

impl SmoothScroll {
    /// Handle a click on an element whose `href` attribute is `href`.
    pub fn handle_click<T: ScrollTargets>(self, href: Option<&str>, targets: &T) -> ClickOutcome {
        let Some(selector) = href.and_then(fragment_selector) else {
            return ClickOutcome::default();
        };
        let Some(target) = targets.find(selector) else {
            log::debug!("no scroll target for {selector}");
            return ClickOutcome { prevent_default: true, scrolled: false };
        };
        targets.scroll_into_view(&target);
        ClickOutcome { prevent_default: true, scrolled: true }
    }
}

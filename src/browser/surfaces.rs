//! `web-sys` implementations of the controller surface traits.
//!
//! DOM write failures are logged and swallowed: a style or attribute that
//! failed to apply should not take the rest of the page down with it.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, FormData, HtmlElement, HtmlFormElement, PerformanceNavigationTiming, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Storage, Window,
};

use crate::contact::{ContactSubmission, Field, FormFields, SubmitButton};
use crate::error::UiError;
use crate::icons::{Icon, IconRenderer};
use crate::loader::PageShell;
use crate::nav::MenuSurface;
use crate::perf::NavigationTiming;
use crate::reveal::Revealable;
use crate::scroll::ScrollTargets;
use crate::theme::{PreferenceStore, THEME_ATTRIBUTE, Theme, ThemeSurface};

fn warn_on_err(action: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{action}: {}", UiError::from(e));
    }
}

fn set_style(element: &HtmlElement, name: &str, value: &str) {
    warn_on_err(&format!("set style {name}"), element.style().set_property(name, value));
}

/// `window.localStorage`, when the browser allows it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::info!("localStorage unavailable: {}", UiError::from(e));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).unwrap_or_default()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            warn_on_err("persist preference", storage.set_item(key, value));
        }
    }
}

/// `<html>` theme attribute plus the `<body>` transition override.
pub struct DocumentTheme {
    root: Element,
    body: Option<HtmlElement>,
}

impl DocumentTheme {
    pub fn new(document: &Document) -> Result<Self, UiError> {
        let root = document.document_element().ok_or(UiError::NoDocument)?;
        Ok(Self { root, body: document.body() })
    }
}

impl ThemeSurface for DocumentTheme {
    fn apply_theme(&mut self, theme: Theme) {
        warn_on_err("apply theme", self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str()));
    }

    fn set_body_transition(&mut self, value: &str) {
        if let Some(body) = &self.body {
            set_style(body, "transition", value);
        }
    }
}

/// `.nav-menu` panel and the `#mobileMenuToggle` button.
pub struct NavPanel {
    menu: HtmlElement,
    toggle: Option<Element>,
}

impl NavPanel {
    pub fn new(menu: HtmlElement, toggle: Option<Element>) -> Self {
        Self { menu, toggle }
    }
}

impl MenuSurface for NavPanel {
    fn apply_styles(&mut self, styles: &[(&str, &str)]) {
        for (name, value) in styles {
            set_style(&self.menu, name, value);
        }
    }

    fn set_toggle_icon(&mut self, icon: Icon) {
        if let Some(toggle) = &self.toggle {
            toggle.set_inner_html(&icon.placeholder(None));
        }
    }
}

/// `#contactForm` controls.
pub struct ContactFormElement {
    form: HtmlFormElement,
}

impl ContactFormElement {
    pub fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }

    fn field(data: &FormData, field: Field) -> String {
        data.get(field.as_str()).as_string().unwrap_or_default()
    }
}

impl FormFields for ContactFormElement {
    fn snapshot(&self) -> ContactSubmission {
        match FormData::new_with_form(&self.form) {
            Ok(data) => ContactSubmission {
                name: Self::field(&data, Field::Name),
                email: Self::field(&data, Field::Email),
                subject: Self::field(&data, Field::Subject),
                message: Self::field(&data, Field::Message),
            },
            Err(e) => {
                log::warn!("read contact form: {}", UiError::from(e));
                ContactSubmission::default()
            }
        }
    }

    fn reset(&mut self) {
        self.form.reset();
    }
}

/// The form's `.submit-button`.
pub struct SubmitButtonElement {
    button: HtmlElement,
}

impl SubmitButtonElement {
    pub fn new(button: HtmlElement) -> Self {
        Self { button }
    }
}

impl SubmitButton for SubmitButtonElement {
    fn markup(&self) -> String {
        self.button.inner_html()
    }

    fn set_markup(&mut self, markup: &str) {
        self.button.set_inner_html(markup);
    }

    fn set_background(&mut self, color: &str) {
        set_style(&self.button, "background-color", color);
    }
}

/// Selector lookup and smooth scrolling against the live document.
pub struct DocumentScroll {
    document: Document,
}

impl DocumentScroll {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ScrollTargets for DocumentScroll {
    type Target = Element;

    fn find(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                log::debug!("invalid anchor selector {selector}: {}", UiError::from(e));
                None
            }
        }
    }

    fn scroll_into_view(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl Revealable for Element {
    fn add_class(&self, class_name: &str) {
        warn_on_err("reveal element", self.class_list().add_1(class_name));
    }
}

/// `<head>`/`<body>` of the live document.
pub struct DocumentShell {
    document: Document,
}

impl DocumentShell {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn append_to_head(&self, tag: &str, fill: impl FnOnce(&Element) -> Result<(), JsValue>) -> Result<(), UiError> {
        let head = self.document.head().ok_or(UiError::NoDocument)?;
        let element = self.document.create_element(tag)?;
        fill(&element)?;
        head.append_child(&element)?;
        Ok(())
    }
}

impl PageShell for DocumentShell {
    fn add_body_class(&mut self, class_name: &str) {
        if let Some(body) = self.document.body() {
            warn_on_err("mark body", body.class_list().add_1(class_name));
        }
    }

    fn append_link(&mut self, attributes: &[(&str, &str)]) {
        let result = self.append_to_head("link", |link| {
            for (name, value) in attributes {
                link.set_attribute(name, value)?;
            }
            Ok(())
        });
        if let Err(e) = result {
            log::warn!("append link: {e}");
        }
    }

    fn append_style(&mut self, css: &str) {
        let result = self.append_to_head("style", |style| {
            style.set_text_content(Some(css));
            Ok(())
        });
        if let Err(e) = result {
            log::warn!("append style: {e}");
        }
    }
}

/// The global `feather` icon library.
pub struct FeatherIcons {
    feather: JsValue,
    replace: Function,
}

impl FeatherIcons {
    /// Look up `window.feather.replace`, once.
    pub fn detect(window: &Window) -> Option<Self> {
        let feather = Reflect::get(window, &JsValue::from_str("feather")).unwrap_or(JsValue::UNDEFINED);
        if feather.is_undefined() || feather.is_null() {
            log::info!("feather icons not loaded; icon rendering disabled");
            return None;
        }
        let replace = Reflect::get(&feather, &JsValue::from_str("replace"))
            .unwrap_or(JsValue::UNDEFINED)
            .dyn_ref::<Function>()?
            .clone();
        Some(Self { feather, replace })
    }
}

impl IconRenderer for FeatherIcons {
    fn render_icons(&self) {
        if let Err(e) = self.replace.call0(&self.feather) {
            log::warn!("feather.replace failed: {}", UiError::from(e));
        }
    }
}

/// First `navigation` performance entry, when the API exists.
pub fn navigation_timing(window: &Window) -> Option<NavigationTiming> {
    let performance = window.performance()?;
    let entry = performance.get_entries_by_type("navigation").get(0);
    let entry = entry.dyn_ref::<PerformanceNavigationTiming>()?;
    Some(NavigationTiming { load_event_start: entry.load_event_start(), load_event_end: entry.load_event_end() })
}

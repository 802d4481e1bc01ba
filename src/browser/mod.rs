//! Browser entry point and composition root.
//!
//! ARCHITECTURE
//! ============
//! [`start`] runs when the WASM module is instantiated. It injects the head
//! stylesheets straight away, then once the DOM is parsed it builds one
//! [`Portfolio`], which mounts every controller, owns their event
//! closures, and lives in a thread-local for the rest of the page session.
//! A controller whose elements are missing is simply not mounted.

mod surfaces;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Date, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::config::{CONFIG_ELEMENT_ID, PortfolioConfig};
use crate::contact::ContactForm;
use crate::error::UiError;
use crate::icons::{self, IconRenderer, SharedIcons};
use crate::loader::{PageLoader, ReadyState};
use crate::nav::{MobileNavigation, NavEvent};
use crate::perf::PerformanceMonitor;
use crate::reveal::{ANIMATED_SELECTOR, RevealOptions, ScrollAnimations};
use crate::scroll::{ANCHOR_SELECTOR, SmoothScroll};
use crate::theme::ThemeManager;

use surfaces::{
    ContactFormElement, DocumentScroll, DocumentShell, DocumentTheme, FeatherIcons, LocalStorage, NavPanel,
    SubmitButtonElement, navigation_timing,
};

type Listener = Closure<dyn FnMut(Event)>;
type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
type TimerSlot = Rc<RefCell<Option<Timeout>>>;

thread_local! {
    static PORTFOLIO: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
}

/// WASM start hook.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("portfolio-ui: logger already initialized"));
    }
    if let Err(e) = boot() {
        log::error!("portfolio startup failed: {e}");
    }
}

fn boot() -> Result<(), UiError> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(UiError::NoDocument)?;
    let config = read_config(&document);
    PageLoader::new(&config).install_head(&mut DocumentShell::new(document.clone()));
    if ReadyState::dom_pending(&document.ready_state()) {
        let on_ready = Closure::once_into_js(move || mount_and_keep(config));
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        mount_and_keep(config);
    }
    Ok(())
}

fn mount_and_keep(config: PortfolioConfig) {
    match Portfolio::mount(config) {
        Ok(portfolio) => PORTFOLIO.with(|slot| *slot.borrow_mut() = Some(portfolio)),
        Err(e) => log::error!("portfolio mount failed: {e}"),
    }
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<Listener, UiError> {
    let closure = Listener::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_ref::<Element>().cloned()
}

fn report(feature: &str, result: Result<(), UiError>) {
    match result {
        Ok(()) => log::debug!("{feature} mounted"),
        Err(e) => log::warn!("{feature} disabled: {e}"),
    }
}

/// Every mounted controller plus the JS callbacks that drive them.
pub struct Portfolio {
    config: PortfolioConfig,
    window: Window,
    document: Document,
    icons: SharedIcons,
    listeners: Vec<Listener>,
    observer: Option<(IntersectionObserver, ObserverCallback)>,
    icon_boot: Option<Timeout>,
}

impl Portfolio {
    /// Build and wire every controller against the current document. The
    /// head stylesheets are already in place.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window or document. Individual controllers
    /// that cannot mount are logged and skipped.
    pub fn mount(config: PortfolioConfig) -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let document = window.document().ok_or(UiError::NoDocument)?;
        let icons: SharedIcons = FeatherIcons::detect(&window).map(|f| Rc::new(f) as Rc<dyn IconRenderer>);

        let mut portfolio = Self {
            config,
            window,
            document,
            icons,
            listeners: Vec::new(),
            observer: None,
            icon_boot: None,
        };

        portfolio.mount_loader();
        portfolio.schedule_icon_boot();
        let theme = portfolio.mount_theme();
        report("theme manager", theme);
        let nav = portfolio.mount_navigation();
        report("mobile navigation", nav);
        let contact = portfolio.mount_contact_form();
        report("contact form", contact);
        let scroll = portfolio.mount_smooth_scroll();
        report("smooth scroll", scroll);
        let reveal = portfolio.mount_scroll_animations();
        report("scroll animations", reveal);
        let perf = portfolio.mount_performance_monitor();
        report("performance monitor", perf);

        log::info!(
            "portfolio ui ready: {} listeners, reveal {}, icon boot {}",
            portfolio.listeners.len(),
            if portfolio.observer.is_some() { "on" } else { "off" },
            if portfolio.icon_boot.is_some() { "scheduled" } else { "skipped" },
        );
        Ok(portfolio)
    }

    fn mount_loader(&self) {
        let loader = PageLoader::new(&self.config);
        let mut shell = DocumentShell::new(self.document.clone());
        loader.mark_loaded(&mut shell);
    }

    fn schedule_icon_boot(&mut self) {
        if self.icons.is_none() {
            return;
        }
        let icons = self.icons.clone();
        self.icon_boot = Some(Timeout::new(self.config.icon_boot_delay_ms, move || icons::refresh(&icons)));
    }

    fn mount_theme(&mut self) -> Result<(), UiError> {
        let surface = DocumentTheme::new(&self.document)?;
        let manager = ThemeManager::new(LocalStorage::open(&self.window), surface, &self.config);
        let Some(toggle) = self.document.get_element_by_id("themeToggle") else {
            log::info!("#themeToggle missing; theme is fixed at {}", manager.current());
            return Ok(());
        };

        let manager = Rc::new(RefCell::new(manager));
        let timer: TimerSlot = Rc::new(RefCell::new(None));
        let listener = listen(&toggle, "click", move |_| {
            let (ticket, delay) = {
                let mut m = manager.borrow_mut();
                (m.toggle_theme(Date::now()), m.transition_ms())
            };
            let manager = Rc::clone(&manager);
            *timer.borrow_mut() = Some(Timeout::new(delay, move || {
                manager.borrow_mut().clear_transition(ticket);
            }));
        })?;
        self.listeners.push(listener);
        Ok(())
    }

    fn mount_navigation(&mut self) -> Result<(), UiError> {
        let Some(menu) = self.document.query_selector(".nav-menu")? else {
            return Ok(());
        };
        let menu = menu
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::Dom(".nav-menu is not an HTML element".to_owned()))?;
        let toggle = self.document.get_element_by_id("mobileMenuToggle");
        let nav = Rc::new(RefCell::new(MobileNavigation::new(
            NavPanel::new(menu.clone(), toggle.clone()),
            self.icons.clone(),
            &self.config,
        )));

        if let Some(toggle) = toggle {
            let nav = Rc::clone(&nav);
            self.listeners.push(listen(&toggle, "click", move |_| nav.borrow_mut().handle(NavEvent::ToggleClicked))?);
        }

        let link_nav = Rc::clone(&nav);
        self.listeners.push(listen(&menu, "click", move |event| {
            let is_link = event_element(&event).is_some_and(|el| el.class_list().contains("nav-link"));
            if is_link {
                link_nav.borrow_mut().handle(NavEvent::LinkClicked);
            }
        })?);

        let outside_nav = Rc::clone(&nav);
        self.listeners.push(listen(&self.document, "click", move |event| {
            if !outside_nav.borrow().is_open() {
                return;
            }
            let inside = event_element(&event).is_some_and(|el| matches!(el.closest(".nav"), Ok(Some(_))));
            if !inside {
                outside_nav.borrow_mut().handle(NavEvent::OutsideClicked);
            }
        })?);

        let window = self.window.clone();
        self.listeners.push(listen(&self.window, "resize", move |_| {
            let width = match window.inner_width() {
                Ok(width) => width.as_f64(),
                Err(e) => {
                    log::debug!("innerWidth unavailable: {}", UiError::from(e));
                    None
                }
            };
            let Some(width) = width else {
                return;
            };
            nav.borrow_mut().handle(NavEvent::Resized { width });
        })?);
        Ok(())
    }

    fn mount_contact_form(&mut self) -> Result<(), UiError> {
        let Some(form) = self.document.get_element_by_id("contactForm") else {
            return Ok(());
        };
        let form = form
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| UiError::Dom("#contactForm is not a form".to_owned()))?;
        let button = form
            .query_selector(".submit-button")?
            .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
            .map(SubmitButtonElement::new);
        if button.is_none() {
            log::info!(".submit-button missing; contact feedback disabled");
        }
        let controller = Rc::new(RefCell::new(ContactForm::new(
            ContactFormElement::new(form.clone()),
            button,
            self.icons.clone(),
            &self.config,
        )));

        let timer: TimerSlot = Rc::new(RefCell::new(None));
        self.listeners.push(listen(&form, "submit", move |event| {
            event.prevent_default();
            let (outcome, delay) = {
                let mut c = controller.borrow_mut();
                (c.submit(Date::now()), c.window_ms())
            };
            let Some(ticket) = outcome.revert else {
                return;
            };
            let controller = Rc::clone(&controller);
            *timer.borrow_mut() = Some(Timeout::new(delay, move || {
                controller.borrow_mut().revert(ticket);
            }));
        })?);
        Ok(())
    }

    fn mount_smooth_scroll(&mut self) -> Result<(), UiError> {
        let targets = DocumentScroll::new(self.document.clone());
        self.listeners.push(listen(&self.document, "click", move |event| {
            let Some(anchor) = event_element(&event) else {
                return;
            };
            if !matches!(anchor.matches(ANCHOR_SELECTOR), Ok(true)) {
                return;
            }
            let href = anchor.get_attribute("href");
            let outcome = SmoothScroll.handle_click(href.as_deref(), &targets);
            if outcome.prevent_default {
                event.prevent_default();
            }
        })?);
        Ok(())
    }

    fn mount_scroll_animations(&mut self) -> Result<(), UiError> {
        if !Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
            log::info!("IntersectionObserver unavailable; reveal animations disabled");
            return Ok(());
        }
        let options = RevealOptions::from_config(&self.config);
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let animations = ScrollAnimations::new(options);
        let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            let batch = entries.iter().filter_map(|entry| {
                let entry = entry.dyn_ref::<IntersectionObserverEntry>()?;
                Some((entry.target(), entry.is_intersecting()))
            });
            for element in animations.handle_entries(batch) {
                observer.unobserve(&element);
            }
        });
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let targets = self.document.query_selector_all(ANIMATED_SELECTOR)?;
        for i in 0..targets.length() {
            if let Some(element) = targets.item(i).and_then(|node| node.dyn_ref::<Element>().cloned()) {
                observer.observe(&element);
            }
        }
        log::debug!("observing {} animated elements", targets.length());
        self.observer = Some((observer, callback));
        Ok(())
    }

    fn mount_performance_monitor(&mut self) -> Result<(), UiError> {
        let window = self.window.clone();
        let measure = move || {
            PerformanceMonitor.report(navigation_timing(&window));
        };
        if ReadyState::load_finished(&self.document.ready_state()) {
            Timeout::new(0, measure).forget();
            return Ok(());
        }
        let mut measure = Some(measure);
        self.listeners.push(listen(&self.window, "load", move |_| {
            if let Some(measure) = measure.take() {
                Timeout::new(0, measure).forget();
            }
        })?);
        Ok(())
    }
}

fn read_config(document: &Document) -> PortfolioConfig {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    PortfolioConfig::from_json_or_default(raw.as_deref())
}

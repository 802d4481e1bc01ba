//! Page-load styling: the `loaded` body class, the font preload hint and the
//! injected animation and print stylesheets.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use crate::config::PortfolioConfig;

/// Body class that enables the CSS fade-in.
pub const LOADED_CLASS: &str = "loaded";

/// Document loading phase, as reported by `document.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "loading" => Some(Self::Loading),
            "interactive" => Some(Self::Interactive),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }

    /// Whether the DOM is still being parsed. Unknown values count as parsed.
    #[must_use]
    pub fn dom_pending(value: &str) -> bool {
        Self::parse(value) == Some(Self::Loading)
    }

    /// Whether the window `load` event has already fired.
    #[must_use]
    pub fn load_finished(value: &str) -> bool {
        Self::parse(value) == Some(Self::Complete)
    }
}

const ANIMATED_ITEMS: [&str; 5] = [".skill-card", ".project-card", ".testimonial-card", ".work-item", ".timeline-item"];

/// Pre-reveal and revealed states for the animated cards, keyed on
/// `reveal_class`.
#[must_use]
pub fn animation_styles(reveal_class: &str) -> String {
    let hidden = ANIMATED_ITEMS.join(",\n    ");
    let shown = ANIMATED_ITEMS.map(|item| format!("{item}.{reveal_class}")).join(",\n    ");
    format!(
        r"
    {hidden} {{
        opacity: 0;
        transform: translateY(20px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }}

    {shown} {{
        opacity: 1;
        transform: translateY(0);
    }}

    body {{
        opacity: 1;
        transition: opacity 0.3s ease;
    }}

    body.loaded {{
        opacity: 1;
    }}

    @media (prefers-reduced-motion: reduce) {{
        {hidden} {{
            opacity: 1;
            transform: none;
            transition: none;
        }}
    }}
"
    )
}

pub const PRINT_STYLES: &str = r"
    @media print {
        .header,
        .footer,
        .cta-section {
            display: none;
        }

        body {
            font-size: 12pt;
            line-height: 1.4;
        }

        h1, h2, h3 {
            page-break-after: avoid;
        }

        .work-item,
        .timeline-item {
            page-break-inside: avoid;
        }
    }
";

/// `<link rel="preload">` for a web font.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontPreload {
    pub href: String,
}

impl FontPreload {
    /// Attribute pairs of the `<link>` element, in insertion order.
    #[must_use]
    pub fn attributes(&self) -> [(&'static str, &str); 5] {
        [
            ("rel", "preload"),
            ("as", "font"),
            ("type", "font/woff2"),
            ("crossorigin", "anonymous"),
            ("href", self.href.as_str()),
        ]
    }
}

/// `<head>` and `<body>` hooks the loader writes to.
pub trait PageShell {
    fn add_body_class(&mut self, class_name: &str);
    fn append_link(&mut self, attributes: &[(&str, &str)]);
    fn append_style(&mut self, css: &str);
}

pub struct PageLoader {
    font: FontPreload,
    reveal_class: String,
}

impl PageLoader {
    #[must_use]
    pub fn new(config: &PortfolioConfig) -> Self {
        Self { font: FontPreload { href: config.font_url.clone() }, reveal_class: config.reveal_class.clone() }
    }

    #[must_use]
    pub fn font(&self) -> &FontPreload {
        &self.font
    }

    /// Inject stylesheets and the font hint into `<head>`. Runs before the
    /// DOM is parsed so cards never paint unstyled.
    pub fn install_head<P: PageShell>(&self, shell: &mut P) {
        shell.append_style(&animation_styles(&self.reveal_class));
        shell.append_style(PRINT_STYLES);
        shell.append_link(&self.font.attributes());
    }

    /// Flag the body as loaded once the DOM is ready.
    pub fn mark_loaded<P: PageShell>(&self, shell: &mut P) {
        shell.add_body_class(LOADED_CLASS);
    }
}

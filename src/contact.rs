//! Contact form validation and submit-button feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portfolio has no backend: a valid submission only produces a
//! confirmation on the submit button and clears the form. Invalid input swaps
//! in an error prompt and leaves the fields alone. Either way the button
//! reverts after the feedback window.
//!
//! The original button markup is captured when the button leaves its idle
//! state and restored from that copy, so overlapping submissions cannot
//! capture feedback markup as the "original".

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::config::PortfolioConfig;
use crate::icons::{self, Icon, SharedIcons};
use crate::schedule::{RevertSlot, RevertTicket};

/// Shape accepted as a plausible email address.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("email pattern failed to compile: {e}");
        None
    }
});

/// Whether `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Form fields read at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Required form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Form control `name` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field {0} is empty")]
    MissingField(Field),
    #[error("email address is malformed")]
    InvalidEmail,
}

impl ContactSubmission {
    /// Check that all fields are filled and the email is well-formed.
    ///
    /// # Errors
    ///
    /// Returns the first empty field in form order, or
    /// [`ValidationError::InvalidEmail`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Subject, &self.subject),
            (Field::Message, &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Transient message shown on the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Success,
    Error,
}

impl Feedback {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Message Sent!",
            Self::Error => "Please fill all fields",
        }
    }

    #[must_use]
    pub fn icon(self) -> Icon {
        match self {
            Self::Success => Icon::Check,
            Self::Error => Icon::AlertCircle,
        }
    }

    /// Button background while the feedback is showing.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#4caf50",
            Self::Error => "#f44336",
        }
    }

    /// Inner markup of the submit button.
    #[must_use]
    pub fn markup(self) -> String {
        format!(
            r#"<span class="button-text">{}</span>{}"#,
            self.label(),
            self.icon().placeholder(Some("button-icon"))
        )
    }
}

/// Submit button lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonState {
    #[default]
    Idle,
    Showing(Feedback),
}

/// Reads and clears the form controls.
pub trait FormFields {
    fn snapshot(&self) -> ContactSubmission;
    fn reset(&mut self);
}

/// DOM hooks for the `.submit-button`.
pub trait SubmitButton {
    fn markup(&self) -> String;
    fn set_markup(&mut self, markup: &str);
    /// Set (or clear, with `""`) the inline background color.
    fn set_background(&mut self, color: &str);
}

/// Result of one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub feedback: Feedback,
    /// Revert to schedule, absent when the form has no submit button.
    pub revert: Option<RevertTicket>,
}

pub struct ContactForm<F, B> {
    fields: F,
    button: Option<B>,
    icons: SharedIcons,
    window_ms: u32,
    state: ButtonState,
    original_markup: Option<String>,
    revert: RevertSlot,
}

impl<F: FormFields, B: SubmitButton> ContactForm<F, B> {
    pub fn new(fields: F, button: Option<B>, icons: SharedIcons, config: &PortfolioConfig) -> Self {
        Self {
            fields,
            button,
            icons,
            window_ms: config.feedback_window_ms,
            state: ButtonState::Idle,
            original_markup: None,
            revert: RevertSlot::default(),
        }
    }

    /// Validate the current field values and show feedback.
    ///
    /// A newer submission supersedes any revert still pending from an older
    /// one.
    pub fn submit(&mut self, now_ms: f64) -> SubmitOutcome {
        let submission = self.fields.snapshot();
        let feedback = match submission.validate() {
            Ok(()) => Feedback::Success,
            Err(e) => {
                log::debug!("contact form rejected: {e}");
                Feedback::Error
            }
        };
        let revert = self.show(feedback, now_ms);
        if feedback == Feedback::Success {
            self.fields.reset();
        }
        SubmitOutcome { feedback, revert }
    }

    /// Restore the idle button if `ticket` is the latest pending revert.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if !self.revert.fire(ticket) {
            return false;
        }
        let original = self.original_markup.take().unwrap_or_default();
        if let Some(button) = self.button.as_mut() {
            button.set_markup(&original);
            button.set_background("");
        }
        self.state = ButtonState::Idle;
        icons::refresh(&self.icons);
        true
    }

    #[must_use]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// When the pending revert is due, if any.
    #[must_use]
    pub fn revert_due_ms(&self) -> Option<f64> {
        self.revert.due_ms()
    }

    #[must_use]
    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    #[must_use]
    pub fn fields(&self) -> &F {
        &self.fields
    }

    #[must_use]
    pub fn button(&self) -> Option<&B> {
        self.button.as_ref()
    }

    fn show(&mut self, feedback: Feedback, now_ms: f64) -> Option<RevertTicket> {
        let button = self.button.as_mut()?;
        if self.state == ButtonState::Idle {
            self.original_markup = Some(button.markup());
        }
        button.set_markup(&feedback.markup());
        button.set_background(feedback.color());
        self.state = ButtonState::Showing(feedback);
        icons::refresh(&self.icons);
        Some(self.revert.arm(now_ms, self.window_ms))
    }
}

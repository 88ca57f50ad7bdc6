//! Email Capture
//!
//! The hero and closing call-to-action inputs are decorative: nothing is
//! submitted anywhere. The only behaviour is gating the button on a
//! non-empty value. The value is not trimmed, so whitespace enables it.

/// Whether the "Get Started" button is enabled for `value`
pub const fn submit_enabled(value: &str) -> bool {
    !value.is_empty()
}

/// State of one email-capture row
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailCapture {
    value: String,
}

impl EmailCapture {
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn submit_enabled(&self) -> bool {
        submit_enabled(&self.value)
    }

    /// Button background: primary when enabled, muted otherwise
    pub fn button_class(&self) -> &'static str {
        if self.submit_enabled() {
            "btn btn-primary btn-lg"
        } else {
            "btn btn-muted btn-lg"
        }
    }
}

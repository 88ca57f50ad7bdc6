//! Scroll Reveal
//!
//! Maps "is this element in the viewport" onto an animation variant. The
//! browser side only feeds intersection results in; class names and
//! transition timing come out.

use serde::{Deserialize, Serialize};

/// Timing and trigger settings for one reveal wrapper
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub duration_secs: f64,
    pub delay_secs: f64,

    /// Stay visible after the first reveal
    pub once: bool,

    /// Fraction of the element that must be visible to count as intersecting
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            duration_secs: 0.5,
            delay_secs: 0.0,
            once: true,
            threshold: 0.3,
        }
    }
}

impl RevealOptions {
    #[must_use]
    pub const fn with_delay(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }
}

/// Entry motion of a revealed element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motion {
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ScaleIn,
}

impl Motion {
    pub const fn class(self) -> &'static str {
        match self {
            Self::FadeUp => "reveal-fade-up",
            Self::FadeDown => "reveal-fade-down",
            Self::FadeLeft => "reveal-fade-left",
            Self::FadeRight => "reveal-fade-right",
            Self::ScaleIn => "reveal-scale-in",
        }
    }
}

/// Render variant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevealVariant {
    #[default]
    Hidden,
    Visible,
}

impl RevealVariant {
    pub const fn from_visibility(is_visible: bool) -> Self {
        if is_visible { Self::Visible } else { Self::Hidden }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Hidden => "is-hidden",
            Self::Visible => "is-visible",
        }
    }
}

/// Delay for the `index`-th child of a staggered group
pub fn stagger(index: usize, step_secs: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let index = index as f64;
    index * step_secs
}

/// Reveal state of a single wrapper
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reveal {
    pub motion: Motion,
    pub options: RevealOptions,
    variant: RevealVariant,
}

impl Reveal {
    pub const fn new(motion: Motion, options: RevealOptions) -> Self {
        Self {
            motion,
            options,
            variant: RevealVariant::Hidden,
        }
    }

    /// Feed an intersection result and return the resulting variant.
    ///
    /// With `once`, the first visible result latches.
    pub fn observe(&mut self, is_intersecting: bool) -> RevealVariant {
        if self.options.once && self.variant == RevealVariant::Visible {
            return self.variant;
        }
        self.variant = RevealVariant::from_visibility(is_intersecting);
        self.variant
    }

    pub const fn variant(&self) -> RevealVariant {
        self.variant
    }

    /// Whether the observer can be disconnected
    pub fn is_settled(&self) -> bool {
        self.options.once && self.variant == RevealVariant::Visible
    }

    pub fn class(&self) -> String {
        format!("reveal {} {}", self.motion.class(), self.variant.class())
    }

    pub fn style(&self) -> String {
        format!(
            "transition-duration: {:.2}s; transition-delay: {:.2}s;",
            self.options.duration_secs, self.options.delay_secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_latches_visible() {
        let mut reveal = Reveal::new(Motion::FadeUp, RevealOptions::default());
        assert_eq!(reveal.variant(), RevealVariant::Hidden);
        assert_eq!(reveal.observe(true), RevealVariant::Visible);
        assert_eq!(reveal.observe(false), RevealVariant::Visible);
        assert!(reveal.is_settled());
    }

    #[test]
    fn test_repeat_follows_visibility() {
        let options = RevealOptions { once: false, ..RevealOptions::default() };
        let mut reveal = Reveal::new(Motion::ScaleIn, options);
        assert_eq!(reveal.observe(true), RevealVariant::Visible);
        assert_eq!(reveal.observe(false), RevealVariant::Hidden);
        assert!(!reveal.is_settled());
    }

    #[test]
    fn test_class_and_style() {
        let mut reveal = Reveal::new(Motion::ScaleIn, RevealOptions::default().with_delay(stagger(3, 0.1)));
        assert_eq!(reveal.class(), "reveal reveal-scale-in is-hidden");
        reveal.observe(true);
        assert_eq!(reveal.class(), "reveal reveal-scale-in is-visible");
        assert_eq!(reveal.style(), "transition-duration: 0.50s; transition-delay: 0.30s;");
    }
}

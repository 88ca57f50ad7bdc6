//! Colour Theme
//!
//! Lives only in the document root class for the session.

/// Class added to the root element in dark mode
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Initial theme from `prefers-color-scheme: dark`
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::from_prefers_dark(false);
        assert_eq!(theme, Theme::Light);
        assert!(theme.toggled().is_dark());
        assert_eq!(theme.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_prefers_dark() {
        assert!(Theme::from_prefers_dark(true).is_dark());
        assert!(!Theme::from_prefers_dark(false).is_dark());
    }
}

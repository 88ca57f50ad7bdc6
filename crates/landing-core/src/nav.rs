//! Header Navigation
//!
//! Mobile menu open/closed state and the compact "scrolled" header style.

use crate::config::LayoutConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    scrolled: bool,
}

impl NavMenu {
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Link click inside the menu
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Click anywhere on the document. Only clicks outside the menu close it.
    pub const fn on_document_click(&mut self, inside_menu: bool) {
        if !inside_menu {
            self.open = false;
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64, layout: &LayoutConfig) {
        self.scrolled = scroll_y > layout.scrolled_offset_px;
    }

    /// The mobile menu has no meaning once the desktop nav is showing
    pub fn on_resize(&mut self, width_px: f64, layout: &LayoutConfig) {
        if width_px >= layout.desktop_breakpoint_px {
            self.open = false;
        }
    }

    pub const fn header_class(&self) -> &'static str {
        if self.scrolled {
            "site-header is-scrolled"
        } else {
            "site-header"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        let layout = LayoutConfig::default();
        let mut menu = NavMenu::default();
        menu.on_scroll(10.0, &layout);
        assert!(!menu.is_scrolled());
        menu.on_scroll(10.5, &layout);
        assert!(menu.is_scrolled());
        assert_eq!(menu.header_class(), "site-header is-scrolled");
    }

    #[test]
    fn test_resize_to_desktop_closes() {
        let layout = LayoutConfig::default();
        let mut menu = NavMenu::default();
        menu.toggle();
        menu.on_resize(500.0, &layout);
        assert!(menu.is_open());
        menu.on_resize(768.0, &layout);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle_and_close() {
        let mut menu = NavMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_inside_menu_keeps_it_open() {
        let mut menu = NavMenu::default();
        menu.toggle();
        menu.on_document_click(true);
        assert!(menu.is_open());
        menu.on_document_click(false);
        assert!(!menu.is_open());
    }
}

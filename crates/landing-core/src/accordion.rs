//! FAQ Accordion
//!
//! Single-open and collapsible: opening an item closes the others, and
//! toggling the open item closes it.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub const fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    /// `data-state` attribute value for an item
    pub fn state_attr(&self, index: usize) -> &'static str {
        if self.is_open(index) { "open" } else { "closed" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open() {
        let mut accordion = Accordion::default();
        accordion.toggle(2);
        accordion.toggle(5);
        assert!(accordion.is_open(5));
        assert!(!accordion.is_open(2));
        assert_eq!(accordion.state_attr(2), "closed");
    }

    #[test]
    fn test_collapsible() {
        let mut accordion = Accordion::default();
        accordion.toggle(1);
        accordion.toggle(1);
        assert_eq!(accordion.open_item(), None);
    }
}

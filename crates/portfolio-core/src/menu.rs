//! Collapsible navigation menu.

/// Where a document click landed, relative to the menu controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Hamburger,
    /// Inside the nav-link list (a link or the list's padding)
    NavLinks,
    Elsewhere,
}

/// Open/closed state of the mobile menu. Page scroll is locked while open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    /// `body` overflow style projected from the lock
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }

    /// Hamburger click. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Any nav-link click. Returns true if this closed the menu.
    pub fn on_link_click(&mut self) -> bool {
        self.close()
    }

    /// A click anywhere in the document. Returns true if this closed the menu.
    pub fn on_document_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Elsewhere => self.close(),
            ClickTarget::Hamburger | ClickTarget::NavLinks => false,
        }
    }

    fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

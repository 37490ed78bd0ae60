//! Scroll-position observer.
//!
//! Every scroll tick derives, from one offset read: whether the navbar is
//! condensed, which section's nav link is active, and whether the
//! back-to-top control is shown. Ticks are not throttled.

use crate::config::TimingConfig;
use crate::types::{Bounds, SectionId};

/// A section's position as last reported by the page
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub bounds: Bounds,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: SectionId::new(id),
            bounds: Bounds::new(top, height),
        }
    }
}

/// The last section in document order whose look-ahead window contains `offset`
///
/// A section's window starts `navbar_height + lookahead` above its top and
/// spans its height.
pub fn active_section<'a>(
    offset: f64,
    navbar_height: f64,
    lookahead: f64,
    sections: &'a [SectionBounds],
) -> Option<&'a SectionId> {
    sections
        .iter()
        .filter(|s| {
            let top = s.bounds.top - navbar_height - lookahead;
            offset >= top && offset < top + s.bounds.height
        })
        .last()
        .map(|s| &s.id)
}

/// Which derived facts a tick changed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollChanges {
    pub condensed: Option<bool>,
    pub active: Option<Option<SectionId>>,
    pub back_to_top: Option<bool>,
}

impl ScrollChanges {
    pub fn is_empty(&self) -> bool {
        self.condensed.is_none() && self.active.is_none() && self.back_to_top.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ScrollObserver {
    condense_px: f64,
    lookahead_px: f64,
    back_to_top_px: f64,
    navbar_height: f64,
    sections: Vec<SectionBounds>,
    offset: f64,
    condensed: bool,
    active: Option<SectionId>,
    back_to_top: bool,
}

impl ScrollObserver {
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            condense_px: timing.navbar_condense_px,
            lookahead_px: timing.section_lookahead_px,
            back_to_top_px: timing.back_to_top_px,
            navbar_height: 0.0,
            sections: Vec::new(),
            offset: 0.0,
            condensed: false,
            active: None,
            back_to_top: false,
        }
    }

    /// Replace the known page geometry
    pub fn set_layout(&mut self, navbar_height: f64, sections: Vec<SectionBounds>) {
        self.navbar_height = navbar_height;
        self.sections = sections;
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Whether the nav link for `id` carries the active flag
    pub fn is_link_active(&self, id: &SectionId) -> bool {
        self.active.as_ref() == Some(id)
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top
    }

    /// A scroll tick at `offset`
    pub fn on_scroll(&mut self, offset: f64) -> ScrollChanges {
        self.offset = offset;
        let mut changes = ScrollChanges::default();

        let condensed = offset > self.condense_px;
        if condensed != self.condensed {
            self.condensed = condensed;
            changes.condensed = Some(condensed);
        }

        let active = active_section(offset, self.navbar_height, self.lookahead_px, &self.sections).cloned();
        if active != self.active {
            self.active = active.clone();
            changes.active = Some(active);
        }

        let back_to_top = offset > self.back_to_top_px;
        if back_to_top != self.back_to_top {
            self.back_to_top = back_to_top;
            changes.back_to_top = Some(back_to_top);
        }

        changes
    }

    /// Smooth-scroll destination for an in-page anchor: the section top
    /// less the navbar height. `None` for unknown sections.
    pub fn scroll_target(&self, id: &SectionId) -> Option<f64> {
        self.sections
            .iter()
            .find(|s| &s.id == id)
            .map(|s| (s.bounds.top - self.navbar_height).max(0.0))
    }
}

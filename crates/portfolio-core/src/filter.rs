//! Project gallery filter.
//!
//! Single-select category buttons over a fixed set of cards. Hiding a
//! card is two-step (fade, then leave layout); showing one is the
//! reverse (enter layout, then fade in after the reflow delay).

use std::time::Duration;

use crate::config::TimingConfig;
use crate::scheduler::{ScheduledAction, Scheduler};
use crate::types::Category;

/// Transition applied to every card
pub const CARD_TRANSITION: &str = "opacity 0.3s ease, transform 0.3s ease";

/// Visual state of one project card
#[derive(Debug, Clone, PartialEq)]
pub struct CardState {
    pub category: Category,
    /// Participates in layout (`display: block` vs `none`)
    pub in_layout: bool,
    /// Fully opaque at natural scale; otherwise transparent at 0.8
    pub shown: bool,
}

impl CardState {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            in_layout: true,
            shown: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.in_layout && self.shown
    }

    pub fn display(&self) -> &'static str {
        if self.in_layout {
            "block"
        } else {
            "none"
        }
    }

    pub fn opacity(&self) -> f32 {
        if self.shown {
            1.0
        } else {
            0.0
        }
    }

    pub fn scale(&self) -> f32 {
        if self.shown {
            1.0
        } else {
            0.8
        }
    }

    /// Inline style projected onto the card element
    pub fn style(&self) -> String {
        format!(
            "display: {}; opacity: {}; transform: scale({}); transition: {};",
            self.display(),
            self.opacity(),
            self.scale(),
            CARD_TRANSITION
        )
    }
}

#[derive(Debug, Clone)]
pub struct ProjectFilter {
    buttons: Vec<Category>,
    active: usize,
    cards: Vec<CardState>,
}

impl ProjectFilter {
    /// Buttons in display order; `all` starts active if present, else the first
    pub fn new(buttons: Vec<Category>, cards: impl IntoIterator<Item = Category>) -> Self {
        let active = buttons.iter().position(Category::is_all).unwrap_or(0);
        Self {
            buttons,
            active,
            cards: cards.into_iter().map(CardState::new).collect(),
        }
    }

    pub fn buttons(&self) -> &[Category] {
        &self.buttons
    }

    pub fn active(&self) -> Option<&Category> {
        self.buttons.get(self.active)
    }

    pub fn is_active(&self, category: &Category) -> bool {
        self.active() == Some(category)
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    /// A filter button was clicked. Unknown categories are a no-op.
    pub fn click(
        &mut self,
        category: &Category,
        now: Duration,
        scheduler: &mut Scheduler,
        timing: &TimingConfig,
    ) -> bool {
        let Some(index) = self.buttons.iter().position(|b| b == category) else {
            tracing::warn!(%category, "no filter button for category");
            return false;
        };
        self.active = index;

        for (i, card) in self.cards.iter_mut().enumerate() {
            // Start both transitions from the faded state
            card.shown = false;
            if category.matches(&card.category) {
                card.in_layout = true;
                scheduler.schedule(now, timing.card_fade_in_delay(), ScheduledAction::FadeInCard(i));
            } else {
                scheduler.schedule(now, timing.card_hide_delay(), ScheduledAction::HideCard(i));
            }
        }

        tracing::debug!(%category, "filter applied");
        true
    }

    /// Apply a due card timer
    pub fn on_card_timer(&mut self, action: &ScheduledAction) {
        match *action {
            ScheduledAction::FadeInCard(i) => {
                if let Some(card) = self.cards.get_mut(i) {
                    card.shown = true;
                }
            }
            ScheduledAction::HideCard(i) => {
                if let Some(card) = self.cards.get_mut(i) {
                    card.in_layout = false;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn gallery() -> ProjectFilter {
        ProjectFilter::new(
            vec![Category::all(), Category::new("iot"), Category::new("web")],
            ["iot", "web", "iot", "embedded"].map(Category::new),
        )
    }

    fn settle(filter: &mut ProjectFilter, sched: &mut Scheduler, now: Duration) {
        while let Some(task) = sched.pop_ready(now) {
            filter.on_card_timer(&task.action);
        }
    }

    #[test]
    fn starts_on_all_with_everything_visible() {
        let filter = gallery();
        assert!(filter.is_active(&Category::all()));
        assert!(filter.cards().iter().all(CardState::is_visible));
    }

    #[test]
    fn all_is_active_wherever_it_sits() {
        let filter = ProjectFilter::new(
            vec![Category::new("iot"), Category::new("web"), Category::all()],
            ["iot", "web"].map(Category::new),
        );
        assert_eq!(filter.active(), Some(&Category::all()));
        assert!(!filter.is_active(&Category::new("iot")));
    }

    #[test]
    fn iot_filter_shows_only_iot() {
        let mut filter = gallery();
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();
        let iot = Category::new("iot");

        assert!(filter.click(&iot, ms(0), &mut sched, &timing));
        settle(&mut filter, &mut sched, ms(300));

        for card in filter.cards() {
            assert_eq!(card.is_visible(), card.category == iot);
        }
        let active: Vec<_> = filter.buttons().iter().filter(|b| filter.is_active(b)).collect();
        assert_eq!(active, vec![&iot]);
    }

    #[test]
    fn matched_card_enters_layout_before_fading_in() {
        let mut filter = gallery();
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();

        filter.click(&Category::new("web"), ms(0), &mut sched, &timing);
        settle(&mut filter, &mut sched, ms(300));
        assert!(!filter.cards()[0].in_layout);

        filter.click(&Category::all(), ms(1000), &mut sched, &timing);
        let card = &filter.cards()[0];
        assert!(card.in_layout);
        assert_eq!(card.opacity(), 0.0);

        settle(&mut filter, &mut sched, ms(1049));
        assert!(!filter.cards()[0].shown);
        settle(&mut filter, &mut sched, ms(1050));
        assert!(filter.cards()[0].is_visible());
    }

    #[test]
    fn mismatched_card_fades_then_leaves_layout() {
        let mut filter = gallery();
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();

        filter.click(&Category::new("iot"), ms(0), &mut sched, &timing);
        let web = &filter.cards()[1];
        assert!(web.in_layout);
        assert_eq!(web.opacity(), 0.0);
        assert_eq!(web.scale(), 0.8);

        settle(&mut filter, &mut sched, ms(299));
        assert!(filter.cards()[1].in_layout);
        settle(&mut filter, &mut sched, ms(300));
        assert_eq!(filter.cards()[1].display(), "none");
    }

    #[test]
    fn rapid_clicks_do_not_hide_reselected_card() {
        let mut filter = gallery();
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();

        // Hide is pending for the web card when "all" brings it back
        filter.click(&Category::new("iot"), ms(0), &mut sched, &timing);
        filter.click(&Category::all(), ms(100), &mut sched, &timing);
        settle(&mut filter, &mut sched, ms(1000));

        assert!(filter.cards().iter().all(CardState::is_visible));
    }

    #[test]
    fn unknown_category_is_noop() {
        let mut filter = gallery();
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();

        assert!(!filter.click(&Category::new("robotics"), ms(0), &mut sched, &timing));
        assert!(filter.is_active(&Category::all()));
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn style_projection() {
        let card = CardState::new(Category::new("iot"));
        assert_eq!(
            card.style(),
            "display: block; opacity: 1; transform: scale(1); transition: opacity 0.3s ease, transform 0.3s ease;"
        );
    }
}

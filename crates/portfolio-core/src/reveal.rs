//! Scroll-reveal coordinator.
//!
//! Elements tagged for entrance animation latch to revealed the first
//! time enough of them is in view. A revealed skill category cascades
//! into its bars, each filling one stagger step after the previous.

use std::time::Duration;

use crate::config::TimingConfig;
use crate::scheduler::{ScheduledAction, Scheduler};
use crate::types::{Bounds, RevealKey, RevealVariant, Viewport};

/// Fraction of `element` inside `viewport`, in `[0, 1]`
///
/// Zero-height elements count as fully visible while their top edge is
/// inside the viewport.
pub fn intersection_ratio(element: Bounds, viewport: Viewport) -> f64 {
    let view = viewport.bounds();
    if element.height <= 0.0 {
        let inside = element.top >= view.top && element.top <= view.bottom();
        return if inside { 1.0 } else { 0.0 };
    }
    let visible = element.bottom().min(view.bottom()) - element.top.max(view.top);
    (visible.max(0.0) / element.height).min(1.0)
}

/// One intersection observation
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub key: RevealKey,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealElement {
    pub key: RevealKey,
    pub variant: RevealVariant,
    /// Reveal cascades into the skill bars registered under this key
    pub skill_category: bool,
    revealed: bool,
    bounds: Option<Bounds>,
}

impl RevealElement {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Classes projected onto the element
    pub fn class(&self) -> String {
        let mut class = self.variant.class().to_string();
        if self.skill_category {
            class.push_str(" skill-category");
        }
        if self.revealed {
            class.push_str(" active");
        }
        class
    }
}

/// Proficiency indicator inside a skill category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    pub label: String,
    pub target_percent: u8,
    pub current_percent: u8,
}

impl SkillBar {
    pub fn new(label: impl Into<String>, target_percent: u8) -> Self {
        Self {
            label: label.into(),
            target_percent: target_percent.min(100),
            current_percent: 0,
        }
    }

    /// Inline width style
    pub fn width(&self) -> String {
        if self.current_percent == 0 {
            "0".to_string()
        } else {
            format!("{}%", self.current_percent)
        }
    }
}

/// A bar that just filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledBar {
    pub category: RevealKey,
    pub index: usize,
    pub percent: u8,
}

#[derive(Debug, Clone)]
pub struct RevealCoordinator {
    threshold: f64,
    elements: Vec<RevealElement>,
    bars: Vec<(RevealKey, Vec<SkillBar>)>,
}

impl RevealCoordinator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            elements: Vec::new(),
            bars: Vec::new(),
        }
    }

    /// Tag an element for entrance animation
    pub fn register(&mut self, key: RevealKey, variant: RevealVariant) {
        self.push(key, variant, false);
    }

    /// Tag a skill category; its bars start at width 0
    pub fn register_skill_category(&mut self, key: RevealKey, bars: Vec<SkillBar>) {
        self.push(key.clone(), RevealVariant::Fade, true);
        self.bars.push((key, bars));
    }

    fn push(&mut self, key: RevealKey, variant: RevealVariant, skill_category: bool) {
        if self.element(&key).is_some() {
            tracing::warn!(%key, "reveal element registered twice");
            return;
        }
        self.elements.push(RevealElement {
            key,
            variant,
            skill_category,
            revealed: false,
            bounds: None,
        });
    }

    pub fn element(&self, key: &RevealKey) -> Option<&RevealElement> {
        self.elements.iter().find(|e| &e.key == key)
    }

    pub fn elements(&self) -> &[RevealElement] {
        &self.elements
    }

    pub fn is_revealed(&self, key: &RevealKey) -> bool {
        self.element(key).is_some_and(RevealElement::is_revealed)
    }

    pub fn skill_bars(&self, category: &RevealKey) -> &[SkillBar] {
        self.bars
            .iter()
            .find(|(key, _)| key == category)
            .map(|(_, bars)| bars.as_slice())
            .unwrap_or(&[])
    }

    /// Record where an element sits in the document
    pub fn set_bounds(&mut self, key: &RevealKey, bounds: Bounds) {
        match self.elements.iter_mut().find(|e| &e.key == key) {
            Some(element) => element.bounds = Some(bounds),
            None => tracing::warn!(%key, "bounds for unknown reveal element"),
        }
    }

    /// Derive intersections for every element with known bounds
    pub fn observe_viewport(
        &mut self,
        viewport: Viewport,
        now: Duration,
        scheduler: &mut Scheduler,
        timing: &TimingConfig,
    ) -> Vec<RevealKey> {
        let entries: Vec<Intersection> = self
            .elements
            .iter()
            .filter(|e| !e.revealed)
            .filter_map(|e| {
                e.bounds.map(|b| Intersection {
                    key: e.key.clone(),
                    ratio: intersection_ratio(b, viewport),
                })
            })
            .collect();
        self.observe(&entries, now, scheduler, timing)
    }

    /// Apply intersection observations; returns the newly revealed keys
    pub fn observe(
        &mut self,
        entries: &[Intersection],
        now: Duration,
        scheduler: &mut Scheduler,
        timing: &TimingConfig,
    ) -> Vec<RevealKey> {
        let mut revealed = Vec::new();
        for entry in entries {
            if entry.ratio < self.threshold {
                continue;
            }
            let Some(element) = self.elements.iter_mut().find(|e| e.key == entry.key) else {
                continue;
            };
            if element.revealed {
                continue;
            }
            element.revealed = true;
            let skill_category = element.skill_category;
            tracing::debug!(key = %entry.key, ratio = entry.ratio, "revealed");

            if skill_category {
                let count = self.skill_bars(&entry.key).len();
                for index in 0..count {
                    scheduler.schedule(
                        now,
                        timing.skill_stagger() * index as u32,
                        ScheduledAction::FillSkillBar {
                            category: entry.key.clone(),
                            index,
                        },
                    );
                }
            }
            revealed.push(entry.key.clone());
        }
        revealed
    }

    /// Apply a due skill-bar timer
    pub fn on_skill_timer(&mut self, action: &ScheduledAction) -> Option<FilledBar> {
        let ScheduledAction::FillSkillBar { category, index } = action else {
            return None;
        };
        let (_, bars) = self.bars.iter_mut().find(|(key, _)| key == category)?;
        let bar = bars.get_mut(*index)?;
        bar.current_percent = bar.target_percent;
        Some(FilledBar {
            category: category.clone(),
            index: *index,
            percent: bar.current_percent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn key(k: &str) -> RevealKey {
        RevealKey::new(k)
    }

    fn seen(k: &str, ratio: f64) -> Intersection {
        Intersection { key: key(k), ratio }
    }

    #[test]
    fn ratio_math() {
        let view = Viewport::new(0.0, 800.0);
        assert_eq!(intersection_ratio(Bounds::new(900.0, 100.0), view), 0.0);
        assert_eq!(intersection_ratio(Bounds::new(750.0, 100.0), view), 0.5);
        assert_eq!(intersection_ratio(Bounds::new(100.0, 100.0), view), 1.0);
        assert_eq!(intersection_ratio(Bounds::new(-50.0, 100.0), view), 0.5);
        assert_eq!(intersection_ratio(Bounds::new(400.0, 0.0), view), 1.0);
    }

    #[test]
    fn threshold_is_ten_percent() {
        let mut coord = RevealCoordinator::new(0.1);
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();
        coord.register(key("about"), RevealVariant::FadeLeft);

        coord.observe(&[seen("about", 0.09)], ms(0), &mut sched, &timing);
        assert!(!coord.is_revealed(&key("about")));
        let newly = coord.observe(&[seen("about", 0.1)], ms(0), &mut sched, &timing);
        assert_eq!(newly, vec![key("about")]);
        assert_eq!(coord.element(&key("about")).unwrap().class(), "reveal-left active");
    }

    #[test]
    fn reveal_is_a_latch() {
        let mut coord = RevealCoordinator::new(0.1);
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();
        coord.register(key("hero"), RevealVariant::Fade);

        coord.observe(&[seen("hero", 1.0)], ms(0), &mut sched, &timing);
        let again = coord.observe(&[seen("hero", 0.0), seen("hero", 0.5)], ms(10), &mut sched, &timing);
        assert!(again.is_empty());
        assert!(coord.is_revealed(&key("hero")));
    }

    #[test]
    fn skill_bars_fill_with_stagger() {
        let mut coord = RevealCoordinator::new(0.1);
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();
        coord.register_skill_category(
            key("skills"),
            vec![SkillBar::new("C", 90), SkillBar::new("Rust", 75), SkillBar::new("VHDL", 60)],
        );
        assert!(coord.skill_bars(&key("skills")).iter().all(|b| b.width() == "0"));

        coord.observe(&[seen("skills", 0.5)], ms(1000), &mut sched, &timing);

        let mut fills = Vec::new();
        while let Some(task) = sched.pop_ready(ms(2000)) {
            let filled = coord.on_skill_timer(&task.action).unwrap();
            fills.push((task.run_at, filled.index, filled.percent));
        }
        assert_eq!(
            fills,
            vec![(ms(1000), 0, 90), (ms(1150), 1, 75), (ms(1300), 2, 60)]
        );
        assert_eq!(coord.skill_bars(&key("skills"))[1].width(), "75%");
    }

    #[test]
    fn bars_with_same_label_fill_by_position() {
        let mut coord = RevealCoordinator::new(0.1);
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();
        coord.register_skill_category(
            key("skills"),
            vec![SkillBar::new("C", 90), SkillBar::new("C", 40)],
        );

        coord.observe(&[seen("skills", 1.0)], ms(0), &mut sched, &timing);
        while let Some(task) = sched.pop_ready(ms(500)) {
            coord.on_skill_timer(&task.action);
        }

        let widths: Vec<_> = coord.skill_bars(&key("skills")).iter().map(SkillBar::width).collect();
        assert_eq!(widths, vec!["90%", "40%"]);
    }

    #[test]
    fn observe_viewport_uses_bounds() {
        let mut coord = RevealCoordinator::new(0.1);
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();
        coord.register(key("projects"), RevealVariant::Fade);
        coord.register(key("contact"), RevealVariant::Fade);
        coord.set_bounds(&key("projects"), Bounds::new(1000.0, 400.0));
        coord.set_bounds(&key("contact"), Bounds::new(2000.0, 400.0));

        let newly = coord.observe_viewport(Viewport::new(300.0, 800.0), ms(0), &mut sched, &timing);
        assert_eq!(newly, vec![key("projects")]);
        assert!(!coord.is_revealed(&key("contact")));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut coord = RevealCoordinator::new(0.1);
        let mut sched = Scheduler::new();
        let timing = TimingConfig::default();
        assert!(coord.observe(&[seen("ghost", 1.0)], ms(0), &mut sched, &timing).is_empty());
        assert!(coord.skill_bars(&key("ghost")).is_empty());
    }
}

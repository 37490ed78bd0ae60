//! Keyed timer scheduler for deferred visual steps.
//!
//! Fade delays, banner dismissal and staggered skill-bar fills are all
//! scheduled here against a virtual clock (`Duration` since page load).
//! Every task is keyed by the element it affects; scheduling a task for a
//! key cancels whatever was pending for that key, so two overlapping
//! triggers never race on the same element's styles.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;

use crate::types::RevealKey;

/// The element a scheduled task writes to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// A project card, by index in document order
    Card(usize),
    /// The single form status banner
    Banner,
    /// A skill bar, by parent category and index within it
    SkillBar { category: RevealKey, index: usize },
    /// The newsletter input placeholder
    NewsletterPlaceholder,
}

/// What to do when a task comes due
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduledAction {
    /// Fade a card (already back in layout) to full opacity
    FadeInCard(usize),
    /// Remove a faded-out card from layout
    HideCard(usize),
    /// Start the banner fade-out
    FadeBanner { banner_id: u64 },
    /// Drop the banner from the page
    RemoveBanner { banner_id: u64 },
    /// Fill a skill bar to its target width
    FillSkillBar { category: RevealKey, index: usize },
    /// Put the default newsletter placeholder back
    RestorePlaceholder,
}

impl ScheduledAction {
    pub fn key(&self) -> TaskKey {
        match self {
            ScheduledAction::FadeInCard(i) | ScheduledAction::HideCard(i) => TaskKey::Card(*i),
            ScheduledAction::FadeBanner { .. } | ScheduledAction::RemoveBanner { .. } => {
                TaskKey::Banner
            }
            ScheduledAction::FillSkillBar { category, index } => TaskKey::SkillBar {
                category: category.clone(),
                index: *index,
            },
            ScheduledAction::RestorePlaceholder => TaskKey::NewsletterPlaceholder,
        }
    }
}

/// A scheduled task
#[derive(Debug)]
pub struct ScheduledTask {
    /// When the task should run
    pub run_at: Duration,
    /// Unique task ID
    pub id: u64,
    /// What to do
    pub action: ScheduledAction,
}

impl PartialEq for ScheduledTask {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ScheduledTask {}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Timer queue with per-key cancellation
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: BinaryHeap<ScheduledTask>,
    /// Live task id per key; heap entries with any other id are cancelled
    live: HashMap<TaskKey, u64>,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to run `delay` after `now`, replacing any pending
    /// task for the same element.
    pub fn schedule(&mut self, now: Duration, delay: Duration, action: ScheduledAction) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.live.insert(action.key(), id).is_some() {
            tracing::trace!(?action, "superseding pending task");
        }

        self.tasks.push(ScheduledTask {
            run_at: now + delay,
            id,
            action,
        });

        id
    }

    /// Cancel whatever is pending for `key`. Returns true if something was.
    pub fn cancel(&mut self, key: &TaskKey) -> bool {
        self.live.remove(key).is_some()
    }

    /// Whether a live task is pending for `key`
    pub fn is_pending(&self, key: &TaskKey) -> bool {
        self.live.contains_key(key)
    }

    /// Number of live (non-cancelled) tasks
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    /// Pop the next live task due at or before `now`
    pub fn pop_ready(&mut self, now: Duration) -> Option<ScheduledTask> {
        while let Some(task) = self.tasks.peek() {
            if task.run_at > now {
                return None;
            }
            let task = self.tasks.pop()?;
            let key = task.action.key();
            if self.live.get(&key) == Some(&task.id) {
                self.live.remove(&key);
                return Some(task);
            }
            // Cancelled or superseded
        }
        None
    }

    /// When the earliest live task is due
    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks
            .iter()
            .filter(|task| self.live.get(&task.action.key()) == Some(&task.id))
            .map(|task| task.run_at)
            .min()
    }

    /// Duration until the next live task, for sleeping
    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }
}

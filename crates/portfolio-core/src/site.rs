//! The page coordinator.
//!
//! `Site` owns one instance of every view-state component plus the shared
//! scheduler and notice bus. The shell feeds it `UiEvent`s and clock
//! ticks; it routes each to the component that owns the affected state,
//! in a fixed order, and reports what visibly changed.
//!
//! ## Event routing
//!
//! ```text
//! UiEvent ──► Site::dispatch(now)
//!               ├── run timers due at or before `now`
//!               ├── Scroll / Layout   -> ScrollObserver, RevealCoordinator
//!               ├── Hamburger / Link / DocumentClick -> MenuToggle (+ smooth scroll)
//!               ├── FilterClick       -> ProjectFilter
//!               ├── Field* / Submit   -> FormController
//!               └── Newsletter*       -> Newsletter
//!             ──► Vec<SiteNotice>  (also published on the NoticeBus)
//! ```

use std::time::Duration;

use tokio::sync::broadcast;

use crate::config::SiteConfig;
use crate::filter::ProjectFilter;
use crate::form::{BannerKind, BannerStep, FormController, SubmitOutcome};
use crate::menu::{ClickTarget, MenuToggle};
use crate::newsletter::Newsletter;
use crate::notices::{NoticeBus, SiteNotice};
use crate::reveal::{Intersection, RevealCoordinator, SkillBar};
use crate::scheduler::{ScheduledAction, Scheduler};
use crate::scroll::{ScrollObserver, SectionBounds};
use crate::types::{Bounds, Category, FieldName, RevealKey, SectionId, Viewport};

/// A browser event, reduced to what the components need
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Page geometry changed (load, resize, font swap)
    Layout {
        navbar_height: f64,
        viewport_height: f64,
        sections: Vec<SectionBounds>,
        reveals: Vec<(RevealKey, Bounds)>,
    },
    /// Window scrolled to this offset
    Scroll { offset: f64 },
    /// Intersection observations reported directly by the page
    Intersections(Vec<Intersection>),
    HamburgerClick,
    /// An anchor was clicked; `in_nav` if it sits in the nav-link list
    LinkClick { href: String, in_nav: bool },
    DocumentClick(ClickTarget),
    BackToTopClick,
    FilterClick(Category),
    FieldInput { field: FieldName, value: String },
    FieldBlur(FieldName),
    Submit,
    NewsletterInput(String),
    NewsletterSubmit,
}

pub struct Site {
    config: SiteConfig,
    scheduler: Scheduler,
    notices: NoticeBus,
    scroll: ScrollObserver,
    menu: MenuToggle,
    reveal: RevealCoordinator,
    filter: ProjectFilter,
    form: FormController,
    newsletter: Newsletter,
    viewport_height: f64,
}

impl Site {
    /// Build the page state described by `config`
    pub fn new(config: SiteConfig) -> Self {
        let content = &config.content;

        let mut reveal = RevealCoordinator::new(config.timing.reveal_threshold);
        for entry in &content.reveals {
            reveal.register(entry.key.clone(), entry.variant);
        }
        for skill in &content.skills {
            let bars = skill
                .bars
                .iter()
                .map(|bar| SkillBar::new(bar.label.clone(), bar.percent))
                .collect();
            reveal.register_skill_category(skill.key.clone(), bars);
        }

        let filter = ProjectFilter::new(
            content.filters.clone(),
            content.projects.iter().map(|p| p.category.clone()),
        );

        tracing::info!(
            sections = content.sections.len(),
            projects = content.projects.len(),
            reveals = reveal.elements().len(),
            "site initialized"
        );

        Self {
            scroll: ScrollObserver::new(&config.timing),
            scheduler: Scheduler::new(),
            notices: NoticeBus::new(),
            menu: MenuToggle::new(),
            reveal,
            filter,
            form: FormController::new(),
            newsletter: Newsletter::new(),
            viewport_height: 0.0,
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn scroll(&self) -> &ScrollObserver {
        &self.scroll
    }

    pub fn menu(&self) -> &MenuToggle {
        &self.menu
    }

    pub fn reveal(&self) -> &RevealCoordinator {
        &self.reveal
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn newsletter(&self) -> &Newsletter {
        &self.newsletter
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SiteNotice> {
        self.notices.subscribe()
    }

    /// When the next scheduled visual step is due
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    fn emit(&self, out: &mut Vec<SiteNotice>, notice: SiteNotice) {
        self.notices.publish(notice.clone());
        out.push(notice);
    }

    /// Handle one event at time `now`
    pub fn dispatch(&mut self, event: UiEvent, now: Duration) -> Vec<SiteNotice> {
        let mut out = self.tick(now);
        let timing = self.config.timing.clone();

        match event {
            UiEvent::Layout {
                navbar_height,
                viewport_height,
                sections,
                reveals,
            } => {
                self.viewport_height = viewport_height;
                self.scroll.set_layout(navbar_height, sections);
                for (key, bounds) in reveals {
                    self.reveal.set_bounds(&key, bounds);
                }
                let offset = self.scroll.offset();
                self.on_scroll(offset, now, &mut out);
            }
            UiEvent::Scroll { offset } => self.on_scroll(offset, now, &mut out),
            UiEvent::Intersections(entries) => {
                for key in self.reveal.observe(&entries, now, &mut self.scheduler, &timing) {
                    self.emit(&mut out, SiteNotice::Revealed(key));
                }
            }
            UiEvent::HamburgerClick => {
                let notice = if self.menu.toggle() {
                    SiteNotice::MenuOpened
                } else {
                    SiteNotice::MenuClosed
                };
                self.emit(&mut out, notice);
            }
            UiEvent::LinkClick { href, in_nav } => {
                if in_nav && self.menu.on_link_click() {
                    self.emit(&mut out, SiteNotice::MenuClosed);
                }
                if let Some(id) = SectionId::from_anchor(&href) {
                    match self.scroll.scroll_target(&id) {
                        Some(top) => self.emit(&mut out, SiteNotice::ScrollRequested(top)),
                        None => tracing::warn!(%href, "link target not on page"),
                    }
                }
            }
            UiEvent::DocumentClick(target) => {
                if self.menu.on_document_click(target) {
                    self.emit(&mut out, SiteNotice::MenuClosed);
                }
            }
            UiEvent::BackToTopClick => self.emit(&mut out, SiteNotice::ScrollRequested(0.0)),
            UiEvent::FilterClick(category) => {
                if self.filter.click(&category, now, &mut self.scheduler, &timing) {
                    self.emit(&mut out, SiteNotice::FilterApplied(category));
                }
            }
            UiEvent::FieldInput { field, value } => {
                if let Some(valid) = self.form.on_input(field, value) {
                    self.emit(&mut out, SiteNotice::FieldValidity { field, valid });
                }
            }
            UiEvent::FieldBlur(field) => {
                let valid = self.form.on_blur(field);
                self.emit(&mut out, SiteNotice::FieldValidity { field, valid });
            }
            UiEvent::Submit => match self.form.on_submit(now, &mut self.scheduler, &timing) {
                SubmitOutcome::Allowed => self.emit(&mut out, SiteNotice::SubmissionAllowed),
                SubmitOutcome::Blocked { invalid } => {
                    self.emit(&mut out, SiteNotice::SubmissionBlocked(invalid));
                    if let Some(banner) = self.form.banner() {
                        let notice = SiteNotice::BannerShown {
                            banner_id: banner.id,
                            kind: banner.kind,
                        };
                        self.emit(&mut out, notice);
                    }
                }
            },
            UiEvent::NewsletterInput(value) => self.newsletter.on_input(value),
            UiEvent::NewsletterSubmit => {
                if self.newsletter.on_submit(now, &mut self.scheduler, &timing) {
                    self.emit(&mut out, SiteNotice::NewsletterSubscribed);
                }
            }
        }

        out
    }

    fn on_scroll(&mut self, offset: f64, now: Duration, out: &mut Vec<SiteNotice>) {
        let changes = self.scroll.on_scroll(offset);
        if let Some(condensed) = changes.condensed {
            self.emit(out, SiteNotice::NavbarCondensed(condensed));
        }
        if let Some(active) = changes.active {
            self.emit(out, SiteNotice::ActiveSectionChanged(active));
        }
        if let Some(visible) = changes.back_to_top {
            self.emit(out, SiteNotice::BackToTopVisible(visible));
        }

        let viewport = Viewport::new(offset, self.viewport_height);
        let timing = &self.config.timing;
        for key in self.reveal.observe_viewport(viewport, now, &mut self.scheduler, timing) {
            self.emit(out, SiteNotice::Revealed(key));
        }
    }

    /// Show a status banner above the contact form
    pub fn show_banner(&mut self, kind: BannerKind, message: impl Into<String>, now: Duration) -> u64 {
        let banner_id =
            self.form
                .show_banner(kind, message, now, &mut self.scheduler, &self.config.timing);
        self.notices.publish(SiteNotice::BannerShown { banner_id, kind });
        banner_id
    }

    /// Run every scheduled step due at or before `now`
    pub fn tick(&mut self, now: Duration) -> Vec<SiteNotice> {
        let mut out = Vec::new();
        while let Some(task) = self.scheduler.pop_ready(now) {
            let at = task.run_at;
            match &task.action {
                ScheduledAction::FadeInCard(_) | ScheduledAction::HideCard(_) => {
                    self.filter.on_card_timer(&task.action);
                }
                ScheduledAction::FadeBanner { .. } | ScheduledAction::RemoveBanner { .. } => {
                    let step = self.form.on_banner_timer(
                        &task.action,
                        at,
                        &mut self.scheduler,
                        &self.config.timing,
                    );
                    if let Some(BannerStep::Removed(banner_id)) = step {
                        self.emit(&mut out, SiteNotice::BannerRemoved { banner_id });
                    }
                }
                ScheduledAction::FillSkillBar { .. } => {
                    if let Some(filled) = self.reveal.on_skill_timer(&task.action) {
                        let notice = SiteNotice::SkillBarFilled {
                            category: filled.category,
                            index: filled.index,
                            percent: filled.percent,
                        };
                        self.emit(&mut out, notice);
                    }
                }
                ScheduledAction::RestorePlaceholder => self.newsletter.on_placeholder_timer(),
            }
        }
        out
    }

    // View projection: classes and styles the shell writes onto the page.

    pub fn navbar_class(&self) -> &'static str {
        if self.scroll.is_condensed() {
            "navbar scrolled"
        } else {
            "navbar"
        }
    }

    pub fn hamburger_class(&self) -> &'static str {
        if self.menu.is_open() {
            "hamburger active"
        } else {
            "hamburger"
        }
    }

    pub fn nav_links_class(&self) -> &'static str {
        if self.menu.is_open() {
            "nav-links active"
        } else {
            "nav-links"
        }
    }

    pub fn nav_link_class(&self, id: &SectionId) -> &'static str {
        if self.scroll.is_link_active(id) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }

    pub fn body_overflow(&self) -> &'static str {
        self.menu.body_overflow()
    }

    pub fn form_group_class(&self, field: FieldName) -> &'static str {
        if self.form.field(field).has_error() {
            "form-group error"
        } else {
            "form-group"
        }
    }

    pub fn reveal_class(&self, key: &RevealKey) -> String {
        self.reveal
            .element(key)
            .map(|e| e.class())
            .unwrap_or_default()
    }
}

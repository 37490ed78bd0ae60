//! End-to-end event sequences through `Site`
//!
//! Each test drives the page the way the shell does: geometry first,
//! then user events and clock ticks, then checks the projected state.

use std::time::Duration;

use portfolio_core::{
    BannerKind, Bounds, Category, ClickTarget, FieldName, Intersection, RevealKey, SectionBounds,
    SectionId, Site, SiteConfig, SiteNotice, UiEvent, INVALID_SUBMISSION_MESSAGE,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn three_sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds::new("home", 0.0, 900.0),
        SectionBounds::new("about", 900.0, 700.0),
        SectionBounds::new("projects", 1600.0, 1000.0),
    ]
}

fn site_with_layout() -> Site {
    let mut site = Site::new(SiteConfig::default());
    site.dispatch(
        UiEvent::Layout {
            navbar_height: 80.0,
            viewport_height: 800.0,
            sections: three_sections(),
            reveals: vec![
                (RevealKey::new("about-text"), Bounds::new(1000.0, 300.0)),
                (RevealKey::new("skills-embedded"), Bounds::new(2000.0, 300.0)),
            ],
        },
        ms(0),
    );
    site
}

fn fill_form(site: &mut Site, email: &str, now: Duration) {
    for (field, value) in [
        (FieldName::Name, "Ada Lovelace"),
        (FieldName::Email, email),
        (FieldName::Subject, "Collaboration"),
        (FieldName::Message, "Loved the greenhouse project."),
    ] {
        site.dispatch(
            UiEvent::FieldInput {
                field,
                value: value.to_string(),
            },
            now,
        );
    }
}

#[test]
fn scroll_inside_second_section_marks_only_its_link() {
    let mut site = site_with_layout();
    // about window: [900 - 80 - 100, 720 + 700) = [720, 1420)
    site.dispatch(UiEvent::Scroll { offset: 1000.0 }, ms(16));

    let links: Vec<_> = ["home", "about", "projects"]
        .into_iter()
        .filter(|id| site.nav_link_class(&SectionId::new(*id)) == "nav-link active")
        .collect();
    assert_eq!(links, vec!["about"]);
    assert_eq!(site.navbar_class(), "navbar scrolled");
}

#[test]
fn navbar_follows_offset_both_ways() {
    let mut site = site_with_layout();
    site.dispatch(UiEvent::Scroll { offset: 300.0 }, ms(16));
    assert_eq!(site.navbar_class(), "navbar scrolled");
    site.dispatch(UiEvent::Scroll { offset: 0.0 }, ms(32));
    assert_eq!(site.navbar_class(), "navbar");
}

#[test]
fn blocked_submission_flags_fields_and_shows_one_banner() {
    let mut site = site_with_layout();
    fill_form(&mut site, "ada@", ms(0));

    let notices = site.dispatch(UiEvent::Submit, ms(100));
    assert!(notices.contains(&SiteNotice::SubmissionBlocked(vec![FieldName::Email])));
    assert!(!notices.contains(&SiteNotice::SubmissionAllowed));
    assert_eq!(site.form_group_class(FieldName::Email), "form-group error");
    assert_eq!(site.form_group_class(FieldName::Name), "form-group");

    // A second attempt replaces the banner rather than stacking
    site.dispatch(UiEvent::Submit, ms(200));
    let banner = site.form().banner().unwrap();
    assert_eq!(banner.message, INVALID_SUBMISSION_MESSAGE);
    assert_eq!(banner.id, 2);
}

#[test]
fn valid_submission_allowed_exactly_once_per_click() {
    let mut site = site_with_layout();
    fill_form(&mut site, "ada@example.com", ms(0));

    let first = site.dispatch(UiEvent::Submit, ms(100));
    let allowed = first
        .iter()
        .filter(|n| **n == SiteNotice::SubmissionAllowed)
        .count();
    assert_eq!(allowed, 1);
    assert!(site.form().banner().is_none());

    let second = site.dispatch(UiEvent::Submit, ms(200));
    assert_eq!(second, vec![SiteNotice::SubmissionAllowed]);
}

#[test]
fn typing_fixes_a_flagged_field_live() {
    let mut site = site_with_layout();
    site.dispatch(UiEvent::FieldBlur(FieldName::Email), ms(0));
    assert_eq!(site.form_group_class(FieldName::Email), "form-group error");

    let partial = site.dispatch(
        UiEvent::FieldInput {
            field: FieldName::Email,
            value: "ada@example".to_string(),
        },
        ms(10),
    );
    assert_eq!(
        partial,
        vec![SiteNotice::FieldValidity {
            field: FieldName::Email,
            valid: false
        }]
    );

    site.dispatch(
        UiEvent::FieldInput {
            field: FieldName::Email,
            value: "ada@example.com".to_string(),
        },
        ms(20),
    );
    assert_eq!(site.form_group_class(FieldName::Email), "form-group");
}

#[test]
fn filter_iot_end_state() {
    let mut site = site_with_layout();
    let iot = Category::new("iot");
    site.dispatch(UiEvent::FilterClick(iot.clone()), ms(0));
    site.tick(ms(300));

    for card in site.filter().cards() {
        assert_eq!(card.is_visible(), card.category == iot, "{:?}", card);
    }
    let active = site
        .filter()
        .buttons()
        .iter()
        .filter(|b| site.filter().is_active(b))
        .count();
    assert_eq!(active, 1);
}

#[test]
fn skill_category_reveal_fills_bars_in_sequence() {
    let mut site = site_with_layout();
    let skills = RevealKey::new("skills-embedded");

    // 1600..2400 covers 2000..2300 fully
    let notices = site.dispatch(UiEvent::Scroll { offset: 1600.0 }, ms(1000));
    assert!(notices.contains(&SiteNotice::Revealed(skills.clone())));
    assert_eq!(site.reveal_class(&skills), "reveal skill-category active");

    let filled: Vec<_> = [1000, 1150, 1300]
        .into_iter()
        .flat_map(|t| site.tick(ms(t)))
        .filter_map(|n| match n {
            SiteNotice::SkillBarFilled { index, percent, .. } => Some((index, percent)),
            _ => None,
        })
        .collect();
    assert_eq!(filled, vec![(0, 90), (1, 75), (2, 70)]);
}

#[test]
fn revealed_element_stays_revealed() {
    let mut site = site_with_layout();
    let key = RevealKey::new("about-text");
    site.dispatch(UiEvent::Scroll { offset: 600.0 }, ms(10));
    assert!(site.reveal().is_revealed(&key));

    site.dispatch(UiEvent::Scroll { offset: 0.0 }, ms(20));
    site.dispatch(
        UiEvent::Intersections(vec![Intersection {
            key: key.clone(),
            ratio: 0.0,
        }]),
        ms(30),
    );
    assert!(site.reveal().is_revealed(&key));
}

#[test]
fn outside_click_releases_scroll_lock() {
    let mut site = site_with_layout();
    site.dispatch(UiEvent::HamburgerClick, ms(0));
    assert_eq!(site.hamburger_class(), "hamburger active");

    assert!(site
        .dispatch(UiEvent::DocumentClick(ClickTarget::NavLinks), ms(10))
        .is_empty());
    assert_eq!(
        site.dispatch(UiEvent::DocumentClick(ClickTarget::Elsewhere), ms(20)),
        vec![SiteNotice::MenuClosed]
    );
    assert_eq!(site.body_overflow(), "");
    assert_eq!(site.hamburger_class(), "hamburger");
}

#[test]
fn logo_click_while_open_closes_menu() {
    let mut site = site_with_layout();
    site.dispatch(UiEvent::HamburgerClick, ms(0));
    assert_eq!(site.body_overflow(), "hidden");

    // The brand link sits outside the nav list; its click bubbles to the page
    let notices = site.dispatch(
        UiEvent::LinkClick {
            href: "#home".to_string(),
            in_nav: false,
        },
        ms(10),
    );
    assert_eq!(notices, vec![SiteNotice::ScrollRequested(0.0)]);
    assert_eq!(
        site.dispatch(UiEvent::DocumentClick(ClickTarget::Elsewhere), ms(10)),
        vec![SiteNotice::MenuClosed]
    );
    assert!(!site.menu().is_open());
    assert_eq!(site.body_overflow(), "");
}

#[test]
fn relayout_after_filter_moves_active_section() {
    let navbar_height = 80.0;
    let layout = |projects_height: f64| UiEvent::Layout {
        navbar_height,
        viewport_height: 800.0,
        sections: vec![
            SectionBounds::new("home", 0.0, 900.0),
            SectionBounds::new("about", 900.0, 700.0),
            SectionBounds::new("projects", 1600.0, projects_height),
            SectionBounds::new("contact", 1600.0 + projects_height, 600.0),
        ],
        reveals: Vec::new(),
    };

    let mut site = Site::new(SiteConfig::default());
    site.dispatch(layout(1000.0), ms(0));
    // projects window: [1600 - 180, 1420 + 1000) = [1420, 2420)
    site.dispatch(UiEvent::Scroll { offset: 2100.0 }, ms(16));
    assert_eq!(site.scroll().active(), Some(&SectionId::new("projects")));

    // Hidden cards shrink the grid and pull contact up to 2000
    site.dispatch(UiEvent::FilterClick(Category::new("iot")), ms(100));
    site.tick(ms(400));
    let notices = site.dispatch(layout(400.0), ms(420));

    assert!(notices.contains(&SiteNotice::ActiveSectionChanged(Some(SectionId::new(
        "contact"
    )))));
    assert_eq!(site.nav_link_class(&SectionId::new("contact")), "nav-link active");
    assert_eq!(site.nav_link_class(&SectionId::new("projects")), "nav-link");
    assert_eq!(
        site.scroll().scroll_target(&SectionId::new("contact")),
        Some(2000.0 - navbar_height)
    );
}

#[test]
fn back_to_top_appears_and_scrolls_home() {
    let mut site = site_with_layout();
    let notices = site.dispatch(UiEvent::Scroll { offset: 800.0 }, ms(0));
    assert!(notices.contains(&SiteNotice::BackToTopVisible(true)));
    assert_eq!(
        site.dispatch(UiEvent::BackToTopClick, ms(10)),
        vec![SiteNotice::ScrollRequested(0.0)]
    );
}

#[test]
fn newsletter_flow() {
    let mut site = site_with_layout();
    site.dispatch(UiEvent::NewsletterInput("ada@example.com".to_string()), ms(0));
    let notices = site.dispatch(UiEvent::NewsletterSubmit, ms(0));
    assert_eq!(notices, vec![SiteNotice::NewsletterSubscribed]);
    assert_eq!(site.newsletter().placeholder(), "Thanks for subscribing!");

    site.tick(ms(3000));
    assert_eq!(site.newsletter().placeholder(), "Enter your email");
}

#[tokio::test]
async fn notice_bus_sees_dispatch_order() {
    let mut site = site_with_layout();
    let mut rx = site.subscribe();

    site.dispatch(UiEvent::HamburgerClick, ms(0));
    site.dispatch(
        UiEvent::LinkClick {
            href: "#projects".to_string(),
            in_nav: true,
        },
        ms(5),
    );
    let banner_id = site.show_banner(BannerKind::Success, "Message sent", ms(10));

    assert_eq!(rx.recv().await.unwrap(), SiteNotice::MenuOpened);
    assert_eq!(rx.recv().await.unwrap(), SiteNotice::MenuClosed);
    assert_eq!(rx.recv().await.unwrap(), SiteNotice::ScrollRequested(1520.0));
    assert_eq!(
        rx.recv().await.unwrap(),
        SiteNotice::BannerShown {
            banner_id,
            kind: BannerKind::Success
        }
    );
}

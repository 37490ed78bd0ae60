use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::Site;

use crate::bridge;
use crate::context::{PageClock, SiteHandle};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Longest the timer loop sleeps between checks
const TIMER_POLL: Duration = Duration::from_millis(100);

/// Root application component.
///
/// Provides global styles and the site context, installs the geometry
/// bridge and runs the scheduler pump.
#[component]
pub fn App() -> Element {
    let site: Signal<Site> = use_signal(|| Site::new(crate::site_config()));
    let clock = use_hook(PageClock::start);
    let handle = SiteHandle::new(site, clock);

    use_context_provider(|| handle);

    // Forward scroll and layout reports from the page
    use_effect(move || {
        spawn(async move {
            bridge::run(handle).await;
        });
    });

    // Run deferred visual steps as they come due
    use_effect(move || {
        spawn(async move {
            loop {
                let now = handle.now();
                let wait = handle
                    .peek_with(Site::next_deadline)
                    .map(|deadline| deadline.saturating_sub(now))
                    .unwrap_or(TIMER_POLL);
                tokio::time::sleep(wait.min(TIMER_POLL)).await;

                let now = handle.now();
                if handle
                    .peek_with(Site::next_deadline)
                    .is_some_and(|deadline| deadline <= now)
                {
                    handle.tick();
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}

//! Browser-only navigation helpers.
//!
//! SSR and native builds no-op so shared code paths stay callable everywhere.

/// Full-page navigation to `href`, discarding all in-memory client state.
pub fn redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

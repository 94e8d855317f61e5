//! Window scroll tracking
//!
//! `use_scroll_progress` registers scroll and resize listeners on the window
//! for the lifetime of the calling component and removes them on cleanup.

use leptos::prelude::*;

use crate::core::ScrollProgress;

/// Normalized scroll position of the window, updated on every scroll.
///
/// Always `ScrollProgress::TOP` during server rendering.
pub fn use_scroll_progress() -> ReadSignal<ScrollProgress> {
    let (progress, set_progress) = signal(ScrollProgress::TOP);

    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::{resize, scroll};

        // Pick up a restored scroll position once mounted
        Effect::new(move |_| set_progress.set(read_progress()));

        let on_scroll = window_event_listener(scroll, move |_| set_progress.set(read_progress()));
        let on_resize = window_event_listener(resize, move |_| set_progress.set(read_progress()));

        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_progress;
    }

    progress
}

#[cfg(feature = "hydrate")]
fn read_progress() -> ScrollProgress {
    let Some(window) = web_sys::window() else {
        return ScrollProgress::TOP;
    };

    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);

    ScrollProgress::from_geometry(scroll_y, document_height, viewport_height)
}

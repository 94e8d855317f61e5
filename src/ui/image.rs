use leptos::prelude::*;

use crate::core::content::PLACEHOLDER_IMAGE;

/// Image with intrinsic size and a placeholder fallback.
///
/// If the browser fails to load `src`, the placeholder is swapped in once.
#[component]
pub fn SiteImage(
    /// Asset path
    src: &'static str,
    /// Alternative text
    alt: &'static str,
    /// Intrinsic width in pixels
    width: u32,
    /// Intrinsic height in pixels
    height: u32,
    /// CSS classes for the rendered element
    #[prop(optional)]
    class: &'static str,
    /// Load immediately instead of lazily (above-the-fold images)
    #[prop(default = false)]
    eager: bool,
) -> impl IntoView {
    let (current, set_current) = signal(src);

    view! {
        <img
            src=move || current.get()
            alt=alt
            width=width.to_string()
            height=height.to_string()
            class=class
            loading=if eager { "eager" } else { "lazy" }
            decoding="async"
            draggable="false"
            on:error=move |_| {
                if current.get_untracked() != PLACEHOLDER_IMAGE {
                    set_current.set(PLACEHOLDER_IMAGE);
                }
            }
        />
    }
}

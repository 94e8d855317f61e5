use leptos::prelude::*;

use crate::core::content::IconKind;

/// Inline SVG icon. Outline icons follow `currentColor` strokes, brand marks
/// are filled.
#[component]
pub fn Icon(
    kind: IconKind,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
    /// Explicit color, overrides the inherited text color
    #[prop(optional)]
    color: Option<&'static str>,
) -> impl IntoView {
    let style = color.map(|c| format!("color: {};", c));

    if is_filled(kind) {
        view! {
            <svg class=class style=style fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path d=brand_path(kind) />
            </svg>
        }
        .into_any()
    } else {
        view! {
            <svg
                class=class
                style=style
                fill="none"
                viewBox="0 0 24 24"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                {outline_shapes(kind)}
            </svg>
        }
        .into_any()
    }
}

fn is_filled(kind: IconKind) -> bool {
    matches!(
        kind,
        IconKind::Facebook | IconKind::Pinterest | IconKind::X | IconKind::LinkedIn
    )
}

fn brand_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Facebook => "M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z",
        IconKind::Pinterest => "M12.017 0C5.396 0 .029 5.367.029 11.987c0 5.079 3.158 9.417 7.618 11.174-.105-.949-.199-2.403.041-3.439.219-.937 1.406-5.957 1.406-5.957s-.359-.72-.359-1.781c0-1.663.967-2.911 2.168-2.911 1.024 0 1.518.769 1.518 1.688 0 1.029-.653 2.567-.992 3.992-.285 1.193.6 2.165 1.775 2.165 2.128 0 3.768-2.245 3.768-5.487 0-2.861-2.063-4.869-5.008-4.869-3.41 0-5.409 2.562-5.409 5.199 0 1.033.394 2.143.889 2.741.099.12.112.225.085.345-.09.375-.293 1.199-.334 1.363-.053.225-.172.271-.402.165-1.495-.69-2.433-2.878-2.433-4.646 0-3.776 2.748-7.252 7.92-7.252 4.158 0 7.392 2.967 7.392 6.923 0 4.135-2.607 7.462-6.233 7.462-1.214 0-2.357-.629-2.75-1.378l-.748 2.853c-.271 1.043-1.002 2.35-1.492 3.146C9.57 23.812 10.763 24.009 12.017 24.009c6.624 0 11.99-5.367 11.99-11.988C24.007 5.367 18.641.001 12.017.001z",
        IconKind::X => "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z",
        IconKind::LinkedIn => "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
        _ => "",
    }
}

fn outline_shapes(kind: IconKind) -> AnyView {
    match kind {
        IconKind::MapPin => view! {
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        }
        .into_any(),
        IconKind::Bell => view! {
            <path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" />
            <path d="M10.3 21a1.94 1.94 0 0 0 3.4 0" />
        }
        .into_any(),
        IconKind::BarChart => view! {
            <path d="M3 3v18h18" />
            <path d="M18 17V9" />
            <path d="M13 17V5" />
            <path d="M8 17v-3" />
        }
        .into_any(),
        IconKind::Award => view! {
            <circle cx="12" cy="8" r="6" />
            <path d="M15.477 12.89 17 22l-5-3-5 3 1.523-9.11" />
        }
        .into_any(),
        IconKind::Shield => view! {
            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10" />
        }
        .into_any(),
        IconKind::Clock => view! {
            <circle cx="12" cy="12" r="10" />
            <polyline points="12 6 12 12 16 14" />
        }
        .into_any(),
        IconKind::ChevronRight => view! { <path d="m9 18 6-6-6-6" /> }.into_any(),
        IconKind::Menu => view! {
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="18" y2="18" />
        }
        .into_any(),
        IconKind::Close => view! {
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        }
        .into_any(),
        _ => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_marks_are_filled() {
        for kind in [IconKind::Facebook, IconKind::Pinterest, IconKind::X, IconKind::LinkedIn] {
            assert!(is_filled(kind));
            assert!(!brand_path(kind).is_empty());
        }
    }

    #[test]
    fn test_chevron_is_an_outline_icon() {
        assert!(!is_filled(IconKind::ChevronRight));
        assert!(brand_path(IconKind::ChevronRight).is_empty());
    }
}

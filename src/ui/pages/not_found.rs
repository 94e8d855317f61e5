//! Not found page component
//!
//! A 404 page displayed when no route matches, styled with the default skin.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::Skin;
use crate::ui::use_site_config;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let config = use_site_config();
    let palette = config.default_skin.palette();

    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text=format!("Page Not Found | {}", config.brand) />

        <div
            class="min-h-screen flex flex-col items-center justify-center p-4"
            style=format!("{} background-color: var(--brand-surface);", palette.css_vars())
        >
            <div class="text-center">
                <h1 class="text-6xl font-bold mb-4" style="color: var(--brand-primary);">"404"</h1>

                <h2 class="text-2xl font-semibold text-gray-900 mb-2">"Page Not Found"</h2>

                <p class="text-gray-600 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    {Skin::ALL
                        .into_iter()
                        .map(|skin| {
                            view! {
                                <A
                                    href=skin.path()
                                    attr:class="px-6 py-3 font-medium rounded-lg text-white"
                                    attr:style="background-color: var(--brand-primary);"
                                >
                                    {format!("Visit {} site", skin)}
                                </A>
                            }
                        })
                        .collect_view()}
                    <A
                        href="/"
                        attr:class="px-6 py-3 border border-gray-300 text-gray-900 font-medium rounded-lg"
                    >
                        "Go Home"
                    </A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-500">{format!("\u{a9} 2025 {}", config.brand)}</p>
            </div>
        </div>
    }
}

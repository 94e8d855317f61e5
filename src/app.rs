use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::core::{SiteConfig, Skin};
use crate::ui::pages::{HomePage, LandingPage, NotFoundPage};
use crate::ui::{provide_site_context, use_site_config};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    // Read back by `site_config_from_document` when hydrating
    view! {
        <!DOCTYPE html>
        <html
            lang="en"
            class=config.theme.as_str()
            data-default-skin=config.default_skin.to_string()
            data-public-url=config.public_url.clone()
        >
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_site_context(use_site_config());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/bloodchain.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
                <Route
                    path=path!("/classic")
                    view=|| view! { <LandingPage skin=Skin::Crimson path=Skin::Crimson.path()/> }
                />
                <Route
                    path=path!("/ember")
                    view=|| view! { <LandingPage skin=Skin::Ember path=Skin::Ember.path()/> }
                />
            </Routes>
        </Router>
    }
}

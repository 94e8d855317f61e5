//! Landing page component
//!
//! The BloodChain "coming soon" page, rendered in either skin:
//! - SEO meta tags, canonical URL and JSON-LD organization record
//! - Header whose opacity follows the scroll position, with a mobile menu
//! - Hero with parallax copy, a zooming mockup and a spinning ornament
//! - How-it-works sections for donors and hospitals
//! - Crisis, mission and testimonial sections revealed on scroll
//! - Call-to-action email field (never submitted) and footer
//!
//! Both skins share the same state machines; only copy and palette differ.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::cn;
use crate::core::content::{
    ABOUT_ID, CONTACT_ID, Feature, IconKind, PRIVACY_ID, PageContent, StepsSection, Testimonial,
};
use crate::core::motion::stagger;
use crate::core::{
    EmailDraft, Entrance, Hover, MenuEvent, MenuState, RevealTrigger, ScrollProgress, Skin, Spin,
    header_opacity, hero_offset, when,
};
use crate::core::menu::MENU_CSS;
use crate::ui::{Icon, Reveal, SiteImage, use_scroll_progress, use_site_config, use_theme_context};

/// Landing page served at `/`, in the configured default skin
#[component]
pub fn HomePage() -> impl IntoView {
    let skin = use_site_config().default_skin;

    view! { <LandingPage skin=skin path="/" /> }
}

/// Landing page in an explicit skin
#[component]
pub fn LandingPage(
    /// Copy and palette to render
    skin: Skin,
    /// Route the page is served at, used for the canonical URL
    path: &'static str,
) -> impl IntoView {
    let content = skin.content();
    let palette = skin.palette();
    let progress = use_scroll_progress();
    let theme = use_theme_context();

    // Page-owned state, shared by both skins
    let menu = RwSignal::new(MenuState::Closed);
    let draft = RwSignal::new(EmailDraft::new());

    view! {
        <SeoMeta content=content path=path />

        <div
            class=cn!["landing min-h-screen overflow-x-hidden", when(theme.is_dark(), "landing-dark")]
            data-skin=skin.to_string()
            style=palette.css_vars()
        >
            <Header content=content progress=progress menu=menu />

            <main>
                <Hero content=content progress=progress />
                <HowItWorks section=content.donors ai_pill=content.ai_pill />
                <HowItWorks section=content.hospitals />
                <CrisisSection content=content />
                <MissionSection content=content />
                <TestimonialsSection content=content />
                <CallToAction content=content draft=draft />
            </main>

            <Footer content=content />

            <LandingStyles />
        </div>
    }
}

/// Document head tags for one rendering of the page
#[component]
fn SeoMeta(content: &'static PageContent, path: &'static str) -> impl IntoView {
    let config = use_site_config();
    let canonical = config.canonical_url(path);
    let image = config.canonical_url(content.images.mockup);
    let structured_data = config.structured_data();

    view! {
        <Title text=config.title />

        <Meta name="description" content=config.description />
        <Meta name="keywords" content="blood donation, blood bank, donors, hospitals, Nigeria, BloodChain" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=config.title />
        <Meta property="og:description" content=content.hero_title />
        <Meta property="og:image" content=image.clone() />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content=canonical.clone() />
        <Meta property="twitter:title" content=config.title />
        <Meta property="twitter:description" content=content.hero_title />
        <Meta property="twitter:image" content=image />

        <Link rel="canonical" href=canonical />

        <script type="application/ld+json" inner_html=structured_data></script>
    }
}

/// Fixed header with scroll-linked opacity and the mobile menu
#[component]
fn Header(
    content: &'static PageContent,
    progress: ReadSignal<ScrollProgress>,
    menu: RwSignal<MenuState>,
) -> impl IntoView {
    let send = move |event: MenuEvent| menu.update(|state| *state = event.apply(*state));

    view! {
        <header
            class="site-header bg-white/90 backdrop-blur-md shadow-sm"
            style=move || format!("opacity: {};", header_opacity(progress.get()))
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#" class=cn!["flex items-center gap-2", Hover::Press.class()]>
                        <SiteImage src=content.images.logo alt=content.brand width=40 height=40 eager=true />
                        <span class="text-xl font-bold brand-text">{content.brand}</span>
                    </a>

                    // Desktop navigation
                    <nav class="desktop-nav">
                        {content
                            .navigation
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class=cn!["text-sm font-medium text-gray-700 hover:text-gray-900", Hover::Lift.class()]
                                        on:click=move |_| send(MenuEvent::Navigate)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a href="#contact" class=cn!["btn-primary px-5 py-2 text-sm", Hover::Press.class()]>
                            {content.header_cta}
                        </a>
                    </nav>

                    // Mobile menu button
                    <button
                        class="menu-button p-2 rounded-lg text-gray-700"
                        on:click=move |_| send(MenuEvent::Toggle)
                        aria-label=move || menu.get().button_label()
                        aria-expanded=move || menu.get().is_open().to_string()
                    >
                        {move || {
                            if menu.get().is_open() {
                                view! { <Icon kind=IconKind::Close class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon kind=IconKind::Menu class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div class=move || menu.get().panel_class()>
                    <nav class="flex flex-col gap-2 py-4 border-t border-gray-100">
                        {content
                            .navigation
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class="block px-4 py-2 text-sm font-medium text-gray-700 rounded-lg hover:bg-gray-50"
                                        on:click=move |_| send(MenuEvent::Navigate)
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a
                            href="#contact"
                            class="btn-primary mx-4 px-5 py-2 text-sm text-center"
                            on:click=move |_| send(MenuEvent::Navigate)
                        >
                            {content.header_cta}
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Hero section: staggered copy, parallax, mockup and ornament
#[component]
fn Hero(content: &'static PageContent, progress: ReadSignal<ScrollProgress>) -> impl IntoView {
    let parallax = move || format!("transform: translateY({}px);", hero_offset(progress.get()));

    view! {
        <section class="relative min-h-screen flex items-center pt-24 pb-16 overflow-hidden surface">
            // Decorative ornament
            <div
                class="hero-ornament absolute -top-24 -right-24 w-96 h-96 rounded-full pointer-events-none"
                style=format!("animation: {};", Spin::ORNAMENT.animation())
                aria-hidden="true"
            ></div>

            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid lg:grid-cols-2 gap-12 items-center">
                <div style=parallax>
                    <Reveal trigger=RevealTrigger::Mount delay=stagger(0, 0.1)>
                        <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold text-gray-900 leading-tight mb-6">
                            {content.hero_title}
                        </h1>
                    </Reveal>
                    <Reveal trigger=RevealTrigger::Mount delay=stagger(1, 0.1)>
                        <p class="text-lg sm:text-xl text-gray-600 mb-8 max-w-xl">{content.hero_subtitle}</p>
                    </Reveal>
                    <Reveal trigger=RevealTrigger::Mount delay=stagger(2, 0.1) class="flex flex-col sm:flex-row gap-4 mb-10">
                        <a
                            href="#contact"
                            class=cn!["btn-primary inline-flex items-center justify-center gap-2 px-8 py-4", Hover::Press.class()]
                        >
                            {content.hero_primary_cta}
                            <Icon kind=IconKind::ChevronRight class="w-5 h-5" />
                        </a>
                        <a href="#contact" class=cn!["btn-outline px-8 py-4 text-center", Hover::Press.class()]>
                            {content.hero_secondary_cta}
                        </a>
                    </Reveal>
                    <Reveal trigger=RevealTrigger::Mount delay=stagger(3, 0.1) class="flex flex-wrap gap-6">
                        {content
                            .badges
                            .iter()
                            .map(|badge| {
                                view! {
                                    <div class="flex items-center gap-2 text-sm text-gray-700">
                                        <Icon kind=badge.icon class="w-5 h-5 brand-text" />
                                        <span>{badge.label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                </div>

                <Reveal entrance=Entrance::ZoomIn trigger=RevealTrigger::Mount delay=0.2 class="flex justify-center">
                    <SiteImage
                        src=content.images.mockup
                        alt="BloodChain app preview"
                        width=480
                        height=640
                        class="w-full max-w-md h-auto drop-shadow-2xl"
                        eager=true
                    />
                </Reveal>
            </div>
        </section>
    }
}

/// Three-step walkthrough for one audience
#[component]
fn HowItWorks(
    section: StepsSection,
    /// Highlight shown under the steps
    #[prop(optional)]
    ai_pill: Option<&'static str>,
) -> impl IntoView {
    view! {
        <section id=section.id class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-gray-900 mb-4">{section.title}</h2>
                    <p class="text-lg text-gray-600 max-w-2xl mx-auto">{section.subtitle}</p>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-10">
                    {section
                        .steps
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <Reveal entrance=Entrance::RiseIn delay=stagger(index, 0.2) class="text-center">
                                    <span class="inline-block mb-4 px-3 py-1 rounded-full text-xs font-semibold brand-pill">
                                        {step.label()}
                                    </span>
                                    <div class="mb-6 flex justify-center">
                                        <SiteImage
                                            src=step.image_or_placeholder()
                                            alt=step.alt
                                            width=320
                                            height=400
                                            class="rounded-2xl object-cover h-80 w-auto"
                                        />
                                    </div>
                                    <h3 class="text-xl font-semibold text-gray-900 mb-2">{step.title}</h3>
                                    <p class="text-gray-600">{step.description}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                {ai_pill
                    .map(|text| {
                        view! {
                            <Reveal delay=0.3 class="mt-12 flex justify-center">
                                <span class="inline-flex items-center gap-2 px-5 py-2 rounded-full text-sm font-medium tech-pill">
                                    <Icon kind=IconKind::Shield class="w-4 h-4" />
                                    {text}
                                </span>
                            </Reveal>
                        }
                    })}
            </div>
        </section>
    }
}

/// Why the product exists
#[component]
fn CrisisSection(content: &'static PageContent) -> impl IntoView {
    view! {
        <section class="py-20 px-4 sand">
            <div class="max-w-6xl mx-auto grid lg:grid-cols-2 gap-12 items-center">
                <Reveal entrance=Entrance::SlideFromLeft>
                    <SiteImage
                        src=content.images.crisis
                        alt="Blood donation in progress"
                        width=560
                        height=420
                        class="rounded-3xl object-cover w-full h-auto shadow-xl"
                    />
                </Reveal>
                <Reveal entrance=Entrance::SlideFromRight>
                    <h2 class="text-3xl sm:text-4xl font-bold text-gray-900 mb-6">{content.crisis_title}</h2>
                    {content
                        .crisis_paragraphs
                        .iter()
                        .map(|paragraph| view! { <p class="text-gray-700 mb-4 leading-relaxed">{*paragraph}</p> })
                        .collect_view()}
                    <p class="text-lg font-semibold brand-text">{content.crisis_closing}</p>
                </Reveal>
            </div>
        </section>
    }
}

/// Mission statement flanked by feature cards
#[component]
fn MissionSection(content: &'static PageContent) -> impl IntoView {
    let (left, right) = content.feature_columns();
    let right_offset = left.len();

    view! {
        <section id=ABOUT_ID class="py-20 px-4">
            <div class="max-w-7xl mx-auto">
                <Reveal class="text-center mb-16 max-w-3xl mx-auto">
                    <h2 class="text-3xl sm:text-4xl font-bold text-gray-900 mb-6">{content.mission_title}</h2>
                    {content
                        .mission_paragraphs
                        .iter()
                        .map(|paragraph| view! { <p class="text-lg text-gray-600 mb-4">{*paragraph}</p> })
                        .collect_view()}
                </Reveal>

                <div class="grid lg:grid-cols-3 gap-10 items-center">
                    <div class="space-y-10">
                        {left
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index /> })
                            .collect_view()}
                    </div>

                    <Reveal
                        entrance=Entrance::ZoomIn
                        delay=content.mission_image_delay()
                        class="flex justify-center"
                    >
                        <SiteImage
                            src=content.images.mission
                            alt="Hands holding a heart"
                            width=400
                            height=400
                            class="rounded-full object-cover w-72 h-72 lg:w-96 lg:h-96"
                        />
                    </Reveal>

                    <div class="space-y-10">
                        {right
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| {
                                view! { <FeatureCard feature=*feature index=right_offset + index /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    view! {
        <Reveal entrance=Entrance::RiseIn delay=stagger(index, 0.1) class="flex items-start gap-4">
            <div class="flex-shrink-0 w-12 h-12 rounded-xl flex items-center justify-center feature-icon">
                <Icon kind=feature.icon class="w-6 h-6" color=feature.accent.var() />
            </div>
            <div>
                <h3 class="text-lg font-semibold text-gray-900 mb-1">{feature.title}</h3>
                <p class="text-gray-600 text-sm leading-relaxed">{feature.description}</p>
            </div>
        </Reveal>
    }
}

#[component]
fn TestimonialsSection(content: &'static PageContent) -> impl IntoView {
    view! {
        <section class="py-20 px-4 surface">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl sm:text-4xl font-bold text-gray-900">{content.testimonials_title}</h2>
                </Reveal>
                <div class="grid md:grid-cols-3 gap-8">
                    {content
                        .testimonials
                        .iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            view! { <TestimonialCard testimonial=*testimonial index=index /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, index: usize) -> impl IntoView {
    let stars = "★".repeat(usize::from(testimonial.rating));

    view! {
        <Reveal entrance=Entrance::RiseIn delay=stagger(index, 0.1)>
            <figure class=cn!["h-full p-8 bg-white rounded-2xl shadow-md", Hover::Float.class()]>
                <div class="mb-4 text-lg gold-text" aria-label=format!("{} out of 5", testimonial.rating)>
                    {stars}
                </div>
                <blockquote class="text-gray-700 mb-6 leading-relaxed">
                    {format!("\u{201c}{}\u{201d}", testimonial.quote)}
                </blockquote>
                <figcaption class="font-semibold text-gray-900">{testimonial.author}</figcaption>
            </figure>
        </Reveal>
    }
}

/// Email capture. The draft lives only in page state.
#[component]
fn CallToAction(content: &'static PageContent, draft: RwSignal<EmailDraft>) -> impl IntoView {
    let on_submit = move |_| {
        let outcome = draft.with_untracked(EmailDraft::submit);
        leptos::logging::log!("Call-to-action pressed: {:?}", outcome);
    };

    view! {
        <section id=CONTACT_ID class="py-24 px-4 cta-band">
            <Reveal class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl sm:text-4xl font-bold text-white mb-4">{content.cta_title}</h2>
                <p class="text-lg text-white/90 mb-8">{content.cta_body}</p>
                <div class="flex flex-col sm:flex-row gap-3 max-w-xl mx-auto">
                    <label for="cta-email" class="sr-only">"Email"</label>
                    <input
                        id="cta-email"
                        type="email"
                        autocomplete="email"
                        class="flex-1 px-5 py-3 rounded-xl text-gray-900 focus:outline-none focus:ring-2 focus:ring-white"
                        placeholder=content.cta_placeholder
                        prop:value=move || draft.with(|d| d.as_str().to_string())
                        on:input=move |ev| draft.update(|d| d.replace(event_target_value(&ev)))
                    />
                    <button
                        type="button"
                        class=cn!["px-6 py-3 rounded-xl font-semibold bg-white brand-text", Hover::Press.class()]
                        on:click=on_submit
                    >
                        {content.cta_button}
                    </button>
                </div>
                <p class="mt-4 text-xs text-white/80">
                    {content.cta_legal}
                    <a href="#privacy" class="underline">{content.cta_legal_link}</a>
                </p>
            </Reveal>
        </section>
    }
}

#[component]
fn Footer(content: &'static PageContent) -> impl IntoView {
    view! {
        <footer id=PRIVACY_ID class="py-12 px-4 ink">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col md:flex-row items-center justify-between gap-8 mb-8">
                    <a href="#" class="flex items-center gap-2">
                        <SiteImage src=content.images.logo alt=content.brand width=32 height=32 />
                        <span class="text-lg font-bold text-white">{content.brand}</span>
                    </a>
                    <nav class="flex flex-wrap justify-center gap-6">
                        {content
                            .footer_links
                            .iter()
                            .map(|link| {
                                view! {
                                    <a href=link.href class="text-sm text-gray-300 hover:text-white">
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex gap-4">
                        {content
                            .social
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.label
                                        class=cn!["text-gray-300 hover:text-white", Hover::Pop.class()]
                                    >
                                        <Icon kind=social.icon class="w-5 h-5" />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <p class="text-center text-xs text-gray-400 border-t border-white/10 pt-8">
                    {format!("\u{a9} 2025 {}. All rights reserved.", content.brand)}
                </p>
            </div>
        </footer>
    }
}

/// Palette-driven classes, hover presets and the ornament keyframes
#[component]
fn LandingStyles() -> impl IntoView {
    let styles = format!(
        r#"
        .landing {{ background-color: var(--brand-surface); color: var(--brand-ink); }}
        .landing-dark {{ background-color: var(--brand-ink); color: var(--brand-surface); }}
        .brand-text {{ color: var(--brand-primary); }}
        .gold-text {{ color: var(--brand-gold); }}
        .surface {{ background-color: var(--brand-surface); }}
        .sand {{ background-color: var(--brand-sand); }}
        .ink {{ background-color: var(--brand-ink); }}
        .cta-band {{ background-color: var(--brand-primary); }}
        .brand-pill {{ color: var(--brand-primary); background-color: var(--brand-sand); }}
        .tech-pill {{ color: white; background-color: var(--brand-tech); }}
        .feature-icon {{ background-color: var(--brand-sand); }}
        .btn-primary {{
            display: inline-flex;
            align-items: center;
            justify-content: center;
            gap: 0.5rem;
            font-weight: 600;
            color: white;
            background-color: var(--brand-primary);
            border-radius: 0.75rem;
            box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        }}
        .btn-outline {{
            display: inline-block;
            font-weight: 600;
            color: var(--brand-primary);
            border: 2px solid var(--brand-primary);
            border-radius: 0.75rem;
        }}
        .hero-ornament {{
            border: 2px dashed var(--brand-primary);
            opacity: 0.15;
        }}
        {spin}
        {menu}
        {hover}
        @media (prefers-reduced-motion: reduce) {{
            .hero-ornament {{ animation: none !important; }}
        }}
        "#,
        spin = Spin::KEYFRAMES,
        menu = MENU_CSS,
        hover = Hover::css_rules(),
    );

    view! { <style inner_html=styles></style> }
}

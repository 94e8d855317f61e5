//! Scroll-triggered one-shot reveal
//!
//! `Reveal` wraps a block, watches it with an `IntersectionObserver` and
//! plays its entrance preset the first time it enters the viewport. The
//! observer is disconnected as soon as the block is revealed, and again
//! when the component is torn down. Blocks triggered on mount skip the
//! observer and play as soon as they are hydrated.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{Entrance, RevealTrigger};

/// Wrapper that plays `entrance` once, the first time it becomes visible
#[component]
pub fn Reveal(
    /// Entrance preset
    #[prop(default = Entrance::FadeUp)]
    entrance: Entrance,
    /// Seconds to wait before the entrance starts
    #[prop(default = 0.0)]
    delay: f64,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: String,
    /// What starts the entrance
    #[prop(optional)]
    trigger: RevealTrigger,
    children: Children,
) -> impl IntoView {
    let (revealed, set_revealed) = signal(false);
    let node = NodeRef::<Div>::new();

    #[cfg(feature = "hydrate")]
    {
        if trigger.needs_observer() {
            observe::watch(node, set_revealed);
        } else {
            // Server markup already carries the hidden pose
            Effect::new(move |_| set_revealed.set(true));
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (set_revealed, trigger);
    }

    view! {
        <div
            node_ref=node
            class=class
            style=move || entrance.style(revealed.get(), delay)
        >
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod observe {
    use leptos::html::Div;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::RevealTracker;

    /// Fraction of the block that must be visible.
    const THRESHOLD: f64 = 0.1;
    /// Shrinks the viewport bottom so blocks reveal slightly after entering.
    const ROOT_MARGIN: &str = "0px 0px -50px 0px";

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live observer plus the closure it calls. Dropping disconnects.
    struct VisibilityWatch {
        observer: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl VisibilityWatch {
        fn start(element: &web_sys::Element, set_revealed: WriteSignal<bool>) -> Result<Self, JsValue> {
            let mut tracker = RevealTracker::new();

            let callback: ObserverCallback = Closure::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if tracker.report(entry.is_intersecting()) {
                            set_revealed.set(true);
                        }
                    }
                    if !tracker.wants_updates() {
                        observer.disconnect();
                    }
                },
            );

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(THRESHOLD));
            options.set_root_margin(ROOT_MARGIN);

            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
            observer.observe(element);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for VisibilityWatch {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    pub(super) fn watch(node: NodeRef<Div>, set_revealed: WriteSignal<bool>) {
        let active = StoredValue::new_local(None::<VisibilityWatch>);

        Effect::new(move |_| {
            let Some(element) = node.get() else {
                return;
            };
            if active.with_value(|w| w.is_some()) {
                return;
            }

            match VisibilityWatch::start(&element, set_revealed) {
                Ok(watch) => active.set_value(Some(watch)),
                Err(err) => {
                    // Without an observer the block would stay hidden
                    leptos::logging::warn!("IntersectionObserver unavailable: {:?}", err);
                    set_revealed.set(true);
                }
            }
        });

        on_cleanup(move || {
            active.try_update_value(|w| *w = None);
        });
    }
}

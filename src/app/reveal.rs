use leptos::{html, prelude::*};

#[cfg(feature = "hydrate")]
use leptos_use::{use_window_scroll, use_window_size};

#[cfg(feature = "hydrate")]
use crate::motion::ScrollSample;
use crate::motion::{
    Direction, Ease, Mode, Reveal, RevealTarget, RevealTiming, StyleSnapshot, TargetId, Trigger,
};

fn inline_style(snapshot: Option<StyleSnapshot>, timing: RevealTiming, animate: bool) -> String {
    match snapshot {
        Some(s) if animate => format!("{} {}", s.to_css(), timing.to_css()),
        // the first client frame jumps straight to its state instead of easing away from the
        // server-rendered rest state
        Some(s) => s.to_css(),
        // server render and pre-layout frames show the rest state
        None => String::new(),
    }
}

/// Whether `next` differs from what is already applied.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn changed(applied: Option<StyleSnapshot>, next: StyleSnapshot) -> bool {
    applied != Some(next)
}

/// Wraps content in a scroll-triggered entrance.
///
/// The outer element is measured and never moved; the inner element carries the animated style,
/// so the measured position does not depend on the animation itself.
#[component]
pub fn ScrollReveal(
    children: Children,
    #[prop(optional)] direction: Direction,
    #[prop(optional)] timing: RevealTiming,
    #[prop(optional)] ease: Ease,
    #[prop(default = Mode::ONCE)] mode: Mode,
    /// Overrides the direction preset's starting state.
    #[prop(optional)]
    initial: Option<StyleSnapshot>,
    #[prop(optional)] trigger: Option<Trigger>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let anchor = NodeRef::<html::Div>::new();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let (snapshot, set_snapshot) = signal(None::<StyleSnapshot>);
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let (animate, set_animate) = signal(false);

    let mut target = RevealTarget::entrance(TargetId(0), direction)
        .with_ease(ease)
        .with_mode(mode);
    if let Some(initial) = initial {
        target.initial = initial;
    }
    if let Some(trigger) = trigger {
        target = target.with_trigger(trigger);
    }
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let reveal = StoredValue::new(Reveal::new(target));

    #[cfg(feature = "hydrate")]
    {
        let (_, scroll_y) = use_window_scroll();
        let viewport_height = use_window_size().height;

        Effect::new(move |_| {
            // returning before the signals are read leaves a settled reveal with no subscriptions
            if reveal.try_with_value(Reveal::is_settled).unwrap_or(true) {
                return;
            }
            let sample = ScrollSample::new(scroll_y.get(), viewport_height.get());
            let Some(el) = anchor.get() else {
                return;
            };
            let sample = sample.with_element_top(el.get_bounding_client_rect().top());
            let Some(next) = reveal.try_update_value(|r| r.evaluate(&sample)) else {
                return;
            };
            let applied = snapshot.get_untracked();
            if !changed(applied, next) {
                return;
            }
            set_snapshot.set(Some(next));
            if applied.is_none() {
                request_animation_frame(move || set_animate.set(true));
            }
        });
    }

    view! {
        <div node_ref=anchor class=class>
            <div style=move || inline_style(snapshot.get(), timing, animate.get())>{children()}</div>
        </div>
    }
}

/// Scroll-scrubbed vertical drift of `distance` pixels across the element's time on screen.
#[component]
pub fn Drift(
    children: Children,
    distance: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let anchor = NodeRef::<html::Div>::new();
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let (snapshot, set_snapshot) = signal(None::<StyleSnapshot>);

    #[cfg(feature = "hydrate")]
    {
        let (_, scroll_y) = use_window_scroll();
        let viewport_height = use_window_size().height;

        Effect::new(move |_| {
            let (y, vh) = (scroll_y.get(), viewport_height.get());
            let Some(el) = anchor.get() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let mut drift = Reveal::new(RevealTarget::scrub_y(TargetId(0), distance, rect.height(), vh));
            let sample = ScrollSample::new(y, vh).with_element_top(rect.top());
            set_snapshot.set(Some(drift.evaluate(&sample)));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = distance;

    view! {
        <div node_ref=anchor class=class>
            <div style=move || {
                snapshot.get().map(|s| s.to_css()).unwrap_or_default()
            }>{children()}</div>
        </div>
    }
}

use std::collections::HashMap;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos_use::use_window_scroll;

use crate::{
    motion::{MotionController, ParallaxLayer, TargetId},
    theme::Theme,
};

struct Decoration {
    speed: f64,
    class: &'static str,
}

const DECORATIONS: &[Decoration] = &[
    Decoration {
        speed: 0.1,
        class: "top-24 -left-24 w-96 h-96 rounded-full blur-3xl bg-primary/20",
    },
    Decoration {
        speed: 0.3,
        class: "top-[40vh] right-[-6rem] w-80 h-80 rounded-full blur-3xl bg-violet-500/15",
    },
    Decoration {
        speed: 0.5,
        class: "top-[90vh] left-1/3 w-64 h-64 rounded-full blur-2xl bg-sky-400/15",
    },
    Decoration {
        speed: 0.4,
        class: "top-[150vh] right-1/4 w-72 h-72 rounded-full blur-3xl bg-emerald-400/10",
    },
    Decoration {
        speed: 0.2,
        class: "top-[220vh] left-10 w-56 h-56 rounded-full blur-2xl bg-amber-400/10",
    },
];

/// Registers one parallax layer per decoration. The id list lines up with `decorations`; a
/// decoration whose layer was refused gets `None`.
fn build_controller(decorations: &[Decoration]) -> (MotionController, Vec<Option<TargetId>>) {
    let mut controller = MotionController::new();
    let ids = decorations
        .iter()
        .map(|d| {
            ParallaxLayer::new(d.speed)
                .and_then(|layer| controller.register_parallax(layer))
                .inspect_err(|e| log::error!("skipping decoration: {e}"))
                .ok()
        })
        .collect();
    (controller, ids)
}

/// Slow-moving blurred shapes behind the page.
#[component]
pub fn ParallaxBackdrop(theme: Signal<Theme>) -> impl IntoView {
    let (controller, ids) = build_controller(DECORATIONS);
    let controller = StoredValue::new(controller);
    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let (styles, set_styles) = signal(HashMap::<TargetId, String>::new());

    #[cfg(feature = "hydrate")]
    {
        let (_, scroll_y) = use_window_scroll();
        Effect::new(move |_| {
            let y = scroll_y.get();
            // parallax layers never consult viewport or element position
            let Some(frame) = controller.try_update_value(|c| c.tick(y, 0.0, |_| None)) else {
                return;
            };
            set_styles.set(
                frame
                    .into_iter()
                    .map(|(id, style)| (id, style.to_css()))
                    .collect(),
            );
        });
    }

    on_cleanup(move || {
        controller.try_update_value(|c| c.unmount());
    });

    let shapes = DECORATIONS
        .iter()
        .zip(ids)
        .filter_map(|(d, id)| Some((d, id?)))
        .map(|(d, id)| {
            view! {
                <div
                    class=format!("absolute will-change-transform {}", d.class)
                    style=move || styles.with(|s| s.get(&id).cloned().unwrap_or_default())
                />
            }
        })
        .collect_view();

    view! {
        <div
            aria-hidden="true"
            class=move || {
                if theme.get().is_dark() {
                    "fixed inset-0 z-0 overflow-hidden pointer-events-none opacity-80"
                } else {
                    "fixed inset-0 z-0 overflow-hidden pointer-events-none opacity-50"
                }
            }
        >
            {shapes}
        </div>
    }
}

use leptos::{either::Either, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::{
    content::{NAV_ITEMS, OWNER_NAME},
    theme::Theme,
};

/// The visitor's light/dark choice.
///
/// Starts dark so the server render and the first hydrated frame agree, then picks up the stored
/// preference once in the browser. Each toggle writes the new value back.
pub fn use_theme_preference() -> (Signal<Theme>, Callback<()>) {
    let (theme, set_theme) = signal(Theme::default());

    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) = use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let saved = stored.get_untracked();
            let saved = (!saved.is_empty()).then_some(saved.as_str());
            set_theme.set(Theme::from_stored(saved));
        },
        true,
    );

    let toggle = Callback::new(move |_: ()| {
        let next = theme.get_untracked().toggle();
        set_theme.set(next);
        #[cfg(feature = "hydrate")]
        set_stored.set(next.to_string());
    });

    (theme.into(), toggle)
}

#[component]
pub fn Header(theme: Signal<Theme>, toggle_theme: Callback<()>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let nav_links = move |on_mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let class = if on_mobile {
                    "block px-6 py-3 hover:bg-primary/10"
                } else {
                    "px-3 py-2 rounded-md font-medium hover:bg-primary/10 hover:text-primary transition-colors duration-200"
                };
                view! {
                    <a
                        href=item.href
                        class=class
                        on:click=move |_| {
                            if on_mobile {
                                set_menu_open.set(false);
                            }
                        }
                    >
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-40 shadow-md bg-surface/90 backdrop-blur">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="#home" class="text-lg font-bold">
                    {OWNER_NAME}
                </a>
                <nav class="hidden md:flex gap-2" aria-label="Sections">
                    {nav_links(false)}
                </nav>
                <div class="flex items-center gap-2">
                    <ThemeToggle theme toggle_theme />
                    <button
                        class="md:hidden p-2 rounded-md"
                        aria-label=move || if menu_open.get() { "close menu" } else { "open menu" }
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden border-t border-muted/20 bg-surface" aria-label="Sections">
                    {nav_links(true)}
                </nav>
            </Show>
        </header>
    }
}

#[component]
fn ThemeToggle(theme: Signal<Theme>, toggle_theme: Callback<()>) -> impl IntoView {
    view! {
        <button
            class=move || {
                if theme.get().is_dark() {
                    "w-9 h-9 rounded-full text-white bg-gradient-to-br from-indigo-600 to-violet-600 shadow-lg hover:scale-110 hover:rotate-12 transition-transform duration-300"
                } else {
                    "w-9 h-9 rounded-full text-white bg-gradient-to-br from-amber-400 to-amber-500 shadow-lg hover:scale-110 hover:rotate-12 transition-transform duration-300"
                }
            }
            aria-label=move || {
                if theme.get().is_dark() { "switch to light theme" } else { "switch to dark theme" }
            }
            on:click=move |_| toggle_theme.run(())
        >
            {move || {
                if theme.get().is_dark() {
                    Either::Left(view! { <span aria-hidden="true">"☀"</span> })
                } else {
                    Either::Right(view! { <span aria-hidden="true">"☾"</span> })
                }
            }}
        </button>
    }
}

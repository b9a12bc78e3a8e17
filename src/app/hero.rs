use leptos::prelude::*;

use super::reveal::ScrollReveal;
use crate::{
    content::{HERO_STACK, OWNER_NAME, OWNER_TITLE, RESUME_PATH, SOCIAL_LINKS},
    motion::{Direction, Ease, RevealTiming},
    theme::Theme,
};

#[component]
pub fn Hero(theme: Signal<Theme>) -> impl IntoView {
    let button_timing = RevealTiming::new(1000, 1200);

    view! {
        <section
            id="home"
            class=move || {
                if theme.get().is_dark() {
                    "relative min-h-screen flex items-center overflow-hidden bg-gradient-to-br from-indigo-900 to-purple-900"
                } else {
                    "relative min-h-screen flex items-center overflow-hidden bg-gradient-to-br from-indigo-400 to-purple-600"
                }
            }
        >
            <div class="relative z-10 mx-auto max-w-6xl px-4 pt-24 flex flex-col md:flex-row items-center gap-10 text-white">
                <ScrollReveal direction=Direction::Left timing=RevealTiming::new(1200, 500) class="flex-1">
                    <span class="inline-block mb-6 px-3 py-1 rounded-full text-sm bg-white/20 border border-white/30 backdrop-blur">
                        "🎓 Fresh Graduate • Open to Opportunities"
                    </span>
                    <p class="text-lg opacity-90 mb-1">"Hello, I'm"</p>
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-black tracking-wide whitespace-nowrap mb-3 hover:scale-105 hover:rotate-1 transition-transform duration-300 uppercase">
                        {OWNER_NAME}
                    </h1>
                    <h2 class="text-xl md:text-2xl font-semibold opacity-90 mb-4">{OWNER_TITLE}</h2>
                    <p class="max-w-xl leading-relaxed opacity-90 mb-6">
                        "Fresh graduate passionate about building modern web applications. Learning and growing with React, Node.js, and emerging technologies."
                    </p>
                    <ul class="flex flex-wrap gap-2 mb-8">
                        {HERO_STACK
                            .iter()
                            .map(|tech| {
                                view! {
                                    <li class="px-3 py-1 rounded-full text-sm bg-white/15 border border-white/25">
                                        {*tech}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="flex flex-wrap items-center gap-4">
                        <ScrollReveal timing=button_timing>
                            <a
                                href="#contact"
                                class="inline-block px-6 py-3 rounded-full font-semibold bg-white text-indigo-700 shadow-lg hover:-translate-y-0.5 transition-transform"
                            >
                                "Get In Touch"
                            </a>
                        </ScrollReveal>
                        <ScrollReveal timing=button_timing.staggered(1, 200)>
                            <a
                                href=RESUME_PATH
                                download=""
                                class="inline-block px-6 py-3 rounded-full font-semibold border-2 border-white hover:bg-white/10 transition-colors"
                            >
                                "Download CV"
                            </a>
                        </ScrollReveal>
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.label
                                        class="text-2xl opacity-90 hover:opacity-100"
                                    >
                                        <i class=social.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </ScrollReveal>
                <ScrollReveal
                    direction=Direction::Left
                    ease=Ease::BackOut
                    timing=RevealTiming::new(1000, 800)
                    class="flex-1 flex justify-center"
                >
                    <img
                        src="/developer.gif"
                        alt=format!("{OWNER_NAME} at work")
                        class="w-72 md:w-96 rounded-3xl shadow-2xl"
                    />
                </ScrollReveal>
            </div>
        </section>
    }
}

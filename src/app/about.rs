use leptos::prelude::*;

use super::reveal::{Drift, ScrollReveal};
use crate::{
    content::{HIGHLIGHTS, STATS},
    motion::{Direction, Ease, RevealTiming, Trigger},
};

#[component]
pub fn About() -> impl IntoView {
    // the about section scrubs from "top 80%" to "top 50%"
    let trigger = Trigger::viewport(0.8, 0.5);

    view! {
        <section id="about" class="relative py-20 bg-surface">
            <div class="mx-auto max-w-6xl px-4">
                <SectionHeading
                    chip="About Me"
                    title="Crafting Digital Excellence"
                    blurb="Passionate developer with a mission to build innovative solutions that make a difference"
                />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Drift distance=-60.0>
                        <ScrollReveal
                            direction=Direction::Right
                            ease=Ease::Power3Out
                            trigger
                            timing=RevealTiming::new(1200, 0)
                        >
                            <h3 class="text-2xl font-bold mb-4">"Aspiring Full Stack Developer"</h3>
                            <p class="leading-relaxed text-muted mb-4">
                                "Recent graduate passionate about web development with hands-on experience in the MERN stack. I enjoy building responsive web applications and learning new technologies to create meaningful digital solutions."
                            </p>
                            <p class="leading-relaxed text-muted mb-8">
                                "Currently expanding my skills in Next.js, Prisma, and modern UI frameworks. I'm eager to contribute to innovative projects and grow as a developer in a collaborative environment."
                            </p>
                            <dl class="grid grid-cols-2 gap-6 mb-8 text-center">
                                {STATS
                                    .iter()
                                    .map(|stat| {
                                        view! {
                                            <div>
                                                <dt class="text-sm text-muted">{stat.label}</dt>
                                                <dd class="text-4xl font-extrabold text-primary -order-1">
                                                    {stat.value}
                                                </dd>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                            <div class="grid grid-cols-2 gap-4">
                                {HIGHLIGHTS
                                    .iter()
                                    .map(|h| {
                                        view! {
                                            <div class="p-4 rounded-xl bg-background shadow hover:-translate-y-1 hover:shadow-lg transition">
                                                <h4 class="font-semibold mb-1">{h.title}</h4>
                                                <p class="text-xs text-muted">{h.description}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </ScrollReveal>
                    </Drift>
                    <Drift distance=-80.0>
                        <ScrollReveal
                            direction=Direction::Left
                            ease=Ease::Power3Out
                            trigger
                            timing=RevealTiming::new(1200, 200)
                        >
                            <img
                                src="/developer.gif"
                                alt="Developer illustration"
                                class="w-full max-w-md mx-auto rounded-3xl shadow-xl"
                            />
                        </ScrollReveal>
                    </Drift>
                </div>
            </div>
        </section>
    }
}

/// Chip, title and blurb opening each content section.
#[component]
pub fn SectionHeading(
    chip: &'static str,
    title: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <ScrollReveal direction=Direction::Fade class="text-center mb-14">
            <span class="inline-block mb-3 px-4 py-1 rounded-full text-sm font-semibold bg-background shadow">
                {chip}
            </span>
            <h2 class="text-3xl md:text-4xl font-extrabold mb-3">{title}</h2>
            <p class="max-w-xl mx-auto text-muted">{blurb}</p>
        </ScrollReveal>
    }
}

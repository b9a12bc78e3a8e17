use leptos::prelude::*;

use super::{about::SectionHeading, reveal::ScrollReveal};
use crate::{
    content::{tech_badge_class, Project, PROJECTS, SOCIAL_LINKS},
    motion::{Ease, RevealTiming, StyleSnapshot},
};

/// Cards rise from further down and tilt back into place.
fn card_initial() -> StyleSnapshot {
    StyleSnapshot::VISIBLE
        .with_opacity(0.0)
        .with_translate_y(100.0)
        .with_rotation(-15.0)
}

#[component]
pub fn Projects() -> impl IntoView {
    let github = SOCIAL_LINKS
        .iter()
        .find(|s| s.label == "GitHub")
        .map(|s| s.href);

    view! {
        <section
            id="projects"
            class="relative py-24 overflow-hidden bg-gradient-to-b from-neutral-950 to-neutral-900 text-white"
        >
            <div class="relative z-10 mx-auto max-w-6xl px-4">
                <SectionHeading
                    chip="My Work"
                    title="Featured Projects"
                    blurb="A showcase of my MERN stack projects with GSAP animations"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <ScrollReveal
                                    initial=card_initial()
                                    ease=Ease::Power3Out
                                    timing=RevealTiming::default().staggered(i, 200)
                                >
                                    <ProjectCard project />
                                </ScrollReveal>
                            }
                        })
                        .collect_view()}
                </div>
                {github
                    .map(|href| {
                        view! {
                            <div class="text-center mt-14">
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-block px-8 py-3 rounded-full font-semibold border border-white/30 hover:bg-white/10 transition-colors"
                                >
                                    "View All Projects on GitHub"
                                </a>
                            </div>
                        }
                    })}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="h-full flex flex-col rounded-2xl overflow-hidden bg-white/5 border border-white/10 hover:-translate-y-2 hover:shadow-2xl transition duration-300">
            <img src=project.image alt=project.title class="w-full h-48 object-cover" />
            <div class="flex-1 flex flex-col p-6">
                <span class="text-xs uppercase tracking-wider text-white/60 mb-2">
                    {project.category}
                </span>
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-sm text-white/70 leading-relaxed mb-4 flex-1">
                    {project.description}
                </p>
                <ul class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <li class=format!(
                                    "px-2 py-0.5 rounded-full text-xs border {}",
                                    tech_badge_class(tech),
                                )>{*tech}</li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="flex gap-3">
                    <a
                        href=project.github_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 text-center px-4 py-2 rounded-lg border border-white/20 hover:bg-white/10"
                    >
                        "Code"
                    </a>
                    <a
                        href=project.live_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 text-center px-4 py-2 rounded-lg bg-primary hover:opacity-90"
                    >
                        "Live Demo"
                    </a>
                </div>
            </div>
        </article>
    }
}

use leptos::prelude::*;

use super::{
    about::SectionHeading,
    reveal::{Drift, ScrollReveal},
};
use crate::{
    content::{skills_in, SkillCategory},
    motion::{RevealTiming, Trigger},
};

const ITEM_TIMING: RevealTiming = RevealTiming {
    duration_ms: 500,
    delay_ms: 0,
};
const STAGGER_MS: u32 = 100;

/// Columns drift at different rates while the section scrolls past.
fn column_drift(column: usize) -> f64 {
    -80.0 * (column % 3 + 1) as f64
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="relative py-20 bg-primary/10">
            <div class="mx-auto max-w-6xl px-4">
                <SectionHeading
                    chip="Skills & Technologies"
                    title="Technical Expertise"
                    blurb="Proficient in modern web technologies with a focus on performance and scalability"
                />
                <div class="grid md:grid-cols-3 gap-8">
                    {SkillCategory::ALL
                        .iter()
                        .enumerate()
                        .map(|(column, category)| {
                            view! {
                                <Drift distance=column_drift(column)>
                                    <SkillCard category=*category />
                                </Drift>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl bg-surface shadow-lg">
            <h3 class="text-xl font-bold mb-6">{category.title()}</h3>
            <ul class="space-y-4">
                {skills_in(category)
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <li>
                                <ScrollReveal
                                    timing=ITEM_TIMING.staggered(i, STAGGER_MS)
                                    trigger=Trigger::viewport(0.8, 0.7)
                                >
                                    <div class="flex justify-between text-sm mb-1">
                                        <span class="font-medium">{skill.name}</span>
                                        <span class="text-muted">{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div
                                        class="h-2 rounded-full bg-muted/20 overflow-hidden"
                                        role="progressbar"
                                        aria-valuenow=skill.level.to_string()
                                        aria-valuemin="0"
                                        aria-valuemax="100"
                                    >
                                        <div
                                            class="h-full rounded-full bg-primary"
                                            style=format!("width: {}%;", skill.level)
                                        />
                                    </div>
                                </ScrollReveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

use chrono::{DateTime, Datelike, FixedOffset};
use leptos::prelude::*;

use crate::content::{NAV_ITEMS, OWNER_EMAIL, OWNER_NAME, SOCIAL_LINKS};

fn build_time() -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok()
}

/// Copyright line. Dated from the build so server and browser render the same text.
fn copyright(built: Option<DateTime<FixedOffset>>) -> String {
    match built {
        Some(dt) => format!("© {} {OWNER_NAME}. All rights reserved.", dt.year()),
        None => format!("© {OWNER_NAME}. All rights reserved."),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let built = build_time();

    view! {
        <footer class="relative z-10 bg-neutral-950 text-white/80 pt-14 pb-8">
            <div class="mx-auto max-w-6xl px-4 grid md:grid-cols-3 gap-10">
                <div>
                    <h3 class="text-xl font-bold text-white mb-3">{OWNER_NAME}</h3>
                    <p class="text-sm leading-relaxed mb-3">
                        "Full Stack MERN Developer passionate about creating innovative web solutions. Always eager to learn new technologies and take on challenging projects."
                    </p>
                    <a href=format!("mailto:{OWNER_EMAIL}") class="text-sm hover:text-white">
                        {OWNER_EMAIL}
                    </a>
                </div>
                <nav aria-label="Quick links">
                    <h3 class="text-lg font-semibold text-white mb-3">"Quick Links"</h3>
                    <ul class="space-y-2 text-sm">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <a href=item.href class="hover:text-white">
                                            {item.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
                <div>
                    <h3 class="text-lg font-semibold text-white mb-3">"Connect With Me"</h3>
                    <div class="flex gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.label
                                        class="text-2xl hover:text-white"
                                    >
                                        <i class=social.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="mx-auto max-w-6xl px-4 mt-10 pt-6 border-t border-white/10 flex flex-col sm:flex-row items-center justify-between gap-3 text-xs">
                <span>{copyright(built)}</span>
                {built
                    .map(|dt| {
                        view! {
                            <time datetime=dt.to_rfc3339()>
                                {format!("Built {}", dt.format("%B %-d, %Y"))}
                            </time>
                        }
                    })}
                <a href="#home" class="hover:text-white">
                    "Back to Top ↑"
                </a>
            </div>
        </footer>
    }
}

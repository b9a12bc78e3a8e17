use std::time::Duration;

use leptos::{either::Either, ev::SubmitEvent, prelude::*, server_fn::codec::Json, task::spawn_local};

use super::{about::SectionHeading, reveal::ScrollReveal};
#[cfg(feature = "ssr")]
use crate::{
    contact::{ContactFields, Mailer},
    mailer::EmailJsMailer,
};
use crate::{
    contact::{ContactForm, EmailParams, Field, MailerError, Severity, NOTIFICATION_TIMEOUT_MS},
    content::{CONTACT_INFO, OWNER_NAME, SOCIAL_LINKS},
    motion::RevealTiming,
};

#[server(input = Json)]
pub async fn send_contact_message(params: EmailParams) -> Result<(), ServerFnError> {
    ContactFields::new(
        params.from_name.as_str(),
        params.from_email.as_str(),
        params.subject.as_str(),
        params.message.as_str(),
    )
    .validate()
    .map_err(|e| ServerFnError::new(e.to_string()))?;

    let Some(mailer) = use_context::<EmailJsMailer>() else {
        tracing::error!("contact message dropped: mail service is not configured");
        return Err(ServerFnError::new(MailerError::NotConfigured.to_string()));
    };
    mailer
        .send(params)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

const ITEM_TIMING: RevealTiming = RevealTiming {
    duration_ms: 800,
    delay_ms: 0,
};

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new(OWNER_NAME));
    let (invalid, set_invalid) = signal(None::<String>);
    // bumped on every shown notification so a stale auto-hide leaves a newer one alone
    let shown = StoredValue::new(0u64);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(begun) = form.try_update(|f| f.begin()) else {
            return;
        };
        let params = match begun {
            Ok(params) => params,
            Err(e) => {
                log::debug!("contact form not sent: {e}");
                set_invalid.set(Some(e.to_string()));
                return;
            }
        };
        set_invalid.set(None);

        spawn_local(async move {
            let outcome = send_contact_message(params)
                .await
                .map_err(|e| MailerError::Transport(e.to_string()));
            // the section may be gone by the time the answer arrives
            if form.try_update(|f| f.finish(outcome)) != Some(true) {
                return;
            }
            let Some(ticket) = shown.try_update_value(|n| {
                *n += 1;
                *n
            }) else {
                return;
            };
            set_timeout(
                move || {
                    if shown.try_get_value() == Some(ticket) {
                        form.try_update(|f| f.dismiss());
                    }
                },
                Duration::from_millis(NOTIFICATION_TIMEOUT_MS),
            );
        });
    };

    let sending = move || form.with(|f| f.is_sending());

    view! {
        <section id="contact" class="relative py-20 bg-surface">
            <div class="mx-auto max-w-6xl px-4">
                <SectionHeading
                    chip="Get In Touch"
                    title="Let's Work Together"
                    blurb="Have a project in mind? I'd love to hear about it. Send me a message and let's discuss how we can bring your ideas to life."
                />
                <div class="grid md:grid-cols-12 gap-10">
                    <div class="md:col-span-5">
                        <ScrollReveal timing=ITEM_TIMING>
                            <h3 class="text-2xl font-bold mb-6">"Contact Information"</h3>
                        </ScrollReveal>
                        {CONTACT_INFO
                            .iter()
                            .enumerate()
                            .map(|(i, info)| {
                                let value = match info.link {
                                    Some(link) => {
                                        Either::Left(
                                            view! {
                                                <a
                                                    href=link
                                                    target=info.opens_new_tab().then_some("_blank")
                                                    rel=info.opens_new_tab().then_some("noopener noreferrer")
                                                    class="hover:text-primary"
                                                >
                                                    {info.value}
                                                </a>
                                            },
                                        )
                                    }
                                    None => Either::Right(view! { <span>{info.value}</span> }),
                                };
                                view! {
                                    <ScrollReveal timing=ITEM_TIMING.staggered(i + 1, 200)>
                                        <div class="mb-4 p-4 rounded-xl bg-background shadow hover:-translate-y-1 transition">
                                            <div class="text-sm text-muted">{info.title}</div>
                                            <div class="font-medium">{value}</div>
                                        </div>
                                    </ScrollReveal>
                                }
                            })
                            .collect_view()}
                        <ScrollReveal timing=ITEM_TIMING.staggered(CONTACT_INFO.len() + 1, 200)>
                            <div class="flex gap-4 mt-6">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|social| {
                                        view! {
                                            <a
                                                href=social.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.label
                                                class="text-3xl hover:text-primary"
                                            >
                                                <i class=social.icon />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </ScrollReveal>
                    </div>
                    <div class="md:col-span-7">
                        <ScrollReveal timing=ITEM_TIMING.staggered(1, 200)>
                            <form
                                class="p-8 rounded-2xl bg-background shadow-lg space-y-5"
                                on:submit=on_submit
                                novalidate=true
                            >
                                <div class="grid sm:grid-cols-2 gap-5">
                                    <FormField form field=Field::Name />
                                    <FormField form field=Field::Email />
                                </div>
                                <FormField form field=Field::Subject />
                                <FormField form field=Field::Message />
                                <Show when=move || invalid.get().is_some()>
                                    <p class="text-sm text-red-500" role="alert">
                                        {move || invalid.get().unwrap_or_default()}
                                    </p>
                                </Show>
                                <button
                                    type="submit"
                                    class="w-full py-3 rounded-lg font-semibold text-white bg-primary hover:opacity-90 disabled:opacity-60 disabled:cursor-wait transition"
                                    disabled=sending
                                >
                                    {move || if sending() { "Sending..." } else { "Send Message" }}
                                </button>
                            </form>
                        </ScrollReveal>
                    </div>
                </div>
            </div>
            <NotificationToast form />
        </section>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.fields().get(field).to_string());
    let on_input = move |ev| {
        let text = event_target_value(&ev);
        form.update(|f| f.set_field(field, text));
    };
    let class = "w-full px-4 py-3 rounded-lg bg-surface border border-muted/30 focus:outline-none focus:border-primary";

    view! {
        <label class="block">
            <span class="block text-sm font-medium mb-1">{field.label()}</span>
            {match field {
                Field::Message => {
                    Either::Left(
                        view! {
                            <textarea
                                name=field.name()
                                rows="6"
                                required=true
                                class=class
                                prop:value=value
                                on:input=on_input
                            />
                        },
                    )
                }
                _ => {
                    Either::Right(
                        view! {
                            <input
                                type=if field == Field::Email { "email" } else { "text" }
                                name=field.name()
                                required=true
                                class=class
                                prop:value=value
                                on:input=on_input
                            />
                        },
                    )
                }
            }}
        </label>
    }
}

#[component]
fn NotificationToast(form: RwSignal<ContactForm>) -> impl IntoView {
    let notification = move || form.with(|f| f.notification());

    view! {
        {move || {
            notification()
                .map(|n| {
                    let tone = match n.severity {
                        Severity::Success => "bg-emerald-600",
                        Severity::Error => "bg-red-600",
                    };
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "fixed bottom-6 left-1/2 -translate-x-1/2 z-50 flex items-center gap-4 px-5 py-3 rounded-lg shadow-xl text-white {tone}",
                            )
                        >
                            <span>{n.message}</span>
                            <button
                                class="opacity-80 hover:opacity-100"
                                aria-label="dismiss"
                                on:click=move |_| form.update(|f| f.dismiss())
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}

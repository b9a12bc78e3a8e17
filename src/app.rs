mod about;
mod backdrop;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod skills;

pub use contact::send_contact_message;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::{OWNER_NAME, SITE_DESCRIPTION},
    theme::Theme,
};

use about::About;
use backdrop::ParallaxBackdrop;
use contact::Contact;
use footer::Footer;
use header::{use_theme_preference, Header};
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/gif" href="/developer.gif" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, toggle_theme) = use_theme_preference();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta property="og:title" content=format!("{OWNER_NAME} - Full Stack Developer") />
        <Meta property="og:type" content="website" />

        <Router>
            <div
                class=move || {
                    if theme.get().is_dark() {
                        "dark min-h-screen bg-background text-foreground"
                    } else {
                        "min-h-screen bg-background text-foreground"
                    }
                }
                data-theme=move || theme.get().as_str()
            >
                <ParallaxBackdrop theme />
                <Header theme toggle_theme />
                <main class="relative z-10 flex flex-col w-full">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=move || view! { <HomePage theme /> } />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn HomePage(theme: Signal<Theme>) -> impl IntoView {
    view! {
        <Title text="Full Stack Developer" />
        <Hero theme />
        <About />
        <Skills />
        <Projects />
        <Contact />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <section class="min-h-[60vh] flex flex-col items-center justify-center gap-4">
            <h1 class="text-3xl font-bold">"Page not found."</h1>
            <a href="/" class="text-primary hover:underline">
                "Back to the portfolio"
            </a>
        </section>
    }
}

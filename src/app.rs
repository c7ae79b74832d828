mod animate;
mod background;
mod contact;
mod cursor;
mod experience;
mod header;
mod hero;
mod homepage;
mod not_found;
mod projects;
mod section;
mod skills;
mod tech_icon;
mod theme;
mod toaster;
mod typewriter;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_location, path};

use crate::config::SiteConfig;

use animate::{init_smooth_scroll, provide_animation_engine, use_animations};
use cursor::CustomCursor;
use header::Header;
use homepage::HomePage;
use not_found::NotFound;
use theme::ThemeProvider;
use toaster::{provide_toasts, Toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-background text-foreground antialiased">
                <App />
            </body>
        </html>
    }
}

/// Fades the routed content out and in whenever the path changes.
#[component]
fn RouteTransition(children: Children) -> impl IntoView {
    let location = use_location();
    let (node, animate) = use_animations::<html::Div>();
    Effect::new(move |prev: Option<String>| {
        let path = location.pathname.get();
        if prev.is_some_and(|p| p != path) {
            animate.page_transition();
        }
        path
    });

    view! { <div node_ref=node>{children()}</div> }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::load();
    provide_context(config.clone());
    provide_toasts();
    provide_animation_engine();

    Effect::new(move |_| init_smooth_scroll());

    let owner = config.owner_name.clone();

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Meta
            name="description"
            content="Full-stack developer portfolio: skills, experience, projects and contact."
        />

        <ThemeProvider storage_key=config.theme_storage_key default_theme=config.default_theme>
            <Toaster />
            <CustomCursor />
            <Header />
            <div id="smooth-wrapper">
                <div id="smooth-content">
                    <Router>
                        <RouteTransition>
                            <Routes fallback=|| view! { <NotFound /> }>
                                <Route path=path!("/") view=HomePage />
                            </Routes>
                        </RouteTransition>
                    </Router>
                </div>
            </div>
        </ThemeProvider>
    }
}

use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{config::SiteConfig, content::NAV_ITEMS};

use super::theme::ThemeToggle;

const SCROLLED_PAST: f64 = 50.0;

pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
fn ResumeLink(
    #[prop(into)] class: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <a
            href=config.resume_path
            download=config.resume_file_name
            target="_blank"
            rel="noopener noreferrer"
            class=format!(
                "{class} group items-center px-3 py-1.5 text-sm rounded-md border border-border hover:bg-accent transition-colors",
            )
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <span class="mr-2 group-hover:scale-110 transition-transform">"⬇"</span>
            "Resume"
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = Signal::derive(move || scroll_y.get() > SCROLLED_PAST);
    let (menu_open, set_menu_open) = signal(false);
    let close_menu = Callback::new(move |_| set_menu_open.set(false));

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                if is_scrolled.get() {
                    "backdrop-blur-md bg-background/80 border-b border-border/50 shadow-lg py-2"
                } else {
                    "bg-transparent py-4"
                },
            )
        }>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between">
                    <button
                        type="button"
                        class="text-xl font-bold gradient-text hover:opacity-80 transition-opacity"
                        on:click=move |_| scroll_to_top()
                    >
                        {config.owner_name}
                    </button>

                    <nav class="hidden md:flex items-center space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class="text-sm font-medium transition-colors hover:text-primary relative group"
                                    >
                                        {item.name}
                                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-primary transition-all group-hover:w-full"></span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center gap-2">
                        <ResumeLink class="hidden md:flex" />
                        <ThemeToggle />
                        <button
                            type="button"
                            class="md:hidden p-2 rounded-md hover:bg-accent"
                            aria-label="Toggle navigation"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=move || menu_open.get()>
                    <nav class="md:hidden mt-4 pb-4 border-t border-border bg-background/95 rounded-b-xl shadow-lg">
                        <div class="flex flex-col space-y-2 pt-4">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=item.href
                                            class="px-2 py-2 text-sm font-medium transition-colors hover:text-primary hover:bg-muted rounded"
                                            on:click=move |_| set_menu_open.set(false)
                                        >
                                            {item.name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <ResumeLink class="flex w-fit mt-2" on_click=close_menu />
                        </div>
                    </nav>
                </Show>
            </div>
        </header>
    }
}

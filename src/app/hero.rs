use leptos::{html, prelude::*};
use web_sys::{HtmlElement, ScrollIntoViewOptions};

use crate::{animation::presets, config::SiteConfig, content::SOCIAL_LINKS};

use super::{
    animate::{html_element, use_animation_scope, use_animations},
    typewriter::TypeWriter,
};

fn scroll_to_section(id: &str) {
    let Some(section) = document().get_element_by_id(id) else {
        log::warn!("no section with id {id}");
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let scope = use_animation_scope();
    let badge = NodeRef::<html::Div>::new();
    let title = NodeRef::<html::H1>::new();
    let tagline = NodeRef::<html::Div>::new();
    let about = NodeRef::<html::P>::new();
    let actions = NodeRef::<html::Div>::new();
    let indicator = NodeRef::<html::Div>::new();
    let (cta, cta_anim) = use_animations::<html::Button>();
    let (blob_a, blob_a_anim) = use_animations::<html::Div>();
    let (blob_b, blob_b_anim) = use_animations::<html::Div>();

    Effect::new(move |_| {
        let steps = [
            html_element(badge),
            html_element(title),
            html_element(tagline),
            html_element(about),
            html_element(actions),
            html_element(indicator),
        ];
        let Some(steps) = steps.into_iter().collect::<Option<Vec<HtmlElement>>>() else {
            return;
        };
        scope.timeline(Some("entrance"), presets::entrance(steps));
    });

    Effect::new(move |_| {
        if cta.get().is_some() {
            cta_anim.magnetic();
        }
    });

    Effect::new(move |_| {
        if blob_a.get().is_some() && blob_b.get().is_some() {
            blob_a_anim.parallax(Some(0.3));
            blob_b_anim.parallax(Some(-0.2));
        }
    });

    let typewriter = config.typewriter.clone();

    view! {
        <section class="min-h-screen flex items-center justify-center relative overflow-hidden pt-20">
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div
                    node_ref=blob_a
                    class="absolute -top-40 -right-40 w-80 h-80 bg-primary/20 rounded-full blur-3xl"
                ></div>
                <div
                    node_ref=blob_b
                    class="absolute -bottom-40 -left-40 w-80 h-80 bg-blue-500/20 rounded-full blur-3xl"
                ></div>
            </div>

            <div class="container mx-auto px-4 z-10">
                <div class="text-center space-y-8">
                    <div node_ref=badge class="flex justify-center">
                        <span class="px-3 py-1 text-sm font-medium rounded-full bg-secondary text-secondary-foreground animate-glow">
                            "Available for Hire"
                        </span>
                    </div>

                    <h1 node_ref=title class="text-5xl md:text-7xl font-bold tracking-tight">
                        <span class="gradient-text">"Data-Driven"</span>
                        <br />
                        <span class="text-foreground">"Developer"</span>
                    </h1>

                    <div node_ref=tagline class="text-2xl md:text-3xl font-semibold text-primary h-10">
                        <TypeWriter
                            texts=typewriter.texts.clone()
                            timing=typewriter.timing()
                            cursor_blink_ms=typewriter.cursor_blink_ms
                        />
                    </div>

                    <p
                        node_ref=about
                        class="text-xl md:text-2xl text-muted-foreground max-w-3xl mx-auto leading-relaxed"
                    >
                        "Architecting elegant solutions with "
                        <strong>"Next.js"</strong>
                        ", "
                        <strong>"React"</strong>
                        ", and precision. I see beauty in perfectly structured data and craft intuitive experiences that scale."
                    </p>

                    <div
                        node_ref=actions
                        class="flex flex-col sm:flex-row gap-4 justify-center items-center pt-8"
                    >
                        <button
                            node_ref=cta
                            type="button"
                            class="group inline-flex items-center px-6 py-3 rounded-md bg-primary text-primary-foreground font-medium"
                            on:click=move |_| scroll_to_section("contact")
                        >
                            <span class="mr-2 group-hover:scale-110 transition-transform">"✉"</span>
                            "Get In Touch"
                        </button>
                        <div class="flex gap-2">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="p-2 rounded-md border border-border hover:scale-110 transition-transform"
                                        >
                                            <i class=format!("{} text-lg", link.icon_class)></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div
                    node_ref=indicator
                    class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-muted-foreground"
                    aria-hidden="true"
                >
                    "↓"
                </div>
            </div>
        </section>
    }
}


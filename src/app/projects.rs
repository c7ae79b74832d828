use leptos::{html, prelude::*};

use crate::content::{Project, PROJECTS};

use super::{animate::use_animations, section::SectionHeading, tech_icon::TechIcon};

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (card, animate) = use_animations::<html::Div>();
    let (image_failed, set_image_failed) = signal(false);

    Effect::new(move |_| {
        if card.get().is_some() {
            animate.scroll_fade_in();
        }
    });

    let featured = project.featured;

    view! {
        <div
            node_ref=card
            class=format!(
                "group rounded-lg bg-card text-card-foreground shadow-sm hover:shadow-xl transition-shadow duration-500 overflow-hidden border-2 hover:border-primary/50 {}",
                if featured { "lg:col-span-2" } else { "" },
            )
        >
            <div class=if featured { "lg:flex" } else { "" }>
                <Show when=move || !image_failed.get()>
                    <div class=format!(
                        "relative overflow-hidden {}",
                        if featured { "lg:w-1/2" } else { "" },
                    )>
                        <img
                            src=project.image
                            alt=project.title
                            loading="lazy"
                            class="w-full h-64 lg:h-80 object-cover group-hover:scale-110 transition-transform duration-500"
                            on:error=move |_| set_image_failed.set(true)
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
                    </div>
                </Show>
                <div class=format!(
                    "p-6 {}",
                    if featured { "lg:w-1/2 lg:flex lg:flex-col lg:justify-center" } else { "" },
                )>
                    <div class="flex items-center gap-2 mb-3">
                        <h3 class="text-2xl font-bold">{project.title}</h3>
                        {featured
                            .then(|| {
                                view! {
                                    <span class="px-2.5 py-0.5 text-xs font-semibold rounded-full text-white bg-gradient-to-r from-purple-500 to-pink-500">
                                        "Featured"
                                    </span>
                                }
                            })}
                    </div>
                    <p class="text-muted-foreground mb-4 leading-relaxed">{project.description}</p>
                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="inline-flex items-center gap-1.5 px-2.5 py-0.5 text-xs font-semibold rounded-full bg-secondary text-secondary-foreground">
                                        <TechIcon name=*tech class="w-4 h-4" />
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex gap-3">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group/btn inline-flex items-center px-3 py-1.5 text-sm rounded-md border border-border hover:bg-accent"
                        >
                            <i class="devicon-github-plain mr-2 group-hover/btn:scale-110 transition-transform"></i>
                            "Code"
                        </a>
                        <a
                            href=project.demo
                            target="_blank"
                            rel="noopener noreferrer"
                            class="group/btn inline-flex items-center px-3 py-1.5 text-sm rounded-md bg-primary text-primary-foreground"
                        >
                            <span class="mr-2 group-hover/btn:scale-110 transition-transform">"↗"</span>
                            "Live Demo"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="py-20 px-4">
            <div class="container mx-auto">
                <SectionHeading
                    lead="Featured"
                    accent="Projects"
                    blurb="Showcasing precision-crafted applications that demonstrate technical expertise and attention to detail."
                />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 max-w-6xl mx-auto">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

use leptos::{html, prelude::*};
use web_sys::HtmlElement;

use crate::{
    animation::presets,
    content::{ExperienceEntry, EXPERIENCE},
};

use super::{
    animate::{child_elements, use_animation_scope, use_animations},
    section::SectionHeading,
};

const ENTRY_STAGGER: f64 = 0.2;

#[component]
fn ExperienceCard(entry: &'static ExperienceEntry) -> impl IntoView {
    let (card, animate) = use_animations::<html::Div>();
    Effect::new(move |_| {
        if card.get().is_some() {
            animate.hover_scale(Some(1.02));
        }
    });

    view! {
        <div class="relative mb-12 ml-12 md:ml-20">
            <div class="absolute -left-10 md:-left-14 top-6 w-4 h-4 bg-primary rounded-full border-4 border-background shadow-lg"></div>
            <div
                node_ref=card
                class="rounded-lg bg-card text-card-foreground border shadow-sm hover:shadow-lg transition-shadow duration-300"
            >
                <div class="p-6">
                    <div class="flex flex-col md:flex-row md:items-start md:justify-between mb-4">
                        <div>
                            <h3 class="text-xl font-semibold mb-1">{entry.title}</h3>
                            <div class="flex items-center text-muted-foreground mb-2">
                                <span class="mr-2">"🏢"</span>
                                <span>{entry.company}</span>
                            </div>
                        </div>
                        <div class="flex items-center text-sm text-muted-foreground bg-muted px-3 py-1 rounded-full w-fit">
                            <span class="mr-2">"📅"</span>
                            {entry.period}
                        </div>
                    </div>
                    <p class="text-muted-foreground mb-4 leading-relaxed">{entry.description}</p>
                    <div class="flex flex-wrap gap-2 mb-4">
                        {entry
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-2.5 py-0.5 text-xs font-semibold rounded-full border border-border">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="space-y-2">
                        <h4 class="font-medium text-sm">"Key Achievements:"</h4>
                        <ul class="list-disc list-inside text-sm text-muted-foreground space-y-1">
                            {entry
                                .achievements
                                .iter()
                                .map(|achievement| view! { <li>{*achievement}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    let scope = use_animation_scope();
    let timeline = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let Some(timeline) = timeline.get() else {
            return;
        };
        let timeline: HtmlElement = timeline.into();
        // first child is the vertical rule
        let entries = child_elements(&timeline).into_iter().skip(1).collect::<Vec<_>>();
        scope.stagger_on_enter(
            Some("entries"),
            &timeline,
            &entries,
            presets::fade_in_left(),
            ENTRY_STAGGER,
        );
    });

    view! {
        <section class="py-20 px-4 bg-muted/50">
            <div class="container mx-auto">
                <SectionHeading
                    lead="Professional"
                    accent="Journey"
                    blurb="Building elegant solutions and leading teams across diverse projects and technologies."
                />
                <div class="max-w-4xl mx-auto">
                    <div node_ref=timeline class="relative">
                        <div class="absolute left-4 md:left-8 top-0 bottom-0 w-0.5 bg-primary/30"></div>
                        {EXPERIENCE
                            .iter()
                            .map(|entry| view! { <ExperienceCard entry=entry /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

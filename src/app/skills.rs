use leptos::{html, prelude::*};
use web_sys::HtmlElement;

use crate::{
    animation::presets,
    content::{SkillCategory, SKILL_CATEGORIES},
};

use super::{
    animate::{child_elements, use_animation_scope, use_animations},
    section::SectionHeading,
    tech_icon::TechIcon,
};

const CARD_STAGGER: f64 = 0.1;

#[component]
fn SkillBadge(skill: &'static str) -> impl IntoView {
    let (node, animate) = use_animations::<html::Span>();
    Effect::new(move |_| {
        if node.get().is_some() {
            animate.hover_scale(Some(1.08));
        }
    });

    view! {
        <span
            node_ref=node
            class="inline-flex items-center gap-1.5 px-2.5 py-0.5 text-xs font-semibold rounded-full bg-secondary text-secondary-foreground hover:bg-primary hover:text-primary-foreground transition-colors cursor-default"
        >
            <TechIcon name=skill class="w-4 h-4" />
            {skill}
        </span>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="group rounded-lg bg-card text-card-foreground shadow-sm hover:shadow-lg transition-shadow duration-500 border-2 hover:border-primary/50">
            <div class="p-6">
                <div class=format!(
                    "w-12 h-12 rounded-lg bg-gradient-to-r {} p-3 mb-4 flex items-center justify-center text-2xl group-hover:scale-110 transition-transform",
                    category.color,
                )>{category.icon}</div>
                <h3 class="text-xl font-semibold mb-4">{category.title}</h3>
                <div class="flex flex-wrap gap-2">
                    {category
                        .skills
                        .iter()
                        .map(|skill| view! { <SkillBadge skill=*skill /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let scope = use_animation_scope();
    let grid = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let Some(grid) = grid.get() else {
            return;
        };
        let grid: HtmlElement = grid.into();
        let cards = child_elements(&grid);
        scope.stagger_on_enter(
            Some("cards"),
            &grid,
            &cards,
            presets::scale_in(),
            CARD_STAGGER,
        );
    });

    view! {
        <section class="py-20 px-4">
            <div class="container mx-auto">
                <SectionHeading
                    lead="Technical"
                    accent="Expertise"
                    blurb="A comprehensive toolkit for building scalable, modern applications with precision and elegance."
                />
                <div node_ref=grid class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <SkillCard category=category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

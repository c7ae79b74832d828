use leptos::{html, prelude::*};

use super::animate::use_animations;

/// Centered section title with a gradient accent word, faded in on mount.
#[component]
pub fn SectionHeading(
    lead: &'static str,
    accent: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    let (node, animate) = use_animations::<html::Div>();
    Effect::new(move |_| {
        if node.get().is_some() {
            animate.fade_in(None);
        }
    });

    view! {
        <div node_ref=node class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                {lead} " " <span class="gradient-text">{accent}</span>
            </h2>
            <p class="text-xl text-muted-foreground max-w-2xl mx-auto">{blurb}</p>
        </div>
    }
}

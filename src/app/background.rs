use leptos::{html, prelude::*};
use web_sys::HtmlElement;

use crate::animation::presets;

use super::animate::{child_elements, use_animation_scope};

const EMOJIS: [&str; 12] = [
    "⚛️", "💻", "🔧", "⚡", "🚀", "🎨", "📱", "🌐", "🔮", "🎯", "⚙️", "🔍",
];

/// Emoji drifting behind the page. Placement is random per mount, so the
/// server renders them invisible and the client places them.
#[component]
pub fn AnimatedBackground() -> impl IntoView {
    let scope = use_animation_scope();
    let container = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let Some(container) = container.get() else {
            return;
        };
        let container: HtmlElement = container.into();
        let viewport = scope.viewport();
        for el in child_elements(&container) {
            let float = presets::floating(viewport, js_sys::Math::random);
            if let Err(e) = el
                .style()
                .set_property("font-size", &format!("{}rem", float.size_rem))
            {
                log::warn!("failed to size background emoji: {e:?}");
            }
            scope.float(&el, float);
        }
    });

    view! {
        <div
            node_ref=container
            aria-hidden="true"
            class="fixed inset-0 z-[1] overflow-hidden pointer-events-none"
        >
            {EMOJIS
                .iter()
                .map(|emoji| {
                    view! {
                        <span class="absolute top-0 left-0 select-none" style="opacity: 0">
                            {*emoji}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

use leptos::{html, prelude::*};
use leptos_use::use_media_query;

use super::animate::{html_element, use_animation_scope};

/// Pointer-following ring and dot; not rendered on coarse (touch) pointers.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let fine_pointer = use_media_query("(pointer: fine)");
    let scope = use_animation_scope();
    let ring = NodeRef::<html::Div>::new();
    let dot = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        if let (Some(ring), Some(dot)) = (html_element(ring), html_element(dot)) {
            scope.cursor(&ring, &dot);
        }
    });

    view! {
        <Show when=move || fine_pointer.get()>
            <div
                node_ref=ring
                aria-hidden="true"
                class="fixed top-0 left-0 pointer-events-none z-50 w-8 h-8 rounded-full border-2 border-primary/50 mix-blend-difference"
            ></div>
            <div
                node_ref=dot
                aria-hidden="true"
                class="fixed top-0 left-0 pointer-events-none z-50 w-2 h-2 rounded-full bg-primary"
            ></div>
        </Show>
    }
}

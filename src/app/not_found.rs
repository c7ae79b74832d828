use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_location};

use super::animate::use_animations;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let (node, animate) = use_animations::<html::Div>();
    let (code, code_anim) = use_animations::<html::H1>();

    #[cfg(feature = "ssr")]
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }

    Effect::new(move |_| {
        log::error!(
            "404: user attempted to access non-existent route: {}",
            location.pathname.get_untracked()
        );
    });

    Effect::new(move |_| {
        if node.get().is_some() {
            animate.fade_in(Some(0.5));
        }
    });

    Effect::new(move |_| {
        if code.get().is_some() {
            code_anim.text_reveal();
        }
    });

    view! {
        <Title text="Page not found" />
        <div node_ref=node class="min-h-screen flex items-center justify-center bg-muted/50">
            <div class="text-center">
                <h1 node_ref=code class="text-4xl font-bold mb-4">"404"</h1>
                <p class="text-xl text-muted-foreground mb-4">"Oops! Page not found"</p>
                <A href="/" attr:class="text-primary underline hover:opacity-80">
                    "Return to Home"
                </A>
            </div>
        </div>
    }
}

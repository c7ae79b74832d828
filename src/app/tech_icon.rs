use leptos::prelude::*;

use crate::content::tech_icon;

/// Logo for a technology; renders nothing for unknown names and hides itself
/// if the image fails to load.
#[component]
pub fn TechIcon(
    #[prop(into)] name: String,
    #[prop(into, default = "w-5 h-5".to_string())] class: String,
) -> impl IntoView {
    let Some(src) = tech_icon(&name) else {
        return None;
    };
    let (failed, set_failed) = signal(false);
    let class = format!("{class} inline-block object-contain");

    Some(view! {
        <img
            src=src
            alt=format!("{name} logo")
            loading="lazy"
            class=move || if failed.get() { "hidden".to_string() } else { class.clone() }
            on:error=move |_| set_failed.set(true)
        />
    })
}

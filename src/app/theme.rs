use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::{
    storage::{use_local_storage_with_options, UseStorageOptions},
    use_preferred_dark,
};

use crate::theme::{Appearance, Theme};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

/// Persists the preference under `storage_key` and mirrors the resolved
/// appearance onto the root element's `dark` class.
///
/// The stored value is read one frame after hydration, so the first client
/// render matches the server's `default_theme` markup.
#[component]
pub fn ThemeProvider(
    #[prop(into)] storage_key: String,
    default_theme: Theme,
    children: Children,
) -> impl IntoView {
    let (theme, set_theme, _) = use_local_storage_with_options::<Theme, FromToStringCodec>(
        storage_key,
        UseStorageOptions::default()
            .initial_value(default_theme)
            .delay_during_hydration(true),
    );
    let prefers_dark = use_preferred_dark();
    let appearance = Signal::derive(move || theme.get().resolve(prefers_dark.get()));

    Effect::new(move |_| {
        let dark = appearance.get() == Appearance::Dark;
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        let res = classes
            .remove_2("light", "dark")
            .and_then(|_| classes.add_1(if dark { "dark" } else { "light" }));
        if let Err(e) = res {
            log::warn!("failed to apply theme: {e:?}");
        }
    });

    provide_context(ThemeContext { theme, set_theme });
    children()
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ThemeContext { theme, set_theme } = use_theme();

    view! {
        <button
            type="button"
            class="p-2 rounded-full hover:bg-accent transition-colors"
            aria-label=move || format!("Theme: {}, switch to {}", theme.get(), theme.get().next())
            on:click=move |_| set_theme.set(theme.get_untracked().next())
        >
            {move || match theme.get() {
                Theme::Light => "☀️",
                Theme::Dark => "🌙",
                Theme::System => "💻",
            }}
        </button>
    }
}

use std::time::Duration;

use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::typewriter::{Timing, Typewriter};

#[component]
pub fn TypeWriter(
    texts: Vec<String>,
    #[prop(optional)] timing: Option<Timing>,
    #[prop(default = 500)] cursor_blink_ms: u64,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let machine = match Typewriter::new(&texts, timing.unwrap_or_default()) {
        Ok(machine) => machine,
        Err(e) => {
            log::warn!("typewriter disabled: {e}");
            return None;
        }
    };
    let delay = StoredValue::new(machine.initial_delay());
    let state = RwSignal::new(machine);
    let (cursor_visible, set_cursor_visible) = signal(true);

    // one pending timeout per step, cancelled on re-run and unmount
    Effect::new(move |_| {
        state.track();
        let wait: Duration = delay.get_value();
        let handle = set_timeout_with_handle(
            move || {
                if let Some(next) = state.try_update(|m| m.step()) {
                    delay.set_value(next);
                }
            },
            wait,
        )
        .ok();
        on_cleanup(move || {
            if let Some(handle) = handle {
                handle.clear();
            }
        });
    });

    let _ = use_interval_fn(
        move || set_cursor_visible.update(|v| *v = !*v),
        cursor_blink_ms,
    );

    Some(view! {
        <span class=class>
            {move || state.with(|m| m.text())}
            <span
                aria-hidden="true"
                class=move || {
                    format!(
                        "inline-block w-0.5 h-[1em] ml-1 align-middle bg-current transition-opacity {}",
                        if cursor_visible.get() { "opacity-100" } else { "opacity-0" },
                    )
                }
            />
        </span>
    })
}

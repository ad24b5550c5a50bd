//! Theme toggle button.

use leptos::prelude::*;

use crate::util::theme::ThemeMode;
#[cfg(feature = "hydrate")]
use crate::util::theme::ThemeController;

/// Header button that flips between light and dark mode.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let icon_ref = NodeRef::<leptos::html::I>::new();

    // Once the icon is mounted, make sure it matches the body's mode.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some((body, icon)) = theme_targets(icon_ref) {
                let mode = ThemeController::attach(body, icon).mode();
                log::debug!("theme attached in {mode:?} mode");
            }
        }
    });

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some((body, icon)) = theme_targets(icon_ref) {
                let mode = ThemeController::new(body, icon).toggle();
                log::debug!("theme switched to {mode:?}");
            }
        }
    };

    view! {
        <button id="theme-toggle" class="theme-toggle" type="button" title="Toggle theme" on:click=on_click>
            <i class=format!("fas {}", ThemeMode::default().icon_class()) node_ref=icon_ref></i>
        </button>
    }
}

/// Class lists of `<body>` and the toggle icon, once both exist.
#[cfg(feature = "hydrate")]
fn theme_targets(icon_ref: NodeRef<leptos::html::I>) -> Option<(web_sys::DomTokenList, web_sys::DomTokenList)> {
    let body = web_sys::window()?.document()?.body()?;
    let icon = icon_ref.get()?;
    Some((body.class_list(), icon.class_list()))
}

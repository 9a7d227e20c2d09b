use dioxus::prelude::*;
use store::Theme;

use crate::Icon;
use crate::icons::{FaMoon, FaSun};

/// Current page theme, provided as context by the platform `App`.
pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Round button that flips between light and dark. Shows the sun while dark
/// (click for light) and the moon while light.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let current = theme();

    rsx! {
        button {
            r#type: "button",
            class: if current.is_dark() { "theme-toggle theme-toggle-dark" } else { "theme-toggle" },
            "aria-label": current.toggle_label(),
            title: current.toggle_label(),
            onclick: move |_| {
                let next = theme().toggled();
                tracing::debug!("Theme switched to {}", next.as_str());
                theme.set(next);
            },
            if current.is_dark() {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}

//! Icon Component
//!
//! Renders a glyph-font span for any icon lookup key. Unknown keys show
//! the library fallback, and the original key stays readable in the DOM
//! through `data-icon`.

use leptos::*;

use crate::icons;

#[component]
pub fn Icon(
    /// Icon lookup key; aliases and variant spellings resolve through the
    /// icon library.
    #[prop(into)]
    name: MaybeSignal<String>,
    /// Extra CSS classes appended after the resolved icon class.
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let class_list = {
        let name = name.clone();
        move || {
            let (icon_class, _) = icons::resolve_class(&name.get());
            if class.is_empty() {
                format!("icon {}", icon_class)
            } else {
                format!("icon {} {}", icon_class, class)
            }
        }
    };
    let data_icon = {
        let name = name.clone();
        move || name.get()
    };
    let data_resolved = move || icons::resolve_key(&name.get());

    view! {
        <span
            class=class_list
            data-icon=data_icon
            data-icon-resolved=data_resolved
        ></span>
    }
}

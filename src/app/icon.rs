use leptos::prelude::*;

use crate::content::Icon;

#[component]
pub fn IconGlyph(icon: Icon, #[prop(optional)] extra_class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {}", icon.class_name(), extra_class) aria-hidden="true"></i> }
}

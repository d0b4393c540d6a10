use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer, UseIntersectionObserverReturn};

use crate::motion::{EntranceTrigger, Timing};

const SHOWN: &str = "opacity-100 translate-x-0 translate-y-0 scale-100";
pub const RISE_IN: &str = "opacity-0 translate-y-12";
pub const GROW_IN: &str = "opacity-0 scale-75";

pub fn entrance_classes(base: &str, shown: bool, hidden: &str) -> String {
    let state = if shown { SHOWN } else { hidden };
    format!("transition-all ease-out {base} {state}")
}

/// Flips to `true` once the component has mounted in the browser.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted(true));
    mounted
}

/// Animates its children in the first time they scroll into view. Leaving
/// the viewport afterwards does not hide them again.
#[component]
pub fn Reveal(
    timing: Timing,
    #[prop(default = RISE_IN)] hidden: &'static str,
    #[prop(optional)] extra_class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let trigger = RwSignal::new(EntranceTrigger::default());

    let UseIntersectionObserverReturn { stop, .. } =
        use_intersection_observer(node_ref, move |entries, _| {
            let visible = entries.iter().any(|e| e.is_intersecting());
            if visible && trigger.with_untracked(EntranceTrigger::needs_observer) {
                trigger.update(|t| {
                    t.observe(visible);
                });
            }
        });

    // nothing left to observe once revealed
    Effect::new(move |_| {
        if !trigger.with(EntranceTrigger::needs_observer) {
            stop();
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=move || {
                entrance_classes(extra_class, trigger.with(EntranceTrigger::is_revealed), hidden)
            }
            style=timing.style()
        >
            {children()}
        </div>
    }
}

use leptos::prelude::*;

use crate::content::{Section, PROFILE};
use crate::motion::{HOME_BANNER, HOME_CALL_TO_ACTION, HOME_TAGLINE, HOME_TITLE};

use super::reveal::{entrance_classes, use_mounted, GROW_IN};

const SLIDE_UP: &str = "opacity-0 translate-y-5";

/// Landing banner. Animates in on mount rather than on scroll since it is
/// always the first thing in view.
#[component]
pub fn HomeSection(on_navigate: Callback<Section>) -> impl IntoView {
    let mounted = use_mounted();

    view! {
        <section
            id=Section::Home.anchor_id()
            class="container mx-auto px-6 py-24 md:py-36 text-center min-h-screen flex flex-col justify-center items-center"
        >
            <div
                class=move || entrance_classes("", mounted(), GROW_IN)
                style=HOME_BANNER.style()
            >
                <div class="relative w-32 h-32 md:w-48 md:h-48 mx-auto mb-6 rounded-full overflow-hidden shadow-2xl ring-4 ring-indigo-500">
                    <img
                        src=PROFILE.photo_url
                        alt=PROFILE.owner
                        class="w-full h-full object-cover"
                    />
                </div>
                <h2
                    class=move || {
                        entrance_classes(
                            "text-4xl md:text-6xl font-extrabold text-white mb-4 leading-tight",
                            mounted(),
                            SLIDE_UP,
                        )
                    }
                    style=HOME_TITLE.style()
                >
                    "Hello, I'm "
                    <span class="text-indigo-400">{PROFILE.owner}</span>
                </h2>
                <p
                    class=move || {
                        entrance_classes("text-lg md:text-2xl text-gray-400 mb-8", mounted(), SLIDE_UP)
                    }
                    style=HOME_TAGLINE.style()
                >
                    {PROFILE.tagline}
                </p>
                <button
                    class=move || {
                        entrance_classes(
                            "bg-indigo-600 hover:bg-indigo-700 text-white font-bold py-3 px-8 rounded-full text-lg shadow-xl hover:scale-105",
                            mounted(),
                            SLIDE_UP,
                        )
                    }
                    style=HOME_CALL_TO_ACTION.style()
                    on:click=move |_| on_navigate.run(Section::Contact)
                >
                    "Get In Touch"
                </button>
            </div>
        </section>
    }
}

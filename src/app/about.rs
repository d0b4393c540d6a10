use leptos::prelude::*;

use crate::content::{Section, PROFILE};
use crate::motion::SECTION_ENTRANCE;

use super::reveal::Reveal;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Section::About.anchor_id() class="container mx-auto px-6 py-20">
            <Reveal timing=SECTION_ENTRANCE>
                <h2 class="text-3xl md:text-5xl font-bold text-center text-white mb-12">
                    "About Me"
                </h2>
                <div class="max-w-4xl mx-auto bg-gray-800 p-8 md:p-12 rounded-2xl shadow-2xl space-y-6">
                    {PROFILE
                        .about
                        .iter()
                        .map(|p| view! { <p class="text-lg text-gray-300 leading-relaxed">{*p}</p> })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

use leptos::prelude::*;

use crate::content::{Section, SKILLS};
use crate::motion::{SECTION_ENTRANCE, SKILL_CARD, SKILL_STAGGER_MS};

use super::icon::IconGlyph;
use super::reveal::{Reveal, GROW_IN};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor_id() class="container mx-auto px-6 py-20">
            <Reveal timing=SECTION_ENTRANCE>
                <h2 class="text-3xl md:text-5xl font-bold text-center text-white mb-12">
                    "My Skills"
                </h2>
                <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-6 max-w-5xl mx-auto">
                    {SKILLS
                        .into_iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <Reveal
                                    timing=SKILL_CARD.staggered(SKILL_STAGGER_MS, i)
                                    hidden=GROW_IN
                                    extra_class="flex flex-col items-center p-6 bg-gray-800 rounded-xl shadow-lg hover:bg-gray-700"
                                >
                                    <IconGlyph icon=skill.icon extra_class="text-5xl text-indigo-400 mb-4" />
                                    <p class="skill-label text-lg font-medium text-gray-200">
                                        {skill.label}
                                    </p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

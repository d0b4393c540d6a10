use leptos::prelude::*;

use crate::content::{Icon, ProjectEntry, Section, PROJECTS};
use crate::motion::{PROJECT_CARD, PROJECT_STAGGER_MS, SECTION_ENTRANCE};

use super::icon::IconGlyph;
use super::reveal::Reveal;

const LINK_CLASS: &str = "flex items-center space-x-2 text-indigo-400 hover:text-indigo-300 transition-colors duration-300 font-medium";

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor_id() class="container mx-auto px-6 py-20">
            <Reveal timing=SECTION_ENTRANCE>
                <h2 class="text-3xl md:text-5xl font-bold text-center text-white mb-12">
                    "My Projects"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .into_iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal
                                    timing=PROJECT_CARD.staggered(PROJECT_STAGGER_MS, i)
                                    extra_class="h-full"
                                >
                                    <ProjectCard project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    view! {
        <div class="project-card bg-gray-800 rounded-2xl shadow-xl p-8 flex flex-col h-full">
            <h3 class="text-xl md:text-2xl font-semibold text-white mb-2">{project.title}</h3>
            <p class="text-gray-400 mb-4 flex-grow">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-6">
                {project
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="bg-indigo-600 text-xs font-semibold px-3 py-1 rounded-full text-white">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-auto flex space-x-4">
                <a href=project.repo_url target="_blank" rel="noopener noreferrer" class=LINK_CLASS>
                    <IconGlyph icon=Icon::Github />
                    <span>"GitHub"</span>
                </a>
                <a href=project.demo_url target="_blank" rel="noopener noreferrer" class=LINK_CLASS>
                    <IconGlyph icon=Icon::ExternalLink />
                    <span>"Live Demo"</span>
                </a>
            </div>
        </div>
    }
}

use leptos::{either::Either, prelude::*};

use crate::content::{copyright_year, PROFILE, SOCIAL_LINKS};

use super::icon::IconGlyph;

const LINK_CLASS: &str = "text-gray-400 hover:text-indigo-400 transition-colors duration-300";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-950 py-8">
            <div class="container mx-auto px-6 text-center">
                <div class="flex justify-center space-x-6 mb-4">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            let glyph = view! { <IconGlyph icon=link.icon extra_class="text-2xl" /> };
                            if link.external {
                                Either::Left(
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class=LINK_CLASS
                                            aria-label=link.label
                                        >
                                            {glyph}
                                        </a>
                                    },
                                )
                            } else {
                                Either::Right(
                                    view! {
                                        <a href=link.href class=LINK_CLASS aria-label=link.label>
                                            {glyph}
                                        </a>
                                    },
                                )
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-gray-500 text-sm">
                    {format!("© {} {}. All rights reserved.", copyright_year(), PROFILE.owner)}
                </p>
            </div>
        </footer>
    }
}

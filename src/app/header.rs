use leptos::prelude::*;

use crate::content::{Icon, Section, NAV_ITEMS, PROFILE};
use crate::motion::HEADER_ENTRANCE;

use super::icon::IconGlyph;
use super::reveal::{entrance_classes, use_mounted};

const DESKTOP_ITEM: &str =
    "text-gray-300 hover:text-indigo-400 transition-colors duration-300 text-lg font-medium";
const MOBILE_ITEM: &str = "w-full text-left p-2 rounded-md hover:bg-gray-600 transition-colors duration-200 text-lg font-medium";

#[component]
pub fn Header(
    #[prop(into)] is_open: Signal<bool>,
    on_toggle: Callback<()>,
    on_navigate: Callback<Section>,
) -> impl IntoView {
    let mounted = use_mounted();

    let nav_buttons = move |item_class: &'static str| {
        NAV_ITEMS
            .into_iter()
            .map(|item| {
                view! {
                    <button class=item_class on:click=move |_| on_navigate.run(item.target)>
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header
            class=move || {
                entrance_classes(
                    "fixed top-0 left-0 right-0 z-50 bg-gray-800/70 backdrop-blur-sm shadow-lg p-4 md:p-6",
                    mounted(),
                    "-translate-y-full",
                )
            }
            style=HEADER_ENTRANCE.style()
        >
            <nav class="container mx-auto flex justify-between items-center">
                <h1 class="text-xl md:text-2xl font-bold text-indigo-400">{PROFILE.site_title}</h1>
                <div class="hidden md:flex space-x-6">{nav_buttons(DESKTOP_ITEM)}</div>
                <button
                    class="md:hidden text-gray-300 hover:text-indigo-400 transition-colors duration-300"
                    on:click=move |_| on_toggle.run(())
                >
                    {move || {
                        let icon = if is_open() { Icon::Close } else { Icon::Menu };
                        view! { <IconGlyph icon extra_class="text-[28px]" /> }
                    }}
                </button>
            </nav>
            <Show when=move || is_open()>
                <div class="md:hidden mt-4 bg-gray-700 p-4 rounded-lg shadow-xl animate-menu-in">
                    <div class="flex flex-col space-y-2">{nav_buttons(MOBILE_ITEM)}</div>
                </div>
            </Show>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    fn render_header(open: bool) -> String {
        Owner::new().with(|| {
            let on_toggle = Callback::new(|_: ()| {});
            let on_navigate = Callback::new(|_: Section| {});
            view! { <Header is_open=Signal::from(open) on_toggle on_navigate /> }.to_html()
        })
    }

    #[test]
    fn test_open_menu_renders_panel() {
        let html = render_header(true);
        assert!(html.contains("icon-x"));
        assert!(!html.contains("icon-menu"));

        let panel = html
            .split_once("animate-menu-in")
            .map(|(_, rest)| rest)
            .expect("mobile panel should render when open");
        assert_eq!(panel.matches("</button>").count(), NAV_ITEMS.len());
        let mut last = 0;
        for item in NAV_ITEMS {
            let at = panel[last..]
                .find(&format!("{}</button>", item.label))
                .unwrap_or_else(|| panic!("{} out of order", item.label));
            last += at + 1;
        }
    }

    #[test]
    fn test_closed_menu_has_no_panel() {
        let html = render_header(false);
        assert!(html.contains("icon-menu"));
        assert!(!html.contains("animate-menu-in"));
        // desktop nav plus the toggle
        assert_eq!(html.matches("</button>").count(), NAV_ITEMS.len() + 1);
    }
}

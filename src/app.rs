mod about;
mod contact;
mod footer;
mod header;
mod homepage;
mod icon;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{Section, PROFILE};
use crate::navigation::{DomViewport, NavigationController};

use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use header::Header;
use homepage::HomeSection;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" href="https://unpkg.com/lucide-static@0.460.0/font/lucide.css" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=PROFILE.site_title />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole page. Owns the menu state; every section below only gets the
/// callbacks it needs.
#[component]
fn Portfolio() -> impl IntoView {
    let nav = RwSignal::new(NavigationController::default());
    let is_open = Memo::new(move |_| nav.with(NavigationController::is_open));
    let on_toggle = Callback::new(move |_: ()| nav.update(NavigationController::toggle_menu));
    let on_navigate = Callback::new(move |section: Section| {
        nav.update(|n| n.scroll_to_section(&DomViewport, section))
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-gray-100 font-sans">
            <Header is_open on_toggle on_navigate />
            <main>
                <HomeSection on_navigate />
                <AboutSection />
                <SkillsSection />
                <ProjectsSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    fn render<F, V>(f: F) -> String
    where
        F: FnOnce() -> V,
        V: RenderHtml,
    {
        Owner::new().with(|| f().to_html())
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| html.find(n).unwrap_or_else(|| panic!("missing {n}")))
            .collect()
    }

    fn is_ascending(v: &[usize]) -> bool {
        v.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_portfolio_section_order() {
        let html = render(|| view! { <Portfolio /> });
        let anchors = Section::ALL
            .iter()
            .map(|s| format!("id=\"{}\"", s.anchor_id()))
            .collect::<Vec<_>>();
        let anchors = anchors.iter().map(String::as_str).collect::<Vec<_>>();
        assert!(is_ascending(&positions(&html, &anchors)));
        assert!(html.find("<header").unwrap() < html.find("id=\"home\"").unwrap());
        assert!(html.find("<footer").unwrap() > html.find("id=\"contact\"").unwrap());
    }

    #[test]
    fn test_mobile_menu_starts_hidden() {
        let html = render(|| view! { <Portfolio /> });
        assert!(html.contains("icon-menu"));
        assert!(!html.contains("icon-x"));
        assert!(!html.contains("animate-menu-in"));
    }
}

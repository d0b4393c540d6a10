use thiserror::Error;

use crate::content::Section;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrollError {
    #[error("no element with id `{0}`")]
    MissingAnchor(String),
    #[error("document is not available")]
    NoDocument,
}

/// Whatever the page is scrolled inside of.
pub trait Viewport {
    fn scroll_into_view(&self, anchor_id: &str) -> Result<(), ScrollError>;
}

/// The browser window, scrolled smoothly.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_into_view(&self, anchor_id: &str) -> Result<(), ScrollError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ScrollError::NoDocument)?;
        let el = document
            .get_element_by_id(anchor_id)
            .ok_or_else(|| ScrollError::MissingAnchor(anchor_id.to_string()))?;
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        Ok(())
    }
}

/// Mobile menu state plus in-page navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationController {
    is_open: bool,
}

impl NavigationController {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle_menu(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Scrolls to `section` and closes the menu. A missing anchor is
    /// ignored; the menu closes either way.
    pub fn scroll_to_section<V: Viewport>(&mut self, viewport: &V, section: Section) {
        if let Err(e) = viewport.scroll_into_view(section.anchor_id()) {
            log::debug!("skipping scroll to {section}: {e}");
        }
        self.is_open = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records scroll requests and resolves only the anchors it was given.
    struct FakeViewport {
        anchors: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn with_anchors(anchors: &[&'static str]) -> Self {
            Self {
                anchors: anchors.to_vec(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for FakeViewport {
        fn scroll_into_view(&self, anchor_id: &str) -> Result<(), ScrollError> {
            if !self.anchors.contains(&anchor_id) {
                return Err(ScrollError::MissingAnchor(anchor_id.to_string()));
            }
            self.scrolled.borrow_mut().push(anchor_id.to_string());
            Ok(())
        }
    }

    fn full_page() -> FakeViewport {
        FakeViewport::with_anchors(&["home", "about", "skills", "projects", "contact"])
    }

    #[test]
    fn test_menu_starts_closed() {
        assert!(!NavigationController::default().is_open());
    }

    #[test]
    fn test_toggle_parity() {
        let mut nav = NavigationController::default();
        for n in 1..=7 {
            nav.toggle_menu();
            assert_eq!(nav.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_scroll_always_closes_menu() {
        let viewport = full_page();
        for section in Section::ALL {
            for start_open in [false, true] {
                let mut nav = NavigationController::default();
                if start_open {
                    nav.toggle_menu();
                }
                nav.scroll_to_section(&viewport, section);
                assert!(!nav.is_open());
            }
        }
    }

    #[test]
    fn test_missing_anchor_is_ignored() {
        let viewport = FakeViewport::with_anchors(&["home"]);
        let mut nav = NavigationController::default();
        nav.toggle_menu();

        nav.scroll_to_section(&viewport, Section::Projects);

        assert!(!nav.is_open());
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_open_menu_then_navigate() {
        let viewport = full_page();
        let mut nav = NavigationController::default();
        assert!(!nav.is_open());

        nav.toggle_menu();
        assert!(nav.is_open());

        nav.scroll_to_section(&viewport, "projects".parse().unwrap());
        assert!(!nav.is_open());
        assert_eq!(*viewport.scrolled.borrow(), vec!["projects".to_string()]);
    }
}

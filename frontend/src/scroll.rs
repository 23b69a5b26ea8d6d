use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;

/// Page sections the navigation knows about, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    CreditRepair,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::CreditRepair,
        Section::About,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::CreditRepair => "credit-repair",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

/// The section under a marker line a little below the top of the viewport.
pub fn active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
    let marker = scroll_y + config::SCROLL_SPY_OFFSET;
    bounds
        .iter()
        .find(|b| marker >= b.top && marker < b.top + b.height)
        .map(|b| b.section)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLLED_THRESHOLD
}

/// Whether at least `threshold` of an element's height is inside the viewport.
/// `top` is relative to the viewport, as from `getBoundingClientRect`.
pub fn is_in_view(top: f64, height: f64, viewport_height: f64, threshold: f64) -> bool {
    if height <= 0.0 || viewport_height <= 0.0 {
        return false;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    visible > 0.0 && visible / height >= threshold
}

fn section_element(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn measure_sections() -> Vec<SectionBounds> {
    Section::ALL
        .iter()
        .filter_map(|&section| {
            section_element(section.id()).map(|el| SectionBounds {
                section,
                top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
        })
        .collect()
}

/// Window offset that leaves a section just below the fixed navigation bar.
pub fn scroll_target(offset_top: i32) -> f64 {
    offset_top as f64 - config::SCROLL_TO_OFFSET
}

/// Smooth-scrolls so the element sits just below the fixed navigation bar.
pub fn scroll_to_section(id: &str) {
    if let (Some(window), Some(element)) = (web_sys::window(), section_element(id)) {
        let options = ScrollToOptions::new();
        options.set_top(scroll_target(element.offset_top()));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Flips to true the first time the referenced element scrolls into view, and stays true.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let check = {
                    let node = node.clone();
                    move || {
                        let (Some(element), Some(window)) = (node.cast::<Element>(), web_sys::window()) else {
                            return;
                        };
                        let viewport_height = window
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        let rect = element.get_bounding_client_rect();
                        if is_in_view(rect.top(), rect.height(), viewport_height, config::REVEAL_THRESHOLD) {
                            revealed.set(true);
                        }
                    }
                };

                // Elements already on screen at mount
                check();

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(check);
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            node,
        );
    }

    *revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        [(Section::Home, 0.0, 800.0), (Section::Services, 800.0, 1200.0), (Section::About, 2000.0, 600.0)]
            .into_iter()
            .map(|(section, top, height)| SectionBounds { section, top, height })
            .collect()
    }

    #[test]
    fn active_section_uses_spy_offset() {
        let page = page();
        assert_eq!(active_section(0.0, &page), Some(Section::Home));
        assert_eq!(active_section(699.0, &page), Some(Section::Home));
        assert_eq!(active_section(700.0, &page), Some(Section::Services));
        assert_eq!(active_section(1950.0, &page), Some(Section::About));
    }

    #[test]
    fn no_section_below_the_last_one() {
        assert_eq!(active_section(5000.0, &page()), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn scroll_target_clears_the_nav_bar() {
        assert_eq!(scroll_target(700), 620.0);
        assert_eq!(scroll_target(0), -80.0);
    }

    #[test]
    fn nav_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(21.0));
    }

    #[test]
    fn reveal_needs_a_tenth_on_screen() {
        // 1000px tall element starting 950px down an 1000px viewport: 5% visible.
        assert!(!is_in_view(950.0, 1000.0, 1000.0, 0.1));
        assert!(is_in_view(900.0, 1000.0, 1000.0, 0.1));
        // Scrolled past above the viewport.
        assert!(!is_in_view(-1200.0, 1000.0, 1000.0, 0.1));
        // Taller than the viewport and straddling it.
        assert!(is_in_view(-500.0, 3000.0, 1000.0, 0.1));
        assert!(!is_in_view(10.0, 0.0, 1000.0, 0.1));
    }
}

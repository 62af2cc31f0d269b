//! Section headings that fade and rise into place while scrolled into view.

use crate::constants::REVEAL_ROOT_MARGIN;
use crate::dom::set_style;
use crate::events::VisibilityWatch;
use crate::style;
use folio_core::{reveal_state, RevealState, REVEAL_THRESHOLD, REVEAL_TRANSITION_SEC};
use web_sys as web;

fn apply(el: &web::HtmlElement, state: &RevealState) {
    set_style(el, "opacity", &state.opacity.to_string());
    set_style(el, "transform", &style::reveal_transform(state));
}

/// A heading under reveal. Dropping it stops observing and leaves the heading
/// fully shown.
pub struct SectionReveal {
    heading: web::HtmlElement,
    _watch: VisibilityWatch,
}

impl SectionReveal {
    pub fn mount(heading: web::HtmlElement) -> anyhow::Result<Self> {
        apply(&heading, &RevealState::HIDDEN);
        set_style(
            &heading,
            "transition",
            &style::reveal_transition(REVEAL_TRANSITION_SEC),
        );

        let target = heading.clone();
        let watch = VisibilityWatch::observe(
            &heading,
            REVEAL_ROOT_MARGIN,
            f64::from(REVEAL_THRESHOLD),
            move |visible, ratio| {
                let state = reveal_state(if visible { ratio } else { 0.0 });
                apply(&target, &state);
            },
        )?;
        Ok(Self {
            heading,
            _watch: watch,
        })
    }
}

impl Drop for SectionReveal {
    fn drop(&mut self) {
        apply(&self.heading, &RevealState::SHOWN);
    }
}

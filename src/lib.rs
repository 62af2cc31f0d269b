#![cfg(target_arch = "wasm32")]
use folio_core::{audit, PROJECTS, SKILL_CATEGORIES};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod card;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod gallery;
mod lifecycle;
mod reveal;
mod style;
mod tech_stack;

use constants::{
    PROJECTS_GRID_ID, PROJECTS_SECTION_ID, REVEAL_HEADER_IDS, SKILLS_GRID_ID, SKILLS_TABS_ID,
    TILT_RANGE_ATTR,
};
use lifecycle::PageAction;

/// Everything mounted on the page. Dropping it releases the frame loop,
/// every card and every listener.
struct App {
    _gallery: Option<gallery::Gallery>,
    _tech_stack: Option<tech_stack::TechStack>,
    _reveals: Vec<reveal::SectionReveal>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    for issue in audit(&PROJECTS, &SKILL_CATEGORIES) {
        log::warn!("[content] {}", issue);
    }
    mount_app();
    wire_page_lifecycle();
    Ok(())
}

fn mount_app() {
    match init() {
        Ok(app) => APP.with(|slot| *slot.borrow_mut() = Some(app)),
        Err(e) => log::error!("init error: {:?}", e),
    }
}

fn init() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let tilt_attr = document
        .get_element_by_id(PROJECTS_SECTION_ID)
        .and_then(|el| el.get_attribute(TILT_RANGE_ATTR));
    let card_config = config::card_config(tilt_attr.as_deref());

    let gallery = match document.get_element_by_id(PROJECTS_GRID_ID) {
        Some(grid) => Some(gallery::Gallery::mount(&document, &grid, &PROJECTS, card_config)?),
        None => {
            log::warn!("missing #{}; projects not mounted", PROJECTS_GRID_ID);
            None
        }
    };

    let tech_stack = match (
        document.get_element_by_id(SKILLS_TABS_ID),
        dom::html_by_id(&document, SKILLS_GRID_ID),
    ) {
        (Some(tabs), Ok(grid)) => Some(tech_stack::TechStack::mount(
            &document,
            &tabs,
            grid,
            &SKILL_CATEGORIES,
        )?),
        _ => {
            log::warn!("missing #{} or #{}; skills not mounted", SKILLS_TABS_ID, SKILLS_GRID_ID);
            None
        }
    };

    let mut reveals = Vec::with_capacity(REVEAL_HEADER_IDS.len());
    for id in REVEAL_HEADER_IDS {
        match dom::html_by_id(&document, id) {
            Ok(heading) => reveals.push(reveal::SectionReveal::mount(heading)?),
            Err(e) => log::debug!("no reveal: {}", e),
        }
    }

    Ok(App {
        _gallery: gallery,
        _tech_stack: tech_stack,
        _reveals: reveals,
    })
}

// These listeners live for the page, so they are not owned by `App`.
fn wire_page_lifecycle() {
    let Some(window) = web::window() else {
        return;
    };

    let on_hide = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if lifecycle::on_page_hide(ev.persisted()) == PageAction::TearDown
            && APP.with(|slot| slot.borrow_mut().take()).is_some()
        {
            log::info!("folio-web torn down");
        }
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    let _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let on_show = Closure::wrap(Box::new(move |_ev: web::PageTransitionEvent| {
        let mounted = APP.with(|slot| slot.borrow().is_some());
        if lifecycle::on_page_show(mounted) == PageAction::Mount {
            log::info!("folio-web remounting after page show");
            mount_app();
        }
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    let _ = window.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}

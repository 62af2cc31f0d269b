//! Tabbed skills grid.

use crate::constants::{TAB_ACTIVE_CLASS, TAB_CLASS, TILE_CLASS, TILE_ENTER_SEC};
use crate::dom::{append_html, append_text, set_style, Listener};
use crate::style;
use folio_core::{tile_entrance, Skill, SkillCategory, SkillIcon, TabState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct TabsShared {
    document: web::Document,
    state: RefCell<TabState>,
    tabs: Vec<web::HtmlElement>,
    grid: web::HtmlElement,
}

impl TabsShared {
    fn select(&self, title: &str) {
        if !self.state.borrow_mut().select(title) {
            return;
        }
        self.sync_tabs();
        if let Err(e) = self.render_grid() {
            log::error!("[skills] render error: {:?}", e);
        }
    }

    fn sync_tabs(&self) {
        let active = self.state.borrow().active_index();
        for (i, tab) in self.tabs.iter().enumerate() {
            let _ = tab
                .class_list()
                .toggle_with_force(TAB_ACTIVE_CLASS, i == active);
        }
    }

    fn render_grid(&self) -> anyhow::Result<()> {
        self.grid.set_inner_html("");
        let Some(category) = self.state.borrow().active() else {
            return Ok(());
        };
        log::info!("[skills] showing '{}' ({} skills)", category.title, category.skills.len());
        let mut tiles = Vec::with_capacity(category.skills.len());
        for (idx, skill) in category.skills.iter().enumerate() {
            let tile = render_tile(&self.document, &self.grid, skill)?;
            let entrance = tile_entrance(idx);
            set_style(&tile, "opacity", &entrance.from_opacity.to_string());
            set_style(&tile, "transform", &style::tile_initial_transform(&entrance));
            set_style(&tile, "transition", &style::tile_transition(&entrance, TILE_ENTER_SEC));
            tiles.push(tile);
        }
        // Flush the start styles so the change below transitions.
        let _ = self.grid.offset_height();
        for tile in &tiles {
            set_style(tile, "opacity", "1");
            set_style(tile, "transform", "scale(1)");
        }
        Ok(())
    }
}

fn render_tile(
    document: &web::Document,
    grid: &web::Element,
    skill: &Skill,
) -> anyhow::Result<web::HtmlElement> {
    let tile = append_html(document, grid, "div", TILE_CLASS)?;
    let badge = append_html(document, &tile, "div", "skill-badge")?;
    match skill.icon {
        SkillIcon::Image(src) => {
            let img = append_html(document, &badge, "img", "skill-logo")?;
            let _ = img.set_attribute("src", src);
            let _ = img.set_attribute("alt", skill.name);
        }
        SkillIcon::Glyph(name) => {
            let glyph = append_html(document, &badge, "span", "skill-glyph")?;
            let _ = glyph.set_attribute("data-icon", name);
            set_style(&glyph, "color", skill.color);
        }
    }
    append_text(document, &tile, "h3", "skill-name", skill.name)?;
    Ok(tile)
}

/// Tab strip plus grid. Dropping it detaches the tab click handlers and
/// removes the tabs and tiles it rendered.
pub struct TechStack {
    _listeners: Vec<Listener>,
    shared: Rc<TabsShared>,
}

impl Drop for TechStack {
    fn drop(&mut self) {
        for tab in &self.shared.tabs {
            tab.remove();
        }
        self.shared.grid.set_inner_html("");
        log::info!("[skills] unmounted");
    }
}

impl TechStack {
    pub fn mount(
        document: &web::Document,
        tab_strip: &web::Element,
        grid: web::HtmlElement,
        categories: &'static [SkillCategory],
    ) -> anyhow::Result<Self> {
        let state = TabState::new(categories);
        let mut tabs = Vec::with_capacity(categories.len());
        for category in categories {
            tabs.push(append_text(document, tab_strip, "span", TAB_CLASS, category.title)?);
        }
        let shared = Rc::new(TabsShared {
            document: document.clone(),
            state: RefCell::new(state),
            tabs,
            grid,
        });
        shared.sync_tabs();
        shared.render_grid()?;

        let mut listeners = Vec::with_capacity(categories.len());
        for (tab, category) in shared.tabs.iter().zip(categories) {
            let shared_click = shared.clone();
            let title = category.title;
            let target: web::EventTarget = tab.clone().into();
            listeners.push(Listener::new(&target, "click", move |_ev: web::MouseEvent| {
                shared_click.select(title);
            })?);
        }
        Ok(Self {
            _listeners: listeners,
            shared,
        })
    }
}

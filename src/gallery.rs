//! Projects showcase: mounts one animated card per project record.

use crate::card::CardView;
use crate::constants::VIEWPORT_ROOT_MARGIN;
use crate::dom::Listener;
use crate::events::{wire_card_pointer, CardPointerWiring, VisibilityWatch};
use crate::frame::{self, CardViews, FrameContext, FrameLoop};
use folio_core::{CardConfig, CardId, Project, Stage};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A card on the page. Dropping it takes the card off the stage, removes
/// its DOM and detaches its listeners and observer, in that order.
struct MountedCard {
    id: CardId,
    stage: Rc<RefCell<Stage>>,
    views: CardViews,
    _listeners: Vec<Listener>,
    _visibility: VisibilityWatch,
}

impl Drop for MountedCard {
    fn drop(&mut self) {
        self.stage.borrow_mut().unmount(self.id);
        if let Some(view) = self.views.borrow_mut().remove(&self.id) {
            view.remove();
        }
        log::info!("[gallery] unmounted card {}", self.id.raw());
    }
}

pub struct Gallery {
    // Declared first so the loop stops before any card is torn down.
    _frame_loop: FrameLoop,
    cards: Vec<MountedCard>,
    stage: Rc<RefCell<Stage>>,
    views: CardViews,
    config: CardConfig,
}

impl Gallery {
    /// Mounts every project under `grid` and starts the frame loop.
    pub fn mount(
        document: &web::Document,
        grid: &web::Element,
        projects: &[Project],
        config: CardConfig,
    ) -> anyhow::Result<Self> {
        let stage = Rc::new(RefCell::new(Stage::new()));
        let views: CardViews = Rc::default();
        let frame_ctx = Rc::new(RefCell::new(FrameContext::new(stage.clone(), views.clone())));
        let frame_loop = frame::start_loop(frame_ctx)?;
        let mut gallery = Self {
            _frame_loop: frame_loop,
            cards: Vec::with_capacity(projects.len()),
            stage,
            views,
            config,
        };
        for project in projects {
            gallery.mount_card(document, grid, project)?;
        }
        log::info!("[gallery] mounted {} cards", gallery.cards.len());
        Ok(gallery)
    }

    pub fn mount_card(
        &mut self,
        document: &web::Document,
        grid: &web::Element,
        project: &Project,
    ) -> anyhow::Result<CardId> {
        let id = self.stage.borrow_mut().mount(self.config);
        let view = match CardView::build(document, grid, project) {
            Ok(v) => v,
            Err(e) => {
                self.stage.borrow_mut().unmount(id);
                return Err(e);
            }
        };

        // Initial rest pose; the loop only writes cards that are animating.
        if let Some(motion) = self.stage.borrow().card(id) {
            let mut scratch = String::new();
            view.apply(&motion.frame(), &mut scratch);
        }

        let wiring = CardPointerWiring {
            surface: view.root.clone(),
            stage: self.stage.clone(),
            card: id,
        };
        let listeners = wire_card_pointer(&wiring);
        let stage = self.stage.clone();
        let visibility =
            VisibilityWatch::observe(&view.root, VIEWPORT_ROOT_MARGIN, 0.0, move |visible, _| {
                if let Some(motion) = stage.borrow_mut().card_mut(id) {
                    motion.on_visibility_change(visible);
                }
            });
        let (listeners, visibility) = match (listeners, visibility) {
            (Ok(l), Ok(v)) => (l, v),
            (Err(e), _) | (_, Err(e)) => {
                self.stage.borrow_mut().unmount(id);
                view.remove();
                return Err(e);
            }
        };

        self.views.borrow_mut().insert(id, view);
        self.cards.push(MountedCard {
            id,
            stage: self.stage.clone(),
            views: self.views.clone(),
            _listeners: listeners,
            _visibility: visibility,
        });
        log::info!("[gallery] mounted card {} for '{}'", id.raw(), project.title);
        Ok(id)
    }
}

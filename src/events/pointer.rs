use crate::dom::Listener;
use folio_core::{CardId, Stage, SurfaceBounds};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Current layout of `el`, measured now.
#[inline]
pub fn surface_bounds(el: &web::Element) -> SurfaceBounds {
    let rect = el.get_bounding_client_rect();
    SurfaceBounds::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

#[inline]
pub fn client_point(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[derive(Clone)]
pub struct CardPointerWiring {
    pub surface: web::HtmlElement,
    pub stage: Rc<RefCell<Stage>>,
    pub card: CardId,
}

/// Attaches enter/move/leave handlers to the card surface. The returned
/// listeners detach themselves when dropped.
pub fn wire_card_pointer(w: &CardPointerWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointerenter(w)?,
        wire_pointermove(w)?,
        wire_pointerleave(w)?,
    ])
}

fn wire_pointerenter(w: &CardPointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: web::EventTarget = w.surface.clone().into();
    Listener::new(&target, "pointerenter", move |_ev: web::PointerEvent| {
        if let Some(card) = w.stage.borrow_mut().card_mut(w.card) {
            card.on_pointer_enter();
        }
    })
}

fn wire_pointermove(w: &CardPointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: web::EventTarget = w.surface.clone().into();
    Listener::new(&target, "pointermove", move |ev: web::PointerEvent| {
        // Layout is read on every move; it can change between frames.
        let bounds = surface_bounds(&w.surface);
        let mut stage = w.stage.borrow_mut();
        let Some(card) = stage.card_mut(w.card) else {
            return;
        };
        if let Err(e) = card.on_pointer_move(client_point(&ev), &bounds) {
            log::debug!("[pointer] card {} skipped sample: {}", w.card.raw(), e);
        }
    })
}

fn wire_pointerleave(w: &CardPointerWiring) -> anyhow::Result<Listener> {
    let w = w.clone();
    let target: web::EventTarget = w.surface.clone().into();
    Listener::new(&target, "pointerleave", move |_ev: web::PointerEvent| {
        if let Some(card) = w.stage.borrow_mut().card_mut(w.card) {
            card.on_pointer_leave();
        }
    })
}

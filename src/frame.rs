use crate::card::CardView;
use crate::dom::js_err;
use fnv::FnvHashMap;
use folio_core::{CardId, Stage};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type CardViews = Rc<RefCell<FnvHashMap<CardId, CardView>>>;

pub struct FrameContext {
    pub stage: Rc<RefCell<Stage>>,
    pub views: CardViews,
    pub last_instant: Instant,
    /// Reused for every CSS string written during a frame.
    pub scratch: String,
}

impl FrameContext {
    pub fn new(stage: Rc<RefCell<Stage>>, views: CardViews) -> Self {
        Self {
            stage,
            views,
            last_instant: Instant::now(),
            scratch: String::with_capacity(160),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let views = self.views.borrow();
        let scratch = &mut self.scratch;
        self.stage.borrow_mut().tick(dt_sec, |id, frame| {
            if let Some(view) = views.get(&id) {
                view.apply(frame, scratch);
            }
        });
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and releases the callback; no frame runs afterwards.
pub struct FrameLoop {
    window: web::Window,
    pending: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    tick: TickClosure,
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<FrameLoop> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let stopped_tick = stopped.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if stopped_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            match window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => pending_tick.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }) as Box<dyn FnMut()>));

    let first = match tick.borrow().as_ref() {
        Some(cb) => window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(js_err)?,
        None => anyhow::bail!("frame callback missing"),
    };
    pending.set(Some(first));
    log::info!("[frame] loop started");
    Ok(FrameLoop {
        window,
        pending,
        stopped,
        tick,
    })
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stopped.set(true);
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The callback holds `tick` itself; taking it breaks the cycle.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

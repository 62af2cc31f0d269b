use crate::dom::js_err;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Reports viewport visibility changes of one element. The handler gets
/// whether it intersects and the visible share of its area.
/// Dropping it disconnects the observer.
pub struct VisibilityWatch {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityWatch {
    pub fn observe(
        target: &web::Element,
        root_margin: &str,
        threshold: f64,
        mut on_change: impl FnMut(bool, f32) + 'static,
    ) -> anyhow::Result<Self> {
        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                        on_change(entry.is_intersecting(), entry.intersection_ratio() as f32);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(js_err)?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

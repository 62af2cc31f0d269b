// What to do with the mounted app on page hide / show.
//
// A page going into the back/forward cache keeps its DOM and wasm memory, so
// it is left mounted; only a real unload tears down. A page shown without a
// mounted app (torn down earlier) is mounted again.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    Keep,
    TearDown,
    Mount,
}

pub fn on_page_hide(persisted: bool) -> PageAction {
    if persisted {
        PageAction::Keep
    } else {
        PageAction::TearDown
    }
}

pub fn on_page_show(mounted: bool) -> PageAction {
    if mounted {
        PageAction::Keep
    } else {
        PageAction::Mount
    }
}

// CSS text for card frames, skill tiles and section reveals.
//
// Writers append into a caller-owned buffer so the frame loop can reuse one
// `String` instead of allocating per layer per frame.
use folio_core::{
    CardFrame, HighlightState, LayerPose, RevealState, TileEntrance, HIGHLIGHT_ALPHA,
    HIGHLIGHT_FALLOFF_PCT, HIGHLIGHT_LIFT_PX, HIGHLIGHT_RADIUS_PX, PERSPECTIVE_PX,
};
use std::fmt::Write;

/// Whole-card rotation, perspective projected.
pub fn write_container_transform(buf: &mut String, frame: &CardFrame) {
    buf.clear();
    let _ = write!(
        buf,
        "perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg)",
        PERSPECTIVE_PX, frame.rotate_x, frame.rotate_y
    );
}

/// Layer placement: depth plus the blended variant offset.
pub fn write_layer_transform(buf: &mut String, pose: &LayerPose) {
    buf.clear();
    let o = &pose.offset;
    let _ = write!(
        buf,
        "translate3d({:.2}px, {:.2}px, {:.2}px) rotate({:.3}deg) scale({:.4}, {:.4})",
        o.translate.x,
        o.translate.y,
        pose.z(),
        o.rotate_deg,
        o.scale_x,
        o.scale_y
    );
}

/// Radial light centred on the smoothed highlight position.
pub fn write_highlight_background(buf: &mut String, highlight: &HighlightState) {
    buf.clear();
    let _ = write!(
        buf,
        "radial-gradient({:.0}px circle at {:.2}% {:.2}%, rgba(255,255,255,{}) 0%, transparent {:.0}%)",
        HIGHLIGHT_RADIUS_PX,
        highlight.x_pct * 100.0,
        highlight.y_pct * 100.0,
        HIGHLIGHT_ALPHA,
        HIGHLIGHT_FALLOFF_PCT
    );
}

/// Static lift of the highlight off the core panel.
pub fn highlight_lift_transform() -> String {
    format!("translateZ({:.0}px)", HIGHLIGHT_LIFT_PX)
}

pub fn write_opacity(buf: &mut String, value: f32) {
    buf.clear();
    let _ = write!(buf, "{:.4}", value.clamp(0.0, 1.0));
}

/// Transition property for a skill tile entering after a tab switch.
pub fn tile_transition(entrance: &TileEntrance, duration_sec: f32) -> String {
    format!(
        "opacity {d:.2}s ease-out {delay:.2}s, transform {d:.2}s ease-out {delay:.2}s",
        d = duration_sec,
        delay = entrance.delay_sec
    )
}

/// Starting transform of a skill tile before it animates in.
pub fn tile_initial_transform(entrance: &TileEntrance) -> String {
    format!("scale({:.2})", entrance.from_scale)
}

/// Vertical offset of a section heading for its reveal pose.
pub fn reveal_transform(state: &RevealState) -> String {
    format!("translateY({:.0}px)", state.offset_y_px)
}

pub fn reveal_transition(duration_sec: f32) -> String {
    format!("opacity {d:.2}s ease-out, transform {d:.2}s ease-out", d = duration_sec)
}

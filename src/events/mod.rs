pub mod pointer;
pub mod visibility;

pub use pointer::{wire_card_pointer, CardPointerWiring};
pub use visibility::VisibilityWatch;

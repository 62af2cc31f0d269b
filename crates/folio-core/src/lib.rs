pub mod card;
pub mod constants;
pub mod content;
pub mod easing;
pub mod layers;
pub mod pointer;
pub mod spring;
pub mod stage;
pub mod tilt;

pub use card::*;
pub use constants::*;
pub use content::*;
pub use easing::*;
pub use layers::*;
pub use pointer::*;
pub use spring::*;
pub use stage::*;
pub use tilt::*;

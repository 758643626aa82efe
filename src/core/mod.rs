pub mod carousel;
pub mod constants;
pub mod lifecycle;
pub mod marquee;
pub mod menu;
pub mod parallax;
pub mod scroll;
pub mod sequencer;
pub mod tween;

pub use carousel::*;
pub use lifecycle::*;
pub use marquee::*;
pub use menu::*;
pub use parallax::*;
pub use scroll::*;
pub use sequencer::*;

pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_hero, wire_nav, wire_orbit};
pub use scroll::{wire_scroll_and_resize, ScrollWiring};

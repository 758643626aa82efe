// Motion tuning constants shared by the sequencer, hero parallax and the
// smaller page widgets.

// Scroll-sequenced words
pub const WORD_STAGGER: f32 = 0.08; // per-word entrance delay, in local progress units
pub const WORD_ENTRY_RATE: f32 = 1.5; // entrance completes after 1/1.5 of local progress
pub const EXIT_START: f32 = 0.7; // local progress where every word starts leaving
pub const EXIT_RATE: f32 = 3.0; // exit saturates ~0.33 after EXIT_START
pub const SLIDE_DISTANCE: f32 = 100.0; // px travelled on entry and on exit
pub const ENTRY_OPACITY_RATE: f32 = 2.0; // words are fully opaque halfway through entry
pub const WORD_TWEEN_SEC: f32 = 0.3; // display smoothing toward the computed word state

// Pinned sequencer region
pub const SCRUB_LAG_SEC: f32 = 0.5; // how long displayed progress trails the scroll position

// Hero parallax
pub const MAX_Y_OFFSET: f32 = 3.5; // accumulated downward travel before snapping back to rest
pub const SMOOTHNESS: f32 = 0.1; // per-frame lerp factor toward the target position
pub const IDLE_AMPLITUDE: f32 = 3.0; // px of idle drift
pub const IDLE_FREQ_X: f32 = 0.5; // rad/s
pub const IDLE_FREQ_Y: f32 = 0.3; // rad/s
pub const FALLBACK_VIEWPORT_EXTENT: f32 = 1.0; // used when the host reports a zero/invalid viewport

// Navbar dropdown
pub const DROPDOWN_CLOSE_DELAY_SEC: f32 = 0.15;
pub const DROPDOWN_ITEM_STAGGER_SEC: f32 = 0.05;

// Orbit carousel
pub const CAROUSEL_AUTO_ADVANCE_SEC: f32 = 5.0;
pub const ORBIT_BREATHING_ROOM_PX: f32 = 150.0;

// Technology marquee
pub const MARQUEE_PERIOD_SEC: f32 = 40.0;
pub const MARQUEE_TRAVEL: f32 = 0.5; // fraction of the (duplicated) track width per cycle

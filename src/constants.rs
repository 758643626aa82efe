// Page wiring: element ids, class names and default content. Content is
// read from the page when present; these defaults cover bare markup.

// Element ids
pub const HERO_ID: &str = "hero";
pub const SEQUENCER_SECTION_ID: &str = "line-stack";
pub const SEQUENCER_WORDS_ID: &str = "words-container";
pub const PAGE_PROGRESS_BAR_ID: &str = "scroll-progress-bar";
pub const PAGE_PROGRESS_LABEL_ID: &str = "scroll-progress-label";
pub const NAV_ID: &str = "nav";
pub const NAV_PANEL_ID: &str = "nav-panel";
pub const ORBIT_ID: &str = "orbit";
pub const ORBIT_PREV_ID: &str = "orbit-prev";
pub const ORBIT_NEXT_ID: &str = "orbit-next";
pub const MARQUEE_TRACK_ID: &str = "marquee-track";

// Window events after which the pinned region and orbit are measured again
pub const LAYOUT_EVENTS: [&str; 2] = ["resize", "load"];

// Selectors and classes
pub const FLOATING_IMAGE_SELECTOR: &str = ".floating-image";
pub const NAV_ITEM_SELECTOR: &str = ".nav-item";
pub const ORBIT_AVATAR_SELECTOR: &str = ".orbit-avatar";
pub const ORBIT_CARD_SELECTOR: &str = ".orbit-card";
pub const ORBIT_DOT_SELECTOR: &str = ".orbit-dot";
pub const WORD_CLASS: &str = "word";
pub const GLASS_CLASS: &str = "glassmorphic";
pub const OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";
pub const PINNED_CLASS: &str = "is-pinned";

// Data attributes
pub const DATA_SENTENCES: &str = "data-sentences";
pub const DATA_DEPTH: &str = "data-depth";
pub const DATA_ID: &str = "data-id";
pub const DATA_SENTENCE_INDEX: &str = "data-sentence-index";

// Default copy for the sequencer
pub const DEFAULT_SENTENCES: [&str; 5] = [
    "IMPROVE YOUR WEBSITE CONVERSION RATE BY 10%",
    "GROW YOUR ONBOARDING BY 80%",
    "INCREASE MARKET SHARE BY REBRANDING",
    "DOUBLE THE NUMBER OF APP USERS IN ONE YEAR",
    "LOWER YOUR COST OF ACQUISITION",
];

// Depth for hero images beyond the default table
pub const DEFAULT_FLOATING_DEPTH: f32 = 50.0;

// (id, depth) for hero images in document order; front layer first
pub const DEFAULT_FLOATING_DEPTHS: [(u32, f32); 7] = [
    (1, 100.0),
    (2, 90.0),
    (3, 85.0),
    (4, 65.0),
    (5, 60.0),
    (6, 55.0),
    (7, 35.0),
];

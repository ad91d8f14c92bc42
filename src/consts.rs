//! Shared constants: default timings, offsets, and storage keys.

// ── Sections ────────────────────────────────────────────────────

/// Page sections in document order, topmost first.
pub const DEFAULT_SECTIONS: [&str; 7] = ["home", "about", "projects", "skills", "hobbies", "experience", "contact"];

/// Height of the fixed header, subtracted from smooth-scroll targets.
pub const HEADER_OFFSET_PX: f64 = 70.0;

/// How far below the scroll position a section top may sit and still count as current.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;

// ── Viewport observer ───────────────────────────────────────────

/// Fraction of a section that must be visible before it animates in.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Root margin for the section observer; shrinks the bottom edge by 50px.
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay between setting `--progress` and the rendered width of a skill bar.
pub const SKILL_BAR_DELAY_MS: u32 = 200;

// ── Decorative effects ──────────────────────────────────────────

/// Text revealed by the typed intro.
pub const INTRO_TEXT: &str = "Hi, I'm Steven";

/// Delay before the first intro character appears.
pub const INTRO_START_DELAY_MS: u32 = 1000;

/// Delay between intro characters.
pub const INTRO_CHAR_INTERVAL_MS: u32 = 100;

/// Hero image offset per pixel scrolled.
pub const PARALLAX_FACTOR: f64 = 0.2;

/// Lifetime of a button ripple.
pub const RIPPLE_LIFETIME_MS: u32 = 1000;

// ── Notifications ───────────────────────────────────────────────

/// How long a notification stays on screen.
pub const NOTIFICATION_LIFETIME_MS: u32 = 5000;

/// Delay before a freshly mounted notification slides in.
pub const NOTIFICATION_ENTER_DELAY_MS: u32 = 100;

/// Slide-out transition length; the element is removed afterwards.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

// ── Persistence / logging ───────────────────────────────────────

/// `localStorage` key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Default console log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Id of the optional inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

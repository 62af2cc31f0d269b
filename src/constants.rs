// Page wiring and presentation constants for the web front-end.
//
// Motion tuning lives in `folio_core::constants`; these only describe how
// the page is laid out and where things are mounted.

// Mount points in index.html
pub const PROJECTS_SECTION_ID: &str = "projects";
pub const PROJECTS_GRID_ID: &str = "projects-grid";
pub const SKILLS_TABS_ID: &str = "skills-tabs";
pub const SKILLS_GRID_ID: &str = "skills-grid";
// Section headings that fade in on scroll
pub const REVEAL_HEADER_IDS: [&str; 2] = ["projects-header", "skills-header"];

// Optional per-page override of the tilt swing, read from the projects section
pub const TILT_RANGE_ATTR: &str = "data-tilt-range";
pub const TILT_RANGE_MIN_DEG: f32 = 0.0;
pub const TILT_RANGE_MAX_DEG: f32 = 90.0;

// Visibility observer; negative margin shrinks the viewport before a card counts as in view
pub const VIEWPORT_ROOT_MARGIN: &str = "-100px";
pub const REVEAL_ROOT_MARGIN: &str = "0px";

// Class names
pub const CARD_CLASS: &str = "project-card";
pub const LAYER_CLASS_PREFIX: &str = "card-layer--";
pub const HIGHLIGHT_CLASS: &str = "card-highlight";
pub const PLACEHOLDER_CLASS: &str = "card-image--placeholder";
pub const TAB_CLASS: &str = "skills-tab";
pub const TAB_ACTIVE_CLASS: &str = "skills-tab--active";
pub const TILE_CLASS: &str = "skill-tile";

// Skill tile fade/scale duration (seconds); delay comes from the stagger
pub const TILE_ENTER_SEC: f32 = 0.3;

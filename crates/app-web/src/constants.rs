// Page anchors expected in the host document
pub const MAIN_CONTENT_ID: &str = "mainContent";
pub const NAV_SLIDER_ID: &str = "sectionSlider";
pub const CORNER_RESIZE_ID: &str = "cornerResize";

// Class names shared with the stylesheet
pub const SECTION_CLASS: &str = "section";
pub const SECTION_CONTROLS_SELECTOR: &str = ".section-controls";
pub const DOT_CLASS: &str = "slider-dot";
pub const DOT_SELECTOR: &str = ".slider-dot";
pub const DRAGGING_CLASS: &str = "dragging";
pub const MINIMIZED_CLASS: &str = "minimized";
pub const FULLSCREEN_CLASS: &str = "is-fullscreen";
pub const HIDDEN_CLASS: &str = "is-hidden";
pub const LAYOUT_SMOOTH_CLASS: &str = "layout-smooth";
pub const LIGHT_ICONS_CLASS: &str = "light-icons";
pub const DARK_ICONS_CLASS: &str = "dark-icons";

// Storage keys
pub const INTERFACE_STATE_KEY: &str = "interfaceState";
pub const SECTION_STATE_KEY: &str = "sectionState";
pub const NAV_POSITION_KEY: &str = "navPosition";
pub const LAST_THEME_COLOR_KEY: &str = "lastThemeColor";

// Timing (must match the stylesheet's transition durations)
pub const FADE_MS: i32 = 300;
pub const LAYOUT_SMOOTH_MS: i32 = 300;

// Stacking order for the section being dragged
pub const DRAG_Z_INDEX: i32 = 1001;

// Interaction tuning constants shared by core logic and the web frontend.

// Snapping
pub const SNAP_THRESHOLD_PX: f32 = 20.0; // viewport-edge and peer-edge capture distance

// Proximity effect
pub const PROXIMITY_RADIUS_PX: f32 = 300.0; // effect falls to zero at this center distance
pub const PROXIMITY_SCALE_SPAN: f32 = 0.05; // full effect enlarges a section by 5%
pub const PROXIMITY_BLUR_MAX_PX: f32 = 5.0; // full effect blur amount
pub const PROXIMITY_Z_SPAN: f32 = 1000.0; // full effect stacking order

// Corner-resize bounds
pub const SIDEBAR_WIDTH_MIN: f32 = 200.0;
pub const SIDEBAR_WIDTH_MAX: f32 = 500.0;
pub const HEADER_HEIGHT_MIN: f32 = 50.0;
pub const HEADER_HEIGHT_MAX: f32 = 200.0;
pub const CONTENT_SCALE_MIN: f32 = 0.8;
pub const CONTENT_SCALE_MAX: f32 = 2.0;
pub const RESIZE_SCALE_DIVISOR: f32 = 1.5; // normalizes the x+y pointer sum into scale range

// Persistence
pub const STATE_MAX_AGE_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0; // blobs older than this are dropped

// Luminance split for choosing contrasting icon color
pub const DARK_LUMINANCE_CUTOFF: f32 = 128.0;

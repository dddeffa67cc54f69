pub mod constants;
pub mod drag;
pub mod fullscreen;
pub mod geometry;
pub mod layout;
pub mod persist;
pub mod registry;
pub mod snap;
pub mod theme;

pub use constants::*;
pub use drag::*;
pub use fullscreen::{restore_snapshot, Snapshot, Transition};
pub use geometry::*;
pub use layout::*;
pub use registry::*;
pub use snap::*;

//! Random forklift segment pairs for GeoGebra import.
//!
//! Each forklift body is a fixed-length segment centered at a random pose
//! (uniform angle, uniform radial distance from the origin) and oriented
//! along that pose's angle. A run draws `count` pairs of bodies and writes
//! them as `Segment[(x1, y1), (x2, y2)]` commands.
//!
//! Layout
//! - `cfg`: named defaults and the generator configuration.
//! - `geom`: `Pose`, `Segment`, `SegmentPair` value types.
//! - `gen`: pose sampling and the seeded pair generator.
//! - `geogebra`: command formatting, file sink, and the reader used to
//!   import a file back.

pub mod cfg;
pub mod geogebra;
pub mod geom;
pub mod gen;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{GenCfg, HALF_LENGTH, MAX_DISTANCE, OUTPUT_FILE, SIMULATIONS};
    pub use crate::geogebra::{
        parse_segment_command, read_segments, segment_command, write_file, write_pairs, SinkError,
    };
    pub use crate::geom::{Point2, Pose, Segment, SegmentPair};
    pub use crate::gen::{generate, generate_pair, sample_pose, GeneratorError, SegmentGenerator};
}

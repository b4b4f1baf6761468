//! Color-wheel picker engine
//!
//! This crate holds everything about an HSV color wheel that does not
//! depend on a window system: the pixel/polar/RGB mapping, the cached
//! wheel raster, the value/alpha track, the single authoritative
//! selection and the state machine that reconciles pointer and keyboard
//! input from the disc, the track and three numeric RGB fields.
//!
//! Front ends implement [`Surface`] for drawing and translate their native
//! events into [`InputEvent`]s; [`Picker`] ties the two together.

pub mod color;
pub mod compositor;
pub mod error;
pub mod event;
pub mod field;
pub mod geometry;
pub mod layout;
pub mod picker;
pub mod raster;
pub mod reconciler;
pub mod selection;
pub mod surface;
pub mod track;

pub use color::{
    pixel_to_polar, pixel_to_polar_clamped, polar_to_pixel, polar_to_rgb, rgb_to_hsv, Channel,
    Color, Hsv, HsvSample, Polar,
};
pub use compositor::{BakeMode, FrameCompositor};
pub use error::EngineError;
pub use event::{InputEvent, Key, PointerButton};
pub use field::{FieldInputError, NumericField};
pub use geometry::{DiscGeometry, Orientation, Point, Rect, TrackGeometry};
pub use layout::{Layout, LayoutSpec};
pub use picker::Picker;
pub use raster::{WheelCache, WheelImage, WheelKey};
pub use reconciler::{ControlFocus, EventOutcome, InputReconciler, InteractionState};
pub use selection::SelectionState;
pub use surface::{RgbaSurface, Surface, TextRun};
pub use track::{TrackMode, ValueTrack};

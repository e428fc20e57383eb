//=========================================================================
// Sketch Utils - Library Root
//
// Small stateless helpers shared across a creative-coding application.
//
// Responsibilities:
// - Scalar math (`square`, `clamp`, `between`)
// - Rectangle bounds (`Rect`, `union`)
// - Callback adapters and single-method contracts
// - Fullscreen toggling over Winit windows
//
// Typical usage:
// ```
// use sketch_utils::prelude::*;
//
// let bounds = union(
//     &Rect::from_origin_size(0.0, 0.0, 2.0, 2.0),
//     &Rect::from_origin_size(1.0, 1.0, 2.0, 2.0),
// );
// assert_eq!(bounds.width(), 3.0);
// assert_eq!(clamp(square(4), 0, 10), 10);
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the platform-independent helpers (numeric, geometry,
// callbacks, contracts).
//
pub mod core;

// `platform` wraps OS windowing calls (Winit) without owning any window.
//
pub mod platform;

// `prelude` re-exports everything an application normally needs.
//
pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use crate::core::UtilError;

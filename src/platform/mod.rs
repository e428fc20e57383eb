//=========================================================================
// Platform Helpers
//=========================================================================
//
// Thin helpers over OS windowing (Winit).
//
// This module never owns a window or runs an event loop. It only calls
// into handles the application already has, on whatever thread the
// application calls from.
//
//=========================================================================

//=== Submodules ==========================================================

mod window;

//=== Public API ==========================================================

pub use window::{toggle_fullscreen, FullscreenWindow};

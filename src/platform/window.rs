//=========================================================================
// Window Helpers
//=========================================================================
//
// Fullscreen toggling over any window that exposes a fullscreen flag.
//
// Architecture:
//   toggle_fullscreen(&W)
//     ├─ W::is_fullscreen()        read current flag
//     └─ W::set_fullscreen(!flag)  request opposite, report result
//
// The reported state comes from `set_fullscreen`, not from a re-read.
// Failures are the window's own `Error` type, returned unchanged.
//
// Threading: call from whichever thread the windowing system requires
// (the main thread for winit on macOS/iOS). This is not checked here.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::convert::Infallible;
use std::sync::Arc;

use log::debug;
use winit::window::{Fullscreen, Window};

//=== FullscreenWindow ====================================================

/// A window whose fullscreen flag can be read and requested.
pub trait FullscreenWindow {
    /// Failure raised by the underlying windowing call.
    type Error;

    /// Returns the window's current fullscreen flag.
    fn is_fullscreen(&self) -> bool;

    /// Requests the given fullscreen state and returns the resulting state
    /// as reported by the windowing system.
    fn set_fullscreen(&self, fullscreen: bool) -> Result<bool, Self::Error>;
}

//=== toggle_fullscreen ===================================================

/// Flips the window's fullscreen flag and returns the new state.
///
/// # Errors
///
/// Propagates `W::Error` from [`FullscreenWindow::set_fullscreen`]
/// unmodified. No retry is attempted.
///
/// ```
/// use std::cell::Cell;
/// use std::convert::Infallible;
/// use sketch_utils::prelude::*;
///
/// struct Canvas(Cell<bool>);
///
/// impl FullscreenWindow for Canvas {
///     type Error = Infallible;
///     fn is_fullscreen(&self) -> bool { self.0.get() }
///     fn set_fullscreen(&self, on: bool) -> Result<bool, Infallible> {
///         self.0.set(on);
///         Ok(on)
///     }
/// }
///
/// let canvas = Canvas(Cell::new(false));
/// assert_eq!(toggle_fullscreen(&canvas), Ok(true));
/// assert_eq!(toggle_fullscreen(&canvas), Ok(false));
/// ```
pub fn toggle_fullscreen<W>(window: &W) -> Result<bool, W::Error>
where
    W: FullscreenWindow + ?Sized,
{
    let requested = !window.is_fullscreen();
    debug!(target: "platform::window", "Requesting fullscreen: {}", requested);
    window.set_fullscreen(requested)
}

//=== Winit Integration ===================================================

/// Borderless fullscreen on the window's current monitor.
///
/// Winit applies the request without reporting failure, so the requested
/// state is reported back as the result.
impl FullscreenWindow for Window {
    type Error = Infallible;

    fn is_fullscreen(&self) -> bool {
        self.fullscreen().is_some()
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Result<bool, Self::Error> {
        let mode = if fullscreen {
            Some(Fullscreen::Borderless(self.current_monitor()))
        } else {
            None
        };

        Window::set_fullscreen(self, mode);
        Ok(fullscreen)
    }
}

//--- Forwarding Implementations ------------------------------------------

impl<W: FullscreenWindow + ?Sized> FullscreenWindow for &W {
    type Error = W::Error;

    fn is_fullscreen(&self) -> bool {
        (**self).is_fullscreen()
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Result<bool, Self::Error> {
        (**self).set_fullscreen(fullscreen)
    }
}

impl<W: FullscreenWindow + ?Sized> FullscreenWindow for Arc<W> {
    type Error = W::Error;

    fn is_fullscreen(&self) -> bool {
        (**self).is_fullscreen()
    }

    fn set_fullscreen(&self, fullscreen: bool) -> Result<bool, Self::Error> {
        (**self).set_fullscreen(fullscreen)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Fullscreen Demo
//=========================================================================
//
// Opens a Winit window and toggles fullscreen with F11.
//
// Run with:
//   cargo run --example fullscreen
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use sketch_utils::prelude::*;

//=== DemoApp =============================================================

/// Window created lazily in `resumed()`, as Winit requires.
#[derive(Default)]
struct DemoApp {
    window: Option<Window>,
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Fullscreen Demo (F11 to toggle)")
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(target: "demo", "Window created");
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "demo", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event: key_event, .. }
                if key_event.state == ElementState::Pressed
                    && !key_event.repeat
                    && key_event.physical_key == PhysicalKey::Code(KeyCode::F11) =>
            {
                if let Some(window) = &self.window {
                    match toggle_fullscreen(window) {
                        Ok(fullscreen) => info!(target: "demo", "Fullscreen: {}", fullscreen),
                        Err(never) => match never {},
                    }
                }
            }

            _ => {}
        }
    }
}

//=== Entry Point =========================================================

fn main() -> Result<(), winit::error::EventLoopError> {
    let event_loop = EventLoop::new()?;
    let mut app = DemoApp::default();
    event_loop.run_app(&mut app)
}

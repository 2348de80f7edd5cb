//! Standalone game window backed by winit.
//!
//! The window itself draws nothing; it hosts the [`PongEngine`] frame loop
//! and, while the debug overlay is visible, reports frame state in the
//! window title.
//!
//! ```no_run
//! # use pong3d::Viewer;
//! Viewer::builder()
//!     .with_title("Pong")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::ModifiersState,
    window::{Window, WindowId},
};

use crate::{
    camera::ViewState,
    error::PongError,
    options::Options,
    surface::{DebugOverlay, FrameSnapshot, RenderSurface},
    util::frame_timing::FrameTiming,
    KeyInput, PongEngine,
};

// ── Window surface ───────────────────────────────────────────────────────

/// Render surface over a winit window. The debug overlay is the window
/// title.
pub struct WindowSurface {
    window: Arc<Window>,
    title: String,
    overlay_visible: bool,
    fps: f32,
    size: (u32, u32),
    menu_content: String,
    /// Last title written, to avoid redundant platform calls.
    shown_title: String,
}

impl WindowSurface {
    fn new(window: Arc<Window>, title: String) -> Self {
        let inner = window.inner_size();
        Self {
            window,
            shown_title: title.clone(),
            title,
            overlay_visible: false,
            fps: 0.0,
            size: (inner.width, inner.height),
            menu_content: String::new(),
        }
    }

    /// Smoothed frame rate shown in the overlay.
    pub fn set_fps(&mut self, fps: f32) {
        self.fps = fps;
    }

    fn set_title(&mut self, title: String) {
        if title != self.shown_title {
            self.window.set_title(&title);
            self.shown_title = title;
        }
    }
}

impl DebugOverlay for WindowSurface {
    fn show(&mut self) {
        self.overlay_visible = true;
    }

    fn hide(&mut self) {
        self.overlay_visible = false;
        self.set_title(self.title.clone());
    }

    fn is_visible(&self) -> bool {
        self.overlay_visible
    }
}

impl RenderSurface for WindowSurface {
    fn render(&mut self, frame: &FrameSnapshot) {
        if self.overlay_visible {
            let title = overlay_title(
                &self.title,
                frame,
                self.size,
                self.fps,
                self.menu_content.len(),
            );
            self.set_title(title);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn set_menu_content(&mut self, content: &str) {
        log::debug!("menu content: {} bytes", content.len());
        content.clone_into(&mut self.menu_content);
    }
}

/// Debug overlay line. The menu payload size is shown only while the menu
/// view is up.
fn overlay_title(
    base: &str,
    frame: &FrameSnapshot,
    size: (u32, u32),
    fps: f32,
    menu_bytes: usize,
) -> String {
    let transition = frame.transition_progress.map_or_else(
        || "at rest".to_owned(),
        |t| format!("{:.0}%", t * 100.0),
    );
    let mut title = format!(
        "{base} | {:?} ({transition}) | L {:+.2} R {:+.2} | {}x{} | {fps:.0} fps",
        frame.view, frame.left_paddle.y, frame.right_paddle.y, size.0, size.1,
    );
    if frame.view == ViewState::Menu {
        title = format!("{title} | menu {menu_bytes} B");
    }
    title
}

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Pong 3D", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Pong 3D".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window running the game.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`PongError::Viewer`] if the event loop cannot be created
    /// or exits abnormally.
    pub fn run(self) -> Result<(), PongError> {
        let event_loop =
            EventLoop::new().map_err(|e| PongError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            frame_timing: FrameTiming::new(),
            modifiers: ModifiersState::empty(),
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PongError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<PongEngine<WindowSurface>>,
    frame_timing: FrameTiming,
    modifiers: ModifiersState,
    options: Option<Options>,
    title: String,
}

impl ViewerApp {
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(engine) = self.engine.take() {
            let _ = engine.dispose();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let surface = WindowSurface::new(window.clone(), self.title.clone());
        let options = self.options.take().unwrap_or_default();
        let mut engine = PongEngine::init(options, surface);
        engine.resize(inner.width, inner.height);

        self.frame_timing = FrameTiming::new();
        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            self.shutdown(event_loop);
            return;
        }

        let Some(engine) = &mut self.engine else {
            return;
        };

        match event {
            WindowEvent::Resized(size) => {
                engine.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                let dt = self.frame_timing.tick();
                engine.surface_mut().set_fps(self.frame_timing.fps());
                engine.update(dt);
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let input = KeyInput::from_winit(&event, self.modifiers);
                let effect = engine.handle_key(&input);
                if effect.suppresses_default() {
                    log::trace!("suppressing default action for {}", input.code);
                }
            }

            _ => (),
        }
    }
}

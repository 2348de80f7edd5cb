use super::{DebugOverlay, FrameSnapshot, RenderSurface};

/// A surface that draws nothing and remembers what it was asked to draw.
///
/// Only the latest frame is kept, plus a running count, so memory stays
/// flat however long the engine runs.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    last_frame: Option<FrameSnapshot>,
    frame_count: u64,
    size: (u32, u32),
    menu_content: String,
    overlay_visible: bool,
}

impl HeadlessSurface {
    /// Empty surface with a hidden overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The most recently rendered frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameSnapshot> {
        self.last_frame.as_ref()
    }

    /// Last size passed to [`RenderSurface::resize`].
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Menu markup passed at init.
    #[must_use]
    pub fn menu_content(&self) -> &str {
        &self.menu_content
    }
}

impl DebugOverlay for HeadlessSurface {
    fn show(&mut self) {
        self.overlay_visible = true;
    }

    fn hide(&mut self) {
        self.overlay_visible = false;
    }

    fn is_visible(&self) -> bool {
        self.overlay_visible
    }
}

impl RenderSurface for HeadlessSurface {
    fn render(&mut self, frame: &FrameSnapshot) {
        self.last_frame = Some(*frame);
        self.frame_count += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn set_menu_content(&mut self, content: &str) {
        content.clone_into(&mut self.menu_content);
    }
}

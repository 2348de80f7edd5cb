//! Options methods for [`PongEngine`].

use std::path::Path;

use super::PongEngine;
use crate::error::PongError;
use crate::input::InputRouter;
use crate::options::Options;
use crate::surface::RenderSurface;

impl<S: RenderSurface> PongEngine<S> {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and apply all changes to subsystems.
    ///
    /// Key routing is recompiled, paddles are re-clamped to the new limit,
    /// and the camera projection updates. View targets and timing apply
    /// from the next transition; the current view and any transition in
    /// flight are left alone. Menu content and overlay visibility are
    /// init-time settings and are not reapplied.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.apply_options();
    }

    fn apply_options(&mut self) {
        self.router = InputRouter::new(&self.options.keybindings);
        self.scene.reclamp(&self.options.paddle);
        self.camera.apply_options(&self.options.camera);
        self.view.apply_options(&self.options.view);
        log::debug!("options applied");
    }

    /// Load a named preset from `presets_dir` and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`PongError`] if the preset cannot be read or parsed; the
    /// current options stay in effect.
    pub fn load_preset(
        &mut self,
        name: &str,
        presets_dir: &Path,
    ) -> Result<(), PongError> {
        let path = presets_dir.join(format!("{name}.toml"));
        let options = Options::load(&path)?;
        log::info!("loaded preset '{name}'");
        self.set_options(options);
        Ok(())
    }

    /// Save the current options as a named preset in `presets_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`PongError`] if the preset cannot be serialized or written.
    pub fn save_preset(
        &self,
        name: &str,
        presets_dir: &Path,
    ) -> Result<(), PongError> {
        let path = presets_dir.join(format!("{name}.toml"));
        self.options.save(&path)?;
        log::info!("saved preset '{name}'");
        Ok(())
    }
}

//! The application context tying input, scene, camera and surface together.

mod accessors;
mod input;
mod options;

use std::collections::VecDeque;

use crate::animation::AnimationPlayer;
use crate::camera::{Camera, ViewController};
use crate::input::{Effect, InputRouter};
use crate::menu::load_menu_content;
use crate::options::Options;
use crate::scene::{PaddleSide, Scene};
use crate::surface::{FrameSnapshot, RenderSurface};

/// The application context: paddles, camera, view machine and the render
/// surface they are drawn on.
///
/// # Lifecycle
///
/// Create with [`PongEngine::init`], drive with
/// [`handle_key`](Self::handle_key) and [`update`](Self::update), tear
/// down with [`dispose`](Self::dispose) to get the surface back.
///
/// # Frame loop
///
/// Key events are routed immediately but their effects are queued. Each
/// [`update`](Self::update) applies the queue in arrival order, advances
/// the view transition, then renders exactly one frame, so a frame never
/// shows a half-applied effect.
///
/// ```
/// # use pong3d::{KeyInput, Options, PongEngine, HeadlessSurface};
/// let mut engine = PongEngine::init(Options::default(), HeadlessSurface::new());
/// let _ = engine.handle_key(&KeyInput::new("ArrowUp", "ArrowUp"));
/// engine.update(1.0 / 60.0);
/// let surface = engine.dispose();
/// assert_eq!(surface.frame_count(), 1);
/// ```
#[derive(Debug)]
pub struct PongEngine<S: RenderSurface> {
    /// Options the subsystems were configured from.
    options: Options,
    /// Compiled key bindings.
    router: InputRouter,
    /// Paddle state.
    scene: Scene,
    /// Live camera; its orientation is what transitions animate.
    camera: Camera,
    /// Orientation clip player.
    animator: AnimationPlayer,
    /// Gameplay/menu state machine.
    view: ViewController,
    /// Effects waiting for the next update.
    pending: VecDeque<Effect>,
    /// Render target and overlay owner.
    surface: S,
    /// Menu markup handed to the surface at init.
    menu_content: String,
}

impl<S: RenderSurface> PongEngine<S> {
    /// Build the context and attach it to `surface`.
    ///
    /// Loads the menu content (failures degrade to an empty menu), applies
    /// the initial overlay visibility, and either animates the camera from
    /// the identity orientation to the initial view or places it there
    /// directly, per `view.animate_on_start`.
    pub fn init(options: Options, mut surface: S) -> Self {
        let menu_content = load_menu_content(&options.menu);
        surface.set_menu_content(&menu_content);
        if options.debug.overlay_visible {
            surface.show();
        } else {
            surface.hide();
        }

        let mut camera = Camera::from_options(&options.camera);
        let mut animator = AnimationPlayer::new();
        let view = ViewController::from_options(&options.view);
        if options.view.animate_on_start {
            view.animate_to_current(&camera, &mut animator);
        } else {
            view.snap_to_current(&mut camera, &mut animator);
        }

        let mut scene = Scene::new();
        scene.reclamp(&options.paddle);

        log::info!(
            "engine initialized in {:?} view (overlay {})",
            view.state(),
            if surface.is_visible() { "visible" } else { "hidden" }
        );

        Self {
            router: InputRouter::new(&options.keybindings),
            scene,
            camera,
            animator,
            view,
            pending: VecDeque::new(),
            surface,
            menu_content,
            options,
        }
    }

    /// Tear the context down and hand back the surface. Queued effects
    /// that were never applied are dropped.
    pub fn dispose(self) -> S {
        if !self.pending.is_empty() {
            log::debug!("dropping {} unapplied effects", self.pending.len());
        }
        log::info!("engine disposed");
        self.surface
    }

    /// Per-frame callback: apply queued effects, advance the view
    /// transition by `dt` seconds, render one frame.
    pub fn update(&mut self, dt: f32) {
        while let Some(effect) = self.pending.pop_front() {
            self.execute(effect);
        }
        let _ = self.animator.tick(dt, &mut self.camera.orientation);
        let frame = self.snapshot();
        self.surface.render(&frame);
    }

    /// Resize callback from the collaborator.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.surface.resize(width, height);
    }

    /// The frame [`update`](Self::update) would render right now.
    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        let tuning = &self.options.paddle;
        FrameSnapshot {
            view: self.view.state(),
            camera_orientation: self.camera.orientation,
            view_proj: self.camera.build_matrix(),
            left_paddle: self.scene.paddle(PaddleSide::Left).position(tuning),
            right_paddle: self.scene.paddle(PaddleSide::Right).position(tuning),
            overlay_visible: self.surface.is_visible(),
            transition_progress: self.animator.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;
    use crate::camera::ViewState;
    use crate::input::{KeyInput, Modifiers};
    use crate::options::ViewOptions;
    use crate::scene::PaddleActor;
    use crate::surface::{DebugOverlay, HeadlessSurface};

    const FRAME: f32 = 1.0 / 60.0;

    fn engine_in(initial: ViewState) -> PongEngine<HeadlessSurface> {
        let options = Options {
            view: ViewOptions {
                initial,
                animate_on_start: false,
                ..ViewOptions::default()
            },
            ..Options::default()
        };
        PongEngine::init(options, HeadlessSurface::new())
    }

    fn press(engine: &mut PongEngine<HeadlessSurface>, key: &str, code: &str) {
        let _ = engine.handle_key(&KeyInput::new(key, code));
    }

    fn settle(engine: &mut PongEngine<HeadlessSurface>) {
        for _ in 0..240 {
            engine.update(FRAME);
            if engine.is_at_target() {
                break;
            }
        }
        assert!(engine.is_at_target(), "transition did not finish");
    }

    #[test]
    fn init_animates_from_identity_to_menu() {
        let mut engine = PongEngine::init(Options::default(), HeadlessSurface::new());
        assert_eq!(engine.view_state(), ViewState::Menu);
        assert_eq!(engine.camera().orientation, Quat::IDENTITY);
        assert!(!engine.is_at_target());

        settle(&mut engine);
        assert_eq!(engine.camera().orientation, engine.view().target());
    }

    #[test]
    fn init_without_animation_starts_on_target() {
        let engine = engine_in(ViewState::Gameplay);
        assert!(engine.is_at_target());
        assert_eq!(engine.camera().orientation, engine.view().targets().gameplay);
    }

    #[test]
    fn effects_apply_on_update() {
        let mut engine = engine_in(ViewState::Gameplay);
        press(&mut engine, "ArrowUp", "ArrowUp");
        assert_eq!(engine.pending_effects(), 1);
        assert_eq!(engine.scene().paddle(PaddleSide::Left).offset(), 0.0);

        engine.update(FRAME);
        assert_eq!(engine.pending_effects(), 0);
        assert!((engine.scene().paddle(PaddleSide::Left).offset() - 0.07).abs() < 1e-6);
        let frame = engine.surface().last_frame().copied().unwrap();
        assert!(frame.left_paddle.y > 0.0);
    }

    #[test]
    fn paddles_stay_within_limit() {
        let mut engine = engine_in(ViewState::Gameplay);
        for _ in 0..30 {
            press(&mut engine, "w", "KeyW");
            press(&mut engine, "ArrowDown", "ArrowDown");
        }
        engine.update(FRAME);
        assert_eq!(engine.scene().paddle(PaddleSide::Right).offset(), 0.66);
        assert_eq!(engine.scene().paddle(PaddleSide::Left).offset(), -0.66);
    }

    #[test]
    fn left_paddle_clamps_from_0_60() {
        let mut engine = engine_in(ViewState::Gameplay);
        let tuning = engine.options().paddle.clone();
        engine
            .scene_mut()
            .set_paddle(PaddleActor::at(PaddleSide::Left, 0.60, &tuning));
        press(&mut engine, "ArrowUp", "ArrowUp");
        engine.update(FRAME);
        assert_eq!(engine.scene().paddle(PaddleSide::Left).offset(), 0.66);
    }

    #[test]
    fn space_from_menu_lands_on_gameplay() {
        let mut engine = engine_in(ViewState::Menu);
        let effect = engine.handle_key(&KeyInput::new(" ", "Space"));
        assert!(effect.suppresses_default());

        engine.update(FRAME);
        assert_eq!(engine.view_state(), ViewState::Gameplay);
        assert!(!engine.is_at_target());

        settle(&mut engine);
        assert_eq!(engine.camera().orientation, engine.view().targets().gameplay);
        assert_eq!(engine.surface().last_frame().unwrap().transition_progress, None);
    }

    #[test]
    fn two_toggles_in_one_frame_return_to_start() {
        let mut engine = engine_in(ViewState::Gameplay);
        press(&mut engine, " ", "Space");
        press(&mut engine, " ", "Space");
        settle(&mut engine);
        assert_eq!(engine.view_state(), ViewState::Gameplay);
        assert_eq!(engine.camera().orientation, engine.view().targets().gameplay);
    }

    #[test]
    fn interrupted_toggle_converges_to_second_target() {
        let mut engine = engine_in(ViewState::Gameplay);
        press(&mut engine, " ", "Space");
        for _ in 0..20 {
            engine.update(FRAME);
        }
        assert!(!engine.is_at_target());
        press(&mut engine, " ", "Space");
        settle(&mut engine);
        assert_eq!(engine.view_state(), ViewState::Gameplay);
        assert_eq!(engine.camera().orientation, engine.view().targets().gameplay);
    }

    #[test]
    fn debug_chord_toggles_overlay() {
        let mut engine = engine_in(ViewState::Menu);
        let chord =
            KeyInput::new("I", "KeyI").with_modifiers(Modifiers::SHIFT_CTRL_ALT);
        assert!(!engine.surface().is_visible());

        let _ = engine.handle_key(&chord);
        engine.update(FRAME);
        assert!(engine.surface().is_visible());
        assert!(engine.surface().last_frame().unwrap().overlay_visible);

        let _ = engine.handle_key(&chord);
        engine.update(FRAME);
        assert!(!engine.surface().is_visible());
    }

    #[test]
    fn unbound_key_changes_nothing() {
        let mut engine = engine_in(ViewState::Menu);
        engine.update(FRAME);
        let before = engine.snapshot();

        let effect = engine.handle_key(&KeyInput::new("q", "KeyQ"));
        assert_eq!(effect, Effect::NoOp);
        assert_eq!(engine.pending_effects(), 0);
        engine.update(FRAME);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn overlay_initial_visibility_from_options() {
        let mut options = Options::default();
        options.debug.overlay_visible = true;
        let engine = PongEngine::init(options, HeadlessSurface::new());
        assert!(engine.surface().is_visible());
    }

    #[test]
    fn resize_reaches_camera_and_surface() {
        let mut engine = engine_in(ViewState::Menu);
        engine.resize(1000, 500);
        assert_eq!(engine.camera().aspect, 2.0);
        assert_eq!(engine.dispose().size(), (1000, 500));
    }
}

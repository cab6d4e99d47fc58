//! One play-through of a maze.
//!
//! A [`Session`] starts both resource loads, polls them each frame, and
//! assembles the world exactly once, on the first frame both are ready. From
//! then on each [`update`](Session::update) runs one simulation step and
//! returns the frame to draw. Input handlers mutate state immediately.

use std::time::{Duration, Instant};

use glam::Vec2;
use raiser_camera::{PointerController, ViewKind, ViewportRouter};
use raiser_config::Config;
use raiser_input::{Action, InputMap, KeyState, KeyboardState, PointerState, RawKeyEvent};
use raiser_math::{Orientation, ViewportContext};
use raiser_maze::{CollisionDetector, LoadError, LoadStatus, MazeDescription, MazeGrid, ResourceLoad};
use raiser_player::{
    AnimationController, AnimationState, PlayerModel, PlayerState, SHORT_FADE, locomotion_step,
};
use tracing::{debug, error, info, warn};
use winit::event::{ElementState, MouseButton};

use crate::error::{ControlError, SessionError};
use crate::fog::FogState;
use crate::frame::{Frame, PlayerPose, RenderView};
use crate::help::HelpTable;
use crate::panel::{self, ControlInput, Overlays, PanelState};

/// Zoom the third-person camera uses once the exit is reached.
const FINAL_ZOOM: f32 = 2.0;
/// Horizontal orientation of the third-person camera once the exit is reached.
const FINAL_ORIENTATION_H: f32 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionStatus {
    Loading { maze: f32, model: f32 },
    Running,
    /// The exit was found; the walker dances from here on.
    Finished,
    /// A resource failed to load or the world could not be built.
    Failed,
}

/// Everything that exists only after both resources are loaded.
struct World {
    grid: MazeGrid,
    player: PlayerState,
    animations: AnimationController,
}

pub struct Session {
    config: Config,
    maze_load: ResourceLoad<MazeDescription>,
    model_load: ResourceLoad<PlayerModel>,
    world: Option<World>,
    failed: bool,
    exit_found: bool,
    router: ViewportRouter,
    pointer: PointerController,
    pointer_state: PointerState,
    input_map: InputMap,
    keyboard: KeyboardState,
    key_state: KeyState,
    fog: FogState,
    overlays: Overlays,
}

impl Session {
    /// Start loading the configured maze and player model.
    pub fn new(config: Config) -> Result<Self, SessionError> {
        let maze_load = ResourceLoad::spawn(config.maze.url.clone(), |bytes| {
            Ok(MazeDescription::from_json(bytes)?)
        })?;
        let model_load = ResourceLoad::spawn(config.player.url.clone(), |bytes| {
            PlayerModel::from_json(bytes).map_err(|err| LoadError::Resource(Box::new(err)))
        })?;

        let ctx = ViewportContext::new(config.window.width as f32, config.window.height as f32);
        let input_map = InputMap::from_config(&config.player.key_codes);
        for conflict in input_map.detect_conflicts() {
            warn!(
                "Key {:?} is bound to several actions: {:?}",
                conflict.key, conflict.actions
            );
        }

        Ok(Self {
            maze_load,
            model_load,
            world: None,
            failed: false,
            exit_found: false,
            router: ViewportRouter::new(&config.cameras, ctx),
            pointer: PointerController::new(),
            pointer_state: PointerState::new(),
            input_map,
            keyboard: KeyboardState::new(),
            key_state: KeyState::default(),
            fog: FogState::from(&config.fog),
            overlays: Overlays {
                statistics: config.debug.show_statistics,
                ..Overlays::default()
            },
            config,
        })
    }

    // ── Queries ─────────────────────────────────────────────────────

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.failed {
            SessionStatus::Failed
        } else if self.exit_found {
            SessionStatus::Finished
        } else if self.world.is_some() {
            SessionStatus::Running
        } else {
            let fraction = |status: LoadStatus| match status {
                LoadStatus::Pending { fraction } => fraction,
                LoadStatus::Loaded => 1.0,
                LoadStatus::Failed => 0.0,
            };
            SessionStatus::Loading {
                maze: fraction(self.maze_load.status()),
                model: fraction(self.model_load.status()),
            }
        }
    }

    /// Whether the world has been assembled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.world.is_some()
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn router(&self) -> &ViewportRouter {
        &self.router
    }

    #[must_use]
    pub fn fog(&self) -> FogState {
        self.fog
    }

    #[must_use]
    pub fn overlays(&self) -> Overlays {
        self.overlays
    }

    #[must_use]
    pub fn key_state(&self) -> KeyState {
        self.key_state
    }

    #[must_use]
    pub fn grid(&self) -> Option<&MazeGrid> {
        self.world.as_ref().map(|world| &world.grid)
    }

    #[must_use]
    pub fn player(&self) -> Option<&PlayerState> {
        self.world.as_ref().map(|world| &world.player)
    }

    #[must_use]
    pub fn animation(&self) -> Option<AnimationState> {
        self.world.as_ref().map(|world| world.animations.active())
    }

    #[must_use]
    pub fn panel(&self) -> PanelState {
        PanelState::new(
            self.router.active_camera(),
            self.router.multiple_views(),
            self.overlays,
        )
    }

    #[must_use]
    pub fn help_table(&self) -> HelpTable {
        HelpTable::new(
            &self.input_map,
            &self.config.maze.credits,
            &self.config.player.credits,
        )
    }

    // ── Frame ───────────────────────────────────────────────────────

    /// Block until both loads finish or `timeout` elapses, then assemble the
    /// world if possible. Returns whether the session is running.
    pub fn wait_for_resources(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        self.maze_load.wait(timeout);
        self.model_load
            .wait(deadline.saturating_duration_since(Instant::now()));
        self.poll_resources();
        self.is_running()
    }

    /// Run one step of `dt` seconds. Returns `None` while still loading.
    pub fn update(&mut self, dt: f32) -> Option<Frame> {
        if self.world.is_none() {
            self.poll_resources();
        }
        let world = self.world.as_mut()?;

        world.animations.update(dt);
        if !world.animations.action_in_progress() {
            if world.grid.found_exit(world.player.position) {
                self.exit_found = true;
                final_sequence(&mut self.router, &mut self.fog, &mut world.animations);
            } else {
                world.player.key_state = self.key_state;
                let probe = CollisionDetector::new(&world.grid);
                let transition =
                    locomotion_step(&mut world.player, world.animations.active(), &probe, dt);
                world
                    .animations
                    .fade_to_action(transition.state, transition.fade);
            }
        }

        self.router
            .follow_player(world.player.eye_position(), world.player.direction);
        let world = self.world.as_ref()?;
        Some(self.frame(world))
    }

    fn frame(&self, world: &World) -> Frame {
        let ctx = self.router.context();
        let views = self
            .router
            .render_order()
            .into_iter()
            .map(|kind| RenderView::from_camera(self.router.camera(kind), &ctx, &self.fog))
            .collect();
        Frame {
            views,
            fog: self.fog,
            player: PlayerPose {
                position: world.player.position,
                rotation: world.player.render_rotation(),
                animation: world.animations.active(),
                weight: world.animations.active_weight(),
            },
            show_help: self.overlays.help,
            show_statistics: self.overlays.statistics,
        }
    }

    fn poll_resources(&mut self) {
        if self.failed {
            return;
        }
        let maze = self.maze_load.poll();
        let model = self.model_load.poll();
        if maze == LoadStatus::Failed || model == LoadStatus::Failed {
            error!("Resource loading failed; session will not start");
            self.failed = true;
            return;
        }
        if maze != LoadStatus::Loaded || model != LoadStatus::Loaded {
            return;
        }
        let (Some(description), Some(model)) = (self.maze_load.take(), self.model_load.take())
        else {
            return;
        };
        match MazeGrid::new(&description, self.config.maze.scale) {
            Ok(grid) => {
                let mut player = PlayerState::new(&self.config.player, &model);
                player.place(grid.initial_position(), grid.initial_direction());
                info!(
                    "Maze {}x{} assembled; player at {} facing {}",
                    grid.width(),
                    grid.height(),
                    player.position,
                    player.direction
                );
                let animations = AnimationController::new(&model.animations);
                self.world = Some(World {
                    grid,
                    player,
                    animations,
                });
            }
            Err(err) => {
                error!("Failed to build maze: {err}");
                self.failed = true;
            }
        }
    }

    // ── Keyboard ────────────────────────────────────────────────────

    /// Route a key event. View selection and toggles fire on the press edge;
    /// locomotion and emote keys track held state.
    pub fn key_event(&mut self, event: RawKeyEvent) {
        let changed = self.keyboard.process_raw(event);
        let Some(action) = self.input_map.action_for(event.key) else {
            return;
        };
        let pressed = event.is_pressed();
        if pressed && changed {
            match action {
                Action::FixedView => self.select_view(ViewKind::Fixed),
                Action::FirstPersonView => self.select_view(ViewKind::FirstPerson),
                Action::ThirdPersonView => self.select_view(ViewKind::ThirdPerson),
                Action::TopView => self.select_view(ViewKind::Top),
                Action::ViewMode => self.router.toggle_view_mode(),
                Action::UserInterface => {
                    self.overlays.user_interface = !self.overlays.user_interface;
                }
                Action::MiniMap => self.router.toggle_mini_map(),
                Action::Help => self.overlays.help = !self.overlays.help,
                Action::Statistics => self.overlays.statistics = !self.overlays.statistics,
                _ => {}
            }
        }
        self.key_state.set(action, pressed);
    }

    /// Press or release `action`'s bound key.
    pub fn set_action(&mut self, action: Action, pressed: bool) {
        if let Some(key) = self.input_map.key_for(action) {
            let event = if pressed {
                RawKeyEvent::pressed(key)
            } else {
                RawKeyEvent::released(key)
            };
            self.key_event(event);
        }
    }

    fn select_view(&mut self, kind: ViewKind) {
        self.router.set_active(kind);
    }

    // ── Pointer ─────────────────────────────────────────────────────

    /// Cursor moved to `client` (origin top-left).
    pub fn cursor_moved(&mut self, client: Vec2) {
        let ctx = self.router.context();
        self.pointer_state.on_cursor_moved(client, &ctx);
        self.pointer.pointer_move(
            &mut self.router,
            self.pointer_state.position(),
            self.pointer_state.buttons(),
        );
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState, client: Vec2) {
        let ctx = self.router.context();
        self.pointer_state.on_button(button, state, client, &ctx);
        match state {
            ElementState::Pressed => {
                self.pointer.pointer_down(
                    &mut self.router,
                    self.pointer_state.position(),
                    self.pointer_state.buttons(),
                );
            }
            ElementState::Released => self.pointer.pointer_up(),
        }
    }

    /// Wheel step over `client`; positive `delta_y` scrolls down.
    pub fn mouse_wheel(&mut self, delta_y: f32, client: Vec2) {
        let ctx = self.router.context();
        self.pointer_state.on_cursor_moved(client, &ctx);
        self.pointer
            .wheel(&mut self.router, self.pointer_state.position(), delta_y);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        debug!("Window resized to {width}x{height}");
        self.router
            .resize(ViewportContext::new(width as f32, height as f32));
    }

    // ── Control panel ───────────────────────────────────────────────

    /// Apply a panel change to the active camera or the layout.
    pub fn apply_control(&mut self, input: ControlInput) -> Result<(), ControlError> {
        let result = self.try_apply_control(input);
        if let Err(err) = &result {
            debug!("{err}; keeping previous value");
        }
        result
    }

    fn try_apply_control(&mut self, input: ControlInput) -> Result<(), ControlError> {
        match input {
            ControlInput::View(name) => {
                let kind = panel::parse_view(&name)?;
                self.select_view(kind);
            }
            ControlInput::Projection(name) => {
                let mode = panel::parse_projection(&name)?;
                self.router.active_camera_mut().set_active_projection(mode);
            }
            ControlInput::Horizontal(value) => {
                let camera = self.router.active_camera_mut();
                let (min, max) = (camera.config().orientation_min.h, camera.config().orientation_max.h);
                let h = panel::parse_field("horizontal", &value, min, max)?;
                let v = camera.orientation().v;
                camera.set_orientation(Orientation::new(h, v));
            }
            ControlInput::Vertical(value) => {
                let camera = self.router.active_camera_mut();
                let (min, max) = (camera.config().orientation_min.v, camera.config().orientation_max.v);
                let v = panel::parse_field("vertical", &value, min, max)?;
                let h = camera.orientation().h;
                camera.set_orientation(Orientation::new(h, v));
            }
            ControlInput::Distance(value) => {
                let camera = self.router.active_camera_mut();
                let (min, max) = (camera.config().distance_min, camera.config().distance_max);
                camera.set_distance(panel::parse_field("distance", &value, min, max)?);
            }
            ControlInput::Zoom(value) => {
                let camera = self.router.active_camera_mut();
                let (min, max) = (camera.config().zoom_min, camera.config().zoom_max);
                camera.set_zoom(panel::parse_field("zoom", &value, min, max)?);
            }
            ControlInput::MultipleViews(multiple) => self.router.set_view_mode(multiple),
            ControlInput::UserInterface(visible) => self.overlays.user_interface = visible,
            ControlInput::Help(visible) => self.overlays.help = visible,
            ControlInput::Statistics(visible) => self.overlays.statistics = visible,
            ControlInput::Reset => self.router.reset_active(),
            ControlInput::ResetAll => self.router.reset_all(),
        }
        Ok(())
    }
}

/// Frame the dancing walker from the front in a single full-window view.
fn final_sequence(router: &mut ViewportRouter, fog: &mut FogState, animations: &mut AnimationController) {
    info!("Exit found");
    fog.enabled = false;
    let camera = router.camera_mut(ViewKind::ThirdPerson);
    let initial_v = camera.config().initial_orientation.v;
    let initial_distance = camera.config().initial_distance;
    camera.set_orientation(Orientation::new(FINAL_ORIENTATION_H, initial_v));
    camera.set_distance(initial_distance);
    camera.set_zoom(FINAL_ZOOM);
    router.set_active(ViewKind::ThirdPerson);
    router.set_view_mode(false);
    animations.fade_to_action(AnimationState::Dance, SHORT_FADE);
}

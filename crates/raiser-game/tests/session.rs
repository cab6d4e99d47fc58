//! End-to-end session scenarios driven through resource files on disk.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use raiser_camera::{ProjectionMode, ViewKind};
use raiser_config::Config;
use raiser_game::{ControlError, ControlInput, Session, SessionStatus};
use raiser_input::{Action, RawKeyEvent};
use raiser_player::AnimationState;
use serde_json::json;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

const WAIT: Duration = Duration::from_secs(5);
const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-4;

struct MazeFile {
    map: serde_json::Value,
    width: u32,
    height: u32,
    initial: [i32; 2],
    exit: [i32; 2],
}

fn write_resources(dir: &Path, maze: MazeFile) -> Config {
    let maze_path = dir.join("maze.json");
    let model_path = dir.join("model.json");
    let maze_json = json!({
        "map": maze.map,
        "size": { "width": maze.width, "height": maze.height },
        "initialPosition": maze.initial,
        "initialDirection": 0.0,
        "exitLocation": maze.exit,
        "groundTextureUrl": "ground.jpg",
        "wallTextureUrl": "wall.jpg"
    });
    std::fs::write(&maze_path, maze_json.to_string()).unwrap();
    let model_json = json!({
        "animations": [
            { "name": "Idle", "duration": 2.0 },
            { "name": "Walking", "duration": 1.0 },
            { "name": "Death", "duration": 0.5 },
            { "name": "Dance", "duration": 3.0 }
        ],
        "size": [2.0, 10.0, 2.0]
    });
    std::fs::write(&model_path, model_json.to_string()).unwrap();

    let mut config = Config::default();
    config.maze.url = maze_path;
    config.player.url = model_path;
    config.fog.enabled = true;
    config
}

fn open_2x2(initial: [i32; 2], exit: [i32; 2]) -> MazeFile {
    MazeFile {
        map: json!([[0, 0, 0], [0, 0, 0], [0, 0, 0]]),
        width: 2,
        height: 2,
        initial,
        exit,
    }
}

fn boxed_1x1() -> MazeFile {
    MazeFile {
        map: json!([[3, 1], [2, 0]]),
        width: 1,
        height: 1,
        initial: [0, 0],
        exit: [0, 1],
    }
}

fn running_session(dir: &Path, maze: MazeFile) -> Session {
    let config = write_resources(dir, maze);
    let mut session = Session::new(config).unwrap();
    assert!(session.wait_for_resources(WAIT));
    session
}

#[test]
fn test_exit_triggers_final_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [0, 0]));
    assert!(session.fog().enabled);
    session.apply_control(ControlInput::MultipleViews(true)).unwrap();

    let frame = session.update(DT).unwrap();

    assert_eq!(session.status(), SessionStatus::Finished);
    assert_eq!(session.animation(), Some(AnimationState::Dance));
    assert!(!frame.fog.enabled);
    assert!(frame.views.iter().all(|view| !view.fog));
    assert_eq!(session.router().active_kind(), ViewKind::ThirdPerson);
    assert!(!session.router().multiple_views());
    let kinds: Vec<ViewKind> = frame.views.iter().map(|view| view.kind).collect();
    assert_eq!(kinds, vec![ViewKind::ThirdPerson, ViewKind::MiniMap]);

    let camera = session.router().camera(ViewKind::ThirdPerson);
    assert_eq!(camera.orientation().h, 180.0);
    assert_eq!(camera.orientation().v, camera.config().initial_orientation.v);
    assert_eq!(camera.distance(), camera.config().initial_distance);
    assert_eq!(camera.zoom(), 2.0);
}

#[test]
fn test_dance_freezes_the_walker() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [0, 0]));
    session.update(DT);
    let start = session.player().unwrap().position;
    session.set_action(Action::Forward, true);
    for _ in 0..120 {
        session.update(DT);
    }
    assert_eq!(session.player().unwrap().position, start);
    assert_eq!(session.animation(), Some(AnimationState::Dance));
}

#[test]
fn test_jump_freezes_turning_and_moving_until_it_ends() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [1, 2]));
    session.set_action(Action::Jump, true);
    session.update(DT);
    assert_eq!(session.animation(), Some(AnimationState::Jump));

    session.set_action(Action::Jump, false);
    session.set_action(Action::Left, true);
    session.set_action(Action::Forward, true);
    let start = session.player().unwrap().clone();
    // The model has no Jump clip, so it plays for the one-second default.
    for _ in 0..30 {
        session.update(DT);
        let player = session.player().unwrap();
        assert_eq!(player.direction, start.direction);
        assert_eq!(player.position, start.position);
        assert_eq!(session.animation(), Some(AnimationState::Jump));
    }

    for _ in 0..60 {
        session.update(DT);
    }
    assert!(session.player().unwrap().direction > start.direction);
    assert_ne!(session.animation(), Some(AnimationState::Jump));
}

#[test]
fn test_death_freezes_turning_until_it_ends() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), boxed_1x1());
    session.set_action(Action::Forward, true);
    for _ in 0..120 {
        session.update(DT);
        if session.animation() == Some(AnimationState::Death) {
            break;
        }
    }
    assert_eq!(session.animation(), Some(AnimationState::Death));

    session.set_action(Action::Left, true);
    let direction = session.player().unwrap().direction;
    // Death lasts half a second in the test model.
    for _ in 0..15 {
        session.update(DT);
        assert_eq!(session.player().unwrap().direction, direction);
    }

    for _ in 0..30 {
        session.update(DT);
    }
    assert!(session.player().unwrap().direction > direction);
}

#[test]
fn test_walking_forward_in_open_maze() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [1, 2]));
    assert_eq!(session.status(), SessionStatus::Running);
    let start = session.player().unwrap().position;

    session.set_action(Action::Forward, true);
    for _ in 0..30 {
        session.update(DT);
    }
    let player = session.player().unwrap();
    let walked = player.position.z - start.z;
    assert!((walked - 30.0 * DT * player.walking_speed).abs() < EPSILON);
    assert!((player.position.x - start.x).abs() < EPSILON);
    assert_eq!(session.animation(), Some(AnimationState::Walking));

    session.set_action(Action::Forward, false);
    session.update(DT);
    assert_eq!(session.animation(), Some(AnimationState::Idle));
}

#[test]
fn test_cameras_follow_the_walker() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [1, 2]));
    session.set_action(Action::Left, true);
    for _ in 0..10 {
        session.update(DT);
    }
    let player = session.player().unwrap();
    let eye = player.eye_position();
    for kind in [ViewKind::FirstPerson, ViewKind::ThirdPerson, ViewKind::Top] {
        let camera = session.router().camera(kind);
        assert_eq!(camera.target(), eye);
        assert_eq!(camera.player_direction(), player.direction);
    }
    assert!(player.direction > 0.0);
}

#[test]
fn test_wall_collision_requests_death() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), boxed_1x1());
    let radius = session.player().unwrap().radius;
    session.set_action(Action::Forward, true);

    let mut died = false;
    for _ in 0..120 {
        session.update(DT);
        if session.animation() == Some(AnimationState::Death) {
            died = true;
            break;
        }
    }
    assert!(died);
    let player = session.player().unwrap();
    // The south wall plane sits half a cell from the centre.
    assert!(player.position.z <= 0.5 - radius + EPSILON);

    // Death plays out, then releasing the key recovers to Idle.
    session.set_action(Action::Forward, false);
    for _ in 0..60 {
        session.update(DT);
    }
    assert_eq!(session.animation(), Some(AnimationState::Idle));
}

#[test]
fn test_missing_resource_never_starts() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_resources(dir.path(), boxed_1x1());
    config.maze.url = dir.path().join("missing.json");
    let mut session = Session::new(config).unwrap();
    assert!(!session.wait_for_resources(WAIT));
    assert_eq!(session.status(), SessionStatus::Failed);
    for _ in 0..10 {
        assert!(session.update(DT).is_none());
    }
}

#[test]
fn test_view_keys_and_toggles() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [1, 2]));
    assert_eq!(session.router().active_kind(), ViewKind::Fixed);

    session.key_event(RawKeyEvent::pressed(KeyCode::Digit3));
    session.key_event(RawKeyEvent::released(KeyCode::Digit3));
    assert_eq!(session.router().active_kind(), ViewKind::ThirdPerson);

    session.key_event(RawKeyEvent::pressed(KeyCode::KeyV));
    // Auto-repeat of a held toggle key does not toggle again.
    session.key_event(RawKeyEvent {
        repeat: true,
        ..RawKeyEvent::pressed(KeyCode::KeyV)
    });
    session.key_event(RawKeyEvent::released(KeyCode::KeyV));
    assert!(session.router().multiple_views());
    let frame = session.update(DT).unwrap();
    assert_eq!(frame.views.len(), 5);
    assert_eq!(frame.views.last().map(|view| view.kind), Some(ViewKind::MiniMap));

    session.key_event(RawKeyEvent::pressed(KeyCode::KeyM));
    session.key_event(RawKeyEvent::pressed(KeyCode::KeyH));
    let frame = session.update(DT).unwrap();
    assert_eq!(frame.views.len(), 4);
    assert!(frame.show_help);

    let first_person = frame.view(ViewKind::FirstPerson).unwrap();
    assert!(!first_person.player_visible);
    assert!(frame.view(ViewKind::Top).unwrap().player_visible);
}

#[test]
fn test_locomotion_keys_track_held_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [1, 2]));
    session.key_event(RawKeyEvent::pressed(KeyCode::KeyR));
    session.key_event(RawKeyEvent::pressed(KeyCode::ArrowLeft));
    assert!(session.key_state().run);
    assert!(session.key_state().left);
    session.key_event(RawKeyEvent::released(KeyCode::KeyR));
    assert!(!session.key_state().run);
    assert!(session.key_state().left);
}

#[test]
fn test_pointer_drag_changes_distance() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [1, 2]));
    let before = session.router().active_camera().distance();

    session.cursor_moved(Vec2::new(640.0, 360.0));
    session.mouse_button(MouseButton::Left, ElementState::Pressed, Vec2::new(640.0, 360.0));
    session.cursor_moved(Vec2::new(620.0, 380.0));
    session.mouse_button(MouseButton::Left, ElementState::Released, Vec2::new(620.0, 380.0));
    session.cursor_moved(Vec2::new(500.0, 500.0));

    let after = session.router().active_camera().distance();
    assert!((after - (before + 2.0)).abs() < EPSILON);
}

#[test]
fn test_wheel_zooms_view_under_pointer() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [1, 2]));
    session.mouse_wheel(-300.0, Vec2::new(640.0, 360.0));
    let zoom = session.router().camera(ViewKind::Fixed).zoom();
    assert!((zoom - 1.3).abs() < EPSILON);
}

#[test]
fn test_panel_rejects_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [1, 2]));

    let err = session
        .apply_control(ControlInput::Zoom("abc".into()))
        .unwrap_err();
    assert!(matches!(err, ControlError::InvalidControlInput { control: "zoom", .. }));
    assert_eq!(session.panel().zoom, "1.0");

    assert!(session.apply_control(ControlInput::Distance("99".into())).is_err());
    assert_eq!(session.panel().distance, "8.0");

    session.apply_control(ControlInput::Zoom("1.5".into())).unwrap();
    session.apply_control(ControlInput::Horizontal("-30".into())).unwrap();
    session
        .apply_control(ControlInput::Projection("orthographic".into()))
        .unwrap();
    let panel = session.panel();
    assert_eq!(panel.zoom, "1.5");
    assert_eq!(panel.horizontal, "-30");
    assert_eq!(panel.vertical, "-45");
    assert_eq!(panel.projection, ProjectionMode::Orthographic);

    session.apply_control(ControlInput::Reset).unwrap();
    assert_eq!(session.panel().zoom, "1.0");
    assert_eq!(session.panel().horizontal, "135");
}

#[test]
fn test_panel_view_selection_and_reset_all() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = running_session(dir.path(), open_2x2([0, 0], [1, 2]));
    session.apply_control(ControlInput::View("top".into())).unwrap();
    assert_eq!(session.panel().view, ViewKind::Top);
    assert_eq!(session.panel().distance_range.max, "16.0");
    assert!(session.apply_control(ControlInput::View("mini-map".into())).is_err());

    session.apply_control(ControlInput::Zoom("2".into())).unwrap();
    session.apply_control(ControlInput::View("fixed".into())).unwrap();
    session.apply_control(ControlInput::Zoom("2".into())).unwrap();
    session.apply_control(ControlInput::ResetAll).unwrap();
    assert_eq!(session.router().camera(ViewKind::Top).zoom(), 1.0);
    assert_eq!(session.router().camera(ViewKind::Fixed).zoom(), 1.0);
}

#[test]
fn test_help_table_lists_credits() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_resources(dir.path(), boxed_1x1());
    config.maze.credits = "Maze credits".into();
    config.player.credits = "Model credits".into();
    let session = Session::new(config).unwrap();
    let help = session.help_table();
    assert_eq!(help.rows.len(), Action::ALL.len());
    assert_eq!(help.credits, vec!["Maze credits".to_string(), "Model credits".to_string()]);
}

//! Thumb Raiser session: resource loading, per-frame simulation, input
//! routing, and the render sink consumed by an external renderer.

pub mod error;
pub mod fog;
pub mod frame;
pub mod game_loop;
pub mod help;
pub mod panel;
pub mod session;

pub use error::{ControlError, SessionError};
pub use fog::FogState;
pub use frame::{Frame, PlayerPose, RenderView};
pub use game_loop::{FIXED_DT, GameLoop, MAX_FRAME_TIME};
pub use help::{HelpRow, HelpTable};
pub use panel::{ControlInput, FieldRange, Overlays, PanelState};
pub use session::{Session, SessionStatus};

mod anchor;
mod frame_gate;
mod menu;
mod reveal;
mod station;

pub use anchor::AnchorAction;
pub use frame_gate::FrameGate;
pub use menu::{BarStyle, MenuState};
pub use reveal::{qualifies, RevealEffects, RevealKind, RevealState, RevealTarget};
pub use station::{LatLng, Station};

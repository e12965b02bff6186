//! Game simulation
//!
//! Everything in this module is pure and deterministic: no windowing,
//! timing, or rendering dependencies. The platform layer applies input
//! events to the state, then calls [`update`] once per frame with the
//! measured delta.

pub mod state;
pub mod update;

pub use state::{BallDirection, GameObject, GameState};
pub use update::update;

//! Render/feedback layer
//!
//! Pure presentation: reads a snapshot after the tick, never writes back.
//! The host blits the bike sprite and uploads the triangle list to whatever
//! surface it owns.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{Frame, Hud, SpriteDraw};
pub use vertex::Vertex;

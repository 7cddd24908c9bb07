//! Controller layer: UI events and the reducer that routes them into the tracker.

pub mod events;
pub mod orchestration;

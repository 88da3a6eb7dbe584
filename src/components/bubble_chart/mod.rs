//! Canvas bubble chart: radius scale, force layout, scene mapping and the Leptos component.

mod component;
mod config;
mod error;
mod layout;
#[cfg(test)]
mod property_tests;
mod render;
pub mod scale;
mod scene;
mod state;
mod types;

pub use component::BubbleChart;
pub use config::BubbleConfig;
pub use error::BubbleError;
pub use layout::{BubbleLayout, Frames};
pub use scene::{Bubble, Fill, Gradient, Scene, Tier};
pub use types::{DataPoint, LayoutEvent, LayoutNode, SimulationState};

pub mod layout;

pub use layout::{LaneLayout, LayoutStrategy, strategy_named};

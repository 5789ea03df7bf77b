pub mod gear_input;
pub mod gear_set;
pub mod ratio_grid;
pub mod types;

pub use gear_input::parse_tooth_counts;
pub use gear_set::GearSet;
pub use ratio_grid::{AxisLabels, RatioGrid};
pub use types::{GridCell, Viewport};

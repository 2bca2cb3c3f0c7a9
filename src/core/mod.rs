pub mod average;
pub mod palette;
pub mod primitives;
pub mod types;

pub use average::{AverageValue, AveragingStrategy, EntityAverage, compute_averages};
pub use palette::{FALLBACK_TEXT_COLOR, PALETTE, palette_color};
pub use primitives::{decimal_to_f64, f64_to_fixed_decimal};
pub use types::{DataTable, VillageRecord};

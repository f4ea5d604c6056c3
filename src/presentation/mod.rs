pub mod grouping;

pub use grouping::{group_by_month, GroupedArchive, MonthGroup};

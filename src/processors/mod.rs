pub mod comparison_merger;
pub mod monthly_aggregator;
pub mod weekly_pivot;

pub use comparison_merger::ComparisonMerger;
pub use monthly_aggregator::MonthlyAggregator;
pub use weekly_pivot::{pivot_by_weekday, weekly_means, WeekdayGrid, WeeklyMean};

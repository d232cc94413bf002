/*! Filtering utilities.

Filters decide whether a computed statistic survives into output.

Filters implement [filter::Filter]: pure, stateless detection (two successive
equal inputs give two equal outputs). [seed::SeedThresholds] is the
support/magnitude gate applied identically by the partition-level and global
aggregation stages.
!*/
mod filter;
mod seed;

pub use filter::Filter;
pub use seed::SeedThresholds;

/*! Output emission.

CSV writers for the three tables the pipelines produce: the global seed
table, the per-partition seed table and the per-review score table.
!*/
mod writer;

pub use writer::{
    write_partition_seed_table, write_seed_table, ReviewRecord, ReviewTableWriter,
};

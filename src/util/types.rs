pub type Key = i64;
pub type Value = i64;
pub type Size = usize; //for lengths and counts
pub type PartitionId = usize; //index of a read/write partition

use super::Workload;
use crate::record::Record;
use crate::util::types::{Key, Value};

///Number of keys preloaded into the tree and queried back by the readers
pub const FILL_KEYS: Key = 4096;
///Top of the key space; keys above FILL_KEYS are added and then deleted
pub const MAX_KEY: Key = 8192;
///Payload stored with every add
pub const ADD_PAYLOAD: Value = 7;

///The canonical split-tree suite: load the lower half of the key space
/// in descending order, extend upward through the rest in ascending
/// order, then delete the upper half back out while the readers query
/// the lower half. Key 4096 sits on the seam and is added twice.
#[derive(Debug, Default)]
pub struct SplitTree;

impl Workload for SplitTree {
    fn tree_records(&self) -> Vec<Record> {
        let descending = (1..=FILL_KEYS).rev();
        let ascending = FILL_KEYS..MAX_KEY;
        descending
            .chain(ascending)
            .map(|key| Record::Add {
                key,
                value: ADD_PAYLOAD,
            })
            .collect()
    }

    fn read_records(&self) -> Vec<Record> {
        (1..=FILL_KEYS)
            .rev()
            .map(|key| Record::Query { key })
            .collect()
    }

    fn write_records(&self) -> Vec<Record> {
        ((FILL_KEYS + 1)..=MAX_KEY)
            .rev()
            .map(|key| Record::Delete { key })
            .collect()
    }

    fn max_key(&self) -> Key {
        MAX_KEY
    }
}

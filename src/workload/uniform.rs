use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::Workload;
use crate::record::Record;
use crate::util::types::{Key, Size, Value};

//Per-stream salts so the three streams draw from independent sequences
const TREE_STREAM: u64 = 1;
const READ_STREAM: u64 = 2;
const WRITE_STREAM: u64 = 3;

///Seeded random workload with the same file layout as the split-tree
/// suite: the lower half of the key space is loaded and queried, the
/// upper half is loaded and deleted. Emit order is shuffled to avoid
/// insertion bias; payloads are uniformly random. The same seed and key
/// count always reproduce the same bytes.
#[derive(Debug)]
pub struct Uniform {
    num_keys: Size,
    seed: u64,
}

impl Uniform {
    pub fn new(num_keys: Size, seed: u64) -> Uniform {
        Uniform { num_keys, seed }
    }

    fn rng(&self, stream: u64) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(stream))
    }

    fn shuffled(&self, lower: Key, upper: Key, rng: &mut StdRng) -> Vec<Key> {
        let mut keys: Vec<Key> = (lower..=upper).collect();
        keys.shuffle(rng);
        keys
    }

    fn fill_keys(&self) -> Key {
        self.num_keys as Key
    }
}

impl Workload for Uniform {
    fn tree_records(&self) -> Vec<Record> {
        let mut rng = self.rng(TREE_STREAM);
        let lower = self.shuffled(1, self.fill_keys(), &mut rng);
        let upper = self.shuffled(self.fill_keys() + 1, self.max_key(), &mut rng);
        lower
            .into_iter()
            .chain(upper)
            .map(|key| Record::Add {
                key,
                value: rng.gen_range(1..=Value::MAX),
            })
            .collect()
    }

    fn read_records(&self) -> Vec<Record> {
        let mut rng = self.rng(READ_STREAM);
        self.shuffled(1, self.fill_keys(), &mut rng)
            .into_iter()
            .map(|key| Record::Query { key })
            .collect()
    }

    fn write_records(&self) -> Vec<Record> {
        let mut rng = self.rng(WRITE_STREAM);
        self.shuffled(self.fill_keys() + 1, self.max_key(), &mut rng)
            .into_iter()
            .map(|key| Record::Delete { key })
            .collect()
    }

    fn max_key(&self) -> Key {
        2 * self.num_keys as Key
    }
}

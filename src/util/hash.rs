use xxhash_rust::xxh3::xxh3_64_with_seed;

///Fixed seed so checksums are comparable across runs and machines
const CHECKSUM_SEED: u64 = 0;

pub fn hash(bytes: &[u8], seed: u64) -> u64 {
    xxh3_64_with_seed(bytes, seed)
}

///Fingerprint of a fixture file's bytes, as stored in the manifest
pub fn checksum(bytes: &[u8]) -> u64 {
    hash(bytes, CHECKSUM_SEED)
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::ParseRecordError;
use crate::util::types::{Key, Size};

///Everything that can go wrong while generating or verifying a fixture
/// set. I/O variants carry the offending path so the surfaced message
/// always names the file involved. There is no recovery and no cleanup:
/// the first error aborts the run, leaving partial output behind.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("unable to create {}: {source}", .path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("unable to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("unable to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("unable to encode manifest {}: {source}", .path.display())]
    ManifestEncode { path: PathBuf, source: bincode::Error },

    #[error("unable to decode manifest {}: {source}", .path.display())]
    ManifestDecode { path: PathBuf, source: bincode::Error },

    #[error("{}: checksum mismatch (manifest {expected:#018x}, file {found:#018x})", .path.display())]
    ChecksumMismatch {
        path: PathBuf,
        expected: u64,
        found: u64,
    },

    #[error("{}: record count mismatch (manifest {expected}, file {found})", .path.display())]
    CountMismatch {
        path: PathBuf,
        expected: Size,
        found: Size,
    },

    #[error("{}: line {line}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        line: Size,
        source: ParseRecordError,
    },

    #[error("{}: line {line}: key {key} outside [1, {max_key}]", .path.display())]
    KeyOutOfBounds {
        path: PathBuf,
        line: Size,
        key: Key,
        max_key: Key,
    },
}

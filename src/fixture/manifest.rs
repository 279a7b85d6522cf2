use std::fs::{self, File};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::FileSummary;
use crate::error::FixtureError;
use crate::record::Record;
use crate::util::types::{Key, Size};
use crate::util::{filename, hash};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub records: Size,
    pub checksum: u64,
}

///Sidecar descriptor for a generated fixture set: per-file record counts
/// and checksums, plus the largest key the workload may legally contain.
///Lets a set be re-checked later without regenerating it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub max_key: Key,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    ///Fingerprints the files just written by write_suite
    pub fn capture(
        dir: &Path,
        summaries: &[FileSummary],
        max_key: Key,
    ) -> Result<Manifest, FixtureError> {
        let mut entries = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let path = dir.join(&summary.name);
            let bytes = fs::read(&path).map_err(|source| FixtureError::Read {
                path: path.clone(),
                source,
            })?;
            entries.push(ManifestEntry {
                name: summary.name.clone(),
                records: summary.records,
                checksum: hash::checksum(&bytes),
            });
        }
        Ok(Manifest { max_key, entries })
    }

    pub fn write(&self, dir: &Path) -> Result<(), FixtureError> {
        let path = dir.join(filename::manifest());
        let mut file = File::create(&path).map_err(|source| FixtureError::Create {
            path: path.clone(),
            source,
        })?;
        bincode::serialize_into(&mut file, self)
            .map_err(|source| FixtureError::ManifestEncode { path, source })
    }

    pub fn load(dir: &Path) -> Result<Manifest, FixtureError> {
        let path = dir.join(filename::manifest());
        let file = File::open(&path).map_err(|source| FixtureError::Read {
            path: path.clone(),
            source,
        })?;
        bincode::deserialize_from(file)
            .map_err(|source| FixtureError::ManifestDecode { path, source })
    }
}

///Checks every file listed in the manifest in dir: byte checksum, record
/// count, per-line record syntax and key bounds. The first discrepancy
/// aborts the pass.
pub fn verify(dir: &Path) -> Result<(), FixtureError> {
    let manifest = Manifest::load(dir)?;
    for entry in &manifest.entries {
        let path = dir.join(&entry.name);
        let bytes = fs::read(&path).map_err(|source| FixtureError::Read {
            path: path.clone(),
            source,
        })?;

        let found = hash::checksum(&bytes);
        if found != entry.checksum {
            return Err(FixtureError::ChecksumMismatch {
                path,
                expected: entry.checksum,
                found,
            });
        }

        let text = String::from_utf8_lossy(&bytes);
        let mut records: Size = 0;
        for (index, line) in text.lines().enumerate() {
            records += 1;
            let record: Record = line.parse().map_err(|source| FixtureError::Malformed {
                path: path.clone(),
                line: index + 1,
                source,
            })?;
            let key = record.key();
            if key < 1 || key > manifest.max_key {
                return Err(FixtureError::KeyOutOfBounds {
                    path: path.clone(),
                    line: index + 1,
                    key,
                    max_key: manifest.max_key,
                });
            }
        }
        if records != entry.records {
            return Err(FixtureError::CountMismatch {
                path,
                expected: entry.records,
                found: records,
            });
        }
        info!(file = %entry.name, records, "fixture verified");
    }
    Ok(())
}

pub mod manifest;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::FixtureError;
use crate::record::Record;
use crate::util::types::{PartitionId, Size};
use crate::util::{filename, system_info};
use crate::workload::{self, Workload, NUM_PARTITIONS};

///Record count for one written file, in the order files were written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub records: Size,
}

struct ScriptFile {
    name: String,
    path: PathBuf,
    writer: BufWriter<File>,
    records: Size,
}

impl ScriptFile {
    ///Opens (truncating any previous content) a script file in dir
    fn create(dir: &Path, name: &str) -> Result<ScriptFile, FixtureError> {
        let path = dir.join(name);
        let file = File::create(&path).map_err(|source| FixtureError::Create {
            path: path.clone(),
            source,
        })?;
        Ok(ScriptFile {
            name: String::from(name),
            writer: BufWriter::with_capacity(system_info::page_size(), file),
            path,
            records: 0,
        })
    }

    fn append(&mut self, record: &Record) -> Result<(), FixtureError> {
        writeln!(self.writer, "{record}").map_err(|source| FixtureError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.records += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<FileSummary, FixtureError> {
        self.writer.flush().map_err(|source| FixtureError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(FileSummary {
            name: self.name,
            records: self.records,
        })
    }
}

///Writes the full nine-file fixture set for a workload into dir:
/// the tree-loading script, four reader scripts and four writer scripts.
///Existing files are truncated first; on error, partially written files
/// are left as-is.
pub fn write_suite(
    dir: &Path,
    workload_def: &dyn Workload,
) -> Result<Vec<FileSummary>, FixtureError> {
    let mut tree = ScriptFile::create(dir, &filename::tree())?;
    for record in workload_def.tree_records() {
        tree.append(&record)?;
    }
    let mut summaries = vec![tree.finish()?];

    summaries.extend(write_partitioned(
        dir,
        filename::read_script,
        &workload_def.read_records(),
    )?);
    summaries.extend(write_partitioned(
        dir,
        filename::write_script,
        &workload_def.write_records(),
    )?);

    for summary in &summaries {
        info!(file = %summary.name, records = summary.records, "fixture written");
    }
    Ok(summaries)
}

///Fans a record stream out across the four partition scripts by key
fn write_partitioned(
    dir: &Path,
    script_name: fn(PartitionId) -> String,
    records: &[Record],
) -> Result<Vec<FileSummary>, FixtureError> {
    let mut scripts = Vec::with_capacity(NUM_PARTITIONS);
    for partition in 0..NUM_PARTITIONS {
        scripts.push(ScriptFile::create(dir, &script_name(partition))?);
    }
    for record in records {
        scripts[workload::partition(record.key())].append(record)?;
    }
    scripts.into_iter().map(ScriptFile::finish).collect()
}

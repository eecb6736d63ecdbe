//! On-disk snapshot: `scenes.json` plus `vectors.bin`, stored together in a
//! generation directory.
//!
//! `vectors.bin` format: header (count: u32 LE, dims: u32 LE) followed by
//! `count * dims` f32 LE values. Row `i` belongs to the `i`-th record of
//! `scenes.json`.
//!
//! Layout under the index directory:
//!
//! ```text
//! CURRENT                 -> "gen-000003"
//! gen-000003/scenes.json
//! gen-000003/vectors.bin
//! ```
//!
//! A save stages both files in a fresh directory, renames it to the next
//! generation, then replaces `CURRENT` with a single rename. Readers only
//! ever see a generation whose two files were fully written. A directory
//! holding only the flat `scenes.json`/`vectors.bin` pair (no `CURRENT`) is
//! still loaded as-is.

use std::io::Write;
use std::path::{Path, PathBuf};

use recap_core::config::IndexConfig;
use recap_core::errors::{IndexError, RecapResult};
use recap_core::models::SceneRecord;
use recap_core::traits::{ISceneStore, IVectorIndex};
use tracing::{debug, info, warn};

use crate::flat::FlatL2Index;
use crate::handle::SceneIndex;
use crate::store::InMemorySceneStore;

const HEADER_LEN: usize = 8;
const CURRENT_FILE: &str = "CURRENT";
const GENERATION_PREFIX: &str = "gen-";
const STAGING_PREFIX: &str = ".staging-";

/// Snapshot location: an index directory plus the two file names used
/// inside each generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotStore {
    dir: PathBuf,
    scenes_file: String,
    vectors_file: String,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>, scenes_file: impl Into<String>, vectors_file: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            scenes_file: scenes_file.into(),
            vectors_file: vectors_file.into(),
        }
    }

    pub fn from_config(config: &IndexConfig) -> Self {
        Self::new(&config.index_dir, &config.scenes_file, &config.vectors_file)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Whether anything loadable is on disk: a committed generation or a
    /// flat file pair.
    pub fn exists(&self) -> bool {
        self.dir.join(CURRENT_FILE).exists()
            || self.dir.join(&self.scenes_file).exists()
            || self.dir.join(&self.vectors_file).exists()
    }

    /// Directory of the committed generation, if any.
    pub fn current_generation(&self) -> RecapResult<Option<PathBuf>> {
        let pointer = self.dir.join(CURRENT_FILE);
        let name = match std::fs::read_to_string(&pointer) {
            Ok(raw) => raw.trim().to_string(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(load_failed(&pointer, e).into()),
        };
        if generation_number(&name).is_none() {
            return Err(corrupt(format!("{} names an invalid generation {name:?}", pointer.display())).into());
        }
        Ok(Some(self.dir.join(name)))
    }

    /// Persist a snapshot as a new generation and make it current. Records
    /// are written in index row order. Returns the generation directory.
    pub fn save(&self, index: &SceneIndex) -> RecapResult<PathBuf> {
        let records: Vec<&SceneRecord> = index
            .index()
            .ids()
            .iter()
            .filter_map(|id| index.store().get(*id))
            .collect();
        let scenes_json = serde_json::to_vec_pretty(&records)?;
        let vectors = encode_vectors(index.index())?;

        std::fs::create_dir_all(&self.dir).map_err(|e| write_failed(&self.dir, e))?;
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&self.dir)
            .map_err(|e| write_failed(&self.dir, e))?;
        write_synced(&staging.path().join(&self.vectors_file), &vectors)?;
        write_synced(&staging.path().join(&self.scenes_file), &scenes_json)?;

        let next = self.next_generation()?;
        let target = self.dir.join(&next);
        if target.exists() {
            std::fs::remove_dir_all(&target).map_err(|e| write_failed(&target, e))?;
        }
        // The staging guard's own cleanup is a no-op once the rename lands.
        std::fs::rename(staging.path(), &target).map_err(|e| write_failed(&target, e))?;
        drop(staging);

        self.write_pointer(&next)?;
        self.prune(&next);

        info!(
            scenes = records.len(),
            dims = index.index().dimensions(),
            generation = %next,
            dir = %self.dir.display(),
            "snapshot written"
        );
        Ok(target)
    }

    /// Load the committed generation, or the flat file pair when no
    /// generation was ever committed.
    pub fn load(&self) -> RecapResult<SceneIndex> {
        let dir = self.current_generation()?.unwrap_or_else(|| self.dir.clone());
        let loaded = read_pair(&dir.join(&self.scenes_file), &dir.join(&self.vectors_file))?;
        info!(scenes = loaded.len(), dims = loaded.index().dimensions(), dir = %dir.display(), "snapshot loaded");
        Ok(loaded)
    }

    fn next_generation(&self) -> RecapResult<String> {
        let current = self
            .current_generation()?
            .and_then(|p| p.file_name().and_then(|n| n.to_str()).and_then(generation_number))
            .unwrap_or(0);
        Ok(format!("{GENERATION_PREFIX}{:06}", current + 1))
    }

    fn write_pointer(&self, generation: &str) -> RecapResult<()> {
        let pointer = self.dir.join(CURRENT_FILE);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| write_failed(&pointer, e))?;
        tmp.write_all(generation.as_bytes()).map_err(|e| write_failed(&pointer, e))?;
        tmp.as_file().sync_all().map_err(|e| write_failed(&pointer, e))?;
        tmp.persist(&pointer).map_err(|e| write_failed(&pointer, e.error))?;
        Ok(())
    }

    /// Best effort: stale generations and abandoned staging directories.
    fn prune(&self, keep: &str) {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %self.dir.display(), error = %e, "could not list snapshot directory");
                return;
            }
        };
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let stale = name != keep && (generation_number(name).is_some() || name.starts_with(STAGING_PREFIX));
            if !stale || !entry.path().is_dir() {
                continue;
            }
            match std::fs::remove_dir_all(entry.path()) {
                Ok(()) => debug!(generation = name, "removed stale snapshot"),
                Err(e) => warn!(generation = name, error = %e, "could not remove stale snapshot"),
            }
        }
    }
}

/// Persist `index` at the location described by `config`.
pub fn save_snapshot(index: &SceneIndex, config: &IndexConfig) -> RecapResult<PathBuf> {
    SnapshotStore::from_config(config).save(index)
}

/// Load the snapshot at the location described by `config`.
pub fn load_snapshot(config: &IndexConfig) -> RecapResult<SceneIndex> {
    SnapshotStore::from_config(config).load()
}

fn generation_number(name: &str) -> Option<u64> {
    name.strip_prefix(GENERATION_PREFIX)
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse().ok())
}

fn read_pair(scenes_path: &Path, vectors_path: &Path) -> RecapResult<SceneIndex> {
    let raw_scenes = std::fs::read(scenes_path).map_err(|e| load_failed(scenes_path, e))?;
    let records: Vec<SceneRecord> =
        serde_json::from_slice(&raw_scenes).map_err(|e| IndexError::LoadFailed {
            path: scenes_path.display().to_string(),
            reason: e.to_string(),
        })?;
    let raw_vectors = std::fs::read(vectors_path).map_err(|e| load_failed(vectors_path, e))?;
    let (count, dims, data) = decode_vectors(&raw_vectors)?;

    if count != records.len() {
        return Err(IndexError::LengthMismatch {
            vectors: count,
            scenes: records.len(),
        }
        .into());
    }

    let ids = records.iter().map(|r| r.id).collect();
    let flat = FlatL2Index::from_parts(dims, ids, data);
    let store = InMemorySceneStore::from_records(records)?;
    SceneIndex::new(flat, store)
}

fn encode_vectors(index: &FlatL2Index) -> RecapResult<Vec<u8>> {
    let count = header_field(index.len(), "count")?;
    let dims = header_field(index.dimensions(), "dims")?;

    let mut out = Vec::with_capacity(HEADER_LEN + index.raw().len() * 4);
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&dims.to_le_bytes());
    for value in index.raw() {
        out.extend_from_slice(&value.to_le_bytes());
    }
    Ok(out)
}

fn decode_vectors(data: &[u8]) -> RecapResult<(usize, usize, Vec<f32>)> {
    if data.len() < HEADER_LEN {
        return Err(corrupt(format!("{} bytes, shorter than header", data.len())).into());
    }
    let count = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
    let dims = u32::from_le_bytes([data[4], data[5], data[6], data[7]]) as usize;

    let expected = count
        .checked_mul(dims)
        .and_then(|n| n.checked_mul(4))
        .and_then(|n| n.checked_add(HEADER_LEN))
        .ok_or_else(|| corrupt(format!("header overflows: {count} x {dims}")))?;
    if data.len() != expected {
        return Err(corrupt(format!(
            "expected {expected} bytes for {count} x {dims}, found {}",
            data.len()
        ))
        .into());
    }

    let values = data[HEADER_LEN..]
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    Ok((count, dims, values))
}

/// Plain write into a staging directory; the parent must already exist.
fn write_synced(path: &Path, bytes: &[u8]) -> RecapResult<()> {
    let mut file = std::fs::File::create(path).map_err(|e| write_failed(path, e))?;
    file.write_all(bytes).map_err(|e| write_failed(path, e))?;
    file.sync_all().map_err(|e| write_failed(path, e))?;
    Ok(())
}

fn header_field(value: usize, name: &str) -> RecapResult<u32> {
    u32::try_from(value).map_err(|_| corrupt(format!("{name} {value} does not fit in u32")).into())
}

fn corrupt(details: String) -> IndexError {
    IndexError::Corrupt { details }
}

fn load_failed(path: &Path, e: std::io::Error) -> IndexError {
    IndexError::LoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

fn write_failed(path: &Path, e: std::io::Error) -> IndexError {
    IndexError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_file_is_corrupt() {
        assert!(decode_vectors(&[1, 0, 0]).is_err());
    }

    #[test]
    fn body_length_must_match_header() {
        let mut data = Vec::new();
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&3u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 4 * 5]);
        let err = decode_vectors(&data).unwrap_err();
        assert!(err.to_string().contains("expected 32 bytes"));
    }

    #[test]
    fn header_is_little_endian() {
        let mut index = FlatL2Index::new(2);
        index.add(0, &[1.0, -2.5]).unwrap();
        let bytes = encode_vectors(&index).unwrap();
        assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[4..8], &[2, 0, 0, 0]);
        assert_eq!(&bytes[12..16], &(-2.5f32).to_le_bytes());
    }

    #[test]
    fn generation_names_are_strict() {
        assert_eq!(generation_number("gen-000007"), Some(7));
        assert_eq!(generation_number("gen-"), None);
        assert_eq!(generation_number("gen-../x"), None);
        assert_eq!(generation_number(".staging-abc"), None);
    }
}

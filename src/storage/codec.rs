use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::core::error::{Error, ErrorKind, Result};
use crate::index::generation::IndexGeneration;
use crate::storage::layout::StorageLayout;

/// Frame header: crc32 of the payload followed by its length.
const HEADER_LEN: usize = 4 + 8;

/// Persists a finished generation: checksummed image written to a temp
/// file and renamed into place, then the current pointer updated the same
/// way, then superseded images pruned. If any step before the pointer
/// update fails, the previously committed generation stays authoritative.
pub fn persist(layout: &StorageLayout, generation: &IndexGeneration) -> Result<()> {
    let payload = bincode::serialize(generation)?;
    write_framed(&layout.generation_path(generation.version), &payload)?;

    let pointer = bincode::serialize(&generation.version)?;
    write_framed(&layout.current_path(), &pointer)?;

    prune_older(layout, generation.version);
    Ok(())
}

/// Loads the committed current generation, if one exists. A checksum or
/// decode failure surfaces as `Corrupt` rather than serving a half image.
pub fn load_current(layout: &StorageLayout) -> Result<Option<IndexGeneration>> {
    let current_path = layout.current_path();
    if !current_path.exists() {
        return Ok(None);
    }

    let pointer = read_framed(&current_path)?;
    let version: u64 = bincode::deserialize(&pointer)?;

    let payload = read_framed(&layout.generation_path(version))?;
    let mut generation: IndexGeneration = bincode::deserialize(&payload)?;
    generation.rebuild_prefix()?;
    Ok(Some(generation))
}

fn write_framed(path: &Path, payload: &[u8]) -> Result<()> {
    let tmp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&tmp_path).map_err(|e| storage_err(&tmp_path, e))?;
        let crc = crc32fast::hash(payload);
        file.write_all(&crc.to_le_bytes())
            .map_err(|e| storage_err(&tmp_path, e))?;
        file.write_all(&(payload.len() as u64).to_le_bytes())
            .map_err(|e| storage_err(&tmp_path, e))?;
        file.write_all(payload)
            .map_err(|e| storage_err(&tmp_path, e))?;
        file.sync_all().map_err(|e| storage_err(&tmp_path, e))?;
    }
    fs::rename(&tmp_path, path).map_err(|e| storage_err(path, e))
}

fn read_framed(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| storage_err(path, e))?;
    let mut header = [0u8; HEADER_LEN];
    file.read_exact(&mut header)
        .map_err(|_| corrupt(path, "truncated header"))?;

    let crc = u32::from_le_bytes(header[0..4].try_into().unwrap_or_default());
    let len = u64::from_le_bytes(header[4..12].try_into().unwrap_or_default());

    let mut payload = vec![0u8; len as usize];
    file.read_exact(&mut payload)
        .map_err(|_| corrupt(path, "truncated payload"))?;

    if crc32fast::hash(&payload) != crc {
        return Err(corrupt(path, "checksum mismatch"));
    }
    Ok(payload)
}

/// Best effort: a leftover file never blocks a commit.
fn prune_older(layout: &StorageLayout, current_version: u64) {
    let keep = layout.generation_path(current_version);
    let Ok(entries) = fs::read_dir(&layout.generations_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path != keep && path.extension().is_some_and(|ext| ext == "gen") {
            let _ = fs::remove_file(path);
        }
    }
}

fn storage_err(path: &Path, err: std::io::Error) -> Error {
    Error::new(
        ErrorKind::Storage,
        format!("{}: {}", path.display(), err),
    )
}

fn corrupt(path: &Path, what: &str) -> Error {
    Error::new(
        ErrorKind::Corrupt,
        format!("{}: {}", path.display(), what),
    )
}

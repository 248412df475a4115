use std::{fs, path::Path};

use crate::error::{Error, Result};

pub type OutputId = u64;

/// Marker a filename must contain to be treated as a previous output
pub const EXPORT_MARKER: &str = "export";
pub const EXPORT_EXTENSION: &str = "png";

pub fn output_file_name(id: OutputId) -> String {
    return format!("{EXPORT_MARKER}_{id}.{EXPORT_EXTENSION}");
}

/// Extracts the id from a name following `<name>_<id>.<ext>`.
///
/// Returns `Ok(None)` for names that are not outputs at all, and
/// `MalformedOutputFilename` for outputs whose id can't be read.
/// Ids are unsigned 64-bit: negative ids and ids above `u64::MAX`
/// count as malformed
pub fn parse_output_id(file_name: &str) -> Result<Option<OutputId>> {
    if !file_name.contains(EXPORT_MARKER) {
        return Ok(None);
    }
    let stem = file_name.split('.').next().unwrap_or_default();
    return stem
        .split('_')
        .nth(1)
        .and_then(|id| id.parse::<OutputId>().ok())
        .map(Some)
        .ok_or_else(|| Error::MalformedOutputFilename(file_name.to_string()));
}

/// One more than the largest id among `file_names`
pub fn next_output_id<I, S>(file_names: I) -> Result<OutputId>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut max_id: Option<OutputId> = None;
    for name in file_names {
        if let Some(id) = parse_output_id(name.as_ref())? {
            log::debug!("found output {} with id {id}", name.as_ref());
            max_id = max_id.max(Some(id));
        }
    }
    let max_id = max_id.ok_or(Error::NoExistingOutputs)?;
    return max_id
        .checked_add(1)
        .ok_or_else(|| Error::MalformedOutputFilename(output_file_name(max_id)));
}

/// Names of every entry in `dir`, files and directories alike
pub fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    log::debug!("{} entries in {}", names.len(), dir.display());
    return Ok(names);
}

pub fn allocate(dir: &Path) -> Result<OutputId> {
    return next_output_id(list_dir(dir)?);
}

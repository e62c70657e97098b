// src/file.rs

use std::{
    fs::{self, File},
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::csv::write_offers;
use crate::error::ExportError;
use crate::offer::JobOffer;

/// Write the CSV dump to `path`, replacing whatever was there.
/// Returns the path written to.
pub fn export_offers(path: &Path, offers: &[JobOffer]) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path).map_err(|e| io_err(path, e))?; // truncate/overwrite
    write_offers(BufWriter::new(file), offers)?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        let e = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(io_err(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    Ok(())
}

fn io_err(path: &Path, source: std::io::Error) -> ExportError {
    ExportError::Io { path: path.display().to_string(), source }
}

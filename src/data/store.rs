use crate::{data::tokenize, error::TokenError};

use candle_core::{Device, Tensor};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

pub const NPY_EXTENSION: &str = "npy";

// The destination may be given as a stem; like numpy, append ".npy" unless it is already there.
pub fn output_path(destination: &Path) -> PathBuf {
    if destination.extension().is_some_and(|ext| ext == NPY_EXTENSION) {
        return destination.to_path_buf();
    }

    let mut path = OsString::from(destination.as_os_str());
    path.push(".");
    path.push(NPY_EXTENSION);
    PathBuf::from(path)
}

// Save the tokens as a 1-D int32 npy array and return the path written.
//
// The array goes to a temporary file next to the destination first and is only moved into place
// once fully written, so a failed run never leaves a truncated array behind.
pub fn write_tokens(tokens: &[i32], destination: &Path) -> Result<PathBuf, TokenError> {
    let path = output_path(destination);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tensor = tokenize::to_tensor(tokens, &Device::Cpu)?;

    let staging = staging_file(dir).map_err(|e| TokenError::output(&path, e))?;
    tensor.write_npy(staging.path()).map_err(|e| write_error(&path, e))?;
    staging.persist(&path).map_err(|e| TokenError::output(&path, e.error))?;

    Ok(path)
}

// Temporary files default to 0600. Ask for 0666 so the umask decides, the same as a plain
// File::create would.
#[cfg(unix)]
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    Builder::new().prefix(".eotoken").permissions(Permissions::from_mode(0o666)).tempfile_in(dir)
}

#[cfg(not(unix))]
fn staging_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().prefix(".eotoken").tempfile_in(dir)
}

// I/O failures while writing the array belong to the destination, not to the tensor.
fn write_error(path: &Path, err: candle_core::Error) -> TokenError {
    match err {
        candle_core::Error::Io(source) => TokenError::output(path, source),
        other => TokenError::Tensor(other),
    }
}

// Load a token array written by write_tokens.
pub fn read_tokens(path: &Path) -> Result<Vec<i32>, TokenError> {
    let tensor = Tensor::read_npy(path)?;
    Ok(tensor.flatten_all()?.to_vec1::<i32>()?)
}

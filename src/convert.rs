use crate::{
    decode::{default_decoder, Decoder, DocumentValue},
    error::Error,
    transcode,
};
use std::{
    ffi::OsString,
    fs::{self, File},
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Converts the YAML document at `path` into `<path>.json` using the
/// build's default decoder.
pub fn convert(path: impl AsRef<Path>) -> Result<PathBuf, Error> {
    convert_with(default_decoder(), path.as_ref())
}

pub fn convert_with(decoder: &dyn Decoder, path: &Path) -> Result<PathBuf, Error> {
    let value = read_document(decoder, path)?;
    let out_path = output_path(path);
    write_document(&value, &out_path)?;
    Ok(out_path)
}

/// Appends `.json` to the full file name: `foo.yaml` becomes `foo.yaml.json`.
pub fn output_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".json");
    PathBuf::from(name)
}

fn read_document(decoder: &dyn Decoder, path: &Path) -> Result<DocumentValue, Error> {
    let text = {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| Error::io(path, e))?;
        text
    };
    let value = decoder.decode(&text).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), decoder = decoder.name(), "decoded YAML document");
    Ok(value)
}

fn write_document(value: &DocumentValue, out_path: &Path) -> Result<(), Error> {
    let file = File::create(out_path).map_err(|e| Error::io(out_path, e))?;
    debug!(path = %out_path.display(), "opened output file");
    // declared before the writer so the handle is closed before removal
    let guard = RemoveOnDrop::new(out_path);
    let mut writer = BufWriter::new(file);
    transcode::to_writer(&mut writer, value).map_err(|source| Error::Encode {
        path: out_path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| Error::io(out_path, e))?;
    drop(writer);
    guard.disarm();
    debug!(path = %out_path.display(), "wrote JSON document");
    Ok(())
}

/// Removes a partially written file unless disarmed.
struct RemoveOnDrop {
    path: Option<PathBuf>,
}

impl RemoveOnDrop {
    fn new(path: &Path) -> Self {
        Self {
            path: Some(path.to_path_buf()),
        }
    }

    fn disarm(mut self) {
        self.path = None;
    }
}

impl Drop for RemoveOnDrop {
    fn drop(&mut self) {
        let Some(path) = self.path.take() else {
            return;
        };
        debug!(path = %path.display(), "removing partial output file");
        if let Err(e) = fs::remove_file(&path) {
            warn!(path = %path.display(), error = %e, "failed to remove partial output file");
        }
    }
}

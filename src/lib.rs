use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Serializer;
use thiserror::Error;

mod formatter;

pub use formatter::SpacedAsciiFormatter;

/// Certificate read by the converter, relative to the working directory.
pub const INPUT_PATH: &str = "./ca-cert";
/// JSON document written by the converter, relative to the working directory.
pub const OUTPUT_PATH: &str = "./ca-cert.json";

#[derive(Error, Debug)]
pub enum FileAccessError {
    #[error("Failed to read certificate from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write JSON payload to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileAccessError {
    fn read(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| FileAccessError::Read {
            path: path.to_owned(),
            source,
        }
    }

    fn write(path: &Path) -> impl FnOnce(io::Error) -> Self + '_ {
        move |source| FileAccessError::Write {
            path: path.to_owned(),
            source,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Payload {
    pub cert: String,
}

impl Payload {
    /// Reads the whole file as UTF-8 text. The content is not inspected.
    pub fn load(path: &Path) -> Result<Self, FileAccessError> {
        let cert = fs::read_to_string(path).map_err(FileAccessError::read(path))?;
        debug!("Read {} bytes from {}", cert.len(), path.display());
        Ok(Payload { cert })
    }

    pub fn to_json(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, SpacedAsciiFormatter);
        self.serialize(&mut serializer)?;
        Ok(buffer)
    }

    /// Creates or truncates `path` and writes the JSON document into it.
    pub fn store(&self, path: &Path) -> Result<(), FileAccessError> {
        let json = self.to_json().map_err(FileAccessError::write(path))?;
        let mut file = File::create(path).map_err(FileAccessError::write(path))?;
        file.write_all(&json).map_err(FileAccessError::write(path))?;
        debug!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(())
    }
}

/// Wraps the text of `input` into `{"cert": ...}` and writes it to `output`.
///
/// The input is read completely before `output` is opened, so a failed read
/// leaves `output` untouched.
pub fn convert(input: &Path, output: &Path) -> Result<(), FileAccessError> {
    let payload = Payload::load(input)?;
    payload.store(output)?;
    info!("Converted {} to {}", input.display(), output.display());
    Ok(())
}

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use cgen_model::{Config, TranslationUnit};
use log::info;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("{path}: {source}")]
    Model {
        path: String,
        #[source]
        source: cgen_model::Error,
    },
}

/// Manifest text from a file, or from stdin when `path` is `-`.
pub fn read_manifest(path: &Path) -> Result<String, LoadError> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.display().to_string(),
        source,
    })
}

pub fn load_unit(path: &Path, config: &Config) -> Result<TranslationUnit, LoadError> {
    let json = read_manifest(path)?;
    let unit = cgen_model::manifest::load(&json, config).map_err(|source| LoadError::Model {
        path: display_name(path),
        source,
    })?;
    info!(
        "loaded {} declarations from {}",
        unit.len(),
        display_name(path)
    );
    Ok(unit)
}

fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

use crate::Error;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Produces the raw bytes of an export given its path or resource name.
///
/// This is the only point at which a run waits on the outside world. The whole payload
/// is returned at once; failures are reported immediately and never retried.
pub trait CorpusSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, Error>;
}

/// Reads exports from the local filesystem, optionally relative to a base directory.
#[derive(Clone, Debug, Default)]
pub struct FileSource {
    base_dir: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_dir {
            Some(base_dir) => base_dir.join(path),
            None => PathBuf::from(path),
        }
    }
}

impl CorpusSource for FileSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, Error> {
        let resolved_path = self.resolve(path);

        debug!("Reading {:?}", resolved_path);

        fs::read(&resolved_path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => {
                Error::FetchError(format!("Resource not found: {}", resolved_path.display()))
            }
            _ => Error::IoError(err),
        })
    }
}

/// Serves exports held in memory, keyed by resource name.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    resources: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.resources.insert(path.into(), bytes.into());
    }
}

impl CorpusSource for MemorySource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, Error> {
        self.resources
            .get(path)
            .cloned()
            .ok_or_else(|| Error::FetchError(format!("Resource not found: {}", path)))
    }
}

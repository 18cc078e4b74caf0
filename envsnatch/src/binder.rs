use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    error::{BindErrors, BindingError},
    schema::Bind,
    source::{self, Environment},
};

/// Populates [`Bind`] structs from the process environment or a `.env` file.
///
/// When both a directory and a file name are set, values come from
/// `directory/file_name` only. Otherwise the process environment is
/// snapshotted at the start of every [`bind`](Binder::bind). The process
/// environment is never written to.
///
/// Values in the file may reference other variables as `$VAR` or `${VAR}`.
/// These are expanded while the file is read, from the process environment
/// first and then from pairs earlier in the file, so a file value can still
/// carry a process variable.
#[derive(Debug, Default)]
pub struct Binder {
    environment: Environment,
    errors: Vec<BindingError>,
    directory: PathBuf,
    file_name: PathBuf,
}

impl Binder {
    /// An empty binder that reads the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the environment file.
    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) {
        self.directory = directory.into();
    }

    /// Name of the environment file inside the directory.
    pub fn set_file_name(&mut self, file_name: impl Into<PathBuf>) {
        self.file_name = file_name.into();
    }

    pub fn directory(&self) -> Option<&Path> {
        non_empty(&self.directory)
    }

    pub fn file_name(&self) -> Option<&Path> {
        non_empty(&self.file_name)
    }

    /// The environment file that will be read, if both parts are configured.
    pub fn env_file(&self) -> Option<PathBuf> {
        Some(self.directory()?.join(self.file_name()?))
    }

    /// Errors from the most recent call to [`bind`](Binder::bind).
    pub fn errors(&self) -> &[BindingError] {
        &self.errors
    }

    /// The key/value table resolved by the most recent call to
    /// [`bind`](Binder::bind).
    pub fn environment(&self) -> &HashMap<String, String> {
        &self.environment
    }

    /// Bind every field of `destination` described by its schema.
    ///
    /// Fields are written in place. A missing required variable is recorded
    /// and binding carries on with the remaining fields; a value that fails to
    /// parse leaves its field as it was without recording anything. If any
    /// field was missing, the full list is returned as [`BindErrors`] and is
    /// also available from [`errors`](Binder::errors).
    pub fn bind<T: Bind>(&mut self, destination: &mut T) -> Result<(), BindErrors> {
        self.errors.clear();
        self.resolve_environment();

        let schema = T::schema();

        for field in schema.fields() {
            let spec = field.spec();

            match self.environment.get(spec.source_key()) {
                Some(raw) => field.assign(destination, raw),
                None if spec.optional() => {}
                None => self.errors.push(BindingError::required(spec.source_key())),
            }
        }

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(BindErrors::new(self.errors.clone()))
        }
    }

    fn resolve_environment(&mut self) {
        self.environment.clear();

        // A file that fails to load does not fall back to the process
        // environment; whatever was read before the failure is all there is.
        if let Some(path) = self.env_file() {
            match source::load_file(&path, &mut self.environment) {
                Ok(()) => {
                    debug!(
                        path = %path.display(),
                        vars = self.environment.len(),
                        "Loaded environment file"
                    );
                }
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        vars = self.environment.len(),
                        "Failed to load environment file, process environment is not consulted"
                    );
                }
            }
        } else {
            source::load_process(&mut self.environment);
            debug!(vars = self.environment.len(), "Snapshotted process environment");
        }
    }
}

fn non_empty(path: &Path) -> Option<&Path> {
    (!path.as_os_str().is_empty()).then_some(path)
}

//! Loaders that fill the binder's private key/value table.
use std::{collections::HashMap, path::Path};

pub(crate) type Environment = HashMap<String, String>;

/// Snapshot the process environment. Pairs that aren't valid UTF-8 are
/// skipped.
pub(crate) fn load_process(environment: &mut Environment) {
    let pairs = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));

    environment.extend(pairs);
}

/// Read a `.env` file into `environment` without touching the process
/// environment.
///
/// Pairs read before a parse error stay in the table.
pub(crate) fn load_file(path: &Path, environment: &mut Environment) -> dotenvy::Result<()> {
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        environment.insert(key, value);
    }
    Ok(())
}

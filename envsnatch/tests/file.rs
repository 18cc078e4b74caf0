use std::fs;

use envsnatch::{Bind, Binder};
use tempfile::TempDir;

#[derive(Bind, Default, Debug, PartialEq)]
pub struct Config {
    #[env("DATABASE_URL")]
    database_url: String,
    #[env("PORT,optional")]
    port: u16,
}

fn env_dir(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), contents).unwrap();
    dir
}

#[test]
fn binds_from_env_file() {
    let dir = env_dir("DATABASE_URL=postgres://postgres@postgres/postgres\nPORT=5432\n");

    let mut binder = Binder::new();
    binder.set_directory(dir.path());
    binder.set_file_name(".env");
    let mut config = Config::default();

    let result = temp_env::with_vars_unset(["DATABASE_URL", "PORT"], || binder.bind(&mut config));

    assert!(result.is_ok());
    assert_eq!(
        Config {
            database_url: "postgres://postgres@postgres/postgres".into(),
            port: 5432,
        },
        config
    );
}

#[test]
fn env_file_replaces_process_environment() {
    let dir = env_dir("DATABASE_URL=from-file\n");

    let mut binder = Binder::new();
    binder.set_directory(dir.path());
    binder.set_file_name(".env");
    let mut config = Config::default();

    let result = temp_env::with_vars(
        [("DATABASE_URL", Some("from-process")), ("PORT", Some("8080"))],
        || binder.bind(&mut config),
    );

    assert!(result.is_ok());
    assert_eq!("from-file", config.database_url);
    assert_eq!(0, config.port);
}

#[test]
fn env_file_references_expand_from_process_environment() {
    let dir = env_dir("DATABASE_URL=postgres://${DB_HOST}/app\n");

    let mut binder = Binder::new();
    binder.set_directory(dir.path());
    binder.set_file_name(".env");
    let mut config = Config::default();

    let result = temp_env::with_vars(
        [("DB_HOST", Some("db.internal")), ("DATABASE_URL", None)],
        || binder.bind(&mut config),
    );

    assert!(result.is_ok());
    assert_eq!("postgres://db.internal/app", config.database_url);
    assert!(!binder.environment().contains_key("DB_HOST"));
}

#[test]
fn missing_env_file_does_not_fall_back() {
    let dir = tempfile::tempdir().unwrap();

    let mut binder = Binder::new();
    binder.set_directory(dir.path());
    binder.set_file_name(".env");
    let mut config = Config::default();

    let errors = temp_env::with_var("DATABASE_URL", Some("from-process"), || {
        binder.bind(&mut config)
    })
    .unwrap_err();

    assert_eq!("DATABASE_URL", errors.errors()[0].field());
    assert!(binder.environment().is_empty());
    assert_eq!("", config.database_url);
}

#[test]
fn partially_parsed_env_file_keeps_leading_pairs() {
    let dir = env_dir("DATABASE_URL=from-file\nthis line is not a pair\nPORT=5432\n");

    let mut binder = Binder::new();
    binder.set_directory(dir.path());
    binder.set_file_name(".env");
    let mut config = Config::default();

    let result = binder.bind(&mut config);

    assert!(result.is_ok());
    assert_eq!("from-file", config.database_url);
    assert_eq!(0, config.port);
}

#[test]
fn directory_alone_uses_process_environment() {
    let dir = env_dir("DATABASE_URL=from-file\n");

    let mut binder = Binder::new();
    binder.set_directory(dir.path());
    let mut config = Config::default();

    assert_eq!(None, binder.env_file());

    let result = temp_env::with_var("DATABASE_URL", Some("from-process"), || {
        binder.bind(&mut config)
    });

    assert!(result.is_ok());
    assert_eq!("from-process", config.database_url);
}

#[test]
fn env_file_path_joins_directory_and_file_name() {
    let mut binder = Binder::new();
    binder.set_directory("/etc/app");
    binder.set_file_name("app.env");

    assert_eq!(
        Some(std::path::PathBuf::from("/etc/app/app.env")),
        binder.env_file()
    );
}

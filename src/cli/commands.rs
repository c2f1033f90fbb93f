//! CLI command implementations

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::HttpServer;
use crate::config::ServerConfig;
use crate::observability::Logger;
use crate::store::{SeedDocument, TicketStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse command line arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Execute a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, data } => serve(config.as_deref(), data),
        Command::Check { data } => check(&data),
    }
}

/// Boot the store from the seed document and serve the HTTP API until
/// the process is stopped.
fn serve(config_path: Option<&Path>, data_override: Option<PathBuf>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(data_path) = data_override {
        config.data_path = data_path;
    }

    let store = load_store(&config.data_path)?;
    let server = HttpServer::new(config, Arc::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// One-shot document validation: load, merge, report counts.
fn check(data_path: &Path) -> CliResult<()> {
    let document = SeedDocument::load(data_path)?;
    let (helptickets, reviews) = document.collection_counts();
    let store = TicketStore::from_document(document)?;

    println!(
        "{}: {} tickets ({} helptickets, {} reviews)",
        data_path.display(),
        store.len(),
        helptickets,
        reviews
    );

    Ok(())
}

/// Loads and merges the seed document into a store, logging the merge
/// so the legacy-collection unification is visible at startup.
fn load_store(data_path: &Path) -> CliResult<TicketStore> {
    let document = SeedDocument::load(data_path)?;
    let (helptickets, reviews) = document.collection_counts();
    let store = TicketStore::from_document(document)?;

    let path = data_path.display().to_string();
    let tickets = store.len().to_string();
    let helptickets = helptickets.to_string();
    let reviews = reviews.to_string();
    Logger::info(
        "DOCUMENT_LOADED",
        &[
            ("helptickets", helptickets.as_str()),
            ("path", path.as_str()),
            ("reviews", reviews.as_str()),
            ("tickets", tickets.as_str()),
        ],
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn document_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_check_valid_document() {
        let file = document_file(
            r#"{"helptickets": {"ab12cd": {"title": "t", "author": "a", "priority": 1, "time": 2}}}"#,
        );

        assert!(check(file.path()).is_ok());
    }

    #[test]
    fn test_check_missing_document() {
        let err = check(Path::new("/nonexistent/data.jsonld")).unwrap_err();

        assert_eq!(err.code(), crate::cli::CliErrorCode::DocumentError);
    }

    #[test]
    fn test_check_duplicate_ids() {
        let file = document_file(
            r#"{
                "helptickets": {"ab12cd": {"title": "t", "author": "a", "priority": 1, "time": 2}},
                "reviews": {"ab12cd": {"title": "u", "author": "b", "priority": 3, "time": 4}}
            }"#,
        );

        let err = check(file.path()).unwrap_err();

        assert!(err.message().contains("duplicate ticket id"));
    }

    #[test]
    fn test_load_store_merges_collections() {
        let file = document_file(
            r#"{
                "helptickets": {"aaaaaa": {"title": "t", "author": "a", "priority": 1, "time": 2}},
                "reviews": {"bbbbbb": {"title": "u", "author": "b", "priority": 3, "time": 4}}
            }"#,
        );

        let store = load_store(file.path()).unwrap();

        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_serve_with_missing_config() {
        let err = serve(Some(Path::new("/nonexistent/config.json")), None).unwrap_err();

        assert_eq!(err.code(), crate::cli::CliErrorCode::ConfigError);
    }
}

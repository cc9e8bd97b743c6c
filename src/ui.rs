// UI layer: password prompt, a spinner while the request runs, logging
// setup and the one-line outcome messages printed by the binaries.

use crate::api::ControllerClient;
use crate::credential::Credential;
use crate::error::TransferError;
use anyhow::Result;
use dialoguer::Password;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Ask for the controller password with hidden input. An empty answer is
/// accepted; download rejects it later, upload lets the controller decide.
pub fn prompt_password() -> Result<String> {
    let secret = Password::new()
        .with_prompt("Enter the password")
        .allow_empty_password(true)
        .interact()?;
    Ok(secret)
}

/// Spinner shown while the HTTP call is in flight. Call
/// `finish_and_clear` before printing the outcome.
pub fn spinner(msg: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Diagnostics go to stderr so they never mix with the outcome lines.
/// Filter comes from `RUST_LOG`, default `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn download_start_message(redacted_url: &str) -> String {
    format!("[INFO] Downloading sensores.json from {} ...", redacted_url)
}

/// The `[INFO]` line printed before a download, or `None` when the download
/// is going to fail before any request (no password, unusable host).
pub fn download_start_line(client: &ControllerClient, credential: &Credential) -> Option<String> {
    if credential.is_empty() {
        return None;
    }
    let url = client.redacted_sensors_url().ok()?;
    Some(download_start_message(url.as_str()))
}

pub fn download_outcome_message(result: &Result<PathBuf, TransferError>) -> String {
    match result {
        Ok(path) => format!("[OK] File {} saved successfully.", path.display()),
        Err(TransferError::EmptyCredential) => {
            "[FALHA] ESP_PASS is not set and no password was entered.".to_string()
        }
        Err(e) => format!("[ERRO] Download failed: {}", e),
    }
}

pub fn upload_outcome_message(result: &Result<String, TransferError>, path: &Path) -> String {
    match result {
        Ok(_) => "[OK] Upload sent successfully.".to_string(),
        Err(TransferError::MissingFile(_)) => {
            format!("[ERRO] File '{}' not found.", path.display())
        }
        Err(TransferError::Status { status, body }) => {
            format!("[ERRO] Upload failed: {} - {}", status.as_u16(), body)
        }
        Err(e @ (TransferError::Io { .. } | TransferError::InvalidHost { .. })) => {
            format!("[ERRO] {}", e)
        }
        Err(e) => format!("[FALHA] Communication error with the controller: {}", e),
    }
}

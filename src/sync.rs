// Download and upload of the local sensors file. These functions do the
// work and return a result; printing is left to `ui`.

use crate::api::ControllerClient;
use crate::config::Config;
use crate::credential::Credential;
use crate::error::TransferError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fetch the controller's sensors document and write it to `config.file`,
/// pretty-printed with two-space indentation. The local file is only
/// touched once the whole response has been parsed.
pub fn download(
    client: &ControllerClient,
    credential: &Credential,
    config: &Config,
) -> Result<PathBuf, TransferError> {
    if credential.is_empty() {
        return Err(TransferError::EmptyCredential);
    }

    let document = client.fetch_sensors(credential, config.download_timeout)?;
    let text = serde_json::to_string_pretty(&document).map_err(TransferError::InvalidJson)?;
    fs::write(&config.file, text).map_err(|e| TransferError::io(&config.file, e))?;

    info!(path = %config.file.display(), "sensors saved");
    Ok(config.file.clone())
}

/// Send the raw bytes of `path` to the controller. The content is not
/// checked; the controller stores whatever it receives.
pub fn upload(
    client: &ControllerClient,
    credential: &Credential,
    path: &Path,
) -> Result<String, TransferError> {
    if !path.exists() {
        return Err(TransferError::MissingFile(path.to_path_buf()));
    }

    let body = fs::read(path).map_err(|e| TransferError::io(path, e))?;
    info!(path = %path.display(), len = body.len(), "uploading sensors");
    client.push_sensors(credential, body)
}

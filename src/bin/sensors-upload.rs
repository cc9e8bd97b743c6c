// Entrypoint for `sensors-upload`.
// - Sends the local sensores.json to the controller byte-for-byte.
// - No arguments: `ESP_PASS`, `ESP_HOST` and `SENSORES_FILE` drive it.

use sensores_sync::api::ControllerClient;
use sensores_sync::config::Config;
use sensores_sync::credential::Credential;
use sensores_sync::{sync, ui};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    ui::init_logging();

    let credential = Credential::from_env_or_prompt()?;
    let config = Config::from_env();
    let client = ControllerClient::new(&config)?;

    let spinner = ui::spinner("Uploading...");
    let result = sync::upload(&client, &credential, &config.file);
    spinner.finish_and_clear();

    println!("{}", ui::upload_outcome_message(&result, &config.file));
    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

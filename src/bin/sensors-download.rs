// Entrypoint for `sensors-download`.
// - Fetches sensores.json from the controller and writes it locally.
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

    if let Some(line) = ui::download_start_line(&client, &credential) {
        println!("{}", line);
    }

    let spinner = ui::spinner("Downloading...");
    let result = sync::download(&client, &credential, &config);
    spinner.finish_and_clear();

    println!("{}", ui::download_outcome_message(&result));
    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

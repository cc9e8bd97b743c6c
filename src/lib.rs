// Library root
// -----------
// This crate exposes the pieces shared by the two binaries
// (`sensors-download` and `sensors-upload`). Each binary is a straight
// line: get the password, build the request, do one HTTP call, print
// the result.
//
// Module responsibilities:
// - `config`: controller host, local file path and timeouts, read from
//   the environment.
// - `credential`: the controller password (`ESP_PASS` or a prompt).
// - `api`: the blocking HTTP client that talks to the controller.
// - `sync`: the download/upload operations on the local file.
// - `ui`: prompt, spinner, logging setup and the printed outcome lines.
// - `error`: the error type shared by `api` and `sync`.
pub mod api;
pub mod config;
pub mod credential;
pub mod error;
pub mod sync;
pub mod ui;

pub use error::TransferError;

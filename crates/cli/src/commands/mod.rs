pub mod categories;
pub mod price;
pub mod search;

use std::fs;
use std::path::Path;

use serde::Serialize;
use storefront_core::Catalog;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandFailure {
    command: String,
    status: String,
    error_class: String,
    message: String,
}

impl CommandResult {
    pub fn report<T: Serialize>(payload: &T) -> Self {
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandFailure {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: error_class.to_string(),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(&payload) }
    }
}

fn serialize_payload<T: Serialize>(payload: &T) -> String {
    serde_json::to_string(payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// The bundled demo catalog when no path is given, otherwise the decoded and
/// validated JSON file.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        None => Ok(Catalog::demo()),
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|error| format!("could not read catalog `{}`: {error}", path.display()))?;
            Catalog::from_json(&json).map_err(|error| error.to_string())
        }
    }
}

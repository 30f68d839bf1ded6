use std::process::ExitCode;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::CommandError;

/// The whole document printed when a script fails.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// JSON indented by four spaces.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match to_json(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Could not serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}

pub fn print_error(message: impl Into<String>) -> ExitCode {
    print_json(&ErrorPayload::new(message));
    ExitCode::FAILURE
}

pub fn print_result<T: Serialize>(result: Result<T, CommandError>) -> ExitCode {
    match result {
        Ok(value) => print_json(&value),
        Err(e) => print_error(e.to_string()),
    }
}

//! Process boundary: request bytes in, response bytes out.
//!
//! The whole request is read before anything is generated and the whole
//! response is written in one go. Anything that goes wrong before the
//! response exists is turned into a response carrying the error; only a
//! failure to deliver the response itself is returned to the caller.

use std::io::{self, Read, Write};

use thiserror::Error;
use tracing::{error, info};

use crate::generate::generate;
use crate::schema::wire::{decode_request, encode_response};
use crate::schema::{CompilationRequest, CompilationResponse};

/// Environment variable holding the log filter of the plugin binary.
pub const LOG_ENV_VAR: &str = "PROTOC_GEN_PIPE_LOG";

/// Errors at the process boundary.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("failed to read request: {0}")]
    Read(#[source] io::Error),

    #[error("failed to decode request: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("failed to write response: {0}")]
    Write(#[source] io::Error),
}

/// How a delivered response ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The response carries artifacts only.
    Succeeded,
    /// The response carries an error for the host compiler to report.
    Reported,
}

/// Read and decode a whole request.
pub fn read_request(mut input: impl Read) -> Result<CompilationRequest, PluginError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes).map_err(PluginError::Read)?;
    Ok(decode_request(&bytes)?)
}

/// Encode and write a whole response.
pub fn write_response(
    mut output: impl Write,
    response: &CompilationResponse,
) -> Result<(), PluginError> {
    output
        .write_all(&encode_response(response))
        .and_then(|()| output.flush())
        .map_err(PluginError::Write)
}

/// Turn request bytes into a response, folding input errors into it.
pub fn process(input: impl Read) -> CompilationResponse {
    match read_request(input) {
        Ok(request) => {
            info!("Converting input");
            generate(&request)
        }
        Err(err) => {
            error!("Can't read input: {err}");
            CompilationResponse::failed(format!("Failed to read input: {err}"))
        }
    }
}

/// Handle one request from `input` and write its response to `output`.
pub fn run(input: impl Read, output: impl Write) -> Result<Outcome, PluginError> {
    info!("Processing code generator request");
    let response = process(input);

    info!("Serializing code generator response");
    write_response(output, &response)?;

    if response.is_success() {
        info!("Succeeded to process code generator request");
        Ok(Outcome::Succeeded)
    } else {
        info!("Failed to process code generator request but sent the error to protoc");
        Ok(Outcome::Reported)
    }
}

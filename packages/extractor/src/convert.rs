//! External document-to-text conversion.
//!
//! Conversion shells out to an external command (`pdftotext` by default)
//! invoked as `<cmd> <input> <output>`. Existing output files are reused as
//! a cache; converters can hang on malformed input, so every invocation
//! runs under a deadline.

use std::path::Path;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, Result};

/// Convert `input` to plain text at `output` and return the text.
///
/// A missing input is [`ExtractorError::MissingSource`]. An already-present
/// output file short-circuits the converter and is read back directly.
pub async fn convert_to_text(
    input: &Path,
    output: &Path,
    config: &ExtractorConfig,
) -> Result<String> {
    if !input.exists() {
        return Err(ExtractorError::MissingSource {
            path: input.to_path_buf(),
        });
    }

    if output.exists() {
        warn!(output = %output.display(), "Output file already exists, reusing");
        return Ok(tokio::fs::read_to_string(output).await?);
    }

    debug!(
        command = %config.converter_command,
        input = %input.display(),
        "Running text converter"
    );

    // The converter writes its result to the output file; stdout is noise
    // and an unread pipe would block a chatty converter.
    let mut child = Command::new(&config.converter_command)
        .arg(input)
        .arg(output)
        .kill_on_drop(true)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .map_err(|e| ExtractorError::Conversion {
            command: config.converter_command.clone(),
            detail: e.to_string(),
        })?;

    let deadline = Duration::from_secs(config.converter_timeout_secs);
    let status = match tokio::time::timeout(deadline, child.wait()).await {
        Ok(status) => status?,
        Err(_) => {
            child.kill().await.ok();
            return Err(ExtractorError::ConversionTimeout {
                command: config.converter_command.clone(),
                seconds: config.converter_timeout_secs,
            });
        }
    };

    if !status.success() {
        let mut detail = format!("exit status {status}");
        if let Some(mut stderr) = child.stderr.take() {
            use tokio::io::AsyncReadExt;
            let mut buf = String::new();
            if stderr.read_to_string(&mut buf).await.is_ok() && !buf.trim().is_empty() {
                detail = buf.trim().to_string();
            }
        }
        return Err(ExtractorError::Conversion {
            command: config.converter_command.clone(),
            detail,
        });
    }

    Ok(tokio::fs::read_to_string(output).await?)
}

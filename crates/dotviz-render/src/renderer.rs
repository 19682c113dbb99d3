//! Turning DOT text into an image with an external tool.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use dotviz_error::{Error, Result};

use crate::RenderConfig;

/// Renders DOT source into `destination` using the given output format
/// (`png`, `pdf`, `svg`, ...).
pub trait Renderer {
    fn render(&self, dot: &str, format: &str, destination: &Path) -> Result<()>;
}

/// Runs GraphViz `dot`.
///
/// The DOT source is written to a temporary file that is fed to `dot` on
/// stdin and removed when rendering returns, whether it succeeded or not.
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    config: RenderConfig,
}

impl DotRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }
}

impl Renderer for DotRenderer {
    fn render(&self, dot: &str, format: &str, destination: &Path) -> Result<()> {
        let mut source = tempfile::Builder::new()
            .prefix("gvz")
            .suffix(".dot")
            .tempfile()
            .map_err(|err| Error::from(err).with_operation("render::tempfile"))?;
        source
            .write_all(dot.as_bytes())
            .and_then(|_| source.flush())
            .map_err(|err| Error::from(err).with_operation("render::tempfile"))?;
        let input = source
            .reopen()
            .map_err(|err| Error::from(err).with_operation("render::tempfile"))?;

        let command = self.config.command_path();
        let mut output_arg = OsString::from("-o");
        output_arg.push(destination.as_os_str());

        tracing::debug!(
            command = %command.display(),
            format,
            destination = %destination.display(),
            source = %source.path().display(),
            "invoking renderer"
        );

        let output = Command::new(&command)
            .arg(format!("-T{format}"))
            .arg(output_arg)
            .stdin(Stdio::from(input))
            .output()
            .map_err(|err| {
                Error::from(err)
                    .with_operation("render::spawn")
                    .with_context("command", command.display().to_string())
            })?;

        if output.status.success() {
            return Ok(());
        }

        let captured = captured_output(&output.stdout, &output.stderr);
        tracing::warn!(
            status = %output.status,
            output = %captured,
            "renderer failed"
        );
        Err(Error::render_failed(captured)
            .with_operation("render::dot")
            .with_context("format", format)
            .with_context("status", output.status.to_string()))
    }
}

/// Join stdout and stderr the way a `2>&1` redirect would show them.
fn captured_output(stdout: &[u8], stderr: &[u8]) -> String {
    [stdout, stderr]
        .iter()
        .map(|bytes| String::from_utf8_lossy(bytes))
        .map(|text| text.trim_end().to_string())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

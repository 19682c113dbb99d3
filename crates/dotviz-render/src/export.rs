use std::path::Path;

use dotviz_core::Graph;
use dotviz_error::Result;

use crate::{DotRenderer, RenderConfig, Renderer};

/// Image export for anything that serializes to DOT.
pub trait Export {
    /// Render with GraphViz `dot` into `destination`.
    ///
    /// Fails with `RenderFailed`, carrying the tool's output, when `dot`
    /// exits with a non-zero status.
    fn export(&self, format: &str, destination: impl AsRef<Path>) -> Result<&Self>;

    /// Same as [`Export::export`] with a caller-supplied renderer.
    fn export_with(
        &self,
        renderer: &dyn Renderer,
        format: &str,
        destination: impl AsRef<Path>,
    ) -> Result<&Self>;
}

impl Export for Graph {
    fn export(&self, format: &str, destination: impl AsRef<Path>) -> Result<&Self> {
        let renderer = DotRenderer::new(RenderConfig::for_graph(self));
        self.export_with(&renderer, format, destination)
    }

    fn export_with(
        &self,
        renderer: &dyn Renderer,
        format: &str,
        destination: impl AsRef<Path>,
    ) -> Result<&Self> {
        let destination = destination.as_ref();
        tracing::debug!(graph = %self.name(), format, "export");

        renderer
            .render(&self.to_string(), format, destination)
            .map_err(|err| {
                err.with_operation("graph::export")
                    .with_context("graph", self.name())
            })?;
        Ok(self)
    }
}

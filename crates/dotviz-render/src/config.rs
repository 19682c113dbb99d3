//! Where to find the `dot` executable.

use std::path::{Path, PathBuf};

use dotviz_core::Graph;

/// Environment variable naming the directory that holds `dot`.
pub const PATH_ENV: &str = "DOTVIZ_DOT_PATH";

/// Renderer settings.
///
/// Resolution order: a path recorded on the graph with
/// [`Graph::set_path`], then [`PATH_ENV`], then `dot` from `PATH`.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    binary: String,
    path_prefix: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            binary: "dot".to_string(),
            path_prefix: None,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }

    /// Defaults plus [`PATH_ENV`], when it names a canonical directory.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var_os(PATH_ENV) {
            Some(dir) if is_canonical(Path::new(&dir)) => config.with_path_prefix(dir),
            Some(dir) => {
                tracing::warn!(
                    var = PATH_ENV,
                    path = %Path::new(&dir).display(),
                    "ignoring non-canonical dot path"
                );
                config
            }
            None => config,
        }
    }

    /// Settings for exporting `graph`, honouring the path it recorded.
    pub fn for_graph(graph: &Graph) -> Self {
        let config = Self::from_env();
        if graph.path().is_empty() {
            config
        } else {
            config.with_path_prefix(graph.path())
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn path_prefix(&self) -> Option<&Path> {
        self.path_prefix.as_deref()
    }

    /// The executable to spawn.
    pub fn command_path(&self) -> PathBuf {
        match &self.path_prefix {
            Some(prefix) => prefix.join(&self.binary),
            None => PathBuf::from(&self.binary),
        }
    }
}

fn is_canonical(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path.canonicalize().ok().as_deref().map(Path::as_os_str) == Some(path.as_os_str())
}

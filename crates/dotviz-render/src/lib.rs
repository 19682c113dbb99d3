//! Rendering dotviz graphs to image files.
//!
//! The only part of dotviz that needs GraphViz installed. [`Export`] adds
//! `export(format, destination)` to [`dotviz_core::Graph`]; the heavy lifting
//! is done by a [`Renderer`], by default [`DotRenderer`].
//!
//! ```no_run
//! use dotviz_core::Graph;
//! use dotviz_render::Export;
//!
//! let graph = Graph::create("G", true);
//! graph.export("png", "graph.png")?;
//! # Ok::<(), dotviz_error::Error>(())
//! ```

mod config;
mod export;
mod renderer;

pub use config::{PATH_ENV, RenderConfig};
pub use export::Export;
pub use renderer::{DotRenderer, Renderer};

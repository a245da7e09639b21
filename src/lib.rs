//! # scpl
//!
//! Standalone SVG scatter plot renderer: circles positioned by two numeric
//! fields, optionally sized by a third, with gridlines, axis labels, a
//! least-squares trend line, Voronoi hit-regions, and a title. One pure,
//! synchronous call turns an ordered sequence of records into a complete
//! SVG markup string ready for embedding.
//!
//! ## Quick Start
//!
//! ```rust
//! use scpl::prelude::*;
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"x": 0.1, "y": 0.4, "name": "a"}),
//!     json!({"x": 0.5, "y": 0.2, "name": "b"}),
//!     json!({"x": 0.9, "y": 0.8, "name": "c"}),
//! ];
//!
//! let svg = ScatterPlot::new(&rows, "x", "y")
//!     .fit_line(true)
//!     .title("a demo plot")
//!     .render()?;
//! assert!(svg.contains("<circle"));
//! # Ok::<(), scpl::Error>(())
//! ```
//!
//! ## Styling
//!
//! No stylesheet is bundled; class names are stable so the caller supplies
//! CSS:
//!
//! | class | element |
//! |---|---|
//! | `scpl-plot` | root `<svg>` |
//! | `scpl-axes`, `scpl-gridline` | axis group and gridlines |
//! | `scpl-axis__label--x` / `--y` / `--y--inset` | stop labels |
//! | `scpl-axis__title--x` / `--y` | axis titles |
//! | `scpl-circles`, `scpl-g`, `scpl-circle`, `scpl-label` | point layer |
//! | `scpl-fit`, `scpl-best-fit`, `scpl-best-fit__label` | trend line |
//! | `scpl-voronoi`, `scpl-cell` | hit-region overlay |
//! | `scpl-title` | title |
//!
//! ## Degenerate inputs
//!
//! Rows with non-finite x or y (or size, when sizing by a field) are
//! silently dropped before scales are computed. Zero-variance axes yield
//! non-finite coordinates that serialize as-is and are dropped silently by
//! SVG renderers; this is accepted behavior, not an error path.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

/// Axis extent and gridline-stop policies.
pub mod axis;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Row records and accessor resolution.
pub mod record;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

/// Summary statistics and least-squares regression.
pub mod stats;

/// SVG element tree and serialization.
pub mod svg;

/// Voronoi tessellation for hit-region overlays.
pub mod voronoi;

/// The scatter renderer: options and layer pipeline.
pub mod plot;

/// Error types.
pub mod error;

pub use error::{Error, Result};
pub use plot::{plot, ScatterPlot};

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use scpl::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axis::{nice_extent, quarter_stops, round, RoundDirection};
    pub use crate::error::{Error, Result};
    pub use crate::plot::{percent, plot, ExtentSpec, Padding, ScatterPlot, StopSpec};
    pub use crate::record::{NumberAccessor, Record, TextAccessor};
    pub use crate::scale::{LinearScale, Scale, SqrtScale};
    pub use crate::stats::LeastSquares;
}

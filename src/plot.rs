//! The scatter renderer: options, layout, and the layer pipeline.
//!
//! One synchronous call turns an ordered sequence of records into a
//! standalone SVG markup string. Rows with non-finite coordinates are
//! dropped before any scale or regression is computed; everything else is
//! drawn in a fixed z-order (gridlines, labels, circles, trend line,
//! Voronoi overlay, title).

use std::collections::BTreeMap;
use std::path::Path;

use crate::axis::{nice_extent, quarter_stops};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::record::{NumberAccessor, Record, TextAccessor};
use crate::scale::{LinearScale, Scale, SqrtScale};
use crate::stats::LeastSquares;
use crate::svg::{Document, Element, Span, Text, TextAnchor, TextContent};
use crate::voronoi;

/// Default maximum circle radius in pixels.
pub const DEFAULT_MAX_RADIUS: f64 = 6.0;

/// Default font size in pixels for all generated text.
pub const DEFAULT_LABEL_SIZE: f64 = 13.0;

/// Gap in pixels between a circle's edge and its text label.
const LABEL_GAP: f64 = 4.0;

/// Inset between the canvas edge and the plot area.
///
/// The bottom side additionally reserves room for the x-stop labels
/// (one label-size line plus a small gap).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    /// Top inset in pixels.
    pub top: f64,
    /// Right inset in pixels.
    pub right: f64,
    /// Bottom inset in pixels.
    pub bottom: f64,
    /// Left inset in pixels.
    pub left: f64,
}

impl Padding {
    /// Equal padding on all four sides.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::uniform(32.0)
    }
}

impl From<f64> for Padding {
    fn from(value: f64) -> Self {
        Self::uniform(value)
    }
}

/// Axis extent policy: computed, literal, or caller-supplied.
pub enum ExtentSpec<'a> {
    /// Round data bounds outward to nice numbers (the default).
    Nice,
    /// Use these bounds verbatim.
    Literal([f64; 2]),
    /// Compute bounds from the retained values.
    With(Box<dyn Fn(&[f64]) -> [f64; 2] + 'a>),
}

impl<'a> ExtentSpec<'a> {
    /// Extent policy computed from the retained values.
    #[must_use]
    pub fn with(f: impl Fn(&[f64]) -> [f64; 2] + 'a) -> Self {
        Self::With(Box::new(f))
    }

    fn resolve(&self, values: &[f64]) -> [f64; 2] {
        match self {
            Self::Nice => nice_extent(values),
            Self::Literal(extent) => *extent,
            Self::With(f) => f(values),
        }
    }
}

impl From<[f64; 2]> for ExtentSpec<'_> {
    fn from(extent: [f64; 2]) -> Self {
        Self::Literal(extent)
    }
}

/// Gridline stop policy: computed, literal, or caller-supplied.
pub enum StopSpec<'a> {
    /// The three interior quarter points of the extent (the default).
    Quarters,
    /// Use these stop values verbatim.
    Literal(Vec<f64>),
    /// Compute stops from the resolved extent.
    With(Box<dyn Fn([f64; 2]) -> Vec<f64> + 'a>),
}

impl<'a> StopSpec<'a> {
    /// Stop policy computed from the resolved extent.
    #[must_use]
    pub fn with(f: impl Fn([f64; 2]) -> Vec<f64> + 'a) -> Self {
        Self::With(Box::new(f))
    }

    fn resolve(&self, extent: [f64; 2]) -> Vec<f64> {
        match self {
            Self::Quarters => quarter_stops(extent),
            Self::Literal(stops) => stops.clone(),
            Self::With(f) => f(extent),
        }
    }
}

impl From<Vec<f64>> for StopSpec<'_> {
    fn from(stops: Vec<f64>) -> Self {
        Self::Literal(stops)
    }
}

/// Percent formatter: `0.25` renders as `"25%"`.
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{}%", (value * 100.0) as i64)
}

/// Builder for rendering a scatter plot to SVG markup.
///
/// All options carry documented defaults; see the crate docs for the class
/// vocabulary the rendered markup uses. The builder borrows the rows and
/// any closure accessors, renders with [`render`](Self::render), and
/// retains no state between calls.
pub struct ScatterPlot<'a, T> {
    rows: &'a [T],
    x: NumberAccessor<'a, T>,
    y: NumberAccessor<'a, T>,
    size: NumberAccessor<'a, T>,
    size_filters: bool,
    max_radius: f64,
    x_extent: ExtentSpec<'a>,
    y_extent: ExtentSpec<'a>,
    x_stops: StopSpec<'a>,
    y_stops: StopSpec<'a>,
    x_format: Box<dyn Fn(f64) -> String + 'a>,
    y_format: Box<dyn Fn(f64) -> String + 'a>,
    x_label: String,
    y_label: String,
    y_label_right: bool,
    y_stops_inset: bool,
    fit_line: bool,
    class_circles: Box<dyn Fn(&T) -> String + 'a>,
    style_circles: BTreeMap<String, String>,
    id: TextAccessor<'a, T>,
    width: u32,
    height: u32,
    padding: Padding,
    title: String,
    class_title: String,
    label_size: f64,
    label: Option<TextAccessor<'a, T>>,
    voronoi: bool,
}

/// Resolved scales and pixel geometry for one render call.
struct Layout {
    x_scale: LinearScale,
    y_scale: LinearScale,
    r_scale: SqrtScale,
    x_stops: Vec<f64>,
    y_stops: Vec<f64>,
    y_extent: [f64; 2],
    plot: Rect,
}

impl<'a, T> ScatterPlot<'a, T> {
    /// Create a plot over `rows` with x and y accessors (field names or
    /// closures via [`NumberAccessor::with`]).
    #[must_use]
    pub fn new(
        rows: &'a [T],
        x: impl Into<NumberAccessor<'a, T>>,
        y: impl Into<NumberAccessor<'a, T>>,
    ) -> Self {
        Self {
            rows,
            x: x.into(),
            y: y.into(),
            size: NumberAccessor::with(|_| 1.0),
            size_filters: false,
            max_radius: DEFAULT_MAX_RADIUS,
            x_extent: ExtentSpec::Nice,
            y_extent: ExtentSpec::Nice,
            x_stops: StopSpec::Quarters,
            y_stops: StopSpec::Quarters,
            x_format: Box::new(|d| d.to_string()),
            y_format: Box::new(|d| d.to_string()),
            x_label: "x axis".to_string(),
            y_label: "y axis".to_string(),
            y_label_right: false,
            y_stops_inset: false,
            fit_line: false,
            class_circles: Box::new(|_| String::new()),
            style_circles: BTreeMap::new(),
            id: TextAccessor::Field("name".to_string()),
            width: 400,
            height: 400,
            padding: Padding::default(),
            title: String::new(),
            class_title: String::new(),
            label_size: DEFAULT_LABEL_SIZE,
            label: None,
            voronoi: false,
        }
    }

    /// Size circles by a row field or closure (proportional area, square
    /// root scaled to [`max_radius`](Self::max_radius)). Rows whose size
    /// resolves non-finite are excluded from the rendered dataset.
    #[must_use]
    pub fn size(mut self, accessor: impl Into<NumberAccessor<'a, T>>) -> Self {
        self.size = accessor.into();
        self.size_filters = true;
        self
    }

    /// Maximum rendered circle radius in pixels (default 6).
    #[must_use]
    pub fn max_radius(mut self, radius: f64) -> Self {
        self.max_radius = radius;
        self
    }

    /// Override the x extent: literal `[min, max]` or a policy function.
    #[must_use]
    pub fn x_extent(mut self, extent: impl Into<ExtentSpec<'a>>) -> Self {
        self.x_extent = extent.into();
        self
    }

    /// Override the y extent: literal `[min, max]` or a policy function.
    #[must_use]
    pub fn y_extent(mut self, extent: impl Into<ExtentSpec<'a>>) -> Self {
        self.y_extent = extent.into();
        self
    }

    /// Override the x gridline stops: literal values or a policy function.
    #[must_use]
    pub fn x_stops(mut self, stops: impl Into<StopSpec<'a>>) -> Self {
        self.x_stops = stops.into();
        self
    }

    /// Override the y gridline stops: literal values or a policy function.
    #[must_use]
    pub fn y_stops(mut self, stops: impl Into<StopSpec<'a>>) -> Self {
        self.y_stops = stops.into();
        self
    }

    /// Map an x stop value to display text (default: plain number).
    #[must_use]
    pub fn x_format(mut self, f: impl Fn(f64) -> String + 'a) -> Self {
        self.x_format = Box::new(f);
        self
    }

    /// Map a y stop value to display text (default: plain number).
    #[must_use]
    pub fn y_format(mut self, f: impl Fn(f64) -> String + 'a) -> Self {
        self.y_format = Box::new(f);
        self
    }

    /// X axis title (default `"x axis"`; empty string draws none).
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Y axis title (default `"y axis"`; empty string draws none).
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Place the y axis title on the right edge instead of the left.
    #[must_use]
    pub fn y_label_right(mut self, right: bool) -> Self {
        self.y_label_right = right;
        self
    }

    /// Draw y stop labels inset just above their gridlines instead of
    /// beside them.
    #[must_use]
    pub fn y_stops_inset(mut self, inset: bool) -> Self {
        self.y_stops_inset = inset;
        self
    }

    /// Draw the least-squares trend line with an r-squared annotation.
    #[must_use]
    pub fn fit_line(mut self, fit: bool) -> Self {
        self.fit_line = fit;
        self
    }

    /// Per-row CSS class for circles, appended to `scpl-circle`.
    #[must_use]
    pub fn class_circles(mut self, f: impl Fn(&T) -> String + 'a) -> Self {
        self.class_circles = Box::new(f);
        self
    }

    /// Inline style declarations applied to every circle.
    #[must_use]
    pub fn style_circles<K, V>(mut self, styles: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.style_circles = styles
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Row identifier accessor for circle `id` attributes and Voronoi cell
    /// tags (default: the `"name"` field).
    #[must_use]
    pub fn id(mut self, accessor: impl Into<TextAccessor<'a, T>>) -> Self {
        self.id = accessor.into();
        self
    }

    /// Canvas pixel dimensions (default 400 x 400).
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Inset between canvas edge and plot area: a single number or a
    /// per-side [`Padding`] (default 32).
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Title centered above the plot; lines split on `'\n'` and trimmed.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Extra CSS class on the title element.
    #[must_use]
    pub fn class_title(mut self, class: impl Into<String>) -> Self {
        self.class_title = class.into();
        self
    }

    /// Font size in pixels for all generated text (default 13).
    #[must_use]
    pub fn label_size(mut self, size: f64) -> Self {
        self.label_size = size;
        self
    }

    /// Per-row text label accessor; rows resolving to `Some` get a label
    /// drawn just above their circle.
    #[must_use]
    pub fn label(mut self, accessor: impl Into<TextAccessor<'a, T>>) -> Self {
        self.label = Some(accessor.into());
        self
    }

    /// Draw the Voronoi hit-region overlay.
    #[must_use]
    pub fn voronoi(mut self, voronoi: bool) -> Self {
        self.voronoi = voronoi;
        self
    }
}

impl<'a, T: Record> ScatterPlot<'a, T> {
    /// Render to standalone SVG markup.
    ///
    /// Pure: identical inputs yield byte-identical output, and no state
    /// survives the call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCanvas`] when the dimensions and padding
    /// leave no drawable plot area. Degenerate data never errors.
    pub fn render(&self) -> Result<String> {
        let pad = self.padding;
        let pad_bottom = pad.bottom + self.label_size + LABEL_GAP;
        let plot = Rect::new(
            pad.left,
            pad.top,
            f64::from(self.width) - pad.left - pad.right,
            f64::from(self.height) - pad_bottom - pad.top,
        );
        if self.width == 0 || self.height == 0 || plot.width <= 0.0 || plot.height <= 0.0 {
            return Err(Error::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }

        let get_x = self.x.resolved();
        let get_y = self.y.resolved();
        let get_size = self.size.resolved();

        let data: Vec<&T> = self
            .rows
            .iter()
            .filter(|&row| {
                get_x(row).is_finite()
                    && get_y(row).is_finite()
                    && (!self.size_filters || get_size(row).is_finite())
            })
            .collect();

        let xs: Vec<f64> = data.iter().map(|&row| get_x(row)).collect();
        let ys: Vec<f64> = data.iter().map(|&row| get_y(row)).collect();
        let sizes: Vec<f64> = data.iter().map(|&row| get_size(row)).collect();

        let x_extent = self.x_extent.resolve(&xs);
        let y_extent = self.y_extent.resolve(&ys);
        let max_size = sizes.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let layout = Layout {
            x_scale: LinearScale::new(
                (x_extent[0], x_extent[1]),
                (pad.left, f64::from(self.width) - pad.right),
            ),
            y_scale: LinearScale::new(
                (y_extent[0], y_extent[1]),
                (f64::from(self.height) - pad_bottom, pad.top),
            ),
            r_scale: SqrtScale::new((0.0, max_size), (0.0, self.max_radius)),
            x_stops: self.x_stops.resolve(x_extent),
            y_stops: self.y_stops.resolve(y_extent),
            y_extent,
            plot,
        };

        let mut doc = Document::new(self.width, self.height, "scpl-plot");
        doc.push(self.axis_layer(&layout));
        doc.push(self.circle_layer(&layout, &data, &xs, &ys, &sizes));
        if self.fit_line && !data.is_empty() {
            doc.push(self.fit_layer(&layout, &xs, &ys));
        }
        if self.voronoi {
            doc.push(self.voronoi_layer(&layout, &data, &xs, &ys));
        }
        if !self.title.is_empty() {
            doc.push(self.title_layer());
        }

        Ok(doc.render())
    }

    /// Render and write the markup to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file writing fails.
    pub fn render_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.render()?)?;
        Ok(())
    }

    /// Gridlines, stop labels, and axis titles.
    fn axis_layer(&self, layout: &Layout) -> Element {
        let mut children = Vec::new();
        let left = layout.plot.x;
        let right = layout.plot.x + layout.plot.width;
        let top = layout.plot.y;
        let bottom = layout.plot.y + layout.plot.height;

        for &stop in &layout.y_stops {
            let mut label_class = "scpl-axis__label scpl-axis__label--y".to_string();
            if self.y_stops_inset {
                label_class.push_str(" scpl-axis__label--y--inset");
            }
            children.push(Element::Group {
                class: None,
                transform: Some(format!("translate(0, {})", layout.y_scale.scale(stop))),
                children: vec![
                    Element::Line {
                        x1: left,
                        y1: 0.0,
                        x2: right,
                        y2: 0.0,
                        class: Some("scpl-gridline".to_string()),
                    },
                    Element::Text(Text {
                        dx: Some(if self.y_stops_inset {
                            left
                        } else {
                            left - LABEL_GAP
                        }),
                        dy: Some(if self.y_stops_inset {
                            -LABEL_GAP
                        } else {
                            (self.label_size / 3.0).ceil()
                        }),
                        class: Some(label_class),
                        font_size: Some(self.label_size),
                        content: TextContent::Plain((self.y_format)(stop)),
                        ..Text::default()
                    }),
                ],
            });
        }

        for &stop in &layout.x_stops {
            children.push(Element::Group {
                class: None,
                transform: Some(format!("translate({}, 0)", layout.x_scale.scale(stop))),
                children: vec![
                    Element::Line {
                        x1: 0.0,
                        y1: top,
                        x2: 0.0,
                        y2: bottom,
                        class: Some("scpl-gridline".to_string()),
                    },
                    Element::Text(Text {
                        dx: Some(0.0),
                        dy: Some(bottom + self.label_size),
                        class: Some("scpl-axis__label scpl-axis__label--x".to_string()),
                        font_size: Some(self.label_size),
                        content: TextContent::Plain((self.x_format)(stop)),
                        ..Text::default()
                    }),
                ],
            });
        }

        if !self.x_label.is_empty() {
            children.push(Element::Text(Text {
                x: Some((left + right) / 2.0),
                y: Some(f64::from(self.height) - LABEL_GAP),
                class: Some("scpl-axis__title scpl-axis__title--x".to_string()),
                font_size: Some(self.label_size),
                anchor: Some(TextAnchor::Middle),
                content: TextContent::Plain(self.x_label.clone()),
                ..Text::default()
            }));
        }

        if !self.y_label.is_empty() {
            let tx = if self.y_label_right {
                f64::from(self.width) - LABEL_GAP
            } else {
                self.label_size
            };
            let ty = (top + bottom) / 2.0;
            children.push(Element::Text(Text {
                x: Some(tx),
                y: Some(ty),
                class: Some("scpl-axis__title scpl-axis__title--y".to_string()),
                font_size: Some(self.label_size),
                transform: Some(format!("rotate(270 {tx} {ty})")),
                anchor: Some(TextAnchor::Middle),
                content: TextContent::Plain(self.y_label.clone()),
                ..Text::default()
            }));
        }

        Element::Group {
            class: Some("scpl-axes".to_string()),
            transform: None,
            children,
        }
    }

    /// One positioned group per retained row: circle plus optional label.
    fn circle_layer(
        &self,
        layout: &Layout,
        data: &[&T],
        xs: &[f64],
        ys: &[f64],
        sizes: &[f64],
    ) -> Element {
        let get_id = self.id.resolved();
        let get_label = self.label.as_ref().map(TextAccessor::resolved);
        let style = if self.style_circles.is_empty() {
            None
        } else {
            Some(
                self.style_circles
                    .iter()
                    .map(|(k, v)| format!("{k}: {v};"))
                    .collect::<Vec<_>>()
                    .join(" "),
            )
        };

        let children = data
            .iter()
            .enumerate()
            .map(|(i, &row)| {
                let radius = layout.r_scale.scale(sizes[i]);
                let row_class = (self.class_circles)(row);
                let class = if row_class.is_empty() {
                    "scpl-circle".to_string()
                } else {
                    format!("scpl-circle {row_class}")
                };

                let mut members = vec![Element::Circle {
                    cx: 0.0,
                    cy: 0.0,
                    r: radius,
                    class: Some(class),
                    id: get_id(row),
                    style: style.clone(),
                }];
                if let Some(text) = get_label.as_ref().and_then(|get| get(row)) {
                    members.push(Element::Text(Text {
                        x: Some(0.0),
                        y: Some(-radius - LABEL_GAP),
                        class: Some("scpl-label".to_string()),
                        font_size: Some(self.label_size),
                        content: TextContent::Plain(text),
                        ..Text::default()
                    }));
                }

                Element::Group {
                    class: Some("scpl-g".to_string()),
                    transform: Some(format!(
                        "translate({}, {})",
                        layout.x_scale.scale(xs[i]),
                        layout.y_scale.scale(ys[i])
                    )),
                    children: members,
                }
            })
            .collect();

        Element::Group {
            class: Some("scpl-circles".to_string()),
            transform: None,
            children,
        }
    }

    /// Least-squares trend line clipped to the y extent, with r-squared
    /// annotation near the terminal endpoint.
    fn fit_layer(&self, layout: &Layout, xs: &[f64], ys: &[f64]) -> Element {
        let fit = LeastSquares::fit(xs, ys);
        let x_min = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let x_max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let p1 = clip_to_y_extent(&fit, x_min, layout.y_extent);
        let p2 = clip_to_y_extent(&fit, x_max, layout.y_extent);

        Element::Group {
            class: Some("scpl-fit".to_string()),
            transform: None,
            children: vec![
                Element::Line {
                    x1: layout.x_scale.scale(p1.x),
                    y1: layout.y_scale.scale(p1.y),
                    x2: layout.x_scale.scale(p2.x),
                    y2: layout.y_scale.scale(p2.y),
                    class: Some("scpl-best-fit".to_string()),
                },
                Element::Text(Text {
                    x: Some(layout.x_scale.scale(p2.x)),
                    y: Some(layout.y_scale.scale(p2.y) - LABEL_GAP),
                    class: Some("scpl-best-fit__label".to_string()),
                    font_size: Some(self.label_size),
                    anchor: Some(TextAnchor::End),
                    content: TextContent::Plain(format!("r² = {:.2}", fit.r_squared())),
                    ..Text::default()
                }),
            ],
        }
    }

    /// One closed path per retained row's Voronoi cell, clipped to the
    /// padded plot rectangle.
    fn voronoi_layer(&self, layout: &Layout, data: &[&T], xs: &[f64], ys: &[f64]) -> Element {
        let get_id = self.id.resolved();
        let sites: Vec<Point> = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| Point::new(layout.x_scale.scale(x), layout.y_scale.scale(y)))
            .collect();

        let children = voronoi::cells(&sites, layout.plot)
            .into_iter()
            .zip(data)
            .filter(|(cell, _)| cell.len() >= 3)
            .map(|(cell, &row)| {
                let mut d = String::new();
                for (k, p) in cell.iter().enumerate() {
                    let command = if k == 0 { 'M' } else { 'L' };
                    d.push_str(&format!("{command}{},{}", p.x, p.y));
                }
                d.push('Z');
                Element::Path {
                    d,
                    class: Some("scpl-cell".to_string()),
                    data_id: get_id(row),
                }
            })
            .collect();

        Element::Group {
            class: Some("scpl-voronoi".to_string()),
            transform: None,
            children,
        }
    }

    /// Multi-line title centered above the plot.
    fn title_layer(&self) -> Element {
        let center = f64::from(self.width) / 2.0;
        let class = if self.class_title.is_empty() {
            "scpl-title".to_string()
        } else {
            format!("scpl-title {}", self.class_title)
        };

        let spans = self
            .title
            .split('\n')
            .enumerate()
            .map(|(i, line)| Span {
                x: Some(center),
                dy: i as f64 * self.label_size,
                text: line.trim().to_string(),
            })
            .collect();

        Element::Text(Text {
            x: Some(center),
            y: Some(self.padding.top - self.label_size - 2.0 * LABEL_GAP),
            class: Some(class),
            font_size: Some(self.label_size),
            anchor: Some(TextAnchor::Middle),
            content: TextContent::Spans(spans),
            ..Text::default()
        })
    }
}

/// Evaluate the fit at `x` and, when the result leaves the y extent,
/// substitute the endpoint on the extent boundary via the inverse model.
fn clip_to_y_extent(fit: &LeastSquares, x: f64, y_extent: [f64; 2]) -> Point {
    let lo = y_extent[0].min(y_extent[1]);
    let hi = y_extent[0].max(y_extent[1]);
    let y = fit.forward(x);

    if y < lo {
        Point::new(fit.invert(lo), lo)
    } else if y > hi {
        Point::new(fit.invert(hi), hi)
    } else {
        Point::new(x, y)
    }
}

/// Render a scatter plot with default options.
///
/// Equivalent to `ScatterPlot::new(rows, x, y).render()`; use the builder
/// for anything beyond the defaults.
///
/// # Errors
///
/// Returns [`Error::InvalidCanvas`] when dimensions and padding leave no
/// drawable plot area.
pub fn plot<'a, T: Record>(
    rows: &'a [T],
    x: impl Into<NumberAccessor<'a, T>>,
    y: impl Into<NumberAccessor<'a, T>>,
) -> Result<String> {
    ScatterPlot::new(rows, x, y).render()
}

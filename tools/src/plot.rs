//! Before/after clustering scatterplots.
//!
//! The figure holds two plots side by side under a shared title. The left
//! one shows the unlabeled points in a single color, the right one shows the
//! labeled points colored by cluster, with a legend of the cluster ids.

use crate::Layout;
use anyhow::Context as _;
use itertools::Itertools as _;
use kpoints::BoundingBox;
use kpoints::Palette;
use kpoints::Point2D;
use kpoints::Rgb;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use point_io::LabeledPoint;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const TITLE: &str = "Before and After K-Means Clustering";
pub const BEFORE_TITLE: &str = "Before Clustering";
pub const AFTER_TITLE: &str = "After Clustering";

/// Color of unlabeled points.
pub const BEFORE_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Palette size used when the number of clusters is not given.
pub const DEFAULT_CLUSTERS: usize = 3;

const POINT_RADIUS: i32 = 3;
const PADDING: f64 = 0.05;

#[derive(Debug)]
pub enum Error {
    Drawing(String),
    /// The extent of the points cannot be represented with finite numbers.
    Extent(BoundingBox),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Drawing(msg) => write!(f, "drawing error: {msg}"),
            Error::Extent(bb) => write!(
                f,
                "points span ({}, {})..({}, {}), too wide to plot",
                bb.p_min().x,
                bb.p_min().y,
                bb.p_max().x,
                bb.p_max().y,
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

fn drawing_error<E: fmt::Display>(err: E) -> Error {
    Error::Drawing(err.to_string())
}

/// Figure dimensions in pixels, written `WIDTHxHEIGHT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 800,
        }
    }
}

impl FromStr for Size {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .context("expected WIDTHxHEIGHT")?;
        let width: u32 = width.parse().context("invalid width")?;
        let height: u32 = height.parse().context("invalid height")?;
        if width == 0 || height == 0 {
            anyhow::bail!("figure size must be non-zero, got {s:?}");
        }
        Ok(Self { width, height })
    }
}

/// A point set before and after clustering, with the colors of its
/// clusters.
#[derive(Clone, Debug)]
pub struct Comparison {
    before: Vec<[f64; 2]>,
    after: Vec<LabeledPoint>,
    palette: Palette,
}

impl Comparison {
    /// Pairs the two point sets.
    ///
    /// Cluster ids that do not fit in the palette are an error when `strict`
    /// is set. Otherwise they are logged and share colors with other
    /// clusters.
    pub fn new(
        before: Vec<[f64; 2]>,
        after: Vec<LabeledPoint>,
        palette: Palette,
        strict: bool,
    ) -> kpoints::Result<Self> {
        if let Err(err) = palette.check(after.iter().map(|p| p.cluster)) {
            if strict {
                return Err(err);
            }
            tracing::warn!("{err}, some clusters will share a color");
        }
        Ok(Self {
            before,
            after,
            palette,
        })
    }

    /// Reads `inputs/<filename>` and `outputs/<filename>.out` under `layout`.
    pub fn load(
        layout: &Layout,
        filename: &str,
        palette: Palette,
        strict: bool,
    ) -> anyhow::Result<Self> {
        let before_path = layout.input(filename);
        let before = point_io::plain::read(crate::reader(&before_path)?)
            .with_context(|| format!("failed to read {}", before_path.display()))?;

        let after_path = layout.labeled_output(filename);
        let after = point_io::labeled::read(crate::reader(&after_path)?)
            .with_context(|| format!("failed to read {}", after_path.display()))?;

        tracing::debug!(
            before = before.len(),
            after = after.len(),
            clusters = after.iter().map(|p| p.cluster).sorted().dedup().count(),
            "loaded point files"
        );

        Ok(Self::new(before, after, palette, strict)?)
    }

    pub fn before(&self) -> &[[f64; 2]] {
        &self.before
    }

    pub fn after(&self) -> &[LabeledPoint] {
        &self.after
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn bounds<I>(points: I) -> Result<BoundingBox>
where
    I: IntoIterator<Item = [f64; 2]>,
    I::IntoIter: Clone,
{
    let unit = || BoundingBox::from_coord(Point2D::new(0.0, 0.0), Point2D::new(1.0, 1.0));
    let bb = BoundingBox::from_points(points.into_iter().map(|[x, y]| Point2D::new(x, y)))
        .unwrap_or_else(unit)
        .padded(PADDING);
    // Plotters loops forever computing mesh lines over a non-finite range.
    if !bb.is_finite() {
        return Err(Error::Extent(bb));
    }
    Ok(bb)
}

fn chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    caption: &str,
    bb: BoundingBox,
) -> Result<ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>> {
    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(bb.p_min().x..bb.p_max().x, bb.p_min().y..bb.p_max().y)
        .map_err(drawing_error)?;
    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(drawing_error)?;
    Ok(chart)
}

fn draw_before<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    points: &[[f64; 2]],
) -> Result<()> {
    let mut chart = chart(area, BEFORE_TITLE, bounds(points.iter().copied())?)?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&[x, y]| Circle::new((x, y), POINT_RADIUS, BEFORE_COLOR.filled())),
        )
        .map_err(drawing_error)?;
    Ok(())
}

fn draw_after<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    points: &[LabeledPoint],
    palette: &Palette,
) -> Result<()> {
    let mut chart = chart(area, AFTER_TITLE, bounds(points.iter().map(|p| p.point))?)?;

    let clusters: Vec<usize> = points.iter().map(|p| p.cluster).sorted().dedup().collect();
    for &cluster in &clusters {
        let c = color(palette.color(cluster));
        chart
            .draw_series(
                points
                    .iter()
                    .filter(|p| p.cluster == cluster)
                    .map(|p| Circle::new((p.point[0], p.point[1]), POINT_RADIUS, c.filled())),
            )
            .map_err(drawing_error)?
            .label(cluster.to_string())
            .legend(move |(x, y)| Circle::new((x, y), POINT_RADIUS + 1, c.filled()));
    }

    if !clusters.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(drawing_error)?;
    }
    Ok(())
}

/// Draws the whole figure on `root`.
pub fn render<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    comparison: &Comparison,
) -> Result<()> {
    root.fill(&WHITE).map_err(drawing_error)?;
    let root = root.titled(TITLE, ("sans-serif", 28)).map_err(drawing_error)?;
    let areas = root.split_evenly((1, 2));
    draw_before(&areas[0], &comparison.before)?;
    draw_after(&areas[1], &comparison.after, &comparison.palette)?;
    Ok(())
}

/// Renders the figure as an SVG document.
pub fn render_svg_string(comparison: &Comparison, size: Size) -> Result<String> {
    let mut svg = String::new();
    {
        let root =
            SVGBackend::with_string(&mut svg, (size.width, size.height)).into_drawing_area();
        render(&root, comparison)?;
        root.present().map_err(drawing_error)?;
    }
    Ok(svg)
}

/// Renders the figure into an SVG file.
pub fn render_svg_file(comparison: &Comparison, size: Size, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (size.width, size.height)).into_drawing_area();
    render(&root, comparison)?;
    root.present().map_err(drawing_error)?;
    Ok(())
}

use anyhow::Context as _;
use anyhow::Result;
use kpoints::Palette;
use kpoints_tools::layout;
use kpoints_tools::plot;
use kpoints_tools::Layout;
use std::io::Write as _;
use std::path::PathBuf;

const USAGE: &str = "Usage: point-plot [options]";

fn main() -> Result<()> {
    let mut options = getopts::Options::new();
    options.optopt("c", "clusters", "number of clusters (default: 3)", "CLUSTERS");
    options.optopt(
        "f",
        "filename",
        "file from the inputs directory (default: data.txt)",
        "FILE",
    );
    options.optopt(
        "o",
        "output",
        "SVG file to write, '-' for stdout (default: outputs/FILE.svg)",
        "FILE",
    );
    options.optflag("", "strict", "fail on cluster ids outside of the palette");
    options.optopt("", "size", "figure size in pixels (default: 1600x800)", "WxH");
    options.optopt(
        "C",
        "directory",
        "root of the inputs and outputs directories (default: .)",
        "DIR",
    );

    let Some(matches) = kpoints_tools::parse_args(options, USAGE, 0)? else {
        return Ok(());
    };
    kpoints_tools::init_logging();

    let clusters: usize = kpoints_tools::opt_or(&matches, "c", plot::DEFAULT_CLUSTERS)?;
    let filename = matches
        .opt_str("f")
        .unwrap_or_else(|| String::from(layout::DEFAULT_FILENAME));
    let size = match matches.opt_str("size") {
        Some(size) => size.parse::<plot::Size>().context("invalid value for option 'size'")?,
        None => plot::Size::default(),
    };
    let layout = matches.opt_str("C").map(Layout::new).unwrap_or_default();
    let output = matches
        .opt_str("o")
        .map(PathBuf::from)
        .unwrap_or_else(|| layout.figure(&filename));

    let _span = tracing::info_span!("point-plot", %filename, clusters).entered();

    let palette = Palette::hls(clusters)?;
    let comparison =
        plot::Comparison::load(&layout, &filename, palette, matches.opt_present("strict"))?;

    if output == PathBuf::from("-") {
        let svg = plot::render_svg_string(&comparison, size)?;
        let mut stdout = kpoints_tools::writer(&output)?;
        stdout.write_all(svg.as_bytes())?;
        stdout.flush()?;
    } else {
        plot::render_svg_file(&comparison, size, &output)
            .with_context(|| format!("failed to render {}", output.display()))?;
        tracing::info!(path = %output.display(), "wrote figure");
    }

    Ok(())
}

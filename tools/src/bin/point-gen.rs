use anyhow::Context as _;
use anyhow::Result;
use kpoints_tools::generate;
use kpoints_tools::Layout;

const USAGE: &str = "Usage: point-gen [options]";

fn main() -> Result<()> {
    let mut options = getopts::Options::new();
    options.optopt("n", "nums", "number of points to generate (default: 1000)", "COUNT");
    options.optopt(
        "m",
        "maximum",
        "inclusive upper bound of both coordinates (default: 5000)",
        "MAX",
    );
    options.optopt("f", "filename", "file to store points (default: data.txt)", "FILE");
    options.optflag(
        "i",
        "integers",
        "generate integers instead of floating-point numbers",
    );
    options.optopt("s", "seed", "seed of the random number generator", "SEED");
    options.optflag(
        "I",
        "inputs",
        "write into the inputs directory, creating it if needed",
    );
    options.optopt("C", "directory", "root of the inputs directory (default: .)", "DIR");

    let Some(matches) = kpoints_tools::parse_args(options, USAGE, 0)? else {
        return Ok(());
    };
    kpoints_tools::init_logging();

    let count: usize = kpoints_tools::opt_or(&matches, "n", generate::DEFAULT_COUNT)?;
    let maximum: i64 = kpoints_tools::opt_or(&matches, "m", generate::DEFAULT_MAXIMUM)?;
    let filename = matches
        .opt_str("f")
        .unwrap_or_else(|| String::from(generate::DEFAULT_FILENAME));
    let layout = matches.opt_str("C").map(Layout::new).unwrap_or_default();

    let mut generator = generate::Generator::new(count, maximum)?;
    generator.integers = matches.opt_present("i");
    generator.seed = matches
        .opt_get("s")
        .context("invalid value for option 'seed'")?;

    let _span = tracing::info_span!("point-gen", %filename).entered();
    let path = generate::output_path(&layout, &filename, matches.opt_present("I"))?;
    generator.write_file(path)
}

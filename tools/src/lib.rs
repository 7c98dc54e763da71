//! Shared plumbing for the `point-gen` and `point-plot` binaries.

use anyhow::Context as _;
use anyhow::Result;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::Registry;
use tracing_tree::HierarchicalLayer;

pub mod generate;
pub mod layout;
pub mod plot;

pub use layout::Layout;

/// Parses the process arguments with [`parse_args_from`].
pub fn parse_args(
    options: getopts::Options,
    usage: &str,
    max_free: usize,
) -> Result<Option<getopts::Matches>> {
    parse_args_from(options, usage, max_free, env::args().skip(1))
}

/// Parses `args`, rejecting more than `max_free` positional arguments.
///
/// Returns `None` when `-h/--help` was given, after printing the usage to
/// stderr.
pub fn parse_args_from<I>(
    mut options: getopts::Options,
    usage: &str,
    max_free: usize,
    args: I,
) -> Result<Option<getopts::Matches>>
where
    I: IntoIterator,
    I::Item: AsRef<std::ffi::OsStr>,
{
    options.optflag("h", "help", "print this help menu");

    let matches = options.parse(args)?;

    if matches.opt_present("h") {
        eprintln!("{}", options.usage(usage));
        return Ok(None);
    }
    if matches.free.len() > max_free {
        anyhow::bail!("too many arguments\n\n{}", options.usage(usage));
    }

    Ok(Some(matches))
}

/// Parses the value of option `name`, falling back to `default` when it is
/// absent.
pub fn opt_or<T>(matches: &getopts::Matches, name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(matches
        .opt_get(name)
        .with_context(|| format!("invalid value for option '{name}'"))?
        .unwrap_or(default))
}

/// Logs to stderr, filtered by the `LOG` environment variable (warnings
/// only by default).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    Registry::default()
        .with(filter)
        .with(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true),
        )
        .init();
}

/// Opens `path` for reading, with the path in the error message.
pub fn reader(path: impl AsRef<Path>) -> Result<io::BufReader<fs::File>> {
    let path = path.as_ref();
    let file = fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    Ok(io::BufReader::new(file))
}

/// Creates or truncates `path` for writing, or writes to stdout when `path`
/// is `-`.
pub fn writer(path: impl AsRef<Path>) -> Result<Box<dyn io::Write>> {
    let path = path.as_ref();
    Ok(if path == Path::new("-") {
        Box::new(io::BufWriter::new(io::stdout().lock()))
    } else {
        let file = fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Box::new(io::BufWriter::new(file))
    })
}

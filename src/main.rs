//! `follow-symlink` binary: parses the command line and hands it to [`follow_symlink::app::run`].

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use follow_symlink::{app, config::Config, fs::RealFs, host, logging, path::Cygpath};

#[derive(Parser)]
#[command(
    name = "follow-symlink",
    version,
    about = "Follow Cygwin symlinks from a Windows file manager",
    after_help = "Run without arguments for the list of commands."
)]
struct Cli {
    /// Log resolution details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log errors only
    #[arg(short, long)]
    quiet: bool,

    /// Read settings from this file instead of ~/.config/follow-symlink/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Command words followed by the file path, e.g. `ENTER "$F"`
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let converter = Cygpath::new(config.converter.program);
    let host = host::from_config(&config.host)?;

    app::run(cli.args.as_slice(), &RealFs, &converter, host.as_ref())
}

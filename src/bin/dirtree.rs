//! CLI entry point for the tree renderer

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirsweep::cli::{ColorMode, Switch, normalize_args, should_use_color};
use dirsweep::fs::absolute;
use dirsweep::{Error, JsonLines, LocalFs, OutputConfig, TreeConfig, TreePrinter, render};

const SWITCHES: &[Switch] = &[
    Switch::valued("f"),
    Switch::valued("fold"),
    Switch::flag("a"),
    Switch::flag("ascii"),
    Switch::flag("json"),
    Switch::valued("color"),
    Switch::flag("h"),
    Switch::flag("help"),
    Switch::flag("V"),
    Switch::flag("version"),
];

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Show the contents of a directory as a tree")]
#[command(
    after_help = "Directories named by -fold are listed with a trailing '...' but their content \
                  is not shown. Each folded name needs its own switch, e.g. \
                  dirtree -f .git -f target src"
)]
#[command(version)]
struct Args {
    /// Directory to display
    paths: Vec<PathBuf>,

    /// Do not show the content of directories with this name (can be used multiple times)
    #[arg(short = 'f', long = "fold", value_name = "DIR", allow_hyphen_values = true)]
    fold: Vec<String>,

    /// Draw the tree with plain ASCII characters
    #[arg(short = 'a', long = "ascii")]
    ascii: bool,

    /// Emit one JSON object per line instead of text
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let normalized = normalize_args(std::env::args_os().skip(1), SWITCHES);
    for arg in &normalized.unrecognized {
        eprintln!("dirtree: unexpected command line argument '{}'", arg);
    }
    let args = Args::parse_from(std::iter::once(OsString::from("dirtree")).chain(normalized.args));

    let mut paths = args.paths.iter();
    let target = paths.next().cloned().unwrap_or_else(|| PathBuf::from("."));
    for extra in paths {
        eprintln!(
            "dirtree: unexpected command line argument '{}'",
            extra.display()
        );
    }

    let config = TreeConfig {
        folded: args.fold.iter().cloned().collect(),
        ascii: args.ascii,
    };
    let root = absolute(&target);

    let walk = match render(&LocalFs, &root, &config) {
        Ok(walk) => walk,
        Err(Error::Configuration(err)) => {
            eprintln!("dirtree: cannot access '{}': {}", target.display(), reason(&err));
            process::exit(1);
        }
        Err(e) => {
            eprintln!("dirtree: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        let mut output = JsonLines::stdout();
        walk.map(|line| {
            let line = line?;
            output.write(&line).map_err(Error::Output)
        })
        .collect::<dirsweep::Result<()>>()
        .and_then(|_| output.flush().map_err(Error::Output))
    } else {
        let mut output = TreePrinter::stdout(OutputConfig {
            use_color: should_use_color(args.color),
        });
        walk.map(|line| {
            let line = line?;
            output.print_line(&line).map_err(Error::Output)
        })
        .collect::<dirsweep::Result<()>>()
        .and_then(|_| output.flush().map_err(Error::Output))
    };

    if let Err(e) = result {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    }
}

fn reason(err: &dirsweep::ConfigError) -> &'static str {
    match err {
        dirsweep::ConfigError::MissingRoot(_) => "No such file or directory",
        dirsweep::ConfigError::NotADirectory(_) => "Not a directory",
    }
}

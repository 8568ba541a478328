//! CLI entry point for the cleaner

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use dirsweep::cli::{ColorMode, Switch, normalize_leading_args, should_use_color};
use dirsweep::{CleanConfig, CleanPrinter, Cleaner, JsonLines, LocalFs, OutputConfig};

const SWITCHES: &[Switch] = &[
    Switch::flag("p"),
    Switch::flag("v"),
    Switch::flag("swp"),
    Switch::flag("dep"),
    Switch::flag("tag"),
    Switch::flag("pyc"),
    Switch::flag("all"),
    Switch::flag("notwiddle"),
    Switch::flag("json"),
    Switch::valued("color"),
    Switch::flag("h"),
    Switch::flag("help"),
    Switch::flag("V"),
    Switch::flag("version"),
];

#[derive(Parser, Debug)]
#[command(name = "rmtwiddle")]
#[command(about = "Delete editor backup files (ending in ~) under the given directories")]
#[command(
    after_help = "Symlinks are never followed or removed, and .bzr, .svn, .git, .hg and .tox \
                  directories are never looked inside. Long switches may be given with a single \
                  dash, e.g. -swp. Switches are read only before the first directory; \
                  everything after it is a directory."
)]
#[command(version)]
struct Args {
    /// Directories to clean
    dirs: Vec<PathBuf>,

    /// Pretend: report what would be deleted, delete nothing
    #[arg(short = 'p')]
    pretend: bool,

    /// Announce each directory as it is checked
    #[arg(short = 'v')]
    verbose: bool,

    /// Also delete .swp and .swo files
    #[arg(long)]
    swp: bool,

    /// Also delete .depend files
    #[arg(long)]
    dep: bool,

    /// Also delete tags files (not included in -all)
    #[arg(long)]
    tag: bool,

    /// Also delete .pyc files (not included in -all)
    #[arg(long)]
    pyc: bool,

    /// Same as -swp -dep
    #[arg(long)]
    all: bool,

    /// Do not delete files ending in ~
    #[arg(long)]
    notwiddle: bool,

    /// Emit one JSON event per line instead of text
    #[arg(long)]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn config(&self) -> CleanConfig {
        let mut config = CleanConfig {
            pretend: self.pretend,
            remove_twiddle: !self.notwiddle,
            remove_swp: self.swp,
            remove_dep: self.dep,
            remove_tag: self.tag,
            remove_pyc: self.pyc,
            verbose: self.verbose,
        };
        if self.all {
            config.enable_all();
        }
        config
    }
}

fn print_usage() {
    if let Err(e) = Args::command().print_help() {
        eprintln!("rmtwiddle: error writing output: {}", e);
        process::exit(1);
    }
    println!();
}

fn main() {
    let raw: Vec<_> = std::env::args_os().skip(1).collect();
    if raw.is_empty() {
        print_usage();
        return;
    }

    let normalized = normalize_leading_args(raw, SWITCHES);
    for arg in &normalized.unrecognized {
        eprintln!("rmtwiddle: ignoring unrecognized switch '{}'", arg);
    }
    let args = Args::parse_from(std::iter::once(OsString::from("rmtwiddle")).chain(normalized.args));

    if args.dirs.is_empty() {
        println!("No directory specified");
        println!();
        print_usage();
        return;
    }

    let config = args.config();
    let cleaner = Cleaner::new(LocalFs, config);

    let result = if args.json {
        let mut output = JsonLines::stdout();
        cleaner
            .clean(&args.dirs, &mut output)
            .and_then(|report| output.flush().map(|_| report).map_err(dirsweep::Error::Output))
    } else {
        let mut output = CleanPrinter::stdout(OutputConfig {
            use_color: should_use_color(args.color),
        });
        match output.banner(&config) {
            Ok(()) => cleaner.clean(&args.dirs, &mut output),
            Err(e) => Err(dirsweep::Error::Output(e)),
        }
    };

    match result {
        // aborted roots were already reported as they happened
        Ok(report) if !report.is_success() => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("rmtwiddle: {}", e);
            process::exit(1);
        }
    }
}

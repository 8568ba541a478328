//! Command-line helpers shared by both binaries
//!
//! Both tools keep their historical single-dash long switches (`-swp`,
//! `-fold`, `-ascii`). clap only understands `--long`, so argv is first
//! rewritten by [`normalize_args`], which also pulls out switches nobody
//! knows so they can be reported instead of aborting the run.

use std::ffi::OsString;
use std::io::IsTerminal;

use clap::ValueEnum;

/// A switch a binary accepts, without leading dashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switch {
    pub name: &'static str,
    pub takes_value: bool,
}

impl Switch {
    pub const fn flag(name: &'static str) -> Self {
        Self {
            name,
            takes_value: false,
        }
    }

    pub const fn valued(name: &'static str) -> Self {
        Self {
            name,
            takes_value: true,
        }
    }
}

/// argv after normalization.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizedArgs {
    /// Arguments in the form clap expects.
    pub args: Vec<OsString>,
    /// Dash-prefixed arguments that match no known switch, in order.
    pub unrecognized: Vec<String>,
}

/// Rewrite single-dash long switches to `--name` and set aside unknown ones.
///
/// One-letter switches stay as `-x`. The argument following a switch that
/// takes a value is passed through untouched, as is everything after `--`.
/// `args` must not include the program name.
pub fn normalize_args<I>(args: I, switches: &[Switch]) -> NormalizedArgs
where
    I: IntoIterator<Item = OsString>,
{
    normalize(args, switches, false)
}

/// Like [`normalize_args`], but switches are only read before the first
/// positional argument. That argument and everything after it are
/// positional, even when they start with a dash.
pub fn normalize_leading_args<I>(args: I, switches: &[Switch]) -> NormalizedArgs
where
    I: IntoIterator<Item = OsString>,
{
    normalize(args, switches, true)
}

fn normalize<I>(args: I, switches: &[Switch], stop_at_positional: bool) -> NormalizedArgs
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = NormalizedArgs::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        let Some(text) = arg.to_str() else {
            normalized.args.push(arg);
            continue;
        };
        if text == "--" {
            normalized.args.push(arg);
            normalized.args.extend(iter);
            break;
        }
        if text == "-" || !text.starts_with('-') {
            if stop_at_positional {
                normalized.args.push(OsString::from("--"));
                normalized.args.push(arg);
                normalized.args.extend(iter);
                break;
            }
            normalized.args.push(arg);
            continue;
        }

        let bare = text.trim_start_matches('-');
        let (name, inline_value) = match bare.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (bare, None),
        };

        let Some(switch) = switches.iter().find(|s| s.name == name) else {
            normalized.unrecognized.push(text.to_string());
            continue;
        };

        let flag = if name.chars().count() == 1 {
            format!("-{name}")
        } else {
            format!("--{name}")
        };
        normalized.args.push(OsString::from(flag));
        if let Some(value) = inline_value {
            normalized.args.push(OsString::from(value));
        } else if switch.takes_value {
            if let Some(value) = iter.next() {
                normalized.args.push(value);
            }
        }
    }

    normalized
}

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
pub fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

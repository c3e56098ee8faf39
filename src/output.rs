//! Terminal output for finished scans
//!
//! The scan text is already final; colour only highlights section titles and
//! exception lines and never changes the characters written.

use std::ffi::OsString;
use std::io::{self, IsTerminal};

use clap::ValueEnum;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scan::EXCEPTION_PREFIX;

/// When to colour output, as chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorWhen {
    /// Colour a terminal unless the environment says otherwise
    #[default]
    Auto,
    Always,
    Never,
}

/// Configuration for terminal output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve `when` against the process environment and stdout.
    pub fn from_env(when: ColorWhen) -> Self {
        Self::resolve(when, io::stdout().is_terminal(), |key| std::env::var_os(key))
    }

    /// Resolve `when` with an explicit environment lookup.
    ///
    /// For `Auto`, a non-empty `NO_COLOR` wins over `FORCE_COLOR`, which wins
    /// over `TERM=dumb` and the terminal check.
    pub fn resolve(
        when: ColorWhen,
        is_terminal: bool,
        env: impl Fn(&str) -> Option<OsString>,
    ) -> Self {
        let set = |key: &str| env(key).is_some_and(|value| !value.is_empty());
        let use_color = match when {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto if set("NO_COLOR") => false,
            ColorWhen::Auto if set("FORCE_COLOR") => true,
            ColorWhen::Auto => is_terminal && env("TERM").is_none_or(|term| term != "dumb"),
        };
        Self { use_color }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env(ColorWhen::Auto)
    }
}

/// Print scan output to stdout.
pub fn print_scan(text: &str, config: &OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_scan(&mut stdout, text)
}

/// Write scan output, colouring titles and exception lines.
pub fn write_scan<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    let mut section_start = true;
    for line in text.lines() {
        if line.is_empty() {
            writeln!(out)?;
            section_start = true;
            continue;
        }

        let mut spec = ColorSpec::new();
        let highlighted = if section_start {
            section_start = false;
            spec.set_fg(Some(Color::Blue)).set_bold(true);
            true
        } else if line.starts_with(EXCEPTION_PREFIX) {
            spec.set_fg(Some(Color::Red));
            true
        } else {
            false
        };

        if highlighted {
            out.set_color(&spec)?;
            write!(out, "{}", line)?;
            out.reset()?;
        } else {
            write!(out, "{}", line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

// SPDX-License-Identifier: MIT
//
// schemes — command-line front end for 8-color SVG scheme files.
//
// The library crates do all the real work:
//
//   schemes-color → color literal codec (hex / rgb() / hsv())
//   schemes-svg   → scheme value, SVG parser, SVG renderer
//
// This binary only moves bytes between files, the terminal, and those
// crates:
//
//   schemes show <file>                  print title, version, palette
//   schemes render <file> [-o <out>]     re-emit in canonical form
//   schemes new [--title T] [--version N] <c0> … <c7>
//
// Log output goes to stderr and is controlled by SCHEMES_LOG
// (an EnvFilter directive, default "warn").

use std::env;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use schemes_color::Color;
use schemes_svg::{CURRENT_VERSION, DEFAULT_TITLE, Role, Scheme};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SCHEMES_LOG";

const USAGE: &str = "\
usage:
  schemes show <file>
  schemes render <file> [-o <out>]
  schemes new [--title <title>] [--version <n>] <c0> <c1> <c2> <c3> <c4> <c5> <c6> <c7>
  schemes help

Colors may be written as #RRGGBB, rgb(R,G,B) or hsv(H,S,V).";

// ─── Commands ───────────────────────────────────────────────────────────────

/// A fully parsed command line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Print a summary of a scheme file.
    Show { path: PathBuf },
    /// Parse a scheme file and write it back out in canonical form.
    Render { path: PathBuf, output: Option<PathBuf> },
    /// Build a scheme from color literals on the command line.
    New {
        title: Option<String>,
        version: Option<String>,
        colors: Vec<String>,
    },
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match name.as_str() {
        "help" | "-h" | "--help" => Ok(Command::Help),

        "show" => match rest {
            [path] => Ok(Command::Show { path: path.into() }),
            _ => bail!("show takes exactly one file\n\n{USAGE}"),
        },

        "render" => {
            let mut path = None;
            let mut output = None;
            let mut it = rest.iter();
            while let Some(arg) = it.next() {
                match arg.as_str() {
                    "-o" | "--output" => {
                        let out = it.next().context("-o needs a file name")?;
                        output = Some(PathBuf::from(out));
                    }
                    _ if path.is_none() => path = Some(PathBuf::from(arg)),
                    _ => bail!("unexpected argument `{arg}`\n\n{USAGE}"),
                }
            }
            let path = path.with_context(|| format!("render needs a file\n\n{USAGE}"))?;
            Ok(Command::Render { path, output })
        }

        "new" => {
            let mut title = None;
            let mut version = None;
            let mut colors = Vec::new();
            let mut it = rest.iter();
            while let Some(arg) = it.next() {
                match arg.as_str() {
                    "-t" | "--title" => title = Some(it.next().context("--title needs a value")?.clone()),
                    "-v" | "--version" => {
                        version = Some(it.next().context("--version needs a value")?.clone());
                    }
                    _ => colors.push(arg.clone()),
                }
            }
            if colors.len() != Role::COUNT {
                bail!("new needs exactly {} colors, got {}\n\n{USAGE}", Role::COUNT, colors.len());
            }
            Ok(Command::New { title, version, colors })
        }

        other => bail!("unknown command `{other}`\n\n{USAGE}"),
    }
}

fn run(command: Command) -> Result<()> {
    debug!(?command, "running");

    match command {
        Command::Help => println!("{USAGE}"),

        Command::Show { path } => {
            let scheme = load(&path)?;
            print!("{}", summary(&scheme));
        }

        Command::Render { path, output } => {
            let svg = load(&path)?.to_svg();
            match output {
                Some(out) => {
                    fs::write(&out, svg).with_context(|| format!("writing {}", out.display()))?;
                    info!(path = %out.display(), "scheme written");
                }
                None => io::stdout().write_all(svg.as_bytes())?,
            }
        }

        Command::New { title, version, colors } => {
            let scheme = build(title, version.as_deref(), &colors)?;
            io::stdout().write_all(scheme.to_svg().as_bytes())?;
        }
    }

    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn load(path: &Path) -> Result<Scheme> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let scheme =
        Scheme::from_svg(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    debug!(path = %path.display(), title = %scheme.title, "scheme loaded");
    Ok(scheme)
}

/// Assemble a scheme from command-line pieces. `colors` is in role order.
fn build(title: Option<String>, version: Option<&str>, colors: &[String]) -> Result<Scheme> {
    let version = version
        .map(|v| v.parse::<u32>().with_context(|| format!("invalid version `{v}`")))
        .transpose()?
        .unwrap_or(CURRENT_VERSION);

    let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());
    let mut scheme = Scheme::new(title, version, [Color::BLACK; Role::COUNT]);
    for (role, literal) in Role::ALL.into_iter().zip(colors) {
        scheme[role] = literal
            .parse::<Color>()
            .with_context(|| format!("color for #{} ({role})", role.id()))?;
    }

    Ok(scheme)
}

/// Human-readable listing of a scheme.
fn summary(scheme: &Scheme) -> String {
    let mut out = format!("{} (version {})\n", scheme.title, scheme.version);
    for (role, color) in scheme.iter() {
        out.push_str(&format!("  {}  {color}  {role}\n", role.id()));
    }
    out
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(e) = parse_args(&args).and_then(run) {
        eprintln!("schemes: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

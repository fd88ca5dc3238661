// src/main.rs

mod cli;

use anyhow::{bail, Context};
use clap::Parser;
use cli::Args;
use just_blame::analyzer;
use just_blame::config::Config;
use just_blame::renderer;
use just_blame::SessionRegistry;
use std::io::Write;
use std::time::Instant;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = Config::load_or_default(args.config.as_deref())?;
    let scale = config.color_scale.for_theme(args.theme);
    log::debug!("Using {} colors for the {:?} theme", scale.len(), args.theme);

    let start_time = Instant::now();
    let mut registry = SessionRegistry::default();
    let mut opened = Vec::new();
    let mut failed = 0;

    for (path, result) in analyzer::analyze_all(&args.paths, scale) {
        match result {
            Ok(session) => opened.push(registry.open(session).path.clone()),
            Err(e) => {
                log::error!("Blame of {} failed: {:?}", path.display(), e);
                eprintln!("{}: {}", path.display(), e);
                failed += 1;
            }
        }
    }
    log::info!("Blamed {} file(s) in {:.2?}", registry.len(), start_time.elapsed());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let show_headers = opened.len() > 1;

    for path in &opened {
        let Some(session) = registry.close(path) else {
            // Same file given twice, already shown
            continue;
        };
        if show_headers {
            writeln!(out, "==> {} <==", session.path.display())?;
        }
        match args.line {
            Some(line) => match renderer::line_details(&session, line) {
                Some(details) => write!(out, "{}", details)?,
                None => writeln!(out, "No commit for line {}", line)?,
            },
            None => renderer::render(&session, &mut out)
                .with_context(|| format!("writing annotations for {}", session.path.display()))?,
        }
    }

    if failed > 0 {
        bail!("{} of {} file(s) could not be blamed", failed, args.paths.len());
    }
    Ok(())
}

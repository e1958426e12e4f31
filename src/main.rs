use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use parkmap::api::{Backend, HttpBackend};
use parkmap::config::{ConfigSearch, DEFAULT_OUTPUT, FileConfig};
use parkmap::export::write_snapshot;
use parkmap::input::submit_search;
use parkmap::layers::{Applied, load_buildings, load_parking_lots};
use parkmap::map::{MapSession, Notice};

const CHART_WIDTH: usize = 40;

/// Explore campus buildings and find parking near them
///
/// Examples:
///   # Load the map and look up parking near one building
///   parkmap -b "Evans Library"
///
///   # Search several buildings against a remote backend
///   parkmap --backend http://campus.example:5000 -b zachry -b rudder
///
///   # Prompt for building names; `open <n>` zooms to the n-th result
///   parkmap -i
#[derive(Parser, Debug)]
#[command(name = "parkmap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches parkmap.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend base URL
    #[arg(long)]
    backend: Option<String>,

    /// Building to find nearby parking for (repeatable)
    #[arg(short = 'b', long = "building")]
    buildings: Vec<String>,

    /// Prompt for building names after the initial load
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Output session snapshot path
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (file_config, rejected) = load_file_config(&args)?;
    let verbose = is_verbose(&args, &file_config);
    init_logging(verbose);

    for (path, error) in &rejected {
        log::warn!("Failed to parse config file {}: {}", path.display(), error);
    }
    file_config.map.validate().context("Invalid [map] configuration")?;

    let backend_url = args
        .backend
        .clone()
        .unwrap_or_else(|| file_config.backend_url.clone());
    let timeout_secs = args.timeout.unwrap_or(file_config.timeout_secs);
    let output = args
        .output
        .clone()
        .or_else(|| file_config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    println!("parkmap - Campus Parking Map");
    println!("============================");
    println!();

    if verbose {
        let map = &file_config.map;
        println!("Configuration:");
        println!("  Backend: {}", backend_url);
        println!("  Timeout: {}s", timeout_secs);
        println!(
            "  Initial view: ({:.4}, {:.4}) zoom {}",
            map.center.0, map.center.1, map.zoom
        );
        println!("  Zoom range: {}-{}", map.min_zoom, map.max_zoom);
        println!("  Tiles: {}", map.tile_url);
        println!("  Output: {}", output.display());
        println!();
    }

    let backend = HttpBackend::new(&backend_url, Duration::from_secs(timeout_secs))
        .context("Failed to create backend client")?;
    let mut session = MapSession::new(&file_config.map);

    // The two loads are independent; one failing leaves the other intact
    let spinner = create_spinner("Loading buildings...");
    let start = Instant::now();
    match load_buildings(&mut session, &backend) {
        Ok(report) => spinner.finish_with_message(format!(
            "Buildings: {} [{:.1}s]",
            report.summary(),
            start.elapsed().as_secs_f32()
        )),
        Err(e) => {
            spinner.finish_with_message("Buildings unavailable");
            log::error!("Failed to load buildings: {}", e);
        }
    }

    let spinner = create_spinner("Loading parking lots...");
    let start = Instant::now();
    match load_parking_lots(&mut session, &backend) {
        Ok(report) => spinner.finish_with_message(format!(
            "Parking lots: {} [{:.1}s]",
            report.summary(),
            start.elapsed().as_secs_f32()
        )),
        Err(e) => {
            spinner.finish_with_message("Parking lots unavailable");
            log::error!("Failed to load parking lots: {}", e);
        }
    }

    for building in &args.buildings {
        search(&mut session, &backend, building);
    }

    if args.interactive {
        prompt_loop(&mut session, &backend)?;
    }

    write_snapshot(&output, &session).context("Failed to write session snapshot")?;

    println!();
    println!("Session: {}", output.display());

    Ok(())
}

/// Explicit `--config` or discovered config, plus discovered files that failed to parse
fn load_file_config(args: &Args) -> Result<(FileConfig, Vec<(PathBuf, String)>)> {
    match args.config {
        Some(ref path) => Ok((FileConfig::from_path(path)?, Vec::new())),
        None => {
            let ConfigSearch { found, rejected } = FileConfig::load();
            let config = found.map(|(_, config)| config).unwrap_or_default();
            Ok((config, rejected))
        }
    }
}

fn is_verbose(args: &Args, config: &FileConfig) -> bool {
    args.verbose || config.verbose
}

fn log_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(verbose)))
        .format_timestamp(None)
        .init();
}

fn search(session: &mut MapSession, backend: &dyn Backend, raw: &str) {
    let spinner = create_spinner(&format!("Finding parking near {}...", raw.trim()));
    let start = Instant::now();

    let Some(result) = submit_search(session, backend, raw) else {
        spinner.finish_and_clear();
        return;
    };

    match result {
        Ok(Applied::Highlighted(report)) => spinner.finish_with_message(format!(
            "Nearby parking: {} [{:.1}s]",
            report.summary(),
            start.elapsed().as_secs_f32()
        )),
        Ok(Applied::Rejected(_)) | Ok(Applied::Stale) => spinner.finish_and_clear(),
        Err(e) => {
            spinner.finish_with_message("Nearby parking unavailable");
            log::error!("Nearby parking query failed: {}", e);
        }
    }

    print_notices(session);
    print_results(session);
}

fn prompt_loop(session: &mut MapSession, backend: &dyn Backend) -> Result<()> {
    println!();
    println!("Enter a building name, `open <n>` to zoom to a result, or `quit`.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("building> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        match parse_command(&line) {
            Command::Quit => break,
            Command::Open(Some(index)) => open_result(session, index),
            Command::Open(None) => println!("Usage: open <result number>"),
            Command::Search(text) => search(session, backend, text),
        }
    }

    Ok(())
}

/// A line typed at the interactive prompt
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Quit,
    /// Zero-based result index, `None` when missing or not a positive number
    Open(Option<usize>),
    Search(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();

    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
        return Command::Quit;
    }

    let mut words = trimmed.splitn(2, char::is_whitespace);
    if words.next() == Some("open") {
        let index = words
            .next()
            .and_then(|n| n.trim().parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1));
        return Command::Open(index);
    }

    Command::Search(line)
}

fn open_result(session: &mut MapSession, index: usize) {
    match session.activate_result(index) {
        Some(feature) => {
            println!("{}", feature.popup.title);
            for line in &feature.popup.lines {
                println!("  {}", line);
            }
            let (lat, lon) = session.viewport.center;
            println!(
                "  View: ({:.5}, {:.5}) zoom {}",
                lat, lon, session.viewport.zoom
            );
        }
        None => println!("No result #{}", index + 1),
    }
}

fn print_notices(session: &mut MapSession) {
    for notice in session.take_notices() {
        match notice {
            Notice::Info(message) => println!("! {}", message),
            Notice::Error(message) => println!("! Error: {}", message),
        }
    }
}

fn print_results(session: &MapSession) {
    if session.results.is_empty() {
        return;
    }

    println!();
    for (i, entry) in session.results.entries().iter().enumerate() {
        println!("  {}. {}", i + 1, entry.label);
    }

    if let Some(chart) = session.chart.current() {
        println!();
        print!("{}", chart.render_text(CHART_WIDTH));
    }
    println!();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("  EXIT "), Command::Quit);
        assert_eq!(parse_command("open 2"), Command::Open(Some(1)));
        assert_eq!(parse_command("open   3  "), Command::Open(Some(2)));
        assert_eq!(parse_command("Evans Library"), Command::Search("Evans Library"));
        assert_eq!(parse_command(""), Command::Search(""));
    }

    #[test]
    fn test_bare_open_is_not_a_search() {
        assert_eq!(parse_command("open"), Command::Open(None));
        assert_eq!(parse_command("open   "), Command::Open(None));
        assert_eq!(parse_command("open 0"), Command::Open(None));
        assert_eq!(parse_command("open two"), Command::Open(None));
    }

    #[test]
    fn test_verbose_from_config_raises_log_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parkmap.toml");
        std::fs::write(&path, "verbose = true\n").unwrap();

        let args = Args::try_parse_from(["parkmap", "--config", path.to_str().unwrap()]).unwrap();
        let (config, rejected) = load_file_config(&args).unwrap();

        assert!(rejected.is_empty());
        assert!(!args.verbose);
        assert_eq!(log_filter(is_verbose(&args, &config)), "debug");
    }

    #[test]
    fn test_quiet_by_default() {
        let args = Args::try_parse_from(["parkmap"]).unwrap();
        assert_eq!(log_filter(is_verbose(&args, &FileConfig::default())), "warn");

        let args = Args::try_parse_from(["parkmap", "-v"]).unwrap();
        assert_eq!(log_filter(is_verbose(&args, &FileConfig::default())), "debug");
    }
}

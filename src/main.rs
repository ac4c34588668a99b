use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use lane_runner::build_info;
use lane_runner::core::{
    Difficulty, GameConfig, SceneMachine, FRAME_POLL_MS, MAX_FRAME_DELTA_SECONDS,
};
use lane_runner::input::{handle_key, InputResult};
use lane_runner::ui;
use lane_runner::utils::{logging, persistence};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Default, PartialEq)]
struct Options {
    difficulty: Difficulty,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Play(Options),
    Version,
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--difficulty" => {
                let name = iter.next().ok_or("--difficulty needs a value")?;
                options.difficulty = Difficulty::from_name(name)
                    .ok_or_else(|| format!("Unknown difficulty: {}", name))?;
            }
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Play(options))
}

fn print_help() {
    let names: Vec<&str> = Difficulty::ALL.iter().map(|d| d.name()).collect();
    println!("Lane Runner - Terminal Endless Runner\n");
    println!("Usage: lane-runner [options]\n");
    println!("Options:");
    println!(
        "  --difficulty <name>  {} (default {})",
        names.join(", "),
        Difficulty::default().name()
    );
    println!("  --config <path>      JSON overrides (default ~/.lane-runner/config.json)");
    println!("  --seed <n>           Seed obstacle spawning for a repeatable run");
    println!("  --version            Show version information");
    println!("  --help               Show this help message");
}

/// Preset, then the explicit config file or the user's default one.
fn load_config(options: &Options) -> Result<GameConfig, String> {
    let preset = options.difficulty.config();
    let path = options
        .config_path
        .clone()
        .or_else(persistence::default_config_path);

    match path {
        Some(path) => preset
            .with_overrides_file(&path)
            .map_err(|e| format!("{}: {}", path.display(), e)),
        None => Ok(preset),
    }
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            print_help();
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'lane-runner --help' for usage.");
            std::process::exit(1);
        }
    };

    let config = match load_config(&options) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Invalid config: {}", message);
            std::process::exit(1);
        }
    };

    // No log file is not fatal
    let logging_enabled = logging::init_logging().is_ok();
    let difficulty = options.difficulty.name();
    info!(
        version = %build_info::version_line(),
        difficulty,
        seed = ?options.seed,
        "lane runner starting"
    );

    let mut machine = SceneMachine::from_seed(config, options.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut machine, difficulty);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!(runs = machine.runs_started(), "lane runner exiting"),
        Err(e) => warn!(error = %e, "lane runner aborted"),
    }
    if !logging_enabled {
        eprintln!("(logging disabled: could not open ~/.lane-runner/lane-runner.log)");
    }

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    machine: &mut SceneMachine,
    difficulty: &str,
) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, machine, difficulty))?;

        // Drain all pending input before advancing the frame
        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            loop {
                if let Event::Key(key) = event::read()? {
                    if handle_key(key, machine) == InputResult::Quit {
                        return Ok(());
                    }
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = Instant::now();
        let dt = now
            .duration_since(last_frame)
            .as_secs_f64()
            .min(MAX_FRAME_DELTA_SECONDS);
        last_frame = now;

        machine.tick(dt);
    }
}

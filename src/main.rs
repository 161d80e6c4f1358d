use std::io::Write;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::unbounded_channel;

use lexi::app::App;
use lexi::config::{self, Config, MAX_RESULTS_LIMIT};
use lexi::lookup::{DictionaryClient, spawn_worker};
use lexi::notification::NotificationKind;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "lexi")]
#[command(about = "Search-as-you-type dictionary lookup")]
#[command(version)]
struct Args {
    /// Word to start with (queries suggestions immediately)
    word: Option<String>,

    /// Config file to use instead of ~/.config/lexi/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Suggestion service endpoint
    #[arg(long)]
    suggest_url: Option<String>,

    /// Definition service endpoint
    #[arg(long)]
    define_url: Option<String>,

    /// Maximum number of suggestions to show
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..=MAX_RESULTS_LIMIT as i64))]
    limit: Option<u16>,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.suggest_url {
            config.suggest.endpoint = url.clone();
        }
        if let Some(url) = &self.define_url {
            config.dictionary.endpoint = url.clone();
        }
        if let Some(limit) = self.limit {
            config.suggest.results_limit = usize::from(limit);
        }
    }
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_debug_log();

    let loaded = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    let mut config = loaded.config;
    args.apply_overrides(&mut config);

    // Fail before touching the terminal so the message stays readable
    let client = DictionaryClient::from_config(&config)?;

    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let worker = spawn_worker(client, request_rx, response_tx)?;

    let mut app = App::new(&config, request_tx, response_rx);
    if let Some(warning) = loaded.warning {
        app.controller.notify(&warning, NotificationKind::Warning);
    }
    if let Some(word) = &args.word {
        app.controller.set_input(word);
    }

    let terminal = ratatui::init();
    set_pointer_features(&mut std::io::stdout(), true);

    let result = run(terminal, &mut app);

    set_pointer_features(&mut std::io::stdout(), false);
    ratatui::restore();

    // Closing the request channel lets the worker thread finish
    drop(app);
    if worker.join().is_err() {
        log::error!("Lookup worker panicked");
    }

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }

        app.poll();
        app.controller.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Toggle mouse capture and bracketed paste
///
/// Both are optional, so failures are logged and the terminal is still
/// restored by the caller.
fn set_pointer_features(out: &mut impl Write, enable: bool) -> bool {
    let result = if enable {
        execute!(out, EnableMouseCapture, EnableBracketedPaste)
    } else {
        execute!(out, DisableBracketedPaste, DisableMouseCapture)
    };

    match result {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Failed to toggle mouse capture and bracketed paste: {}", e);
            false
        }
    }
}

/// Send debug logs to a file; the terminal belongs to the UI
#[cfg(debug_assertions)]
fn init_debug_log() {
    let path = std::env::temp_dir().join("lexi-debug.log");
    let Ok(file) = std::fs::OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use hospital_dash::app::App;
use hospital_dash::core::NotifyLevel;
use hospital_dash::terminal::TerminalGuard;
use hospital_dash::{config, input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "hospital-dash",
    version,
    about = "Hospital dashboard: OPD queue, bed availability and inventory"
)]
struct Args {
    /// Config file (default: ~/.config/hospital-dash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_error) = match config::load(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (config::Config::default(), Some(err)),
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let directive =
        logging::filter_directive(rust_log.as_deref(), args.verbose, config.log_level());
    let log_path = config::log_path().unwrap_or_else(|| PathBuf::from("hospital-dash.log"));
    let _log_guard = logging::init(&log_path, &directive)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting hospital-dash");

    let mut app = App::from_config(&config);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "using default config");
        app.set_status(format!("Config ignored: {err}"), NotifyLevel::Warn);
    }

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, config.tick_rate());
    let restored = guard.restore();

    if let Err(err) = res {
        tracing::error!(error = ?err, "dashboard loop failed");
        return Err(err);
    }
    restored?;

    tracing::info!("shutting down");
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(&mut app, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    input::handle_mouse(&mut app, mouse, size);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

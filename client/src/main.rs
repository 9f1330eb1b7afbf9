mod app;
mod broadcaster;
mod config;
mod input;
mod ledger;
mod runner;
mod state;
mod ui;

use std::sync::Arc;

use clap::Parser;
use eframe::egui;
use engine::{SessionRng, log, logger};
use tokio::sync::mpsc;

use app::SnakeApp;
use broadcaster::LocalBroadcaster;
use ledger::{LocalScoreLedger, ScoreLedger};
use state::{ClientCommand, SharedState};

#[derive(Parser)]
#[command(name = "snake_onchain")]
struct Args {
    /// Seed for the session RNG; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path; defaults to a YAML file next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("SnakeOnChain".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let store = config::config_store(args.config.as_deref());
    let mut cfg = store.load()?;

    let player_address = match cfg.player_address.clone() {
        Some(address) => address,
        None => {
            let address = ledger::generate_player_address();
            cfg.player_address = Some(address.clone());
            if let Err(e) = store.save(&cfg) {
                log!("Failed to persist player address: {}", e);
            }
            address
        }
    };

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let shared_state = SharedState::new();
    let game_broadcaster = LocalBroadcaster::new(shared_state.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.spawn(runner::run(cfg.rules, command_rx, game_broadcaster, rng));

    let score_ledger: Arc<dyn ScoreLedger> = Arc::new(LocalScoreLedger::new());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("Snake On-Chain"),
        ..Default::default()
    };
    let snake_app = SnakeApp::new(
        shared_state,
        command_tx.clone(),
        score_ledger,
        cfg,
        player_address,
    );
    eframe::run_native(
        "Snake On-Chain",
        options,
        Box::new(move |_cc| Ok(Box::new(snake_app))),
    )?;

    // Window closed: stop the loop before the runtime goes down.
    let _ = command_tx.send(ClientCommand::Quit);
    log!("Shut down gracefully");

    Ok(())
}

//! Asteroid Survival headless host
//!
//! Steps the simulation at a fixed 60 Hz with the autopilot at the controls,
//! paying coins into the save file as a real session would.

use std::path::PathBuf;

use clap::Parser;

use asteroid_survival::consts::FRAME_DT;
use asteroid_survival::shop::{select_skin, shop_listing};
use asteroid_survival::sim::{GamePhase, GameState, TickInput, format_survival_time, tick};
use asteroid_survival::{Economy, SaveStore, Tuning};

#[derive(Parser, Debug)]
#[command(name = "asteroid-survival")]
#[command(about = "Run Asteroid Survival headless with the autopilot flying")]
struct Cli {
    /// Save file holding coins and skins
    #[arg(long, default_value = "game_save.json")]
    save: PathBuf,
    /// JSON tuning overrides (defaults if missing or invalid)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Give up on a run after this many simulated seconds
    #[arg(long, default_value_t = 300.0)]
    seconds: f32,
    /// Number of runs to play back to back
    #[arg(long, default_value_t = 1)]
    runs: u32,
    /// Equip (buying first if needed) this skin before playing
    #[arg(long)]
    skin: Option<String>,
    /// Print the skin shop and exit
    #[arg(long)]
    list_skins: bool,
    /// Write the default tuning as JSON to this path and exit
    #[arg(long)]
    write_tuning: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if let Some(path) = &cli.write_tuning {
        match Tuning::default().write(path) {
            Ok(()) => println!("Wrote default tuning to {}", path.display()),
            Err(e) => {
                log::error!("Failed to write tuning to {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut store = SaveStore::open(&cli.save);

    if cli.list_skins {
        println!("Coins: {}", store.balance());
        for entry in shop_listing(&store) {
            let status = if entry.equipped {
                "equipped"
            } else if entry.owned {
                "owned"
            } else if entry.affordable {
                "buy"
            } else {
                "locked"
            };
            println!(
                "{:<10} {:<8} {:>4} coins  {}",
                entry.skin.id, entry.skin.name, entry.skin.price, status
            );
        }
        return;
    }

    if let Some(skin) = &cli.skin {
        let outcome = select_skin(&mut store, skin);
        if outcome.changed_skin() {
            log::info!("Shop: now flying {skin} ({outcome:?})");
        } else {
            log::warn!("Shop: kept current skin, {skin} gave {outcome:?}");
        }
    }

    let tuning = match &cli.tuning {
        Some(path) => Tuning::load(path),
        None => Tuning::default(),
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut state = GameState::new(seed, tuning);

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let max_frames = (cli.seconds.max(0.0) / FRAME_DT).ceil() as u64;

    for run in 1..=cli.runs {
        state.start_run(&store);
        let mut frames = 0;
        while state.phase() == GamePhase::Running && frames < max_frames {
            tick(&mut state, &input, FRAME_DT, &mut store);
            frames += 1;
        }
        log::debug!(
            "Run {run} stopped after {frames} frames, {} entities on the field",
            state.entity_count()
        );

        match state.summary() {
            Some(summary) => println!(
                "Run {run}: level {}, survived {}, {} asteroids, +{} coins",
                summary.level,
                format_survival_time(summary.survival_time),
                summary.asteroids_killed,
                summary.coins_earned
            ),
            None => println!(
                "Run {run}: still alive at level {} after {} ({} coins so far)",
                state.progression.level(),
                format_survival_time(state.progression.elapsed()),
                state.progression.session_coins()
            ),
        }
    }
    state.return_to_menu();

    println!("Balance: {} coins", store.balance());
    if let Err(e) = store.flush() {
        log::error!("Failed to write {}: {}", store.path().display(), e);
        std::process::exit(1);
    }
}

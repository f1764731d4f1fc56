//! Run progression: kills drive levels, levels pay coins
//!
//! The tracker is a small state machine (`Menu` → `Running` → `GameOver` →
//! `Running` ...). Coins go straight to the [`Economy`]; the tracker only
//! keeps the per-run total for the game-over screen.

use serde::{Deserialize, Serialize};

use crate::economy::Economy;

/// Where the session is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen; nothing simulates
    #[default]
    Menu,
    /// Active gameplay
    Running,
    /// Run ended; summary frozen for display
    GameOver,
}

/// Frozen result of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub level: u32,
    /// Seconds survived
    pub survival_time: f32,
    /// Per-level coins plus the game-over bonus
    pub coins_earned: u64,
    pub asteroids_killed: u32,
}

/// Total kills required to reach `level`: 4 for level 2, 6 for level 3, ...
pub fn asteroids_needed_for_level(level: u32) -> u32 {
    level.saturating_mul(2)
}

/// `MM:SS:CC` (minutes, seconds, centiseconds)
pub fn format_survival_time(seconds: f32) -> String {
    let centis = (seconds.max(0.0) * 100.0) as u64;
    let minutes = centis / 6000;
    let secs = (centis / 100) % 60;
    let cs = centis % 100;
    format!("{minutes:02}:{secs:02}:{cs:02}")
}

/// Session counters and level-up decisions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionTracker {
    phase: GamePhase,
    level: u32,
    elapsed: f32,
    kills: u32,
    starting_level: u32,
    session_coins: u64,
    max_level: u32,
    coins_per_level: u64,
    summary: Option<RunSummary>,
}

impl ProgressionTracker {
    pub fn new(max_level: u32, coins_per_level: u64) -> Self {
        Self {
            phase: GamePhase::Menu,
            level: 1,
            elapsed: 0.0,
            kills: 0,
            starting_level: 1,
            session_coins: 0,
            max_level,
            coins_per_level,
            summary: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn starting_level(&self) -> u32 {
        self.starting_level
    }

    /// Seconds survived this run
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn session_coins(&self) -> u64 {
        self.session_coins
    }

    /// Result of the last finished run, while in `GameOver`
    pub fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    /// Kills still needed for the next level; None at the level cap
    pub fn kills_to_next_level(&self) -> Option<u32> {
        if self.level >= self.max_level {
            return None;
        }
        Some(asteroids_needed_for_level(self.level + 1).saturating_sub(self.kills))
    }

    /// Enter `Running` with every counter reset. Valid from any phase.
    pub fn start_run(&mut self) {
        self.phase = GamePhase::Running;
        self.level = 1;
        self.elapsed = 0.0;
        self.kills = 0;
        self.session_coins = 0;
        self.starting_level = self.level;
        self.summary = None;
    }

    /// Leave whatever was happening for the title screen
    pub fn return_to_menu(&mut self) {
        self.phase = GamePhase::Menu;
        self.summary = None;
    }

    pub fn advance_clock(&mut self, dt: f32) {
        if self.is_running() {
            self.elapsed += dt;
        }
    }

    pub fn record_kills(&mut self, count: u32) {
        if self.is_running() {
            self.kills = self.kills.saturating_add(count);
        }
    }

    /// Gain at most one level if the kill count allows it.
    ///
    /// Credits `coins_per_level` to `economy` and returns the new level.
    pub fn check_level_up(&mut self, economy: &mut impl Economy) -> Option<u32> {
        if !self.is_running() || self.level >= self.max_level {
            return None;
        }
        if self.kills < asteroids_needed_for_level(self.level + 1) {
            return None;
        }

        self.level += 1;
        economy.add_coins(self.coins_per_level);
        self.session_coins += self.coins_per_level;
        log::info!(
            "Level {} reached ({} kills), +{} coins",
            self.level,
            self.kills,
            self.coins_per_level
        );
        Some(self.level)
    }

    /// Ship destroyed: pay the level bonus and freeze the summary.
    ///
    /// The bonus re-pays every level gained this run on top of the coins
    /// already credited by [`Self::check_level_up`]. Returns None if no run
    /// was in progress.
    pub fn end_run(&mut self, economy: &mut impl Economy) -> Option<RunSummary> {
        if !self.is_running() {
            return None;
        }

        let levels_completed = self.level.saturating_sub(self.starting_level);
        if levels_completed > 0 {
            let bonus = u64::from(levels_completed) * self.coins_per_level;
            economy.add_coins(bonus);
            self.session_coins += bonus;
            log::info!("Level bonus: {levels_completed} levels, +{bonus} coins");
        }

        let summary = RunSummary {
            level: self.level,
            survival_time: self.elapsed,
            coins_earned: self.session_coins,
            asteroids_killed: self.kills,
        };
        log::info!(
            "Game over at level {} after {} ({} kills, {} coins earned)",
            summary.level,
            format_survival_time(summary.survival_time),
            summary.asteroids_killed,
            summary.coins_earned
        );
        self.phase = GamePhase::GameOver;
        self.summary = Some(summary);
        Some(summary)
    }
}

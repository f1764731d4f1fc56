//! Coin balance and skin ownership
//!
//! The simulation and the shop talk to an [`Economy`]; they never touch the
//! save file directly. [`Wallet`] is the in-memory implementation,
//! [`SaveStore`] wraps it and writes every change through to a JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::STARTING_COINS;
use crate::error::SaveError;
use crate::skins::{DEFAULT_SKIN, find_skin};

/// Operations the game needs from the persistent economy.
///
/// Every call is synchronous and its effect is visible as soon as it returns.
/// Failed operations return `false` and change nothing.
pub trait Economy {
    fn balance(&self) -> u64;

    fn add_coins(&mut self, amount: u64);

    /// Debit `amount`; false (and no partial spend) if the balance is short
    fn spend_coins(&mut self, amount: u64) -> bool;

    fn owned_skins(&self) -> &[String];

    /// Buy a skin from the catalog.
    ///
    /// Fails if the skin is already owned (checked first), unknown, or
    /// unaffordable. On success the price is debited and the skin added.
    fn buy_skin(&mut self, id: &str) -> bool;

    fn current_skin(&self) -> &str;

    /// Equip an owned skin; false if not owned
    fn set_current_skin(&mut self, id: &str) -> bool;

    fn owns_skin(&self, id: &str) -> bool {
        self.owned_skins().iter().any(|s| s == id)
    }
}

/// Persisted economy record. Missing fields take their defaults; [`SaveRecord::repair`]
/// restores the skin invariants afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveRecord {
    pub coins: u64,
    pub owned_skins: Vec<String>,
    pub current_skin: String,
}

impl Default for SaveRecord {
    fn default() -> Self {
        Self {
            coins: STARTING_COINS,
            owned_skins: vec![DEFAULT_SKIN.to_string()],
            current_skin: DEFAULT_SKIN.to_string(),
        }
    }
}

impl SaveRecord {
    /// Restore record invariants: the default skin is owned and the
    /// equipped skin is one of the owned ones. Returns true if anything changed.
    pub fn repair(&mut self) -> bool {
        let mut changed = false;
        if !self.owned_skins.iter().any(|s| s == DEFAULT_SKIN) {
            self.owned_skins.insert(0, DEFAULT_SKIN.to_string());
            changed = true;
        }
        if !self.owned_skins.iter().any(|s| *s == self.current_skin) {
            self.current_skin = DEFAULT_SKIN.to_string();
            changed = true;
        }
        changed
    }
}

/// In-memory economy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wallet {
    record: SaveRecord,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a record, repairing it if needed
    pub fn from_record(mut record: SaveRecord) -> Self {
        if record.repair() {
            log::warn!("Save record repaired (equipped skin now '{}')", record.current_skin);
        }
        Self { record }
    }

    /// Wallet with a starting balance (tests, demos)
    pub fn with_coins(coins: u64) -> Self {
        Self {
            record: SaveRecord {
                coins,
                ..SaveRecord::default()
            },
        }
    }

    pub fn record(&self) -> &SaveRecord {
        &self.record
    }
}

impl Economy for Wallet {
    fn balance(&self) -> u64 {
        self.record.coins
    }

    fn add_coins(&mut self, amount: u64) {
        self.record.coins = self.record.coins.saturating_add(amount);
    }

    fn spend_coins(&mut self, amount: u64) -> bool {
        match self.record.coins.checked_sub(amount) {
            Some(left) => {
                self.record.coins = left;
                true
            }
            None => false,
        }
    }

    fn owned_skins(&self) -> &[String] {
        &self.record.owned_skins
    }

    fn buy_skin(&mut self, id: &str) -> bool {
        if self.owns_skin(id) {
            return false;
        }
        let Some(skin) = find_skin(id) else {
            return false;
        };
        if !self.spend_coins(skin.price) {
            return false;
        }
        self.record.owned_skins.push(id.to_string());
        true
    }

    fn current_skin(&self) -> &str {
        &self.record.current_skin
    }

    fn set_current_skin(&mut self, id: &str) -> bool {
        if !self.owns_skin(id) {
            return false;
        }
        self.record.current_skin = id.to_string();
        true
    }
}

/// File-backed economy: every successful change is written through.
///
/// Write failures are logged and swallowed; call [`SaveStore::flush`] to see them.
#[derive(Debug)]
pub struct SaveStore {
    path: PathBuf,
    wallet: Wallet,
}

impl SaveStore {
    /// Open a save file. Missing or corrupt files fall back to the default record.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let record = match Self::read_record(&path) {
            Ok(record) => {
                log::info!("Loaded save from {} ({} coins)", path.display(), record.coins);
                record
            }
            Err(SaveError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No save at {}, starting fresh", path.display());
                SaveRecord::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable save {}: {}", path.display(), e);
                SaveRecord::default()
            }
        };
        Self {
            path,
            wallet: Wallet::from_record(record),
        }
    }

    /// Read a record without any fallback
    pub fn read_record(path: &Path) -> Result<SaveRecord, SaveError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write the current record (temp file, then rename over the save)
    pub fn flush(&self) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(self.wallet.record())?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &SaveRecord {
        self.wallet.record()
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            log::warn!("Failed to save game data to {}: {}", self.path.display(), e);
        }
    }
}

impl Economy for SaveStore {
    fn balance(&self) -> u64 {
        self.wallet.balance()
    }

    fn add_coins(&mut self, amount: u64) {
        self.wallet.add_coins(amount);
        self.persist();
    }

    fn spend_coins(&mut self, amount: u64) -> bool {
        let ok = self.wallet.spend_coins(amount);
        if ok {
            self.persist();
        }
        ok
    }

    fn owned_skins(&self) -> &[String] {
        self.wallet.owned_skins()
    }

    fn buy_skin(&mut self, id: &str) -> bool {
        let ok = self.wallet.buy_skin(id);
        if ok {
            self.persist();
        }
        ok
    }

    fn current_skin(&self) -> &str {
        self.wallet.current_skin()
    }

    fn set_current_skin(&mut self, id: &str) -> bool {
        let ok = self.wallet.set_current_skin(id);
        if ok {
            self.persist();
        }
        ok
    }
}

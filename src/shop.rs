//! Shop screen rules
//!
//! Layout and hit-testing belong to the UI; this module decides what a
//! click on a skin does and what each entry should show.

use crate::economy::Economy;
use crate::skins::{SKINS, SkinInfo, find_skin};

/// Result of selecting a skin in the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopOutcome {
    /// Skin was already equipped; nothing happened
    AlreadyEquipped,
    /// Owned skin equipped
    Equipped,
    /// Skin bought and equipped
    Purchased,
    /// Not enough coins; nothing happened
    InsufficientFunds,
    /// Id not in the catalog
    UnknownSkin,
}

impl ShopOutcome {
    /// True if the equipped skin changed
    pub fn changed_skin(self) -> bool {
        matches!(self, ShopOutcome::Equipped | ShopOutcome::Purchased)
    }
}

/// Select a skin: equip it if owned, otherwise try to buy and equip it
pub fn select_skin(economy: &mut impl Economy, id: &str) -> ShopOutcome {
    let Some(skin) = find_skin(id) else {
        return ShopOutcome::UnknownSkin;
    };

    if economy.current_skin() == id {
        return ShopOutcome::AlreadyEquipped;
    }

    if economy.owns_skin(id) {
        economy.set_current_skin(id);
        log::info!("Equipped {}", skin.name);
        return ShopOutcome::Equipped;
    }

    if economy.buy_skin(id) {
        economy.set_current_skin(id);
        log::info!("Bought and equipped {} for {} coins", skin.name, skin.price);
        ShopOutcome::Purchased
    } else {
        log::info!(
            "Not enough coins for {} (need {}, have {})",
            skin.name,
            skin.price,
            economy.balance()
        );
        ShopOutcome::InsufficientFunds
    }
}

/// One row of the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopEntry {
    pub skin: &'static SkinInfo,
    pub owned: bool,
    pub equipped: bool,
    pub affordable: bool,
}

/// Every catalog skin with its status, in catalog order
pub fn shop_listing(economy: &impl Economy) -> Vec<ShopEntry> {
    let balance = economy.balance();
    SKINS
        .iter()
        .map(|skin| ShopEntry {
            skin,
            owned: economy.owns_skin(skin.id),
            equipped: economy.current_skin() == skin.id,
            affordable: balance >= skin.price,
        })
        .collect()
}

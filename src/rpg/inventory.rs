/// Inventory helpers shared by the crafting resolver and quest tracker.
///
/// The inventory is an ordered `Vec<Item>` with duplicates; items are
/// identified by name, compared case-insensitively everywhere.
use crate::rpg::types::{Item, Player};

/// Case-insensitive name comparison. Unicode-aware because content ships
/// with accented names ("Esencia Mágica").
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Count inventory items whose name matches, ignoring case.
pub fn count_items(player: &Player, name: &str) -> u32 {
    player
        .inventory
        .iter()
        .filter(|item| names_match(&item.name, name))
        .count() as u32
}

/// Whether the player carries at least one matching item.
pub fn has_item(player: &Player, name: &str) -> bool {
    player
        .inventory
        .iter()
        .any(|item| names_match(&item.name, name))
}

/// Remove up to `quantity` matching items, scanning from the end of the
/// inventory backward. Returns how many were actually removed.
pub fn remove_items(player: &mut Player, name: &str, quantity: u32) -> u32 {
    let mut removed = 0;
    let mut index = player.inventory.len();
    while index > 0 && removed < quantity {
        index -= 1;
        if names_match(&player.inventory[index].name, name) {
            player.inventory.remove(index);
            removed += 1;
        }
    }
    removed
}

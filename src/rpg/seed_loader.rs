//! Seed data loaders for data-driven content initialization.
//!
//! Content ships as JSON files under `data/seeds/`, one file per catalog
//! section, so operators can rebalance quests, factions, recipes, equipment,
//! and NPC dialogue without recompiling. `load_catalog` assembles a complete
//! [`ContentCatalog`] from a seeds directory; the per-section loaders are
//! exposed for partial loads and tooling.

use std::path::Path;

use log::info;

use crate::rpg::catalog::ContentCatalog;
use crate::rpg::errors::GameError;
use crate::rpg::types::{
    CraftRecipe, Equipment, FactionDefinition, NpcRecord, QuestDefinition,
};

/// Load quest definitions from `quests.json`.
pub fn load_quests_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<QuestDefinition>, GameError> {
    load_section(path.as_ref())
}

/// Load faction definitions from `factions.json`.
pub fn load_factions_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<FactionDefinition>, GameError> {
    load_section(path.as_ref())
}

/// Load crafting recipes from `recipes.json`.
pub fn load_recipes_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<CraftRecipe>, GameError> {
    load_section(path.as_ref())
}

/// Load equipment definitions from `equipment.json`.
pub fn load_equipment_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Equipment>, GameError> {
    load_section(path.as_ref())
}

/// Load NPC dialogue graphs from `npcs.json`.
pub fn load_npcs_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<NpcRecord>, GameError> {
    load_section(path.as_ref())
}

fn load_section<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, GameError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| GameError::InvalidSeedData {
        path: path.display().to_string(),
        detail: e.to_string(),
    })
}

/// Assemble a full catalog from a seeds directory. Every section file must
/// exist; an empty JSON array is the way to ship an empty section.
pub fn load_catalog<P: AsRef<Path>>(seeds_dir: P) -> Result<ContentCatalog, GameError> {
    let dir = seeds_dir.as_ref();
    let mut catalog = ContentCatalog::new();

    for quest in load_quests_from_json(dir.join("quests.json"))? {
        catalog = catalog.with_quest(quest);
    }
    for faction in load_factions_from_json(dir.join("factions.json"))? {
        catalog = catalog.with_faction(faction);
    }
    for recipe in load_recipes_from_json(dir.join("recipes.json"))? {
        catalog = catalog.with_recipe(recipe);
    }
    for equipment in load_equipment_from_json(dir.join("equipment.json"))? {
        catalog = catalog.with_equipment(equipment);
    }
    for npc in load_npcs_from_json(dir.join("npcs.json"))? {
        catalog = catalog.with_npc(npc);
    }

    info!(
        "loaded content catalog from {} ({} quests)",
        dir.display(),
        catalog.quest_count()
    );
    Ok(catalog)
}

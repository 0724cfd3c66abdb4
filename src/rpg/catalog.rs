//! Read-only content catalog.
//!
//! Holds the static game content (quest, faction, recipe, equipment, and NPC
//! definitions) keyed by id. Built once at startup — from the canonical seed,
//! from JSON seed files, or from test fixtures — and passed by shared
//! reference into every gameplay operation. Nothing here mutates after build,
//! which is what lets the core treat it as a plain lookup port.

use std::collections::HashMap;

use crate::rpg::types::{
    CraftRecipe, Equipment, FactionDefinition, NpcRecord, Player, QuestDefinition,
};

#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    quests: HashMap<String, QuestDefinition>,
    factions: HashMap<String, FactionDefinition>,
    recipes: HashMap<String, CraftRecipe>,
    equipment: HashMap<String, Equipment>,
    npcs: HashMap<String, NpcRecord>,
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quest(mut self, quest: QuestDefinition) -> Self {
        self.quests.insert(quest.id.clone(), quest);
        self
    }

    pub fn with_faction(mut self, faction: FactionDefinition) -> Self {
        self.factions.insert(faction.id.clone(), faction);
        self
    }

    pub fn with_recipe(mut self, recipe: CraftRecipe) -> Self {
        self.recipes.insert(recipe.id.clone(), recipe);
        self
    }

    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment.insert(equipment.id.clone(), equipment);
        self
    }

    pub fn with_npc(mut self, npc: NpcRecord) -> Self {
        self.npcs.insert(npc.id.clone(), npc);
        self
    }

    pub fn get_quest(&self, id: &str) -> Option<&QuestDefinition> {
        self.quests.get(id)
    }

    pub fn get_faction(&self, id: &str) -> Option<&FactionDefinition> {
        self.factions.get(id)
    }

    pub fn get_recipe(&self, id: &str) -> Option<&CraftRecipe> {
        self.recipes.get(id)
    }

    pub fn get_equipment(&self, id: &str) -> Option<&Equipment> {
        self.equipment.get(id)
    }

    pub fn get_npc(&self, id: &str) -> Option<&NpcRecord> {
        self.npcs.get(id)
    }

    pub fn quest_count(&self) -> usize {
        self.quests.len()
    }

    /// Quests the player could accept right now: level requirement met, not
    /// currently active, and either repeatable or never completed. Sorted by
    /// required level then id so bot listings are stable.
    pub fn available_quests_for(&self, player: &Player) -> Vec<&QuestDefinition> {
        let mut available: Vec<&QuestDefinition> = self
            .quests
            .values()
            .filter(|quest| {
                player.level >= quest.required_level
                    && player.active_quest(&quest.id).is_none()
                    && (quest.repeatable || !player.has_completed(&quest.id))
            })
            .collect();
        available.sort_by(|a, b| {
            a.required_level
                .cmp(&b.required_level)
                .then_with(|| a.id.cmp(&b.id))
        });
        available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpg::types::{ObjectiveKind, QuestObjective};

    fn kill_quest(id: &str, required_level: u32) -> QuestDefinition {
        QuestDefinition::new(id, id, "test quest", required_level).with_objective(
            QuestObjective::new(
                "Kill anything",
                ObjectiveKind::Kill {
                    target: crate::rpg::types::KillTarget::Any,
                },
                1,
            ),
        )
    }

    #[test]
    fn available_quests_filters_by_level() {
        let catalog = ContentCatalog::new()
            .with_quest(kill_quest("low", 1))
            .with_quest(kill_quest("high", 10));
        let player = Player::new("u1", "Alice");

        let available = catalog.available_quests_for(&player);
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "low");
    }

    #[test]
    fn available_quests_excludes_active_and_completed() {
        let catalog = ContentCatalog::new()
            .with_quest(kill_quest("a", 1))
            .with_quest(kill_quest("b", 1))
            .with_quest(kill_quest("c", 1).repeatable());
        let mut player = Player::new("u1", "Alice");

        let definition = catalog.get_quest("a").expect("quest a");
        player
            .active_quests
            .push(crate::rpg::types::PlayerQuest::start(definition));
        player.record_completed("b");
        player.record_completed("c");

        let available = catalog.available_quests_for(&player);
        let ids: Vec<&str> = available.iter().map(|q| q.id.as_str()).collect();
        // "a" is active, "b" is done and not repeatable, "c" repeats.
        assert_eq!(ids, vec!["c"]);
    }
}

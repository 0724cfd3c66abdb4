/// Quest progression tracking.
///
/// A player quest moves `Active → Completed` and nothing else; there is no
/// failed state. Progress arrives through four independent entry points
/// (kill, collect, craft, explore), each of which scans every active quest
/// and returns human-readable notification lines for the bot layer to send.
use std::fmt;

use log::{debug, info};

use crate::config::GameConfig;
use crate::rpg::catalog::ContentCatalog;
use crate::rpg::errors::GameError;
use crate::rpg::inventory::{count_items, names_match};
use crate::rpg::types::{
    CraftTarget, ExploreTarget, Item, KillTarget, ObjectiveKind, Player, PlayerQuest,
};

/// Recipe ids that satisfy the "craft any potion" objective target.
pub const POTION_RECIPE_IDS: &[&str] = &[
    "pocion_menor",
    "pocion_mayor",
    "pocion_mana",
    "elixir_curacion",
];

/// Accept a quest, adding a fresh instance to the player's journal.
///
/// Preconditions are checked in order: the quest must exist, the player must
/// meet its level requirement, it must not already be active, and a
/// non-repeatable quest must not already be completed.
pub fn accept_quest(
    catalog: &ContentCatalog,
    player: &mut Player,
    quest_id: &str,
) -> Result<String, GameError> {
    let definition = catalog
        .get_quest(quest_id)
        .ok_or_else(|| GameError::NotFound(format!("quest {}", quest_id)))?;

    if player.level < definition.required_level {
        return Err(GameError::LevelTooLow {
            required: definition.required_level,
            actual: player.level,
        });
    }
    if player.active_quest(quest_id).is_some() {
        return Err(GameError::AlreadyActive(quest_id.to_string()));
    }
    if !definition.repeatable && player.has_completed(quest_id) {
        return Err(GameError::AlreadyCompleted(quest_id.to_string()));
    }

    player.active_quests.push(PlayerQuest::start(definition));
    debug!("{} accepted quest {}", player.user_id, quest_id);
    Ok(format!("Quest accepted: {}", definition.name))
}

/// Advance kill objectives for a defeated enemy.
///
/// A named target matches by case-insensitive substring on the enemy name;
/// the boss wildcard matches any enemy at or above the configured boss level;
/// the plain wildcard matches every kill.
pub fn update_kill_objectives(
    config: &GameConfig,
    player: &mut Player,
    enemy_name: &str,
    enemy_level: u32,
) -> Vec<String> {
    let enemy_lower = enemy_name.to_lowercase();
    let mut notifications = Vec::new();

    for quest in player.active_quests.iter_mut().filter(|q| q.is_active()) {
        for objective in quest.objectives.iter_mut().filter(|o| !o.is_complete()) {
            let matches = match &objective.kind {
                ObjectiveKind::Kill { target } => match target {
                    KillTarget::Named(name) => enemy_lower.contains(&name.to_lowercase()),
                    KillTarget::AnyBoss => enemy_level >= config.boss_level_threshold,
                    KillTarget::Any => true,
                },
                _ => false,
            };
            if matches {
                objective.advance(1);
                if objective.is_complete() {
                    notifications.push(format!("Objective complete: {}", objective.description));
                }
            }
        }
        push_turn_in_notice(quest, &mut notifications);
    }

    notifications
}

/// Resynchronize collect objectives against the live inventory.
///
/// Unlike the other entry points this does not accumulate: `current` is
/// recomputed as the matching item count, clamped at `required`. It can go
/// down if items were consumed elsewhere, and calling it twice with an
/// unchanged inventory is a no-op.
pub fn update_collect_objectives(player: &mut Player) -> Vec<String> {
    let mut notifications = Vec::new();
    let counts: Vec<(String, u32)> = collect_targets(player)
        .into_iter()
        .map(|name| {
            let count = count_items(player, &name);
            (name, count)
        })
        .collect();

    for quest in player.active_quests.iter_mut().filter(|q| q.is_active()) {
        for objective in quest.objectives.iter_mut() {
            if let ObjectiveKind::Collect { item_name } = &objective.kind {
                let held = counts
                    .iter()
                    .find(|(name, _)| names_match(name, item_name))
                    .map(|(_, count)| *count)
                    .unwrap_or(0);
                let was_complete = objective.is_complete();
                objective.current = held.min(objective.required);
                if objective.is_complete() && !was_complete {
                    notifications.push(format!("Objective complete: {}", objective.description));
                }
            }
        }
        push_turn_in_notice(quest, &mut notifications);
    }

    notifications
}

/// Advance craft objectives after a successful craft.
pub fn update_craft_objectives(player: &mut Player, recipe_id: &str) -> Vec<String> {
    let mut notifications = Vec::new();

    for quest in player.active_quests.iter_mut().filter(|q| q.is_active()) {
        for objective in quest.objectives.iter_mut().filter(|o| !o.is_complete()) {
            let matches = match &objective.kind {
                ObjectiveKind::Craft { target } => match target {
                    CraftTarget::Recipe(id) => id == recipe_id,
                    CraftTarget::AnyPotion => POTION_RECIPE_IDS.contains(&recipe_id),
                },
                _ => false,
            };
            if matches {
                objective.advance(1);
                if objective.is_complete() {
                    notifications.push(format!("Objective complete: {}", objective.description));
                }
            }
        }
        push_turn_in_notice(quest, &mut notifications);
    }

    notifications
}

/// Advance explore objectives after the player clears a dungeon.
pub fn update_explore_objectives(player: &mut Player, dungeon_id: &str) -> Vec<String> {
    let mut notifications = Vec::new();

    for quest in player.active_quests.iter_mut().filter(|q| q.is_active()) {
        for objective in quest.objectives.iter_mut().filter(|o| !o.is_complete()) {
            let matches = match &objective.kind {
                ObjectiveKind::Explore { target } => match target {
                    ExploreTarget::Dungeon(id) => id == dungeon_id,
                    ExploreTarget::AnyDungeon => true,
                },
                _ => false,
            };
            if matches {
                objective.advance(1);
                if objective.is_complete() {
                    notifications.push(format!("Objective complete: {}", objective.description));
                }
            }
        }
        push_turn_in_notice(quest, &mut notifications);
    }

    notifications
}

/// The turn-in reminder is re-emitted on every update call while the quest
/// stays active, not only on the call that finished the last objective. The
/// bot layer dedupes if it cares.
fn push_turn_in_notice(quest: &PlayerQuest, notifications: &mut Vec<String>) {
    if quest.all_objectives_complete() {
        notifications.push(format!("Quest '{}' is ready to turn in!", quest.quest_id));
    }
}

/// Names targeted by the player's incomplete-or-not collect objectives.
fn collect_targets(player: &Player) -> Vec<String> {
    let mut targets: Vec<String> = Vec::new();
    for quest in player.active_quests.iter().filter(|q| q.is_active()) {
        for objective in &quest.objectives {
            if let ObjectiveKind::Collect { item_name } = &objective.kind {
                if !targets.iter().any(|t| names_match(t, item_name)) {
                    targets.push(item_name.clone());
                }
            }
        }
    }
    targets
}

/// True iff the quest is active and every objective has met its requirement.
pub fn is_completable(player: &Player, quest_id: &str) -> bool {
    player
        .active_quest(quest_id)
        .map(|quest| quest.all_objectives_complete())
        .unwrap_or(false)
}

/// Result of a successful quest turn-in. The bot layer formats this however
/// it wants; `Display` provides a reasonable default summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestCompletion {
    pub quest_id: String,
    pub quest_name: String,
    pub gold: u64,
    pub xp: u32,
    pub item: Option<String>,
    pub equipment: Option<String>,
    /// Set when the XP grant pushed the player over one or more thresholds.
    pub new_level: Option<u32>,
}

impl fmt::Display for QuestCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quest complete: {}! +{} gold, +{} XP",
            self.quest_name, self.gold, self.xp
        )?;
        if let Some(item) = &self.item {
            write!(f, ", received {}", item)?;
        }
        if let Some(equipment) = &self.equipment {
            write!(f, ", received {}", equipment)?;
        }
        if let Some(level) = self.new_level {
            write!(f, " — leveled up to {}!", level)?;
        }
        Ok(())
    }
}

/// Turn in a completed quest: grant rewards, run the level-up loop, move the
/// quest out of the active list, and record its id in the completed set.
///
/// Either every effect applies or none does; all precondition checks happen
/// before the first mutation.
pub fn complete_quest(
    catalog: &ContentCatalog,
    config: &GameConfig,
    player: &mut Player,
    quest_id: &str,
) -> Result<QuestCompletion, GameError> {
    let position = player
        .active_quests
        .iter()
        .position(|pq| pq.quest_id == quest_id && pq.is_active())
        .ok_or_else(|| GameError::NotActive(quest_id.to_string()))?;

    if !player.active_quests[position].all_objectives_complete() {
        return Err(GameError::Incomplete(quest_id.to_string()));
    }

    let definition = catalog
        .get_quest(quest_id)
        .ok_or_else(|| GameError::DefinitionMissing(quest_id.to_string()))?;
    let reward = definition.reward.clone();
    let quest_name = definition.name.clone();

    player.gold += reward.gold;
    player.xp += reward.xp;

    let item = reward.bonus_item.map(|name| {
        player.inventory.push(Item::new(&name, "Quest reward", 0));
        name
    });

    // Equipment that has dropped out of the catalog is skipped silently;
    // the rest of the reward still applies.
    let equipment = reward.equipment_id.and_then(|id| {
        catalog.get_equipment(&id).map(|eq| {
            let name = eq.name.clone();
            player.equipment.push(eq.clone());
            name
        })
    });

    let new_level = apply_level_ups(config, player);

    let mut finished = player.active_quests.remove(position);
    finished.mark_complete();
    player.record_completed(quest_id);

    info!(
        "{} completed quest {} (+{} gold, +{} XP)",
        player.user_id, quest_id, reward.gold, reward.xp
    );

    Ok(QuestCompletion {
        quest_id: quest_id.to_string(),
        quest_name,
        gold: reward.gold,
        xp: reward.xp,
        item,
        equipment,
        new_level,
    })
}

/// Convert banked XP into levels. One reward can cross several thresholds;
/// each level raises the maximums and refills HP and mana.
fn apply_level_ups(config: &GameConfig, player: &mut Player) -> Option<u32> {
    let starting_level = player.level;
    while player.xp >= config.xp_threshold(player.level) {
        player.xp -= config.xp_threshold(player.level);
        player.level += 1;
        player.max_hp += config.level_up_hp_bonus;
        player.max_mana += config.level_up_mana_bonus;
        player.hp = player.max_hp;
        player.mana = player.max_mana;
    }
    (player.level > starting_level).then_some(player.level)
}

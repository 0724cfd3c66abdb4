use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const PLAYER_SCHEMA_VERSION: u8 = 2;
pub const QUEST_SCHEMA_VERSION: u8 = 1;
pub const FACTION_SCHEMA_VERSION: u8 = 1;
pub const RECIPE_SCHEMA_VERSION: u8 = 1;
pub const NPC_SCHEMA_VERSION: u8 = 1;

fn default_quest_schema_version() -> u8 {
    QUEST_SCHEMA_VERSION
}

fn default_faction_schema_version() -> u8 {
    FACTION_SCHEMA_VERSION
}

fn default_recipe_schema_version() -> u8 {
    RECIPE_SCHEMA_VERSION
}

fn default_npc_schema_version() -> u8 {
    NPC_SCHEMA_VERSION
}

fn default_player_schema_version() -> u8 {
    PLAYER_SCHEMA_VERSION
}

// ============================================================================
// Items & Equipment
// ============================================================================

/// Consumable item carried in a player's inventory.
///
/// Inventory is an ordered sequence; duplicates are allowed and items are
/// matched by name (case-insensitive) throughout the crafting and quest code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub value: u32,
}

impl Item {
    pub fn new(name: &str, description: &str, value: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            value,
        }
    }
}

/// Equipment rarity. Unknown rarities deserialize via the default to the
/// lowest tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Deterministic stat line used when crafting produces equipment that has
    /// no catalog entry: (attack, defense, value).
    pub fn fallback_stats(self) -> (u32, u32, u32) {
        match self {
            Rarity::Common => (5, 3, 100),
            Rarity::Rare => (12, 8, 300),
            Rarity::Epic => (20, 14, 800),
            Rarity::Legendary => (35, 25, 2000),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub attack: u32,
    pub defense: u32,
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub rarity: Rarity,
}

impl Equipment {
    pub fn new(id: &str, name: &str, attack: u32, defense: u32, value: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            attack,
            defense,
            value,
            rarity: Rarity::Common,
        }
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Synthesize a generic piece of equipment from a rarity tier alone.
    /// Used when a recipe result id has no catalog entry.
    pub fn synthesized(id: &str, rarity: Rarity) -> Self {
        let (attack, defense, value) = rarity.fallback_stats();
        Self {
            id: id.to_string(),
            name: id.replace('_', " "),
            attack,
            defense,
            value,
            rarity,
        }
    }
}

// ============================================================================
// Quests
// ============================================================================

/// Wildcard-aware kill objective target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KillTarget {
    /// Matches any enemy whose name contains this string (case-insensitive).
    Named(String),
    /// Matches any enemy at or above the configured boss level.
    AnyBoss,
    /// Matches every kill.
    Any,
}

/// Wildcard-aware craft objective target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CraftTarget {
    /// Matches one recipe id exactly.
    Recipe(String),
    /// Matches any recipe in [`POTION_RECIPE_IDS`](crate::rpg::quest::POTION_RECIPE_IDS).
    AnyPotion,
}

/// Wildcard-aware explore objective target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExploreTarget {
    Dungeon(String),
    AnyDungeon,
}

/// What a quest objective counts. Each variant is advanced by exactly one of
/// the four update entry points in [`crate::rpg::quest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveKind {
    Kill { target: KillTarget },
    Collect { item_name: String },
    Craft { target: CraftTarget },
    Explore { target: ExploreTarget },
}

/// A single quest objective. In a [`QuestDefinition`] this is a template with
/// `current == 0`; accepting the quest deep-copies it into the player quest,
/// where `current` advances independently of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestObjective {
    pub description: String,
    pub kind: ObjectiveKind,
    pub required: u32,
    #[serde(default)]
    pub current: u32,
}

impl QuestObjective {
    pub fn new(description: &str, kind: ObjectiveKind, required: u32) -> Self {
        Self {
            description: description.to_string(),
            kind,
            required,
            current: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.required
    }

    /// Advance progress by `amount`, clamped at `required`.
    pub fn advance(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.required);
    }
}

/// Reward granted on quest turn-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct QuestReward {
    #[serde(default)]
    pub gold: u64,
    #[serde(default)]
    pub xp: u32,
    /// Name of a generic consumable constructed on turn-in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_item: Option<String>,
    /// Equipment catalog id; silently skipped if the catalog has no entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<String>,
}

/// Immutable quest template owned by the content catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub required_level: u32,
    #[serde(default)]
    pub repeatable: bool,
    pub objectives: Vec<QuestObjective>,
    #[serde(default)]
    pub reward: QuestReward,
    #[serde(default = "default_quest_schema_version")]
    pub schema_version: u8,
}

impl QuestDefinition {
    pub fn new(id: &str, name: &str, description: &str, required_level: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            required_level,
            repeatable: false,
            objectives: Vec::new(),
            reward: QuestReward::default(),
            schema_version: QUEST_SCHEMA_VERSION,
        }
    }

    pub fn with_objective(mut self, objective: QuestObjective) -> Self {
        self.objectives.push(objective);
        self
    }

    pub fn with_reward(mut self, reward: QuestReward) -> Self {
        self.reward = reward;
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Active,
    Completed,
}

/// A quest in a player's journal: a deep copy of the definition's objectives
/// with live progress counters. At most one active instance per quest id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerQuest {
    pub quest_id: String,
    pub status: QuestStatus,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub objectives: Vec<QuestObjective>,
}

impl PlayerQuest {
    /// Deep-copy the definition objectives with progress reset to zero.
    pub fn start(definition: &QuestDefinition) -> Self {
        let objectives = definition
            .objectives
            .iter()
            .cloned()
            .map(|mut obj| {
                obj.current = 0;
                obj
            })
            .collect();
        Self {
            quest_id: definition.id.clone(),
            status: QuestStatus::Active,
            started_at: Utc::now(),
            completed_at: None,
            objectives,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == QuestStatus::Active
    }

    pub fn all_objectives_complete(&self) -> bool {
        self.objectives.iter().all(|obj| obj.is_complete())
    }

    pub fn mark_complete(&mut self) {
        self.status = QuestStatus::Completed;
        self.completed_at = Some(Utc::now());
    }
}

// ============================================================================
// Factions & Reputation
// ============================================================================

/// Reputation standing, lowest to highest. Ordering is load-bearing:
/// tier-crossing rewards fire only when the new tier compares strictly
/// greater than the old one.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum ReputationTier {
    Hostile,
    Neutral,
    Friendly,
    Honored,
    Exalted,
}

impl fmt::Display for ReputationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReputationTier::Hostile => "Hostile",
            ReputationTier::Neutral => "Neutral",
            ReputationTier::Friendly => "Friendly",
            ReputationTier::Honored => "Honored",
            ReputationTier::Exalted => "Exalted",
        };
        write!(f, "{}", label)
    }
}

/// One-time reward applied when a player first reaches a tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TierReward {
    #[serde(default)]
    pub gold: u64,
    #[serde(default)]
    pub xp: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_unlock: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactionDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// At most one rival; reputation changes propagate there negated at half
    /// rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rival_faction_id: Option<String>,
    #[serde(default)]
    pub tier_rewards: HashMap<ReputationTier, TierReward>,
    #[serde(default = "default_faction_schema_version")]
    pub schema_version: u8,
}

impl FactionDefinition {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            rival_faction_id: None,
            tier_rewards: HashMap::new(),
            schema_version: FACTION_SCHEMA_VERSION,
        }
    }

    pub fn with_rival(mut self, faction_id: &str) -> Self {
        self.rival_faction_id = Some(faction_id.to_string());
        self
    }

    pub fn with_tier_reward(mut self, tier: ReputationTier, reward: TierReward) -> Self {
        self.tier_rewards.insert(tier, reward);
        self
    }
}

/// Per-player standing with one faction. Created lazily on first change,
/// never removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerFactionReputation {
    pub faction_id: String,
    pub reputation: i32,
    pub updated_at: DateTime<Utc>,
}

impl PlayerFactionReputation {
    pub fn new(faction_id: &str) -> Self {
        Self {
            faction_id: faction_id.to_string(),
            reputation: 0,
            updated_at: Utc::now(),
        }
    }
}

// ============================================================================
// Crafting
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: u32,
}

impl Ingredient {
    pub fn new(name: &str, quantity: u32) -> Self {
        Self {
            name: name.to_string(),
            quantity,
        }
    }
}

/// A missing ingredient reported by the crafting resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientShortfall {
    pub name: String,
    pub missing: u32,
}

impl fmt::Display for IngredientShortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ×{}", self.name, self.missing)
    }
}

/// What a recipe produces: a consumable built from an inline descriptor, or a
/// piece of equipment resolved through the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecipeResult {
    Item {
        name: String,
        #[serde(default)]
        description: String,
        /// Falls back to the configured default when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<u32>,
    },
    Equipment { equipment_id: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CraftRecipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub required_level: u32,
    pub ingredients: Vec<Ingredient>,
    pub result: RecipeResult,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default = "default_recipe_schema_version")]
    pub schema_version: u8,
}

impl CraftRecipe {
    pub fn new(id: &str, name: &str, required_level: u32, result: RecipeResult) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            required_level,
            ingredients: Vec::new(),
            result,
            rarity: Rarity::Common,
            schema_version: RECIPE_SCHEMA_VERSION,
        }
    }

    pub fn with_ingredient(mut self, name: &str, quantity: u32) -> Self {
        self.ingredients.push(Ingredient::new(name, quantity));
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }
}

// ============================================================================
// NPCs & Dialogue
// ============================================================================

/// Minimum standing with a faction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReputationRequirement {
    pub faction_id: String,
    pub minimum: i32,
}

/// Gate on a dialogue node. Absent fields pass vacuously; present fields must
/// all pass. Reputation and item requirements are separate fields on purpose:
/// the legacy data model overloaded one reference id for both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NodeRequirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_reputation: Option<ReputationRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_item: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Entry points; `start_conversation` picks the first passing one.
    Greeting,
    /// Interior nodes reached by option links.
    Topic,
}

/// Side effect attached to a dialogue option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DialogueAction {
    OpenShop,
    StartQuest { quest_id: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogueOption {
    pub text: String,
    /// Positive grants gold, negative charges it (checked before any effect).
    #[serde(default)]
    pub gold_delta: i64,
    /// Faction id and amount routed through the reputation ledger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation: Option<(String, i32)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<DialogueAction>,
    /// Node to advance to; `None` ends the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_node: Option<String>,
}

impl DialogueOption {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            gold_delta: 0,
            reputation: None,
            action: None,
            next_node: None,
        }
    }

    pub fn with_gold_delta(mut self, delta: i64) -> Self {
        self.gold_delta = delta;
        self
    }

    pub fn with_reputation(mut self, faction_id: &str, amount: i32) -> Self {
        self.reputation = Some((faction_id.to_string(), amount));
        self
    }

    pub fn with_action(mut self, action: DialogueAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn leads_to(mut self, node_id: &str) -> Self {
        self.next_node = Some(node_id.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DialogueNode {
    pub id: String,
    pub kind: NodeKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<NodeRequirement>,
    #[serde(default)]
    pub options: Vec<DialogueOption>,
}

impl DialogueNode {
    pub fn new(id: &str, kind: NodeKind, text: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            text: text.to_string(),
            requirement: None,
            options: Vec::new(),
        }
    }

    pub fn with_requirement(mut self, requirement: NodeRequirement) -> Self {
        self.requirement = Some(requirement);
        self
    }

    pub fn with_option(mut self, option: DialogueOption) -> Self {
        self.options.push(option);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NpcRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Talking to this NPC at all requires this standing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_faction: Option<ReputationRequirement>,
    #[serde(default)]
    pub nodes: Vec<DialogueNode>,
    #[serde(default = "default_npc_schema_version")]
    pub schema_version: u8,
}

impl NpcRecord {
    pub fn new(id: &str, name: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            required_faction: None,
            nodes: Vec::new(),
            schema_version: NPC_SCHEMA_VERSION,
        }
    }

    pub fn with_required_faction(mut self, faction_id: &str, minimum: i32) -> Self {
        self.required_faction = Some(ReputationRequirement {
            faction_id: faction_id.to_string(),
            minimum,
        });
        self
    }

    pub fn with_node(mut self, node: DialogueNode) -> Self {
        self.nodes.push(node);
        self
    }
}

// ============================================================================
// Player
// ============================================================================

/// Full per-player game state. Owned by the embedding application; every
/// core operation borrows it mutably for the duration of one synchronous
/// call and the caller persists the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    /// Chat user id the bot addresses this player by.
    pub user_id: String,
    pub name: String,
    pub level: u32,
    pub xp: u32,
    pub gold: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub mana: u32,
    pub max_mana: u32,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub active_quests: Vec<PlayerQuest>,
    /// Completed quest ids, set semantics (membership checked before insert).
    #[serde(default)]
    pub completed_quests: Vec<String>,
    /// Unique by faction id.
    #[serde(default)]
    pub reputations: Vec<PlayerFactionReputation>,
    #[serde(default)]
    pub unlocked_zones: Vec<String>,
    #[serde(default)]
    pub pvp_wins: u32,
    #[serde(default)]
    pub pvp_losses: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_player_schema_version")]
    pub schema_version: u8,
}

impl Player {
    pub fn new(user_id: &str, name: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: name.to_string(),
            level: 1,
            xp: 0,
            gold: 0,
            hp: 100,
            max_hp: 100,
            mana: 50,
            max_mana: 50,
            inventory: Vec::new(),
            equipment: Vec::new(),
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
            reputations: Vec::new(),
            unlocked_zones: Vec::new(),
            pvp_wins: 0,
            pvp_losses: 0,
            created_at: Utc::now(),
            schema_version: PLAYER_SCHEMA_VERSION,
        }
    }

    pub fn active_quest(&self, quest_id: &str) -> Option<&PlayerQuest> {
        self.active_quests
            .iter()
            .find(|pq| pq.quest_id == quest_id && pq.is_active())
    }

    pub fn active_quest_mut(&mut self, quest_id: &str) -> Option<&mut PlayerQuest> {
        self.active_quests
            .iter_mut()
            .find(|pq| pq.quest_id == quest_id && pq.is_active())
    }

    pub fn has_completed(&self, quest_id: &str) -> bool {
        self.completed_quests.iter().any(|id| id == quest_id)
    }

    pub fn reputation_with(&self, faction_id: &str) -> i32 {
        self.reputations
            .iter()
            .find(|r| r.faction_id == faction_id)
            .map(|r| r.reputation)
            .unwrap_or(0)
    }

    /// Record a completed quest id without introducing duplicates.
    pub fn record_completed(&mut self, quest_id: &str) {
        if !self.has_completed(quest_id) {
            self.completed_quests.push(quest_id.to_string());
        }
    }

    /// Add a zone to the unlocked set if not already present.
    pub fn unlock_zone(&mut self, zone_id: &str) -> bool {
        if self.unlocked_zones.iter().any(|z| z == zone_id) {
            return false;
        }
        self.unlocked_zones.push(zone_id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objective_advance_clamps_at_required() {
        let mut obj = QuestObjective::new(
            "Slay wolves",
            ObjectiveKind::Kill {
                target: KillTarget::Named("wolf".to_string()),
            },
            3,
        );
        obj.advance(2);
        assert_eq!(obj.current, 2);
        assert!(!obj.is_complete());
        obj.advance(5);
        assert_eq!(obj.current, 3);
        assert!(obj.is_complete());
    }

    #[test]
    fn player_quest_deep_copies_objectives() {
        let definition = QuestDefinition::new("q1", "Quest", "desc", 1).with_objective(
            QuestObjective::new(
                "Collect herbs",
                ObjectiveKind::Collect {
                    item_name: "Herb".to_string(),
                },
                2,
            ),
        );
        let mut pq = PlayerQuest::start(&definition);
        pq.objectives[0].advance(2);
        assert_eq!(definition.objectives[0].current, 0);
    }

    #[test]
    fn record_completed_is_idempotent() {
        let mut player = Player::new("u1", "Alice");
        player.record_completed("q1");
        player.record_completed("q1");
        assert_eq!(player.completed_quests, vec!["q1".to_string()]);
    }

    #[test]
    fn unlock_zone_rejects_duplicates() {
        let mut player = Player::new("u1", "Alice");
        assert!(player.unlock_zone("bosque_oscuro"));
        assert!(!player.unlock_zone("bosque_oscuro"));
        assert_eq!(player.unlocked_zones.len(), 1);
    }

    #[test]
    fn rarity_fallback_stats_are_monotonic() {
        let tiers = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];
        for pair in tiers.windows(2) {
            let (a_atk, a_def, a_val) = pair[0].fallback_stats();
            let (b_atk, b_def, b_val) = pair[1].fallback_stats();
            assert!(a_atk < b_atk && a_def < b_def && a_val < b_val);
        }
    }

    #[test]
    fn player_round_trips_through_json() {
        let mut player = Player::new("u1", "Alice");
        player.inventory.push(Item::new("Fragmento de Cristal", "", 10));
        player
            .reputations
            .push(PlayerFactionReputation::new("gremio_magos"));
        let json = serde_json::to_string(&player).expect("serialize");
        let back: Player = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(player, back);
    }
}

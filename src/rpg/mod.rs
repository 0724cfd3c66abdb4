//! Gameplay data model and logic.
//!
//! Everything here operates synchronously on one exclusively-borrowed
//! [`Player`](types::Player) plus a shared [`ContentCatalog`](catalog::ContentCatalog);
//! the embedding bot owns loading and persisting both.

pub mod catalog;
pub mod crafting;
pub mod dialogue;
pub mod errors;
pub mod inventory;
pub mod leaderboard;
pub mod quest;
pub mod reputation;
pub mod seed;
pub mod seed_loader;
pub mod types;

pub use catalog::ContentCatalog;
pub use crafting::{check_ingredients, craft, CraftOutcome, Crafted, IngredientCheck};
pub use dialogue::{
    process_dialogue_option, start_conversation, Conversation, DialogueOutcome, DialogueSignal,
};
pub use errors::GameError;
pub use inventory::{count_items, has_item, remove_items};
pub use leaderboard::{top_players, LeaderboardEntry, Metric};
pub use quest::{
    accept_quest, complete_quest, is_completable, update_collect_objectives,
    update_craft_objectives, update_explore_objectives, update_kill_objectives, QuestCompletion,
    POTION_RECIPE_IDS,
};
pub use reputation::{gain_reputation, reputation_tier, reputation_value};
pub use seed::canonical_content;
pub use seed_loader::load_catalog;
pub use types::*;

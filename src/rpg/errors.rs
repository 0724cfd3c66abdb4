use thiserror::Error;

use crate::rpg::types::IngredientShortfall;

/// Errors that can arise from gameplay operations.
///
/// Every variant is recoverable: the bot layer surfaces the message to the
/// player, who retries after correcting the precondition (gaining a level,
/// gathering ingredients, turning in a quest).
#[derive(Debug, Error)]
pub enum GameError {
    /// Returned when looking up a catalog record that is not present.
    #[error("not found: {0}")]
    NotFound(String),

    /// Player level is below the requirement for a quest or recipe.
    #[error("requires level {required}, you are level {actual}")]
    LevelTooLow { required: u32, actual: u32 },

    /// Quest is already in the player's active list.
    #[error("quest already active: {0}")]
    AlreadyActive(String),

    /// Non-repeatable quest already completed by this player.
    #[error("quest already completed: {0}")]
    AlreadyCompleted(String),

    /// Turn-in attempted for a quest the player never accepted.
    #[error("quest not active: {0}")]
    NotActive(String),

    /// Turn-in attempted while objectives remain unfinished.
    #[error("quest objectives incomplete: {0}")]
    Incomplete(String),

    /// An active player quest references a definition the catalog no longer
    /// has. Indicates a content integrity problem, not a player mistake.
    #[error("quest definition missing from catalog: {0}")]
    DefinitionMissing(String),

    /// Crafting attempted without the required ingredients.
    #[error("missing ingredients: {}", format_shortfalls(.0))]
    MissingIngredients(Vec<IngredientShortfall>),

    /// Dialogue option carries a gold cost the player cannot cover.
    #[error("insufficient gold: need {required}, have {available}")]
    InsufficientGold { required: u64, available: u64 },

    /// Dialogue option index out of range for the current node.
    #[error("invalid dialogue choice: {0}")]
    InvalidChoice(usize),

    /// NPC or dialogue node gated behind a requirement the player fails.
    #[error("{0}")]
    RequirementNotMet(String),

    /// Wrapper around IO errors (seed file loading).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed seed or config content.
    #[error("invalid seed data in {path}: {detail}")]
    InvalidSeedData { path: String, detail: String },
}

fn format_shortfalls(shortfalls: &[IngredientShortfall]) -> String {
    shortfalls
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

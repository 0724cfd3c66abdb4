//! # Chatrpg - Gameplay core for a chat-bot text RPG
//!
//! Chatrpg is the gameplay-logic layer of a text RPG played through a chat
//! bot. It owns player progression rules — quests, faction reputation,
//! crafting, NPC dialogue, leaderboards — and nothing else: the chat
//! transport, persistence, content authoring, and combat randomness all live
//! in the embedding application.
//!
//! ## Features
//!
//! - **Quest Tracking**: Multi-objective quests advanced by kill, collect,
//!   craft, and explore events, with wildcard targets and idempotent turn-in.
//! - **Faction Reputation**: Tiered standing with one-time tier rewards, zone
//!   unlocks, and rival-faction propagation with a cycle guard.
//! - **Crafting**: Ingredient validation with exact shortfall reporting,
//!   atomic consumption, and item or equipment production.
//! - **NPC Dialogue**: Requirement-gated dialogue graphs carrying gold,
//!   reputation, shop, and quest-start effects.
//! - **Leaderboards**: Read-only rankings over the player set.
//! - **Data-Driven Content**: JSON seed files plus a canonical built-in seed;
//!   TOML-tunable game balance.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatrpg::config::GameConfig;
//! use chatrpg::rpg::{self, Player};
//!
//! let catalog = rpg::canonical_content();
//! let config = GameConfig::default();
//! let mut player = Player::new("usr_1042", "Alice");
//!
//! rpg::accept_quest(&catalog, &mut player, "quest_wolf_hunt")?;
//! let notices = rpg::update_kill_objectives(&config, &mut player, "grey wolf", 2);
//! for line in notices {
//!     println!("{line}");
//! }
//! # Ok::<(), chatrpg::rpg::GameError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`rpg`] - Data model, catalogs, and all gameplay operations
//! - [`config`] - TOML-loadable game balance configuration
//!
//! ## Ownership Model
//!
//! Every operation takes the content catalog by shared reference and one
//! player record by exclusive reference, mutates it synchronously, and
//! returns. No locks, no suspension points: concurrency control and
//! persistence are the caller's job, which keeps this core trivially
//! testable with plain fixtures.

pub mod config;
pub mod rpg;

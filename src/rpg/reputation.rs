/// Faction reputation ledger.
///
/// Reputation records are created lazily on first change and never removed.
/// Crossing into a strictly higher tier applies that tier's one-time reward.
/// Every change also pushes half of it, negated, onto the faction's rival;
/// the propagation carries a visited set so it terminates on any rival
/// graph, including mutual or cyclic rivalries in bad catalog data.
use chrono::Utc;
use log::{debug, info};

use crate::config::GameConfig;
use crate::rpg::catalog::ContentCatalog;
use crate::rpg::types::{Player, PlayerFactionReputation, ReputationTier};

/// Apply a reputation change (positive or negative) and cascade to rivals.
/// Returns notification lines: the change itself, tier crossings, tier
/// rewards, and zone unlocks.
pub fn gain_reputation(
    catalog: &ContentCatalog,
    config: &GameConfig,
    player: &mut Player,
    faction_id: &str,
    amount: i32,
) -> Vec<String> {
    let mut notifications = Vec::new();
    let mut visited = Vec::new();
    apply_change(
        catalog,
        config,
        player,
        faction_id,
        amount,
        &mut visited,
        &mut notifications,
    );
    notifications
}

/// Current standing with a faction; zero when no record exists yet.
pub fn reputation_value(player: &Player, faction_id: &str) -> i32 {
    player.reputation_with(faction_id)
}

/// Current tier with a faction.
pub fn reputation_tier(config: &GameConfig, player: &Player, faction_id: &str) -> ReputationTier {
    config.tier_for(player.reputation_with(faction_id))
}

fn apply_change(
    catalog: &ContentCatalog,
    config: &GameConfig,
    player: &mut Player,
    faction_id: &str,
    amount: i32,
    visited: &mut Vec<String>,
    notifications: &mut Vec<String>,
) {
    if amount == 0 || visited.iter().any(|id| id == faction_id) {
        return;
    }
    visited.push(faction_id.to_string());

    // Unknown faction ids still get a record; the catalog entry is only
    // needed for tier rewards and rival lookup.
    let faction = catalog.get_faction(faction_id);
    let faction_name = faction
        .map(|f| f.name.clone())
        .unwrap_or_else(|| faction_id.to_string());

    let record = record_mut(player, faction_id);
    let previous_tier = config.tier_for(record.reputation);
    record.reputation += amount;
    record.updated_at = Utc::now();
    let new_value = record.reputation;
    let new_tier = config.tier_for(new_value);

    debug!(
        "{} reputation with {}: {:+} -> {}",
        player.user_id, faction_id, amount, new_value
    );
    notifications.push(format!(
        "Reputation with {}: {:+} ({})",
        faction_name, amount, new_value
    ));

    if new_tier > previous_tier {
        notifications.push(format!("You are now {} with {}!", new_tier, faction_name));
        if let Some(reward) = faction.and_then(|f| f.tier_rewards.get(&new_tier)) {
            player.gold += reward.gold;
            player.xp += reward.xp;
            if reward.gold > 0 || reward.xp > 0 {
                notifications.push(format!(
                    "Tier reward: +{} gold, +{} XP",
                    reward.gold, reward.xp
                ));
            }
            if let Some(zone) = &reward.zone_unlock {
                if player.unlock_zone(zone) {
                    notifications.push(format!("New zone unlocked: {}", zone));
                }
            }
            info!(
                "{} reached {} with {} (tier reward applied)",
                player.user_id, new_tier, faction_id
            );
        }
    }

    // Half the change, negated, lands on the rival. Truncating division
    // keeps ±1 changes from propagating at all.
    if let Some(rival_id) = faction.and_then(|f| f.rival_faction_id.clone()) {
        let rival_amount = -amount / config.rival_reputation_divisor;
        apply_change(
            catalog,
            config,
            player,
            &rival_id,
            rival_amount,
            visited,
            notifications,
        );
    }
}

fn record_mut<'a>(player: &'a mut Player, faction_id: &str) -> &'a mut PlayerFactionReputation {
    if let Some(position) = player
        .reputations
        .iter()
        .position(|r| r.faction_id == faction_id)
    {
        return &mut player.reputations[position];
    }
    player
        .reputations
        .push(PlayerFactionReputation::new(faction_id));
    player
        .reputations
        .last_mut()
        .expect("just pushed a reputation record")
}

//! Integration tests for the reputation ledger: rival propagation, tier
//! rewards, and zone unlocks against the canonical faction set.

use chatrpg::config::GameConfig;
use chatrpg::rpg::{
    canonical_content, gain_reputation, reputation_tier, reputation_value, Player, ReputationTier,
};

fn setup() -> (chatrpg::rpg::ContentCatalog, GameConfig, Player) {
    (
        canonical_content(),
        GameConfig::default(),
        Player::new("usr_1", "Alicia"),
    )
}

#[test]
fn guild_gains_bleed_into_the_cult() {
    let (catalog, config, mut player) = setup();

    gain_reputation(&catalog, &config, &mut player, "gremio_magos", 25);
    assert_eq!(reputation_value(&player, "gremio_magos"), 25);
    assert_eq!(reputation_value(&player, "culto_sombra"), -12);

    // The cult has no rival edge back, so nothing returns to the guild.
    gain_reputation(&catalog, &config, &mut player, "culto_sombra", 40);
    assert_eq!(reputation_value(&player, "culto_sombra"), 28);
    assert_eq!(reputation_value(&player, "gremio_magos"), 25);
}

#[test]
fn negative_amounts_propagate_positively_to_the_rival() {
    let (catalog, config, mut player) = setup();

    gain_reputation(&catalog, &config, &mut player, "gremio_magos", -9);
    assert_eq!(reputation_value(&player, "gremio_magos"), -9);
    // -(-9)/2 truncates toward zero.
    assert_eq!(reputation_value(&player, "culto_sombra"), 4);
    assert_eq!(
        reputation_tier(&config, &player, "gremio_magos"),
        ReputationTier::Hostile
    );
}

#[test]
fn friendly_crossing_pays_out_once_and_unlocks_the_tower() {
    let (catalog, config, mut player) = setup();

    let notices = gain_reputation(&catalog, &config, &mut player, "gremio_magos", 150);
    assert!(notices.iter().any(|n| n.contains("Friendly")));
    assert!(notices.iter().any(|n| n.contains("torre_arcana")));
    assert_eq!(player.gold, 200);
    assert_eq!(player.xp, 40);
    assert_eq!(player.unlocked_zones, vec!["torre_arcana".to_string()]);

    // Still Friendly after another gain: no repeat payout.
    gain_reputation(&catalog, &config, &mut player, "gremio_magos", 100);
    assert_eq!(player.gold, 200);
    assert_eq!(player.unlocked_zones.len(), 1);
}

#[test]
fn a_large_gain_crosses_several_tiers_at_once() {
    let (catalog, config, mut player) = setup();

    // 0 -> 1200 jumps Neutral straight to Exalted; only the landing tier's
    // reward applies.
    gain_reputation(&catalog, &config, &mut player, "gremio_magos", 1200);
    assert_eq!(
        reputation_tier(&config, &player, "gremio_magos"),
        ReputationTier::Exalted
    );
    assert_eq!(player.gold, 2000);
    assert_eq!(player.unlocked_zones, vec!["sanctum_arcano".to_string()]);
}

#[test]
fn records_are_created_lazily_and_never_removed() {
    let (catalog, config, mut player) = setup();
    assert!(player.reputations.is_empty());

    gain_reputation(&catalog, &config, &mut player, "mercaderes", 5);
    gain_reputation(&catalog, &config, &mut player, "mercaderes", -5);
    assert_eq!(player.reputations.len(), 1);
    assert_eq!(reputation_value(&player, "mercaderes"), 0);
}

/// Leaderboard views over the full player set.
///
/// Pure read-only aggregation: callers hand in a slice of players (however
/// they loaded them) and get back ranked entries. Nothing here mutates.
use crate::rpg::types::Player;

/// Metric a leaderboard ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Level, XP as tiebreak.
    Level,
    Gold,
    QuestsCompleted,
    /// Sum of reputation across all factions.
    TotalReputation,
    PvpWins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user_id: String,
    pub name: String,
    pub value: i64,
}

/// Top `limit` players by the given metric, descending, name as final
/// tiebreak so output is deterministic.
pub fn top_players(players: &[Player], metric: Metric, limit: usize) -> Vec<LeaderboardEntry> {
    let mut scored: Vec<(&Player, i64, i64)> = players
        .iter()
        .map(|player| {
            let (value, tiebreak) = score(player, metric);
            (player, value, tiebreak)
        })
        .collect();
    scored.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.2.cmp(&a.2))
            .then_with(|| a.0.name.cmp(&b.0.name))
    });
    scored
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, (player, value, _))| LeaderboardEntry {
            rank: index + 1,
            user_id: player.user_id.clone(),
            name: player.name.clone(),
            value,
        })
        .collect()
}

fn score(player: &Player, metric: Metric) -> (i64, i64) {
    match metric {
        Metric::Level => (player.level as i64, player.xp as i64),
        Metric::Gold => (player.gold as i64, 0),
        Metric::QuestsCompleted => (player.completed_quests.len() as i64, 0),
        Metric::TotalReputation => (
            player.reputations.iter().map(|r| r.reputation as i64).sum(),
            0,
        ),
        Metric::PvpWins => (player.pvp_wins as i64, -(player.pvp_losses as i64)),
    }
}

/// NPC dialogue resolver.
///
/// NPC conversations are a static node graph walked one option at a time.
/// Nodes carry optional requirement gates (level, faction standing, carried
/// item); options carry optional side effects (gold, reputation, shop and
/// quest-start signals) plus a link to the next node.
use std::fmt;

use log::debug;

use crate::config::GameConfig;
use crate::rpg::catalog::ContentCatalog;
use crate::rpg::errors::GameError;
use crate::rpg::inventory::has_item;
use crate::rpg::quest::accept_quest;
use crate::rpg::reputation::gain_reputation;
use crate::rpg::types::{DialogueAction, DialogueNode, NodeKind, NodeRequirement, Player};

/// One rendered conversation step: the node the player is standing on and
/// its enumerated option labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub npc_id: String,
    pub npc_name: String,
    pub node_id: String,
    pub text: String,
    pub options: Vec<String>,
}

impl fmt::Display for Conversation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.npc_name, self.text)?;
        for (index, option) in self.options.iter().enumerate() {
            write!(f, "\n{}) {}", index + 1, option)?;
        }
        Ok(())
    }
}

/// Out-of-band signal for the bot layer to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueSignal {
    OpenShop,
    QuestStarted(String),
}

/// Result of choosing a dialogue option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueOutcome {
    pub messages: Vec<String>,
    pub signal: Option<DialogueSignal>,
    /// The next conversation step, or `None` when the conversation ended.
    pub next: Option<Conversation>,
}

/// Open a conversation with an NPC: gate on the NPC's faction requirement,
/// then present the first greeting node whose requirement passes.
pub fn start_conversation(
    catalog: &ContentCatalog,
    player: &Player,
    npc_id: &str,
) -> Result<Conversation, GameError> {
    let npc = catalog
        .get_npc(npc_id)
        .ok_or_else(|| GameError::NotFound(format!("npc {}", npc_id)))?;

    if let Some(required) = &npc.required_faction {
        if player.reputation_with(&required.faction_id) < required.minimum {
            return Err(GameError::RequirementNotMet(format!(
                "{} refuses to speak with you",
                npc.name
            )));
        }
    }

    let greeting = npc
        .nodes
        .iter()
        .find(|node| node.kind == NodeKind::Greeting && requirement_passes(player, node))
        .ok_or_else(|| {
            GameError::RequirementNotMet(format!("{} has nothing to say to you", npc.name))
        })?;

    debug!("{} started conversation with {}", player.user_id, npc_id);
    Ok(render(npc_id, &npc.name, greeting))
}

/// Apply the chosen option's effects and advance or end the conversation.
///
/// A gold cost is validated before any effect applies; reputation grants run
/// through the ledger (rival propagation included); quest starts are routed
/// through `accept_quest` and a failure there is reported as a message
/// without aborting the rest of the option.
pub fn process_dialogue_option(
    catalog: &ContentCatalog,
    config: &GameConfig,
    player: &mut Player,
    npc_id: &str,
    node_id: &str,
    choice: usize,
) -> Result<DialogueOutcome, GameError> {
    let npc = catalog
        .get_npc(npc_id)
        .ok_or_else(|| GameError::NotFound(format!("npc {}", npc_id)))?;
    let node = npc
        .nodes
        .iter()
        .find(|node| node.id == node_id)
        .ok_or_else(|| GameError::NotFound(format!("dialogue node {}", node_id)))?;
    let option = node
        .options
        .get(choice)
        .ok_or(GameError::InvalidChoice(choice))?;

    // Validate the cost before mutating anything.
    if option.gold_delta < 0 {
        let cost = option.gold_delta.unsigned_abs();
        if player.gold < cost {
            return Err(GameError::InsufficientGold {
                required: cost,
                available: player.gold,
            });
        }
    }

    let mut messages = Vec::new();
    let mut signal = None;

    match option.gold_delta {
        delta if delta > 0 => {
            player.gold += delta as u64;
            messages.push(format!("You receive {} gold.", delta));
        }
        delta if delta < 0 => {
            player.gold -= delta.unsigned_abs();
            messages.push(format!("You pay {} gold.", delta.unsigned_abs()));
        }
        _ => {}
    }

    if let Some((faction_id, amount)) = &option.reputation {
        messages.extend(gain_reputation(catalog, config, player, faction_id, *amount));
    }

    match &option.action {
        Some(DialogueAction::OpenShop) => {
            signal = Some(DialogueSignal::OpenShop);
        }
        Some(DialogueAction::StartQuest { quest_id }) => match accept_quest(catalog, player, quest_id)
        {
            Ok(message) => {
                messages.push(message);
                signal = Some(DialogueSignal::QuestStarted(quest_id.clone()));
            }
            Err(error) => messages.push(error.to_string()),
        },
        None => {}
    }

    let next = option
        .next_node
        .as_ref()
        .and_then(|next_id| npc.nodes.iter().find(|n| n.id == *next_id))
        .filter(|next| requirement_passes(player, next))
        .map(|next| render(npc_id, &npc.name, next));

    Ok(DialogueOutcome {
        messages,
        signal,
        next,
    })
}

/// A node with no requirement passes; otherwise every present field must.
fn requirement_passes(player: &Player, node: &DialogueNode) -> bool {
    let Some(requirement) = &node.requirement else {
        return true;
    };
    let NodeRequirement {
        min_level,
        min_reputation,
        required_item,
    } = requirement;

    if min_level.is_some_and(|level| player.level < level) {
        return false;
    }
    if let Some(rep) = min_reputation {
        if player.reputation_with(&rep.faction_id) < rep.minimum {
            return false;
        }
    }
    if let Some(item) = required_item {
        if !has_item(player, item) {
            return false;
        }
    }
    true
}

fn render(npc_id: &str, npc_name: &str, node: &DialogueNode) -> Conversation {
    Conversation {
        npc_id: npc_id.to_string(),
        npc_name: npc_name.to_string(),
        node_id: node.id.clone(),
        text: node.text.clone(),
        options: node.options.iter().map(|o| o.text.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpg::types::{DialogueOption, Item, NpcRecord, ReputationRequirement};

    fn merchant() -> NpcRecord {
        NpcRecord::new("mercader", "Mercader Tomás", "Merchant", "A traveling merchant")
            .with_node(
                DialogueNode::new("greet_friend", NodeKind::Greeting, "Welcome back, friend!")
                    .with_requirement(NodeRequirement {
                        min_reputation: Some(ReputationRequirement {
                            faction_id: "mercaderes".to_string(),
                            minimum: 100,
                        }),
                        ..Default::default()
                    })
                    .with_option(DialogueOption::new("Show me your wares.").with_action(
                        DialogueAction::OpenShop,
                    )),
            )
            .with_node(
                DialogueNode::new("greet", NodeKind::Greeting, "Hello, stranger.")
                    .with_option(
                        DialogueOption::new("Show me your wares.")
                            .with_action(DialogueAction::OpenShop),
                    )
                    .with_option(
                        DialogueOption::new("Here, a small donation. [10 gold]")
                            .with_gold_delta(-10)
                            .with_reputation("mercaderes", 5)
                            .leads_to("thanks"),
                    ),
            )
            .with_node(DialogueNode::new(
                "thanks",
                NodeKind::Topic,
                "Most generous of you!",
            ))
    }

    #[test]
    fn first_passing_greeting_wins() {
        let catalog = ContentCatalog::new().with_npc(merchant());
        let mut player = Player::new("u1", "Alice");

        let conversation = start_conversation(&catalog, &player, "mercader").expect("start");
        assert_eq!(conversation.node_id, "greet");

        player.reputations.push(
            crate::rpg::types::PlayerFactionReputation::new("mercaderes"),
        );
        player.reputations[0].reputation = 150;
        let conversation = start_conversation(&catalog, &player, "mercader").expect("start");
        assert_eq!(conversation.node_id, "greet_friend");
    }

    #[test]
    fn shop_option_signals_without_mutation() {
        let catalog = ContentCatalog::new().with_npc(merchant());
        let config = GameConfig::default();
        let mut player = Player::new("u1", "Alice");

        let outcome =
            process_dialogue_option(&catalog, &config, &mut player, "mercader", "greet", 0)
                .expect("choose");
        assert_eq!(outcome.signal, Some(DialogueSignal::OpenShop));
        assert!(outcome.next.is_none());
        assert_eq!(player.gold, 0);
    }

    #[test]
    fn gold_cost_is_checked_before_effects() {
        let catalog = ContentCatalog::new().with_npc(merchant());
        let config = GameConfig::default();
        let mut player = Player::new("u1", "Alice");
        player.gold = 5;

        let result =
            process_dialogue_option(&catalog, &config, &mut player, "mercader", "greet", 1);
        assert!(matches!(result, Err(GameError::InsufficientGold { .. })));
        assert_eq!(player.gold, 5);
        assert_eq!(player.reputation_with("mercaderes"), 0);
    }

    #[test]
    fn paid_option_applies_all_effects_and_advances() {
        let catalog = ContentCatalog::new().with_npc(merchant());
        let config = GameConfig::default();
        let mut player = Player::new("u1", "Alice");
        player.gold = 25;

        let outcome =
            process_dialogue_option(&catalog, &config, &mut player, "mercader", "greet", 1)
                .expect("choose");
        assert_eq!(player.gold, 15);
        assert_eq!(player.reputation_with("mercaderes"), 5);
        assert_eq!(outcome.next.expect("next node").node_id, "thanks");
    }

    #[test]
    fn invalid_choice_index_is_rejected() {
        let catalog = ContentCatalog::new().with_npc(merchant());
        let config = GameConfig::default();
        let mut player = Player::new("u1", "Alice");

        let result =
            process_dialogue_option(&catalog, &config, &mut player, "mercader", "greet", 7);
        assert!(matches!(result, Err(GameError::InvalidChoice(7))));
    }

    #[test]
    fn required_item_gate_uses_its_own_field() {
        let npc = NpcRecord::new("guardia", "Guardia", "", "").with_node(
            DialogueNode::new("greet", NodeKind::Greeting, "Show me your pass.")
                .with_requirement(NodeRequirement {
                    required_item: Some("Salvoconducto".to_string()),
                    ..Default::default()
                }),
        );
        let catalog = ContentCatalog::new().with_npc(npc);
        let mut player = Player::new("u1", "Alice");

        assert!(start_conversation(&catalog, &player, "guardia").is_err());
        player.inventory.push(Item::new("Salvoconducto", "", 0));
        assert!(start_conversation(&catalog, &player, "guardia").is_ok());
    }
}

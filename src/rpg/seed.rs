//! Canonical content seed.
//!
//! A small but complete content set that ships with the crate: enough
//! quests, factions, recipes, equipment, and NPCs for a playable loop and
//! for the integration tests to run against realistic data. Operators
//! normally replace this with their own `data/seeds/` files; the canonical
//! seed is also what those files were generated from.

use crate::rpg::catalog::ContentCatalog;
use crate::rpg::types::{
    CraftRecipe, CraftTarget, DialogueAction, DialogueNode, DialogueOption, Equipment,
    ExploreTarget, FactionDefinition, KillTarget, NodeKind, NodeRequirement, NpcRecord,
    ObjectiveKind, QuestDefinition, QuestObjective, QuestReward, Rarity, RecipeResult,
    ReputationTier, TierReward,
};

/// Build the canonical content catalog.
pub fn canonical_content() -> ContentCatalog {
    let mut catalog = ContentCatalog::new();
    for quest in canonical_quests() {
        catalog = catalog.with_quest(quest);
    }
    for faction in canonical_factions() {
        catalog = catalog.with_faction(faction);
    }
    for recipe in canonical_recipes() {
        catalog = catalog.with_recipe(recipe);
    }
    for equipment in canonical_equipment() {
        catalog = catalog.with_equipment(equipment);
    }
    for npc in canonical_npcs() {
        catalog = catalog.with_npc(npc);
    }
    catalog
}

pub fn canonical_quests() -> Vec<QuestDefinition> {
    vec![
        QuestDefinition::new(
            "quest_wolf_hunt",
            "Wolf Hunt",
            "The wolves around the village grow bold. Thin the pack.",
            1,
        )
        .with_objective(QuestObjective::new(
            "Hunt 5 wolves",
            ObjectiveKind::Kill {
                target: KillTarget::Named("wolf".to_string()),
            },
            5,
        ))
        .with_reward(QuestReward {
            gold: 100,
            xp: 50,
            ..Default::default()
        }),
        QuestDefinition::new(
            "quest_crystal_shards",
            "Crystal Shards",
            "The guild needs crystal shards for its experiments.",
            2,
        )
        .with_objective(QuestObjective::new(
            "Gather 3 Fragmento de Cristal",
            ObjectiveKind::Collect {
                item_name: "Fragmento de Cristal".to_string(),
            },
            3,
        ))
        .with_reward(QuestReward {
            gold: 150,
            xp: 80,
            bonus_item: Some("Amuleto de Cristal".to_string()),
            ..Default::default()
        }),
        QuestDefinition::new(
            "quest_apprentice_alchemist",
            "Apprentice Alchemist",
            "Prove yourself at the cauldron.",
            3,
        )
        .repeatable()
        .with_objective(QuestObjective::new(
            "Brew 2 potions of any kind",
            ObjectiveKind::Craft {
                target: CraftTarget::AnyPotion,
            },
            2,
        ))
        .with_reward(QuestReward {
            gold: 120,
            xp: 90,
            ..Default::default()
        }),
        QuestDefinition::new(
            "quest_deep_delver",
            "Deep Delver",
            "Chart whatever ruins you can find.",
            4,
        )
        .with_objective(QuestObjective::new(
            "Clear any 2 dungeons",
            ObjectiveKind::Explore {
                target: ExploreTarget::AnyDungeon,
            },
            2,
        ))
        .with_objective(QuestObjective::new(
            "Clear the goblin cave",
            ObjectiveKind::Explore {
                target: ExploreTarget::Dungeon("cueva_goblin".to_string()),
            },
            1,
        ))
        .with_reward(QuestReward {
            gold: 300,
            xp: 200,
            equipment_id: Some("escudo_roble".to_string()),
            ..Default::default()
        }),
        QuestDefinition::new(
            "quest_giant_slayer",
            "Giant Slayer",
            "Something enormous stirs beyond the pass.",
            8,
        )
        .with_objective(QuestObjective::new(
            "Defeat any boss-level enemy",
            ObjectiveKind::Kill {
                target: KillTarget::AnyBoss,
            },
            1,
        ))
        .with_reward(QuestReward {
            gold: 500,
            xp: 400,
            equipment_id: Some("espada_hierro".to_string()),
            ..Default::default()
        }),
    ]
}

pub fn canonical_factions() -> Vec<FactionDefinition> {
    vec![
        FactionDefinition::new(
            "gremio_magos",
            "Gremio de Magos",
            "Keepers of the arcane towers.",
        )
        .with_rival("culto_sombra")
        .with_tier_reward(
            ReputationTier::Friendly,
            TierReward {
                gold: 200,
                xp: 40,
                zone_unlock: Some("torre_arcana".to_string()),
            },
        )
        .with_tier_reward(
            ReputationTier::Honored,
            TierReward {
                gold: 600,
                xp: 150,
                ..Default::default()
            },
        )
        .with_tier_reward(
            ReputationTier::Exalted,
            TierReward {
                gold: 2000,
                xp: 500,
                zone_unlock: Some("sanctum_arcano".to_string()),
            },
        ),
        FactionDefinition::new(
            "culto_sombra",
            "Culto de la Sombra",
            "They do not forgive friends of the guild.",
        ),
        FactionDefinition::new("mercaderes", "Gremio de Mercaderes", "Coin opens every door.")
            .with_tier_reward(
                ReputationTier::Friendly,
                TierReward {
                    gold: 100,
                    xp: 20,
                    zone_unlock: Some("bazar_nocturno".to_string()),
                },
            ),
    ]
}

pub fn canonical_recipes() -> Vec<CraftRecipe> {
    vec![
        CraftRecipe::new(
            "pocion_menor",
            "Poción Menor",
            1,
            RecipeResult::Item {
                name: "Poción Menor".to_string(),
                description: "Restaura 40 HP".to_string(),
                value: Some(25),
            },
        )
        .with_ingredient("Hierba Curativa", 2),
        CraftRecipe::new(
            "pocion_mayor",
            "Poción Mayor",
            3,
            RecipeResult::Item {
                name: "Poción Mayor".to_string(),
                description: "Restaura 120 HP".to_string(),
                value: None,
            },
        )
        .with_ingredient("Esencia Mágica", 1)
        .with_ingredient("Hierba Curativa", 2),
        CraftRecipe::new(
            "pocion_mana",
            "Poción de Maná",
            3,
            RecipeResult::Item {
                name: "Poción de Maná".to_string(),
                description: "Restaura 60 de maná".to_string(),
                value: None,
            },
        )
        .with_ingredient("Esencia Mágica", 1)
        .with_ingredient("Flor Azul", 1),
        CraftRecipe::new(
            "elixir_curacion",
            "Elixir de Curación",
            5,
            RecipeResult::Item {
                name: "Elixir de Curación".to_string(),
                description: "Cura por completo".to_string(),
                value: Some(200),
            },
        )
        .with_ingredient("Esencia Mágica", 2)
        .with_ingredient("Fragmento de Cristal", 1)
        .with_rarity(Rarity::Rare),
        CraftRecipe::new(
            "espada_hierro",
            "Espada de Hierro",
            2,
            RecipeResult::Equipment {
                equipment_id: "espada_hierro".to_string(),
            },
        )
        .with_ingredient("Lingote de Hierro", 3),
        CraftRecipe::new(
            "espada_runica",
            "Espada Rúnica",
            7,
            RecipeResult::Equipment {
                equipment_id: "espada_runica".to_string(),
            },
        )
        .with_ingredient("Lingote de Hierro", 2)
        .with_ingredient("Fragmento de Cristal", 2)
        .with_rarity(Rarity::Epic),
    ]
}

pub fn canonical_equipment() -> Vec<Equipment> {
    vec![
        Equipment::new("espada_hierro", "Espada de Hierro", 8, 2, 150),
        Equipment::new("escudo_roble", "Escudo de Roble", 1, 9, 120),
        Equipment::new("baculo_arcano", "Báculo Arcano", 14, 3, 600).with_rarity(Rarity::Rare),
    ]
}

pub fn canonical_npcs() -> Vec<NpcRecord> {
    vec![
        NpcRecord::new(
            "mercader_tomas",
            "Mercader Tomás",
            "Traveling Merchant",
            "A merchant whose cart has seen every road in the realm.",
        )
        .with_node(
            DialogueNode::new("greet", NodeKind::Greeting, "Welcome! Buying or selling?")
                .with_option(
                    DialogueOption::new("Show me your wares.")
                        .with_action(DialogueAction::OpenShop),
                )
                .with_option(
                    DialogueOption::new("A donation for the road. [20 gold]")
                        .with_gold_delta(-20)
                        .with_reputation("mercaderes", 10)
                        .leads_to("thanks"),
                ),
        )
        .with_node(DialogueNode::new(
            "thanks",
            NodeKind::Topic,
            "Most generous! The guild remembers its friends.",
        )),
        NpcRecord::new(
            "archimaga_elena",
            "Archimaga Elena",
            "Guild Archmage",
            "Her gaze weighs you like a ledger.",
        )
        .with_required_faction("gremio_magos", 0)
        .with_node(
            DialogueNode::new(
                "greet_adept",
                NodeKind::Greeting,
                "Ah, the one the towers whisper about. I have work for you.",
            )
            .with_requirement(NodeRequirement {
                min_level: Some(4),
                ..Default::default()
            })
            .with_option(
                DialogueOption::new("I am ready.")
                    .with_action(DialogueAction::StartQuest {
                        quest_id: "quest_deep_delver".to_string(),
                    }),
            )
            .with_option(DialogueOption::new("Not today.")),
        )
        .with_node(
            DialogueNode::new(
                "greet",
                NodeKind::Greeting,
                "Come back when you have proven yourself.",
            )
            .with_option(DialogueOption::new("Farewell.")),
        ),
    ]
}

//! Integration tests for the crafting resolver against the canonical
//! recipe set.

use chatrpg::config::GameConfig;
use chatrpg::rpg::{
    canonical_content, check_ingredients, count_items, craft, update_craft_objectives, Crafted,
    GameError, Item, Player,
};

fn alchemist(level: u32) -> Player {
    let mut player = Player::new("usr_1", "Alicia");
    player.level = level;
    player
}

#[test]
fn missing_essence_is_reported_with_exact_quantity() {
    let catalog = canonical_content();
    let config = GameConfig::default();
    let mut player = alchemist(3);
    player.inventory.push(Item::new("Hierba Curativa", "", 5));
    player.inventory.push(Item::new("Hierba Curativa", "", 5));

    let result = craft(&catalog, &config, &mut player, "pocion_mayor");
    match result {
        Err(GameError::MissingIngredients(shortfalls)) => {
            let rendered: Vec<String> = shortfalls.iter().map(|s| s.to_string()).collect();
            assert_eq!(rendered, vec!["Esencia Mágica ×1".to_string()]);
        }
        other => panic!("expected MissingIngredients, got {:?}", other),
    }
    // Nothing was consumed.
    assert_eq!(count_items(&player, "Hierba Curativa"), 2);
}

#[test]
fn crystal_consumption_is_exact() {
    let catalog = canonical_content();
    let config = GameConfig::default();
    let mut player = alchemist(7);
    for _ in 0..5 {
        player.inventory.push(Item::new("Fragmento de Cristal", "", 10));
    }
    player.inventory.push(Item::new("Lingote de Hierro", "", 20));
    player.inventory.push(Item::new("Lingote de Hierro", "", 20));

    // espada_runica consumes 2 crystals and 2 ingots.
    craft(&catalog, &config, &mut player, "espada_runica").expect("craft");
    assert_eq!(count_items(&player, "Fragmento de Cristal"), 3);
    assert_eq!(count_items(&player, "Lingote de Hierro"), 0);
}

#[test]
fn rune_sword_is_synthesized_from_rarity() {
    let catalog = canonical_content();
    let config = GameConfig::default();
    let mut player = alchemist(7);
    for name in [
        "Fragmento de Cristal",
        "Fragmento de Cristal",
        "Lingote de Hierro",
        "Lingote de Hierro",
    ] {
        player.inventory.push(Item::new(name, "", 10));
    }

    // The canonical equipment catalog has no espada_runica entry on purpose.
    assert!(catalog.get_equipment("espada_runica").is_none());
    let outcome = craft(&catalog, &config, &mut player, "espada_runica").expect("craft");
    match outcome.crafted {
        Crafted::Equipment(equipment) => {
            assert_eq!(equipment.attack, 20);
            assert_eq!(equipment.defense, 14);
            assert_eq!(equipment.value, 800);
        }
        other => panic!("expected equipment, got {:?}", other),
    }
}

#[test]
fn major_potion_uses_default_value_and_counts_for_quests() {
    let catalog = canonical_content();
    let config = GameConfig::default();
    let mut player = alchemist(3);
    player.inventory.push(Item::new("Esencia Mágica", "", 30));
    player.inventory.push(Item::new("Hierba Curativa", "", 5));
    player.inventory.push(Item::new("Hierba Curativa", "", 5));

    chatrpg::rpg::accept_quest(&catalog, &mut player, "quest_apprentice_alchemist")
        .expect("accept");

    let outcome = craft(&catalog, &config, &mut player, "pocion_mayor").expect("craft");
    match outcome.crafted {
        Crafted::Item(item) => assert_eq!(item.value, 50),
        other => panic!("expected item, got {:?}", other),
    }

    let notices = update_craft_objectives(&mut player, "pocion_mayor");
    assert_eq!(player.active_quests[0].objectives[0].current, 1);
    assert!(!notices.iter().any(|n| n.contains("ready to turn in")));
}

#[test]
fn check_ingredients_passes_with_case_mismatch() {
    let catalog = canonical_content();
    let mut player = alchemist(1);
    player.inventory.push(Item::new("hierba curativa", "", 5));
    player.inventory.push(Item::new("HIERBA CURATIVA", "", 5));

    let recipe = catalog.get_recipe("pocion_menor").expect("recipe");
    let check = check_ingredients(&player, recipe);
    assert!(check.satisfied);
    assert!(check.shortfalls.is_empty());
}

#[test]
fn unknown_recipe_and_level_gate() {
    let catalog = canonical_content();
    let config = GameConfig::default();
    let mut player = alchemist(1);

    assert!(matches!(
        craft(&catalog, &config, &mut player, "no_such_recipe"),
        Err(GameError::NotFound(_))
    ));
    assert!(matches!(
        craft(&catalog, &config, &mut player, "pocion_mayor"),
        Err(GameError::LevelTooLow {
            required: 3,
            actual: 1
        })
    ));
}

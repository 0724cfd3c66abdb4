/// Crafting resolver.
///
/// Validates ingredient availability against the inventory, consumes exactly
/// the required quantities, and produces either a consumable or a piece of
/// equipment. All checks run before the first item is removed, so a failed
/// craft leaves the inventory untouched.
use std::fmt;

use log::{debug, warn};

use crate::config::GameConfig;
use crate::rpg::catalog::ContentCatalog;
use crate::rpg::errors::GameError;
use crate::rpg::inventory::{count_items, remove_items};
use crate::rpg::types::{
    CraftRecipe, Equipment, IngredientShortfall, Item, Player, RecipeResult,
};

/// Outcome of an ingredient availability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientCheck {
    pub satisfied: bool,
    pub shortfalls: Vec<IngredientShortfall>,
}

/// What a successful craft produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Crafted {
    Item(Item),
    Equipment(Equipment),
}

impl Crafted {
    pub fn name(&self) -> &str {
        match self {
            Crafted::Item(item) => &item.name,
            Crafted::Equipment(equipment) => &equipment.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftOutcome {
    pub recipe_id: String,
    pub crafted: Crafted,
}

impl fmt::Display for CraftOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You crafted {}!", self.crafted.name())
    }
}

/// Compare the recipe's ingredient list against the inventory, reporting the
/// exact missing quantity per ingredient.
pub fn check_ingredients(player: &Player, recipe: &CraftRecipe) -> IngredientCheck {
    let mut shortfalls = Vec::new();
    for ingredient in &recipe.ingredients {
        let held = count_items(player, &ingredient.name);
        if held < ingredient.quantity {
            shortfalls.push(IngredientShortfall {
                name: ingredient.name.clone(),
                missing: ingredient.quantity - held,
            });
        }
    }
    IngredientCheck {
        satisfied: shortfalls.is_empty(),
        shortfalls,
    }
}

/// Craft a recipe: validate, consume ingredients, produce the result.
///
/// Preconditions in order: the recipe must exist, the player must meet its
/// level requirement, and every ingredient must be available in full.
pub fn craft(
    catalog: &ContentCatalog,
    config: &GameConfig,
    player: &mut Player,
    recipe_id: &str,
) -> Result<CraftOutcome, GameError> {
    let recipe = catalog
        .get_recipe(recipe_id)
        .ok_or_else(|| GameError::NotFound(format!("recipe {}", recipe_id)))?;

    if player.level < recipe.required_level {
        return Err(GameError::LevelTooLow {
            required: recipe.required_level,
            actual: player.level,
        });
    }

    let check = check_ingredients(player, recipe);
    if !check.satisfied {
        return Err(GameError::MissingIngredients(check.shortfalls));
    }

    for ingredient in &recipe.ingredients {
        let removed = remove_items(player, &ingredient.name, ingredient.quantity);
        debug_assert_eq!(removed, ingredient.quantity);
    }

    let crafted = match &recipe.result {
        RecipeResult::Item {
            name,
            description,
            value,
        } => {
            let item = Item::new(
                name,
                description,
                value.unwrap_or(config.default_crafted_item_value),
            );
            player.inventory.push(item.clone());
            Crafted::Item(item)
        }
        RecipeResult::Equipment { equipment_id } => {
            let equipment = match catalog.get_equipment(equipment_id) {
                Some(found) => found.clone(),
                None => {
                    // No catalog entry; synthesize stats from rarity alone.
                    warn!(
                        "recipe {} result {} missing from equipment catalog",
                        recipe_id, equipment_id
                    );
                    Equipment::synthesized(equipment_id, recipe.rarity)
                }
            };
            player.equipment.push(equipment.clone());
            Crafted::Equipment(equipment)
        }
    };

    debug!("{} crafted {}", player.user_id, recipe_id);
    Ok(CraftOutcome {
        recipe_id: recipe_id.to_string(),
        crafted,
    })
}

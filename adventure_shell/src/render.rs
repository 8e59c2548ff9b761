//! Turning engine state into lines of text.

use combat_rules::{Character, EquipmentSlot, RenderedState, WorldState};

/// The combat log followed by an HP summary.
pub fn combat_lines(state: &RenderedState) -> Vec<String> {
    let mut lines = state.log.clone();
    lines.push(format!(
        "{}: {}/{} HP | {}: {}/{} HP",
        state.player_name,
        state.player_health,
        state.player_max_health,
        state.enemy_name,
        state.enemy_health,
        state.enemy_max_health
    ));
    lines
}

pub fn stats_sheet(character: &Character) -> Vec<String> {
    let mut lines = vec![
        format!("Name: {}", character.name),
        format!("Race: {}", character.race),
        format!("Health: {}/{}", character.health(), character.max_health()),
        format!("Attack: {}", character.effective_attack()),
        format!("Defense: {}", character.effective_defense()),
    ];
    for slot in EquipmentSlot::ALL {
        if let Some(item) = character.equipped_item(slot) {
            lines.push(format!("{slot}: {}", item.name));
        }
    }
    if let Some(ability) = character.ability() {
        lines.push(format!("Ability: {}", ability.name()));
    }
    lines
}

/// Numbered from 1, the way the player types item numbers.
pub fn inventory_list(character: &Character) -> Vec<String> {
    if character.inventory.is_empty() {
        return vec!["Your inventory is empty.".to_string()];
    }
    let mut lines = vec![format!(
        "Inventory ({}/{}):",
        character.inventory.len(),
        character.inventory.capacity()
    )];
    for (position, item) in character.inventory.iter().enumerate() {
        let marker = if item.is_equipped() { " [equipped]" } else { "" };
        lines.push(format!(
            "  {}. {}{} - {}",
            position + 1,
            item.name,
            marker,
            item.description
        ));
    }
    lines
}

pub fn region_list(world: &WorldState) -> Vec<String> {
    let current = &world.current_region().name;
    let mut lines = vec!["Regions of Middle-earth:".to_string()];
    for region in world.regions() {
        let here = if &region.name == current { " (you are here)" } else { "" };
        lines.push(format!("  - {}{}", region.name, here));
    }
    lines
}

pub fn enemy_list(world: &WorldState) -> Vec<String> {
    if world.enemies().is_empty() {
        return vec!["There are no enemies here.".to_string()];
    }
    let mut lines = vec![format!("Enemies in {}:", world.current_region().name)];
    for enemy in world.enemies() {
        lines.push(format!(
            "  - {} ({}, {}/{} HP)",
            enemy.name,
            enemy.race,
            enemy.health(),
            enemy.max_health()
        ));
    }
    lines
}

pub fn surroundings(world: &WorldState) -> Vec<String> {
    vec![
        format!("You are currently in the {}.", world.current_region().name),
        format!("There are {} enemies in this area.", world.enemies().len()),
    ]
}

//! Command parsing and dispatch.
//!
//! Outside combat a line is an exploration [`Command`]. While a fight is
//! running the same line is read as a [`CombatAction`] instead, so `attack`
//! means "swing" rather than "pick a fight".

use combat_rules::{CombatAction, Game, GameError, ItemSelector, RenderedState};

use crate::render;

pub const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' for a list of commands.";

const HELP: [&str; 13] = [
    "Available commands:",
    "  help              - Show this help menu.",
    "  regions           - List the regions of Middle-earth.",
    "  travel <region>   - Travel to another region.",
    "  look              - Describe your surroundings.",
    "  enemies           - List the enemies nearby.",
    "  examine <name>    - Inspect yourself, an item, a region or an enemy.",
    "  stats             - Show your character sheet.",
    "  inventory         - List what you carry.",
    "  use <n|name>      - Use or equip an item.",
    "  attack <enemy>    - Pick a fight with a named enemy.",
    "  encounter         - Fight a random enemy nearby.",
    "  quit              - Leave the game.",
];

const COMBAT_HELP: &str =
    "In combat: attack, special, ability, use <n|name>, flee. Items are numbered from 1.";

/// An exploration command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Regions,
    Travel(Option<String>),
    Look,
    Enemies,
    Examine(Option<String>),
    Stats,
    Inventory,
    Use(Option<String>),
    Attack(Option<String>),
    Encounter,
    Quit,
    Empty,
    Unknown(String),
}

/// Split a line into a lowercase verb and the rest.
fn split(line: &str) -> (String, Option<String>) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => {
            let rest = rest.trim();
            let rest = (!rest.is_empty()).then(|| rest.to_string());
            (verb.to_lowercase(), rest)
        }
        None => (line.to_lowercase(), None),
    }
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let (verb, noun) = split(line);
        match verb.as_str() {
            "" => Command::Empty,
            "help" => Command::Help,
            "regions" => Command::Regions,
            "travel" => Command::Travel(noun),
            "look" => Command::Look,
            "enemies" => Command::Enemies,
            "examine" => Command::Examine(noun),
            "stats" => Command::Stats,
            "inventory" => Command::Inventory,
            "use" => Command::Use(noun),
            "attack" => Command::Attack(noun),
            "encounter" => Command::Encounter,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(verb),
        }
    }
}

/// Read a user-typed item reference. Numbers count from 1.
pub fn user_selector(text: &str) -> Result<ItemSelector, GameError> {
    match ItemSelector::parse(text) {
        ItemSelector::Index(0) => Err(GameError::InvalidItemSelector(
            "Invalid item index.".to_string(),
        )),
        ItemSelector::Index(number) => Ok(ItemSelector::Index(number - 1)),
        name => Ok(name),
    }
}

/// What the shell has to say about one line of input.
#[derive(Debug, Clone, Default)]
pub struct Reply {
    pub lines: Vec<String>,
    /// Latest combat snapshot, when the line touched a fight.
    pub state: Option<RenderedState>,
    pub quit: bool,
}

impl Reply {
    fn say(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    fn error(err: GameError) -> Self {
        Self::say([err.to_string()])
    }

    fn combat(mut lines: Vec<String>, state: RenderedState) -> Self {
        lines.extend(render::combat_lines(&state));
        Self {
            lines,
            state: Some(state),
            quit: false,
        }
    }
}

/// A game plus the text interface in front of it.
pub struct Shell {
    game: Game,
}

impl Shell {
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn welcome(&self) -> Vec<String> {
        let player = self.game.player();
        let region = self.game.world().current_region();
        vec![
            format!("Welcome to Middle-earth, {} the {}!", player.name, player.race),
            format!("You are in the {}. {}", region.name, region.description),
            "Type 'help' for a list of commands.".to_string(),
        ]
    }

    /// Handle one line of input.
    pub fn handle(&mut self, line: &str) -> Reply {
        let mut reply = if self.game.in_combat() {
            self.handle_combat(line)
        } else {
            self.handle_command(Command::parse(line))
        };

        if self.game.is_over() && !reply.quit {
            reply
                .lines
                .push(GameError::GameOver(self.game.player().name.clone()).to_string());
            reply.quit = true;
        }
        reply
    }

    fn handle_combat(&mut self, line: &str) -> Reply {
        let (verb, argument) = split(line);
        let action = match verb.as_str() {
            "" => return Reply::default(),
            "quit" | "exit" => {
                return Reply {
                    quit: true,
                    ..Reply::say(["You abandon your quest."])
                }
            }
            "help" => return Reply::say([COMBAT_HELP]),
            "use" | "use_item" => match argument.as_deref().map(user_selector) {
                Some(Ok(selector)) => CombatAction::UseItem(selector),
                Some(Err(err)) => return Reply::error(err),
                None => return Reply::say(["Use what? Specify an item number or name."]),
            },
            _ => CombatAction::parse(&verb, argument.as_deref()),
        };

        tracing::debug!(?action, "combat input");
        match self.game.process_action(action) {
            Ok(state) => Reply::combat(Vec::new(), state),
            Err(err) => Reply::error(err),
        }
    }

    fn handle_command(&mut self, command: Command) -> Reply {
        tracing::debug!(?command, "exploration input");
        match command {
            Command::Empty => Reply::default(),
            Command::Help => Reply::say(HELP),
            Command::Regions => Reply::say(render::region_list(self.game.world())),
            Command::Look => Reply::say(render::surroundings(self.game.world())),
            Command::Enemies => Reply::say(render::enemy_list(self.game.world())),
            Command::Stats => Reply::say(render::stats_sheet(self.game.player())),
            Command::Inventory => Reply::say(render::inventory_list(self.game.player())),
            Command::Travel(None) => {
                Reply::say(["Travel where? Type 'regions' to see available regions."])
            }
            Command::Travel(Some(name)) => match self.game.change_region(&name) {
                Ok(region) => {
                    let arrival = [
                        format!("You travel to {}.", region.name),
                        region.description.clone(),
                    ];
                    let mut reply = Reply::say(arrival);
                    reply
                        .lines
                        .push(render::surroundings(self.game.world())[1].clone());
                    reply
                }
                Err(err) => Reply::error(err),
            },
            Command::Examine(None) => Reply::say(["Examine what?"]),
            Command::Examine(Some(name)) => match self.game.examine(&name) {
                Some(description) => Reply::say([description]),
                None => Reply::say(["There is nothing special here."]),
            },
            Command::Use(None) => Reply::say(["Use what? Specify an item number or name."]),
            Command::Use(Some(text)) => {
                match user_selector(&text).and_then(|selector| self.game.use_item(&selector)) {
                    Ok(message) => Reply::say([message]),
                    Err(err) => Reply::error(err),
                }
            }
            Command::Attack(None) => Reply::say(["Attack what? Specify an enemy name."]),
            Command::Attack(Some(name)) => self.open_fight(Some(&name), "initiates combat with"),
            Command::Encounter => self.open_fight(None, "encounters"),
            Command::Quit => Reply {
                quit: true,
                ..Reply::say(["Farewell, traveller."])
            },
            Command::Unknown(_) => Reply::say([UNKNOWN_COMMAND]),
        }
    }

    fn open_fight(&mut self, target: Option<&str>, verb: &str) -> Reply {
        let enemy = match self.game.create_session(target) {
            Ok(enemy) => enemy,
            Err(err) => return Reply::error(err),
        };
        let opening = vec![format!("{} {verb} {enemy}!", self.game.player().name)];
        match self.game.start_combat() {
            Ok(state) => Reply::combat(opening, state),
            Err(err) => Reply::error(err),
        }
    }
}

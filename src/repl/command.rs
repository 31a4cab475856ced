//! Command parsing
//!
//! Turns a line of user input into a [`Command`].

use crate::error::{PokedexError, Result};

/// Name and description of every command, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("help", "Displays a help message"),
    ("exit", "Exit the Pokedex"),
    ("map", "Displays the next 20 location areas"),
    ("mapb", "Displays the previous 20 location areas"),
    ("explore", "Lists the Pokemon in a location area: explore <area>"),
    ("catch", "Tries to catch a Pokemon: catch <pokemon>"),
    ("inspect", "Shows details of a caught Pokemon: inspect <pokemon>"),
    ("pokedex", "Lists every Pokemon you have caught"),
];

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

impl Command {
    /// Parses cleaned input words. The first word names the command.
    /// Commands taking an argument require exactly one; any other count is
    /// rejected with the command's usage message.
    pub fn parse(words: &[String]) -> Result<Self> {
        let (name, args) = words.split_first().ok_or(PokedexError::UnknownCommand)?;
        let argument = |message: &'static str| match args {
            [arg] => Ok(arg.clone()),
            _ => Err(PokedexError::MissingArgument(message)),
        };

        match name.as_str() {
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            "map" => Ok(Self::Map),
            "mapb" => Ok(Self::MapBack),
            "explore" => argument("Explore command requires an area name").map(Self::Explore),
            "catch" => argument("Catch command requires a pokemon name").map(Self::Catch),
            "inspect" => argument("Inspect command requires a pokemon name").map(Self::Inspect),
            "pokedex" => Ok(Self::Pokedex),
            _ => Err(PokedexError::UnknownCommand),
        }
    }
}

/// Lowercases `text` and splits it into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

//! REPL Session
//!
//! State of one interactive session and the execution of each command.

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::game::{attempt_catch, catch_rate, Pokedex};
use crate::models::LocationAreaPage;
use crate::repl::command::{Command, COMMANDS};

/// Whether the loop should keep reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Links to the pages around the one last shown by `map`/`mapb`.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// Everything a running explorer session owns.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    pagination: Pagination,
    pokedex: Pokedex,
    rng: StdRng,
}

impl Session {
    /// Creates a session with an OS-seeded random number generator.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_os_rng())
    }

    /// Creates a session with the given random number generator.
    pub fn with_rng(client: PokeApiClient, rng: StdRng) -> Self {
        Self {
            client,
            pagination: Pagination::default(),
            pokedex: Pokedex::new(),
            rng,
        }
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => self.list_pokedex(out)?,
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for (name, description) in COMMANDS {
            writeln!(out, "{}: {}", name, description)?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        // Past the last page the listing starts over
        let next = self.pagination.next.clone();
        let page = self.client.location_areas(next.as_deref()).await?;
        self.show_page(page, out)
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let previous = self
            .pagination
            .previous
            .clone()
            .ok_or(PokedexError::FirstPage)?;
        let page = self.client.location_areas(Some(&previous)).await?;
        self.show_page(page, out)
    }

    fn show_page<W: Write>(&mut self, page: LocationAreaPage, out: &mut W) -> Result<()> {
        self.pagination = Pagination {
            next: page.next,
            previous: page.previous,
        };
        for area in &page.results {
            writeln!(out, "- {}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let detail = self.client.location_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for encounter in &detail.pokemon_encounters {
            writeln!(out, "- {}", encounter.pokemon.name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let pokemon = self.client.pokemon(name).await?;

        let rate = catch_rate(pokemon.base_experience());
        writeln!(out, "Trying to catch with {}% chance...", rate)?;

        if attempt_catch(rate, &mut self.rng) {
            writeln!(out, "Congratulations! You caught {}!", pokemon.name)?;
            info!("Caught {} ({}% chance)", pokemon.name, rate);
            self.pokedex.record(pokemon);
        } else {
            writeln!(out, "Oh no! {} escaped!", pokemon.name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  -{}", kind.kind.name)?;
        }
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, "  - {}", name)?;
        }
        Ok(())
    }
}

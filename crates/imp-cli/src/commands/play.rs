//! Interactive table: one terminal passed around the players.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use imp_core::{
    Catalog, CategoryId, GameConfig, GameError, IndexPicker, Phase, RandomPicker, Roster, Session,
    SessionController,
};

use super::{load_catalog, load_roster, save_roster};

/// Blank lines printed to push a secret off screen.
const CONCEAL_LINES: usize = 60;

/// Options for `imp play`.
pub struct PlayOptions<'a> {
    pub roster_path: &'a Path,
    pub categories: Option<&'a Path>,
    pub players: Vec<String>,
    pub only: Vec<String>,
    pub exclude: Vec<String>,
}

/// What the terminal should do with a processed command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print as is.
    Text(String),
    /// Show to one player only, then hide.
    Secret { player: String, text: String },
    /// Leave the table.
    Quit,
}

/// Roster, catalog, and live round for one sitting.
pub struct Table<P> {
    controller: SessionController<P>,
    roster: Roster,
    catalog: Catalog,
}

impl<P: IndexPicker> Table<P> {
    pub fn new(picker: P, roster: Roster, catalog: Catalog) -> Self {
        Self {
            controller: SessionController::new(picker),
            roster,
            catalog,
        }
    }

    pub fn session(&self) -> &Session {
        self.controller.session()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Process one line of input.
    pub fn process(&mut self, input: &str) -> Result<Reply, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Reply::Text(String::new()));
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        if let Ok(number) = cmd.parse::<usize>() {
            return self.do_reveal(number);
        }

        match cmd.as_str() {
            "start" | "deal" => self.do_start(),
            "begin" => self.do_begin(),
            "restart" | "reset" => Ok(self.do_reset()),
            "add" => {
                self.in_setup()?;
                self.do_add(rest)
            }
            "remove" => {
                self.in_setup()?;
                self.do_remove(rest)
            }
            "toggle" => {
                self.in_setup()?;
                self.do_toggle(rest)
            }
            "players" => Ok(Reply::Text(self.roster_text())),
            "categories" => Ok(Reply::Text(self.categories_text())),
            "status" => Ok(Reply::Text(self.screen())),
            "help" => Ok(Reply::Text(help_text().to_string())),
            "quit" | "q" | "exit" => Ok(Reply::Quit),
            other => Err(format!("unknown command: {other} (type 'help')")),
        }
    }

    /// The screen for the current phase.
    pub fn screen(&self) -> String {
        let session = self.controller.session();
        match session.phase() {
            Phase::Setup => self.setup_screen(),
            Phase::Reveal => reveal_screen(session),
            Phase::Action => action_screen(session),
        }
    }

    /// Roster and catalog edits are only taken between rounds.
    fn in_setup(&self) -> Result<(), String> {
        match self.session().phase() {
            Phase::Setup => Ok(()),
            actual => Err(GameError::WrongPhase {
                expected: Phase::Setup,
                actual,
            }
            .to_string()),
        }
    }

    fn do_start(&mut self) -> Result<Reply, String> {
        if self.session().phase() == Phase::Setup {
            let missing = self.roster.missing_players();
            if missing > 0 {
                return Err(format!(
                    "{} (add {missing} more)",
                    GameError::InsufficientPlayers
                ));
            }
        }
        self.controller
            .start(self.roster.names(), &self.catalog)
            .map_err(|e| e.to_string())?;
        Ok(Reply::Text(self.screen()))
    }

    fn do_reveal(&mut self, number: usize) -> Result<Reply, String> {
        let session = self.controller.session();
        let player = number
            .checked_sub(1)
            .and_then(|i| session.players().get(i))
            .ok_or_else(|| format!("no player number {number}"))?;

        if player.has_viewed {
            return Ok(Reply::Text(format!("{} has already looked.", player.name)));
        }

        let id = player.id;
        let name = player.name.clone();
        let secret = session.secret_for(id).map_err(|e| e.to_string())?;
        self.controller.mark_viewed(id).map_err(|e| e.to_string())?;

        Ok(Reply::Secret {
            player: name,
            text: secret.to_string(),
        })
    }

    fn do_begin(&mut self) -> Result<Reply, String> {
        self.controller.begin().map_err(|e| e.to_string())?;
        Ok(Reply::Text(self.screen()))
    }

    fn do_reset(&mut self) -> Reply {
        self.controller.reset();
        Reply::Text(self.screen())
    }

    fn do_add(&mut self, name: &str) -> Result<Reply, String> {
        self.roster.add(name).map_err(|e| e.to_string())?;
        Ok(Reply::Text(format!("Player added: {name}")))
    }

    fn do_remove(&mut self, arg: &str) -> Result<Reply, String> {
        let number: usize = arg
            .parse()
            .map_err(|_| "usage: remove <number>".to_string())?;
        if number == 0 {
            return Err("player numbers start at 1".into());
        }
        let removed = self.roster.remove(number - 1).map_err(|e| e.to_string())?;
        Ok(Reply::Text(format!("Player removed: {removed}")))
    }

    fn do_toggle(&mut self, id: &str) -> Result<Reply, String> {
        if id.is_empty() {
            return Err("usage: toggle <category id>".into());
        }
        let id = CategoryId::from(id);
        let enabled = self.catalog.toggle(&id).map_err(|e| e.to_string())?;
        Ok(Reply::Text(format!(
            "Category {id} {}",
            if enabled { "enabled" } else { "disabled" }
        )))
    }

    fn setup_screen(&self) -> String {
        let mut out = String::from("--- SETUP ---\n");
        out.push_str(&self.roster_text());
        out.push('\n');
        out.push_str(&format!(
            "Categories: {} of {} enabled\n",
            self.catalog.enabled_count(),
            self.catalog.len()
        ));

        let missing = self.roster.missing_players();
        if missing > 0 {
            out.push_str(&format!(
                "Need {missing} more player{} ('add <name>').",
                if missing == 1 { "" } else { "s" }
            ));
        } else if self.catalog.enabled_count() == 0 {
            out.push_str("Enable a category ('toggle <id>').");
        } else {
            out.push_str("Type 'start' to deal a round.");
        }
        out
    }

    fn roster_text(&self) -> String {
        if self.roster.is_empty() {
            return "No players yet.".to_string();
        }
        let mut out = format!("Players ({}):\n", self.roster.len());
        for (i, name) in self.roster.names().iter().enumerate() {
            out.push_str(&format!("  {}. {name}\n", i + 1));
        }
        out.trim_end().to_string()
    }

    fn categories_text(&self) -> String {
        let mut out = String::from("Categories:\n");
        for cat in self.catalog.categories() {
            out.push_str(&format!(
                "  [{}] {} ({}, {} words)\n",
                if cat.enabled { "x" } else { " " },
                cat.name,
                cat.id,
                cat.word_count()
            ));
        }
        out.trim_end().to_string()
    }
}

fn reveal_screen(session: &Session) -> String {
    let mut out = String::from("--- WHO ARE YOU? ---\nPass the device to each player.\n");
    for (i, p) in session.players().iter().enumerate() {
        out.push_str(&format!("  {}. {}", i + 1, p.name));
        if p.has_viewed {
            out.push_str("  [ready]");
        }
        out.push('\n');
    }
    if session.all_viewed() {
        out.push_str("Everyone is ready. Type 'begin' to start the round.");
    } else {
        out.push_str(&format!(
            "Waiting for players [{}/{}]. Type your number to see your secret.",
            session.viewed_count(),
            session.players().len()
        ));
    }
    out
}

fn action_screen(session: &Session) -> String {
    let category = session.category().map(|c| c.name.as_str()).unwrap_or("?");
    let first = session
        .first_player()
        .map(|p| p.name.as_str())
        .unwrap_or("?");
    format!(
        "--- ROUND ON ---\nCategory: {category}\nFirst player: {first}\n\
         Ask questions, find the imposter. Type 'restart' for a new round."
    )
}

fn help_text() -> &'static str {
    "\
Table Commands:
  start                 Deal a round from the current players
  <number>              Reveal that player's secret (once each)
  begin                 Start questioning once everyone has looked
  restart               Discard the round and return to setup
  add <name>            Add a player (setup only)
  remove <number>       Remove a player (setup only)
  toggle <id>           Enable or disable a category (setup only)
  players               List players
  categories            List categories
  status                Show the current screen
  help                  Show this help
  quit                  Leave the table"
}

pub fn run(config: &GameConfig, options: PlayOptions<'_>) -> Result<(), String> {
    let persist = options.players.is_empty();
    let roster = if persist {
        load_roster(options.roster_path, config)?
    } else {
        let mut roster = Roster::new(config);
        for name in &options.players {
            roster.add(name).map_err(|e| format!("{name}: {e}"))?;
        }
        roster
    };

    let mut catalog = load_catalog(options.categories)?;
    if !options.only.is_empty() {
        let ids: Vec<CategoryId> = catalog.categories().iter().map(|c| c.id.clone()).collect();
        for id in &ids {
            catalog
                .set_enabled(id, options.only.contains(&id.0))
                .map_err(|e| e.to_string())?;
        }
        for id in &options.only {
            if catalog.get(&CategoryId::from(id.as_str())).is_none() {
                return Err(format!("unknown category: {id}"));
            }
        }
    }
    for id in &options.exclude {
        catalog
            .set_enabled(&CategoryId::from(id.as_str()), false)
            .map_err(|e| e.to_string())?;
    }

    let mut table = Table::new(RandomPicker::from_config(config), roster, catalog);

    println!("  {} Imposter", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");
    println!("{}\n", table.screen());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match table.process(&line) {
            Ok(Reply::Text(text)) => {
                if !text.is_empty() {
                    println!("{text}\n");
                }
            }
            Ok(Reply::Secret { player, text }) => {
                println!("{}", format!("Only {player} should look.").bold());
                println!("{}", text.green().bold());
                println!("Press Enter to hide it and pass the device on.");
                line.clear();
                reader.read_line(&mut line).map_err(|e| e.to_string())?;
                print!("{}", "\n".repeat(CONCEAL_LINES));
                println!("{}\n", table.screen());
            }
            Ok(Reply::Quit) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => {
                println!("{}\n", e.yellow());
            }
        }
    }

    if persist {
        save_roster(options.roster_path, table.roster())?;
    }

    Ok(())
}

use crate::actions::{add_one_of_each, add_player, show_count, show_roster};
use crate::menu::{
    main_menu, MainMenuChoice, BANNER, CHOICE_PROMPT, GOODBYE_MESSAGE, INVALID_CHOICE_MESSAGE,
};
use crate::{ConsoleError, ConsoleResult, Terminal};
use log::{debug, info, warn};
use roster::Roster;
use std::io::{BufRead, Write};

/// One interactive run of the roster menu. Owns the roster for its lifetime.
pub struct Session<R: BufRead, W: Write> {
    terminal: Terminal<R, W>,
    roster: Roster,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Session {
            terminal: Terminal::new(reader, writer),
            roster: Roster::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Runs the menu until the user picks "Exit" or the input ends.
    pub fn run(&mut self) -> ConsoleResult<()> {
        info!("roster session started");

        match self.menu_loop() {
            Err(ConsoleError::InputClosed) => {
                warn!(
                    "input closed, leaving session with {} players",
                    self.roster.count()
                );
            }
            result => result?,
        }

        info!("roster session finished: {} players", self.roster.count());

        Ok(())
    }

    pub fn into_parts(self) -> (Roster, W) {
        (self.roster, self.terminal.into_writer())
    }

    fn menu_loop(&mut self) -> ConsoleResult<()> {
        self.terminal.write_line(BANNER)?;

        loop {
            self.terminal.write_line(&main_menu())?;

            let selected = self.terminal.prompt_number(CHOICE_PROMPT)?;

            let choice = match MainMenuChoice::from_number(selected) {
                Some(choice) => choice,
                None => {
                    debug!("rejected menu choice: {}", selected);
                    self.terminal.write_line(INVALID_CHOICE_MESSAGE)?;
                    continue;
                }
            };

            debug!("menu choice: {:?}", choice);

            match choice {
                MainMenuChoice::AddPlayer => add_player(&mut self.terminal, &mut self.roster)?,
                MainMenuChoice::AddOneOfEach => {
                    add_one_of_each(&mut self.terminal, &mut self.roster)?
                }
                MainMenuChoice::ShowRoster => show_roster(&mut self.terminal, &self.roster)?,
                MainMenuChoice::ShowCount => show_count(&mut self.terminal, &self.roster)?,
                MainMenuChoice::Exit => {
                    self.terminal.write_line(GOODBYE_MESSAGE)?;
                    return Ok(());
                }
            }
        }
    }
}

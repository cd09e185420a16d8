use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use tictactoe_engine::{GameSession, SessionRng, SessionSettings, log};

use crate::render::render_session;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Cell(usize),
    Restart,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" => Some(Command::Quit),
        "r" | "restart" => Some(Command::Restart),
        other => other
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .map(Command::Cell),
    }
}

pub struct GameLoop {
    session: GameSession,
    rng: SessionRng,
    thinking_delay: Duration,
}

impl GameLoop {
    pub fn new(settings: SessionSettings, rng: SessionRng, thinking_delay_ms: u64) -> Self {
        Self {
            session: GameSession::new(settings),
            rng,
            thinking_delay: Duration::from_millis(thinking_delay_ms),
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        write!(output, "{}", render_session(&self.session))?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Some(Command::Quit) => break,
                Some(Command::Restart) => self.session = self.session.restart(),
                Some(Command::Cell(index)) => match self.session.play(index) {
                    Ok(next) => {
                        self.session = next;
                        self.play_computer_turn()?;
                    }
                    Err(err) => writeln!(output, "Move rejected: {}", err)?,
                },
                None => {
                    writeln!(output, "Enter a cell 1-9, r to restart or q to quit")?;
                    continue;
                }
            }
            write!(output, "{}", render_session(&self.session))?;
        }

        output.flush()
    }

    fn play_computer_turn(&mut self) -> io::Result<()> {
        if !self.session.is_computer_turn() {
            return Ok(());
        }

        if !self.thinking_delay.is_zero() {
            thread::sleep(self.thinking_delay);
        }

        match self.session.play_computer(&mut self.rng) {
            Ok((next, index)) => {
                log!("Computer played cell {}", index + 1);
                self.session = next;
                Ok(())
            }
            Err(err) => Err(io::Error::other(err)),
        }
    }

    #[cfg(test)]
    fn session(&self) -> &GameSession {
        &self.session
    }
}

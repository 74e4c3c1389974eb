//! Line-oriented frontend for terminals without a TTY (pipes, scripts, CI).
//!
//! The prompts and table layout mirror a classic stdin/stdout blackjack: the
//! dealer's hidden card shows as `■■` and every hand is followed by its score.

use crate::engine::{Decision, PlayerAgent, TableObserver, TableView};
use crate::game::RoundResult;
use crate::score::score;
use crate::session::{parse_bet, parse_chips, parse_decision, parse_yes_no, RoundRecord, Session};
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

const HIDDEN_CARD: &str = "■■";

/// Console input and output shared by the agent and the renderer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    delay: Duration,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            delay: Duration::ZERO,
            clear_screen: false,
        }
    }

    /// Pause before each table render.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Clear the screen before each table render.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    pub fn agent(&self) -> ConsoleAgent<'_, R, W> {
        ConsoleAgent { console: self }
    }

    pub fn renderer(&self) -> ConsoleRenderer<'_, R, W> {
        ConsoleRenderer { console: self }
    }

    fn say(&self, line: &str) -> io::Result<()> {
        let mut out = self.output.borrow_mut();
        writeln!(out, "{line}")?;
        out.flush()
    }

    /// Print `prompt` and read one line. `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become replacement characters, so a garbled
    /// line fails to parse and is asked again instead of ending input.
    fn ask(&self, prompt: &str) -> io::Result<Option<String>> {
        {
            let mut out = self.output.borrow_mut();
            write!(out, "{prompt}")?;
            out.flush()?;
        }
        let mut raw = Vec::new();
        if self.input.borrow_mut().read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }

    /// Ask until `parse` accepts the answer.
    fn ask_until<T, E>(
        &self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, E>,
        invalid: Option<&str>,
    ) -> io::Result<Option<T>> {
        while let Some(line) = self.ask(prompt)? {
            match parse(&line) {
                Ok(v) => return Ok(Some(v)),
                Err(_) => {
                    if let Some(msg) = invalid {
                        self.say(msg)?;
                    }
                }
            }
        }
        Ok(None)
    }

    fn render(&self, table: &TableView<'_>) -> io::Result<()> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let mut guard = self.output.borrow_mut();
        let out = &mut *guard;
        if self.clear_screen {
            crossterm::queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        let mut dealer: Vec<String> = Vec::with_capacity(table.dealer.len());
        if table.dealer_hidden && !table.dealer.is_empty() {
            dealer.push(HIDDEN_CARD.to_string());
        }
        dealer.extend(table.dealer_visible().iter().map(ToString::to_string));
        let player: Vec<String> = table.player.iter().map(ToString::to_string).collect();
        writeln!(out, "Dealer")?;
        writeln!(out, "{} ({})", dealer.join(" "), table.dealer_score_shown())?;
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "{} ({})", player.join(" "), score(table.player))?;
        writeln!(out, "Player")?;
        out.flush()
    }
}

/// Asks the human at the console to hit or stay.
pub struct ConsoleAgent<'a, R, W> {
    console: &'a Console<R, W>,
}

impl<R: BufRead, W: Write> PlayerAgent for ConsoleAgent<'_, R, W> {
    fn hit_or_stand(&mut self, _table: &TableView<'_>) -> Decision {
        match self.console.ask_until("Hit or Stay?(H/S)", |s| parse_decision(s).ok_or(()), None) {
            Ok(Some(d)) => d,
            Ok(None) => {
                log::warn!("input closed while waiting for hit/stand; standing");
                Decision::Stand
            }
            Err(e) => {
                log::warn!("console read failed: {e}; standing");
                Decision::Stand
            }
        }
    }
}

/// Prints the table after every dealt card.
pub struct ConsoleRenderer<'a, R, W> {
    console: &'a Console<R, W>,
}

impl<R: BufRead, W: Write> TableObserver for ConsoleRenderer<'_, R, W> {
    fn render(&mut self, table: &TableView<'_>) {
        if let Err(e) = self.console.render(table) {
            log::warn!("console render failed: {e}");
        }
    }
}

/// Prompt for the starting chips, then play until broke or the player quits.
pub fn run<R: BufRead, W: Write>(
    console: &Console<R, W>,
    config: &crate::session::TableConfig,
) -> io::Result<Option<Session>> {
    let Some(chips) = console.ask_until(
        "How many chips do you want to start with: ",
        parse_chips,
        Some("Invalid Value"),
    )?
    else {
        return Ok(None);
    };
    let config = crate::session::TableConfig { starting_chips: chips, ..*config };
    let mut session = Session::new(&config);
    play(console, &mut session)?;
    Ok(Some(session))
}

/// The betting loop over an existing session.
pub fn play<R: BufRead, W: Write>(console: &Console<R, W>, session: &mut Session) -> io::Result<()> {
    while !session.is_over() {
        let balance = session.balance();
        let Some(bet) =
            console.ask_until("Bet Amount: ", |s| parse_bet(s, balance), Some("Invalid Value"))?
        else {
            return Ok(());
        };
        let record = session
            .play_round(bet, &mut console.agent(), &mut console.renderer())
            .map_err(io::Error::other)?;
        announce(console, &record)?;
        console.say(&session.wallet().to_string())?;
        if session.is_over() {
            console.say("Out of money")?;
            break;
        }
        match console.ask_until("Keep Playing?(Y/N)", |s| parse_yes_no(s).ok_or(()), None)? {
            Some(true) => {}
            _ => break,
        }
    }
    Ok(())
}

fn announce<R: BufRead, W: Write>(console: &Console<R, W>, record: &RoundRecord) -> io::Result<()> {
    match record.result {
        RoundResult::PlayerWin => console.say("You Win")?,
        RoundResult::PlayerBlackjack => console.say("BLACKJACK!")?,
        RoundResult::HouseWin | RoundResult::HouseBlackjack => console.say("Dealer Wins")?,
        RoundResult::Tie => {
            console.say("Tie!")?;
            console.say("Everyone keeps their money")?;
        }
    }
    if record.delta > 0 {
        console.say(&format!("{} added to your balance", record.delta))?;
    } else if record.delta < 0 {
        console.say(&format!("{} taken from your balance", record.delta.unsigned_abs()))?;
    }
    Ok(())
}

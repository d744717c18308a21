use std::io::{self, BufRead, Stdin, Stdout, Write};

use blackjack::Action;
use casino_blackjack::money::{format_amount, parse_amount};
use casino_blackjack::{ActionRequest, DecisionProvider, LegalActions};

/// Reads the player's decisions from a line-oriented console.
///
/// Every prompt re-asks until it gets an acceptable answer. Once input is
/// closed the player stands on every hand, places no further bets and
/// declines another round, so the session winds down on its own.
pub struct TerminalPlayer<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl TerminalPlayer<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}") {
            log::warn!("Failed to write to console: {e}");
        }
    }

    /// Next trimmed input line, or `None` once input is closed.
    fn prompt(&mut self, text: &str) -> Option<String> {
        if self.closed {
            return None;
        }
        if let Err(e) = write!(self.output, "{text}").and_then(|_| self.output.flush()) {
            log::warn!("Failed to write prompt: {e}");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => self.hang_up(),
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                log::error!("Failed to read input: {e}");
                self.hang_up()
            }
        }
    }

    fn hang_up(&mut self) -> Option<String> {
        self.closed = true;
        self.say("\nInput closed, leaving the table.");
        log::info!("Console input closed, leaving the table");
        None
    }
}

/// Maps `H`, `S`, `D` or `P` (any case) to an action, if that action is currently legal.
pub fn parse_action(input: &str, legal: LegalActions) -> Option<Action> {
    let action = match input.trim().chars().next()?.to_ascii_uppercase() {
        'H' => Action::Hit,
        'S' => Action::Stand,
        'D' => Action::DoubleDown,
        'P' => Action::Split,
        _ => return None,
    };
    legal.contains(action).then_some(action)
}

pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_uppercase().as_str() {
        "Y" | "YES" => Some(true),
        "N" | "NO" => Some(false),
        _ => None,
    }
}

fn action_menu(legal: LegalActions) -> String {
    let mut menu = String::from("Choose action: (H)it, (S)tand");
    if legal.can_double {
        menu.push_str(", (D)ouble");
    }
    if legal.can_split {
        menu.push_str(", S(P)lit");
    }
    menu.push_str(": ");
    menu
}

impl<R: BufRead, W: Write> DecisionProvider for TerminalPlayer<R, W> {
    fn request_bet(&mut self, bankroll: u128) -> Option<u128> {
        loop {
            let line = self.prompt(&format!(
                "You have {}. Enter your bet: ",
                format_amount(bankroll)
            ))?;
            match parse_amount(&line) {
                Err(_) => self.say("Invalid input. Try again."),
                Ok(0) => self.say("Bet must be positive."),
                Ok(bet) if bet > bankroll => self.say("You cannot bet more than your bankroll."),
                Ok(bet) => return Some(bet),
            }
        }
    }

    fn request_action(&mut self, request: &ActionRequest<'_>) -> Action {
        let menu = action_menu(request.legal);
        loop {
            let Some(line) = self.prompt(&menu) else {
                return Action::Stand;
            };
            match parse_action(&line, request.legal) {
                Some(action) => return action,
                None => self.say("Invalid choice, try again."),
            }
        }
    }

    fn request_play_again(&mut self) -> bool {
        loop {
            let Some(line) = self.prompt("Play another round? (Y/N): ") else {
                return false;
            };
            match parse_yes_no(&line) {
                Some(answer) => return answer,
                None => self.say("Please answer Y or N."),
            }
        }
    }
}

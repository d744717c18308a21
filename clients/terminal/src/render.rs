use std::io::{self, Stdout, Write};

use blackjack::{Card, Hand};
use casino_blackjack::money::{format_amount, format_delta, net_change};
use casino_blackjack::{EventSink, HandOutcome, NaturalOutcome, RoundEvent, SessionSummary};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;

/// Prints round events as table talk.
pub struct ConsoleRenderer<W> {
    out: W,
    show_advice: bool,
    color: bool,
}

impl ConsoleRenderer<Stdout> {
    pub fn stdout(show_advice: bool) -> Self {
        let out = io::stdout();
        let color = out.is_tty();
        Self::new(out, show_advice, color)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, show_advice: bool, color: bool) -> Self {
        Self {
            out,
            show_advice,
            color,
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        if let Err(e) = writeln!(self.out, "{}", text.as_ref()) {
            log::warn!("Failed to write to console: {e}");
        }
    }

    fn card(&self, card: Card) -> String {
        match (self.color, card.suit.is_red()) {
            (true, true) => card.to_string().red().to_string(),
            _ => card.to_string(),
        }
    }

    fn hand(&self, hand: &Hand) -> String {
        let cards: Vec<String> = hand.cards.iter().map(|&card| self.card(card)).collect();
        format!("{} ({})", cards.join(" "), hand.value())
    }

    /// Dealer hand with the hole card face down.
    fn hidden(&self, up: Card) -> String {
        format!("?? {}", self.card(up))
    }

    fn good(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn bad(&self, text: &str) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn welcome(&mut self) {
        let title = if self.color {
            "           CASINO BLACKJACK          ".bold().to_string()
        } else {
            "           CASINO BLACKJACK          ".to_string()
        };
        self.line("=====================================");
        self.line(title);
        self.line("=====================================");
        self.line("House rules:");
        self.line(" - Single player vs. dealer, one deck.");
        self.line(" - Dealer hits on 16 or less, stands on all 17s.");
        self.line(" - Double down on any first two cards except split Aces.");
        self.line(" - One split per round; split Aces get one card each.");
        self.line(" - Blackjack (Ace + 10-value) pays 3:2.");
        self.line("=====================================");
        self.line("");
    }

    pub fn farewell(&mut self, summary: &SessionSummary) {
        self.line("");
        self.line(format!(
            "You played {} round(s) and leave with {} ({}).",
            summary.rounds_played,
            format_amount(summary.final_bankroll),
            format_delta(summary.net())
        ));
        self.line("Thanks for playing Casino Blackjack!");
        if let Err(e) = self.out.flush() {
            log::warn!("Failed to flush console: {e}");
        }
    }

    fn settled(
        &mut self,
        hand_index: usize,
        hand: &Hand,
        dealer: &Hand,
        stake: u128,
        outcome: HandOutcome,
        credit: u128,
    ) {
        self.line(format!("\n--- Result for Hand {} ---", hand_index + 1));
        let (yours, theirs) = (self.hand(hand), self.hand(dealer));
        self.line(format!("Your hand: {yours}"));
        self.line(format!("Dealer: {theirs}"));

        let delta = format_delta(net_change(stake, credit));
        let message = match outcome {
            HandOutcome::Busted => self.bad(&format!(
                "You busted. You lose this bet of {}.",
                format_amount(stake)
            )),
            HandOutcome::DealerBusted => self.good(&format!("Dealer busts. You win! {delta}")),
            HandOutcome::Won => self.good(&format!("You beat the dealer! {delta}")),
            HandOutcome::Lost => self.bad(&format!("Dealer wins this hand. {delta}")),
            HandOutcome::Push => "Push on this hand. Your bet is returned.".to_string(),
        };
        self.line(message);
    }
}

impl<W: Write> EventSink for ConsoleRenderer<W> {
    fn notify(&mut self, event: &RoundEvent) {
        match event {
            RoundEvent::RoundStarted {
                round,
                stake,
                bankroll,
            } => {
                self.line(format!("\n===== ROUND {round} ====="));
                self.line(format!(
                    "Bet {} placed, {} left in your bankroll.",
                    format_amount(*stake),
                    format_amount(*bankroll)
                ));
            }
            RoundEvent::InitialDeal { player, dealer_up } => {
                let (dealer, player) = (self.hidden(*dealer_up), self.hand(player));
                self.line(format!("Dealer's hand: {dealer}"));
                self.line(format!("Your hand: {player}"));
            }
            RoundEvent::NaturalSettled { outcome, .. } => {
                self.line("\n--- Checking for Blackjack ---");
                let message = match outcome {
                    NaturalOutcome::BothBlackjack => {
                        "Both you and the dealer have Blackjack. Push.".to_string()
                    }
                    NaturalOutcome::PlayerBlackjack => self.good("You have Blackjack! You win 3:2."),
                    NaturalOutcome::DealerBlackjack => self.bad("Dealer has Blackjack. You lose."),
                };
                self.line(message);
            }
            RoundEvent::TurnStarted {
                hand_index,
                hand,
                dealer_up,
            } => {
                let (dealer, player) = (self.hidden(*dealer_up), self.hand(hand));
                self.line(format!("\n--- Playing Hand {} ---", hand_index + 1));
                self.line(format!("Dealer shows: {dealer}"));
                self.line(format!("Your hand: {player}"));
            }
            RoundEvent::Suggested { action, .. } => {
                if self.show_advice {
                    let advice = if self.color {
                        action.label().cyan().to_string()
                    } else {
                        action.label().to_string()
                    };
                    self.line(format!("[Basic Strategy Suggestion] {advice}"));
                }
            }
            RoundEvent::CardDrawn { card, hand, .. } => {
                let (card, hand) = (self.card(*card), self.hand(hand));
                self.line(format!("You draw: {card}"));
                self.line(format!("Your hand: {hand}"));
            }
            RoundEvent::DoubledDown { card, hand, stake, .. } => {
                let (card, hand) = (self.card(*card), self.hand(hand));
                self.line(format!(
                    "You double down to {} and draw: {card}",
                    format_amount(*stake)
                ));
                self.line(format!("Your hand: {hand}"));
            }
            RoundEvent::HandSplit {
                hand_index,
                first,
                second,
                aces,
            } => {
                let (first, second) = (self.hand(first), self.hand(second));
                self.line("You choose to split the pair.");
                self.line(format!("Hand {} after split: {first}", hand_index + 1));
                self.line(format!("Hand {} after split: {second}", hand_index + 2));
                if *aces {
                    self.line("Split aces: each hand gets one card only, no further hits.");
                }
            }
            RoundEvent::HandBusted { .. } => {
                let message = self.bad("You bust on this hand.");
                self.line(message);
            }
            RoundEvent::AllHandsBusted => {
                self.line("\nAll your hands busted. Dealer wins automatically.");
            }
            RoundEvent::DealerRevealed { dealer } => {
                let dealer = self.hand(dealer);
                self.line(format!("\nDealer's hand: {dealer}"));
            }
            RoundEvent::DealerDrew { card, dealer } => {
                let (card, dealer) = (self.card(*card), self.hand(dealer));
                self.line(format!("Dealer draws: {card}"));
                self.line(format!("Dealer's hand: {dealer}"));
            }
            RoundEvent::HandSettled {
                hand_index,
                hand,
                dealer,
                stake,
                outcome,
                credit,
            } => self.settled(*hand_index, hand, dealer, *stake, *outcome, *credit),
            RoundEvent::RoundFinished { bankroll, net } => {
                self.line(format!(
                    "Your bankroll: {} ({} this round)",
                    format_amount(*bankroll),
                    format_delta(*net)
                ));
            }
            RoundEvent::OutOfMoney => {
                let message = self.bad("You are out of money. Game over.");
                self.line(message);
            }
        }
    }
}

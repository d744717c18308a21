//! One round of play: deal, natural check, player hands, dealer draw, settlement.
//!
//! Player hands live in a vector addressed by index. Hands still to be played
//! are tracked in a worklist, so a split simply queues the new hand right
//! behind the one being played.

use std::collections::VecDeque;

use blackjack::{dealer_should_hit, suggest, Action, Card, Hand, Shoe, MAX_HANDS};

use crate::msg::{ActionRequest, HandResult, LegalActions, RoundEvent, RoundReport};
use crate::provider::{DecisionProvider, EventSink};
use crate::settlement::{settle_hand, settle_natural};
use crate::state::{HandStatus, PlayerHand, Table};
use crate::TableError;

#[derive(Debug, Clone)]
pub struct Round {
    /// The first card is the hole card, the second is the up-card.
    pub dealer: Hand,
    pub hands: Vec<PlayerHand>,
    pending: VecDeque<usize>,
}

impl Round {
    /// Deals player, dealer, player, dealer from `shoe`.
    pub fn deal(shoe: &mut Shoe, stake: u128) -> Self {
        let mut player = PlayerHand::new(stake);
        let mut dealer = Hand::new();

        player.hand.add_card(shoe.deal());
        dealer.add_card(shoe.deal());
        player.hand.add_card(shoe.deal());
        dealer.add_card(shoe.deal());

        Self {
            dealer,
            hands: vec![player],
            pending: VecDeque::from([0]),
        }
    }

    pub fn dealer_up(&self) -> Card {
        self.dealer.cards[1]
    }

    pub fn legal_actions(&self, index: usize, bankroll: u128) -> LegalActions {
        let player = &self.hands[index];
        let covers_stake = bankroll >= player.stake;
        let two_cards = player.hand.len() == 2;

        LegalActions {
            can_double: two_cards && covers_stake && !player.from_split_aces,
            can_split: self.hands.len() < MAX_HANDS
                && two_cards
                && player.hand.is_pair()
                && covers_stake,
        }
    }

    /// Applies an action to hand `index`, rejecting anything outside `legal_actions`.
    pub fn apply<S>(
        &mut self,
        index: usize,
        action: Action,
        table: &mut Table,
        sink: &mut S,
    ) -> Result<(), TableError>
    where
        S: EventSink + ?Sized,
    {
        let legal = self.legal_actions(index, table.bankroll);
        if self.hands[index].is_finished() || !legal.contains(action) {
            return Err(TableError::IllegalAction {
                action,
                hand_index: index,
            });
        }
        log::debug!("Hand {index}: {action}");

        match action {
            Action::Hit => {
                let card = table.shoe.deal();
                let player = &mut self.hands[index];
                player.hand.add_card(card);
                sink.notify(&RoundEvent::CardDrawn {
                    hand_index: index,
                    card,
                    hand: player.hand.clone(),
                });
                if player.hand.is_bust() {
                    player.status = HandStatus::Busted;
                    sink.notify(&RoundEvent::HandBusted { hand_index: index });
                }
            }
            Action::Stand => {
                self.hands[index].status = HandStatus::Stood;
            }
            Action::DoubleDown => {
                let extra = self.hands[index].stake;
                table.debit(extra)?;
                let card = table.shoe.deal();
                let player = &mut self.hands[index];
                player.stake += extra;
                player.hand.add_card(card);
                player.status = if player.hand.is_bust() {
                    HandStatus::Busted
                } else {
                    HandStatus::Doubled
                };
                sink.notify(&RoundEvent::DoubledDown {
                    hand_index: index,
                    card,
                    hand: player.hand.clone(),
                    stake: player.stake,
                });
                if player.status == HandStatus::Busted {
                    sink.notify(&RoundEvent::HandBusted { hand_index: index });
                }
            }
            Action::Split => self.split(index, table, sink)?,
        }

        Ok(())
    }

    fn split<S>(&mut self, index: usize, table: &mut Table, sink: &mut S) -> Result<(), TableError>
    where
        S: EventSink + ?Sized,
    {
        let stake = self.hands[index].stake;
        table.debit(stake)?;

        let moved = self.hands[index].hand.remove_card(1);
        let aces = moved.is_ace();

        let mut second = PlayerHand::new(stake);
        second.hand.add_card(moved);
        self.hands[index].hand.add_card(table.shoe.deal());
        second.hand.add_card(table.shoe.deal());

        if aces {
            for player in [&mut self.hands[index], &mut second] {
                player.from_split_aces = true;
                player.status = HandStatus::Stood;
            }
        }

        let new_index = index + 1;
        self.hands.insert(new_index, second);
        for pending in self.pending.iter_mut() {
            if *pending >= new_index {
                *pending += 1;
            }
        }
        self.pending.push_front(new_index);

        sink.notify(&RoundEvent::HandSplit {
            hand_index: index,
            first: self.hands[index].hand.clone(),
            second: self.hands[new_index].hand.clone(),
            aces,
        });
        Ok(())
    }

    fn play_hands<P, S>(
        &mut self,
        table: &mut Table,
        provider: &mut P,
        sink: &mut S,
    ) -> Result<(), TableError>
    where
        P: DecisionProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        let dealer_up = self.dealer_up();

        while let Some(index) = self.pending.pop_front() {
            if self.hands[index].is_finished() {
                continue;
            }
            sink.notify(&RoundEvent::TurnStarted {
                hand_index: index,
                hand: self.hands[index].hand.clone(),
                dealer_up,
            });

            while !self.hands[index].is_finished() {
                let legal = self.legal_actions(index, table.bankroll);
                let hand = &self.hands[index].hand;
                let suggestion = suggest(hand, dealer_up.value(), legal.can_double, legal.can_split);
                sink.notify(&RoundEvent::Suggested {
                    hand_index: index,
                    action: suggestion,
                });

                let action = provider.request_action(&ActionRequest {
                    hand_index: index,
                    hand,
                    dealer_up,
                    legal,
                    suggestion,
                });
                self.apply(index, action, table, sink)?;
            }
        }
        Ok(())
    }

    /// Dealer draws to 17 unless every player hand is already bust.
    fn play_dealer<S>(&mut self, shoe: &mut Shoe, sink: &mut S)
    where
        S: EventSink + ?Sized,
    {
        if self.hands.iter().all(|player| player.hand.is_bust()) {
            sink.notify(&RoundEvent::AllHandsBusted);
            return;
        }

        sink.notify(&RoundEvent::DealerRevealed {
            dealer: self.dealer.clone(),
        });
        while dealer_should_hit(self.dealer.value()) {
            let card = shoe.deal();
            self.dealer.add_card(card);
            sink.notify(&RoundEvent::DealerDrew {
                card,
                dealer: self.dealer.clone(),
            });
        }
        log::debug!("Dealer finishes on {}", self.dealer.value());
    }

    fn settle<S>(&self, table: &mut Table, sink: &mut S) -> Result<Vec<HandResult>, TableError>
    where
        S: EventSink + ?Sized,
    {
        self.hands
            .iter()
            .enumerate()
            .map(|(index, player)| {
                let (outcome, credit) = settle_hand(&player.hand, player.stake, &self.dealer)?;
                table.credit(credit)?;
                sink.notify(&RoundEvent::HandSettled {
                    hand_index: index,
                    hand: player.hand.clone(),
                    dealer: self.dealer.clone(),
                    stake: player.stake,
                    outcome,
                    credit,
                });
                Ok(HandResult {
                    hand: player.hand.clone(),
                    stake: player.stake,
                    outcome,
                    credit,
                })
            })
            .collect()
    }
}

/// Plays a full round for `stake`, debiting and crediting `table.bankroll`.
pub fn play_round<P, S>(
    table: &mut Table,
    stake: u128,
    provider: &mut P,
    sink: &mut S,
) -> Result<RoundReport, TableError>
where
    P: DecisionProvider + ?Sized,
    S: EventSink + ?Sized,
{
    if stake == 0 || !table.covers(stake) {
        return Err(TableError::InvalidBet {
            bet: stake,
            bankroll: table.bankroll,
        });
    }

    let bankroll_before = table.bankroll;
    table.debit(stake)?;
    table.rounds_played += 1;
    let round_number = table.rounds_played;
    sink.notify(&RoundEvent::RoundStarted {
        round: round_number,
        stake,
        bankroll: table.bankroll,
    });

    let mut round = Round::deal(&mut table.shoe, stake);
    log::debug!(
        "Round {round_number}: player {} vs dealer up {}",
        round.hands[0].hand.to_display(),
        round.dealer_up()
    );
    sink.notify(&RoundEvent::InitialDeal {
        player: round.hands[0].hand.clone(),
        dealer_up: round.dealer_up(),
    });

    // Advice on the opening hand comes before the natural check.
    let legal = round.legal_actions(0, table.bankroll);
    sink.notify(&RoundEvent::Suggested {
        hand_index: 0,
        action: suggest(
            &round.hands[0].hand,
            round.dealer_up().value(),
            legal.can_double,
            legal.can_split,
        ),
    });

    let (natural, hands) = match settle_natural(&round.hands[0].hand, &round.dealer, stake)? {
        Some((outcome, credit)) => {
            sink.notify(&RoundEvent::DealerRevealed {
                dealer: round.dealer.clone(),
            });
            table.credit(credit)?;
            sink.notify(&RoundEvent::NaturalSettled {
                outcome,
                player: round.hands[0].hand.clone(),
                dealer: round.dealer.clone(),
                credit,
            });
            (Some(outcome), Vec::new())
        }
        None => {
            round.play_hands(table, provider, sink)?;
            round.play_dealer(&mut table.shoe, sink);
            (None, round.settle(table, sink)?)
        }
    };

    let report = RoundReport {
        round: round_number,
        dealer: round.dealer,
        natural,
        hands,
        bankroll_before,
        bankroll_after: table.bankroll,
    };
    log::info!(
        "Round {} settled: net {} cents, bankroll {} cents",
        report.round,
        report.net(),
        report.bankroll_after
    );
    sink.notify(&RoundEvent::RoundFinished {
        bankroll: report.bankroll_after,
        net: report.net(),
    });
    Ok(report)
}

#[cfg(test)]
mod tests;

use super::*;
use crate::settlement::{HandOutcome, NaturalOutcome};
use blackjack::{Rank, Suit};

struct ScriptedPlayer {
    actions: VecDeque<Action>,
    requests: Vec<(usize, LegalActions, Action)>,
}

impl ScriptedPlayer {
    fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            requests: Vec::new(),
        }
    }
}

impl DecisionProvider for ScriptedPlayer {
    fn request_bet(&mut self, _bankroll: u128) -> Option<u128> {
        Some(1000)
    }

    fn request_action(&mut self, request: &ActionRequest<'_>) -> Action {
        self.requests
            .push((request.hand_index, request.legal, request.suggestion));
        self.actions.pop_front().expect("unexpected action request")
    }

    fn request_play_again(&mut self) -> bool {
        false
    }
}

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Table whose shoe deals `order` first: player, hole, player, up-card, then draws.
fn stacked_table(bankroll: u128, order: Vec<Card>) -> Table {
    Table::new(bankroll, Shoe::stacked(order, 0))
}

#[test]
fn test_deal_order_alternates() {
    let mut shoe = Shoe::stacked(
        [
            card(Rank::Two, Suit::Clubs),
            card(Rank::Three, Suit::Clubs),
            card(Rank::Four, Suit::Clubs),
            card(Rank::Five, Suit::Clubs),
        ],
        0,
    );
    let round = Round::deal(&mut shoe, 1000);
    assert_eq!(
        round.hands[0].hand.cards,
        vec![card(Rank::Two, Suit::Clubs), card(Rank::Four, Suit::Clubs)]
    );
    assert_eq!(round.dealer.cards[0], card(Rank::Three, Suit::Clubs));
    assert_eq!(round.dealer_up(), card(Rank::Five, Suit::Clubs));
    assert_eq!(round.hands[0].stake, 1000);
}

#[test]
fn test_player_natural_pays_three_to_two() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Ace, Suit::Spades),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::King, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
        ],
    );
    let mut player = ScriptedPlayer::new([]);
    let mut events: Vec<RoundEvent> = Vec::new();

    let report = play_round(&mut table, 1000, &mut player, &mut events).unwrap();

    assert_eq!(table.bankroll, 11500);
    assert_eq!(report.natural, Some(NaturalOutcome::PlayerBlackjack));
    assert!(report.hands.is_empty());
    assert_eq!(report.net(), 1500);
    assert!(player.requests.is_empty());
    assert!(matches!(
        events[2],
        RoundEvent::Suggested {
            hand_index: 0,
            action: Action::Stand
        }
    ));
    assert!(matches!(events[3], RoundEvent::DealerRevealed { .. }));
    assert!(matches!(
        events[4],
        RoundEvent::NaturalSettled {
            outcome: NaturalOutcome::PlayerBlackjack,
            credit: 2500,
            ..
        }
    ));
}

#[test]
fn test_natural_too_large_to_pay_is_an_error() {
    let huge = u128::MAX / 2;
    let mut table = stacked_table(
        huge,
        vec![
            card(Rank::Ace, Suit::Spades),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::King, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
        ],
    );
    let mut player = ScriptedPlayer::new([]);

    let err = play_round(&mut table, huge, &mut player, &mut ()).unwrap_err();

    assert!(matches!(err, TableError::PayoutOverflow { stake } if stake == huge));
}

#[test]
fn test_opening_hand_is_advised_before_play() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Six, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Two, Suit::Clubs),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Stand]);
    let mut events: Vec<RoundEvent> = Vec::new();

    play_round(&mut table, 1000, &mut player, &mut events).unwrap();

    assert!(matches!(events[1], RoundEvent::InitialDeal { .. }));
    assert_eq!(
        events[2],
        RoundEvent::Suggested {
            hand_index: 0,
            action: Action::Hit
        }
    );
    assert!(matches!(events[3], RoundEvent::TurnStarted { hand_index: 0, .. }));
}

#[test]
fn test_dealer_natural_takes_stake() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Ten, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Queen, Suit::Diamonds),
        ],
    );
    let mut player = ScriptedPlayer::new([]);

    let report = play_round(&mut table, 1000, &mut player, &mut ()).unwrap();

    assert_eq!(report.natural, Some(NaturalOutcome::DealerBlackjack));
    assert_eq!(table.bankroll, 9000);
}

#[test]
fn test_both_naturals_push() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Ace, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::Jack, Suit::Clubs),
            card(Rank::King, Suit::Diamonds),
        ],
    );
    let mut player = ScriptedPlayer::new([]);

    let report = play_round(&mut table, 1000, &mut player, &mut ()).unwrap();

    assert_eq!(report.natural, Some(NaturalOutcome::BothBlackjack));
    assert_eq!(table.bankroll, 10000);
}

#[test]
fn test_invalid_bets_are_rejected_without_side_effects() {
    let mut table = Table::shuffled(5000, Some(1));
    let mut player = ScriptedPlayer::new([]);
    let mut events: Vec<RoundEvent> = Vec::new();

    for stake in [0, 5001] {
        let err = play_round(&mut table, stake, &mut player, &mut events).unwrap_err();
        assert!(matches!(err, TableError::InvalidBet { bankroll: 5000, .. }));
    }
    assert_eq!(table.bankroll, 5000);
    assert_eq!(table.rounds_played, 0);
    assert_eq!(table.shoe.len(), 52);
    assert!(events.is_empty());
}

#[test]
fn test_split_eights_both_bust() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Eight, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Diamonds),
            card(Rank::King, Suit::Clubs),
            card(Rank::Queen, Suit::Clubs),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Split, Action::Hit, Action::Hit]);
    let mut events: Vec<RoundEvent> = Vec::new();

    let report = play_round(&mut table, 1000, &mut player, &mut events).unwrap();

    assert_eq!(table.bankroll, 8000);
    assert_eq!(report.hands.len(), 2);
    assert!(report
        .hands
        .iter()
        .all(|result| result.outcome == HandOutcome::Busted && result.credit == 0));
    assert!(events.contains(&RoundEvent::AllHandsBusted));
    assert!(!events
        .iter()
        .any(|event| matches!(event, RoundEvent::DealerRevealed { .. })));
    // Dealer never draws when every hand is bust.
    assert_eq!(report.dealer.len(), 2);
}

#[test]
fn test_split_plays_first_hand_before_second() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Eight, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Three, Suit::Clubs),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Split, Action::Stand, Action::Stand]);

    let report = play_round(&mut table, 1000, &mut player, &mut ()).unwrap();

    let indices: Vec<usize> = player.requests.iter().map(|(index, _, _)| *index).collect();
    assert_eq!(indices, vec![0, 0, 1]);
    // The first hand is 8,8 again but the hand limit is reached.
    assert!(player.requests[0].1.can_split);
    assert!(!player.requests[1].1.can_split);
    assert_eq!(report.hands[0].hand.value(), 16);
    assert_eq!(report.hands[1].hand.value(), 11);
    assert_eq!(table.bankroll, 8000);
}

#[test]
fn test_resplit_is_illegal() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Eight, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Eight, Suit::Hearts),
            card(Rank::Three, Suit::Clubs),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Split, Action::Split]);

    let err = play_round(&mut table, 1000, &mut player, &mut ()).unwrap_err();

    assert!(matches!(
        err,
        TableError::IllegalAction {
            action: Action::Split,
            hand_index: 0
        }
    ));
}

#[test]
fn test_split_aces_take_one_card_each() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Ace, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::King, Suit::Diamonds),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Split]);
    let mut events: Vec<RoundEvent> = Vec::new();

    let report = play_round(&mut table, 1000, &mut player, &mut events).unwrap();

    assert_eq!(player.requests.len(), 1);
    assert!(events.iter().any(|event| matches!(
        event,
        RoundEvent::HandSplit {
            hand_index: 0,
            aces: true,
            ..
        }
    )));
    assert_eq!(report.hands[0].hand.value(), 20);
    assert_eq!(report.hands[1].hand.value(), 21);
    assert!(report
        .hands
        .iter()
        .all(|result| result.outcome == HandOutcome::Won && result.credit == 2000));
    assert_eq!(table.bankroll, 12000);
}

#[test]
fn test_double_down_doubles_stake_and_takes_one_card() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Six, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Ten, Suit::Clubs),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::DoubleDown]);
    let mut events: Vec<RoundEvent> = Vec::new();

    let report = play_round(&mut table, 1000, &mut player, &mut events).unwrap();

    assert_eq!(player.requests[0].2, Action::DoubleDown);
    assert_eq!(report.hands[0].stake, 2000);
    assert_eq!(report.hands[0].hand.len(), 3);
    assert_eq!(report.hands[0].outcome, HandOutcome::Won);
    assert_eq!(table.bankroll, 12000);
    assert!(events.iter().any(|event| matches!(
        event,
        RoundEvent::DoubledDown {
            hand_index: 0,
            stake: 2000,
            ..
        }
    )));
}

#[test]
fn test_double_unavailable_without_funds() {
    let mut table = stacked_table(
        1000,
        vec![
            card(Rank::Six, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Five, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Ten, Suit::Clubs),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Hit, Action::Stand]);

    play_round(&mut table, 1000, &mut player, &mut ()).unwrap();

    let (_, legal, suggestion) = player.requests[0];
    assert!(!legal.can_double);
    assert_eq!(suggestion, Action::Hit);
    assert_eq!(table.bankroll, 2000);
}

#[test]
fn test_pair_with_bankroll_of_one_stake_can_neither_double_nor_split() {
    let mut table = stacked_table(
        1000,
        vec![
            card(Rank::Eight, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Nine, Suit::Spades),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Stand]);

    let report = play_round(&mut table, 1000, &mut player, &mut ()).unwrap();

    assert_eq!(
        player.requests[0].1,
        LegalActions {
            can_double: false,
            can_split: false
        }
    );
    assert_eq!(report.hands[0].outcome, HandOutcome::Lost);
    assert_eq!(table.bankroll, 0);
}

#[test]
fn test_split_ace_hand_cannot_double() {
    let mut shoe = Shoe::stacked(
        [
            card(Rank::Ace, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
        ],
        0,
    );
    let mut round = Round::deal(&mut shoe, 1000);
    assert!(round.legal_actions(0, 10000).can_double);

    round.hands[0].from_split_aces = true;

    let legal = round.legal_actions(0, 10000);
    assert_eq!(round.hands[0].hand.len(), 2);
    assert!(!legal.can_double);
    assert!(!legal.can_split);
}

#[test]
fn test_double_after_hit_is_illegal() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Two, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Three, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Four, Suit::Clubs),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Hit, Action::DoubleDown]);

    let err = play_round(&mut table, 1000, &mut player, &mut ()).unwrap_err();

    assert!(matches!(
        err,
        TableError::IllegalAction {
            action: Action::DoubleDown,
            hand_index: 0
        }
    ));
}

#[test]
fn test_dealer_stands_on_soft_seventeen() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Six, Suit::Hearts),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Ace, Suit::Spades),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Stand]);
    let mut events: Vec<RoundEvent> = Vec::new();

    let report = play_round(&mut table, 1000, &mut player, &mut events).unwrap();

    assert!(!events
        .iter()
        .any(|event| matches!(event, RoundEvent::DealerDrew { .. })));
    assert_eq!(report.dealer.value(), 17);
    assert_eq!(report.hands[0].outcome, HandOutcome::Won);
    assert_eq!(table.bankroll, 11000);
}

#[test]
fn test_dealer_draws_to_seventeen() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Five, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Six, Suit::Spades),
            card(Rank::Five, Suit::Clubs),
            card(Rank::Four, Suit::Diamonds),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Stand]);
    let mut events: Vec<RoundEvent> = Vec::new();

    let report = play_round(&mut table, 1000, &mut player, &mut events).unwrap();

    let draws = events
        .iter()
        .filter(|event| matches!(event, RoundEvent::DealerDrew { .. }))
        .count();
    assert_eq!(draws, 2);
    assert_eq!(report.dealer.value(), 20);
    assert_eq!(report.hands[0].outcome, HandOutcome::Lost);
    assert_eq!(table.bankroll, 9000);
}

#[test]
fn test_equal_totals_push() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Stand]);
    let mut events: Vec<RoundEvent> = Vec::new();

    let report = play_round(&mut table, 1000, &mut player, &mut events).unwrap();

    assert_eq!(report.hands[0].outcome, HandOutcome::Push);
    assert_eq!(report.net(), 0);
    assert_eq!(table.bankroll, 10000);
    assert_eq!(
        events.last(),
        Some(&RoundEvent::RoundFinished {
            bankroll: 10000,
            net: 0
        })
    );
}

#[test]
fn test_round_counter_advances() {
    let mut table = stacked_table(
        10000,
        vec![
            card(Rank::Ten, Suit::Clubs),
            card(Rank::Ten, Suit::Hearts),
            card(Rank::Eight, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
        ],
    );
    let mut player = ScriptedPlayer::new([Action::Stand]);

    let report = play_round(&mut table, 1000, &mut player, &mut ()).unwrap();

    assert_eq!(report.round, 1);
    assert_eq!(table.rounds_played, 1);
}

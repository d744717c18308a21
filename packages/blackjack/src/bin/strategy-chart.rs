use blackjack::{suggest, Action, Card, Hand, Rank, Suit};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "strategy-chart",
    about = "Print the basic strategy chart used by the table's advisor"
)]
struct Args {
    /// Show the chart as if doubling were unavailable
    #[arg(long)]
    no_double: bool,

    /// Show the chart as if splitting were unavailable
    #[arg(long)]
    no_split: bool,
}

const DEALER_UP: [u8; 10] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

fn rank_for_value(value: u8) -> Rank {
    match value {
        2 => Rank::Two,
        3 => Rank::Three,
        4 => Rank::Four,
        5 => Rank::Five,
        6 => Rank::Six,
        7 => Rank::Seven,
        8 => Rank::Eight,
        9 => Rank::Nine,
        10 => Rank::Ten,
        _ => Rank::Ace,
    }
}

fn two_card_hand(first: u8, second: u8) -> Hand {
    Hand::from_cards([
        Card::new(rank_for_value(first), Suit::Spades),
        Card::new(rank_for_value(second), Suit::Hearts),
    ])
}

/// Two distinct non-Ace cards summing to `total` where possible.
fn hard_hand(total: u8) -> Hand {
    let mut low = total.saturating_sub(10).max(2);
    let mut high = total - low;
    if low == high && total < 20 {
        low -= 1;
        high += 1;
    }
    two_card_hand(low, high)
}

fn abbreviation(action: Action) -> &'static str {
    match action {
        Action::Hit => "H",
        Action::Stand => "S",
        Action::DoubleDown => "D",
        Action::Split => "P",
    }
}

fn print_header(title: &str) {
    println!();
    print!("{title:<8}");
    for up in DEALER_UP {
        let label = if up == 11 { "A".to_string() } else { up.to_string() };
        print!("{label:>4}");
    }
    println!();
}

fn print_row(label: &str, hand: &Hand, can_double: bool, can_split: bool) {
    print!("{label:<8}");
    for up in DEALER_UP {
        print!("{:>4}", abbreviation(suggest(hand, up, can_double, can_split)));
    }
    println!();
}

fn main() {
    let args = Args::parse();
    let can_double = !args.no_double;
    let can_split = !args.no_split;

    println!("H = hit, S = stand, D = double down, P = split");

    print_header("Hard");
    for total in 5..=20 {
        print_row(&total.to_string(), &hard_hand(total), can_double, false);
    }

    print_header("Soft");
    for kicker in 2..=9 {
        let hand = two_card_hand(11, kicker);
        print_row(&format!("A,{kicker}"), &hand, can_double, false);
    }

    print_header("Pairs");
    for value in 2..=11 {
        let label = if value == 11 {
            "A,A".to_string()
        } else {
            format!("{value},{value}")
        };
        print_row(&label, &two_card_hand(value, value), can_double, can_split);
    }
}

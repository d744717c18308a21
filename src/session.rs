use serde::{Deserialize, Serialize};

use crate::money::net_change;
use crate::msg::RoundEvent;
use crate::provider::{DecisionProvider, EventSink};
use crate::round::play_round;
use crate::state::Table;
use crate::TableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub rounds_played: u64,
    pub starting_bankroll: u128,
    pub final_bankroll: u128,
}

impl SessionSummary {
    pub fn net(&self) -> i128 {
        net_change(self.starting_bankroll, self.final_bankroll)
    }
}

/// Plays rounds until the bankroll is gone or the provider declines another round
/// or withholds a bet.
pub fn run_session<P, S>(
    table: &mut Table,
    provider: &mut P,
    sink: &mut S,
) -> Result<SessionSummary, TableError>
where
    P: DecisionProvider + ?Sized,
    S: EventSink + ?Sized,
{
    let starting_bankroll = table.bankroll;
    let mut rounds_played = 0;

    while table.bankroll > 0 {
        let Some(stake) = provider.request_bet(table.bankroll) else {
            log::info!("Player left the table before round {}", rounds_played + 1);
            break;
        };
        play_round(table, stake, provider, sink)?;
        rounds_played += 1;

        if table.bankroll == 0 {
            log::info!("Bankroll exhausted after {rounds_played} rounds");
            sink.notify(&RoundEvent::OutOfMoney);
            break;
        }
        if !provider.request_play_again() {
            break;
        }
    }

    let summary = SessionSummary {
        rounds_played,
        starting_bankroll,
        final_bankroll: table.bankroll,
    };
    log::info!(
        "Session over: {} rounds, bankroll {} -> {} cents",
        summary.rounds_played,
        summary.starting_bankroll,
        summary.final_bankroll
    );
    Ok(summary)
}

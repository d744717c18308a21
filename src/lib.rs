pub mod error;
pub mod money;
pub mod msg;
pub mod provider;
pub mod round;
pub mod session;
pub mod settlement;
pub mod state;

pub use crate::error::TableError;
pub use crate::msg::{ActionRequest, HandResult, LegalActions, RoundEvent, RoundReport};
pub use crate::provider::{AdvisorPlayer, DecisionProvider, EventSink};
pub use crate::round::{play_round, Round};
pub use crate::session::{run_session, SessionSummary};
pub use crate::settlement::{HandOutcome, NaturalOutcome};
pub use crate::state::{HandStatus, PlayerHand, Table};

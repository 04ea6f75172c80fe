//! Move sources: the fixed-depth evaluator and the agents built on it,
//! plus the one-ply threat player, a random player and the interactive
//! human player.

mod agent;
pub mod evaluator;
mod human;
mod random;
mod search;
mod threat;

pub use agent::Agent;
pub use evaluator::{Evaluator, Score, Tiebreak, ILLEGAL, LOSS, NEUTRAL, WIN};
pub use human::{HumanAgent, LineSource, StdinLines};
pub use random::{random_legal_column, RandomAgent};
pub use search::SearchAgent;
pub use threat::ThreatAgent;

//! Simulation - single fights and Monte Carlo batches

mod driver;
mod fight;
mod result;

pub use driver::{simulate_distribution, SimulationRequest, Simulator};
pub use fight::{simulate_fight, simulate_fight_traced, FightEvent, FightOutcome, FightParams};
pub use result::{HistogramRow, SimulationResult};

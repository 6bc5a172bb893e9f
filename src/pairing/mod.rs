pub mod buckets;

pub use buckets::{pair_standings, PairingPlan};

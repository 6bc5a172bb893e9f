pub mod tournament;
pub mod validation;

pub use tournament::TournamentStore;

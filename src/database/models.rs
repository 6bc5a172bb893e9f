use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: i32,
    pub winner_id: i32,
    pub loser_id: i32,
    pub created_at: Option<NaiveDateTime>,
}

/// Materialised win/match totals for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub player_id: i32,
    pub player_name: String,
    pub wins: i32,
    pub matches: i32,
}

impl Standing {
    pub fn losses(&self) -> i32 {
        self.matches - self.wins
    }
}

/// Proposed next-round matchup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub player_id1: i32,
    pub player_name1: String,
    pub player_id2: i32,
    pub player_name2: String,
}

impl Pairing {
    pub fn between(first: &Standing, second: &Standing) -> Self {
        Self {
            player_id1: first.player_id,
            player_name1: first.player_name.clone(),
            player_id2: second.player_id,
            player_name2: second.player_name.clone(),
        }
    }

    pub fn involves(&self, player_id: i32) -> bool {
        self.player_id1 == player_id || self.player_id2 == player_id
    }
}

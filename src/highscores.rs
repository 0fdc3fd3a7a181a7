//! Best-distance leaderboard
//!
//! Lives for the process only; the game keeps no files.

use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleId;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Final distance in meters
    pub distance: u64,
    /// Bike used for the run
    pub vehicle: VehicleId,
    /// Ticks survived
    pub ticks: u64,
}

/// High score leaderboard, sorted descending by distance
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a distance qualifies for the leaderboard
    pub fn qualifies(&self, distance: u64) -> bool {
        if distance == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| distance > e.distance).unwrap_or(true)
    }

    /// Add a finished run. Returns the rank achieved (1-indexed) or None if it
    /// didn't qualify. Ties rank below earlier runs.
    pub fn add_score(&mut self, distance: u64, vehicle: VehicleId, ticks: u64) -> Option<usize> {
        if !self.qualifies(distance) {
            return None;
        }

        let entry = HighScoreEntry {
            distance,
            vehicle,
            ticks,
        };

        let pos = self.entries.iter().position(|e| distance > e.distance);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        log::info!("New high score #{rank}: {distance}m");

        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best distance so far (if any)
    pub fn best(&self) -> Option<u64> {
        self.entries.first().map(|e| e.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(50, 1, 100), Some(1));
        assert_eq!(scores.add_score(80, 2, 150), Some(1));
        assert_eq!(scores.add_score(50, 3, 90), Some(3));
        assert_eq!(scores.best(), Some(80));
        assert_eq!(scores.entries[1].vehicle, 1);
    }

    #[test]
    fn zero_distance_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(0, 1, 3), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn full_board_keeps_top_ten() {
        let mut scores = HighScores::new();
        for d in 1..=10 {
            scores.add_score(d * 10, 1, d);
        }
        assert!(!scores.qualifies(10));
        assert_eq!(scores.add_score(5, 1, 1), None);
        assert_eq!(scores.add_score(55, 1, 1), Some(6));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.distance), Some(20));
    }
}

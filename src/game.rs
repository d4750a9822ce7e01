use crate::event::KillEvent;
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Running totals for the match currently being read.
#[derive(Debug, Clone)]
pub struct MatchAccumulator {
    id: usize,
    players: BTreeSet<String>,
    kills: BTreeMap<String, i64>,
    total_kills: u64,
    kills_by_means: BTreeMap<String, u64>,
}

impl MatchAccumulator {
    pub fn new(id: usize) -> Self {
        MatchAccumulator {
            id,
            players: BTreeSet::new(),
            kills: BTreeMap::new(),
            total_kills: 0,
            kills_by_means: BTreeMap::new(),
        }
    }

    /// Credits the killer, or debits the victim when `world` did the killing.
    /// Every kill counts toward the match total either way.
    pub fn record(&mut self, event: &KillEvent, world: &str) {
        for name in [&event.killer, &event.victim].iter() {
            if name.as_str() != world {
                self.players.insert(name.to_string());
                self.kills.entry(name.to_string()).or_insert(0);
            }
        }

        if event.killer == world {
            if let Some(count) = self.kills.get_mut(&event.victim) {
                *count -= 1;
            }
        } else if let Some(count) = self.kills.get_mut(&event.killer) {
            *count += 1;
        }

        self.total_kills += 1;
        *self.kills_by_means.entry(event.means.clone()).or_insert(0) += 1;
        trace!(
            game = self.id,
            killer = %event.killer,
            victim = %event.victim,
            means = %event.means,
            "kill"
        );
    }

    pub fn finish(self) -> MatchSummary {
        MatchSummary {
            id: self.id,
            players: self.players.into_iter().collect(),
            kills: self.kills,
            total_kills: self.total_kills,
            kills_by_means: self.kills_by_means,
        }
    }
}

/// A finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    pub id: usize,
    /// Sorted, never contains the environment.
    pub players: Vec<String>,
    pub kills: BTreeMap<String, i64>,
    pub total_kills: u64,
    pub kills_by_means: BTreeMap<String, u64>,
}

impl MatchSummary {
    /// `game_<id>`
    pub fn label(&self) -> String {
        std::format!("game_{}", self.id)
    }

    /// No kill was logged between this match's `InitGame` and the next.
    pub fn is_empty(&self) -> bool {
        self.total_kills == 0
    }
}

//! Search configuration

use crate::error::{EngineError, EngineResult};
use crate::phase::PhaseThresholds;

/// How sibling moves are cut during the search
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Pruning {
    /// Stop scanning siblings as soon as a child's score passes the running
    /// best of the node above, looked up by the branch index two levels up
    /// the child's path. Only subtrees the parent would reject are cut short,
    /// so the root move and score match plain minimax.
    #[default]
    GrandparentCut,
    /// Fail-soft alpha-beta; picks the same move as plain minimax
    AlphaBeta,
    /// Plain minimax, every node expanded
    None,
}

/// Tunables for `choose_move_with`.
///
/// # Examples
///
/// ```
/// use reversi_engine::{Pruning, SearchConfig};
///
/// let config = SearchConfig::new()
///     .with_pruning(Pruning::AlphaBeta)
///     .with_openness_weight(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth and variant selection by game phase
    pub phases: PhaseThresholds,
    /// Multiplier on accumulated openness at heuristic leaves
    pub openness_weight: i32,
    /// Score of a node whose side to move is stuck: positive when that side
    /// is the searching player, negative otherwise. Also the initial running
    /// best at internal nodes.
    pub no_move_score: i32,
    pub pruning: Pruning,
}

impl SearchConfig {
    pub fn new() -> Self {
        SearchConfig {
            phases: PhaseThresholds::default(),
            openness_weight: 3,
            no_move_score: 100,
            pruning: Pruning::default(),
        }
    }

    pub fn with_phases(mut self, phases: PhaseThresholds) -> Self {
        self.phases = phases;
        self
    }

    pub fn with_openness_weight(mut self, weight: i32) -> Self {
        self.openness_weight = weight;
        self
    }

    pub fn with_no_move_score(mut self, score: i32) -> Self {
        self.no_move_score = score;
        self
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// Reject thresholds out of order, zero depths and a negative stuck score
    pub fn validate(&self) -> EngineResult<()> {
        let p = &self.phases;

        if !(p.endgame_below <= p.deep_exact_below && p.deep_exact_below <= p.exact_below) {
            return Err(invalid(format!(
                "phase thresholds must not decrease: {} / {} / {}",
                p.endgame_below, p.deep_exact_below, p.exact_below
            )));
        }

        let depths = [
            ("endgame_max_depth", p.endgame_max_depth),
            ("deep_exact_depth", p.deep_exact_depth),
            ("exact_depth", p.exact_depth),
            ("narrow_depth", p.narrow_depth),
            ("wide_depth", p.wide_depth),
        ];
        if let Some((name, _)) = depths.iter().find(|(_, depth)| *depth == 0) {
            return Err(invalid(format!("{} must be at least 1", name)));
        }

        if self.no_move_score < 0 {
            return Err(invalid(format!(
                "no_move_score must not be negative, got {}",
                self.no_move_score
            )));
        }

        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(reason: String) -> EngineError {
    EngineError::InvalidConfig { reason }
}

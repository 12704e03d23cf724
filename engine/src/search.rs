//! Depth-limited minimax search
//!
//! The searching player (`perspective`) maximizes at nodes where it is on
//! turn and the opponent minimizes elsewhere. Moves are visited in generator
//! order and only a strictly better score replaces the running best, so ties
//! resolve to the earliest move.
//!
//! All mutable state (cut table, statistics) lives in a `Searcher` created
//! for a single top-level search and dropped afterwards.

use std::collections::HashMap;

use reversi::{BoardState, Move, Player};
use tracing::{debug, trace};

use crate::config::{Pruning, SearchConfig};
use crate::error::EngineResult;
use crate::evaluation::{calculate_openness, disc_differential, point_with_mobility};
use crate::phase::{SearchPlan, Variant};

/// Counters collected during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every visited node, leaves included
    pub nodes: u64,
    /// Nodes scored at depth zero
    pub leaves: u64,
    /// Nodes whose side to move had no legal move
    pub terminals: u64,
    /// Sibling scans stopped early
    pub cuts: u64,
}

/// Result of a search: root score and the move that achieves it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub score: i32,
    /// None when the root is a leaf or has no legal moves
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

/// Score and move returned by one node
#[derive(Clone, Copy, Debug)]
struct Scored {
    score: i32,
    best_move: Option<Move>,
}

impl Scored {
    fn leaf(score: i32) -> Self {
        Scored {
            score,
            best_move: None,
        }
    }
}

/// Best scores recorded per depth, keyed by the branch index of the node
/// that recorded them.
///
/// A node at depth `d` reached through branch `i` writes `levels[d][i]`; its
/// children read the parent's entry at `levels[d + 1]` to decide whether to
/// stop scanning.
#[derive(Debug)]
struct CutTable {
    levels: Vec<HashMap<usize, i32>>,
}

impl CutTable {
    fn new(depth: u8) -> Self {
        CutTable {
            levels: vec![HashMap::new(); depth as usize + 2],
        }
    }

    /// Record a child's score at the node on `path` and report whether it
    /// already passes the parent's running best.
    ///
    /// `path` lists branch indices from the root (whose index is 0) down to
    /// the node itself.
    fn observe(&mut self, depth: u8, path: &[usize], score: i32, maximizing: bool) -> bool {
        let depth = depth as usize;
        let own = path[path.len() - 1];

        // Scores below this child are stale once it has returned
        self.levels[depth - 1].clear();
        self.levels[depth].entry(own).or_insert(score);

        if path.len() < 2 {
            return false;
        }
        let parent = path[path.len() - 2];

        match self.levels[depth + 1].get(&parent) {
            Some(&bound) if maximizing => score > bound,
            Some(&bound) => score < bound,
            None => false,
        }
    }

    /// Note a new running best at the node on `path`
    fn improve(&mut self, depth: u8, path: &[usize], score: i32) {
        let own = path[path.len() - 1];
        self.levels[depth as usize].insert(own, score);
    }
}

/// One search from a fixed root, perspective and plan
pub struct Searcher<'a> {
    config: &'a SearchConfig,
    plan: SearchPlan,
    perspective: Player,
    cuts: CutTable,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(config: &'a SearchConfig, plan: SearchPlan, perspective: Player) -> Self {
        Searcher {
            config,
            plan,
            perspective,
            cuts: CutTable::new(plan.depth),
            stats: SearchStats::default(),
        }
    }

    /// Search `root` to the plan's depth
    pub fn run(mut self, root: &BoardState) -> EngineResult<SearchOutcome> {
        let mut path = vec![0];
        let scored = self.search(root, self.plan.depth, &mut path, 0, i32::MIN, i32::MAX)?;

        debug!(
            plan = %self.plan,
            score = scored.score,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            terminals = self.stats.terminals,
            cuts = self.stats.cuts,
            "search finished"
        );

        Ok(SearchOutcome {
            score: scored.score,
            best_move: scored.best_move,
            stats: self.stats,
        })
    }

    fn search(
        &mut self,
        state: &BoardState,
        depth: u8,
        path: &mut Vec<usize>,
        openness: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> EngineResult<Scored> {
        self.stats.nodes += 1;
        let moves = state.legal_moves();

        if depth == 0 {
            self.stats.leaves += 1;
            return Ok(Scored::leaf(self.leaf_score(state, &moves, openness)?));
        }

        let maximizing = state.next() == self.perspective;
        let stuck = self.config.no_move_score;

        if moves.is_empty() {
            self.stats.terminals += 1;
            return Ok(Scored::leaf(if maximizing { stuck } else { -stuck }));
        }

        let mut best_score = if maximizing { -stuck } else { stuck };
        let mut best_move = moves[0];

        if maximizing {
            alpha = alpha.max(best_score);
        } else {
            beta = beta.min(best_score);
        }

        for (index, mv) in moves.iter().enumerate() {
            let child = state.apply_move(mv)?;

            let child_openness = match self.plan.variant {
                Variant::Heuristic => {
                    let delta = calculate_openness(state, &child);
                    if maximizing {
                        openness + delta
                    } else {
                        openness - delta
                    }
                }
                Variant::Exact => 0,
            };

            path.push(index);
            let result = self.search(&child, depth - 1, path, child_openness, alpha, beta);
            path.pop();
            let score = result?.score;

            if self.config.pruning == Pruning::GrandparentCut
                && self.cuts.observe(depth, path, score, maximizing)
            {
                trace!(depth, index, score, "cut");
                self.stats.cuts += 1;
                best_score = score;
                best_move = *mv;
                break;
            }

            let improved = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improved {
                best_score = score;
                best_move = *mv;
                if self.config.pruning == Pruning::GrandparentCut {
                    self.cuts.improve(depth, path, score);
                }
            }

            if self.config.pruning == Pruning::AlphaBeta {
                if maximizing {
                    alpha = alpha.max(best_score);
                } else {
                    beta = beta.min(best_score);
                }
                if alpha >= beta {
                    self.stats.cuts += 1;
                    break;
                }
            }
        }

        Ok(Scored {
            score: best_score,
            best_move: Some(best_move),
        })
    }

    /// Static score at depth zero
    fn leaf_score(&self, state: &BoardState, moves: &[Move], openness: i32) -> EngineResult<i32> {
        match self.plan.variant {
            Variant::Heuristic => {
                // Most exposing reply available from here
                let mut reply = 0;
                for mv in moves {
                    let child = state.apply_move(mv)?;
                    reply = reply.min(calculate_openness(state, &child));
                }
                if state.next() != self.perspective {
                    reply = -reply;
                }

                // Saturating: the weight is not range-checked
                let point = point_with_mobility(state, self.perspective, moves.len());
                let exposure = self.config.openness_weight.saturating_mul(openness + reply);
                Ok(point.saturating_add(exposure))
            }
            Variant::Exact if self.plan.endgame => Ok(disc_differential(state, self.perspective)),
            Variant::Exact => Ok(point_with_mobility(state, self.perspective, moves.len())),
        }
    }
}

/// Run one search with a fresh context
pub fn search(
    state: &BoardState,
    plan: SearchPlan,
    perspective: Player,
    config: &SearchConfig,
) -> EngineResult<SearchOutcome> {
    Searcher::new(config, plan, perspective).run(state)
}

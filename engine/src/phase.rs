//! Game phase strategy
//!
//! Maps the number of empty cells (and, in the opening, the mover's
//! mobility) to a search depth and evaluator variant.

use std::fmt;

/// Which evaluator family the search uses
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    /// Positional score plus mobility, adjusted by accumulated openness
    Heuristic,
    /// Positional score plus mobility at the leaves, no openness
    Exact,
}

/// Depth and evaluator chosen for one search
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchPlan {
    pub variant: Variant,
    pub depth: u8,
    /// Leaves are scored by disc differential instead of `calculate_point`.
    /// Only set for the exact variant below the endgame threshold.
    pub endgame: bool,
}

impl SearchPlan {
    pub fn heuristic(depth: u8) -> Self {
        SearchPlan {
            variant: Variant::Heuristic,
            depth,
            endgame: false,
        }
    }

    pub fn exact(depth: u8) -> Self {
        SearchPlan {
            variant: Variant::Exact,
            depth,
            endgame: false,
        }
    }

    pub fn endgame(depth: u8) -> Self {
        SearchPlan {
            variant: Variant::Exact,
            depth,
            endgame: true,
        }
    }

    /// Same plan searched to a different depth
    pub fn with_depth(self, depth: u8) -> Self {
        SearchPlan { depth, ..self }
    }
}

impl fmt::Display for SearchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.variant, self.endgame) {
            (Variant::Heuristic, _) => write!(f, "heuristic/{}", self.depth),
            (Variant::Exact, true) => write!(f, "endgame/{}", self.depth),
            (Variant::Exact, false) => write!(f, "exact/{}", self.depth),
        }
    }
}

/// Phase boundaries, measured in empty cells
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PhaseThresholds {
    /// Below this, search to the end with disc-differential leaves
    pub endgame_below: u32,
    /// Cap on the endgame depth
    pub endgame_max_depth: u8,
    /// Below this (and not endgame), exact search at `deep_exact_depth`
    pub deep_exact_below: u32,
    pub deep_exact_depth: u8,
    /// Below this (and not deeper), exact search at `exact_depth`
    pub exact_below: u32,
    pub exact_depth: u8,
    /// Opening mobility at or above which the shallower heuristic search runs
    pub wide_mobility: usize,
    pub narrow_depth: u8,
    pub wide_depth: u8,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        PhaseThresholds {
            endgame_below: 13,
            endgame_max_depth: 6,
            deep_exact_below: 16,
            deep_exact_depth: 4,
            exact_below: 24,
            exact_depth: 3,
            wide_mobility: 7,
            narrow_depth: 3,
            wide_depth: 2,
        }
    }
}

/// Pick depth and variant from the empty count and the mover's mobility
pub fn select_plan(empty_count: u32, mobility: usize, phases: &PhaseThresholds) -> SearchPlan {
    if empty_count < phases.endgame_below {
        let depth = empty_count.min(phases.endgame_max_depth as u32) as u8;
        SearchPlan::endgame(depth)
    } else if empty_count < phases.deep_exact_below {
        SearchPlan::exact(phases.deep_exact_depth)
    } else if empty_count < phases.exact_below {
        SearchPlan::exact(phases.exact_depth)
    } else if mobility < phases.wide_mobility {
        SearchPlan::heuristic(phases.narrow_depth)
    } else {
        SearchPlan::heuristic(phases.wide_depth)
    }
}

//! Planner view derivation

use crate::domain::Goal;

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerView {
    /// Goals ascending by target date
    pub goals: Vec<Goal>,
    pub total: usize,
    pub completed: usize,
    /// `ceil(completed / 2)`. A display heuristic, not consecutive days.
    pub streak: usize,
    /// Mean progress across all goals, rounded
    pub average_progress: u32,
}

impl PlannerView {
    pub fn derive(goals: &[Goal]) -> Self {
        let mut sorted = goals.to_vec();
        sorted.sort_by_key(|g| g.date);

        let completed = goals.iter().filter(|g| g.completed).count();
        let average_progress = if goals.is_empty() {
            0
        } else {
            let sum: u32 = goals.iter().map(|g| u32::from(g.progress)).sum();
            (f64::from(sum) / goals.len() as f64).round() as u32
        };

        Self {
            goals: sorted,
            total: goals.len(),
            completed,
            streak: completed.div_ceil(2),
            average_progress,
        }
    }
}

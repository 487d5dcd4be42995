use crate::ACTS;
use crate::Probability;
use crate::game::action::Action;

/// Optional natural-language narration of an action distribution.
/// Purely decorative: implementations are called for log lines only
/// and can never touch training state.
pub trait Explain {
    fn explain(&self, dist: &[Probability; ACTS]) -> String;
}

/// Deterministic in-crate narrator. Names the most likely action and
/// lists the full distribution.
pub struct Commentary;

impl Explain for Commentary {
    fn explain(&self, dist: &[Probability; ACTS]) -> String {
        let actions = Action::all();
        let favorite = dist
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let spread = actions
            .iter()
            .zip(dist.iter())
            .map(|(action, p)| format!("{} {:.0}%", action, p * 100.))
            .collect::<Vec<_>>()
            .join(", ");
        format!("leaning {} ({})", actions[favorite], spread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_the_favorite() {
        let mut dist = [0.1; ACTS];
        dist[0] = 0.6;
        let line = Commentary.explain(&dist);
        assert!(line.contains("FOLD"));
    }
}

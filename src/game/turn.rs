/// Whose move it is, if anyone's. The community reveal happens inside
/// Game::apply at round close, so chance never surfaces as a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Choice(usize),
    Terminal,
}

impl Turn {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

use super::action::Action;
use super::observation::Observation;
use super::street::Street;
use super::strength::Strength;
use super::turn::Turn;
use crate::B_BLIND;
use crate::Chips;
use crate::MAX_RAISES;
use crate::N;
use crate::S_BLIND;
use crate::Utility;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::error::Error;
use rand::Rng;

/// One hand of Leduc in between actions. Immutable per step:
/// ::apply consumes a state by reference and produces the successor,
/// so retained copies (e.g. buffered experience) never alias a live hand.
///
/// The community card is drawn at the deal and kept private until the
/// preflop round closes, which keeps ::apply a pure function of the state.
/// Rewards are bookkept per player: ::settlement returns one signed chip
/// delta per seat, and callers index it by whoever acted.
#[derive(Debug, Clone, Copy)]
pub struct Game {
    holes: [Card; N],
    board: Option<Card>,
    reveal: Card,
    pot: Chips,
    street: Street,
    ticker: usize,
    last_action: Option<Action>,
    last_raise: Chips,
    raises: usize,
}

impl Game {
    /// shuffle, deal, and post blinds. the first decision is player 0's.
    pub fn root(rng: &mut impl Rng) -> Self {
        let mut deck = Deck::new();
        Self {
            holes: [deck.draw(rng), deck.draw(rng)],
            board: None,
            reveal: deck.draw(rng),
            pot: S_BLIND + B_BLIND,
            street: Street::Pref,
            ticker: 0,
            last_action: None,
            last_raise: B_BLIND,
            raises: 0,
        }
    }

    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn board(&self) -> Option<Card> {
        self.board
    }

    pub fn turn(&self) -> Turn {
        if matches!(self.last_action, Some(Action::Fold)) {
            Turn::Terminal
        } else if self.closed() {
            Turn::Terminal // preflop closes are consumed by the reveal in ::apply
        } else {
            Turn::Choice(self.ticker)
        }
    }

    /// the actions on offer at this decision point. raising is capped
    /// at MAX_RAISES per round, so once the cap is hit only fold and
    /// call remain and the pot stays bounded by the stacks.
    /// terminal states offer none.
    pub fn legal(&self) -> Vec<Action> {
        match self.turn() {
            Turn::Choice(_) if self.raises < MAX_RAISES => Action::all().to_vec(),
            Turn::Choice(_) => vec![Action::Fold, Action::Call],
            Turn::Terminal => vec![],
        }
    }

    /// the rules of how the hand may proceed.
    /// calls put in the outstanding raise amount; raises set it.
    /// a round-closing call on the preflop reveals the board and
    /// resets the rotation; on the flop it goes to showdown.
    pub fn apply(&self, action: Action) -> Result<Self, Error> {
        if !self.legal().contains(&action) {
            return Err(Error::InvalidAction(format!(
                "{:?} at {:?}",
                action,
                self.turn()
            )));
        }
        let mut next = *self;
        match action {
            Action::Fold => {
                next.last_action = Some(Action::Fold);
            }
            Action::Call => {
                next.pot += next.last_raise;
                next.rotate(action);
            }
            Action::Raise(amount) => {
                next.pot += amount;
                next.last_raise = amount;
                next.raises += 1;
                next.rotate(action);
            }
        }
        if next.closed() && next.street == Street::Pref {
            next.board = Some(next.reveal);
            next.street = next.street.next();
            next.ticker = 0;
            next.last_action = None;
            next.raises = 0;
        }
        Ok(next)
    }

    /// what the given player can see of this state.
    pub fn observe(&self, player: usize) -> Observation {
        Observation::from((self.holes[player], self.board, self.pot, self.street))
    }

    /// per-player signed chip deltas at hand termination.
    /// a fold forfeits the folder's half of the pot to the opponent;
    /// a showdown moves half the pot from loser to winner; ties wash.
    pub fn settlement(&self) -> [Utility; N] {
        debug_assert!(self.turn().is_terminal());
        let half = self.pot as Utility / 2.;
        if matches!(self.last_action, Some(Action::Fold)) {
            let folder = self.ticker;
            let mut settlement = [half; N];
            settlement[folder] = -half;
            settlement
        } else {
            let board = match self.board {
                Some(board) => board,
                None => unreachable!("showdown without board"),
            };
            let zero = Strength::from((self.holes[0], board));
            let one = Strength::from((self.holes[1], board));
            match zero.cmp(&one) {
                std::cmp::Ordering::Greater => [half, -half],
                std::cmp::Ordering::Less => [-half, half],
                std::cmp::Ordering::Equal => [0., 0.],
            }
        }
    }

    fn rotate(&mut self, action: Action) {
        self.ticker = (self.ticker + 1) % N;
        self.last_action = Some(action);
    }

    /// the most recent action was a round-closing call: either it
    /// matched an outstanding raise, or it was the second player
    /// checking behind with no bet in front. an opening limp or check
    /// by player 0 leaves the round open.
    fn closed(&self) -> bool {
        matches!(self.last_action, Some(Action::Call)) && (self.raises > 0 || self.ticker == 0)
    }
}

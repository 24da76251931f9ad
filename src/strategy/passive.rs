use super::Strategy;

/// Never buys, never sells. Plays the opening die to the end.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passive;

impl Strategy for Passive {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::State;

    #[test]
    fn does_nothing() {
        let ref state = State::new(3, 100);
        assert!(!Passive.buy(0, state));
        assert!(!Passive.sell(0, state, 6));
    }
}

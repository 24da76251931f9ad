use crate::Dice;
use crate::FACES;
use crate::Face;
use crate::Probability;
use crate::Utility;

/// probability that the best of `dice` fair dice shows `face`.
///
/// P(max = f) = (f/6)^n - ((f-1)/6)^n, written with the ratios
/// first so that large dice counts neither overflow nor lose precision.
pub fn proba(dice: Dice, face: Face) -> Probability {
    debug_assert!(dice >= 1, "no roll without dice");
    debug_assert!((1..=FACES).contains(&face), "face {} out of range", face);
    let n = dice as i32;
    let sides = FACES as Probability;
    let hi = (face as Probability / sides).powi(n);
    let lo = ((face - 1) as Probability / sides).powi(n);
    hi - lo
}

/// expected best face among `dice` fair dice
pub fn expectation(dice: Dice) -> Utility {
    match dice {
        0 => 0.,
        n => (1..=FACES).map(|f| f as Utility * proba(n, f)).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_sums_to_one() {
        for dice in 1..=64 {
            let total = (1..=FACES).map(|f| proba(dice, f)).sum::<Probability>();
            assert!((total - 1.).abs() < 1e-12, "{} dice sum to {}", dice, total);
        }
    }

    #[test]
    fn single_die_is_uniform() {
        for face in 1..=FACES {
            assert!((proba(1, face) - 1. / 6.).abs() < 1e-15);
        }
    }

    #[test]
    fn two_dice_by_counting() {
        // 11 of 36 pairs have a six somewhere
        assert!((proba(2, 6) - 11. / 36.).abs() < 1e-15);
        assert!((proba(2, 1) - 1. / 36.).abs() < 1e-15);
    }

    #[test]
    fn expected_best_face() {
        assert!((expectation(1) - 3.5).abs() < 1e-12);
        assert!((expectation(2) - 161. / 36.).abs() < 1e-12);
        assert!(expectation(0) == 0.);
        for dice in 1..32 {
            assert!(expectation(dice + 1) > expectation(dice));
        }
    }

    #[test]
    fn large_pools_stay_finite() {
        assert!(proba(1000, 6).is_finite());
        assert!(proba(1000, 1) >= 0.);
    }
}

use crate::CONFIDENCE;
use crate::Probability;
use crate::Utility;

/// Two-sided 97.5% standard normal quantile.
const Z: Utility = 1.959_963_984_540_054;

/// Exact two-sided 95% Student quantiles for 1..=10 degrees of freedom,
/// where the asymptotic expansion is too loose.
const STUDENT: [Utility; 10] = [
    12.706_204_736,
    4.302_652_730,
    3.182_446_305,
    2.776_445_105,
    2.570_581_836,
    2.446_911_851,
    2.364_624_252,
    2.306_004_135,
    2.262_157_163,
    2.228_138_852,
];

/// Confidence interval on the mean of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub low: Utility,
    pub high: Utility,
}

impl Interval {
    pub fn mean(&self) -> Utility {
        (self.low + self.high) / 2.
    }

    pub fn width(&self) -> Utility {
        self.high - self.low
    }

    pub fn contains(&self, x: Utility) -> bool {
        self.low <= x && x <= self.high
    }

    /// Student quantile for `df` degrees of freedom at the
    /// reported confidence level. Cornish-Fisher expansion
    /// around the normal quantile past the exact table.
    pub fn student(df: usize) -> Utility {
        match df {
            0 => Utility::INFINITY,
            1..=10 => STUDENT[df - 1],
            _ => {
                let v = df as Utility;
                let z = Z;
                let g1 = (z.powi(3) + z) / 4.;
                let g2 = (5. * z.powi(5) + 16. * z.powi(3) + 3. * z) / 96.;
                let g3 = (3. * z.powi(7) + 19. * z.powi(5) + 17. * z.powi(3) - 15. * z) / 384.;
                let g4 = (79. * z.powi(9) + 776. * z.powi(7) + 1482. * z.powi(5)
                    - 1920. * z.powi(3)
                    - 945. * z)
                    / 92160.;
                z + g1 / v + g2 / v.powi(2) + g3 / v.powi(3) + g4 / v.powi(4)
            }
        }
    }

    pub fn level() -> Probability {
        CONFIDENCE
    }
}

/// t-interval around the sample mean. a single observation
/// (or none) has no spread to measure and yields a point.
impl From<&[Utility]> for Interval {
    fn from(sample: &[Utility]) -> Self {
        let n = sample.len();
        let mean = match n {
            0 => 0.,
            _ => sample.iter().sum::<Utility>() / n as Utility,
        };
        if n < 2 {
            return Self {
                low: mean,
                high: mean,
            };
        }
        let variance = sample.iter().map(|x| (x - mean).powi(2)).sum::<Utility>() / (n - 1) as Utility;
        let sem = (variance / n as Utility).sqrt();
        let margin = Self::student(n - 1) * sem;
        Self {
            low: mean - margin,
            high: mean + margin,
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} - {:.2}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_sample_is_a_point() {
        let interval = Interval::from([4., 4., 4., 4.].as_slice());
        assert!(interval.low == 4.);
        assert!(interval.high == 4.);
    }

    #[test]
    fn single_observation_is_a_point() {
        let interval = Interval::from([7.].as_slice());
        assert!(interval.width() == 0.);
        assert!(interval.mean() == 7.);
    }

    #[test]
    fn student_quantiles() {
        assert!((Interval::student(11) - 2.200_985).abs() < 1e-3);
        assert!((Interval::student(30) - 2.042_272).abs() < 1e-4);
        assert!((Interval::student(1_000_000) - Z).abs() < 1e-4);
        for df in 1..200 {
            assert!(Interval::student(df) > Interval::student(df + 1));
        }
    }

    #[test]
    fn known_sample() {
        // mean 3, sample sd sqrt(2.5), n 5, t(4) = 2.7764
        let interval = Interval::from([1., 2., 3., 4., 5.].as_slice());
        let margin = 2.776_445_105 * (2.5f64 / 5.).sqrt();
        assert!((interval.mean() - 3.).abs() < 1e-12);
        assert!((interval.high - 3. - margin).abs() < 1e-9);
        assert!(interval.contains(3.));
    }
}

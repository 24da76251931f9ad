use crate::simulate::Interval;

/// Simulated score interval per strategy, in the order they ran.
#[derive(Debug, Clone, Default)]
pub struct Scores(Vec<(String, Interval)>);

impl Scores {
    pub fn push(&mut self, name: impl ToString, interval: Interval) {
        self.0.push((name.to_string(), interval));
    }

    pub fn get(&self, name: &str) -> Option<&Interval> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, interval)| interval)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "nothing to report");
        }
        writeln!(f, "┌────────────┬──────────┬──────────┐")?;
        writeln!(f, "│ Strategy   │      Low │     High │")?;
        writeln!(f, "├────────────┼──────────┼──────────┤")?;
        for (name, interval) in self.0.iter() {
            writeln!(f, "│ {:<10} │ {:>8.2} │ {:>8.2} │", name, interval.low, interval.high)?;
        }
        writeln!(f, "└────────────┴──────────┴──────────┘")?;
        Ok(())
    }
}

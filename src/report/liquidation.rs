use crate::Dice;
use crate::Utility;

/// Flat bonus per opening dice count that is worth as much
/// as playing the whole game out from there.
#[derive(Debug, Clone, PartialEq)]
pub struct Liquidation(Vec<(Dice, Utility)>);

impl Liquidation {
    pub fn bonuses(&self) -> Vec<Utility> {
        self.0.iter().map(|(_, bonus)| *bonus).collect()
    }
}

impl From<Vec<Utility>> for Liquidation {
    fn from(schedule: Vec<Utility>) -> Self {
        Self(
            schedule
                .into_iter()
                .enumerate()
                .map(|(i, bonus)| (i + 1, bonus))
                .collect(),
        )
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Liquidation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "nothing to report (no dice limit)");
        }
        writeln!(f, "┌──────┬────────────┐")?;
        writeln!(f, "│ Dice │      Bonus │")?;
        writeln!(f, "├──────┼────────────┤")?;
        for (dice, bonus) in self.0.iter() {
            writeln!(f, "│ {:>4} │ {:>10.2} │", dice, bonus)?;
        }
        writeln!(f, "└──────┴────────────┘")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_from_one() {
        let table = Liquidation::from(vec![3.5, 7.25]);
        let text = table.to_string();
        assert!(text.contains("│    1 │       3.50 │"));
        assert!(text.contains("│    2 │       7.25 │"));
        assert!(table.bonuses() == vec![3.5, 7.25]);
    }

    #[test]
    fn empty_schedule() {
        assert!(Liquidation::from(vec![]).to_string().contains("nothing to report"));
    }
}

use super::Basic;
use super::Early;
use super::Optimal;
use super::Passive;
use super::Strategy;
use crate::game::Game;
use crate::solver::Registry;

/// Every strategy that can be named on the command line.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Kind {
    Passive,
    Basic,
    Early,
    Optimal,
}

impl Kind {
    pub const fn all() -> [Self; 4] {
        [Self::Passive, Self::Basic, Self::Early, Self::Optimal]
    }

    /// the optimal strategy shares its solver through the registry
    pub fn build(&self, game: &Game, registry: &Registry) -> Box<dyn Strategy> {
        match self {
            Self::Passive => Box::new(Passive),
            Self::Basic => Box::new(Basic::new(game)),
            Self::Early => Box::new(Early::new(game)),
            Self::Optimal => Box::new(Optimal::new(registry.solver(game))),
        }
    }
}

impl TryFrom<&str> for Kind {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "passive" => Ok(Self::Passive),
            "basic" => Ok(Self::Basic),
            "early" => Ok(Self::Early),
            "optimal" => Ok(Self::Optimal),
            _ => Err(anyhow::anyhow!("unknown strategy: {}", s)),
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passive => write!(f, "passive"),
            Self::Basic => write!(f, "basic"),
            Self::Early => write!(f, "early"),
            Self::Optimal => write!(f, "optimal"),
        }
    }
}

//! Dice formulas and roll outcomes.
//!
//! A table's weight space is generated by a formula of the form `NdS+M`
//! (`"1d20"`, `"2d6+1"`, `"d100"`, `"3d8-2"`). The formula is parsed once
//! at load time; rolling it produces a numeric total that is matched
//! against entry ranges.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::KasError;

/// A dice formula: `count` dice with `sides` sides, plus a flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Formula {
    /// Number of dice rolled.
    pub count: u32,
    /// Sides per die (at least 2).
    pub sides: u32,
    /// Flat modifier added to the sum.
    pub modifier: i64,
}

impl Formula {
    /// A single die with the given number of sides (`1dS`).
    pub fn d(sides: u32) -> Self {
        Self {
            count: 1,
            sides,
            modifier: 0,
        }
    }

    /// The smallest total this formula can produce.
    pub fn min(&self) -> i64 {
        i64::from(self.count) + self.modifier
    }

    /// The largest total this formula can produce.
    pub fn max(&self) -> i64 {
        i64::from(self.count) * i64::from(self.sides) + self.modifier
    }

    /// Roll the formula using the given RNG.
    pub fn roll(&self, rng: &mut StdRng) -> RollOutcome {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();
        let total = rolls.iter().map(|r| i64::from(*r)).sum::<i64>() + self.modifier;
        RollOutcome { total, rolls }
    }
}

impl FromStr for Formula {
    type Err = KasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let err = || KasError::InvalidFormula(s.to_string());

        let (count_part, rest) = trimmed.split_once('d').ok_or_else(err)?;
        let count: u32 = if count_part.is_empty() {
            1
        } else {
            count_part.parse().map_err(|_| err())?
        };

        let (sides_part, modifier) = if let Some((sides, m)) = rest.split_once('+') {
            (sides, m.parse::<i64>().map_err(|_| err())?)
        } else if let Some((sides, m)) = rest.split_once('-') {
            (sides, -m.parse::<i64>().map_err(|_| err())?)
        } else {
            (rest, 0)
        };
        let sides: u32 = sides_part.parse().map_err(|_| err())?;

        if count == 0 || sides < 2 {
            return Err(err());
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }
}

impl TryFrom<String> for Formula {
    type Error = KasError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Formula> for String {
    fn from(f: Formula) -> Self {
        f.to_string()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

/// The result of rolling a formula once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollOutcome {
    /// Sum of all dice plus the modifier.
    pub total: i64,
    /// Individual die values, in roll order.
    pub rolls: Vec<u32>,
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(ToString::to_string).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total)
    }
}

//! Mean, variance, standard deviation and coefficient of variance of tabletop
//! dice rolls written as `NdS+C`, plus list and table rendering of the results.

#[cfg(test)]
mod dice_test_strategies;

mod dice;
mod error;
mod presenter;
mod stats;

pub use dice::{format_real, DiceRoll, Number};
pub use error::{Error, Result};
pub use presenter::{record_for, FieldNames, Format, Record};
pub use stats::Stats;

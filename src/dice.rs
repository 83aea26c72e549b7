use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    stats::Stats,
};

/// Dice notation `NdS+C`. Only the start of the input has to match, anything
/// after a complete roll expression is ignored.
static NOTATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)[dD]([0-9]+)(?: *\+ *([0-9]+))?").expect("dice notation pattern is valid")
});

/// A numeric argument that is either a whole number or a real number.
///
/// Faces and dice counts only accept [`Number::Int`], while an offset accepts both.
/// The variant is kept so that an explicit `0.0` offset can be told apart from the
/// default `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Real(value) => value,
        }
    }
}

macro_rules! number_from {
    ($variant:ident($target:ty): $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Number::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

number_from!(Int(i64): i8, i16, i32, i64, u8, u16, u32);
number_from!(Real(f64): f32, f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Real(value) => f.write_str(&format_real(*value)),
        }
    }
}

/// Formats a real so that it never reads like an integer: `8.0` rather than `8`.
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0. {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// One dice roll specification: `num_dice` dice with `faces` faces each, plus an
/// `offset`. The statistics of the roll are recomputed by every setter, so they
/// always describe the current parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DiceRoll {
    faces: u32,
    num_dice: u32,
    offset: Number,
    stats: Stats,
}

impl DiceRoll {
    /// Creates a roll of `num_dice` dice with `faces` faces plus `offset`.
    ///
    /// # Errors
    /// [`Error::InvalidArgumentType`] when `faces` or `num_dice` is not a whole number
    /// or when `offset` is not finite. [`Error::InvalidArgumentValue`] when `faces` or
    /// `num_dice` is below 1 or does not fit in a `u32`.
    pub fn new(
        faces: impl Into<Number>,
        num_dice: impl Into<Number>,
        offset: impl Into<Number>,
    ) -> Result<DiceRoll> {
        let faces = whole_number("faces", faces.into())?;
        let num_dice = whole_number("num_dice", num_dice.into())?;
        let offset = finite_number("offset", offset.into())?;

        let faces = at_least_one("faces", faces)?;
        let num_dice = at_least_one("num_dice", num_dice)?;

        Ok(DiceRoll {
            faces,
            num_dice,
            offset,
            stats: Stats::compute(faces, num_dice, offset.as_f64()),
        })
    }

    /// A single die without offset.
    ///
    /// # Errors
    /// Same as [`DiceRoll::new`].
    pub fn with_faces(faces: impl Into<Number>) -> Result<DiceRoll> {
        DiceRoll::new(faces, 1, 0)
    }

    /// Parses `NdS` or `NdS+C`. The `d` may be upper case and spaces are allowed
    /// around the `+`. Only integer offsets can be parsed, so a roll with a real
    /// offset does not survive a trip through its own `Display` output.
    ///
    /// # Errors
    /// [`Error::InvalidFormat`] when the start of `text` is not dice notation, plus
    /// any error of [`DiceRoll::new`].
    pub fn from_string(text: &str) -> Result<DiceRoll> {
        let captures = NOTATION_REGEX
            .captures(text)
            .ok_or_else(|| Error::InvalidFormat(text.to_owned()))?;

        let num_dice = parse_digits("num_dice", &captures[1])?;
        let faces = parse_digits("faces", &captures[2])?;
        let offset = match captures.get(3) {
            Some(offset) => parse_digits("offset", offset.as_str())?,
            None => 0,
        };

        let roll = DiceRoll::new(faces, num_dice, offset)?;
        debug!(input = text, %roll, "parsed dice roll");
        Ok(roll)
    }

    pub fn faces(&self) -> u32 {
        self.faces
    }

    pub fn num_dice(&self) -> u32 {
        self.num_dice
    }

    pub fn offset(&self) -> Number {
        self.offset
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn mean(&self) -> f64 {
        self.stats.mean
    }

    pub fn variance(&self) -> f64 {
        self.stats.variance
    }

    pub fn standard_deviation(&self) -> f64 {
        self.stats.standard_deviation
    }

    pub fn coefficient_of_variance(&self) -> f64 {
        self.stats.coefficient_of_variance
    }

    /// # Errors
    /// Same as the `faces` argument of [`DiceRoll::new`]. The roll is left untouched.
    pub fn set_faces(&mut self, faces: impl Into<Number>) -> Result<()> {
        self.faces = at_least_one("faces", whole_number("faces", faces.into())?)?;
        self.recalculate();
        Ok(())
    }

    /// # Errors
    /// Same as the `num_dice` argument of [`DiceRoll::new`]. The roll is left untouched.
    pub fn set_num_dice(&mut self, num_dice: impl Into<Number>) -> Result<()> {
        self.num_dice = at_least_one("num_dice", whole_number("num_dice", num_dice.into())?)?;
        self.recalculate();
        Ok(())
    }

    /// # Errors
    /// Same as the `offset` argument of [`DiceRoll::new`]. The roll is left untouched.
    pub fn set_offset(&mut self, offset: impl Into<Number>) -> Result<()> {
        self.offset = finite_number("offset", offset.into())?;
        self.recalculate();
        Ok(())
    }

    fn recalculate(&mut self) {
        self.stats = Stats::compute(self.faces, self.num_dice, self.offset.as_f64());
        trace!(roll = %self, stats = ?self.stats, "recalculated stats");
    }
}

fn whole_number(name: &str, value: Number) -> Result<i64> {
    match value {
        Number::Int(value) => Ok(value),
        Number::Real(value) => Err(Error::InvalidArgumentType(format!(
            "{} must be a whole number, got {}",
            name,
            format_real(value)
        ))),
    }
}

fn finite_number(name: &str, value: Number) -> Result<Number> {
    match value {
        Number::Real(real) if !real.is_finite() => Err(Error::InvalidArgumentType(format!(
            "{} must be a finite number, got {}",
            name, real
        ))),
        _ => Ok(value),
    }
}

fn at_least_one(name: &str, value: i64) -> Result<u32> {
    if value < 1 {
        return Err(Error::InvalidArgumentValue(format!(
            "{} must be greater than 0, got {}",
            name, value
        )));
    }
    u32::try_from(value).map_err(|_| {
        Error::InvalidArgumentValue(format!("{} must be at most {}, got {}", name, u32::MAX, value))
    })
}

fn parse_digits(name: &str, digits: &str) -> Result<i64> {
    digits
        .parse()
        .map_err(|_| Error::InvalidArgumentValue(format!("{} is too large: {}", name, digits)))
}

impl FromStr for DiceRoll {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DiceRoll::from_string(s)
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Number::Int(0) => write!(f, "{}d{}", self.num_dice, self.faces),
            offset => write!(f, "{}d{}+{}", self.num_dice, self.faces, offset),
        }
    }
}

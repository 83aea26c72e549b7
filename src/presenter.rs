use std::{iter, str::FromStr};

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    dice::{format_real, DiceRoll},
    error::{Error, Result},
};

/// One row of output: field label to display value, in column order.
pub type Record = IndexMap<String, String>;

/// Labels used for the fields of a [`Record`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldNames {
    #[default]
    Long,
    Short,
}

impl FieldNames {
    /// Labels for the roll, its mean and its coefficient of variance.
    pub fn labels(self) -> [&'static str; 3] {
        match self {
            FieldNames::Long => ["Roll", "Mean", "Coefficient of Variance"],
            FieldNames::Short => ["Roll", "µ", "Cv"],
        }
    }
}

/// Builds the record shown for `roll`. The coefficient of variance is given as a
/// percentage with two decimals.
pub fn record_for(roll: &DiceRoll, names: FieldNames) -> Record {
    let [roll_label, mean_label, cv_label] = names.labels();
    [
        (roll_label, roll.to_string()),
        (mean_label, format_real(roll.mean())),
        (
            cv_label,
            format!("{:.2}%", 100. * roll.coefficient_of_variance()),
        ),
    ]
    .into_iter()
    .map(|(label, value)| (label.to_owned(), value))
    .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    List,
    Table,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "list" => Ok(Format::List),
            "table" => Ok(Format::Table),
            other => Err(format!(
                "invalid format `{}`, expected `list` or `table`",
                other
            )),
        }
    }
}

impl Format {
    /// Renders `records` into lines, every column padded to its widest label or
    /// value. Column order is taken from the first record. An empty batch renders
    /// to no lines at all.
    ///
    /// # Errors
    /// [`Error::MismatchedRecord`] when a record does not have exactly the fields of
    /// the first record, in the same order.
    pub fn render(self, records: &[Record]) -> Result<Vec<String>> {
        let widths = column_widths(records)?;
        debug!(format = ?self, records = records.len(), columns = widths.len(), "rendering stats");

        Ok(match self {
            Format::List => list_lines(records, &widths),
            Format::Table => table_lines(records, &widths),
        })
    }
}

fn column_widths(records: &[Record]) -> Result<Vec<(&str, usize)>> {
    let Some(first) = records.first() else {
        return Ok(Vec::new());
    };

    if let Some(index) = records
        .iter()
        .position(|record| !record.keys().eq(first.keys()))
    {
        return Err(Error::MismatchedRecord { index });
    }

    Ok(first
        .keys()
        .map(|label| {
            let width = records
                .iter()
                .map(|record| record[label.as_str()].chars().count())
                .fold(label.chars().count(), usize::max);
            (label.as_str(), width)
        })
        .collect())
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

fn table_lines(records: &[Record], widths: &[(&str, usize)]) -> Vec<String> {
    if records.is_empty() {
        return Vec::new();
    }

    let header = widths
        .iter()
        .map(|(label, width)| pad(label, *width))
        .collect::<Vec<_>>()
        .join(" ");
    let separator = widths
        .iter()
        .map(|(_, width)| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join(" ");
    let rows = records.iter().map(|record| {
        widths
            .iter()
            .map(|(label, width)| pad(&record[*label], *width))
            .collect::<Vec<_>>()
            .join(" ")
    });

    iter::once(header)
        .chain(iter::once(separator))
        .chain(rows)
        .collect()
}

fn list_lines(records: &[Record], widths: &[(&str, usize)]) -> Vec<String> {
    records
        .iter()
        .map(|record| {
            widths
                .iter()
                .map(|(label, width)| format!("{}: {}", label, pad(&record[*label], *width)))
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect()
}

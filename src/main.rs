use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use argh::FromArgs;
use dice_stats::{record_for, DiceRoll, FieldNames, Format};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(FromArgs, Debug)]
/// Provide simple statistical values for given dice rolls
struct Args {
    /// use abbreviated names for stat fields (µ for mean, Cv for coefficient of variance)
    #[argh(switch, short = 'a')]
    abbreviate: bool,

    /// output format of the stats, `list` or `table` (defaults to list)
    #[argh(option, short = 'f', default = "Format::List")]
    format: Format,

    /// dice roll in NdS+C notation: N dice (min. 1) with S sides (min. 1) and an
    /// optional constant modifier C
    #[argh(positional)]
    rolls: Vec<DiceRoll>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "dice_stats=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Args = argh::from_env();
    if args.rolls.is_empty() {
        bail!("at least one ROLL is required, e.g. `2d6+1`");
    }

    let names = if args.abbreviate {
        FieldNames::Short
    } else {
        FieldNames::Long
    };
    let records = args
        .rolls
        .iter()
        .map(|roll| record_for(roll, names))
        .collect::<Vec<_>>();
    let lines = args
        .format
        .render(&records)
        .context("unable to render stats")?;

    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line).context("unable to write to stdout")?;
    }

    Ok(())
}

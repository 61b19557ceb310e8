//! Prints the classic Gilded Rose inventory for day 0 through day N.

mod config;

use std::io::{self, Write};

use anyhow::Context;

use gilded_rose_core::{DomainResult, LEGENDARY_QUALITY};
use gilded_rose_inventory::{
    AGED_BRIE_NAME, BACKSTAGE_PASS_NAME, CONJURED_NAME, Item, LEGENDARY_NAME, UpdateEngine,
};

use config::{FixtureConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    let arg = std::env::args().nth(1);
    let config = FixtureConfig::from_env()
        .and_then(|c| c.with_days_arg(arg.as_deref()))
        .context("failed to read fixture configuration")?;

    gilded_rose_observability::init(config.log_format);
    tracing::info!(days = config.days, output = ?config.output, "starting fixture run");

    let mut items = fixture_items().context("failed to build fixture inventory")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut engine = UpdateEngine::new(&mut items);
    for day in 0..=config.days {
        write_day(&mut out, config.output, day, engine.items())
            .with_context(|| format!("failed to write day {day}"))?;
        if day < config.days {
            engine.advance_one_day();
        }
    }
    out.flush().context("failed to flush output")?;

    tracing::info!(days_elapsed = engine.days_elapsed(), "fixture run complete");
    Ok(())
}

fn fixture_items() -> DomainResult<Vec<Item>> {
    [
        ("+5 Dexterity Vest", 10, 20),
        (AGED_BRIE_NAME, 2, 0),
        ("Elixir of the Mongoose", 5, 7),
        (LEGENDARY_NAME, 0, LEGENDARY_QUALITY),
        (LEGENDARY_NAME, -1, LEGENDARY_QUALITY),
        (BACKSTAGE_PASS_NAME, 15, 20),
        (BACKSTAGE_PASS_NAME, 10, 49),
        (BACKSTAGE_PASS_NAME, 5, 49),
        (CONJURED_NAME, 3, 6),
    ]
    .into_iter()
    .map(|(name, sell_in, quality)| Item::try_new(name, sell_in, quality))
    .collect()
}

fn write_day(
    out: &mut impl Write,
    format: OutputFormat,
    day: u32,
    items: &[Item],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "-------- day {day} --------")?;
            writeln!(out, "name, sellIn, quality")?;
            for item in items {
                writeln!(out, "{item}")?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, items)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

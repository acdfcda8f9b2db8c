use crate::calendar::first_sunday;
use crate::cli::{CommonArgs, SourceArgs};
use crate::output;
use anyhow::Context;

pub fn exec(common: CommonArgs, source: SourceArgs, weekdays: bool, json: bool) -> anyhow::Result<()> {
    let start = first_sunday(common.year).context("Failed to compute start date")?;

    if weekdays {
        output::output_weekdays(start);
        return Ok(());
    }

    let grid = source.build_grid().context("Failed to build grid")?;

    if json {
        output::output_grid_json(&grid, common.year, start)?;
    } else {
        output::output_grid(&grid);
    }

    Ok(())
}

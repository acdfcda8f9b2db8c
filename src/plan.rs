use crate::calendar::first_sunday;
use crate::cli::{CommonArgs, SourceArgs};
use crate::commit::CommitPlan;
use crate::output;
use anyhow::Context;

pub fn exec(common: CommonArgs, source: SourceArgs, json: bool) -> anyhow::Result<()> {
    let start = first_sunday(common.year).context("Failed to compute start date")?;
    let grid = source.build_grid().context("Failed to build grid")?;
    let plan = CommitPlan::from_grid(&grid, start);

    if json {
        output::output_plan_json(&plan, common.year, start)?;
    } else {
        output::output_plan(&plan);
    }

    Ok(())
}

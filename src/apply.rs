use crate::calendar::first_sunday;
use crate::cli::{CommonArgs, SourceArgs};
use crate::commit::{CommitPlan, GitDriver};
use crate::output;
use anyhow::Context;
use console::style;
use std::io::{self, BufRead, Write};

pub fn exec(common: CommonArgs, source: SourceArgs, branch: bool, yes: bool) -> anyhow::Result<()> {
    let start = first_sunday(common.year).context("Failed to compute start date")?;
    let grid = source.build_grid().context("Failed to build grid")?;
    let plan = CommitPlan::from_grid(&grid, start);

    println!("{}", style("Preview of the contribution graph:").bold());
    output::output_grid(&grid);
    println!();

    let prompt = format!(
        "Create {} commits for {}?",
        plan.total_commits(),
        common.year
    );
    if !yes && !confirm(&prompt)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    let driver = GitDriver::new(common.repo.as_deref()).context("Failed to locate repository")?;
    if branch {
        driver
            .switch_to_year_branch(common.year)
            .context("Failed to switch to year branch")?;
    }

    let created = driver
        .apply(&plan, true)
        .context("Failed to create commits")?;
    println!("{}", style(format!("Created {created} commits.")).green());

    Ok(())
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} (yes/no): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

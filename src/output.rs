use crate::commit::CommitPlan;
use crate::error::Result;
use crate::grid::{Grid, DAYS, MAX_LEVEL, WEEKS};
use crate::model::{GridDocument, PlanDocument};
use chrono::{Duration, NaiveDate};
use console::style;

/// Print the grid as one terminal line per weekday row, `#` for cells at
/// full intensity and `.` for everything else.
pub fn output_grid(grid: &Grid) {
    for row in grid.rows() {
        let line: Vec<&str> = row
            .iter()
            .map(|&cell| if cell == MAX_LEVEL { "#" } else { "." })
            .collect();
        println!("{}", line.join(" "));
    }
}

/// Print the weekday initial every cell falls on, anchored at `start`.
/// A layout aid only; grid values play no part.
pub fn output_weekdays(start: NaiveDate) {
    for day in 0..DAYS {
        let line: Vec<String> = (0..WEEKS)
            .map(|week| {
                let date = start + Duration::days((day + DAYS * week) as i64);
                date.format("%a")
                    .to_string()
                    .chars()
                    .next()
                    .unwrap_or('?')
                    .to_lowercase()
                    .to_string()
            })
            .collect();
        println!("{}", line.join(" "));
    }
}

pub fn output_plan(plan: &CommitPlan) {
    println!("{}", style("Commit plan").bold());
    println!("{}", "─".repeat(40));

    for entry in &plan.entries {
        let marker = match entry.count {
            0 => " ",
            1 => "▁",
            2 => "▃",
            3 => "▅",
            4 => "▇",
            _ => "█",
        };
        println!(
            "{} {} {:>2} commits",
            entry.date.format("%Y-%m-%d"),
            style(marker).green(),
            entry.count
        );
    }

    println!(
        "\n{} commits total",
        style(plan.total_commits()).bold()
    );
}

pub fn output_grid_json(grid: &Grid, year: i32, start_date: NaiveDate) -> Result<()> {
    let doc = GridDocument::new(grid, year, start_date);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

pub fn output_plan_json(plan: &CommitPlan, year: i32, start_date: NaiveDate) -> Result<()> {
    let doc = PlanDocument::new(plan, year, start_date);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

use crate::calendar::cell_date;
use crate::error::{GitinkError, Result};
use crate::grid::{Grid, DAYS, WEEKS};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::Command;

pub const COMMIT_MESSAGE: &str = "Commit for graph";
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One grid cell resolved to a calendar date and a commit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommit {
    pub date: NaiveDateTime,
    pub count: u8,
}

/// The full commit schedule for a grid, weeks outer and days inner so the
/// pattern fills in column by column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPlan {
    pub entries: Vec<PlannedCommit>,
}

impl CommitPlan {
    pub fn from_grid(grid: &Grid, start: NaiveDate) -> Self {
        let mut entries = Vec::with_capacity(WEEKS * DAYS);
        for week in 0..WEEKS {
            for day in 0..DAYS {
                entries.push(PlannedCommit {
                    date: cell_date(start, week, day).and_time(NaiveTime::MIN),
                    count: grid.get(day, week),
                });
            }
        }
        Self { entries }
    }

    pub fn total_commits(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.count)).sum()
    }
}

/// Runs the external `git` binary inside the target repository.
///
/// Author and committer dates are passed per child process rather than
/// through the parent's environment, so no global state leaks between
/// invocations.
pub struct GitDriver {
    workdir: PathBuf,
}

impl GitDriver {
    pub fn new(repo: Option<&Path>) -> Result<Self> {
        let workdir = match repo {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir()?,
        };
        Ok(Self { workdir })
    }

    /// Create a branch named after `year` and switch to it. On a fresh
    /// repository `checkout -b` leaves HEAD on the new, still unborn branch,
    /// so the plain checkout is only the fallback for when creation failed
    /// because the branch already exists.
    pub fn switch_to_year_branch(&self, year: i32) -> Result<()> {
        let branch = year.to_string();
        if self.run(&["checkout", "-b", &branch]).is_ok() {
            return Ok(());
        }
        self.run(&["checkout", &branch])
    }

    /// Execute the plan, one `git commit --allow-empty` per commit unit,
    /// strictly in sequence. The first failing invocation aborts the batch
    /// with the number of commits that already landed.
    pub fn apply(&self, plan: &CommitPlan, show_progress: bool) -> Result<u64> {
        let pb = if show_progress {
            ProgressBar::new(plan.total_commits())
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.green} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.set_message("Creating commits...");

        let mut created = 0u64;
        for entry in &plan.entries {
            let stamp = entry.date.format(DATE_FORMAT).to_string();
            for _ in 0..entry.count {
                self.commit_empty(&stamp).map_err(|err| match err {
                    GitinkError::Git(msg) => {
                        GitinkError::Git(format!("after {created} commits: {msg}"))
                    }
                    other => other,
                })?;
                created += 1;
                pb.inc(1);
            }
        }

        pb.finish_with_message("Commits created");
        Ok(created)
    }

    fn commit_empty(&self, stamp: &str) -> Result<()> {
        let output = Command::new("git")
            .args(["commit", "--allow-empty", "-m", COMMIT_MESSAGE, "--date", stamp])
            .env("GIT_AUTHOR_DATE", stamp)
            .env("GIT_COMMITTER_DATE", stamp)
            .current_dir(&self.workdir)
            .output()?;
        check_status("git commit", &output)
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?;
        check_status(&format!("git {}", args.first().copied().unwrap_or("")), &output)
    }
}

fn check_status(what: &str, output: &std::process::Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    Err(GitinkError::Git(format!(
        "{what} exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr).trim()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::first_sunday;
    use crate::glyph::GlyphSet;
    use chrono::Duration;

    #[test]
    fn plan_covers_every_cell_weeks_outer() {
        let grid = Grid::from_text("HI", &GlyphSet::builtin());
        let start = first_sunday(2024).unwrap();
        let plan = CommitPlan::from_grid(&grid, start);

        assert_eq!(plan.entries.len(), WEEKS * DAYS);
        // the seventh entry is week 0, day 6
        assert_eq!(
            plan.entries[6].date.date(),
            start + Duration::weeks(1)
        );
        assert_eq!(plan.entries[6].count, grid.get(6, 0));
        // entry 7 starts week 1
        assert_eq!(
            plan.entries[7].date.date(),
            start + Duration::weeks(1) + Duration::days(1)
        );
    }

    #[test]
    fn saturday_cell_count_drives_invocation_count() {
        let mut grid = Grid::from_text("", &GlyphSet::builtin());
        grid.set(6, 0, 2);
        let start = first_sunday(2024).unwrap();
        let plan = CommitPlan::from_grid(&grid, start);

        let entry = &plan.entries[6];
        assert_eq!(entry.count, 2);
        assert_eq!(entry.date.date(), start + Duration::weeks(1));
    }

    #[test]
    fn total_commits_sums_cell_counts() {
        let grid = Grid::from_text("", &GlyphSet::builtin());
        let plan = CommitPlan::from_grid(&grid, first_sunday(2024).unwrap());
        // a blank grid floors every cell to one commit
        assert_eq!(plan.total_commits(), (WEEKS * DAYS) as u64);
    }

    #[test]
    fn dates_format_without_timezone() {
        let start = first_sunday(2024).unwrap();
        let plan = CommitPlan::from_grid(&Grid::new(), start);
        let stamp = plan.entries[0].date.format(DATE_FORMAT).to_string();
        assert_eq!(stamp, "2024-01-08T00:00:00");
    }
}

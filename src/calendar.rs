use crate::error::{GitinkError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// First Sunday on or after January 2 of `year`; the date cell (0, 0) of
/// the grid is anchored to.
pub fn first_sunday(year: i32) -> Result<NaiveDate> {
    let mut date = NaiveDate::from_ymd_opt(year, 1, 2)
        .ok_or_else(|| GitinkError::InvalidDate(format!("year {year} is out of range")))?;
    while date.weekday() != Weekday::Sun {
        date = date
            .succ_opt()
            .ok_or_else(|| GitinkError::InvalidDate(format!("year {year} is out of range")))?;
    }
    Ok(date)
}

/// Calendar date a grid cell lands on.
///
/// The mapping is piecewise to line up 0-indexed rows with the hosting
/// platform's weekday layout: row 6 (Saturday) lands on the Sunday opening
/// the next week, row 0 (Sunday) lands on the following Monday, and every
/// other row is offset by one extra day within its week.
pub fn cell_date(start: NaiveDate, week: usize, day: usize) -> NaiveDate {
    match day {
        6 => start + Duration::weeks(week as i64 + 1),
        0 => start + Duration::weeks(week as i64) + Duration::days(1),
        _ => start + Duration::weeks(week as i64) + Duration::days(day as i64 + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_always_a_sunday_within_a_week_of_jan_2() {
        for year in 2000..=2040 {
            let start = first_sunday(year).unwrap();
            assert_eq!(start.weekday(), Weekday::Sun, "year {year}");
            let jan2 = NaiveDate::from_ymd_opt(year, 1, 2).unwrap();
            let offset = (start - jan2).num_days();
            assert!((0..=6).contains(&offset), "year {year}: offset {offset}");
        }
    }

    #[test]
    fn known_years() {
        // 2022-01-02 is itself a Sunday
        assert_eq!(
            first_sunday(2022).unwrap(),
            NaiveDate::from_ymd_opt(2022, 1, 2).unwrap()
        );
        assert_eq!(
            first_sunday(2024).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
        );
    }

    #[test]
    fn saturday_row_lands_one_week_after_start() {
        let start = first_sunday(2024).unwrap();
        assert_eq!(cell_date(start, 0, 6), start + Duration::weeks(1));
        assert_eq!(cell_date(start, 3, 6), start + Duration::weeks(4));
    }

    #[test]
    fn sunday_row_lands_on_the_following_monday() {
        let start = first_sunday(2024).unwrap();
        assert_eq!(cell_date(start, 0, 0), start + Duration::days(1));
        assert_eq!(cell_date(start, 2, 0), start + Duration::days(15));
    }

    #[test]
    fn midweek_rows_offset_by_day_plus_one() {
        let start = first_sunday(2024).unwrap();
        for day in 1..=5 {
            assert_eq!(
                cell_date(start, 2, day),
                start + Duration::days(14 + day as i64 + 1)
            );
        }
    }
}

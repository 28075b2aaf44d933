use chrono::{Datelike, Months, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub selectable: bool,
    pub selected: bool,
    pub today: bool,
}

/// Six Monday-first weeks covering one month, padded with days of the
/// neighbouring months so the grid is always 6x7.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[DayCell; 7]>,
}

impl MonthGrid {
    /// `selectable` decides which days can be clicked (age window and
    /// disabled dates live with the caller).
    pub fn new(
        anchor: NaiveDate,
        today: NaiveDate,
        selected: Option<NaiveDate>,
        selectable: impl Fn(NaiveDate) -> bool,
    ) -> Self {
        let first = anchor.with_day(1).unwrap_or(anchor);
        let offset = first.weekday().num_days_from_monday() as u64;
        let start = first - chrono::Days::new(offset);

        let weeks = (0..6usize)
            .map(|week| {
                std::array::from_fn::<DayCell, 7, _>(|weekday| {
                    let date = start + chrono::Days::new((week * 7 + weekday) as u64);
                    let in_month = date.month() == first.month();
                    DayCell {
                        date,
                        in_month,
                        selectable: in_month && selectable(date),
                        selected: selected == Some(date),
                        today: date == today,
                    }
                })
            })
            .collect();

        Self {
            year: first.year(),
            month: first.month(),
            weeks,
        }
    }

    pub fn title(&self) -> String {
        let name = MONTH_NAMES[(self.month as usize).saturating_sub(1) % 12];
        format!("{} {}", name, self.year)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }
}

/// First day of the month before/after `anchor`.
pub fn shift_month(anchor: NaiveDate, delta: i32) -> NaiveDate {
    let first = anchor.with_day(1).unwrap_or(anchor);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_starts_on_monday_and_has_six_weeks() {
        // 2024-05-01 is a Wednesday.
        let grid = MonthGrid::new(date(2024, 5, 17), date(2024, 5, 17), None, |_| true);
        assert_eq!(grid.title(), "May 2024");
        assert_eq!(grid.weeks.len(), 6);
        assert_eq!(grid.weeks[0][0].date, date(2024, 4, 29));
        assert!(!grid.weeks[0][0].in_month);
        assert_eq!(grid.weeks[0][2].date, date(2024, 5, 1));
        assert_eq!(grid.days().filter(|cell| cell.in_month).count(), 31);
    }

    #[test]
    fn cells_carry_selection_and_today_flags() {
        let selected = date(2024, 2, 28);
        let grid = MonthGrid::new(selected, date(2024, 2, 10), Some(selected), |d| d.day() % 2 == 0);
        let cell = grid.days().find(|cell| cell.date == selected).unwrap();
        assert!(cell.selected && cell.selectable);
        let leap_day = grid.days().find(|cell| cell.date == date(2024, 2, 29)).unwrap();
        assert!(leap_day.in_month && !leap_day.selected && !leap_day.selectable);
        let odd = grid.days().find(|cell| cell.date == date(2024, 2, 11)).unwrap();
        assert!(!odd.selectable);
        assert!(grid.days().any(|cell| cell.today && cell.date == date(2024, 2, 10)));
    }

    #[test]
    fn days_outside_the_month_are_not_selectable() {
        let grid = MonthGrid::new(date(2024, 5, 1), date(2024, 5, 1), None, |_| true);
        assert!(grid.days().filter(|cell| !cell.in_month).all(|cell| !cell.selectable));
    }

    #[test]
    fn month_navigation_crosses_years() {
        assert_eq!(shift_month(date(2024, 1, 31), -1), date(2023, 12, 1));
        assert_eq!(shift_month(date(2024, 12, 15), 1), date(2025, 1, 1));
        assert_eq!(shift_month(date(2024, 3, 3), -14), date(2023, 1, 1));
    }
}

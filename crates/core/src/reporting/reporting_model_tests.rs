#[cfg(test)]
mod tests {
    use crate::reporting::Window;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_all_time_has_no_lower_bound() {
        assert_eq!(Window::AllTime.lower_bound(day(2026, 8, 7)), None);
    }

    #[test]
    fn test_current_month_starts_on_the_first() {
        assert_eq!(
            Window::CurrentMonth.lower_bound(day(2026, 8, 7)),
            Some(day(2026, 8, 1))
        );
        assert_eq!(
            Window::CurrentMonth.lower_bound(day(2026, 8, 1)),
            Some(day(2026, 8, 1))
        );
    }

    #[test]
    fn test_last_n_days_is_a_window_ending_today() {
        assert_eq!(
            Window::LastNDays(1).lower_bound(day(2026, 8, 7)),
            Some(day(2026, 8, 7))
        );
        assert_eq!(
            Window::LastNDays(30).lower_bound(day(2026, 8, 7)),
            Some(day(2026, 7, 9))
        );
    }

    #[test]
    fn test_last_n_days_crosses_month_and_year_boundaries() {
        assert_eq!(
            Window::LastNDays(7).lower_bound(day(2026, 1, 3)),
            Some(day(2025, 12, 28))
        );
    }
}

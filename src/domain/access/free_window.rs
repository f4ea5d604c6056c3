use chrono::{Days, NaiveDate};

/// Rolling free-window membership: the window is
/// `[today - (window_days - 1), today]` inclusive, computed by
/// calendar-date subtraction so month ends, year ends and Feb 29 all
/// carry correctly. Fixed 86400-second offsets are exactly what this
/// function exists to avoid.
///
/// Future dates are inside the window by policy: not-yet-released
/// items are handled by the availability predicate, never by the lock
/// calculation.
pub fn is_within_free_window(item_date: NaiveDate, today: NaiveDate, window_days: u32) -> bool {
    if window_days == 0 {
        return false;
    }
    let start = match today.checked_sub_days(Days::new(u64::from(window_days - 1))) {
        Some(start) => start,
        // Window start underflowed the calendar; everything is inside.
        None => return true,
    };
    item_date >= start
}

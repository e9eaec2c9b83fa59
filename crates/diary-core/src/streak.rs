use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Consecutive calendar days with at least one entry, ending at `today`
/// and walking backward. The first missing day stops the walk, so days
/// after `today` and runs not touching `today` contribute nothing.
///
/// Both the service layer and the indexer derive streaks through this one
/// function; given the same date set and the same `today` they cannot
/// disagree.
pub fn consecutive_days(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;

    while dates.contains(&cursor) {
        streak += 1;

        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }

    streak
}

use chrono::Weekday;

use crate::data::Route;

/// Minute of day, 0..=1439; values past 1439 mean "tomorrow".
pub type Minute = u32;

const MINUTES_PER_DAY: Minute = 1440;

/// Departure triple around "now" for one direction. The strings borrow
/// from the direction's lines; absent entries are "".
#[derive(Debug, PartialEq, Eq)]
pub struct Window<'a> {
    pub previous: &'a str,
    pub next: &'a str,
    pub after: &'a str,
    pub next_absolute: Option<Minute>,
}

impl<'a> Window<'a> {
    pub const EMPTY: Window<'a> = Window {
        previous: "",
        next: "",
        after: "",
        next_absolute: None,
    };
}

/// Parses "H:MM" / "HH:MM" into a minute of day. Anything else, including
/// out-of-range hours or minutes, is None — malformed feed entries are
/// absent, never fatal.
pub fn parse_time(s: &str) -> Option<Minute> {
    let (hour, minute) = s.trim().split_once(':')?;

    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().all(|b| b.is_ascii_digit()) || !minute.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hour: Minute = hour.parse().ok()?;
    let minute: Minute = minute.parse().ok()?;

    (hour <= 23 && minute <= 59).then_some(hour * 60 + minute)
}

/// Picks the (previous, next, after) departures around `now_minute`.
///
/// Precondition: `lines` is ascending by time of day. The pick is a
/// first-match scan, not a sorted search, so unsorted input yields an
/// unspecified (but still non-panicking) window.
pub fn pick_window(lines: &[String], now_minute: Minute) -> Window<'_> {
    let parsed: Vec<(&str, Minute)> = lines
        .iter()
        .filter_map(|line| parse_time(line).map(|minute| (line.as_str(), minute)))
        .collect();

    if parsed.is_empty() {
        return Window::EMPTY;
    }

    // No departure left today means the next one is tomorrow's first.
    let index = parsed
        .iter()
        .position(|&(_, minute)| minute >= now_minute)
        .unwrap_or(0);

    let count = parsed.len();
    let (previous, _) = parsed[(index + count - 1) % count];
    let (next, next_minute) = parsed[index];
    let (after, _) = parsed[(index + 1) % count];

    let next_absolute = if next_minute < now_minute {
        next_minute + MINUTES_PER_DAY
    } else {
        next_minute
    };

    Window {
        previous,
        next,
        after,
        next_absolute: Some(next_absolute),
    }
}

/// Minutes until the route's nearest departure across all directions, or
/// None when the route does not run today or has no parseable departures.
pub fn route_next_countdown(route: &Route, now_minute: Minute, weekday: Weekday) -> Option<Minute> {
    if !route.recurrence.is_active(weekday) {
        return None;
    }

    route
        .directions
        .iter()
        .filter_map(|direction| pick_window(&direction.lines, now_minute).next_absolute)
        .min()
        .map(|best| best.saturating_sub(now_minute))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Direction, Recurrence};

    fn lines(times: &[&str]) -> Vec<String> {
        times.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_time_accepts_one_and_two_digit_hours() {
        assert_eq!(parse_time("9:05"), Some(545));
        assert_eq!(parse_time("09:05"), Some(545));
        assert_eq!(parse_time("0:00"), Some(0));
        assert_eq!(parse_time("23:59"), Some(1439));
        assert_eq!(parse_time(" 8:30 "), Some(510));
    }

    #[test]
    fn parse_time_rejects_out_of_range_and_garbage() {
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("12:60"), None);
        assert_eq!(parse_time("bogus"), None);
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("12:5"), None);
        assert_eq!(parse_time("12:345"), None);
        assert_eq!(parse_time("123:45"), None);
        assert_eq!(parse_time(":30"), None);
        assert_eq!(parse_time("1a:30"), None);
    }

    #[test]
    fn window_mid_list() {
        let lines = lines(&["08:00", "08:30", "09:00"]);
        let window = pick_window(&lines, 500);

        assert_eq!(window.previous, "08:00");
        assert_eq!(window.next, "08:30");
        assert_eq!(window.after, "09:00");
        assert_eq!(window.next_absolute, Some(510));
    }

    #[test]
    fn window_before_first_entry() {
        let lines = lines(&["08:00", "08:30", "09:00"]);
        let window = pick_window(&lines, 60);

        assert_eq!(window.previous, "09:00");
        assert_eq!(window.next, "08:00");
        assert_eq!(window.next_absolute, Some(480));
    }

    #[test]
    fn window_after_last_wraps_to_tomorrow() {
        let lines = lines(&["08:00", "08:30", "09:00"]);
        let window = pick_window(&lines, 600);

        assert_eq!(window.previous, "09:00");
        assert_eq!(window.next, "08:00");
        assert_eq!(window.after, "08:30");
        assert_eq!(window.next_absolute, Some(480 + 1440));
    }

    #[test]
    fn window_single_entry_is_circular() {
        let lines = lines(&["12:00"]);
        for now in [0, 720, 1000] {
            let window = pick_window(&lines, now);
            assert_eq!(window.previous, "12:00");
            assert_eq!(window.next, "12:00");
            assert_eq!(window.after, "12:00");
        }
        assert_eq!(pick_window(&lines, 1000).next_absolute, Some(720 + 1440));
    }

    #[test]
    fn window_exact_match_is_next() {
        let lines = lines(&["08:00", "08:30"]);
        let window = pick_window(&lines, 510);
        assert_eq!(window.next, "08:30");
        assert_eq!(window.next_absolute, Some(510));
    }

    #[test]
    fn window_empty_and_unparseable_lists() {
        assert_eq!(pick_window(&[], 500), Window::EMPTY);

        let lines = lines(&["nope", "25:00", ""]);
        assert_eq!(pick_window(&lines, 500), Window::EMPTY);
    }

    #[test]
    fn window_skips_malformed_entries() {
        let lines = lines(&["08:00", "oops", "09:00"]);
        let window = pick_window(&lines, 500);

        assert_eq!(window.previous, "08:00");
        assert_eq!(window.next, "09:00");
        assert_eq!(window.next_absolute, Some(540));
    }

    fn route(recurrence: Recurrence, directions: Vec<Direction>) -> Route {
        Route {
            id: "1".to_owned(),
            days: String::new(),
            recurrence,
            directions,
        }
    }

    fn direction(times: &[&str]) -> Direction {
        Direction {
            label: String::new(),
            lines: lines(times),
        }
    }

    #[test]
    fn countdown_none_when_inactive_today() {
        let route = route(Recurrence::Weekend, vec![direction(&["08:00"])]);
        assert_eq!(route_next_countdown(&route, 420, Weekday::Wed), None);
    }

    #[test]
    fn countdown_takes_minimum_across_directions() {
        let route = route(
            Recurrence::Daily,
            vec![direction(&["09:00"]), direction(&["08:40"])],
        );
        assert_eq!(route_next_countdown(&route, 500, Weekday::Wed), Some(20));
    }

    #[test]
    fn countdown_ignores_directions_without_departures() {
        let route = route(
            Recurrence::Daily,
            vec![direction(&[]), direction(&["08:30"])],
        );
        assert_eq!(route_next_countdown(&route, 500, Weekday::Mon), Some(10));
    }

    #[test]
    fn countdown_none_without_any_departures() {
        let route = route(Recurrence::Daily, vec![direction(&[]), direction(&["x"])]);
        assert_eq!(route_next_countdown(&route, 500, Weekday::Mon), None);
    }

    #[test]
    fn countdown_wraps_past_midnight() {
        let route = route(Recurrence::Daily, vec![direction(&["06:00", "07:00"])]);
        // 23:00, next departure 06:00 tomorrow.
        assert_eq!(
            route_next_countdown(&route, 1380, Weekday::Fri),
            Some(6 * 60 + 1440 - 1380)
        );
    }

    #[test]
    fn countdown_clamps_at_zero() {
        let route = route(Recurrence::Daily, vec![direction(&["08:20"])]);
        assert_eq!(route_next_countdown(&route, 500, Weekday::Mon), Some(0));
    }
}

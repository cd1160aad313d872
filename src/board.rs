use std::cmp;
use std::fmt::Write;

use itertools::Itertools;

use crate::clock::Now;
use crate::data::{Direction, Route, Schedule};
use crate::window::{self, Window};

// Cards show at most two directions, like the source feed carries.
const CARD_DIRECTIONS: usize = 2;

/// Normalizes a free-text direction label for display. Checkpoint names
/// pass through, bare building numbers get the "тит." prefix.
pub fn direction_label(label: &str) -> String {
    let s = label.trim();
    let low = s.to_lowercase();

    if s.is_empty() {
        return "—".to_owned();
    }
    if low.contains("кпп") {
        return s.to_owned();
    }
    if s == "112" {
        return "КПП 1 (тит.112)".to_owned();
    }
    if low.starts_with("тит.") || low.starts_with("т.") {
        return s.to_owned();
    }
    if is_building_number(s) {
        return format!("тит.{s}");
    }
    s.to_owned()
}

// Building numbers look like 085, 097 or 2044/1.
fn is_building_number(s: &str) -> bool {
    let (number, suffix) = match s.split_once('/') {
        Some((number, suffix)) => (number, Some(suffix)),
        None => (s, None),
    };

    let number_ok = (2..=4).contains(&number.len()) && number.bytes().all(|b| b.is_ascii_digit());
    let suffix_ok = match suffix {
        Some(suffix) => suffix.len() == 1 && suffix.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    };

    number_ok && suffix_ok
}

/// Zero-padded "HH : MM" cell, "—" for anything unparseable.
pub fn time_display(time: &str) -> String {
    let s = time.trim();
    match s.split_once(':') {
        Some((hour, minute)) if window::parse_time(s).is_some() => {
            format!("{hour:0>2} : {minute}")
        }
        _ => "—".to_owned(),
    }
}

fn countdown_line(route: &Route, now: &Now) -> String {
    match window::route_next_countdown(route, now.minute_of_day(), now.weekday) {
        Some(0) => "отправляется".to_owned(),
        Some(minutes) => format!("через {minutes} мин"),
        None => "сегодня рейсов нет".to_owned(),
    }
}

// Cards show the raw feed strings; only the timetable view reformats.
fn window_line(window: &Window<'_>) -> String {
    if window.next_absolute.is_none() {
        return "—".to_owned();
    }

    [window.previous, window.next, window.after].iter().join("  ")
}

pub fn render_card(route: &Route, now: &Now) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "№{}  [{}]  {}",
        route.id,
        route.recurrence.short_label(),
        countdown_line(route, now)
    );

    if route.directions.is_empty() {
        let _ = writeln!(out, "  Нет данных");
        return out;
    }

    for direction in route.directions.iter().take(CARD_DIRECTIONS) {
        let window = window::pick_window(&direction.lines, now.minute_of_day());
        let _ = writeln!(
            out,
            "  {:<24} {}",
            direction_label(&direction.label),
            window_line(&window)
        );
    }

    out
}

pub fn render_board(schedule: &Schedule, now: &Now) -> String {
    schedule
        .routes
        .iter()
        .map(|route| render_card(route, now))
        .join("\n")
}

/// Full timetable for one route, one or two aligned columns. This is the
/// terminal counterpart of the original modal view.
pub fn render_timetable(route: &Route) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Расписание автобуса №{}", route.id);
    let _ = writeln!(out, "{}", route.recurrence.long_label());
    let _ = writeln!(out);

    let first = route.directions.first();
    let second = route.directions.get(1);

    let column = |direction: Option<&Direction>| match direction {
        Some(direction) => direction_label(&direction.label),
        None => "—".to_owned(),
    };

    let width = cmp::max(column(first).chars().count(), 7);

    match second {
        Some(second_dir) => {
            let _ = writeln!(
                out,
                "{:<width$} | {}",
                column(first),
                column(Some(second_dir))
            );

            let empty = Vec::new();
            let first_lines = first.map_or(&empty, |d| &d.lines);
            let rows = cmp::max(1, cmp::max(first_lines.len(), second_dir.lines.len()));
            for i in 0..rows {
                let a = first_lines.get(i).map_or("—".to_owned(), |t| time_display(t));
                let b = second_dir.lines.get(i).map_or("—".to_owned(), |t| time_display(t));
                let _ = writeln!(out, "{a:<width$} | {b}");
            }
        }
        None => {
            let _ = writeln!(out, "{}", column(first));

            let empty = Vec::new();
            let lines = first.map_or(&empty, |d| &d.lines);
            if lines.is_empty() {
                let _ = writeln!(out, "—");
            }
            for time in lines {
                let _ = writeln!(out, "{}", time_display(time));
            }
        }
    }

    out
}

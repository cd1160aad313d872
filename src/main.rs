use std::fs;
use std::path::PathBuf;
use std::process;

use chrono::Weekday;
use clap::Parser;
use log::{debug, info};

use crate::clock::TimeSource;
use crate::error::FeedError;

mod board;
mod clock;
mod data;
mod error;
mod feed;
mod window;

#[derive(Parser, Debug)]
#[command(name = "busboard", about = "Departure board for the shuttle bus feed")]
struct Args {
    /// Path to the JSON schedule feed
    #[arg(long, default_value = "data/internal.json")]
    feed: PathBuf,

    /// Show the full timetable of one route instead of the board
    #[arg(long)]
    route: Option<String>,

    /// Override the current time, HH:MM
    #[arg(long)]
    at: Option<String>,

    /// Override the current weekday (mon..sun)
    #[arg(long)]
    day: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args) {
        // One inline message per failed render pass, no retries.
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), FeedError> {
    info!("loading feed from {}", args.feed.display());
    let text = fs::read_to_string(&args.feed)?;
    let feed: feed::Feed = serde_json::from_str(&text)?;
    let schedule = data::Schedule::from(feed);
    debug!("{} routes after filtering", schedule.routes.len());

    let now = time_source(&args)?.now();

    match &args.route {
        Some(id) => {
            let route = schedule
                .route(id)
                .ok_or_else(|| FeedError::UnknownRoute(id.clone()))?;
            print!("{}", board::render_timetable(route));
        }
        None => print!("{}", board::render_board(&schedule, &now)),
    }

    Ok(())
}

fn time_source(args: &Args) -> Result<Box<dyn TimeSource>, FeedError> {
    if args.at.is_none() && args.day.is_none() {
        return Ok(Box::new(clock::MoscowClock));
    }

    let mut now = clock::MoscowClock.now();

    if let Some(at) = &args.at {
        let minute =
            window::parse_time(at).ok_or_else(|| FeedError::BadTimeOverride(at.clone()))?;
        now.hour = minute / 60;
        now.minute = minute % 60;
    }
    if let Some(day) = &args.day {
        now.weekday =
            parse_weekday(day).ok_or_else(|| FeedError::BadDayOverride(day.clone()))?;
    }

    Ok(Box::new(clock::FixedNow(now)))
}

fn parse_weekday(s: &str) -> Option<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Some(Weekday::Mon),
        "tue" | "tuesday" => Some(Weekday::Tue),
        "wed" | "wednesday" => Some(Weekday::Wed),
        "thu" | "thursday" => Some(Weekday::Thu),
        "fri" | "friday" => Some(Weekday::Fri),
        "sat" | "saturday" => Some(Weekday::Sat),
        "sun" | "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_overrides() {
        assert_eq!(parse_weekday("wed"), Some(Weekday::Wed));
        assert_eq!(parse_weekday("Sunday"), Some(Weekday::Sun));
        assert_eq!(parse_weekday("someday"), None);
    }

    #[test]
    fn time_override_goes_through_parse_time() {
        let args = Args {
            feed: PathBuf::new(),
            route: None,
            at: Some("9:05".to_owned()),
            day: Some("sat".to_owned()),
        };

        let now = time_source(&args).unwrap().now();
        assert_eq!(now.minute_of_day(), 545);
        assert_eq!(now.weekday, Weekday::Sat);
    }

    #[test]
    fn bad_time_override_is_rejected() {
        let args = Args {
            feed: PathBuf::new(),
            route: None,
            at: Some("25:00".to_owned()),
            day: None,
        };

        assert!(matches!(
            time_source(&args),
            Err(FeedError::BadTimeOverride(_))
        ));
    }
}

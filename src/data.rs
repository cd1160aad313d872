use chrono::Weekday;

use crate::feed;

#[derive(Debug)]
pub struct Schedule {
    pub routes: Vec<Route>,
}

#[derive(Debug)]
pub struct Route {
    pub id: String,
    pub days: String,
    pub recurrence: Recurrence,
    pub directions: Vec<Direction>,
}

#[derive(Debug)]
pub struct Direction {
    pub label: String,
    pub lines: Vec<String>,
}

/// Operating-day pattern of a route, resolved once at load time from the
/// free-text `days` descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    Weekday,
    Weekend,
    Saturday,
    Sunday,
    Daily,
}

impl Recurrence {
    /// Classifies an unconstrained descriptor such as "будни", "weekend"
    /// or "сб". First matching rule wins, so an ambiguous descriptor
    /// resolves to the earliest rule; "weekend" contains "week", which
    /// means English weekend descriptors land on the weekday rule. That
    /// quirk is kept as-is to match the behavior the feed was authored
    /// against.
    pub fn classify(days: &str) -> Self {
        let v = days.to_lowercase();

        if v.contains("week") || v.contains("будн") {
            Recurrence::Weekday
        } else if v.contains("weekend") || v.contains("выход") {
            Recurrence::Weekend
        } else if v.contains("sat") || v.contains("суб") {
            Recurrence::Saturday
        } else if v.contains("sun") || v.contains("воск") {
            Recurrence::Sunday
        } else {
            Recurrence::Daily
        }
    }

    pub fn is_active(&self, weekday: Weekday) -> bool {
        let workday = !matches!(weekday, Weekday::Sat | Weekday::Sun);

        match self {
            Recurrence::Weekday => workday,
            Recurrence::Weekend => !workday,
            Recurrence::Saturday => weekday == Weekday::Sat,
            Recurrence::Sunday => weekday == Weekday::Sun,
            Recurrence::Daily => true,
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Recurrence::Weekday => "Пн-Пт",
            Recurrence::Weekend => "Сб-Вс",
            Recurrence::Saturday => "Сб",
            Recurrence::Sunday => "Вс",
            Recurrence::Daily => "Ежедн.",
        }
    }

    pub fn long_label(&self) -> &'static str {
        match self {
            Recurrence::Weekday => "Пн - Пт",
            Recurrence::Weekend => "Сб - Вс",
            Recurrence::Saturday => "Суббота",
            Recurrence::Sunday => "Воскресенье",
            Recurrence::Daily => "Ежедневно",
        }
    }
}

impl From<feed::Route> for Route {
    fn from(raw: feed::Route) -> Self {
        Self {
            recurrence: Recurrence::classify(&raw.days),
            id: raw.id.trim().to_owned(),
            days: raw.days,
            directions: raw.directions.into_iter().map(Direction::from).collect(),
        }
    }
}

impl From<feed::Direction> for Direction {
    fn from(raw: feed::Direction) -> Self {
        Self {
            label: raw.label,
            lines: raw.lines,
        }
    }
}

impl From<feed::Feed> for Schedule {
    fn from(feed: feed::Feed) -> Self {
        // Routes without an id have nothing to render under.
        Self {
            routes: feed
                .routes
                .into_iter()
                .filter(|route| !route.id.trim().is_empty())
                .map(Route::from)
                .collect(),
        }
    }
}

impl Schedule {
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.id == id)
    }
}

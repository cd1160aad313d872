use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Не удалось загрузить расписание: {0}")]
    Io(#[from] std::io::Error),

    #[error("Не удалось разобрать расписание: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Маршрут №{0} не найден")]
    UnknownRoute(String),

    #[error("Неверное время {0:?}, ожидается HH:MM")]
    BadTimeOverride(String),

    #[error("Неверный день недели {0:?}")]
    BadDayOverride(String),
}

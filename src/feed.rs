use serde::Deserialize;

// Raw shape of the JSON feed. Every field defaults so a route with a
// missing or mistyped field degrades to empty containers instead of
// poisoning the whole document.

#[derive(Deserialize, Debug, Default)]
pub struct Feed {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Route {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub days: String,
    #[serde(default)]
    pub directions: Vec<Direction>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Direction {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

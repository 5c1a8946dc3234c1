use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub today_char: Option<char>,
    pub event_char: Option<char>,
    /// Print the day numbers of the neighbouring months instead of blanks.
    pub show_adjacent_days: bool,
    /// Embolden today's cell with terminal escapes.
    pub highlight: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            today_char: Some('*'),
            event_char: Some('+'),
            show_adjacent_days: false,
            highlight: false,
        }
    }
}

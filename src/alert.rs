/// Console alerts
///
/// A title, a message and a list of actions. With no actions given, an
/// alert carries a single "OK" dismissal.

use std::fmt;

use crate::source::SourceError;

pub const DEFAULT_ACTION: &str = "OK";
pub const HELP_ACTION: &str = "Help (--help)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub actions: Vec<String>,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            actions: vec![DEFAULT_ACTION.to_string()],
        }
    }

    /// Replace the actions; an empty list keeps the default dismissal
    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let actions: Vec<String> = actions.into_iter().map(Into::into).collect();
        if !actions.is_empty() {
            self.actions = actions;
        }
        self
    }

    /// Input could not be read or parsed
    pub fn load_failed(err: &SourceError) -> Self {
        Alert::new("Unable to read sleep data", err.to_string())
            .with_actions([DEFAULT_ACTION, HELP_ACTION])
    }

    pub fn no_records() -> Self {
        Alert::new("No sleep data", "No sleep records were found.")
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.title)?;
        writeln!(f, "{}", self.message)?;
        write!(f, "({})", self.actions.join(" / "))
    }
}

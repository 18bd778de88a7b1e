use itertools::Itertools;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Dash-separated formation key, e.g. "4-4-2" or "2-3-1".
///
/// The string doubles as the lookup key into the default-position tables and
/// as a parseable encoding of role counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FormationShape(String);

impl FormationShape {
    pub fn new(key: impl Into<String>) -> Self {
        FormationShape(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the dash-separated segments into role counts.
    ///
    /// First segment = defenders, second = midfielders, every remaining
    /// segment is summed into forwards. Missing or non-numeric segments
    /// count as 0 - a malformed shape never raises.
    pub fn counts(&self) -> ShapeCounts {
        let mut segments = self
            .0
            .split('-')
            .map(|segment| segment.trim().parse::<usize>().unwrap_or(0));

        let defenders = segments.next().unwrap_or(0);
        let midfielders = segments.next().unwrap_or(0);
        let forwards = segments.fold(0usize, |sum, count| sum.saturating_add(count));

        ShapeCounts {
            defenders,
            midfielders,
            forwards,
        }
    }
}

impl From<&str> for FormationShape {
    fn from(key: &str) -> Self {
        FormationShape::new(key)
    }
}

impl From<String> for FormationShape {
    fn from(key: String) -> Self {
        FormationShape::new(key)
    }
}

impl Display for FormationShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role counts parsed out of a shape string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeCounts {
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl ShapeCounts {
    pub fn outfield(&self) -> usize {
        self.defenders + self.midfielders + self.forwards
    }

    /// Re-render the counts as a canonical "d-m-f" description.
    pub fn description(&self) -> String {
        [self.defenders, self.midfielders, self.forwards]
            .iter()
            .join("-")
    }
}

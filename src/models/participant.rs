use std::fmt;

use serde::Deserialize;

/// Participant identifier as received from the client. Kept opaque: it is not
/// checked for address syntax, trimmed, or case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantEmail {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ParticipantEmail {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ParticipantEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quick tip shown on the home page.
pub const HOME_TIP: &str = "Practice regularly!";

/// One of the four practice areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Speaking,
    Writing,
    Listening,
    Reading,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Speaking,
        Section::Writing,
        Section::Listening,
        Section::Reading,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Speaking => "Speaking",
            Section::Writing => "Writing",
            Section::Listening => "Listening",
            Section::Reading => "Reading",
        }
    }

    /// Path segment used by the web routes and the `active` nav marker.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Speaking => "speaking",
            Section::Writing => "writing",
            Section::Listening => "listening",
            Section::Reading => "reading",
        }
    }

    pub fn quick_tip(self) -> &'static str {
        match self {
            Section::Speaking => "Speak for the full time and focus on clarity over speed.",
            Section::Writing => "Plan for 1-2 minutes so your structure is clear before typing.",
            Section::Listening => "Note key nouns and verbs, they carry most of the meaning.",
            Section::Reading => "Skim the question first, then scan the passage for evidence.",
        }
    }

    pub fn position(self) -> usize {
        match self {
            Section::Speaking => 0,
            Section::Writing => 1,
            Section::Listening => 2,
            Section::Reading => 3,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

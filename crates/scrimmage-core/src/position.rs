//! Position labels and team sides
//!
//! Labels come straight from the detection model's class names. Anything the
//! taxonomy does not know is kept verbatim so it can still be reported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the ball a player belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Offense,
    Defense,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Offense => f.write_str("offense"),
            Team::Defense => f.write_str("defense"),
        }
    }
}

/// Position code attached to a detection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    QB,
    RB,
    WR,
    C,
    OG,
    OT,
    FB,
    TE,
    DE,
    DT,
    LB,
    MLB,
    OLB,
    DB,
    S,
    CB,
    FS,
    SS,
    /// Generic "player" label from older detection models
    Player,
    /// "ref" / "referee"
    Referee,
    /// Any code outside the taxonomy, stored as given
    Unlisted(String),
}

impl Position {
    /// Parse a detection class label. Never fails.
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "QB" => Position::QB,
            "RB" => Position::RB,
            "WR" => Position::WR,
            "C" => Position::C,
            "OG" => Position::OG,
            "OT" => Position::OT,
            "FB" => Position::FB,
            "TE" => Position::TE,
            "DE" => Position::DE,
            "DT" => Position::DT,
            "LB" => Position::LB,
            "MLB" => Position::MLB,
            "OLB" => Position::OLB,
            "DB" => Position::DB,
            "S" => Position::S,
            "CB" => Position::CB,
            "FS" => Position::FS,
            "SS" => Position::SS,
            other if other.eq_ignore_ascii_case("player") => Position::Player,
            other if other.eq_ignore_ascii_case("ref") || other.eq_ignore_ascii_case("referee") => {
                Position::Referee
            }
            other => Position::Unlisted(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::C => "C",
            Position::OG => "OG",
            Position::OT => "OT",
            Position::FB => "FB",
            Position::TE => "TE",
            Position::DE => "DE",
            Position::DT => "DT",
            Position::LB => "LB",
            Position::MLB => "MLB",
            Position::OLB => "OLB",
            Position::DB => "DB",
            Position::S => "S",
            Position::CB => "CB",
            Position::FS => "FS",
            Position::SS => "SS",
            Position::Player => "player",
            Position::Referee => "ref",
            Position::Unlisted(label) => label,
        }
    }

    /// Team implied by the label alone.
    ///
    /// Only the fixed offensive set {QB, RB, WR, C, OG, OT, FB, TE} and
    /// defensive set {DE, DT, LB, DB, S, CB, FS, SS} resolve here. MLB and
    /// OLB are linebacker codes for coverage purposes but are not part of the
    /// defensive set, so they fall through to the spatial rule like any
    /// other unlisted label.
    pub fn known_team(&self) -> Option<Team> {
        match self {
            Position::QB
            | Position::RB
            | Position::WR
            | Position::C
            | Position::OG
            | Position::OT
            | Position::FB
            | Position::TE => Some(Team::Offense),
            Position::DE
            | Position::DT
            | Position::LB
            | Position::DB
            | Position::S
            | Position::CB
            | Position::FS
            | Position::SS => Some(Team::Defense),
            _ => None,
        }
    }

    /// Everything except referees counts as a player
    pub fn is_player(&self) -> bool {
        !matches!(self, Position::Referee)
    }

    pub fn is_safety(&self) -> bool {
        matches!(self, Position::S | Position::FS | Position::SS)
    }

    pub fn is_corner(&self) -> bool {
        matches!(self, Position::DB | Position::CB)
    }

    /// Safeties and corners
    pub fn is_secondary(&self) -> bool {
        self.is_safety() || self.is_corner()
    }

    pub fn is_linebacker(&self) -> bool {
        matches!(self, Position::LB | Position::MLB | Position::OLB)
    }

    /// Eligible receivers tracked by the man-matching pass
    pub fn is_receiver(&self) -> bool {
        matches!(self, Position::WR | Position::TE)
    }
}

impl From<String> for Position {
    fn from(label: String) -> Self {
        Position::from_label(&label)
    }
}

impl From<&str> for Position {
    fn from(label: &str) -> Self {
        Position::from_label(label)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        match position {
            Position::Unlisted(label) => label,
            other => other.label().to_string(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

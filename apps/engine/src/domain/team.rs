//! Hidden-information team assignment.
//!
//! A hand's team is one ground-truth value plus how far it has been
//! revealed. Every view is derived from those two fields, so the owner's
//! and the public projection can never disagree with the truth.

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Team {
    Re,
    Ko,
    /// Unknown (not yet determined, or not visible to the viewer).
    #[default]
    Na,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Re => Team::Ko,
            Team::Ko => Team::Re,
            Team::Na => Team::Na,
        }
    }

    pub fn is_known(self) -> bool {
        self != Team::Na
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevealScope {
    #[default]
    None,
    Owner,
    Public,
}

/// Who is looking at a hand's team.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Viewer {
    /// Rule evaluation; sees the ground truth.
    Engine,
    /// The hand's own player.
    Owner,
    /// Anyone else at the table.
    Public,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamVisibility {
    team: Team,
    scope: RevealScope,
}

impl TeamVisibility {
    pub fn internal(&self) -> Team {
        self.team
    }

    pub fn scope(&self) -> RevealScope {
        self.scope
    }

    pub fn visible_team_for(&self, viewer: Viewer) -> Team {
        let required = match viewer {
            Viewer::Engine => return self.team,
            Viewer::Owner => RevealScope::Owner,
            Viewer::Public => RevealScope::Public,
        };
        if self.scope >= required {
            self.team
        } else {
            Team::Na
        }
    }

    /// Set the truth and show it to the owner only.
    pub fn assign_private(&mut self, team: Team) {
        self.team = team;
        self.scope = RevealScope::Owner;
    }

    /// Set the truth and show it to everyone.
    pub fn assign_public(&mut self, team: Team) {
        self.team = team;
        self.scope = RevealScope::Public;
    }

    /// Reveal the current truth to everyone.
    pub fn reveal(&mut self) {
        self.scope = RevealScope::Public;
    }
}

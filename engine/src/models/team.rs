//! Teams and clubs.

use serde::{Deserialize, Serialize};

use super::ids::{AgegroupId, ClubId, DivisionId, JobId, TeamId};

/// A registered team within a job.
///
/// Division and agegroup linkage is optional: teams can be registered before
/// placement, and such teams are excluded from division summaries and most
/// QA checks until assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub job_id: JobId,
    pub name: String,
    pub active: bool,
    pub agegroup_id: Option<AgegroupId>,
    pub agegroup_name: Option<String>,
    pub division_id: Option<DivisionId>,
    pub division_name: Option<String>,
    /// Current seed position within the division (1..N), when placed.
    pub div_rank: Option<i32>,
    pub club_id: Option<ClubId>,
}

impl Team {
    /// A team counts as placed when it has a division id, a non-empty
    /// division name, and an agegroup.
    pub fn has_division_assignment(&self) -> bool {
        self.division_id.is_some()
            && self.division_name.as_deref().is_some_and(|n| !n.is_empty())
            && self.agegroup_id.is_some()
    }

    pub fn agegroup(&self) -> &str {
        self.agegroup_name.as_deref().unwrap_or("")
    }

    pub fn division(&self) -> &str {
        self.division_name.as_deref().unwrap_or("")
    }
}

/// A club teams belong to, used for club-facing QA groupings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
}

// crates/countrycodes-core/src/common.rs
use crate::model::{Assignment, CountryCode};
use serde::Serialize;

/// Simple aggregate statistics for the registry.
///
/// Returned by [`CountrySearch::stats`](crate::CountrySearch::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total: usize,
    pub officially_assigned: usize,
    pub user_assigned: usize,
    pub exceptionally_reserved: usize,
    pub transitionally_reserved: usize,
    pub indeterminately_reserved: usize,
    pub not_used: usize,
}

impl RegistryStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a CountryCode>) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.total += 1;
            *stats.slot_mut(record.assignment) += 1;
        }
        stats
    }

    /// Number of records with the given status.
    pub fn count(&self, assignment: Assignment) -> usize {
        match assignment {
            Assignment::OfficiallyAssigned => self.officially_assigned,
            Assignment::UserAssigned => self.user_assigned,
            Assignment::ExceptionallyReserved => self.exceptionally_reserved,
            Assignment::TransitionallyReserved => self.transitionally_reserved,
            Assignment::IndeterminatelyReserved => self.indeterminately_reserved,
            Assignment::NotUsed => self.not_used,
        }
    }

    fn slot_mut(&mut self, assignment: Assignment) -> &mut usize {
        match assignment {
            Assignment::OfficiallyAssigned => &mut self.officially_assigned,
            Assignment::UserAssigned => &mut self.user_assigned,
            Assignment::ExceptionallyReserved => &mut self.exceptionally_reserved,
            Assignment::TransitionallyReserved => &mut self.transitionally_reserved,
            Assignment::IndeterminatelyReserved => &mut self.indeterminately_reserved,
            Assignment::NotUsed => &mut self.not_used,
        }
    }
}

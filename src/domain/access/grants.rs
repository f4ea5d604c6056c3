use crate::domain::entities::AdUnlockGrant;
use crate::domain::value_objects::PuzzleId;
use std::collections::HashSet;

/// Set-membership view over the user's ad-unlock grants. Grants are
/// permanent: `granted_at` is never consulted, presence alone unlocks.
#[derive(Debug, Clone, Default)]
pub struct AdUnlockRegistry {
    unlocked: HashSet<PuzzleId>,
}

impl AdUnlockRegistry {
    pub fn new(grants: &[AdUnlockGrant]) -> Self {
        Self {
            unlocked: grants.iter().map(|grant| grant.puzzle_id.clone()).collect(),
        }
    }

    pub fn has_grant(&self, puzzle_id: &PuzzleId) -> bool {
        self.unlocked.contains(puzzle_id)
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }

    pub fn len(&self) -> usize {
        self.unlocked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn id(value: &str) -> PuzzleId {
        PuzzleId::new(value.to_string()).unwrap()
    }

    #[test]
    fn empty_registry_fails_closed() {
        let registry = AdUnlockRegistry::default();
        assert!(!registry.has_grant(&id("p1")));
    }

    #[test]
    fn grant_age_is_irrelevant() {
        let ancient = Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap();
        let grants = vec![AdUnlockGrant::new(id("p1"), ancient)];
        let registry = AdUnlockRegistry::new(&grants);
        assert!(registry.has_grant(&id("p1")));
        assert!(!registry.has_grant(&id("p2")));
    }

    #[test]
    fn duplicate_grants_collapse() {
        let now = Utc::now();
        let grants = vec![
            AdUnlockGrant::new(id("p1"), now),
            AdUnlockGrant::new(id("p1"), now),
        ];
        let registry = AdUnlockRegistry::new(&grants);
        assert_eq!(registry.len(), 1);
    }
}

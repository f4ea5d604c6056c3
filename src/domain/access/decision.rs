use crate::domain::access::free_window::is_within_free_window;
use crate::domain::access::grants::AdUnlockRegistry;
use crate::domain::value_objects::{PuzzleDate, PuzzleId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The unlock rules, in their one and only evaluation order. The chain
/// is spelled out as data so that changing the priority of a rule is a
/// visible edit to this constant, not an accidental statement shuffle.
///
/// A completed attempt outranks everything else: completed items stay
/// viewable after a subscription lapses and after the free window has
/// moved on.
pub const RULE_CHAIN: [UnlockRule; 4] = [
    UnlockRule::CompletedAttempt,
    UnlockRule::Entitlement,
    UnlockRule::FreeWindow,
    UnlockRule::AdGrant,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlockRule {
    CompletedAttempt,
    Entitlement,
    FreeWindow,
    AdGrant,
}

/// Inputs for one lock evaluation. All fields are optional-friendly:
/// anything missing fails closed toward "locked".
#[derive(Debug, Clone, Default)]
pub struct AccessRequest<'a> {
    pub item_date: Option<NaiveDate>,
    pub is_entitled: bool,
    pub puzzle_id: Option<&'a PuzzleId>,
    pub grants: Option<&'a AdUnlockRegistry>,
    pub has_completed_attempt: Option<bool>,
}

impl<'a> AccessRequest<'a> {
    /// Accepts the item date as the raw string it is stored and synced
    /// as. Malformed input degrades to "no date" (outside the window),
    /// so a single corrupt record can never abort a list evaluation.
    pub fn with_raw_date(mut self, raw: Option<&str>) -> Self {
        self.item_date = raw
            .and_then(PuzzleDate::parse_opt)
            .map(|date| date.as_naive());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessVerdict {
    pub locked: bool,
    pub unlock_reason: Option<UnlockRule>,
}

impl AccessVerdict {
    fn unlocked(rule: UnlockRule) -> Self {
        Self {
            locked: false,
            unlock_reason: Some(rule),
        }
    }

    fn locked() -> Self {
        Self {
            locked: true,
            unlock_reason: None,
        }
    }
}

/// State-free, total lock decision. Composes the free-window
/// calculation and the grant registry under the fixed rule chain.
#[derive(Debug, Clone, Copy)]
pub struct AccessDecisionEngine {
    window_days: u32,
}

impl AccessDecisionEngine {
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub fn evaluate(&self, request: &AccessRequest<'_>, today: NaiveDate) -> AccessVerdict {
        for rule in RULE_CHAIN {
            if self.rule_unlocks(rule, request, today) {
                return AccessVerdict::unlocked(rule);
            }
        }
        AccessVerdict::locked()
    }

    pub fn is_locked(&self, request: &AccessRequest<'_>, today: NaiveDate) -> bool {
        self.evaluate(request, today).locked
    }

    fn rule_unlocks(&self, rule: UnlockRule, request: &AccessRequest<'_>, today: NaiveDate) -> bool {
        match rule {
            UnlockRule::CompletedAttempt => request.has_completed_attempt.unwrap_or(false),
            UnlockRule::Entitlement => request.is_entitled,
            UnlockRule::FreeWindow => match request.item_date {
                Some(item_date) => is_within_free_window(item_date, today, self.window_days),
                None => false,
            },
            UnlockRule::AdGrant => match (request.puzzle_id, request.grants) {
                (Some(id), Some(registry)) => registry.has_grant(id),
                _ => false,
            },
        }
    }
}

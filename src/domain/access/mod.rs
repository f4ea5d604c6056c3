pub mod decision;
pub mod free_window;
pub mod grants;

pub use decision::{AccessDecisionEngine, AccessRequest, AccessVerdict, UnlockRule, RULE_CHAIN};
pub use free_window::is_within_free_window;
pub use grants::AdUnlockRegistry;

// Ledgers close roughly every 5 seconds
pub const DAY_IN_LEDGERS: u32 = 17280;

// target TTL for the contract instance and its code, 7 days of ledgers.
pub const INSTANCE_TARGET_TTL: u32 = 7 * DAY_IN_LEDGERS;
// instance TTL is refreshed back to INSTANCE_TARGET_TTL once it drops below 6 days.
pub const INSTANCE_RENEWAL_THRESHOLD: u32 = INSTANCE_TARGET_TTL - DAY_IN_LEDGERS;

// target TTL for persistent entries (participant records, roster), 30 days of ledgers.
pub const PERSISTENT_TARGET_TTL: u32 = 30 * DAY_IN_LEDGERS;
// persistent TTL is refreshed back to PERSISTENT_TARGET_TTL once it drops below 29 days.
pub const PERSISTENT_RENEWAL_THRESHOLD: u32 = PERSISTENT_TARGET_TTL - DAY_IN_LEDGERS;

use soroban_sdk::{Env, IntoVal, Val};

use crate::ttl::{
    INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL, PERSISTENT_RENEWAL_THRESHOLD,
    PERSISTENT_TARGET_TTL,
};

/// Extends the TTL of the current contract instance (and all of its instance storage).
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_RENEWAL_THRESHOLD, INSTANCE_TARGET_TTL);
}

/// Extends the TTL of a persistent entry. The entry has to exist.
pub fn bump_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_RENEWAL_THRESHOLD, PERSISTENT_TARGET_TTL);
}

/// Same as [`bump_persistent`], but silently skips keys that were never written.
pub fn bump_persistent_if_present<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    if env.storage().persistent().has(key) {
        bump_persistent(env, key);
    }
}

//! TTL granularity shared by every provider.

use std::time::Duration;

/// Whole seconds, never below one.
///
/// Redis only takes whole seconds and rejects `EX 0`; the memory provider
/// rounds the same way so both backends expire a code at the same time.
pub(crate) fn whole_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

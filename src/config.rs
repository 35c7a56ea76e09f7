//! Per-link tunables shared by the codecs and the session state machine.

use std::time::Duration;

use crate::retry::RetryPolicy;

/// Smallest MTU any notification transport guarantees. Sessions assume it
/// until the link renegotiates a larger one.
pub const MIN_MTU: u32 = 20;

/// Ceiling applied to renegotiated MTU values.
pub const MAX_MTU: u32 = 512;

/// How long a session waits for the MTU renegotiation acknowledgment before
/// declaring the link connected with the MTU it already has.
pub const MTU_GRACE: Duration = Duration::from_millis(500);

/// Settings governing one peer link.
#[derive(Clone, Copy, Debug)]
pub struct LinkConfig {
    /// MTU assumed before renegotiation completes.
    pub min_mtu: u32,
    /// Largest MTU a session will accept from renegotiation.
    pub max_mtu: u32,
    /// Grace period for the MTU renegotiation acknowledgment.
    pub mtu_grace: Duration,
    /// Retry policy applied to transiently failing link operations.
    pub retry: RetryPolicy,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            min_mtu: MIN_MTU,
            max_mtu: MAX_MTU,
            mtu_grace: MTU_GRACE,
            retry: RetryPolicy::default(),
        }
    }
}

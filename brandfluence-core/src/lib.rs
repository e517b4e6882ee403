//! Marketplace domain operations.
//!
//! Every operation takes the resolved [`Actor`] explicitly, checks ownership
//! and status transitions, performs its writes inside a single transaction
//! and only then dispatches notifications.
//!
//! [`Actor`]: brandfluence_models::domain::prelude::Actor

mod context;
pub mod identity;
pub mod notifier;
pub mod service;
pub mod transitions;

pub use context::CoreContext;
pub use identity::{CredentialVerifier, IdentityService, JwtVerifier};
pub use notifier::{Notifier, StoredNotifier};

/// Rounds a currency amount to cents.
#[inline]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn test_round2() {
        assert_eq!(round2(333.333), 333.33);
        assert_eq!(round2(12.345_6), 12.35);
        assert_eq!(round2(1000.0 * 0.25), 250.0);
    }
}

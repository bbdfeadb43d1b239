//! Authority oracle for the Waymark route registry.
//!
//! Registration is gated by a yes/no check on the caller principal. The
//! registry core only ever asks the boolean question; maintaining the set of
//! authorities is the host's concern. [`MemoryAuthorityRegistry`] is the
//! reference implementation for tests and single-process hosts.

use parking_lot::RwLock;
use std::collections::HashSet;
use waymark_types::Principal;

/// Boolean oracle deciding whether a principal may register routes.
///
/// Implementations must answer synchronously and without side effects; the
/// answer must be stable for a given principal over the duration of a call.
pub trait AuthorityRegistry: Send + Sync {
    /// Whether `principal` is currently a verified authority.
    fn is_verified_authority(&self, principal: &Principal) -> bool;
}

/// In-memory authority set guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct MemoryAuthorityRegistry {
    authorities: RwLock<HashSet<Principal>>,
}

impl MemoryAuthorityRegistry {
    /// Create an empty registry; every principal is denied until granted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a principal to the authority set. Granting twice is a no-op.
    pub fn grant(&self, principal: Principal) {
        self.authorities.write().insert(principal);
    }

    /// Remove a principal from the set; returns whether it was present.
    pub fn revoke(&self, principal: &Principal) -> bool {
        self.authorities.write().remove(principal)
    }

    /// Number of verified authorities.
    pub fn len(&self) -> usize {
        self.authorities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.authorities.read().is_empty()
    }
}

impl AuthorityRegistry for MemoryAuthorityRegistry {
    fn is_verified_authority(&self, principal: &Principal) -> bool {
        self.authorities.read().contains(principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_denies_everyone() {
        let registry = MemoryAuthorityRegistry::new();
        assert!(!registry.is_verified_authority(&Principal::new("anyone")));
        assert!(registry.is_empty());
    }

    #[test]
    fn grant_then_revoke() {
        let registry = MemoryAuthorityRegistry::new();
        let surveyor = Principal::new("surveyor-1");

        registry.grant(surveyor.clone());
        assert!(registry.is_verified_authority(&surveyor));
        assert_eq!(registry.len(), 1);

        assert!(registry.revoke(&surveyor));
        assert!(!registry.is_verified_authority(&surveyor));
        assert!(!registry.revoke(&surveyor));
    }

    #[test]
    fn verification_is_identity_exact() {
        let registry = MemoryAuthorityRegistry::new();
        registry.grant(Principal::new("surveyor-1"));
        assert!(!registry.is_verified_authority(&Principal::new("Surveyor-1")));
    }
}

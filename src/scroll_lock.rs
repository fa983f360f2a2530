//! Scroll Lock Counting
//!
//! Each open modal holds one lease on the page scroll lock. The body is
//! locked on the first lease and unlocked when the last one is released.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLockDepth {
    depth: u32,
}

impl ScrollLockDepth {
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn is_locked(&self) -> bool {
        self.depth > 0
    }

    /// Take a lease. Returns true when the page must become locked.
    pub fn acquire(&mut self) -> bool {
        self.depth += 1;
        self.depth == 1
    }

    /// Return a lease. Returns true when the page must be unlocked.
    pub fn release(&mut self) -> bool {
        if self.depth == 0 {
            return false;
        }
        self.depth -= 1;
        self.depth == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_leases() {
        let mut lock = ScrollLockDepth::default();
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(!lock.release());
        assert!(lock.is_locked());
        assert!(lock.release());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_extra_release_ignored() {
        let mut lock = ScrollLockDepth::default();
        assert!(!lock.release());
        assert_eq!(lock.depth(), 0);
        assert!(lock.acquire());
    }
}

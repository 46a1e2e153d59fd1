//! Qubit addressing and identification

use std::fmt;

/// Type-safe identifier for a qubit
///
/// Prevents accidentally using raw integers where qubit indices are
/// expected.
///
/// # Example
/// ```
/// use quastor_core::QubitId;
///
/// let q0 = QubitId::new(0);
/// let q1 = QubitId::new(1);
/// assert!(q0 < q1);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_creation() {
        let q = QubitId::new(5);
        assert_eq!(q.index(), 5);
    }

    #[test]
    fn test_qubit_ordering() {
        assert!(QubitId::new(0) < QubitId::new(1));
        assert!(QubitId::new(2) > QubitId::new(0));
    }

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId::new(5)), "q5");
    }

    #[test]
    fn test_qubit_conversions() {
        let q: QubitId = 5.into();
        assert_eq!(q.index(), 5);
        let i: usize = q.into();
        assert_eq!(i, 5);
    }
}

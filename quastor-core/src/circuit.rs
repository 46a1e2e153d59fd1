//! Quantum circuit representation

use crate::gate::Gate;
use crate::{CircuitError, QubitId, Result};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Hard cap on register size
///
/// The state vector holds 2^n complex amplitudes, so registers above this
/// are rejected at construction time, before any allocation is attempted.
pub const MAX_QUBITS: usize = 26;

/// Measurement basis recorded on a circuit
///
/// Recorded for consumers of the circuit description; sampling measures
/// the full register in the computational (Z) basis regardless.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Basis {
    /// Computational basis
    Z,
    /// Hadamard basis
    X,
    /// Circular basis
    Y,
}

/// A recorded measurement request
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    /// Qubit to measure
    pub qubit: QubitId,
    /// Requested basis
    pub basis: Basis,
}

/// A quantum circuit
///
/// An ordered gate sequence over a fixed-size register, plus measurement
/// specs. Gates may only be appended before the first simulation run: the
/// sampler seals the circuit and later appends fail with
/// [`CircuitError::Sealed`].
///
/// # Example
/// ```
/// use quastor_core::{Circuit, Gate, QubitId};
///
/// let mut circuit = Circuit::new(3).unwrap();
/// circuit.push(Gate::h(QubitId::new(0))).unwrap();
/// assert_eq!(circuit.num_qubits(), 3);
/// assert_eq!(circuit.len(), 1);
/// ```
#[derive(Debug)]
pub struct Circuit {
    name: Option<String>,
    num_qubits: usize,
    gates: Vec<Gate>,
    measurements: Vec<Measurement>,
    sealed: AtomicBool,
}

impl Circuit {
    /// Create a new circuit with the specified number of qubits
    ///
    /// # Errors
    /// Returns [`CircuitError::EmptyRegister`] for zero qubits and
    /// [`CircuitError::TooManyQubits`] above [`MAX_QUBITS`].
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 {
            return Err(CircuitError::EmptyRegister);
        }
        if num_qubits > MAX_QUBITS {
            return Err(CircuitError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }
        Ok(Self {
            name: None,
            num_qubits,
            gates: Vec::new(),
            measurements: Vec::new(),
            sealed: AtomicBool::new(false),
        })
    }

    /// Attach a human-readable identifier to the circuit
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The circuit's identifier, if one was set
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Create a circuit with pre-allocated gate capacity
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Result<Self> {
        let mut circuit = Self::new(num_qubits)?;
        circuit.gates.reserve(capacity);
        Ok(circuit)
    }

    /// Get the number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of gates in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the circuit has no gates
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Append a gate to the circuit
    ///
    /// # Errors
    /// Returns an error if any qubit index is out of bounds, a qubit is
    /// duplicated within the gate, or the circuit is already sealed.
    pub fn push(&mut self, gate: Gate) -> Result<()> {
        if self.is_sealed() {
            return Err(CircuitError::Sealed);
        }
        gate.validate(self.num_qubits)?;
        self.gates.push(gate);
        Ok(())
    }

    /// Record a measurement request
    ///
    /// Does not affect simulation numerics; sampling measures the full
    /// register in the computational basis.
    ///
    /// # Errors
    /// Returns an error if the qubit index is out of bounds or the
    /// circuit is sealed.
    pub fn measure(&mut self, qubit: QubitId, basis: Basis) -> Result<()> {
        if self.is_sealed() {
            return Err(CircuitError::Sealed);
        }
        if qubit.index() >= self.num_qubits {
            return Err(CircuitError::invalid_qubit(qubit.index(), self.num_qubits));
        }
        self.measurements.push(Measurement { qubit, basis });
        Ok(())
    }

    /// Seal the circuit against further modification
    ///
    /// Called by the sampler before the first run; idempotent.
    pub fn seal(&self) {
        self.sealed.store(true, Ordering::Release);
    }

    /// Whether the circuit has been sealed
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    /// Get an iterator over the gates
    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter()
    }

    /// Get a specific gate by position
    pub fn get(&self, index: usize) -> Option<&Gate> {
        self.gates.get(index)
    }

    /// Recorded measurement requests
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Depth of the circuit (sequential execution: gate count)
    pub fn depth(&self) -> usize {
        self.gates.len()
    }
}

impl Clone for Circuit {
    /// Cloning yields an unsealed copy, so an executed circuit can be
    /// used as the base for an editable variant.
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            num_qubits: self.num_qubits,
            gates: self.gates.clone(),
            measurements: self.measurements.clone(),
            sealed: AtomicBool::new(false),
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => writeln!(
                f,
                "Circuit '{}' ({} qubits, {} gates)",
                name,
                self.num_qubits,
                self.len()
            )?,
            None => writeln!(f, "Circuit({} qubits, {} gates)", self.num_qubits, self.len())?,
        }
        for (i, gate) in self.gates.iter().enumerate() {
            writeln!(f, "  {}: {}", i, gate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circuit_creation() {
        let circuit = Circuit::new(3).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.len(), 0);
        assert!(circuit.is_empty());
        assert!(!circuit.is_sealed());
    }

    #[test]
    fn test_circuit_zero_qubits() {
        assert_eq!(Circuit::new(0).unwrap_err(), CircuitError::EmptyRegister);
    }

    #[test]
    fn test_circuit_too_many_qubits() {
        let err = Circuit::new(MAX_QUBITS + 1).unwrap_err();
        assert_eq!(
            err,
            CircuitError::TooManyQubits {
                requested: MAX_QUBITS + 1,
                max: MAX_QUBITS
            }
        );
    }

    #[test]
    fn test_with_capacity() {
        let mut circuit = Circuit::with_capacity(3, 8).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert!(circuit.is_empty());
        for q in 0..3 {
            circuit.push(Gate::h(QubitId::new(q))).unwrap();
        }
        assert_eq!(circuit.len(), 3);

        assert_eq!(
            Circuit::with_capacity(0, 8).unwrap_err(),
            CircuitError::EmptyRegister
        );
    }

    #[test]
    fn test_push_gate() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push(Gate::h(QubitId::new(0))).unwrap();
        assert_eq!(circuit.len(), 1);
        assert!(!circuit.is_empty());
    }

    #[test]
    fn test_push_invalid_qubit() {
        let mut circuit = Circuit::new(2).unwrap();
        let err = circuit.push(Gate::h(QubitId::new(5))).unwrap_err();
        assert_eq!(
            err,
            CircuitError::InvalidQubit {
                index: 5,
                num_qubits: 2
            }
        );
    }

    #[test]
    fn test_push_invalid_control() {
        let mut circuit = Circuit::new(2).unwrap();
        let err = circuit
            .push(Gate::cnot(QubitId::new(4), QubitId::new(1)))
            .unwrap_err();
        assert!(matches!(err, CircuitError::InvalidQubit { index: 4, .. }));
    }

    #[test]
    fn test_sealed_rejects_push() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push(Gate::h(QubitId::new(0))).unwrap();
        circuit.seal();

        let err = circuit.push(Gate::x(QubitId::new(1))).unwrap_err();
        assert_eq!(err, CircuitError::Sealed);
        assert_eq!(circuit.len(), 1);
    }

    #[test]
    fn test_clone_is_unsealed() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push(Gate::h(QubitId::new(0))).unwrap();
        circuit.seal();

        let mut copy = circuit.clone();
        assert!(!copy.is_sealed());
        copy.push(Gate::x(QubitId::new(1))).unwrap();
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_measure() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.measure(QubitId::new(0), Basis::Z).unwrap();
        circuit.measure(QubitId::new(1), Basis::X).unwrap();
        assert_eq!(circuit.measurements().len(), 2);
        assert_eq!(circuit.measurements()[1].basis, Basis::X);

        let err = circuit.measure(QubitId::new(7), Basis::Z).unwrap_err();
        assert!(matches!(err, CircuitError::InvalidQubit { index: 7, .. }));
    }

    #[test]
    fn test_gates_iter_and_get() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push(Gate::h(QubitId::new(0))).unwrap();
        circuit.push(Gate::x(QubitId::new(1))).unwrap();

        assert_eq!(circuit.gates().count(), 2);
        assert_eq!(circuit.get(1).map(|g| g.name()), Some("X"));
        assert!(circuit.get(10).is_none());
    }

    #[test]
    fn test_name() {
        let circuit = Circuit::new(2).unwrap().with_name("bell");
        assert_eq!(circuit.name(), Some("bell"));
        assert!(format!("{}", circuit).contains("'bell'"));

        let anonymous = Circuit::new(2).unwrap();
        assert_eq!(anonymous.name(), None);
    }

    #[test]
    fn test_depth() {
        let mut circuit = Circuit::new(2).unwrap();
        assert_eq!(circuit.depth(), 0);
        circuit.push(Gate::h(QubitId::new(0))).unwrap();
        circuit.push(Gate::cnot(QubitId::new(0), QubitId::new(1))).unwrap();
        assert_eq!(circuit.depth(), 2);
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.push(Gate::h(QubitId::new(0))).unwrap();

        let shown = format!("{}", circuit);
        assert!(shown.contains("2 qubits"));
        assert!(shown.contains("H(q0)"));
    }
}

//! Gate descriptions
//!
//! A [`Gate`] is a pure description: a [`GateKind`] plus the target and
//! control qubits (and rotation angle where the kind takes one). The
//! numeric realization lives in `quastor-state`.

use crate::{CircuitError, QubitId, Result};
use smallvec::SmallVec;
use std::fmt;

/// The closed set of gate kinds supported by the engine
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GateKind {
    /// Hadamard: H|0⟩ = (|0⟩ + |1⟩)/√2
    H,
    /// Pauli-X (bit flip)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (phase flip)
    Z,
    /// Phase gate (√Z)
    S,
    /// π/8 gate (√S)
    T,
    /// Exchange two qubits
    Swap,
    /// Controlled-NOT
    Cnot,
    /// Rotation about the X axis
    Rx,
    /// Rotation about the Y axis
    Ry,
    /// Rotation about the Z axis
    Rz,
}

impl GateKind {
    /// Conventional short name of the gate
    pub const fn name(&self) -> &'static str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::S => "S",
            GateKind::T => "T",
            GateKind::Swap => "SWAP",
            GateKind::Cnot => "CNOT",
            GateKind::Rx => "RX",
            GateKind::Ry => "RY",
            GateKind::Rz => "RZ",
        }
    }

    /// Number of target qubits this kind acts on
    pub const fn num_targets(&self) -> usize {
        match self {
            GateKind::Swap => 2,
            _ => 1,
        }
    }

    /// Whether this kind takes a rotation angle
    pub const fn takes_angle(&self) -> bool {
        matches!(self, GateKind::Rx | GateKind::Ry | GateKind::Rz)
    }

    /// Whether this kind is its own inverse
    pub const fn is_hermitian(&self) -> bool {
        matches!(
            self,
            GateKind::H | GateKind::X | GateKind::Y | GateKind::Z | GateKind::Swap | GateKind::Cnot
        )
    }
}

/// A gate operation applied to specific qubits
///
/// Constructed through the per-kind constructors so the operand count and
/// angle presence are correct by construction; index bounds are checked
/// when the gate is appended to a [`crate::Circuit`].
///
/// # Example
/// ```
/// use quastor_core::{Gate, GateKind, QubitId};
///
/// let g = Gate::cnot(QubitId::new(0), QubitId::new(1));
/// assert_eq!(g.kind(), GateKind::Cnot);
/// assert_eq!(g.controls(), &[QubitId::new(0)]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gate {
    kind: GateKind,
    targets: SmallVec<[QubitId; 2]>,
    controls: SmallVec<[QubitId; 1]>,
    angle: Option<f64>,
}

impl Gate {
    fn single(kind: GateKind, target: QubitId) -> Self {
        Self {
            kind,
            targets: SmallVec::from_slice(&[target]),
            controls: SmallVec::new(),
            angle: None,
        }
    }

    fn rotation(kind: GateKind, target: QubitId, angle: f64) -> Self {
        Self {
            angle: Some(angle),
            ..Self::single(kind, target)
        }
    }

    /// Hadamard on `target`
    pub fn h(target: QubitId) -> Self {
        Self::single(GateKind::H, target)
    }

    /// Pauli-X on `target`
    pub fn x(target: QubitId) -> Self {
        Self::single(GateKind::X, target)
    }

    /// Pauli-Y on `target`
    pub fn y(target: QubitId) -> Self {
        Self::single(GateKind::Y, target)
    }

    /// Pauli-Z on `target`
    pub fn z(target: QubitId) -> Self {
        Self::single(GateKind::Z, target)
    }

    /// S gate on `target`
    pub fn s(target: QubitId) -> Self {
        Self::single(GateKind::S, target)
    }

    /// T gate on `target`
    pub fn t(target: QubitId) -> Self {
        Self::single(GateKind::T, target)
    }

    /// SWAP of qubits `a` and `b`
    pub fn swap(a: QubitId, b: QubitId) -> Self {
        Self {
            kind: GateKind::Swap,
            targets: SmallVec::from_slice(&[a, b]),
            controls: SmallVec::new(),
            angle: None,
        }
    }

    /// CNOT with the given control and target
    pub fn cnot(control: QubitId, target: QubitId) -> Self {
        Self {
            kind: GateKind::Cnot,
            targets: SmallVec::from_slice(&[target]),
            controls: SmallVec::from_slice(&[control]),
            angle: None,
        }
    }

    /// X-axis rotation by `angle` radians on `target`
    pub fn rx(target: QubitId, angle: f64) -> Self {
        Self::rotation(GateKind::Rx, target, angle)
    }

    /// Y-axis rotation by `angle` radians on `target`
    pub fn ry(target: QubitId, angle: f64) -> Self {
        Self::rotation(GateKind::Ry, target, angle)
    }

    /// Z-axis rotation by `angle` radians on `target`
    pub fn rz(target: QubitId, angle: f64) -> Self {
        Self::rotation(GateKind::Rz, target, angle)
    }

    /// Add an extra control qubit to this gate
    ///
    /// Any gate can be controlled; the engine applies the base operation
    /// only to amplitudes whose control bits are all 1.
    pub fn with_control(mut self, control: QubitId) -> Self {
        self.controls.push(control);
        self
    }

    /// The gate kind
    #[inline]
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// Target qubits
    #[inline]
    pub fn targets(&self) -> &[QubitId] {
        &self.targets
    }

    /// Control qubits (empty for uncontrolled gates)
    #[inline]
    pub fn controls(&self) -> &[QubitId] {
        &self.controls
    }

    /// Rotation angle, for RX/RY/RZ
    #[inline]
    pub fn angle(&self) -> Option<f64> {
        self.angle
    }

    /// Conventional short name of the gate
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// All qubits the gate touches, controls first
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.controls.iter().chain(self.targets.iter()).copied()
    }

    /// Validate the gate's shape and operand indices against a register size
    ///
    /// The constructors produce well-formed gates, but a `Gate` can also
    /// arrive through deserialization, so the target count and angle
    /// presence are re-checked here rather than trusted.
    ///
    /// # Errors
    /// Returns an error if the target count does not match the kind, a
    /// rotation kind is missing its angle, any target/control index is out
    /// of bounds, or a qubit appears more than once across targets and
    /// controls.
    pub fn validate(&self, num_qubits: usize) -> Result<()> {
        if self.targets.len() != self.kind.num_targets() {
            return Err(CircuitError::InvalidTargetCount {
                gate: self.name(),
                expected: self.kind.num_targets(),
                actual: self.targets.len(),
            });
        }
        if self.kind.takes_angle() && self.angle.is_none() {
            return Err(CircuitError::MissingAngle { gate: self.name() });
        }
        let operands: SmallVec<[QubitId; 4]> = self.qubits().collect();
        for &q in &operands {
            if q.index() >= num_qubits {
                return Err(CircuitError::invalid_qubit(q.index(), num_qubits));
            }
        }
        for i in 0..operands.len() {
            for j in (i + 1)..operands.len() {
                if operands[i] == operands[j] {
                    return Err(CircuitError::DuplicateQubit(operands[i]));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (i, q) in self.qubits().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        if let Some(angle) = self.angle {
            write!(f, "; {:.4}", angle)?;
        }
        write!(f, ")")
    }
}

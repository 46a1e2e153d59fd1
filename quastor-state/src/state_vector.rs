//! Complex amplitude vector for a qubit register

use crate::error::{Result, StateError};
use num_complex::Complex64;
use quastor_core::MAX_QUBITS;

/// Quantum state vector
///
/// Represents the state of an n-qubit register as 2^n complex amplitudes,
/// indexed by the integer value of the qubit bitstring. The squared
/// magnitude of an amplitude is the probability of observing that basis
/// state (Born rule).
///
/// # Example
///
/// ```
/// use quastor_state::StateVector;
///
/// // Create a 2-qubit state (4 amplitudes)
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns [`StateError::TooManyQubits`] above the register cap; the
    /// 2^n allocation is never attempted in that case.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }

        let dimension = 1usize << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state vector from raw amplitude data
    ///
    /// # Errors
    /// Returns an error if `amplitudes.len() != 2^num_qubits`.
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        let mut state = Self::new(num_qubits)?;
        if amplitudes.len() != state.dimension() {
            return Err(StateError::DimensionMismatch {
                expected: state.dimension(),
                actual: amplitudes.len(),
            });
        }
        state.amplitudes.copy_from_slice(amplitudes);
        Ok(state)
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the state amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Get a mutable reference to the state amplitudes
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    /// Compute the L2 norm of the state vector
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Normalize the state vector so the norm equals 1
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 1e-10 {
            let inv_norm = 1.0 / norm;
            for amplitude in &mut self.amplitudes {
                *amplitude *= inv_norm;
            }
        }
    }

    /// Check if the state is normalized: |norm − 1| < epsilon
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Reset the state to |0...0⟩
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Born-rule probability of a single basis state
    ///
    /// # Errors
    /// Returns an error if `basis_state` is out of range.
    pub fn probability(&self, basis_state: usize) -> Result<f64> {
        self.amplitudes
            .get(basis_state)
            .map(|a| a.norm_sqr())
            .ok_or(StateError::InvalidBasisState {
                index: basis_state,
                dimension: self.dimension(),
            })
    }

    /// Born-rule probabilities for every basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }
}

//! In-place gate application kernels
//!
//! Every supported gate decomposes into either a 2×2 matrix applied to
//! amplitude pairs or an index permutation, optionally restricted by a
//! control mask. Gate application is deterministic and unitary: the norm
//! of the state is preserved up to floating tolerance.

use crate::error::{Result, StateError};
use crate::matrices;
use crate::state_vector::StateVector;
use num_complex::Complex64;
use quastor_core::{Gate, GateKind, QubitId};

/// Bit mask with a 1 at every control qubit position
fn control_mask(controls: &[QubitId]) -> usize {
    controls.iter().fold(0, |mask, q| mask | (1 << q.index()))
}

/// Apply a 2×2 matrix to the target qubit of a state
///
/// Groups amplitudes into pairs (i, j) that differ only in the target bit
/// and applies the matrix to each pair in a single pass; the high index of
/// a pair is never reprocessed as an independent low index. A nonzero
/// `controls` mask restricts the update to pairs whose control bits are
/// all 1 (both members of a pair share their control bits, so the check
/// on the low index covers both).
pub fn apply_single_qubit(
    state: &mut [Complex64],
    matrix: &[[Complex64; 2]; 2],
    target: usize,
    controls: usize,
) {
    let target_mask = 1usize << target;

    let m00 = matrix[0][0];
    let m01 = matrix[0][1];
    let m10 = matrix[1][0];
    let m11 = matrix[1][1];

    for i in 0..state.len() {
        if i & target_mask != 0 {
            continue;
        }
        if i & controls != controls {
            continue;
        }

        let j = i | target_mask;

        let amp0 = state[i];
        let amp1 = state[j];

        state[i] = m00 * amp0 + m01 * amp1;
        state[j] = m10 * amp0 + m11 * amp1;
    }
}

/// Exchange two qubits of a state
///
/// Pure index permutation: swaps the amplitudes of every pair of basis
/// states with `(bit_a, bit_b) = (0, 1)` and `(1, 0)`, subject to the
/// control mask.
pub fn apply_swap(state: &mut [Complex64], a: usize, b: usize, controls: usize) {
    let mask_a = 1usize << a;
    let mask_b = 1usize << b;

    for i in 0..state.len() {
        // Representative of each pair: bit_a clear, bit_b set
        if i & mask_a != 0 || i & mask_b == 0 {
            continue;
        }
        if i & controls != controls {
            continue;
        }

        let j = (i | mask_a) & !mask_b;
        state.swap(i, j);
    }
}

/// Apply a gate description to a state vector in place
///
/// # Errors
/// Returns an error if an operand index is out of range for the state or
/// a rotation gate carries no angle. Circuits validated by
/// `quastor-core` never trigger either.
pub fn apply_gate(state: &mut StateVector, gate: &Gate) -> Result<()> {
    let num_qubits = state.num_qubits();
    for q in gate.qubits() {
        if q.index() >= num_qubits {
            return Err(StateError::InvalidQubit {
                index: q.index(),
                num_qubits,
            });
        }
    }

    let controls = control_mask(gate.controls());
    let angle = || {
        gate.angle().ok_or(StateError::MissingAngle {
            gate: gate.name(),
        })
    };

    match gate.kind() {
        GateKind::H => {
            apply_single_qubit(
                state.amplitudes_mut(),
                &matrices::HADAMARD,
                gate.targets()[0].index(),
                controls,
            );
        }
        GateKind::X => {
            apply_single_qubit(
                state.amplitudes_mut(),
                &matrices::PAULI_X,
                gate.targets()[0].index(),
                controls,
            );
        }
        GateKind::Y => {
            apply_single_qubit(
                state.amplitudes_mut(),
                &matrices::PAULI_Y,
                gate.targets()[0].index(),
                controls,
            );
        }
        GateKind::Z => {
            apply_single_qubit(
                state.amplitudes_mut(),
                &matrices::PAULI_Z,
                gate.targets()[0].index(),
                controls,
            );
        }
        GateKind::S => {
            apply_single_qubit(
                state.amplitudes_mut(),
                &matrices::S_GATE,
                gate.targets()[0].index(),
                controls,
            );
        }
        GateKind::T => {
            apply_single_qubit(
                state.amplitudes_mut(),
                &matrices::T_GATE,
                gate.targets()[0].index(),
                controls,
            );
        }
        // CNOT is X with the control folded into the mask
        GateKind::Cnot => {
            apply_single_qubit(
                state.amplitudes_mut(),
                &matrices::PAULI_X,
                gate.targets()[0].index(),
                controls,
            );
        }
        GateKind::Swap => {
            apply_swap(
                state.amplitudes_mut(),
                gate.targets()[0].index(),
                gate.targets()[1].index(),
                controls,
            );
        }
        GateKind::Rx => {
            let m = matrices::rx(angle()?);
            apply_single_qubit(
                state.amplitudes_mut(),
                &m,
                gate.targets()[0].index(),
                controls,
            );
        }
        GateKind::Ry => {
            let m = matrices::ry(angle()?);
            apply_single_qubit(
                state.amplitudes_mut(),
                &m,
                gate.targets()[0].index(),
                controls,
            );
        }
        GateKind::Rz => {
            let m = matrices::rz(angle()?);
            apply_single_qubit(
                state.amplitudes_mut(),
                &m,
                gate.targets()[0].index(),
                controls,
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

    fn q(i: usize) -> QubitId {
        QubitId::new(i)
    }

    fn assert_states_eq(state: &StateVector, expected: &[Complex64]) {
        for (a, e) in state.amplitudes().iter().zip(expected) {
            assert_relative_eq!(a.re, e.re, epsilon = 1e-12);
            assert_relative_eq!(a.im, e.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hadamard_superposition() {
        let mut state = StateVector::new(1).unwrap();
        apply_gate(&mut state, &Gate::h(q(0))).unwrap();

        assert_states_eq(
            &state,
            &[
                Complex64::new(FRAC_1_SQRT_2, 0.0),
                Complex64::new(FRAC_1_SQRT_2, 0.0),
            ],
        );
    }

    #[test]
    fn test_hadamard_self_inverse() {
        let mut state = StateVector::new(3).unwrap();
        apply_gate(&mut state, &Gate::h(q(1))).unwrap();
        apply_gate(&mut state, &Gate::h(q(1))).unwrap();

        let mut expected = vec![Complex64::new(0.0, 0.0); 8];
        expected[0] = Complex64::new(1.0, 0.0);
        assert_states_eq(&state, &expected);
    }

    #[test]
    fn test_x_flips_and_self_inverse() {
        let mut state = StateVector::new(2).unwrap();
        apply_gate(&mut state, &Gate::x(q(1))).unwrap();

        // |00⟩ -> |10⟩, index 2 with qubit 1 as the high bit
        assert_relative_eq!(state.probability(2).unwrap(), 1.0, epsilon = 1e-12);

        apply_gate(&mut state, &Gate::x(q(1))).unwrap();
        assert_relative_eq!(state.probability(0).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bell_state() {
        let mut state = StateVector::new(2).unwrap();
        apply_gate(&mut state, &Gate::h(q(0))).unwrap();
        apply_gate(&mut state, &Gate::cnot(q(0), q(1))).unwrap();

        let probs = state.probabilities();
        assert_relative_eq!(probs[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(probs[3], 0.5, epsilon = 1e-12);
        assert!(probs[1].abs() < 1e-12);
        assert!(probs[2].abs() < 1e-12);
    }

    #[test]
    fn test_cnot_control_not_set() {
        let mut state = StateVector::new(2).unwrap();
        apply_gate(&mut state, &Gate::cnot(q(0), q(1))).unwrap();

        // Control qubit is 0: nothing happens
        assert_relative_eq!(state.probability(0).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_swap() {
        let mut state = StateVector::new(2).unwrap();
        apply_gate(&mut state, &Gate::x(q(0))).unwrap(); // |01⟩
        apply_gate(&mut state, &Gate::swap(q(0), q(1))).unwrap(); // |10⟩

        assert_relative_eq!(state.probability(2).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_controlled_gate_via_mask() {
        // Toffoli-style: X on q2 only when q0 and q1 are both 1
        let mut state = StateVector::new(3).unwrap();
        let toffoli = Gate::x(q(2)).with_control(q(0)).with_control(q(1));

        apply_gate(&mut state, &toffoli.clone()).unwrap();
        assert_relative_eq!(state.probability(0).unwrap(), 1.0, epsilon = 1e-12);

        apply_gate(&mut state, &Gate::x(q(0))).unwrap();
        apply_gate(&mut state, &Gate::x(q(1))).unwrap();
        apply_gate(&mut state, &toffoli).unwrap();
        // |011⟩ -> |111⟩
        assert_relative_eq!(state.probability(7).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_z_phase_flip() {
        let mut state = StateVector::new(1).unwrap();
        apply_gate(&mut state, &Gate::h(q(0))).unwrap();
        apply_gate(&mut state, &Gate::z(q(0))).unwrap();

        assert_relative_eq!(state.amplitudes()[0].re, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(state.amplitudes()[1].re, -FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_norm_preserved() {
        let mut state = StateVector::new(2).unwrap();
        apply_gate(&mut state, &Gate::h(q(0))).unwrap();
        apply_gate(&mut state, &Gate::rx(q(0), 0.7)).unwrap();
        apply_gate(&mut state, &Gate::ry(q(1), 2.1)).unwrap();
        apply_gate(&mut state, &Gate::rz(q(0), -1.3)).unwrap();

        assert!(state.is_normalized(1e-10));
    }

    #[test]
    fn test_rz_relative_phase() {
        let mut state = StateVector::new(1).unwrap();
        apply_gate(&mut state, &Gate::h(q(0))).unwrap();
        apply_gate(&mut state, &Gate::rz(q(0), std::f64::consts::PI)).unwrap();

        // RZ(π) = diag(e^{-iπ/2}, e^{iπ/2}) = diag(-i, i)
        let amps = state.amplitudes();
        assert_relative_eq!(amps[0].im, -FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(amps[1].im, FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_preserved_long_sequence() {
        let mut state = StateVector::new(4).unwrap();
        for round in 0..25 {
            for i in 0..4 {
                apply_gate(&mut state, &Gate::h(q(i))).unwrap();
            }
            apply_gate(&mut state, &Gate::cnot(q(round % 4), q((round + 1) % 4))).unwrap();
            apply_gate(&mut state, &Gate::t(q(round % 4))).unwrap();
        }
        assert!(state.is_normalized(1e-9));
    }

    #[test]
    fn test_out_of_range_qubit() {
        let mut state = StateVector::new(2).unwrap();
        let err = apply_gate(&mut state, &Gate::h(q(5))).unwrap_err();
        assert!(matches!(err, StateError::InvalidQubit { index: 5, .. }));
    }
}

//! Quantum circuit model consumed by the qirgen converter.
//!
//! A [`Circuit`] is an ordered list of [`Moment`]s, each holding gate
//! [`Operation`]s that act on disjoint [`Qid`]s. Circuits have a canonical
//! JSON form where every object carries a `cirq_type` tag; the converter
//! hashes that form to name the generated QIR module.
//!
//! # Example
//!
//! ```
//! use qirgen_circuit::{Circuit, Gate, Qid};
//!
//! let q = Qid::line_range(2);
//! let mut circuit = Circuit::new();
//! circuit.append(Gate::H.on([q[0].clone()])?);
//! circuit.append(Gate::Cnot.on([q[0].clone(), q[1].clone()])?);
//! assert_eq!(circuit.moments().len(), 2);
//! # Ok::<(), qirgen_circuit::CircuitError>(())
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod operation;
pub mod qid;

pub use circuit::{Circuit, Moment};
pub use error::{CircuitError, Result};
pub use gate::Gate;
pub use operation::Operation;
pub use qid::Qid;

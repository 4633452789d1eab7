//! Structural elements of a circuit module.
//!
//! Elements only dispatch to the matching [`Visitor`] method; they never
//! emit IR themselves.

use crate::circuit::QuantumCircuit;
use crate::traversal::Visitor;
use std::collections::BTreeSet;

/// The full set of qubits used by a circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Register<Q> {
    qubits: BTreeSet<Q>,
}

impl<Q: Ord> Register<Q> {
    pub fn new(qubits: BTreeSet<Q>) -> Self {
        Self { qubits }
    }

    pub fn qubits(&self) -> &BTreeSet<Q> {
        &self.qubits
    }

    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    pub fn contains(&self, qubit: &Q) -> bool {
        self.qubits.contains(qubit)
    }
}

#[derive(Debug, Clone)]
pub enum CircuitElement<C: QuantumCircuit> {
    Register(Register<C::Qubit>),
    Operation(C::Operation),
}

impl<C: QuantumCircuit> CircuitElement<C> {
    /// Dispatch to the visitor method for this element's kind.
    pub fn accept<V>(&self, visitor: &mut V) -> anyhow::Result<()>
    where
        V: Visitor<C> + ?Sized,
    {
        match self {
            CircuitElement::Register(register) => visitor.visit_register(register.qubits()),
            CircuitElement::Operation(operation) => visitor.visit_operation(operation),
        }
    }

    /// One register element per qubit set, in input order.
    pub fn registers<I>(registers: I) -> Vec<Self>
    where
        I: IntoIterator<Item = BTreeSet<C::Qubit>>,
    {
        registers
            .into_iter()
            .map(|qubits| CircuitElement::Register(Register::new(qubits)))
            .collect()
    }

    /// One operation element per operation, in input order.
    pub fn operations<I>(operations: I) -> Vec<Self>
    where
        I: IntoIterator<Item = C::Operation>,
    {
        operations
            .into_iter()
            .map(CircuitElement::Operation)
            .collect()
    }

    pub fn as_register(&self) -> Option<&Register<C::Qubit>> {
        match self {
            CircuitElement::Register(register) => Some(register),
            CircuitElement::Operation(_) => None,
        }
    }

    pub fn as_operation(&self) -> Option<&C::Operation> {
        match self {
            CircuitElement::Operation(operation) => Some(operation),
            CircuitElement::Register(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CircuitElement::Register(_) => "register",
            CircuitElement::Operation(_) => "operation",
        }
    }
}

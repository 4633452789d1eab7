use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a qubit.
///
/// Qubits are totally ordered (line qubits first, then grid, then named) so
/// sets of them iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "cirq_type")]
pub enum Qid {
    LineQubit { x: i64 },
    GridQubit { row: i64, col: i64 },
    NamedQubit { name: String },
}

impl Qid {
    pub fn line(x: i64) -> Self {
        Qid::LineQubit { x }
    }

    /// Line qubits `0..n`.
    pub fn line_range(n: usize) -> Vec<Self> {
        (0..n as i64).map(Qid::line).collect()
    }

    pub fn grid(row: i64, col: i64) -> Self {
        Qid::GridQubit { row, col }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Qid::NamedQubit { name: name.into() }
    }
}

impl fmt::Display for Qid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qid::LineQubit { x } => write!(f, "q({})", x),
            Qid::GridQubit { row, col } => write!(f, "q({}, {})", row, col),
            Qid::NamedQubit { name } => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_by_kind_then_coordinates() {
        let mut qids = vec![
            Qid::named("a"),
            Qid::grid(0, 1),
            Qid::line(3),
            Qid::grid(0, 0),
            Qid::line(1),
        ];
        qids.sort();
        assert_eq!(
            qids,
            vec![
                Qid::line(1),
                Qid::line(3),
                Qid::grid(0, 0),
                Qid::grid(0, 1),
                Qid::named("a"),
            ]
        );
    }

    #[test]
    fn test_serialization_is_tagged() {
        let json = serde_json::to_string(&Qid::line(2)).unwrap();
        assert_eq!(json, r#"{"cirq_type":"LineQubit","x":2}"#);

        let back: Qid = serde_json::from_str(r#"{"cirq_type":"GridQubit","row":1,"col":4}"#).unwrap();
        assert_eq!(back, Qid::grid(1, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Qid::line(0).to_string(), "q(0)");
        assert_eq!(Qid::grid(2, 3).to_string(), "q(2, 3)");
        assert_eq!(Qid::named("anc").to_string(), "anc");
    }
}

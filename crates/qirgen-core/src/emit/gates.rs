//! Gate to QIR intrinsic table.

use crate::error::{Error, Result};
use qirgen_circuit::Gate;

pub const INITIALIZE: &str = "__quantum__rt__initialize";
pub const RESULT_RECORD_OUTPUT: &str = "__quantum__rt__result_record_output";
pub const MEASURE: &str = "__quantum__qis__mz__body";

/// A quantum instruction call: optional rotation angle, then the qubits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intrinsic {
    pub name: &'static str,
    pub angle: Option<f64>,
    pub irreversible: bool,
}

impl Intrinsic {
    fn unitary(name: &'static str) -> Self {
        Self {
            name,
            angle: None,
            irreversible: false,
        }
    }

    fn rotation(name: &'static str, rads: f64) -> Self {
        Self {
            name,
            angle: Some(rads),
            irreversible: false,
        }
    }
}

/// The intrinsic implementing `gate`; `None` for gates that emit nothing.
///
/// Measurements are not covered here since they also allocate a result.
pub fn intrinsic(gate: &Gate) -> Result<Option<Intrinsic>> {
    let intrinsic = match gate {
        Gate::H => Intrinsic::unitary("__quantum__qis__h__body"),
        Gate::X => Intrinsic::unitary("__quantum__qis__x__body"),
        Gate::Y => Intrinsic::unitary("__quantum__qis__y__body"),
        Gate::Z => Intrinsic::unitary("__quantum__qis__z__body"),
        Gate::S => Intrinsic::unitary("__quantum__qis__s__body"),
        Gate::SDagger => Intrinsic::unitary("__quantum__qis__s__adj"),
        Gate::T => Intrinsic::unitary("__quantum__qis__t__body"),
        Gate::TDagger => Intrinsic::unitary("__quantum__qis__t__adj"),
        Gate::Rx { rads } => Intrinsic::rotation("__quantum__qis__rx__body", *rads),
        Gate::Ry { rads } => Intrinsic::rotation("__quantum__qis__ry__body", *rads),
        Gate::Rz { rads } => Intrinsic::rotation("__quantum__qis__rz__body", *rads),
        Gate::Cnot => Intrinsic::unitary("__quantum__qis__cnot__body"),
        Gate::Cz => Intrinsic::unitary("__quantum__qis__cz__body"),
        Gate::Swap => Intrinsic::unitary("__quantum__qis__swap__body"),
        Gate::Ccx => Intrinsic::unitary("__quantum__qis__ccx__body"),
        Gate::Reset => Intrinsic {
            name: "__quantum__qis__reset__body",
            angle: None,
            irreversible: true,
        },
        Gate::Identity => return Ok(None),
        Gate::Measure { .. } => {
            return Err(Error::Conversion(
                "measurements are lowered with a result operand".to_string(),
            ))
        }
        Gate::Opaque { name, .. } => {
            return Err(Error::Conversion(format!(
                "gate '{}' has no QIR lowering",
                name
            )))
        }
    };
    Ok(Some(intrinsic))
}

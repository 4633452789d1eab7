//! Lowering circuits to QIR.
//!
//! [`QirEmitter`] is a [`Visitor`] that writes a base-profile style entry
//! point into the circuit module's IR handle. Qubits and results are
//! statically allocated: qubit indices follow the register's sorted order,
//! result indices follow measurement order.

pub mod gates;

use crate::error::{Error, Result};
use crate::module::CircuitModule;
use crate::traversal::Visitor;
use qirgen_circuit::{Circuit, Operation, Qid};
use qirgen_ir::{Attribute, Builder, FlagValue, ModuleFlag, Type, Value};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterOptions {
    /// Name of the generated entry point function.
    pub entry_point: String,
    /// Emit `__quantum__rt__result_record_output` for every result.
    pub record_output: bool,
    /// Call `__quantum__rt__initialize` at the top of the entry point.
    pub initialize: bool,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            entry_point: "main".to_string(),
            record_output: true,
            initialize: true,
        }
    }
}

/// Lowers one module per traversal; entering a module discards the qubit
/// and result allocation of the previous one.
#[derive(Debug)]
pub struct QirEmitter {
    options: EmitterOptions,
    builder: Option<Builder>,
    qubits: BTreeMap<Qid, u64>,
    results: Vec<String>,
}

impl QirEmitter {
    pub fn new(options: EmitterOptions) -> Self {
        Self {
            options,
            builder: None,
            qubits: BTreeMap::new(),
            results: Vec::new(),
        }
    }

    pub fn options(&self) -> &EmitterOptions {
        &self.options
    }

    /// Measurement keys, indexed by result id.
    pub fn result_keys(&self) -> &[String] {
        &self.results
    }

    fn builder(&self) -> Result<&Builder> {
        self.builder.as_ref().ok_or_else(|| {
            Error::Conversion("no entry point: the module has not been entered".to_string())
        })
    }

    fn qubit(&self, qid: &Qid) -> Result<Value> {
        self.qubits
            .get(qid)
            .map(|&id| Value::Qubit(id))
            .ok_or_else(|| Error::Conversion(format!("qubit {} is not in the register", qid)))
    }

    fn lower_measurement(&mut self, operation: &Operation, key: &str) -> Result<()> {
        let qid = operation.qubits().first().ok_or_else(|| {
            Error::Conversion(format!("measurement '{}' has no target qubit", key))
        })?;
        let qubit = self.qubit(qid)?;
        let result = Value::Result(self.results.len() as u64);

        let builder = self.builder()?;
        builder.module().declare(
            gates::MEASURE,
            &[Type::QubitPtr, Type::ResultPtr],
            vec![Attribute::flag("irreversible")],
        )?;
        builder.call(gates::MEASURE, &[qubit, result])?;
        self.results.push(key.to_string());
        Ok(())
    }

    fn lower_gate(&self, operation: &Operation) -> Result<()> {
        let Some(intrinsic) = gates::intrinsic(operation.gate())? else {
            trace!(gate = %operation.gate(), "gate emits no instruction");
            return Ok(());
        };

        let mut args = Vec::with_capacity(operation.qubits().len() + 1);
        if let Some(angle) = intrinsic.angle {
            args.push(Value::Double(angle));
        }
        for qid in operation.qubits() {
            args.push(self.qubit(qid)?);
        }

        let builder = self.builder()?;
        if intrinsic.irreversible {
            let params: Vec<Type> = args.iter().map(Value::ty).collect();
            builder.module().declare(
                intrinsic.name,
                &params,
                vec![Attribute::flag("irreversible")],
            )?;
        }
        builder.call(intrinsic.name, &args)?;
        Ok(())
    }
}

impl Default for QirEmitter {
    fn default() -> Self {
        Self::new(EmitterOptions::default())
    }
}

impl Visitor<Circuit> for QirEmitter {
    fn visit_circuit_module(&mut self, module: &CircuitModule<Circuit>) -> anyhow::Result<()> {
        self.builder = None;
        self.qubits.clear();
        self.results.clear();

        let ir = module.module();
        let entry = self.options.entry_point.as_str();

        ir.add_flag(ModuleFlag::new(1, "qir_major_version", FlagValue::I32(1)));
        ir.add_flag(ModuleFlag::new(7, "qir_minor_version", FlagValue::I32(0)));
        ir.add_flag(ModuleFlag::new(1, "dynamic_qubit_management", FlagValue::Bool(false)));
        ir.add_flag(ModuleFlag::new(1, "dynamic_result_management", FlagValue::Bool(false)));

        ir.add_function(
            entry,
            vec![
                Attribute::flag("entry_point"),
                Attribute::flag("output_labeling_schema"),
                Attribute::pair("qir_profiles", "custom"),
                Attribute::pair("required_num_qubits", module.num_qubits()),
                Attribute::pair("required_num_results", 0),
            ],
        )?;

        let mut builder = Builder::new(ir);
        builder.position_at_end(entry)?;
        if self.options.initialize {
            builder.call(gates::INITIALIZE, &[Value::NullI8Ptr])?;
        }
        self.builder = Some(builder);

        debug!(module = %module.name(), entry_point = entry, "created entry point");
        Ok(())
    }

    fn visit_register(&mut self, qubits: &BTreeSet<Qid>) -> anyhow::Result<()> {
        for (index, qid) in qubits.iter().enumerate() {
            self.qubits.insert(qid.clone(), index as u64);
        }
        Ok(())
    }

    fn visit_operation(&mut self, operation: &Operation) -> anyhow::Result<()> {
        trace!(operation = %operation, "lowering operation");
        match operation.gate() {
            qirgen_circuit::Gate::Measure { key } => self.lower_measurement(operation, key)?,
            _ => self.lower_gate(operation)?,
        }
        Ok(())
    }

    fn record_output(&mut self, _module: &CircuitModule<Circuit>) -> anyhow::Result<()> {
        let builder = self.builder()?;
        builder.module().set_function_attribute(
            &self.options.entry_point,
            Attribute::pair("required_num_results", self.results.len()),
        )?;

        if self.options.record_output {
            for id in 0..self.results.len() as u64 {
                builder.call(
                    gates::RESULT_RECORD_OUTPUT,
                    &[Value::Result(id), Value::NullI8Ptr],
                )?;
            }
        }
        Ok(())
    }

    fn finalize(&mut self) -> anyhow::Result<()> {
        self.builder()?.ret_void()?;
        Ok(())
    }
}

use anyhow::bail;
use qirgen_circuit::{Circuit, Gate, Operation, Qid};
use qirgen_core::{CircuitElement, CircuitModule, Error, ModuleTarget, Phase, Visitor};
use qirgen_ir::{Context, Module};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Module(String),
    Register(Vec<Qid>),
    Operation(String),
    RecordOutput,
    Finalize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FailAt {
    Module,
    Operation(usize),
    RecordOutput,
    Finalize,
}

#[derive(Default)]
struct RecordingVisitor {
    events: Vec<Event>,
    operations_seen: usize,
    fail_at: Option<FailAt>,
}

impl RecordingVisitor {
    fn failing_at(fail_at: FailAt) -> Self {
        Self {
            fail_at: Some(fail_at),
            ..Self::default()
        }
    }
}

impl Visitor<Circuit> for RecordingVisitor {
    fn visit_circuit_module(&mut self, module: &CircuitModule<Circuit>) -> anyhow::Result<()> {
        if self.fail_at == Some(FailAt::Module) {
            bail!("refusing module");
        }
        self.events.push(Event::Module(module.name().to_string()));
        Ok(())
    }

    fn visit_register(&mut self, qubits: &BTreeSet<Qid>) -> anyhow::Result<()> {
        self.events.push(Event::Register(qubits.iter().cloned().collect()));
        Ok(())
    }

    fn visit_operation(&mut self, operation: &Operation) -> anyhow::Result<()> {
        if self.fail_at == Some(FailAt::Operation(self.operations_seen)) {
            bail!("refusing {}", operation);
        }
        self.operations_seen += 1;
        self.events.push(Event::Operation(operation.to_string()));
        Ok(())
    }

    fn record_output(&mut self, _module: &CircuitModule<Circuit>) -> anyhow::Result<()> {
        if self.fail_at == Some(FailAt::RecordOutput) {
            bail!("refusing output");
        }
        self.events.push(Event::RecordOutput);
        Ok(())
    }

    fn finalize(&mut self) -> anyhow::Result<()> {
        if self.fail_at == Some(FailAt::Finalize) {
            bail!("refusing finalize");
        }
        self.events.push(Event::Finalize);
        Ok(())
    }
}

fn sample_circuit() -> Circuit {
    let q = Qid::line_range(3);
    let mut circuit = Circuit::new();
    circuit.append(Gate::Cnot.on([q[0].clone(), q[1].clone()]).unwrap());
    circuit.append(Gate::measure("a").on([q[0].clone()]).unwrap());
    circuit.append(Gate::H.on([q[0].clone()]).unwrap());
    circuit.append(Gate::H.on([q[1].clone()]).unwrap());
    circuit.append(Gate::H.on([q[2].clone()]).unwrap());
    circuit
}

#[test]
fn test_elements_follow_circuit_order() {
    let circuit = sample_circuit();
    let module = CircuitModule::from_circuit(&circuit).unwrap();
    let elements = module.elements();

    assert_eq!(elements.len(), 1 + circuit.num_operations());

    let register = elements[0].as_register().expect("first element is the register");
    assert_eq!(register.qubits(), &circuit.all_qubits());

    let ops: Vec<&Operation> = elements[1..]
        .iter()
        .map(|e| e.as_operation().expect("remaining elements are operations"))
        .collect();
    assert_eq!(ops, circuit.all_operations().collect::<Vec<_>>());
}

#[test]
fn test_num_qubits_is_register_size() {
    let circuit = sample_circuit();
    let module = CircuitModule::from_circuit(&circuit).unwrap();
    assert_eq!(module.num_qubits(), 3);
    assert_eq!(module.num_qubits(), circuit.all_qubits().len());
}

#[test]
fn test_fresh_module_is_named_by_content() {
    let circuit = sample_circuit();
    let module = CircuitModule::from_circuit(&circuit).unwrap();
    let id = qirgen_core::generate_module_id(&circuit).unwrap();

    assert_eq!(module.name(), id);
    assert_eq!(module.module().source_filename(), id);
}

#[test]
fn test_existing_module_name_wins() {
    let circuit = sample_circuit();
    let ctx = Context::new();
    let handle = Module::new(&ctx, "my_module");

    let module = CircuitModule::from_circuit_with_module(&circuit, handle.clone());
    assert_eq!(module.name(), "my_module");
    assert!(module.module().same_as(&handle));
    assert!(module.module().context().same_as(&ctx));
}

#[test]
fn test_existing_module_skips_id_generation() {
    // Opaque gates have no canonical form, so a fresh module cannot be named.
    let circuit: Circuit = [Gate::Opaque {
        name: "oracle".into(),
        num_qubits: 1,
    }
    .on([Qid::line(0)])
    .unwrap()]
    .into_iter()
    .collect();

    assert!(CircuitModule::from_circuit(&circuit).is_err());

    let handle = Module::new(&Context::new(), "named");
    let module = CircuitModule::build(&circuit, ModuleTarget::Existing(handle)).unwrap();
    assert_eq!(module.name(), "named");
    assert_eq!(module.elements().len(), 2);
}

#[test]
fn test_building_does_not_mutate_circuit() {
    let circuit = sample_circuit();
    let before = circuit.clone();
    let _ = CircuitModule::from_circuit(&circuit).unwrap();
    assert_eq!(circuit, before);
}

#[test]
fn test_traversal_visits_everything_in_order() {
    let circuit = sample_circuit();
    let module = CircuitModule::from_circuit(&circuit).unwrap();
    let mut visitor = RecordingVisitor::default();
    module.accept(&mut visitor).unwrap();

    let mut expected = vec![
        Event::Module(module.name().to_string()),
        Event::Register(Qid::line_range(3)),
    ];
    expected.extend(
        circuit
            .all_operations()
            .map(|op| Event::Operation(op.to_string())),
    );
    expected.push(Event::RecordOutput);
    expected.push(Event::Finalize);

    assert_eq!(visitor.events, expected);
}

#[test]
fn test_empty_circuit_still_runs_all_phases() {
    let circuit = Circuit::new();
    let module = CircuitModule::from_circuit(&circuit).unwrap();

    assert_eq!(module.elements().len(), 1);
    assert!(module.elements()[0].as_register().unwrap().is_empty());
    assert_eq!(module.num_qubits(), 0);

    let mut visitor = RecordingVisitor::default();
    module.accept(&mut visitor).unwrap();
    assert_eq!(
        visitor.events,
        vec![
            Event::Module("circuit-070c925".to_string()),
            Event::Register(vec![]),
            Event::RecordOutput,
            Event::Finalize,
        ]
    );
}

#[test]
fn test_failure_on_module_enter_stops_traversal() {
    let module = CircuitModule::from_circuit(&sample_circuit()).unwrap();
    let mut visitor = RecordingVisitor::failing_at(FailAt::Module);

    let err = module.accept(&mut visitor).unwrap_err();
    assert_eq!(err.phase(), Some(Phase::ModuleEnter));
    assert!(visitor.events.is_empty());
}

#[test]
fn test_failure_on_operation_stops_traversal() {
    let module = CircuitModule::from_circuit(&sample_circuit()).unwrap();
    let mut visitor = RecordingVisitor::failing_at(FailAt::Operation(2));

    let err = module.accept(&mut visitor).unwrap_err();
    // element 0 is the register, so operation 2 is element 3
    assert_eq!(err.phase(), Some(Phase::Element(3)));
    assert!(err.to_string().contains("refusing"));
    assert_eq!(visitor.events.len(), 4);
    assert!(!visitor.events.contains(&Event::RecordOutput));
    assert!(!visitor.events.contains(&Event::Finalize));
}

#[test]
fn test_failure_on_record_output_skips_finalize() {
    let module = CircuitModule::from_circuit(&sample_circuit()).unwrap();
    let mut visitor = RecordingVisitor::failing_at(FailAt::RecordOutput);

    let err = module.accept(&mut visitor).unwrap_err();
    assert!(matches!(
        err,
        Error::Visitor {
            phase: Phase::RecordOutput,
            ..
        }
    ));
    // H(q(2)) slides into the first moment, so H(q(0)) is visited last
    assert_eq!(visitor.events.last(), Some(&Event::Operation("H(q(0))".to_string())));
}

#[test]
fn test_failure_on_finalize_is_reported() {
    let module = CircuitModule::from_circuit(&sample_circuit()).unwrap();
    let mut visitor = RecordingVisitor::failing_at(FailAt::Finalize);

    let err = module.accept(&mut visitor).unwrap_err();
    assert_eq!(err.phase(), Some(Phase::Finalize));
    assert_eq!(visitor.events.last(), Some(&Event::RecordOutput));
}

#[test]
fn test_module_can_be_traversed_by_independent_visitors() {
    let module = CircuitModule::from_circuit(&sample_circuit()).unwrap();

    let mut first = RecordingVisitor::default();
    let mut second = RecordingVisitor::default();
    module.accept(&mut first).unwrap();
    module.accept(&mut second).unwrap();
    assert_eq!(first.events, second.events);
}

#[test]
fn test_module_from_prebuilt_elements() {
    let q = Qid::line(0);
    let elements = {
        let mut e = CircuitElement::<Circuit>::registers([BTreeSet::from([q.clone()])]);
        e.extend(CircuitElement::operations([Gate::X.on([q]).unwrap()]));
        e
    };
    let handle = Module::new(&Context::new(), "manual");
    let module = CircuitModule::new("manual".to_string(), handle, 1, elements);

    let mut visitor = RecordingVisitor::default();
    module.accept(&mut visitor).unwrap();
    assert_eq!(visitor.events[2], Event::Operation("X(q(0))".to_string()));
}

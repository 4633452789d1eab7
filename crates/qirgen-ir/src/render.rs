//! LLVM textual rendering of a module.

use crate::module::{join_types, Attribute, FlagValue, Instruction, ModuleData};
use std::fmt::{self, Write};

pub(crate) fn render_module(data: &ModuleData) -> String {
    ModuleText(data).to_string()
}

struct ModuleText<'a>(&'a ModuleData);

impl fmt::Display for ModuleText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0;
        let groups = attribute_groups(data);
        let group_of = |attrs: &[Attribute]| groups.iter().position(|g| g.as_slice() == attrs);

        writeln!(f, "; ModuleID = '{}'", data.source_filename)?;
        writeln!(f, "source_filename = \"{}\"", data.source_filename)?;
        writeln!(f)?;
        writeln!(f, "%Qubit = type opaque")?;
        writeln!(f, "%Result = type opaque")?;

        for function in &data.functions {
            writeln!(f)?;
            write!(f, "define void @{}()", function.name)?;
            if let Some(group) = group_of(&function.attributes) {
                write!(f, " #{}", group)?;
            }
            writeln!(f, " {{")?;
            writeln!(f, "entry:")?;
            for instruction in &function.body {
                writeln!(f, "  {}", instruction)?;
            }
            writeln!(f, "}}")?;
        }

        for (name, decl) in &data.declarations {
            writeln!(f)?;
            write!(f, "declare void @{}({})", name, join_types(&decl.params))?;
            if let Some(group) = group_of(&decl.attributes) {
                write!(f, " #{}", group)?;
            }
            writeln!(f)?;
        }

        if !groups.is_empty() {
            writeln!(f)?;
            for (i, attrs) in groups.iter().enumerate() {
                writeln!(f, "attributes #{} = {{ {} }}", i, render_attributes(attrs))?;
            }
        }

        if !data.flags.is_empty() {
            let refs: Vec<String> = (0..data.flags.len()).map(|i| format!("!{}", i)).collect();
            writeln!(f)?;
            writeln!(f, "!llvm.module.flags = !{{{}}}", refs.join(", "))?;
            writeln!(f)?;
            for (i, flag) in data.flags.iter().enumerate() {
                let value = match flag.value {
                    FlagValue::I32(v) => format!("i32 {}", v),
                    FlagValue::Bool(b) => format!("i1 {}", b),
                };
                writeln!(
                    f,
                    "!{} = !{{i32 {}, !\"{}\", {}}}",
                    i, flag.behavior, flag.key, value
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Call { callee, args } => {
                let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                write!(f, "call void @{}({})", callee, args.join(", "))
            }
            Instruction::RetVoid => f.write_str("ret void"),
        }
    }
}

/// Distinct non-empty attribute sets, functions first, in order of appearance.
fn attribute_groups(data: &ModuleData) -> Vec<Vec<Attribute>> {
    let mut groups: Vec<Vec<Attribute>> = Vec::new();
    let sets = data
        .functions
        .iter()
        .map(|f| &f.attributes)
        .chain(data.declarations.values().map(|d| &d.attributes));
    for attrs in sets {
        if !attrs.is_empty() && !groups.contains(attrs) {
            groups.push(attrs.clone());
        }
    }
    groups
}

fn render_attributes(attrs: &[Attribute]) -> String {
    let mut out = String::new();
    for (i, attr) in attrs.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "\"{}\"", attr.key);
        if let Some(value) = &attr.value {
            let _ = write!(out, "=\"{}\"", value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::{Attribute, Builder, Context, FlagValue, Module, ModuleFlag, Type, Value};

    #[test]
    fn test_empty_module() {
        let module = Module::new(&Context::new(), "circuit-0000000");
        assert_eq!(
            module.ir(),
            "; ModuleID = 'circuit-0000000'\n\
             source_filename = \"circuit-0000000\"\n\
             \n\
             %Qubit = type opaque\n\
             %Result = type opaque\n"
        );
    }

    #[test]
    fn test_full_module_layout() {
        let module = Module::new(&Context::new(), "bell");
        module
            .add_function(
                "main",
                vec![Attribute::flag("entry_point"), Attribute::pair("required_num_qubits", 2)],
            )
            .unwrap();
        module
            .declare(
                "__quantum__qis__mz__body",
                &[Type::QubitPtr, Type::ResultPtr],
                vec![Attribute::flag("irreversible")],
            )
            .unwrap();
        module.add_flag(ModuleFlag::new(1, "qir_major_version", FlagValue::I32(1)));
        module.add_flag(ModuleFlag::new(1, "dynamic_qubit_management", FlagValue::Bool(false)));

        let mut builder = Builder::new(&module);
        builder.position_at_end("main").unwrap();
        builder.call("__quantum__qis__h__body", &[Value::Qubit(0)]).unwrap();
        builder
            .call("__quantum__qis__mz__body", &[Value::Qubit(1), Value::Result(0)])
            .unwrap();
        builder.ret_void().unwrap();

        let expected = r#"; ModuleID = 'bell'
source_filename = "bell"

%Qubit = type opaque
%Result = type opaque

define void @main() #0 {
entry:
  call void @__quantum__qis__h__body(%Qubit* null)
  call void @__quantum__qis__mz__body(%Qubit* inttoptr (i64 1 to %Qubit*), %Result* null)
  ret void
}

declare void @__quantum__qis__mz__body(%Qubit*, %Result*) #1

declare void @__quantum__qis__h__body(%Qubit*)

attributes #0 = { "entry_point" "required_num_qubits"="2" }
attributes #1 = { "irreversible" }

!llvm.module.flags = !{!0, !1}

!0 = !{i32 1, !"qir_major_version", i32 1}
!1 = !{i32 1, !"dynamic_qubit_management", i1 false}
"#;
        assert_eq!(module.ir(), expected);
    }
}

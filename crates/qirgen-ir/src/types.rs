use std::fmt;

/// The handful of LLVM types QIR programs need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Void,
    Double,
    I8Ptr,
    QubitPtr,
    ResultPtr,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Type::Void => "void",
            Type::Double => "double",
            Type::I8Ptr => "i8*",
            Type::QubitPtr => "%Qubit*",
            Type::ResultPtr => "%Result*",
        };
        f.write_str(s)
    }
}

/// A call operand.
///
/// Qubits and results are statically allocated: their id is encoded as an
/// `inttoptr` constant, with id 0 rendered as `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Qubit(u64),
    Result(u64),
    Double(f64),
    NullI8Ptr,
}

impl Value {
    pub fn ty(&self) -> Type {
        match self {
            Value::Qubit(_) => Type::QubitPtr,
            Value::Result(_) => Type::ResultPtr,
            Value::Double(_) => Type::Double,
            Value::NullI8Ptr => Type::I8Ptr,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Qubit(id) | Value::Result(id) => {
                let ty = self.ty();
                if *id == 0 {
                    write!(f, "{} null", ty)
                } else {
                    write!(f, "{} inttoptr (i64 {} to {})", ty, id, ty)
                }
            }
            Value::Double(v) => write!(f, "double {}", format_double(*v)),
            Value::NullI8Ptr => write!(f, "i8* null"),
        }
    }
}

/// Format a double the way LLVM prints constants: `%e` notation when it
/// round-trips exactly, otherwise the 64-bit hex pattern.
fn format_double(v: f64) -> String {
    let sci = format!("{:.6e}", v);
    if sci.parse::<f64>().ok() == Some(v) {
        if let Some((mantissa, exp)) = sci.split_once('e') {
            if let Ok(exp) = exp.parse::<i32>() {
                let sign = if exp < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exp.abs());
            }
        }
    }
    format!("0x{:016X}", v.to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Qubit(0), "%Qubit* null")]
    #[case(Value::Qubit(2), "%Qubit* inttoptr (i64 2 to %Qubit*)")]
    #[case(Value::Result(0), "%Result* null")]
    #[case(Value::Result(1), "%Result* inttoptr (i64 1 to %Result*)")]
    #[case(Value::NullI8Ptr, "i8* null")]
    #[case(Value::Double(0.5), "double 5.000000e-01")]
    #[case(Value::Double(-2.0), "double -2.000000e+00")]
    #[case(Value::Double(0.0), "double 0.000000e+00")]
    #[case(Value::Double(std::f64::consts::PI), "double 0x400921FB54442D18")]
    fn test_value_rendering(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }
}

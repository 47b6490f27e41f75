//! Bytecode instruction set for the Reckon VM.
//!
//! The VM is stack-based: instructions push tagged operands, apply
//! operators, or call builtin functions. Instructions are produced once
//! by the compiler and are immutable.

/// A tagged value on the VM's operand stack.
///
/// Variable references stay unresolved until the moment an instruction
/// consumes them, so `x = x + 1` reads the pre-assignment value and
/// writes the post-assignment one.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// A numeric constant.
    Number(f64),
    /// A reference into the VM's variable store.
    Variable(String),
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
        }
    }
}

/// A single bytecode instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Push a constant or variable reference onto the operand stack.
    Push(Operand),
    /// Pop two operands, apply the operator, push the result.
    Operate(char),
    /// Pop the named function's arity worth of operands, push its result.
    Call(String),
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Push(operand) => write!(f, "PUSH {operand}"),
            Self::Operate(symbol) => write!(f, "OPERATE {symbol}"),
            Self::Call(name) => write!(f, "CALL {name}"),
        }
    }
}

//! Stack VM for compiled expressions.
//!
//! Executes instruction lists from the [`crate::Compiler`]. The operand
//! stack holds tagged operands and variable references resolve only at
//! the moment an instruction consumes them; the variable store persists
//! across executions, so a session can accumulate state one expression
//! at a time.

use std::collections::HashMap;

use reckon_foundation::{Error, Result};

use crate::functions;
use crate::instruction::{Instruction, Operand};

/// The virtual machine: an operand stack plus a persistent variable map.
#[derive(Debug, Default)]
pub struct Vm {
    stack: Vec<Operand>,
    variables: HashMap<String, f64>,
}

impl Vm {
    /// Creates a VM with `x` seeded to zero.
    #[must_use]
    pub fn new() -> Self {
        let mut vm = Self::default();
        vm.reset();
        vm
    }

    /// Clears the stack and all variables, then reseeds `x = 0`.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.variables.clear();
        self.variables.insert("x".to_string(), 0.0);
    }

    /// Sets a variable directly, without going through bytecode.
    pub fn set_var(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Reads a variable; unset names read as zero.
    #[must_use]
    pub fn get_var(&self, name: &str) -> f64 {
        self.variables.get(name).copied().unwrap_or(0.0)
    }

    /// Returns the variable store for inspection.
    #[must_use]
    pub fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    /// Executes an instruction list and returns the resolved top of
    /// stack.
    ///
    /// The stack is cleared before execution; the variable store is not,
    /// which is what makes assignments visible to later executions.
    pub fn execute(&mut self, instructions: &[Instruction]) -> Result<f64> {
        self.stack.clear();

        for instruction in instructions {
            match instruction {
                Instruction::Push(operand) => self.stack.push(operand.clone()),
                Instruction::Operate(symbol) => self.operate(*symbol)?,
                Instruction::Call(name) => self.call(name)?,
            }
        }

        let top = self
            .stack
            .pop()
            .ok_or_else(|| Error::stack_underflow(1, 0))?;
        Ok(self.resolve(&top))
    }

    /// Resolves an operand to its numeric value.
    fn resolve(&self, operand: &Operand) -> f64 {
        match operand {
            Operand::Number(value) => *value,
            Operand::Variable(name) => self.get_var(name),
        }
    }

    fn operate(&mut self, symbol: char) -> Result<()> {
        if self.stack.len() < 2 {
            return Err(Error::stack_underflow(2, self.stack.len()));
        }
        let rhs = self.stack.pop().expect("checked above");
        let lhs = self.stack.pop().expect("checked above");
        let right = self.resolve(&rhs);

        if symbol == '=' {
            let Operand::Variable(name) = lhs else {
                return Err(Error::invalid_assignment());
            };
            self.variables.insert(name, right);
            self.stack.push(Operand::Number(right));
            return Ok(());
        }

        let left = self.resolve(&lhs);
        let value = match symbol {
            '+' => left + right,
            '-' => left - right,
            '*' => left * right,
            '/' => {
                if right == 0.0 {
                    return Err(Error::division_by_zero());
                }
                left / right
            }
            '%' => {
                // Modulo truncates both operands to integers.
                let divisor = right as i64;
                if divisor == 0 {
                    return Err(Error::division_by_zero());
                }
                ((left as i64) % divisor) as f64
            }
            '^' => left.powf(right),
            other => return Err(Error::unknown_operator(other)),
        };
        self.stack.push(Operand::Number(value));
        Ok(())
    }

    fn call(&mut self, name: &str) -> Result<()> {
        let def = functions::get(name).ok_or_else(|| Error::unknown_function(name))?;
        if self.stack.len() < def.arity {
            return Err(Error::stack_underflow(def.arity, self.stack.len()));
        }

        // Popping yields arguments right-to-left; restore call order.
        let mut values = Vec::with_capacity(def.arity);
        for _ in 0..def.arity {
            let operand = self.stack.pop().expect("checked above");
            values.push(self.resolve(&operand));
        }
        values.reverse();

        self.stack.push(Operand::Number((def.eval)(&values)));
        Ok(())
    }
}

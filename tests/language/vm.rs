//! Integration tests for the compiler and VM
//!
//! Tests bytecode compilation and execution through the public API.

use reckon_language::{Compiler, Instruction, Operand, Vm};

fn compile(input: &str) -> Vec<Instruction> {
    let mut compiler = Compiler::new();
    let instructions = compiler.compile(input);
    assert!(
        compiler.is_valid(),
        "unexpected diagnostics for {input:?}: {:?}",
        compiler.diagnostics().entries()
    );
    instructions
}

fn run(vm: &mut Vm, input: &str) -> f64 {
    let instructions = compile(input);
    vm.execute(&instructions).expect("execution failed")
}

// =============================================================================
// Compilation
// =============================================================================

#[test]
fn compile_number_pushes() {
    assert_eq!(
        compile("42"),
        vec![Instruction::Push(Operand::Number(42.0))]
    );
}

#[test]
fn compile_respects_precedence() {
    assert_eq!(
        compile("1+2*3"),
        vec![
            Instruction::Push(Operand::Number(1.0)),
            Instruction::Push(Operand::Number(2.0)),
            Instruction::Push(Operand::Number(3.0)),
            Instruction::Operate('*'),
            Instruction::Operate('+'),
        ]
    );
}

#[test]
fn compile_function_arguments_left_to_right() {
    assert_eq!(
        compile("atan2(0, -1)"),
        vec![
            Instruction::Push(Operand::Number(0.0)),
            Instruction::Push(Operand::Number(-1.0)),
            Instruction::Call("atan2".into()),
        ]
    );
}

#[test]
fn compile_instruction_display() {
    let listing: Vec<String> = compile("x = x + 1").iter().map(ToString::to_string).collect();
    assert_eq!(listing, vec![
        "PUSH x",
        "PUSH x",
        "PUSH 1",
        "OPERATE +",
        "OPERATE =",
    ]);
}

// =============================================================================
// Execution
// =============================================================================

#[test]
fn execute_matches_direct_evaluation() {
    use reckon_language::Calculator;

    let cases = [
        "1+2*3",
        "(1+2)*3",
        "2^3^2",
        "7.9 % 3.9",
        "max(1, max(1, 2))",
        "min(max(1, 5), 3)",
        "pow(2, 3) + sqrt(9)",
        "TAU / PI",
        "0xFF + -0x0F",
        "1+1; 2*3",
    ];

    let mut calculator = Calculator::new();
    let mut compiler = Compiler::new();
    let mut vm = Vm::new();

    for input in cases {
        let direct = calculator.evaluate(input);
        assert!(calculator.is_valid(), "direct path rejected {input:?}");

        let instructions = compiler.compile(input);
        assert!(compiler.is_valid(), "compiler rejected {input:?}");
        let executed = vm.execute(&instructions).expect("execution failed");

        assert_eq!(direct.to_bits(), executed.to_bits(), "for {input:?}");
    }
}

#[test]
fn session_accumulates_state() {
    let mut vm = Vm::new();
    assert_eq!(run(&mut vm, "x = x + 1"), 1.0);
    assert_eq!(run(&mut vm, "x = x + 1"), 2.0);
    assert_eq!(run(&mut vm, "x * 10"), 20.0);
}

#[test]
fn assignment_chains_through_statements() {
    let mut vm = Vm::new();
    assert_eq!(run(&mut vm, "a = 2; b = a * 3; a + b"), 8.0);
    assert_eq!(vm.get_var("a"), 2.0);
    assert_eq!(vm.get_var("b"), 6.0);
}

#[test]
fn negated_variable() {
    let mut vm = Vm::new();
    vm.set_var("x", 3.0);
    assert_eq!(run(&mut vm, "-x"), -3.0);
    assert_eq!(run(&mut vm, "-x + x"), 0.0);
}

#[test]
fn reset_restores_initial_state() {
    let mut vm = Vm::new();
    run(&mut vm, "x = 100; y = 200");
    vm.reset();
    assert_eq!(vm.get_var("x"), 0.0);
    assert_eq!(run(&mut vm, "x + y"), 0.0);
}

#[test]
fn runtime_errors_do_not_poison_the_session() {
    let mut vm = Vm::new();
    run(&mut vm, "x = 9");
    let mut compiler = Compiler::new();
    let instructions = compiler.compile("1 / 0");
    assert!(vm.execute(&instructions).is_err());
    assert_eq!(run(&mut vm, "x"), 9.0);
}

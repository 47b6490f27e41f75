//! The main REPL implementation.

use std::io::{self, Write};

use reckon_foundation::{Result, format_precise};
use reckon_language::{Compiler, Scanner, Vm, annotate};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// The interactive REPL.
///
/// Evaluation runs through the bytecode path so variables assigned in one
/// line stay visible to the next.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The bytecode compiler, reused across lines.
    compiler: Compiler,

    /// The bytecode VM holding session variables.
    vm: Vm,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            compiler: Compiler::new(),
            vm: Vm::new(),
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session VM.
    #[must_use]
    pub const fn vm(&self) -> &Vm {
        &self.vm
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            let prompt = self.prompt.clone();
            match self.editor.read_line(&prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    if !self.handle_line(trimmed) {
                        break;
                    }
                }
                ReadResult::Interrupted => {
                    println!();
                }
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one line of input. Returns false to exit the loop.
    fn handle_line(&mut self, input: &str) -> bool {
        match input {
            "exit" | "quit" => return false,
            ":reset" => {
                self.vm.reset();
                println!("Session reset.");
            }
            ":vars" => self.print_vars(),
            _ if input.starts_with(":bytecode") => {
                self.print_bytecode(input.trim_start_matches(":bytecode").trim());
            }
            _ if input.starts_with(":tokens") => {
                self.print_tokens(input.trim_start_matches(":tokens").trim());
            }
            _ => self.eval_and_print(input),
        }
        true
    }

    /// Evaluates an expression line and prints the result or diagnostics.
    pub fn eval_and_print(&mut self, input: &str) {
        let instructions = self.compiler.compile(input);
        if !self.compiler.is_valid() {
            for diagnostic in self.compiler.diagnostics() {
                eprintln!("\x1b[31m{diagnostic}\x1b[0m");
            }
            return;
        }

        match self.vm.execute(&instructions) {
            Ok(value) => println!("\x1b[1m{}\x1b[0m", format_precise(value)),
            Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
        }
    }

    /// Prints the session variables in sorted order.
    fn print_vars(&self) {
        let mut names: Vec<&String> = self.vm.variables().keys().collect();
        names.sort();
        for name in names {
            println!("{name} = {}", format_precise(self.vm.get_var(name)));
        }
    }

    /// Prints the compiled bytecode for an expression without running it.
    fn print_bytecode(&mut self, input: &str) {
        let instructions = self.compiler.compile(input);
        if !self.compiler.is_valid() {
            for diagnostic in self.compiler.diagnostics() {
                eprintln!("\x1b[31m{diagnostic}\x1b[0m");
            }
            return;
        }
        for instruction in &instructions {
            println!("{instruction}");
        }
    }

    /// Prints the annotated token stream for an expression.
    #[allow(clippy::unused_self)]
    fn print_tokens(&self, input: &str) {
        let mut tokens = Scanner::scan(input);
        annotate(&mut tokens);
        for token in &tokens {
            match token.pair {
                Some(pair) => println!("{token} depth={} pair={pair}", token.depth),
                None => println!("{token} depth={}", token.depth),
            }
        }
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mReckon\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!("Type expressions to evaluate. Use Ctrl+D or 'exit' to quit.");
        println!("Commands: :reset  :vars  :bytecode EXPR  :tokens EXPR\n");

        let _ = io::stdout().flush();
    }
}

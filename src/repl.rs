use std::process::ExitCode;

use matlang::{
    error::Error,
    interpreter::evaluator::{core::Context, output::Stdout},
    parse,
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::warn;

const PROMPT: &str = "matlang> ";
const CONTINUATION_PROMPT: &str = "     ... ";

/// Runs an interactive session on stdin.
///
/// Input lines accumulate until one ends with `;`, then the buffered text is
/// parsed and evaluated. All entries of a session share one context, so
/// bindings made by one entry are visible to the next. Errors are reported
/// and the session goes on.
pub fn run() -> ExitCode {
    print_banner();

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the interactive session: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut stdout = Stdout;
    let mut context = Context::new(&mut stdout);
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { PROMPT } else { CONTINUATION_PROMPT };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if buffer.is_empty() {
                    if matches!(trimmed.to_lowercase().as_str(), "exit" | "quit") {
                        break;
                    }
                    if trimmed.is_empty() {
                        continue;
                    }
                }

                if let Err(e) = editor.add_history_entry(trimmed) {
                    warn!(%e, "could not record history entry");
                }
                buffer.push_str(&line);
                buffer.push('\n');

                if trimmed.ends_with(';') {
                    let source = std::mem::take(&mut buffer);
                    if let Err(e) = evaluate(&mut context, &source) {
                        eprintln!("{e}");
                    }
                }
            },
            Err(ReadlineError::Interrupted) => {
                buffer.clear();
            },
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}

fn evaluate(context: &mut Context<'_>, source: &str) -> Result<(), Error> {
    let program = parse(source)?;
    context.eval_program(&program)?;
    Ok(())
}

fn print_banner() {
    println!("matlang {}, matrix arithmetic", env!("CARGO_PKG_VERSION"));
    println!("Statements end with ';'. Type 'exit' to quit.");
    println!("Example: matrix A = [[1, 2], [3, 4]]; print(dot(A, A));");
}

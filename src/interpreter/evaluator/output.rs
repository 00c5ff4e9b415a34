/// A sink for the lines a program prints.
///
/// The evaluator calls [`PrintChannel::emit`] once per print statement and
/// once per declaration or assignment, in program order. It never waits for
/// or inspects the result of an emission.
pub trait PrintChannel {
    /// Receives one line of output, without a trailing newline. The line may
    /// itself contain newlines when a matrix is printed.
    fn emit(&mut self, line: &str);
}

/// Writes every line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl PrintChannel for Stdout {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects lines in memory.
///
/// ```
/// use matlang::interpreter::evaluator::output::PrintChannel;
///
/// let mut lines: Vec<String> = Vec::new();
/// lines.emit("hello");
/// assert_eq!(lines, vec!["hello".to_string()]);
/// ```
impl PrintChannel for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{BufRead, Write};

/// Source of user-entered lines.
///
/// `Ok(None)` means the input is exhausted.
pub trait LineInput {
    /// Read the next line without its trailing line terminator.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Interactive input backed by a `rustyline` editor.
///
/// When standard input is not a terminal, rustyline falls back to reading plain
/// lines from it, so piped input works too. The editor is set up on the first
/// read, so a terminal failure surfaces as an error of that read.
#[derive(Default)]
pub struct EditorInput {
    editor: Option<DefaultEditor>,
}

impl EditorInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineInput for EditorInput {
    fn read_line(&mut self) -> Result<Option<String>> {
        let editor = match self.editor.take() {
            Some(editor) => editor,
            None => DefaultEditor::new()?,
        };
        let editor = self.editor.insert(editor);
        // Prompts are written by the caller on their own line.
        match editor.readline("") {
            Ok(line) => {
                editor.add_history_entry(line.as_str())?;
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => Err(anyhow::anyhow!("input interrupted")),
            Err(err) => Err(err.into()),
        }
    }
}

/// Line input over any buffered reader, e.g. a `Cursor` in tests.
pub struct BufReadInput<R> {
    reader: R,
}

impl<R: BufRead> BufReadInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineInput for BufReadInput<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// The user's side of a quote session: where answers come from and where
/// prompts and results go.
pub struct Console<'a> {
    input: &'a mut dyn LineInput,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn LineInput, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Write one line and flush it so it is visible before the next read.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// Show `prompt` and read the answer.
    ///
    /// End of input reads as an empty answer, which no step accepts as a number.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        Ok(self.input.read_line()?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_bufread_input_strips_line_endings() {
        let mut input = BufReadInput::new(Cursor::new("10\r\n 5 \nlast"));
        assert_eq!(input.read_line().unwrap(), Some("10".to_string()));
        assert_eq!(input.read_line().unwrap(), Some(" 5 ".to_string()));
        assert_eq!(input.read_line().unwrap(), Some("last".to_string()));
        assert_eq!(input.read_line().unwrap(), None);
    }

    #[test]
    fn test_console_ask_writes_prompt_and_reads_answer() {
        let mut input = BufReadInput::new(Cursor::new("42\n"));
        let mut out = Vec::new();

        let answer = {
            let mut console = Console::new(&mut input, &mut out);
            console.ask("Please enter the package weight:").unwrap()
        };

        assert_eq!(answer, "42");
        assert_eq!(String::from_utf8(out).unwrap(), "Please enter the package weight:\n");
    }

    #[test]
    fn test_console_ask_at_end_of_input_is_empty() {
        let mut input = BufReadInput::new(Cursor::new(""));
        let mut out = Vec::new();
        let mut console = Console::new(&mut input, &mut out);
        assert_eq!(console.ask("prompt").unwrap(), "");
    }
}

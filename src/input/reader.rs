// src/input/reader.rs
use super::error::*;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Liest whitespace-getrennte Tokens zeilenweise aus einer Quelle.
///
/// Mit gesetztem Prompt-Ziel wird vor jedem Wert eine Eingabeaufforderung
/// geschrieben, aber nur solange keine gepufferten Tokens mehr anstehen.
pub struct TokenReader<R> {
    source: R,
    pending: VecDeque<String>,
    prompt: Option<Box<dyn Write>>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
            prompt: None,
        }
    }

    /// Aktiviert interaktive Eingabeaufforderungen
    pub fn with_prompts(mut self, sink: Box<dyn Write>) -> Self {
        self.prompt = Some(sink);
        self
    }

    /// Schreibt eine Zeile auf das Prompt-Ziel (ohne Wirkung im nicht-interaktiven Modus)
    pub fn announce(&mut self, text: &str) -> InputResult<()> {
        if let Some(sink) = self.prompt.as_mut() {
            writeln!(sink, "{text}")?;
            sink.flush()?;
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> InputResult<()> {
        if !self.pending.is_empty() {
            return Ok(());
        }
        if let Some(sink) = self.prompt.as_mut() {
            write!(sink, "{prompt}")?;
            sink.flush()?;
        }
        Ok(())
    }

    fn next_token(&mut self, field: &str) -> InputResult<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEnd {
                    field: field.to_string(),
                });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Liest eine Gleitkommazahl; `prompt` wird im interaktiven Modus angezeigt
    pub fn read_f64(&mut self, field: &str, prompt: &str) -> InputResult<f64> {
        self.ask(prompt)?;
        let token = self.next_token(field)?;
        token
            .parse::<f64>()
            .map_err(|_| InputError::InvalidNumber {
                field: field.to_string(),
                token,
            })
    }

    /// Liest eine nicht-negative Anzahl
    pub fn read_count(&mut self, field: &str, prompt: &str) -> InputResult<usize> {
        self.ask(prompt)?;
        let token = self.next_token(field)?;
        token
            .parse::<usize>()
            .map_err(|_| InputError::InvalidCount { token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    /// Prompt-Ziel, dessen Inhalt der Test danach noch lesen kann
    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedSink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    #[test]
    fn test_tokens_across_lines() {
        let mut reader = TokenReader::new(Cursor::new("1.5  -2\n\n  3e2\n4"));
        assert_eq!(reader.read_f64("a", "").unwrap(), 1.5);
        assert_eq!(reader.read_f64("b", "").unwrap(), -2.0);
        assert_eq!(reader.read_f64("c", "").unwrap(), 300.0);
        assert_eq!(reader.read_count("n", "").unwrap(), 4);
    }

    #[test]
    fn test_unexpected_end() {
        let mut reader = TokenReader::new(Cursor::new("1.0\n"));
        reader.read_f64("left", "").unwrap();
        let err = reader.read_f64("top", "").unwrap_err();
        assert!(matches!(err, InputError::UnexpectedEnd { ref field } if field == "top"));
    }

    #[test]
    fn test_invalid_tokens() {
        let mut reader = TokenReader::new(Cursor::new("abc -3"));
        let err = reader.read_f64("left", "").unwrap_err();
        assert!(matches!(err, InputError::InvalidNumber { ref token, .. } if token == "abc"));

        let err = reader.read_count("segment count", "").unwrap_err();
        assert!(matches!(err, InputError::InvalidCount { ref token } if token == "-3"));
    }

    #[test]
    fn test_prompts_only_when_buffer_is_empty() {
        let sink = SharedSink::default();
        let mut reader =
            TokenReader::new(Cursor::new("1 2\n3\n")).with_prompts(Box::new(sink.clone()));

        reader.read_f64("a", "a: ").unwrap();
        reader.read_f64("b", "b: ").unwrap();
        reader.read_f64("c", "c: ").unwrap();
        reader.announce("fertig").unwrap();

        assert_eq!(sink.contents(), "a: c: fertig\n");
    }
}

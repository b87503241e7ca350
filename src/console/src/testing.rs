use crate::Terminal;
use std::io::Cursor;

pub type ScriptedTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>>;

pub fn scripted(input: &str) -> ScriptedTerminal {
    Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn transcript(terminal: ScriptedTerminal) -> String {
    String::from_utf8(terminal.into_writer()).unwrap()
}

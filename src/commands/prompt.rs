use minipm::views::Prompter;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Answers prompts from command-line flags in order, falling back to
/// reading a line from stdin for each answer that was not given.
pub struct FlagsThenStdin {
    preset: VecDeque<Option<String>>,
}

impl FlagsThenStdin {
    pub fn new(content: Option<String>, author: Option<String>) -> Self {
        Self {
            preset: VecDeque::from([content, author]),
        }
    }
}

impl Prompter for FlagsThenStdin {
    fn ask(&mut self, label: &str) -> Option<String> {
        if let Some(answer) = self.preset.pop_front().flatten() {
            return Some(answer);
        }
        print!("{label}: ");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

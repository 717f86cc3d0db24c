//! Line-oriented prompts over any reader/writer pair.
//! Every reader returns `Ok(None)` once input is exhausted.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    str::FromStr,
};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes `prompt` without a newline and reads one line, minus its terminator.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Re-prompts with `retry` until the line parses as `T`.
    pub fn ask_parsed<T: FromStr>(&mut self, prompt: &str, retry: &str) -> io::Result<Option<T>> {
        let mut current = prompt;
        loop {
            let Some(line) = self.ask(current)? else {
                return Ok(None);
            };
            if let Ok(value) = line.trim().parse() {
                return Ok(Some(value));
            }
            current = retry;
        }
    }

    /// Re-prompts until the answer is a number in `range`.
    pub fn ask_choice(
        &mut self,
        prompt: &str,
        range: std::ops::RangeInclusive<u32>,
    ) -> io::Result<Option<u32>> {
        let retry = format!(
            "Invalid input. Please enter a valid choice ({}-{}): ",
            range.start(),
            range.end()
        );
        let mut current = prompt.to_owned();
        loop {
            let Some(line) = self.ask(&current)? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(n) if range.contains(&n) => return Ok(Some(n)),
                _ => current.clone_from(&retry),
            }
        }
    }

    /// Y/N question; only an answer starting with `y` or `Y` confirms.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        let answer = self.ask(prompt)?;
        Ok(answer.map(|a| a.trim_start().starts_with(['y', 'Y'])))
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

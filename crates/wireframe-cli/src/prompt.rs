//! Line-based interactive prompts.
//!
//! Each prompt shows its default in parentheses; an empty answer accepts it.
//! Invalid answers are re-asked. Closed input is an error.

use std::io::{self, BufRead, Write};

use wireframe_tokens::config::parse_number;
use wireframe_tokens::{GridSystem, ScaleRatio};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for the grid system. Returns its wire name.
    pub fn grid_system(&mut self, default: GridSystem) -> io::Result<String> {
        let labels: Vec<String> = GridSystem::ALL.iter().map(|g| g.label().to_string()).collect();
        let default_index = GridSystem::ALL.iter().position(|g| *g == default).unwrap_or(0);
        let index = self.choose("Choose your Grid System:", &labels, default_index)?;
        Ok(labels[index].clone())
    }

    /// Ask for the base font size in pixels. Returns the number as typed.
    pub fn base_font_size(&mut self, default: f64) -> io::Result<String> {
        loop {
            write!(self.output, "? Set Base Font Size (px): ({default}) ")?;
            self.output.flush()?;
            let answer = self.read_line()?;
            if answer.is_empty() {
                return Ok(default.to_string());
            }
            match parse_number("baseFontSize", &answer) {
                Ok(px) if px.is_finite() && px > 0.0 => return Ok(answer),
                _ => writeln!(self.output, ">> Please enter a number")?,
            }
        }
    }

    /// Ask for the scale ratio from the named presets. A default outside the
    /// presets is offered as an extra first choice.
    pub fn contrast_ratio(&mut self, default: f64) -> io::Result<String> {
        let mut choices: Vec<(String, f64)> = ScaleRatio::ALL
            .iter()
            .map(|preset| (preset.to_string(), preset.value()))
            .collect();
        if ScaleRatio::from_value(default).is_none() {
            choices.insert(0, (format!("Custom ({default})"), default));
        }
        let default_index = choices.iter().position(|(_, v)| *v == default).unwrap_or(0);

        let labels: Vec<String> = choices.iter().map(|(label, _)| label.clone()).collect();
        let index = self.choose("Choose your Contrast Scale Ratio:", &labels, default_index)?;
        Ok(choices[index].1.to_string())
    }

    /// Numbered list choice. Accepts the number or the exact label.
    fn choose(&mut self, message: &str, labels: &[String], default: usize) -> io::Result<usize> {
        loop {
            writeln!(self.output, "? {message}")?;
            for (i, label) in labels.iter().enumerate() {
                let marker = if i == default { " (default)" } else { "" };
                writeln!(self.output, "  {}) {label}{marker}", i + 1)?;
            }
            write!(self.output, "  Answer: ")?;
            self.output.flush()?;

            let answer = self.read_line()?;
            if answer.is_empty() {
                return Ok(default);
            }
            if let Ok(n) = answer.parse::<usize>() {
                if (1..=labels.len()).contains(&n) {
                    return Ok(n - 1);
                }
            }
            if let Some(i) = labels.iter().position(|l| *l == answer) {
                return Ok(i);
            }
            writeln!(self.output, ">> Please choose 1-{}", labels.len())?;
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before all questions were answered",
            ));
        }
        Ok(line.trim().to_string())
    }
}

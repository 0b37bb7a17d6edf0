//! Title banner with cycling colors.

use colored::{Color, Colorize};
use std::io::{self, Write};

const TITLE_ART: &[&str] = &[
    r"  ___          _        _      ___",
    r" / _ \  _   _ (_) ____ | |    |_ _|",
    r"| | | || | | || ||_  / | |     | |",
    r"| |_| || |_| || | / /  | |___  | |",
    r" \__\_\ \__,_||_|/___| |_____||___|",
];

const GRADIENT: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

const RULE_WIDTH: usize = 50;

/// Write lines cycling through the gradient colors.
pub fn render<W, S>(output: &mut W, lines: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for (i, line) in lines.iter().enumerate() {
        let color = GRADIENT[i % GRADIENT.len()];
        writeln!(output, "{}", line.as_ref().color(color))?;
    }
    Ok(())
}

/// Print the colored "QuizLI" art and the welcome header.
pub fn display_title<W: Write>(output: &mut W) -> io::Result<()> {
    render(output, TITLE_ART)?;

    let rule = "=".repeat(RULE_WIDTH);
    writeln!(output, "{}", rule)?;
    writeln!(output, "Welcome to QuizLI - A CLI Quiz Experience!")?;
    writeln!(output, "{}", rule)?;
    Ok(())
}

use crate::errors::AppError;
use std::io::{BufRead, Write};

/// Asks a y/n question and reads one answer line. Anything but `y`/`yes`
/// counts as a no, including end of input.
pub fn confirm_action<R: BufRead, W: Write>(
    action: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool, AppError> {
    write!(output, "Are you sure you want to {}? (y/n)\n> ", action)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

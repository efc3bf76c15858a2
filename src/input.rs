use std::io::{BufRead, Write};

use crate::error::InputError;
use crate::models::Difficulty;

/// Line-oriented prompt reader. Bad input is answered with a warning and a new
/// prompt; only a closed or failing stream is reported to the caller.
pub struct InputReader<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self, text: &str) -> Result<String, InputError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail validation like any other bad input.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    fn warn(&mut self, text: &str) -> Result<(), InputError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Blocks until a whole-line integer in `[min, max]` is entered.
    fn read_bounded(
        &mut self,
        prompt: &str,
        min: u32,
        max: u32,
        warning: &str,
    ) -> Result<u32, InputError> {
        loop {
            let line = self.prompt(prompt)?;
            match line.parse::<u32>() {
                Ok(n) if (min..=max).contains(&n) => return Ok(n),
                _ => self.warn(warning)?,
            }
        }
    }

    pub fn read_name(&mut self) -> Result<String, InputError> {
        self.prompt("Enter your name: ")
    }

    pub fn read_difficulty_choice(&mut self) -> Result<Difficulty, InputError> {
        let max = Difficulty::ALL.len() as u32;
        let choice = self.read_bounded(
            &format!("Enter your choice (1-{}): ", max),
            1,
            max,
            "Invalid choice. Please enter 1, 2, or 3.",
        )?;
        // read_bounded only returns menu numbers
        Ok(Difficulty::from_choice(choice).unwrap_or(Difficulty::Hard))
    }

    pub fn read_guess(&mut self, max_range: u32, attempts_left: u32) -> Result<u32, InputError> {
        self.read_bounded(
            &format!(
                "Enter your guess (1-{}) [Attempts left: {}]: ",
                max_range, attempts_left
            ),
            1,
            max_range,
            &format!(
                "Invalid input! Please enter a number between 1 and {}.",
                max_range
            ),
        )
    }

    /// Only "yes" and "y" (any case) are affirmative. Anything else, including
    /// an empty line, is a no.
    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool, InputError> {
        let answer = self.prompt(prompt)?.to_lowercase();
        Ok(matches!(answer.as_str(), "yes" | "y"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn reader(script: &str) -> InputReader<Cursor<Vec<u8>>, Vec<u8>> {
        InputReader::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn printed(reader: InputReader<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(reader.into_parts().1).unwrap()
    }

    #[test]
    fn test_guess_rejects_until_valid() {
        let mut r = reader("abc\n0\n51\n-1\n1\n");
        assert_eq!(r.read_guess(50, 10).unwrap(), 1);
        let out = printed(r);
        assert_eq!(
            out.matches("Invalid input! Please enter a number between 1 and 50.")
                .count(),
            4
        );
        assert!(out.contains("Enter your guess (1-50) [Attempts left: 10]: "));
    }

    #[test]
    fn test_guess_boundaries() {
        let mut r = reader("1\n50\n");
        assert_eq!(r.read_guess(50, 3).unwrap(), 1);
        assert_eq!(r.read_guess(50, 2).unwrap(), 50);
        assert!(!printed(r).contains("Invalid"));
    }

    #[test]
    fn test_guess_trims_whitespace() {
        let mut r = reader("   17  \r\n");
        assert_eq!(r.read_guess(100, 7).unwrap(), 17);
    }

    #[test]
    fn test_difficulty_choice() {
        let mut r = reader("4\nhard\n\n3\n");
        assert_eq!(r.read_difficulty_choice().unwrap(), Difficulty::Hard);
        assert_eq!(printed(r).matches("Invalid choice").count(), 3);

        let mut r = reader("1\n2\n");
        assert_eq!(r.read_difficulty_choice().unwrap(), Difficulty::Easy);
        assert_eq!(r.read_difficulty_choice().unwrap(), Difficulty::Medium);
    }

    #[test]
    fn test_yes_no() {
        let mut r = reader("yes\nYES\ny\nY\n");
        for _ in 0..4 {
            assert!(r.read_yes_no("Again? ").unwrap());
        }

        let mut r = reader("no\n\nmaybe\nyess\n");
        for _ in 0..4 {
            assert!(!r.read_yes_no("Again? ").unwrap());
        }
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut r = reader("  Ada Lovelace \n\n");
        assert_eq!(r.read_name().unwrap(), "Ada Lovelace");
        assert_eq!(r.read_name().unwrap(), "");
    }

    #[test]
    fn test_invalid_utf8_is_rejected_not_raised() {
        let mut r = InputReader::new(Cursor::new(b"\xff\xfe\n25\n".to_vec()), Vec::new());
        assert_eq!(r.read_guess(50, 10).unwrap(), 25);
        assert_eq!(printed(r).matches("Invalid input!").count(), 1);

        let mut r = InputReader::new(Cursor::new(b"\xffy\n".to_vec()), Vec::new());
        assert!(!r.read_yes_no("Again? ").unwrap());
    }

    #[test]
    fn test_closed_input() {
        let mut r = reader("abc\n");
        assert!(matches!(r.read_guess(50, 1), Err(InputError::Closed)));

        let mut r = reader("");
        assert!(matches!(r.read_yes_no("Again? "), Err(InputError::Closed)));
    }
}

// Copyright 2015 The Ramp Developers
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use std::io;
use std::io::{BufRead, Write};

use fact::factorial;

/**
 * Runs the console interaction: prompt once, read one line, report.
 *
 * The input is parsed as an `i64` so that negative values can be recognized
 * and refused; non-negative values are narrowed to `u64` for the computation.
 * Negative and malformed input produce a message rather than an error, so
 * every reachable path returns `Ok` and the process exits with status 0. The
 * `Err` variant is reserved for I/O failure on the handles themselves.
 */
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    write!(output, "Enter a non-negative integer to calculate its factorial: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    match line.trim().parse::<i64>() {
        Ok(n) if n < 0 => {
            writeln!(output, "Factorial is not defined for negative numbers.")?;
        }
        Ok(n) => {
            writeln!(output, "Factorial of {} = {}", n, factorial(n as u64))?;
        }
        Err(_) => {
            writeln!(output, "Invalid input. Please enter an integer.")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::run;
    use std::io::Cursor;

    fn run_with(input: &str) -> String {
        let mut out = Vec::new();
        run(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prompts_before_reading() {
        let out = run_with("0\n");
        assert!(out.starts_with("Enter a non-negative integer to calculate its factorial: "));
    }

    #[test]
    fn reports_result() {
        let cases = [
            ("0\n", "Factorial of 0 = 1"),
            ("1\n", "Factorial of 1 = 1"),
            ("5\n", "Factorial of 5 = 120"),
            ("10\n", "Factorial of 10 = 3628800"),
            (" 7 \n", "Factorial of 7 = 5040"),
        ];

        for &(input, expected) in cases.iter() {
            let out = run_with(input);
            assert!(out.contains(expected),
                    "expected {:?} in output {:?}", expected, out);
        }
    }

    #[test]
    fn rejects_negative() {
        let out = run_with("-3\n");
        assert!(out.contains("Factorial is not defined for negative numbers."));
        assert!(!out.contains("="));
    }

    #[test]
    fn rejects_malformed() {
        let out = run_with("twelve\n");
        assert!(out.contains("Invalid input. Please enter an integer."));
    }

    #[test]
    fn rejects_empty_input() {
        let out = run_with("");
        assert!(out.contains("Invalid input. Please enter an integer."));
    }
}

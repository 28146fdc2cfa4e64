//! Menu-driven session for entering ship data at a terminal.

use crate::error::{CliError, CliResult};
use crate::report::{BowLoadInputs, ResistanceInputs, parse_non_negative};
use ic_polar::PolarClass;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const MENU: &str = "\nOptions:\n0: End program\n1: Calculate level ice resistance\n2: Calculate design ice load at bow\n";

/// Interactive session over any line-oriented input and output.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the menu loop until the user chooses `0` or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let choice = match self.read_line() {
                Ok(line) => line,
                Err(CliError::EndOfInput) => return Ok(()),
                Err(e) => return Err(e),
            };

            let outcome = match choice.trim() {
                "0" => {
                    writeln!(self.output, "Exiting the program.")?;
                    return Ok(());
                }
                "1" => self.level_ice_resistance(),
                "2" => self.bow_design_load(),
                other => {
                    debug!(choice = other, "unknown menu choice");
                    writeln!(self.output, "Invalid choice. Please select option 0, 1, or 2.")?;
                    Ok(())
                }
            };

            match outcome {
                Ok(()) => {}
                Err(CliError::EndOfInput) => return Ok(()),
                Err(e @ (CliError::Resistance(_) | CliError::Polar(_))) => {
                    warn!(error = %e, "calculation rejected");
                    writeln!(self.output, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn level_ice_resistance(&mut self) -> CliResult<()> {
        let inputs = ResistanceInputs {
            length_m: self.prompt_number("\nEnter the length of the ship (m): ")?,
            breadth_m: self.prompt_number("Enter the breadth of the ship (m): ")?,
            draft_m: self.prompt_number("Enter the draft of the ship (m): ")?,
            speed_kn: self.prompt_number("Enter the ship speed (kn): ")?,
            trim_deg: self.prompt_number("Enter the angle (trim) in degrees: ")?,
            keel_deg: self.prompt_number(
                "Enter the angle (ship keel - direction of motion) in degrees: ",
            )?,
            side_deg: self.prompt_number("Enter the angle (ship side - waterline) in degrees: ")?,
            ice_thickness_cm: self.prompt_number("Enter the ice thickness in cm: ")?,
        };

        let report = inputs.evaluate()?;
        writeln!(self.output, "{}", report.render_text())?;
        Ok(())
    }

    fn bow_design_load(&mut self) -> CliResult<()> {
        let lui_m = self.prompt_number(
            "\nEnter the ship's upper ice waterline length (Lui) in meters: ",
        )?;
        let dui_kt = self.prompt_number(
            "Enter the ship's deadweight (Dui in kt) at Upper Ice Waterline (UIWL): ",
        )?;
        let class = self.prompt_class()?;
        let inputs = BowLoadInputs {
            lui_m,
            dui_kt,
            class,
            beta_prime_deg: self.prompt_number(
                "Enter the normal frame angle at upper ice waterline for the Bow (β' in degrees): ",
            )?,
            alpha_deg: self
                .prompt_number("Enter the upper ice waterline angle for the Bow (α in degrees): ")?,
            gamma_deg: self.prompt_number(
                "Enter the buttock angle at upper ice waterline for the Bow (γ in degrees): ",
            )?,
        };

        let report = inputs.evaluate()?;
        writeln!(self.output, "\n{}", report.render_text())?;
        Ok(())
    }

    fn read_line(&mut self) -> CliResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(line)
    }

    /// Prompt until a non-negative number is entered.
    fn prompt_number(&mut self, prompt: &str) -> CliResult<f64> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            match parse_non_negative(&self.read_line()?) {
                Ok(v) => return Ok(v),
                Err(_) => writeln!(
                    self.output,
                    "Invalid input. Please enter a valid non-negative numeric value."
                )?,
            }
        }
    }

    fn prompt_class(&mut self) -> CliResult<PolarClass> {
        loop {
            write!(
                self.output,
                "Enter the Polar Class (PC1, PC2, PC3, PC4, PC5, PC6, or PC7): "
            )?;
            self.output.flush()?;
            match self.read_line()?.trim().parse::<PolarClass>() {
                Ok(class) => return Ok(class),
                Err(_) => writeln!(
                    self.output,
                    "Not acceptable Polar Class. Polar Class should be between PC1 - PC7"
                )?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(script: &str) -> String {
        let mut out = Vec::new();
        Session::new(script.as_bytes(), &mut out).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_immediately() {
        let out = run_session("0\n");
        assert!(out.contains("1: Calculate level ice resistance"));
        assert!(out.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn level_ice_resistance_session() {
        let out = run_session("1\n100\n20\n8\n10\n20\n30\n40\n100\n0\n");
        assert!(out.contains("Ice resistance: 1802.07 kN"), "{out}");
    }

    #[test]
    fn invalid_numbers_are_re_prompted() {
        let out = run_session("1\n-100\nabc\n100\n20\n8\n10\n20\n30\n40\n0\n0\n");
        assert_eq!(
            out.matches("Invalid input. Please enter a valid non-negative numeric value.")
                .count(),
            2
        );
        assert!(out.contains("Ice resistance: 0.00 kN"));
    }

    #[test]
    fn bow_load_session_retries_class() {
        let out = run_session("2\n150\n20\nPC9\nPC5\n30\n20\n0\n0\n");
        assert!(out.contains("Not acceptable Polar Class"));
        assert!(out.contains("Shape Factors for PC5:"));
        assert!(out.contains("  Fi: 6.95 MN"), "{out}");
    }

    #[test]
    fn degenerate_angles_report_and_continue() {
        let out = run_session("1\n100\n20\n8\n10\n20\n90\n40\n100\n0\n");
        assert!(out.contains("Degenerate geometry"), "{out}");
        assert!(out.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn unknown_choice_and_end_of_input() {
        let out = run_session("7\n1\n100\n");
        assert!(out.contains("Invalid choice. Please select option 0, 1, or 2."));
        assert!(!out.contains("Exiting the program."));
    }
}

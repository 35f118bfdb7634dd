use std::io::{self, BufRead, Write};

use kinema_core::nalgebra::Point2;
use kinema_core::Elbow;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Parameters of a single planar arm run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArmParameters {
    pub l1: f64,
    pub l2: f64,
    /// Target first plane coordinate.
    pub x: f64,
    /// Target second plane coordinate.
    pub y: f64,
    #[serde(default)]
    pub elbow: Elbow,
}

impl ArmParameters {
    pub fn new(l1: f64, l2: f64, target: Point2<f64>, elbow: Elbow) -> Self {
        Self {
            l1,
            l2,
            x: target.x,
            y: target.y,
            elbow,
        }
    }

    #[inline]
    pub fn target(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Reject non-positive link lengths and non-finite targets.
    pub fn validate(&self) -> Result {
        if !(self.l1.is_finite() && self.l1 > 0.0 && self.l2.is_finite() && self.l2 > 0.0) {
            return Err(Error::Config(format!(
                "link lengths must be positive, got {} and {}",
                self.l1, self.l2
            )));
        }
        if !(self.x.is_finite() && self.y.is_finite()) {
            return Err(Error::Config(format!(
                "target ({}, {}) is not finite",
                self.x, self.y
            )));
        }

        Ok(())
    }
}

impl std::fmt::Display for ArmParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "L1={:.2} L2={:.2} target ({:.2}, {:.2}) elbow {}",
            self.l1, self.l2, self.x, self.y, self.elbow
        )
    }
}

/// Supplier of arm parameters.
pub trait ParameterSource {
    /// Next parameter set, or `None` when the source is exhausted or the
    /// user asked to stop.
    fn next(&mut self) -> Result<Option<ArmParameters>>;
}

/// Token that ends an interactive session at any prompt.
const QUIT: &str = "q";

/// Ask for parameters on a text terminal.
///
/// Invalid numbers re-prompt the same field. An unknown elbow token falls
/// back to up. Entering `q` at any prompt, or closing the input, ends the
/// session.
pub struct PromptSource<R, W> {
    reader: R,
    writer: W,
}

impl PromptSource<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn read_token(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            log::debug!("Input closed");
            return Ok(None);
        }

        let token = line.trim();
        if token.eq_ignore_ascii_case(QUIT) {
            return Ok(None);
        }

        Ok(Some(token.to_string()))
    }

    fn read_number(&mut self, prompt: &str, positive: bool) -> Result<Option<f64>> {
        loop {
            let token = match self.read_token(prompt)? {
                Some(token) => token,
                None => return Ok(None),
            };

            match token.parse::<f64>() {
                Ok(value) if value.is_finite() && (!positive || value > 0.0) => {
                    return Ok(Some(value))
                }
                Ok(_) if positive => writeln!(self.writer, "Value must be positive, try again.")?,
                _ => writeln!(self.writer, "Invalid value, try again.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> ParameterSource for PromptSource<R, W> {
    fn next(&mut self) -> Result<Option<ArmParameters>> {
        let elbow = match self.read_token("Mode (up/down) [up]: ")? {
            Some(token) => Elbow::parse_or_default(&token),
            None => return Ok(None),
        };

        let Some(l1) = self.read_number("Length L1: ", true)? else {
            return Ok(None);
        };
        let Some(l2) = self.read_number("Length L2: ", true)? else {
            return Ok(None);
        };
        let Some(x) = self.read_number("Target X: ", false)? else {
            return Ok(None);
        };
        let Some(y) = self.read_number("Target Y: ", false)? else {
            return Ok(None);
        };

        Ok(Some(ArmParameters::new(l1, l2, Point2::new(x, y), elbow)))
    }
}

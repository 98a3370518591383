//! Dash patterns for pen strokes and their compact string form.
//!
//! String form: `plain`, `dash`, `dashdot`, `dot`, or `cust: <d1> <d2> ...`
//! for an arbitrary dash array.

use crate::tool::ParseError;
use std::fmt;
use std::str::FromStr;

const DASH: [f64; 2] = [6.0, 3.0];
const DASH_DOT: [f64; 4] = [6.0, 3.0, 0.5, 3.0];
const DOT: [f64; 2] = [0.5, 3.0];

const CUSTOM_PREFIX: &str = "cust:";

/// Alternating on/off dash lengths. An empty pattern is a solid line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineStyle {
    dashes: Vec<f64>,
}

impl LineStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn dash() -> Self {
        Self { dashes: DASH.to_vec() }
    }

    pub fn dash_dot() -> Self {
        Self {
            dashes: DASH_DOT.to_vec(),
        }
    }

    pub fn dot() -> Self {
        Self { dashes: DOT.to_vec() }
    }

    /// Custom pattern. Every length must be finite and non-negative; an
    /// empty pattern is a solid line.
    pub fn with_dashes(dashes: Vec<f64>) -> Result<Self, ParseError> {
        if let Some(bad) = dashes.iter().find(|d| !is_valid_dash(**d)) {
            return Err(ParseError::InvalidLineStyle(format!("dash length {bad}")));
        }
        Ok(Self { dashes })
    }

    pub fn dashes(&self) -> &[f64] {
        &self.dashes
    }

    pub fn has_dashes(&self) -> bool {
        !self.dashes.is_empty()
    }

    fn preset_name(&self) -> Option<&'static str> {
        match self.dashes.as_slice() {
            [] => Some("plain"),
            d if d == DASH.as_slice() => Some("dash"),
            d if d == DASH_DOT.as_slice() => Some("dashdot"),
            d if d == DOT.as_slice() => Some("dot"),
            _ => None,
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.preset_name() {
            return f.write_str(name);
        }
        f.write_str(CUSTOM_PREFIX)?;
        for dash in &self.dashes {
            write!(f, " {dash}")?;
        }
        Ok(())
    }
}

impl FromStr for LineStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "plain" => return Ok(Self::plain()),
            "dash" => return Ok(Self::dash()),
            "dashdot" => return Ok(Self::dash_dot()),
            "dot" => return Ok(Self::dot()),
            _ => {}
        }

        let invalid = || ParseError::InvalidLineStyle(s.to_string());
        let body = trimmed.strip_prefix(CUSTOM_PREFIX).ok_or_else(invalid)?;
        let dashes = body
            .split_whitespace()
            .map(|part| match part.parse::<f64>() {
                Ok(v) if is_valid_dash(v) => Ok(v),
                _ => Err(invalid()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if dashes.is_empty() {
            return Err(invalid());
        }
        Ok(Self { dashes })
    }
}

fn is_valid_dash(length: f64) -> bool {
    length.is_finite() && length >= 0.0
}

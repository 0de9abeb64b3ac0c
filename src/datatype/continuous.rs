use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use super::DataType;
use crate::error::{Error, Result};
use crate::param::{Param, ParamList};

const UNBOUNDED: &str = "unbounded";

/// A numeric domain where a value is its own code.
///
/// Distances are absolute differences, scaled by the configured range when
/// both bounds are known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Continuous {
    min: Option<f32>,
    max: Option<f32>,
}

impl Continuous {
    /// Create an unbounded numeric domain
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(&self) -> Option<f32> {
        self.min
    }

    pub fn max(&self) -> Option<f32> {
        self.max
    }

    /// Width of the configured range, widened so that `max - min` cannot overflow
    fn range(&self) -> Option<f64> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(f64::from(max) - f64::from(min)),
            _ => None,
        }
    }

    fn parse_bound(name: &str, value: &str) -> Result<Option<f32>> {
        let value = value.trim();
        if value == UNBOUNDED {
            return Ok(None);
        }
        match value.parse::<f32>() {
            Ok(bound) if bound.is_finite() => Ok(Some(bound)),
            _ => Err(Error::invalid_parameter(
                name,
                value,
                format!("{} must be a finite number or {}", name, UNBOUNDED),
            )),
        }
    }
}

fn bound_to_string(bound: Option<f32>) -> String {
    bound.map_or_else(|| UNBOUNDED.to_string(), |b| b.to_string())
}

impl DataType for Continuous {
    fn name(&self) -> &'static str {
        "continuous"
    }

    fn size(&self) -> usize {
        0
    }

    fn el_at(&self, i: usize) -> Result<String> {
        Err(Error::domain(
            i as f32,
            "continuous domains cannot be enumerated",
        ))
    }

    fn read(&self, s: &str) -> Result<f32> {
        let code = s.trim().parse::<f32>().map_err(|_| Error::EncodingMiss {
            value: s.to_string(),
        })?;
        self.check_code(code)?;
        Ok(code)
    }

    fn print(&self, code: f32) -> Result<String> {
        self.check_code(code)?;
        Ok(code.to_string())
    }

    fn check_code(&self, code: f32) -> Result<()> {
        if !code.is_finite() {
            return Err(Error::domain(code, "continuous codes are finite"));
        }
        if self.min.map_or(false, |min| code < min) || self.max.map_or(false, |max| code > max) {
            return Err(Error::domain(
                code,
                format!(
                    "outside [{}, {}]",
                    bound_to_string(self.min),
                    bound_to_string(self.max)
                ),
            ));
        }
        Ok(())
    }

    fn distance(&self, a: f32, b: f32) -> Result<f32> {
        self.check_code(a)?;
        self.check_code(b)?;
        let diff = (f64::from(a) - f64::from(b)).abs();
        let distance = match self.range() {
            Some(range) => diff / range,
            None => diff,
        };
        // Unbounded differences can exceed f32::MAX.
        Ok((distance as f32).min(f32::MAX))
    }

    fn is_ordered(&self) -> bool {
        true
    }

    fn compare(&self, a: f32, b: f32) -> Result<Ordering> {
        self.check_code(a)?;
        self.check_code(b)?;
        a.partial_cmp(&b)
            .ok_or_else(|| Error::domain(a, "continuous codes are comparable"))
    }

    fn box_clone(&self) -> Box<dyn DataType> {
        Box::new(self.clone())
    }

    fn param_list(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push(Param::new(
            "min",
            "smallest value of the domain; distances are scaled by max - min when both are set",
            UNBOUNDED,
        ));
        params.push(Param::new(
            "max",
            "largest value of the domain; distances are scaled by max - min when both are set",
            UNBOUNDED,
        ));
        params
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        debug!(param = name, value, "setting continuous parameter");
        let (min, max) = match name {
            "min" => (Self::parse_bound(name, value)?, self.max),
            "max" => (self.min, Self::parse_bound(name, value)?),
            _ => return Err(Error::invalid_parameter(name, value, "no such parameter")),
        };
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo >= hi {
                return Err(Error::invalid_parameter(
                    name,
                    value,
                    format!("min ({}) must be smaller than max ({})", lo, hi),
                ));
            }
        }
        self.min = min;
        self.max = max;
        Ok(())
    }
}

impl fmt::Display for Continuous {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "continuous. min = {}, max = {}",
            bound_to_string(self.min),
            bound_to_string(self.max)
        )
    }
}

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, warn};

use super::{unquote, DataType};
use crate::error::{Error, Result};
use crate::param::{Param, ParamList};
use crate::string_map::StringMap;

/// A finite domain of symbolic values.
///
/// Values are coded by their position in the domain. By default the domain
/// holds two values, `false` (0) and `true` (1).
#[derive(Debug, Clone, PartialEq)]
pub struct Discrete {
    values: StringMap,
    ordered: bool,
    /// `costs[a][b]` is the cost of taking `a` for `b`; `None` under the simple metric
    costs: Option<Vec<Vec<f32>>>,
}

impl Default for Discrete {
    fn default() -> Self {
        Self::new()
    }
}

impl Discrete {
    /// Create the default two-valued `{false, true}` domain
    pub fn new() -> Self {
        Self {
            values: StringMap::with_values(["false", "true"]),
            ordered: false,
            costs: None,
        }
    }

    /// Create an unordered domain with the given values, in code order
    pub fn with_values<I, S>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect();
        let raw = tokens.join(" ");
        let values = build_values("values", &raw, tokens.iter().map(String::as_str))?;
        Ok(Self {
            values,
            ..Self::new()
        })
    }

    /// Code of a domain value, if it exists
    pub fn index_of(&self, s: &str) -> Option<usize> {
        self.values.get_int(s)
    }

    /// Whether misclassifications are priced by a cost table
    pub fn is_complex_cost(&self) -> bool {
        self.costs.is_some()
    }

    /// The misclassification cost table, when the complex metric is active
    pub fn cost_matrix(&self) -> Option<&[Vec<f32>]> {
        self.costs.as_deref()
    }

    fn index(&self, code: f32) -> Result<usize> {
        self.check_code(code)?;
        Ok(code as usize)
    }

    fn set_values(&mut self, value: &str) -> Result<()> {
        let values = build_values("values", value, unquote(value).split_whitespace())?;
        self.values = values;
        if self.costs.is_some() {
            warn!(
                size = self.values.len(),
                "domain values reset under complex cost metric, rebuilding default cost matrix"
            );
            self.costs = Some(default_costs(self.values.len()));
        }
        Ok(())
    }

    fn set_cost(&mut self, value: &str) -> Result<()> {
        let tokens: Vec<&str> = unquote(value).split_whitespace().collect();
        let (a, b, cost) = match tokens.as_slice() {
            [a, b, cost] => (*a, *b, *cost),
            _ => {
                return Err(Error::invalid_parameter(
                    "cost",
                    value,
                    "expected \"a b cost\"",
                ))
            }
        };
        let cost: f32 = cost.parse().map_err(|_| {
            Error::invalid_parameter("cost", value, format!("{} is not a number", cost))
        })?;
        if !cost.is_finite() || cost < 0.0 {
            return Err(Error::invalid_parameter(
                "cost",
                value,
                "cost must be a non-negative number",
            ));
        }
        // -0 passes the sign check above
        let cost = cost + 0.0;
        let (val_a, val_b) = match (self.values.get_int(a), self.values.get_int(b)) {
            (Some(val_a), Some(val_b)) => (val_a, val_b),
            _ => {
                return Err(Error::invalid_parameter(
                    "cost",
                    value,
                    format!("one of the two class labels {} {} does not exist", a, b),
                ))
            }
        };
        match self.costs.as_mut() {
            Some(costs) => {
                costs[val_a][val_b] = cost;
                Ok(())
            }
            None => Err(Error::invalid_parameter(
                "cost",
                value,
                "costs require costmetric complex",
            )),
        }
    }
}

/// Build a fresh value map, rejecting empty and repeated token lists
fn build_values<'a>(
    name: &str,
    raw: &str,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<StringMap> {
    let mut values = StringMap::new();
    for token in tokens {
        if values.get_int(token).is_some() {
            return Err(Error::invalid_parameter(
                name,
                raw,
                format!("value {} is listed more than once", token),
            ));
        }
        values.add(token);
    }
    if values.is_empty() {
        return Err(Error::invalid_parameter(
            name,
            raw,
            "at least one value is required",
        ));
    }
    Ok(values)
}

/// Every misclassification costs 1, every correct classification 0
fn default_costs(size: usize) -> Vec<Vec<f32>> {
    (0..size)
        .map(|i| (0..size).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
        .collect()
}

impl DataType for Discrete {
    fn name(&self) -> &'static str {
        "discrete"
    }

    fn size(&self) -> usize {
        self.values.len()
    }

    fn el_at(&self, i: usize) -> Result<String> {
        self.values
            .get_string(i)
            .map(str::to_string)
            .ok_or_else(|| Error::domain(i as f32, format!("domain has {} values", self.size())))
    }

    fn read(&self, s: &str) -> Result<f32> {
        self.values
            .get_int(s)
            .map(|i| i as f32)
            .ok_or_else(|| Error::EncodingMiss {
                value: s.to_string(),
            })
    }

    fn print(&self, code: f32) -> Result<String> {
        let i = self.index(code)?;
        self.el_at(i)
    }

    fn check_code(&self, code: f32) -> Result<()> {
        if !code.is_finite() || code.fract() != 0.0 {
            return Err(Error::domain(code, "discrete codes are whole numbers"));
        }
        if code < 0.0 || code as usize >= self.size() {
            return Err(Error::domain(
                code,
                format!("domain has {} values", self.size()),
            ));
        }
        Ok(())
    }

    fn distance(&self, a: f32, b: f32) -> Result<f32> {
        let (a, b) = (self.index(a)?, self.index(b)?);
        match &self.costs {
            Some(costs) => Ok(costs[a][b]),
            None if a == b => Ok(0.0),
            None => Ok(1.0),
        }
    }

    fn is_ordered(&self) -> bool {
        self.ordered
    }

    fn compare(&self, a: f32, b: f32) -> Result<Ordering> {
        let (a, b) = (self.index(a)?, self.index(b)?);
        if !self.ordered {
            return Ok(Ordering::Equal);
        }
        Ok(a.cmp(&b))
    }

    fn box_clone(&self) -> Box<dyn DataType> {
        Box::new(self.clone())
    }

    fn param_list(&self) -> ParamList {
        let mut params = ParamList::new();
        params.push(Param::new(
            "values",
            "A quote-enclosed, space-delimited list of classes",
            "\"true false\"",
        ));
        params.push(Param::new(
            "costmetric",
            "simple (misclassification of all classes returns a distance of 1) or \
             complex (misclassifications use a table of costs)",
            "simple",
        ));
        params.push(Param::new(
            "cost",
            "\"a b cost\", where cost is the cost of misclassifying a as b. \
             There can be many such clauses",
            "0 if a = b, 1 otherwise",
        ));
        params.push(Param::new("ordered", "classes are ordered or not", "false"));
        params
    }

    fn set_param(&mut self, name: &str, value: &str) -> Result<()> {
        debug!(param = name, value, "setting discrete parameter");
        match name {
            "values" => self.set_values(value),
            "ordered" => {
                self.ordered = match value {
                    "true" => true,
                    "false" => false,
                    _ => {
                        return Err(Error::invalid_parameter(
                            name,
                            value,
                            "ordered can only take values true or false",
                        ))
                    }
                };
                Ok(())
            }
            "costmetric" => {
                self.costs = match value {
                    "simple" => None,
                    "complex" => Some(default_costs(self.values.len())),
                    _ => {
                        return Err(Error::invalid_parameter(
                            name,
                            value,
                            "acceptable values for costmetric: simple, complex",
                        ))
                    }
                };
                Ok(())
            }
            "cost" => self.set_cost(value),
            _ => Err(Error::invalid_parameter(name, value, "no such parameter")),
        }
    }
}

impl fmt::Display for Discrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "discrete. values =")?;
        for (value, _) in self.values.iter() {
            write!(f, " {}", value)?;
        }
        if let Some(costs) = &self.costs {
            writeln!(f)?;
            writeln!(f, "Cost of misclassifications:")?;
            for row in costs {
                let row: Vec<String> = row.iter().map(|c| c.to_string()).collect();
                writeln!(f, "{}", row.join("\t"))?;
            }
        }
        Ok(())
    }
}

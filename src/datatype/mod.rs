//! Value domains and the distances between their codes
//!
//! Every attribute and class domain is represented behind the [`DataType`]
//! trait: values are read from strings into `f32` codes, printed back, compared
//! and measured against each other. Variants are independent types that share
//! only this capability set.

use std::cmp::Ordering;
use std::fmt;

use bstr::ByteSlice;

use crate::error::{Error, Result};
use crate::param::ParamList;

mod continuous;
mod discrete;

pub use self::continuous::Continuous;
pub use self::discrete::Discrete;

/// A domain of values encoded as `f32` codes.
///
/// Configuration (`set_param`) needs exclusive access, while everything used
/// during evaluation takes `&self`, so a settled schema can be shared across
/// threads for distance computation.
pub trait DataType: fmt::Debug + fmt::Display + Send + Sync {
    /// Stable identifier of the variant, e.g. `"discrete"`
    fn name(&self) -> &'static str;

    /// Number of values in the domain, 0 when the domain is unbounded
    fn size(&self) -> usize;

    /// String form of the `i`-th domain value
    fn el_at(&self, i: usize) -> Result<String>;

    /// Encode a user-supplied value
    fn read(&self, s: &str) -> Result<f32>;

    /// Encode a raw value as handed over by stream ingestion.
    ///
    /// Surrounding whitespace is ignored; bytes that are not UTF-8 can never
    /// name a domain value.
    fn read_bytes(&self, raw: &[u8]) -> Result<f32> {
        let raw = raw.trim();
        match raw.to_str() {
            Ok(s) => self.read(s),
            Err(_) => Err(Error::EncodingMiss {
                value: raw.to_str_lossy().into_owned(),
            }),
        }
    }

    /// Decode a code back into its user-facing form
    fn print(&self, code: f32) -> Result<String>;

    /// Check that `code` belongs to this domain
    fn check_code(&self, code: f32) -> Result<()>;

    /// Non-negative dissimilarity between two codes, zero for equal codes
    fn distance(&self, a: f32, b: f32) -> Result<f32>;

    /// Whether the domain values carry a total order
    fn is_ordered(&self) -> bool;

    /// Order two codes; always `Equal` on unordered domains
    fn compare(&self, a: f32, b: f32) -> Result<Ordering>;

    /// Independent copy of the fully configured domain
    fn box_clone(&self) -> Box<dyn DataType>;

    /// Parameters accepted by [`DataType::set_param`]
    fn param_list(&self) -> ParamList;

    /// Apply one named parameter.
    ///
    /// On error the domain is left exactly as it was.
    fn set_param(&mut self, name: &str, value: &str) -> Result<()>;

    /// Apply parameters in order, stopping at the first failure
    fn configure(&mut self, params: &[(&str, &str)]) -> Result<()> {
        for (name, value) in params {
            self.set_param(name, value)?;
        }
        Ok(())
    }
}

impl Clone for Box<dyn DataType> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Default-configured data type for a variant name
pub fn data_type_by_name(name: &str) -> Option<Box<dyn DataType>> {
    match name {
        "discrete" => Some(Box::new(Discrete::new())),
        "continuous" => Some(Box::new(Continuous::new())),
        _ => None,
    }
}

/// Strip one pair of enclosing double quotes, as used for list-valued parameters
pub(crate) fn unquote(value: &str) -> &str {
    let value = value.trim();
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

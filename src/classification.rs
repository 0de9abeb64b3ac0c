use tracing::debug;

use crate::datatype::Discrete;
use crate::error::{Error, Result};
use crate::schema::{DomainId, Schema};

/// Code of `false` in a binarified class domain
pub const FALSE_CODE: f32 = 0.0;
/// Code of `true` in a binarified class domain
pub const TRUE_CODE: f32 = 1.0;

/// A sequence of class codes, usually coindexed with a vector of streams.
///
/// Every label is a valid code of the class domain the vector refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationVector {
    domain: DomainId,
    labels: Vec<f32>,
}

impl ClassificationVector {
    /// Create an empty vector over the class domain `domain`
    pub fn new(domain: DomainId) -> Self {
        Self {
            domain,
            labels: Vec::new(),
        }
    }

    /// Class domain the labels are coded against
    pub fn domain(&self) -> DomainId {
        self.domain
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at position `i`
    pub fn el_at(&self, i: usize) -> Option<f32> {
        self.labels.get(i).copied()
    }

    pub fn labels(&self) -> &[f32] {
        &self.labels
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.labels.iter().copied()
    }

    /// Append a label after checking it against the class domain
    pub fn add(&mut self, schema: &Schema, label: f32) -> Result<()> {
        schema.get(self.domain)?.check_code(label)?;
        self.labels.push(label);
        Ok(())
    }

    /// Overwrite the label at position `i`
    pub fn set_classification(&mut self, schema: &Schema, i: usize, label: f32) -> Result<()> {
        let len = self.labels.len();
        if i >= len {
            return Err(Error::IndexOutOfBounds { index: i, len });
        }
        schema.get(self.domain)?.check_code(label)?;
        self.labels[i] = label;
        Ok(())
    }

    /// Point the vector at another class domain.
    ///
    /// Every stored label must already be a valid code of the new domain.
    pub fn set_domain(&mut self, schema: &Schema, domain: DomainId) -> Result<()> {
        let data_type = schema.get(domain)?;
        for &label in &self.labels {
            data_type.check_code(label)?;
        }
        self.domain = domain;
        Ok(())
    }

    /// Reduce the problem to "is it `true_class` or not".
    ///
    /// The class domain is replaced by the default `{false, true}` domain and
    /// every label equal to `true_class` becomes [`TRUE_CODE`], all others
    /// [`FALSE_CODE`]. The old domain is discarded, including for every other
    /// vector sharing it; clone the schema first to keep the multiclass problem.
    pub fn binarify(&mut self, schema: &mut Schema, true_class: f32) -> Result<()> {
        schema.get(self.domain)?.check_code(true_class)?;

        let labels: Vec<f32> = self
            .labels
            .iter()
            .map(|&label| {
                if label == true_class {
                    TRUE_CODE
                } else {
                    FALSE_CODE
                }
            })
            .collect();
        schema.replace(self.domain, Box::new(Discrete::new()))?;
        self.labels = labels;

        debug!(
            domain = self.domain.index(),
            true_class,
            positives = self.labels.iter().filter(|&&l| l == TRUE_CODE).count(),
            total = self.labels.len(),
            "binarified classification vector"
        );
        Ok(())
    }
}

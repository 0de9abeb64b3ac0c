use std::fmt;

use crate::classification::ClassificationVector;
use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::stream::{StreamAttVal, StreamAttValVector};

/// Streams paired with their classifications.
///
/// Streams and classifications are kept separately, since a different
/// representation of a stream still has the same class. When classifications
/// are attached, both halves always have the same length and position `i` of
/// one belongs to position `i` of the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassStreamAttValVector {
    streams: StreamAttValVector,
    classifications: Option<ClassificationVector>,
}

impl ClassStreamAttValVector {
    /// Create an empty vector without classifications
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty vector whose instances are classified into `classifications`'s domain
    pub fn with_classification(classifications: ClassificationVector) -> Result<Self> {
        let mut vec = Self::new();
        vec.set_class_vec(classifications)?;
        Ok(vec)
    }

    pub fn has_classification(&self) -> bool {
        self.classifications.is_some()
    }

    /// Append an instance together with its class label.
    ///
    /// The label is validated first, so either both halves grow or neither does.
    pub fn add(&mut self, schema: &Schema, stream: StreamAttVal, label: f32) -> Result<()> {
        let classifications = self
            .classifications
            .as_mut()
            .ok_or(Error::MissingClassification)?;
        classifications.add(schema, label)?;
        self.streams.add(stream);
        Ok(())
    }

    /// Number of instances
    pub fn size(&self) -> usize {
        self.streams.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn stream_att_val_vec(&self) -> &StreamAttValVector {
        &self.streams
    }

    /// Replace the streams; they must line up with any attached classifications
    pub fn set_stream_att_val_vec(&mut self, streams: StreamAttValVector) -> Result<()> {
        if let Some(classifications) = &self.classifications {
            check_coindexed(&streams, classifications)?;
        }
        self.streams = streams;
        Ok(())
    }

    pub fn class_vec(&self) -> Option<&ClassificationVector> {
        self.classifications.as_ref()
    }

    /// Relabel instance `i`
    pub fn set_classification(&mut self, schema: &Schema, i: usize, label: f32) -> Result<()> {
        self.classifications
            .as_mut()
            .ok_or(Error::MissingClassification)?
            .set_classification(schema, i, label)
    }

    /// Binarify the attached classifications, see [`ClassificationVector::binarify`]
    pub fn binarify(&mut self, schema: &mut Schema, true_class: f32) -> Result<()> {
        self.classifications
            .as_mut()
            .ok_or(Error::MissingClassification)?
            .binarify(schema, true_class)
    }

    /// Attach classifications, discarding any previously attached
    pub fn set_class_vec(&mut self, classifications: ClassificationVector) -> Result<()> {
        check_coindexed(&self.streams, &classifications)?;
        self.classifications = Some(classifications);
        Ok(())
    }

    /// Iterate over `(stream, label)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&StreamAttVal, Option<f32>)> + '_ {
        self.streams.iter().enumerate().map(move |(i, stream)| {
            let label = self.classifications.as_ref().and_then(|c| c.el_at(i));
            (stream, label)
        })
    }
}

fn check_coindexed(
    streams: &StreamAttValVector,
    classifications: &ClassificationVector,
) -> Result<()> {
    if streams.len() != classifications.len() {
        return Err(Error::LengthMismatch {
            streams: streams.len(),
            classifications: classifications.len(),
        });
    }
    Ok(())
}

impl fmt::Display for ClassStreamAttValVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ClassStream has {} elements", self.size())?;
        for (stream, label) in self.iter() {
            match label {
                Some(label) => writeln!(f, "Str: {} Class: {}", stream, label)?,
                None => writeln!(f, "Str: {}", stream)?,
            }
        }
        Ok(())
    }
}

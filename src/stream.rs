use std::fmt;

/// Attribute codes extracted from one stream, one slot per attribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamAttVal {
    values: Vec<f32>,
}

impl StreamAttVal {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Code stored in attribute slot `i`
    pub fn get(&self, i: usize) -> Option<f32> {
        self.values.get(i).copied()
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f32>> for StreamAttVal {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for StreamAttVal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

/// Ordered collection of stream attribute records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreamAttValVector {
    streams: Vec<StreamAttVal>,
}

impl StreamAttValVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, stream: StreamAttVal) {
        self.streams.push(stream);
    }

    pub fn el_at(&self, i: usize) -> Option<&StreamAttVal> {
        self.streams.get(i)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StreamAttVal> + '_ {
        self.streams.iter()
    }
}

impl FromIterator<StreamAttVal> for StreamAttValVector {
    fn from_iter<T: IntoIterator<Item = StreamAttVal>>(iter: T) -> Self {
        Self {
            streams: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_vector() {
        let mut streams = StreamAttValVector::new();
        assert!(streams.is_empty());
        streams.add(StreamAttVal::new(vec![0.0, 2.5]));
        streams.add(vec![1.0, 3.0].into());

        assert_eq!(streams.len(), 2);
        assert_eq!(streams.el_at(1).unwrap().get(1), Some(3.0));
        assert_eq!(streams.el_at(1).unwrap().get(2), None);
        assert!(streams.el_at(2).is_none());
    }

    #[test]
    fn test_stream_display() {
        let stream = StreamAttVal::new(vec![1.0, 0.5]);
        assert_eq!(stream.to_string(), "[1, 0.5]");
    }
}

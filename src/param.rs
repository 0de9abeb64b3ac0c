use std::fmt;

/// A named configuration option a data type understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    name: String,
    description: String,
    default: String,
}

impl Param {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            default: default.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (default: {})",
            self.name, self.description, self.default
        )
    }
}

/// Ordered list of parameters, as reported by a data type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList {
    params: Vec<Param>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, param: Param) {
        self.params.push(param);
    }

    /// Look a parameter up by name
    pub fn get(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Param> + '_ {
        self.params.iter()
    }
}

impl FromIterator<Param> for ParamList {
    fn from_iter<T: IntoIterator<Item = Param>>(iter: T) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ParamList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for param in &self.params {
            writeln!(f, "{}", param)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_list_lookup() {
        let list: ParamList = vec![
            Param::new("ordered", "values are ordered or not", "false"),
            Param::new("costmetric", "simple or complex", "simple"),
        ]
        .into_iter()
        .collect();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get("costmetric").unwrap().default_value(), "simple");
        assert!(list.get("values").is_none());

        let names: Vec<_> = list.iter().map(Param::name).collect();
        assert_eq!(names, vec!["ordered", "costmetric"]);
    }

    #[test]
    fn test_param_list_display() {
        let mut list = ParamList::new();
        list.push(Param::new("ordered", "values are ordered or not", "false"));
        assert_eq!(
            list.to_string(),
            "ordered: values are ordered or not (default: false)\n"
        );
    }
}

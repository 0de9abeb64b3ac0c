use std::fmt;

use tracing::debug;

use crate::datatype::DataType;
use crate::error::{Error, Result};

/// Handle to a domain registered in a [`Schema`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DomainId(usize);

impl DomainId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named domain owned by a schema
#[derive(Debug, Clone)]
pub struct Domain {
    name: String,
    data_type: Box<dyn DataType>,
}

impl Domain {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &dyn DataType {
        &*self.data_type
    }
}

/// Owner of every attribute and class domain of a learning problem.
///
/// Vectors refer to domains through [`DomainId`] handles. Reconfiguring a
/// domain requires `&mut Schema`, so it cannot overlap with evaluation that
/// borrows the schema. Cloning deep-copies every domain, which is how a derived
/// problem (such as a binarized one) is set up without touching the original.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    domains: Vec<Domain>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a domain and return its handle
    pub fn register(&mut self, name: impl Into<String>, data_type: Box<dyn DataType>) -> DomainId {
        let name = name.into();
        let id = DomainId(self.domains.len());
        debug!(domain = %name, kind = data_type.name(), id = id.0, "registering domain");
        self.domains.push(Domain { name, data_type });
        id
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Data type of a registered domain
    pub fn get(&self, id: DomainId) -> Result<&dyn DataType> {
        self.domains
            .get(id.0)
            .map(Domain::data_type)
            .ok_or(Error::UnknownDomain(id.0))
    }

    /// Mutable data type of a registered domain
    pub fn get_mut(&mut self, id: DomainId) -> Result<&mut Box<dyn DataType>> {
        self.domains
            .get_mut(id.0)
            .map(|domain| &mut domain.data_type)
            .ok_or(Error::UnknownDomain(id.0))
    }

    pub fn name(&self, id: DomainId) -> Result<&str> {
        self.domains
            .get(id.0)
            .map(Domain::name)
            .ok_or(Error::UnknownDomain(id.0))
    }

    /// Handle of the first domain registered under `name`
    pub fn find(&self, name: &str) -> Option<DomainId> {
        self.domains
            .iter()
            .position(|domain| domain.name == name)
            .map(DomainId)
    }

    /// Set one parameter of a registered domain
    pub fn configure(&mut self, id: DomainId, param: &str, value: &str) -> Result<()> {
        let domain = self
            .domains
            .get_mut(id.0)
            .ok_or(Error::UnknownDomain(id.0))?;
        debug!(domain = %domain.name, param, value, "configuring domain");
        domain.data_type.set_param(param, value)
    }

    /// Swap the data type of a registered domain, keeping its name and handle
    pub(crate) fn replace(&mut self, id: DomainId, data_type: Box<dyn DataType>) -> Result<()> {
        *self.get_mut(id)? = data_type;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (DomainId, &Domain)> + '_ {
        self.domains
            .iter()
            .enumerate()
            .map(|(i, domain)| (DomainId(i), domain))
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for domain in &self.domains {
            writeln!(f, "{}: {}", domain.name, domain.data_type)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datatype::{Continuous, Discrete};

    #[test]
    fn test_register_and_find() {
        let mut schema = Schema::new();
        let colour = schema.register("colour", Box::new(Discrete::new()));
        let height = schema.register("height", Box::new(Continuous::new()));

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.find("height"), Some(height));
        assert_eq!(schema.find("weight"), None);
        assert_eq!(schema.name(colour).unwrap(), "colour");
        assert_eq!(schema.get(height).unwrap().name(), "continuous");
    }

    #[test]
    fn test_configure() {
        let mut schema = Schema::new();
        let colour = schema.register("colour", Box::new(Discrete::new()));
        schema.configure(colour, "values", "red green blue").unwrap();
        assert_eq!(schema.get(colour).unwrap().read("blue"), Ok(2.0));
        assert!(schema.configure(colour, "ordered", "perhaps").is_err());

        let foreign = Schema::new().register("x", Box::new(Discrete::new()));
        let mut empty = Schema::new();
        assert_eq!(
            empty.configure(foreign, "ordered", "true"),
            Err(Error::UnknownDomain(0))
        );
    }

    #[test]
    fn test_unknown_domain() {
        let mut other = Schema::new();
        other.register("a", Box::new(Discrete::new()));
        let foreign = other.register("b", Box::new(Discrete::new()));

        let schema = Schema::new();
        assert_eq!(schema.get(foreign).unwrap_err(), Error::UnknownDomain(1));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut schema = Schema::new();
        let colour = schema.register("colour", Box::new(Discrete::new()));
        let mut derived = schema.clone();
        derived.configure(colour, "values", "red green blue").unwrap();

        assert_eq!(schema.get(colour).unwrap().size(), 2);
        assert_eq!(derived.get(colour).unwrap().size(), 3);
    }

    #[test]
    fn test_display() {
        let mut schema = Schema::new();
        schema.register("class", Box::new(Discrete::new()));
        assert_eq!(schema.to_string(), "class: discrete. values = false true\n");
    }
}

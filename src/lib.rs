//! Attribute domains and distance metrics for instance-based classification
//!
//! Values of every attribute and class domain are handled as `f32` codes.
//! A [`DataType`] reads strings into codes, prints them back, and measures the
//! distance between two codes. Streams and their classifications are kept in
//! coindexed vectors, and multiclass problems can be reduced to binary ones.
//!
//! # Examples
//!
//! ```
//! use tclass::{ClassStreamAttValVector, ClassificationVector, DataType, Discrete, Schema, StreamAttVal};
//!
//! let mut schema = Schema::new();
//! let colour = schema.register("colour", Box::new(Discrete::new()));
//! schema.configure(colour, "values", "red green blue")?;
//! schema.configure(colour, "costmetric", "complex")?;
//! schema.configure(colour, "cost", "red green 5")?;
//!
//! let dt = schema.get(colour)?;
//! let (red, green) = (dt.read("red")?, dt.read("green")?);
//! assert_eq!(dt.distance(red, green)?, 5.0);
//! assert_eq!(dt.distance(green, red)?, 1.0);
//!
//! let mut data = ClassStreamAttValVector::with_classification(ClassificationVector::new(colour))?;
//! data.add(&schema, StreamAttVal::new(vec![0.5, 1.5]), green)?;
//! data.binarify(&mut schema, green)?;
//! assert_eq!(schema.get(colour)?.print(data.class_vec().unwrap().labels()[0])?, "true");
//! # Ok::<(), tclass::Error>(())
//! ```

mod class_stream;
mod classification;
mod error;
mod param;
mod schema;
mod stream;
mod string_map;

/// Data type family: the trait and its variants
pub mod datatype;

// Re-export main types
pub use self::class_stream::ClassStreamAttValVector;
pub use self::classification::{ClassificationVector, FALSE_CODE, TRUE_CODE};
pub use self::datatype::{data_type_by_name, Continuous, DataType, Discrete};
pub use self::error::{Error, Result};
pub use self::param::{Param, ParamList};
pub use self::schema::{Domain, DomainId, Schema};
pub use self::stream::{StreamAttVal, StreamAttValVector};
pub use self::string_map::StringMap;

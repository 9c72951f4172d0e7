use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    case::{abbreviate, to_lower_delimited},
    error::ErrorKind,
    Error,
};

/// A named attribute of a mapped type, such as a struct field or a document property.
///
/// This is the only thing a [`FieldNamingStrategy`] needs to know about a property.
/// It is implemented for string types so that property names can be passed directly:
///
/// ```
/// # use field_naming::{CamelCaseAbbreviatingStrategy, FieldNamingStrategy};
/// let field = CamelCaseAbbreviatingStrategy.field_name(&"fooBar").unwrap();
/// assert_eq!(field, "fb");
/// ```
pub trait Property {
    /// The name of the property, or `None` if the property is unnamed.
    fn name(&self) -> Option<&str>;
}

impl Property for str {
    fn name(&self) -> Option<&str> {
        Some(self)
    }
}

impl Property for String {
    fn name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T> Property for Option<T>
where
    T: Property,
{
    fn name(&self) -> Option<&str> {
        self.as_ref()?.name()
    }
}

impl<T> Property for &T
where
    T: Property + ?Sized,
{
    fn name(&self) -> Option<&str> {
        (**self).name()
    }
}

impl<T> Property for Box<T>
where
    T: Property + ?Sized,
{
    fn name(&self) -> Option<&str> {
        (**self).name()
    }
}

/// A strategy for deriving the name a property is stored under.
///
/// # Errors
///
/// Implementations should return [`Error::invalid_input()`] if the property has no name.
pub trait FieldNamingStrategy {
    /// Returns the field name for `property`.
    fn field_name(&self, property: &dyn Property) -> Result<String, Error>;
}

impl<T> FieldNamingStrategy for &T
where
    T: FieldNamingStrategy + ?Sized,
{
    fn field_name(&self, property: &dyn Property) -> Result<String, Error> {
        (**self).field_name(property)
    }
}

impl<T> FieldNamingStrategy for Box<T>
where
    T: FieldNamingStrategy + ?Sized,
{
    fn field_name(&self, property: &dyn Property) -> Result<String, Error> {
        (**self).field_name(property)
    }
}

impl<T> FieldNamingStrategy for Arc<T>
where
    T: FieldNamingStrategy + ?Sized,
{
    fn field_name(&self, property: &dyn Property) -> Result<String, Error> {
        (**self).field_name(property)
    }
}

fn property_name(property: &dyn Property) -> Result<&str, Error> {
    match property.name() {
        Some(name) => Ok(name),
        None => {
            tracing::debug!("cannot derive a field name for an unnamed property");
            Err(Error::invalid_input())
        }
    }
}

fn resolved(strategy: &'static str, property: &str, field: String) -> String {
    tracing::trace!(strategy, property, field = %field, "resolved field name");
    field
}

/// Uses the property name as the field name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PropertyNameStrategy;

impl FieldNamingStrategy for PropertyNameStrategy {
    fn field_name(&self, property: &dyn Property) -> Result<String, Error> {
        let name = property_name(property)?;
        Ok(resolved("property-name", name, name.to_owned()))
    }
}

/// Splits the property name into camel-case words, lowercases them and joins them
/// with a delimiter.
///
/// ```
/// # use field_naming::{CamelCaseSplittingStrategy, FieldNamingStrategy};
/// let strategy = CamelCaseSplittingStrategy::new("-");
/// assert_eq!(strategy.field_name(&"fooBARFooBar").unwrap(), "foo-bar-foo-bar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamelCaseSplittingStrategy {
    delimiter: String,
}

impl CamelCaseSplittingStrategy {
    /// Creates a new strategy joining words with `delimiter`.
    pub fn new(delimiter: impl Into<String>) -> Self {
        CamelCaseSplittingStrategy {
            delimiter: delimiter.into(),
        }
    }

    /// The string placed between words.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl FieldNamingStrategy for CamelCaseSplittingStrategy {
    fn field_name(&self, property: &dyn Property) -> Result<String, Error> {
        let name = property_name(property)?;
        Ok(resolved(
            "camel-case-splitting",
            name,
            to_lower_delimited(name, &self.delimiter),
        ))
    }
}

/// Converts camel-case property names to snake case, e.g. `fooBar` to `foo_bar`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SnakeCaseStrategy;

impl FieldNamingStrategy for SnakeCaseStrategy {
    fn field_name(&self, property: &dyn Property) -> Result<String, Error> {
        let name = property_name(property)?;
        Ok(resolved("snake-case", name, to_lower_delimited(name, "_")))
    }
}

/// Abbreviates camel-case property names to the first letter of each word, e.g.
/// `fooBar` to `fb`.
///
/// Runs of uppercase letters count as a single word, so `fooBARFooBar` becomes `fbfb`.
/// See [`abbreviate()`](crate::abbreviate).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CamelCaseAbbreviatingStrategy;

impl FieldNamingStrategy for CamelCaseAbbreviatingStrategy {
    fn field_name(&self, property: &dyn Property) -> Result<String, Error> {
        let name = property_name(property)?;
        Ok(resolved("camel-case-abbreviating", name, abbreviate(name)))
    }
}

/// Selects one of the built-in field naming strategies.
///
/// This can be parsed from a string, so an application can make the strategy
/// part of its own configuration.
///
/// | Name                               | Strategy                          |
/// |------------------------------------|-----------------------------------|
/// | `property-name`                    | [`PropertyNameStrategy`]          |
/// | `snake-case`                       | [`SnakeCaseStrategy`]             |
/// | `camel-case-abbreviating`          | [`CamelCaseAbbreviatingStrategy`] |
/// | `camel-case-splitting:<delimiter>` | [`CamelCaseSplittingStrategy`]    |
///
/// Names are matched case-insensitively and `_` may be used in place of `-`.
/// The delimiter is taken verbatim.
///
/// ```
/// # use field_naming::{FieldNamingStrategy, NamingStrategy};
/// let strategy: NamingStrategy = "camel-case-abbreviating".parse().unwrap();
/// assert_eq!(strategy.field_name(&"fooBar").unwrap(), "fb");
///
/// let strategy: NamingStrategy = "camel-case-splitting:.".parse().unwrap();
/// assert_eq!(strategy.field_name(&"fooBar").unwrap(), "foo.bar");
///
/// assert!("kebab".parse::<NamingStrategy>().unwrap_err().is_unknown_strategy());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum NamingStrategy {
    /// See [`PropertyNameStrategy`].
    #[default]
    PropertyName,
    /// See [`SnakeCaseStrategy`].
    SnakeCase,
    /// See [`CamelCaseAbbreviatingStrategy`].
    CamelCaseAbbreviating,
    /// See [`CamelCaseSplittingStrategy`].
    CamelCaseSplitting(CamelCaseSplittingStrategy),
}

impl FieldNamingStrategy for NamingStrategy {
    fn field_name(&self, property: &dyn Property) -> Result<String, Error> {
        match self {
            NamingStrategy::PropertyName => PropertyNameStrategy.field_name(property),
            NamingStrategy::SnakeCase => SnakeCaseStrategy.field_name(property),
            NamingStrategy::CamelCaseAbbreviating => {
                CamelCaseAbbreviatingStrategy.field_name(property)
            }
            NamingStrategy::CamelCaseSplitting(strategy) => strategy.field_name(property),
        }
    }
}

impl FromStr for NamingStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, delimiter) = match s.split_once(':') {
            Some((kind, delimiter)) => (kind, Some(delimiter)),
            None => (s, None),
        };

        match (kind.to_ascii_lowercase().replace('_', "-").as_str(), delimiter) {
            ("property-name", None) => Ok(NamingStrategy::PropertyName),
            ("snake-case", None) => Ok(NamingStrategy::SnakeCase),
            ("camel-case-abbreviating", None) => Ok(NamingStrategy::CamelCaseAbbreviating),
            ("camel-case-splitting", Some(delimiter)) => Ok(NamingStrategy::CamelCaseSplitting(
                CamelCaseSplittingStrategy::new(delimiter),
            )),
            _ => Err(Error::from_kind(ErrorKind::UnknownStrategy {
                name: s.to_owned(),
            })),
        }
    }
}

impl fmt::Display for NamingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingStrategy::PropertyName => write!(f, "property-name"),
            NamingStrategy::SnakeCase => write!(f, "snake-case"),
            NamingStrategy::CamelCaseAbbreviating => write!(f, "camel-case-abbreviating"),
            NamingStrategy::CamelCaseSplitting(strategy) => {
                write!(f, "camel-case-splitting:{}", strategy.delimiter())
            }
        }
    }
}

impl From<PropertyNameStrategy> for NamingStrategy {
    fn from(_: PropertyNameStrategy) -> Self {
        NamingStrategy::PropertyName
    }
}

impl From<SnakeCaseStrategy> for NamingStrategy {
    fn from(_: SnakeCaseStrategy) -> Self {
        NamingStrategy::SnakeCase
    }
}

impl From<CamelCaseAbbreviatingStrategy> for NamingStrategy {
    fn from(_: CamelCaseAbbreviatingStrategy) -> Self {
        NamingStrategy::CamelCaseAbbreviating
    }
}

impl From<CamelCaseSplittingStrategy> for NamingStrategy {
    fn from(strategy: CamelCaseSplittingStrategy) -> Self {
        NamingStrategy::CamelCaseSplitting(strategy)
    }
}

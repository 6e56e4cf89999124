//! A declarative description of the arguments accepted on a command line.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// The character that introduces an argument name, unless overridden (e.g. `-in`).
pub const DEFAULT_PREFIX: char = '-';

/// Defines the possible errors that may occur while registering arguments.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// The primary or alias name is empty.
    #[error("empty argument name")]
    EmptyName,

    /// The name is already used as a primary or alias name by another argument.
    #[error("argument name \"{0}\" is already registered")]
    NameCollision(String),
}

/// Variant of argument. It only drives the usage text, values are always stored as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentKind {
    /// Free text (e.g. a namespace).
    Text,

    /// A number, left unchecked until the consumer reads it.
    Number,

    /// A file system path, possibly quoted.
    Path,

    /// A flag whose presence alone is the signal. It takes no value.
    FlagOnly,
}

impl ArgumentKind {
    /// Placeholder shown after the argument name in usage text.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            ArgumentKind::Text => Some("<text>"),
            ArgumentKind::Number => Some("<number>"),
            ArgumentKind::Path => Some("<path>"),
            ArgumentKind::FlagOnly => None,
        }
    }

    /// Evaluate if the argument name must be followed by a value.
    #[inline(always)]
    pub fn takes_value(self) -> bool {
        !matches!(self, ArgumentKind::FlagOnly)
    }
}

/// Defines one recognized argument. Names are stored lowercase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArgumentSpec {
    primary: String,
    alias: Option<String>,
    kind: ArgumentKind,
    required: bool,
}

impl ArgumentSpec {
    /// Create an optional argument with the given primary name.
    pub fn new(primary: &str, kind: ArgumentKind) -> Self {
        ArgumentSpec {
            primary: primary.to_lowercase(),
            alias: None,
            kind,
            required: false,
        }
    }

    /// Set an alternate (usually shorter) name.
    pub fn alias(mut self, alias: &str) -> Self {
        self.alias = Some(alias.to_lowercase());
        self
    }

    /// Mark the argument as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[inline(always)]
    pub fn primary_name(&self) -> &str {
        &self.primary
    }

    #[inline(always)]
    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    #[inline(always)]
    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    #[inline(always)]
    pub fn is_required(&self) -> bool {
        self.required
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self.primary.as_str()).chain(self.alias.as_deref())
    }
}

/// Defines the ordered, append-only set of recognized arguments.
///
/// Every primary and alias name is indexed once at registration, so looking up a name token
/// does not scan the whole set.
#[derive(Clone, Debug)]
pub struct ArgumentSet {
    prefix: char,
    specs: Vec<ArgumentSpec>,
    index: BTreeMap<String, usize>,
}

impl Default for ArgumentSet {
    fn default() -> Self {
        ArgumentSet {
            prefix: DEFAULT_PREFIX,
            specs: Vec::new(),
            index: BTreeMap::new(),
        }
    }
}

impl ArgumentSet {
    /// Create an empty set using the default `-` prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another character to introduce argument names.
    pub fn with_prefix(mut self, prefix: char) -> Self {
        self.prefix = prefix;
        self
    }

    /// Register an argument. Name collisions are programming errors.
    pub fn register(&mut self, spec: ArgumentSpec) {
        self.try_register(spec)
            .expect("argument names must be unique")
    }

    /// Try to register an argument, checking its names against every registered name.
    pub fn try_register(&mut self, spec: ArgumentSpec) -> Result<(), Error> {
        if spec.names().any(str::is_empty) {
            return Err(Error::EmptyName);
        }

        if let Some(name) = spec.names().find(|x| self.index.contains_key(*x)) {
            return Err(Error::NameCollision(name.to_string()));
        }

        if spec.alias_name() == Some(spec.primary_name()) {
            return Err(Error::NameCollision(spec.primary.clone()));
        }

        let position = self.specs.len();
        for name in spec.names() {
            self.index.insert(name.to_string(), position);
        }
        self.specs.push(spec);

        Ok(())
    }

    /// Look up an argument by primary or alias name, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<&ArgumentSpec> {
        self.position(name).map(|i| &self.specs[i])
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.index.get(&name.to_lowercase()).copied()
    }

    #[inline(always)]
    pub(crate) fn entry(&self, position: usize) -> &ArgumentSpec {
        &self.specs[position]
    }

    #[inline(always)]
    pub fn prefix(&self) -> char {
        self.prefix
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Iterate over arguments in registration order.
    pub fn iter(&self) -> core::slice::Iter<'_, ArgumentSpec> {
        self.specs.iter()
    }

    /// Render the one-line usage synopsis (e.g. `-in <path> [-out <path>]`).
    pub fn synopsis(&self) -> Synopsis<'_> {
        Synopsis { set: self }
    }
}

impl<'a> IntoIterator for &'a ArgumentSet {
    type Item = &'a ArgumentSpec;
    type IntoIter = core::slice::Iter<'a, ArgumentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Usage synopsis of an [`ArgumentSet`].
pub struct Synopsis<'a> {
    set: &'a ArgumentSet,
}

impl fmt::Display for Synopsis<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, spec) in self.set.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            if !spec.required {
                f.write_str("[")?;
            }

            write!(f, "{}{}", self.set.prefix, spec.primary)?;

            if let Some(placeholder) = spec.kind.placeholder() {
                write!(f, " {placeholder}")?;
            }

            if !spec.required {
                f.write_str("]")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use googletest::prelude::*;

    use super::*;

    fn sample() -> ArgumentSet {
        let mut set = ArgumentSet::new();
        set.register(ArgumentSpec::new("in", ArgumentKind::Path).alias("i").required());
        set.register(ArgumentSpec::new("out", ArgumentKind::Path).alias("o"));
        set.register(ArgumentSpec::new("verbose", ArgumentKind::FlagOnly));
        set
    }

    #[test]
    fn it_should_lookup_by_primary_or_alias() {
        let set = sample();

        assert_that!(set.lookup("in").map(|x| x.primary_name()), eq(Some("in")));
        assert_that!(set.lookup("i").map(|x| x.primary_name()), eq(Some("in")));
        assert_that!(set.lookup("O").map(|x| x.primary_name()), eq(Some("out")));
        assert_that!(set.lookup("missing").is_none(), eq(true));
    }

    #[test]
    fn it_should_store_names_lowercase() {
        let spec = ArgumentSpec::new("NameSpace", ArgumentKind::Text).alias("N");

        assert_that!(spec.primary_name(), eq("namespace"));
        assert_that!(spec.alias_name(), eq(Some("n")));
    }

    #[test]
    fn it_should_reject_name_collision() {
        let mut set = sample();

        let res = set.try_register(ArgumentSpec::new("I", ArgumentKind::Text));
        assert_that!(res, eq(&Err(Error::NameCollision("i".to_string()))));

        let res = set.try_register(ArgumentSpec::new("input", ArgumentKind::Text).alias("out"));
        assert_that!(res, eq(&Err(Error::NameCollision("out".to_string()))));

        let res = set.try_register(ArgumentSpec::new("same", ArgumentKind::Text).alias("same"));
        assert_that!(res, eq(&Err(Error::NameCollision("same".to_string()))));

        assert_that!(set.len(), eq(3));
    }

    #[test]
    fn it_should_reject_empty_name() {
        let mut set = ArgumentSet::new();

        let res = set.try_register(ArgumentSpec::new("", ArgumentKind::Text));
        assert_that!(res, eq(&Err(Error::EmptyName)));

        let res = set.try_register(ArgumentSpec::new("x", ArgumentKind::Text).alias(""));
        assert_that!(res, eq(&Err(Error::EmptyName)));

        assert_that!(set.is_empty(), eq(true));
    }

    #[test]
    #[should_panic]
    fn it_should_panic_on_duplicate_registration() {
        let mut set = sample();
        set.register(ArgumentSpec::new("in", ArgumentKind::Path));
    }

    #[test]
    fn it_should_render_synopsis() {
        let set = sample();

        let synopsis = set.synopsis().to_string();
        assert_that!(synopsis.as_str(), eq("-in <path> [-out <path>] [-verbose]"));

        let set = set.with_prefix('/');

        let synopsis = set.synopsis().to_string();
        assert_that!(synopsis.as_str(), eq("/in <path> [/out <path>] [/verbose]"));
    }
}

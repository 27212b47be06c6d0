//! Path expression types.

/// Key part of a member-access leg: `.name` or `.*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySelector {
    Name(String),
    Wildcard,
}

/// Index part of an element-access leg: `[N]` or `[*]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexSelector {
    At(usize),
    Wildcard,
}

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathLeg {
    /// Object member access.
    Key(KeySelector),
    /// Array element access.
    Index(IndexSelector),
    /// `**`: the current node and every descendant.
    DoubleAsterisk,
}

impl PathLeg {
    pub fn key(name: impl Into<String>) -> Self {
        PathLeg::Key(KeySelector::Name(name.into()))
    }

    pub fn any_key() -> Self {
        PathLeg::Key(KeySelector::Wildcard)
    }

    pub fn index(index: usize) -> Self {
        PathLeg::Index(IndexSelector::At(index))
    }

    pub fn any_index() -> Self {
        PathLeg::Index(IndexSelector::Wildcard)
    }

    pub fn double_asterisk() -> Self {
        PathLeg::DoubleAsterisk
    }

    /// Whether this leg is `*` (on either keys or indexes) or `**`.
    pub fn is_wildcard(&self) -> bool {
        matches!(
            self,
            PathLeg::Key(KeySelector::Wildcard)
                | PathLeg::Index(IndexSelector::Wildcard)
                | PathLeg::DoubleAsterisk
        )
    }
}

/// Wildcard summary of a path expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PathExpressionFlags(u8);

impl PathExpressionFlags {
    pub const CONTAINS_ASTERISK: u8 = 0x01;
    pub const CONTAINS_DOUBLE_ASTERISK: u8 = 0x02;

    pub fn from_legs(legs: &[PathLeg]) -> Self {
        let mut bits = 0;
        for leg in legs {
            match leg {
                PathLeg::Key(KeySelector::Wildcard) | PathLeg::Index(IndexSelector::Wildcard) => {
                    bits |= Self::CONTAINS_ASTERISK;
                }
                PathLeg::DoubleAsterisk => bits |= Self::CONTAINS_DOUBLE_ASTERISK,
                _ => {}
            }
        }
        Self(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains_asterisk(self) -> bool {
        self.0 & Self::CONTAINS_ASTERISK != 0
    }

    pub fn contains_double_asterisk(self) -> bool {
        self.0 & Self::CONTAINS_DOUBLE_ASTERISK != 0
    }

    pub fn contains_any_asterisk(self) -> bool {
        self.0 != 0
    }
}

/// A parsed path expression: an ordered list of legs.
///
/// Matching consumes legs front to back through [`PathExpression::pop_one_leg`],
/// which borrows the remainder instead of slicing the expression itself, so
/// one expression can be applied to any number of documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathExpression {
    legs: Vec<PathLeg>,
    flags: PathExpressionFlags,
}

impl PathExpression {
    pub fn new(legs: Vec<PathLeg>) -> Self {
        let flags = PathExpressionFlags::from_legs(&legs);
        Self { legs, flags }
    }

    /// The `$` expression: no legs, matches the document itself.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn legs(&self) -> &[PathLeg] {
        &self.legs
    }

    pub fn flags(&self) -> PathExpressionFlags {
        self.flags
    }

    pub fn contains_any_asterisk(&self) -> bool {
        self.flags.contains_any_asterisk()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Split off the first leg; `None` once every leg is consumed.
    pub fn pop_one_leg(&self) -> Option<(&PathLeg, &[PathLeg])> {
        self.legs.split_first()
    }
}

impl FromIterator<PathLeg> for PathExpression {
    fn from_iter<I: IntoIterator<Item = PathLeg>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<PathLeg>> for PathExpression {
    fn from(legs: Vec<PathLeg>) -> Self {
        Self::new(legs)
    }
}

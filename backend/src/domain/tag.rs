//! Tag aggregate: a labelled category owned by exactly one user.
//!
//! Ownership is carried on the entity itself; every port that reads or
//! mutates tags takes the owning [`UserId`] explicitly so no access path can
//! skip the owner predicate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UserId;

/// Maximum number of characters a tag name may hold.
pub const TAG_NAME_MAX: usize = 255;

/// Validation errors returned by tag value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Name was empty or whitespace only.
    BlankName,
    /// Name exceeded [`TAG_NAME_MAX`] characters.
    NameTooLong { max: usize, actual: usize },
    /// Name contained a control character such as NUL.
    ControlCharacter { position: usize },
}

impl fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankName => write!(f, "tag name must not be blank"),
            Self::NameTooLong { max, actual } => {
                write!(f, "tag name must be at most {max} characters (got {actual})")
            }
            Self::ControlCharacter { position } => write!(
                f,
                "tag name must not contain control characters (found at {position})"
            ),
        }
    }
}

impl std::error::Error for TagValidationError {}

/// Error returned when text does not name a tag id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTagIdError;

impl fmt::Display for ParseTagIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("tag id must be a positive integer")
    }
}

impl std::error::Error for ParseTagIdError {}

/// System-assigned tag identifier.
///
/// # Examples
/// ```
/// use recipe_backend::domain::TagId;
///
/// let id: TagId = "42".parse().expect("numeric id");
/// assert_eq!(id.get(), 42);
/// assert!("abc".parse::<TagId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(i64);

impl TagId {
    /// Wrap an identifier produced by storage.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TagId {
    type Err = ParseTagIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(ParseTagIdError),
        }
    }
}

/// Validated tag name.
///
/// ## Invariants
/// - Not blank once trimmed.
/// - At most [`TAG_NAME_MAX`] characters.
/// - No control characters (PostgreSQL text cannot hold NUL).
///
/// The value is kept exactly as supplied.
///
/// # Examples
/// ```
/// use recipe_backend::domain::TagName;
///
/// let name = TagName::new("Dessert").expect("valid name");
/// assert_eq!(name.as_ref(), "Dessert");
/// assert!(TagName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    /// Validate and construct a [`TagName`].
    pub fn new(name: impl Into<String>) -> Result<Self, TagValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TagValidationError::BlankName);
        }
        let actual = name.chars().count();
        if actual > TAG_NAME_MAX {
            return Err(TagValidationError::NameTooLong {
                max: TAG_NAME_MAX,
                actual,
            });
        }
        if let Some(position) = name.chars().position(char::is_control) {
            return Err(TagValidationError::ControlCharacter { position });
        }
        Ok(Self(name))
    }

    /// Consume the wrapper, returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

impl TryFrom<String> for TagName {
    type Error = TagValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A tag together with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    id: TagId,
    name: TagName,
    owner: UserId,
}

impl Tag {
    pub fn new(id: TagId, name: TagName, owner: UserId) -> Self {
        Self { id, name, owner }
    }

    pub fn id(&self) -> TagId {
        self.id
    }

    pub fn name(&self) -> &TagName {
        &self.name
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Apply `changes`, leaving unspecified fields untouched.
    pub fn apply(&mut self, changes: TagChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
    }
}

/// Partial update to a tag. `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagChanges {
    pub name: Option<TagName>,
}

impl TagChanges {
    /// Change set replacing the name.
    pub fn rename(name: TagName) -> Self {
        Self { name: Some(name) }
    }

    /// Whether applying this change set would modify nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// Ordering used for listings: name descending, then id descending.
pub fn listing_order(a: &Tag, b: &Tag) -> std::cmp::Ordering {
    b.name
        .as_ref()
        .cmp(a.name.as_ref())
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn owner() -> UserId {
        UserId::random()
    }

    #[rstest]
    #[case("", TagValidationError::BlankName)]
    #[case(" \t\n", TagValidationError::BlankName)]
    fn rejects_blank_names(#[case] raw: &str, #[case] expected: TagValidationError) {
        assert_eq!(TagName::new(raw), Err(expected));
    }

    #[rstest]
    fn enforces_character_limit_not_byte_limit() {
        let at_limit = "é".repeat(TAG_NAME_MAX);
        assert!(TagName::new(at_limit).is_ok());

        let over = "a".repeat(TAG_NAME_MAX + 1);
        assert_eq!(
            TagName::new(over),
            Err(TagValidationError::NameTooLong {
                max: TAG_NAME_MAX,
                actual: TAG_NAME_MAX + 1,
            })
        );
    }

    #[rstest]
    fn keeps_surrounding_whitespace() {
        let name = TagName::new(" Brunch ").expect("valid");
        assert_eq!(name.as_ref(), " Brunch ");
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("abc")]
    #[case("")]
    #[case("9223372036854775808")]
    fn rejects_unusable_ids(#[case] raw: &str) {
        assert_eq!(raw.parse::<TagId>(), Err(ParseTagIdError));
    }

    #[rstest]
    #[case("Des\u{0}sert", 3)]
    #[case("\u{7}Brunch", 0)]
    #[case("Tea\ntime", 3)]
    fn rejects_control_characters(#[case] raw: &str, #[case] position: usize) {
        assert_eq!(
            TagName::new(raw),
            Err(TagValidationError::ControlCharacter { position })
        );
    }

    #[rstest]
    fn empty_changes_leave_tag_untouched(owner: UserId) {
        let mut tag = Tag::new(TagId::new(1), TagName::new("After Dinner").expect("valid"), owner);
        let before = tag.clone();
        tag.apply(TagChanges::default());
        assert_eq!(tag, before);
    }

    #[rstest]
    fn rename_replaces_only_the_name(owner: UserId) {
        let mut tag = Tag::new(
            TagId::new(7),
            TagName::new("After Dinner").expect("valid"),
            owner.clone(),
        );
        tag.apply(TagChanges::rename(TagName::new("Dessert").expect("valid")));
        assert_eq!(tag.name().as_ref(), "Dessert");
        assert_eq!(tag.id(), TagId::new(7));
        assert_eq!(tag.owner(), &owner);
    }

    #[rstest]
    fn listing_order_sorts_by_name_then_id_descending(owner: UserId) {
        let make = |id, name: &str| {
            Tag::new(TagId::new(id), TagName::new(name).expect("valid"), owner.clone())
        };
        let mut tags = vec![
            make(1, "Test tag"),
            make(2, "Test tag2"),
            make(3, "Breakfast"),
            make(4, "Test tag"),
        ];
        tags.sort_by(listing_order);
        let order: Vec<i64> = tags.iter().map(|t| t.id().get()).collect();
        assert_eq!(order, vec![2, 4, 1, 3]);
    }
}

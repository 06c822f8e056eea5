//! Menu item name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`ItemName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemNameError {
    /// The input is empty.
    #[error("item name cannot be empty")]
    Empty,
}

/// The name of a menu item, used as the line item key in a cart.
///
/// Names are kept exactly as given. Two names are the same cart entry only
/// if they are byte-for-byte equal, so `"Pizza"` and `"Pizza "` are distinct.
/// Cleaning up display text is the input layer's job.
///
/// ## Constraints
///
/// - Not empty
///
/// ## Examples
///
/// ```
/// use mafia_core::ItemName;
///
/// assert_eq!(ItemName::parse("Пицца Маргарита").unwrap().as_str(), "Пицца Маргарита");
/// assert_ne!(ItemName::parse("Pizza").unwrap(), ItemName::parse("Pizza ").unwrap());
/// assert!(ItemName::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Parse an `ItemName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    pub fn parse(s: &str) -> Result<Self, ItemNameError> {
        Self::try_from(s.to_owned())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ItemName {
    type Err = ItemNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemName {
    type Error = ItemNameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.is_empty() {
            return Err(ItemNameError::Empty);
        }
        Ok(Self(s))
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> Self {
        name.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

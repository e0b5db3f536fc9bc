//! Closed set of category tags attached to transactions.

use std::{fmt, str::FromStr};

use serde::{de::Deserializer, Deserialize, Serialize, Serializer};

/// Category tag carried by every transaction.
///
/// Declaration order doubles as the deterministic tie-break order used when
/// breakdown slices carry equal amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ExpenseTag {
    Fuel,
    Snacks,
    Trip,
    Travel,
    Food,
    FoodOrdering,
    Shopping,
    Bills,
    Entertainment,
    #[default]
    Others,
}

impl ExpenseTag {
    pub const ALL: [ExpenseTag; 10] = [
        ExpenseTag::Fuel,
        ExpenseTag::Snacks,
        ExpenseTag::Trip,
        ExpenseTag::Travel,
        ExpenseTag::Food,
        ExpenseTag::FoodOrdering,
        ExpenseTag::Shopping,
        ExpenseTag::Bills,
        ExpenseTag::Entertainment,
        ExpenseTag::Others,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseTag::Fuel => "Fuel",
            ExpenseTag::Snacks => "Snacks",
            ExpenseTag::Trip => "Trip",
            ExpenseTag::Travel => "Travel",
            ExpenseTag::Food => "Food",
            ExpenseTag::FoodOrdering => "Food Ordering",
            ExpenseTag::Shopping => "Shopping",
            ExpenseTag::Bills => "Bills",
            ExpenseTag::Entertainment => "Entertainment",
            ExpenseTag::Others => "Others",
        }
    }

    /// Lenient lookup used when reading stored data: unknown labels map to `Others`.
    pub fn from_label(value: &str) -> Self {
        value.parse().unwrap_or(ExpenseTag::Others)
    }
}

impl fmt::Display for ExpenseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label does not name a known tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tag `{}`", self.0)
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for ExpenseTag {
    type Err = UnknownTag;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        ExpenseTag::ALL
            .into_iter()
            .find(|tag| tag.as_str().replace(' ', "").to_ascii_lowercase() == normalized)
            .ok_or_else(|| UnknownTag(value.to_string()))
    }
}

impl Serialize for ExpenseTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExpenseTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .map(|label| ExpenseTag::from_label(&label))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names_loosely() {
        assert_eq!("Food Ordering".parse::<ExpenseTag>(), Ok(ExpenseTag::FoodOrdering));
        assert_eq!("food-ordering".parse::<ExpenseTag>(), Ok(ExpenseTag::FoodOrdering));
        assert_eq!("  fuel ".parse::<ExpenseTag>(), Ok(ExpenseTag::Fuel));
        assert!("Rent".parse::<ExpenseTag>().is_err());
    }

    #[test]
    fn unknown_labels_deserialize_as_others() {
        let tag: ExpenseTag = serde_json::from_str("\"Groceries\"").unwrap();
        assert_eq!(tag, ExpenseTag::Others);
        let tag: ExpenseTag = serde_json::from_str("null").unwrap();
        assert_eq!(tag, ExpenseTag::Others);
    }

    #[test]
    fn serializes_display_name() {
        let json = serde_json::to_string(&ExpenseTag::FoodOrdering).unwrap();
        assert_eq!(json, "\"Food Ordering\"");
    }
}

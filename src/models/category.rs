//! Transaction categories
//!
//! A fixed, closed set. `Income` is used for non-expense transactions by
//! convention; every other category is an expense category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a transaction or budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Income,
    Housing,
    Food,
    Transportation,
    Education,
    Entertainment,
    Utilities,
    Healthcare,
    Shopping,
    Savings,
    Debt,
    Remittances,
    Other,
}

impl Category {
    /// Categories a budget can be set for
    pub const EXPENSE: [Category; 12] = [
        Category::Housing,
        Category::Food,
        Category::Transportation,
        Category::Education,
        Category::Entertainment,
        Category::Utilities,
        Category::Healthcare,
        Category::Shopping,
        Category::Savings,
        Category::Debt,
        Category::Remittances,
        Category::Other,
    ];

    /// Every category, income first
    pub const ALL: [Category; 13] = [
        Category::Income,
        Category::Housing,
        Category::Food,
        Category::Transportation,
        Category::Education,
        Category::Entertainment,
        Category::Utilities,
        Category::Healthcare,
        Category::Shopping,
        Category::Savings,
        Category::Debt,
        Category::Remittances,
        Category::Other,
    ];

    /// The stable lowercase key used on the wire and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Housing => "housing",
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::Education => "education",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Healthcare => "healthcare",
            Self::Shopping => "shopping",
            Self::Savings => "savings",
            Self::Debt => "debt",
            Self::Remittances => "remittances",
            Self::Other => "other",
        }
    }

    /// Human-readable label shown in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Receita",
            Self::Housing => "Habitação",
            Self::Food => "Alimentação",
            Self::Transportation => "Transporte",
            Self::Education => "Educação",
            Self::Entertainment => "Entretenimento",
            Self::Utilities => "Serviços",
            Self::Healthcare => "Saúde",
            Self::Shopping => "Compras",
            Self::Savings => "Poupança",
            Self::Debt => "Dívidas",
            Self::Remittances => "Remessas",
            Self::Other => "Outros",
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.key() == needle || c.label().to_lowercase() == needle)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_categories_exclude_income() {
        assert!(!Category::EXPENSE.contains(&Category::Income));
        assert_eq!(Category::ALL.len(), Category::EXPENSE.len() + 1);
    }

    #[test]
    fn test_parse_by_key_and_label() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" FOOD ".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Saúde".parse::<Category>().unwrap(), Category::Healthcare);
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Remittances).unwrap();
        assert_eq!(json, "\"remittances\"");
        let back: Category = serde_json::from_str("\"healthcare\"").unwrap();
        assert_eq!(back, Category::Healthcare);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Income.label(), "Receita");
        assert_eq!(Category::Other.label(), "Outros");
        assert_eq!(Category::Food.to_string(), "food");
    }
}

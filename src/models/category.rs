//! Transaction categories
//!
//! A fixed set of categories; there is no user-defined category management.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    /// Gehalt
    Salary,
    /// Lebensmittel
    Groceries,
    /// Wohnen
    Housing,
    /// Nebenkosten
    Utilities,
    /// Sparen
    Savings,
    Transport,
    Shopping,
    /// Freizeit
    Leisure,
    /// Gesundheit
    Health,
    /// Sonstige Einnahmen
    OtherIncome,
    /// Sonstige Ausgaben
    OtherExpense,
}

impl TransactionCategory {
    /// All categories in declaration order
    pub const ALL: [TransactionCategory; 11] = [
        Self::Salary,
        Self::Groceries,
        Self::Housing,
        Self::Utilities,
        Self::Savings,
        Self::Transport,
        Self::Shopping,
        Self::Leisure,
        Self::Health,
        Self::OtherIncome,
        Self::OtherExpense,
    ];

    /// Parse a category from its English or German name, or its position in `ALL`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if let Ok(index) = s.parse::<usize>() {
            return Self::ALL.get(index).copied();
        }

        match s.replace([' ', '-'], "_").as_str() {
            "salary" | "gehalt" => Some(Self::Salary),
            "groceries" | "lebensmittel" => Some(Self::Groceries),
            "housing" | "wohnen" => Some(Self::Housing),
            "utilities" | "nebenkosten" => Some(Self::Utilities),
            "savings" | "sparen" => Some(Self::Savings),
            "transport" => Some(Self::Transport),
            "shopping" => Some(Self::Shopping),
            "leisure" | "freizeit" => Some(Self::Leisure),
            "health" | "gesundheit" => Some(Self::Health),
            "other_income" | "sonstige_einnahmen" => Some(Self::OtherIncome),
            "other_expense" | "sonstige_ausgaben" => Some(Self::OtherExpense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Salary => "Salary",
            Self::Groceries => "Groceries",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Savings => "Savings",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Leisure => "Leisure",
            Self::Health => "Health",
            Self::OtherIncome => "Other Income",
            Self::OtherExpense => "Other Expense",
        };
        write!(f, "{}", name)
    }
}

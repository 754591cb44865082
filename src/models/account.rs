//! Account model
//!
//! Represents bank and brokerage accounts ("Konten").

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Currency assigned when none is given
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Current account (Girokonto)
    #[default]
    Checking,
    /// Savings account (Sparkonto)
    Savings,
    /// Instant-access savings (Tagesgeld)
    DailyMoney,
    /// Credit card (Kreditkarte)
    CreditCard,
    /// Securities account (Depot)
    Brokerage,
}

impl AccountType {
    /// All account types in declaration order
    pub const ALL: [AccountType; 5] = [
        Self::Checking,
        Self::Savings,
        Self::DailyMoney,
        Self::CreditCard,
        Self::Brokerage,
    ];

    /// Parse account type from string (English or German names)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "checking" | "girokonto" | "giro" => Some(Self::Checking),
            "savings" | "sparkonto" => Some(Self::Savings),
            "daily_money" | "dailymoney" | "tagesgeld" | "tagesgeldkonto" => {
                Some(Self::DailyMoney)
            }
            "credit_card" | "creditcard" | "credit" | "kreditkarte" => Some(Self::CreditCard),
            "brokerage" | "depot" => Some(Self::Brokerage),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::DailyMoney => write!(f, "Daily Money"),
            Self::CreditCard => write!(f, "Credit Card"),
            Self::Brokerage => write!(f, "Brokerage"),
        }
    }
}

/// A bank or brokerage account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Identifier assigned by the account store
    pub id: AccountId,

    /// Display name (e.g., "Hauptkonto")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// IBAN as entered; not checksum-validated
    #[serde(default)]
    pub iban: String,

    /// Current balance; may be negative for credit cards
    pub balance: Money,

    /// Currency code
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Name of the bank holding the account
    pub bank_name: String,

    /// Inactive accounts stay listed but are excluded from the total balance
    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    pub description: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_active() -> bool {
    true
}

impl Account {
    /// Create a new active account with a zero balance
    ///
    /// The id is a placeholder until the account store assigns one.
    pub fn new(
        name: impl Into<String>,
        account_type: AccountType,
        bank_name: impl Into<String>,
    ) -> Self {
        Self {
            id: AccountId::FIRST,
            name: name.into(),
            account_type,
            iban: String::new(),
            balance: Money::zero(),
            currency: default_currency(),
            bank_name: bank_name.into(),
            is_active: true,
            description: String::new(),
        }
    }

    /// Create a new account with an opening balance
    pub fn with_balance(
        name: impl Into<String>,
        account_type: AccountType,
        bank_name: impl Into<String>,
        balance: Money,
    ) -> Self {
        let mut account = Self::new(name, account_type, bank_name);
        account.balance = balance;
        account
    }

    /// Copy every mutable field from `fields`, keeping this account's id
    pub fn apply(&mut self, fields: &Account) {
        self.name = fields.name.clone();
        self.account_type = fields.account_type;
        self.iban = fields.iban.clone();
        self.balance = fields.balance;
        self.currency = fields.currency.clone();
        self.bank_name = fields.bank_name.clone();
        self.is_active = fields.is_active;
        self.description = fields.description.clone();
    }

    /// Case-insensitive substring match on name, bank name or IBAN
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.bank_name.to_lowercase().contains(&needle)
            || self.iban.to_lowercase().contains(&needle)
    }

    /// Validate the required fields
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.bank_name.trim().is_empty() {
            return Err(AccountValidationError::EmptyBankName);
        }

        if self.currency.trim().is_empty() {
            return Err(AccountValidationError::EmptyCurrency);
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    EmptyBankName,
    EmptyCurrency,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name is required"),
            Self::EmptyBankName => write!(f, "Bank name is required"),
            Self::EmptyCurrency => write!(f, "Currency is required"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new("Hauptkonto", AccountType::Checking, "Sparkasse");
        assert_eq!(account.name, "Hauptkonto");
        assert_eq!(account.bank_name, "Sparkasse");
        assert_eq!(account.currency, "EUR");
        assert!(account.is_active);
        assert_eq!(account.balance, Money::zero());
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Hauptkonto", AccountType::Checking, "Sparkasse");
        assert!(account.validate().is_ok());

        account.name = "   ".into();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "Hauptkonto".into();
        account.bank_name = String::new();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyBankName));

        account.bank_name = "Sparkasse".into();
        account.currency = String::new();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyCurrency));
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut stored = Account::new("Alt", AccountType::Checking, "Sparkasse");
        stored.id = AccountId::new(3);

        let mut fields = Account::with_balance(
            "Neu",
            AccountType::Savings,
            "ING",
            Money::from_cents(1000),
        );
        fields.id = AccountId::new(99);
        fields.is_active = false;

        stored.apply(&fields);
        assert_eq!(stored.id, AccountId::new(3));
        assert_eq!(stored.name, "Neu");
        assert_eq!(stored.account_type, AccountType::Savings);
        assert_eq!(stored.bank_name, "ING");
        assert_eq!(stored.balance.cents(), 1000);
        assert!(!stored.is_active);
    }

    #[test]
    fn test_matches_search() {
        let mut account = Account::new("Tagesgeldkonto", AccountType::DailyMoney, "ING");
        account.iban = "DE89 5001 0517 0123 4567 89".into();

        assert!(account.matches_search("tagesgeld"));
        assert!(account.matches_search("ing"));
        assert!(account.matches_search("5001"));
        assert!(!account.matches_search("sparkasse"));
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!(AccountType::parse("checking"), Some(AccountType::Checking));
        assert_eq!(AccountType::parse("Tagesgeld"), Some(AccountType::DailyMoney));
        assert_eq!(AccountType::parse("KREDITKARTE"), Some(AccountType::CreditCard));
        assert_eq!(AccountType::parse("depot"), Some(AccountType::Brokerage));
        assert_eq!(AccountType::parse("invalid"), None);
    }

    #[test]
    fn test_serialization_defaults() {
        let json = r#"{"id":1,"name":"Depot","type":"brokerage","balance":4250075,"bank_name":"Trade Republic"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, AccountType::Brokerage);
        assert_eq!(account.currency, "EUR");
        assert!(account.is_active);
        assert!(account.iban.is_empty());
    }

    #[test]
    fn test_display() {
        let account = Account::new("Depot", AccountType::Brokerage, "Trade Republic");
        assert_eq!(account.to_string(), "Depot (Brokerage)");
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    country::{Country, CountryId},
    currency::{Currency, CurrencyId},
    promotion::Promotion,
};

#[derive(Error, Debug)]
pub enum RefDataError {
    #[error("Unknown currency id {0}")]
    UnknownCurrency(CurrencyId),
    #[error("Unknown currency code {0}")]
    UnknownCurrencyCode(String),
    #[error("Unknown country id {0}")]
    UnknownCountry(CountryId),
    #[error("Currency {0} has non-positive rate {1}")]
    BadRate(String, Decimal),
    #[error("Country {0} references unknown currency id {1}")]
    DanglingCurrency(String, CurrencyId),
}

/// Read-only reference snapshot loaded once per session by an external
/// collaborator and injected into every calculator entry point.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default = "Utc::now")]
    pub loaded_at: DateTime<Utc>,
    pub currencies: Vec<Currency>,
    pub countries: Vec<Country>,
    #[serde(default)]
    pub delivery_promotions: Vec<Promotion>,
    #[serde(default)]
    pub shipping_promotions: Vec<Promotion>,
    #[serde(default)]
    pub selling_promotions: Vec<Promotion>,
    /// Country currently selected in the app, used when a user has no
    /// country of their own.
    pub current_country_id: CountryId,
    /// Currency prices are displayed and entered in.
    pub current_currency_id: CurrencyId,
}

impl ReferenceData {
    pub fn currency(&self, id: CurrencyId) -> Result<&Currency, RefDataError> {
        self.currencies
            .iter()
            .find(|currency| currency.id == id)
            .ok_or(RefDataError::UnknownCurrency(id))
    }

    pub fn currency_by_code(&self, code: &str) -> Result<&Currency, RefDataError> {
        self.currencies
            .iter()
            .find(|currency| currency.code == code)
            .ok_or_else(|| RefDataError::UnknownCurrencyCode(code.to_string()))
    }

    pub fn country(&self, id: CountryId) -> Result<&Country, RefDataError> {
        self.countries
            .iter()
            .find(|country| country.id == id)
            .ok_or(RefDataError::UnknownCountry(id))
    }

    pub fn current_currency(&self) -> Result<&Currency, RefDataError> {
        self.currency(self.current_currency_id)
    }

    pub fn current_country(&self) -> Result<&Country, RefDataError> {
        self.country(self.current_country_id)
    }

    /// Rejects malformed reference data at load time so that the
    /// conversion paths never divide by a bad rate. A failure here is a
    /// reference-data loading bug upstream, not a user-input problem.
    pub fn validate(&self) -> Result<(), RefDataError> {
        for currency in &self.currencies {
            if currency.rate <= Decimal::ZERO {
                return Err(RefDataError::BadRate(currency.code.clone(), currency.rate));
            }
        }
        for country in &self.countries {
            if self.currency(country.currency_id).is_err() {
                return Err(RefDataError::DanglingCurrency(
                    country.shortcode.clone(),
                    country.currency_id,
                ));
            }
        }
        self.current_country()?;
        self.current_currency()?;
        Ok(())
    }
}

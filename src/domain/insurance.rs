//! Insurance policies and the premium tax computation.
//!
//! All tax-derived fields are produced by one pure reducer,
//! [`TaxBreakdown::compute`], so that every edit path recomputes the same
//! way. The legacy `premium` field mirrors `premium_incl_tax` for display
//! compatibility and is never an independent source of truth.

use std::fmt::Display;

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{ContactPhone, TypeConstraintError};

/// Default fiscal stamp applied to every policy, in currency units.
pub const DEFAULT_FISCAL_STAMP: f64 = 1.00;

/// Rounds to cent precision, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// VAT rates the tax authority accepts for vehicle insurance.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum VatRate {
    Zero,
    Seven,
    Thirteen,
    #[default]
    Nineteen,
}

impl VatRate {
    pub fn as_percent(self) -> f64 {
        match self {
            VatRate::Zero => 0.0,
            VatRate::Seven => 7.0,
            VatRate::Thirteen => 13.0,
            VatRate::Nineteen => 19.0,
        }
    }
}

impl TryFrom<u8> for VatRate {
    type Error = TypeConstraintError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(VatRate::Zero),
            7 => Ok(VatRate::Seven),
            13 => Ok(VatRate::Thirteen),
            19 => Ok(VatRate::Nineteen),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unsupported VAT rate: {other}"
            ))),
        }
    }
}

impl Display for VatRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.as_percent() as u8)
    }
}

/// The four independently editable tax inputs.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaxInputs {
    pub premium_excl_tax: f64,
    pub vat_rate: VatRate,
    pub fiscal_stamp: f64,
    pub other_taxes: f64,
}

impl Default for TaxInputs {
    fn default() -> Self {
        Self {
            premium_excl_tax: 0.0,
            vat_rate: VatRate::default(),
            fiscal_stamp: DEFAULT_FISCAL_STAMP,
            other_taxes: 0.0,
        }
    }
}

/// Fields derived from [`TaxInputs`]; recomputed in full after any change.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct TaxBreakdown {
    pub vat_amount: f64,
    pub total_tax: f64,
    pub premium_incl_tax: f64,
}

impl TaxBreakdown {
    pub fn compute(inputs: &TaxInputs) -> Self {
        let vat_amount = round2(inputs.premium_excl_tax * inputs.vat_rate.as_percent() / 100.0);
        let total_tax = round2(vat_amount + inputs.fiscal_stamp + inputs.other_taxes);
        let premium_incl_tax = round2(inputs.premium_excl_tax + total_tax);
        Self {
            vat_amount,
            total_tax,
            premium_incl_tax,
        }
    }
}

/// One year of cover: the day before the same date next year.
pub fn default_end_date(start: NaiveDate) -> NaiveDate {
    start
        .checked_add_months(Months::new(12))
        .map(|next_year| next_year - Duration::days(1))
        .unwrap_or(start)
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum InsuranceType {
    ThirdParty,
    Comprehensive,
    TheftFire,
}

impl Display for InsuranceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsuranceType::ThirdParty => write!(f, "third_party"),
            InsuranceType::Comprehensive => write!(f, "comprehensive"),
            InsuranceType::TheftFire => write!(f, "theft_fire"),
        }
    }
}

impl TryFrom<&str> for InsuranceType {
    type Error = TypeConstraintError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "third_party" => Ok(InsuranceType::ThirdParty),
            "comprehensive" => Ok(InsuranceType::Comprehensive),
            "theft_fire" => Ok(InsuranceType::TheftFire),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown insurance type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InsurancePolicy {
    pub id: i32,
    pub vehicle_id: i32,
    pub policy_number: String,
    pub insurance_type: InsuranceType,
    pub company: String,
    pub agent_name: Option<String>,
    pub agent_phone: Option<ContactPhone>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub coverage: f64,
    pub deductible: f64,
    pub premium_excl_tax: f64,
    pub vat_rate: VatRate,
    pub vat_amount: f64,
    pub fiscal_stamp: f64,
    pub other_taxes: f64,
    pub total_tax: f64,
    pub premium_incl_tax: f64,
    /// Legacy display field, kept equal to `premium_incl_tax`.
    pub premium: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl InsurancePolicy {
    pub fn tax_inputs(&self) -> TaxInputs {
        TaxInputs {
            premium_excl_tax: self.premium_excl_tax,
            vat_rate: self.vat_rate,
            fiscal_stamp: self.fiscal_stamp,
            other_taxes: self.other_taxes,
        }
    }

    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPolicy {
    pub vehicle_id: i32,
    pub policy_number: String,
    pub insurance_type: InsuranceType,
    pub company: String,
    pub agent_name: Option<String>,
    pub agent_phone: Option<ContactPhone>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub coverage: f64,
    pub deductible: f64,
    pub taxes: TaxInputs,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePolicy {
    pub policy_number: String,
    pub insurance_type: InsuranceType,
    pub company: String,
    pub agent_name: Option<String>,
    pub agent_phone: Option<ContactPhone>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub coverage: f64,
    pub deductible: f64,
    pub taxes: TaxInputs,
}

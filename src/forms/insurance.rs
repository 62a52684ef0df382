//! Insurance policy form: field validation, tax-field recomputation, and the
//! renewal pre-fill flow.

use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use validator::Validate;

use crate::domain::insurance::{
    DEFAULT_FISCAL_STAMP, InsurancePolicy, InsuranceType, NewPolicy, TaxBreakdown, TaxInputs,
    UpdatePolicy, VatRate, default_end_date,
};
use crate::domain::types::{ContactPhone, TypeConstraintError, checked_amount};
use crate::forms::{FieldErrors, field_errors};

fn field_map(field: &str, message: &str) -> FieldErrors {
    FieldErrors::from([(field.to_string(), message.to_string())])
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct InsuranceForm {
    pub vehicle_id: Option<i32>,
    pub insurance_type: Option<String>,
    #[validate(length(min = 1, message = "company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "policy number is required"))]
    pub policy_number: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub premium_excl_tax: f64,
    #[serde(default = "default_vat_percent")]
    pub vat_rate: u8,
    #[serde(default = "default_stamp")]
    pub fiscal_stamp: f64,
    #[serde(default)]
    pub other_taxes: f64,
    #[serde(default)]
    pub coverage: f64,
    #[serde(default)]
    pub deductible: f64,
    pub agent_name: Option<String>,
    pub agent_phone: Option<String>,
    /// True once an explicit end date arrived (renewal pre-fill or a manual
    /// edit); the start-date auto-derivation must not clobber it.
    #[serde(skip)]
    end_date_pinned: bool,
}

fn default_vat_percent() -> u8 {
    VatRate::default().as_percent() as u8
}

fn default_stamp() -> f64 {
    DEFAULT_FISCAL_STAMP
}

impl Default for InsuranceForm {
    fn default() -> Self {
        Self {
            vehicle_id: None,
            insurance_type: None,
            company: String::new(),
            policy_number: String::new(),
            start_date: None,
            end_date: None,
            premium_excl_tax: 0.0,
            vat_rate: default_vat_percent(),
            fiscal_stamp: default_stamp(),
            other_taxes: 0.0,
            coverage: 0.0,
            deductible: 0.0,
            agent_name: None,
            agent_phone: None,
            end_date_pinned: false,
        }
    }
}

impl InsuranceForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the form from a renewal query. A supplied end date is pinned so
    /// later start-date edits keep it.
    pub fn from_renewal(query: &RenewalQuery) -> Self {
        let mut form = Self::new();
        form.vehicle_id = query.vehicle_id;
        if let Some(insurance_type) = &query.insurance_type {
            form.insurance_type = Some(insurance_type.clone());
        }
        if let Some(company) = &query.company {
            form.company = company.clone();
        }
        if let Some(premium) = query.premium {
            form.premium_excl_tax = premium;
        }
        if let Some(coverage) = query.coverage {
            form.coverage = coverage;
        }
        if let Some(deductible) = query.deductible {
            form.deductible = deductible;
        }
        form.agent_name = query.agent_name.clone();
        form.agent_phone = query.agent_phone.clone();
        if let Some(start) = query.start_date {
            form.set_start_date(start);
        }
        if let Some(end) = query.end_date {
            form.set_end_date(end);
        }
        form
    }

    /// Updates the start date; unless an explicit end date was pinned, the
    /// end date follows as one year minus one day.
    pub fn set_start_date(&mut self, start: NaiveDate) {
        self.start_date = Some(start);
        if !self.end_date_pinned {
            self.end_date = Some(default_end_date(start));
        }
    }

    pub fn set_end_date(&mut self, end: NaiveDate) {
        self.end_date = Some(end);
        self.end_date_pinned = true;
    }

    pub fn tax_inputs(&self) -> Result<TaxInputs, TypeConstraintError> {
        Ok(TaxInputs {
            premium_excl_tax: checked_amount(self.premium_excl_tax)?,
            vat_rate: VatRate::try_from(self.vat_rate)?,
            fiscal_stamp: checked_amount(self.fiscal_stamp)?,
            other_taxes: checked_amount(self.other_taxes)?,
        })
    }

    /// Derived tax fields for the current inputs, recomputed in full on any
    /// change.
    pub fn taxes(&self) -> Result<TaxBreakdown, TypeConstraintError> {
        Ok(TaxBreakdown::compute(&self.tax_inputs()?))
    }

    /// Runs the full validation contract, collecting one message per failing
    /// field. An error map blocks submission.
    pub fn validate_fields(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => field_errors(&e),
        };

        if self.vehicle_id.is_none() {
            errors.insert("vehicle_id".to_string(), "select a vehicle".to_string());
        }
        match self.insurance_type.as_deref() {
            None | Some("") => {
                errors.insert(
                    "insurance_type".to_string(),
                    "select an insurance type".to_string(),
                );
            }
            Some(value) => {
                if InsuranceType::try_from(value).is_err() {
                    errors.insert(
                        "insurance_type".to_string(),
                        "unknown insurance type".to_string(),
                    );
                }
            }
        }

        if VatRate::try_from(self.vat_rate).is_err() {
            errors.insert("vat_rate".to_string(), "unsupported VAT rate".to_string());
        }
        if checked_amount(self.premium_excl_tax).is_err() {
            errors.insert(
                "premium_excl_tax".to_string(),
                "premium cannot be negative".to_string(),
            );
        }
        if checked_amount(self.fiscal_stamp).is_err() {
            errors.insert(
                "fiscal_stamp".to_string(),
                "fiscal stamp cannot be negative".to_string(),
            );
        }
        if checked_amount(self.other_taxes).is_err() {
            errors.insert(
                "other_taxes".to_string(),
                "other taxes cannot be negative".to_string(),
            );
        }

        if self.start_date.is_none() {
            errors.insert(
                "start_date".to_string(),
                "start date is required".to_string(),
            );
        }
        if self.end_date.is_none() {
            errors.insert("end_date".to_string(), "end date is required".to_string());
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end <= start
        {
            errors.insert(
                "end_date".to_string(),
                "end date must be after the start date".to_string(),
            );
        }

        if self.coverage <= 0.0 {
            errors.insert("coverage".to_string(), "coverage must be positive".to_string());
        }
        if self.deductible < 0.0 {
            errors.insert(
                "deductible".to_string(),
                "deductible cannot be negative".to_string(),
            );
        }
        if let Ok(inputs) = self.tax_inputs()
            && TaxBreakdown::compute(&inputs).premium_incl_tax <= 0.0
        {
            errors.insert("premium".to_string(), "premium must be positive".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn to_new_policy(&self) -> Result<NewPolicy, FieldErrors> {
        self.validate_fields()?;
        let (vehicle_id, insurance_type, start_date, end_date, taxes, agent_phone) =
            self.submission_parts()?;
        Ok(NewPolicy {
            vehicle_id,
            policy_number: self.policy_number.trim().to_string(),
            insurance_type,
            company: self.company.trim().to_string(),
            agent_name: self.trimmed_agent_name(),
            agent_phone,
            start_date,
            end_date,
            coverage: self.coverage,
            deductible: self.deductible,
            taxes,
        })
    }

    pub fn to_updates(&self) -> Result<UpdatePolicy, FieldErrors> {
        self.validate_fields()?;
        let (_, insurance_type, start_date, end_date, taxes, agent_phone) =
            self.submission_parts()?;
        Ok(UpdatePolicy {
            policy_number: self.policy_number.trim().to_string(),
            insurance_type,
            company: self.company.trim().to_string(),
            agent_name: self.trimmed_agent_name(),
            agent_phone,
            start_date,
            end_date,
            coverage: self.coverage,
            deductible: self.deductible,
            taxes,
        })
    }

    fn trimmed_agent_name(&self) -> Option<String> {
        self.agent_name
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    #[allow(clippy::type_complexity)]
    fn submission_parts(
        &self,
    ) -> Result<
        (i32, InsuranceType, NaiveDate, NaiveDate, TaxInputs, Option<ContactPhone>),
        FieldErrors,
    > {
        let vehicle_id = self
            .vehicle_id
            .ok_or_else(|| field_map("vehicle_id", "select a vehicle"))?;
        let insurance_type = InsuranceType::try_from(self.insurance_type.as_deref().unwrap_or(""))
            .map_err(|_| field_map("insurance_type", "select an insurance type"))?;
        let start_date = self
            .start_date
            .ok_or_else(|| field_map("start_date", "start date is required"))?;
        let end_date = self
            .end_date
            .ok_or_else(|| field_map("end_date", "end date is required"))?;
        let taxes = self
            .tax_inputs()
            .map_err(|e| field_map("vat_rate", &e.to_string()))?;
        let agent_phone = match self.agent_phone.as_deref().filter(|p| !p.trim().is_empty()) {
            Some(raw) => Some(
                ContactPhone::new(raw)
                    .map_err(|_| field_map("agent_phone", "invalid phone number"))?,
            ),
            None => None,
        };
        Ok((vehicle_id, insurance_type, start_date, end_date, taxes, agent_phone))
    }
}

/// Query-string payload of the renewal flow.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenewalQuery {
    #[serde(default)]
    pub renew: bool,
    pub vehicle_id: Option<i32>,
    #[serde(rename = "type")]
    pub insurance_type: Option<String>,
    pub company: Option<String>,
    /// Tax-exclusive premium carried over from the expiring policy.
    pub premium: Option<f64>,
    pub coverage: Option<f64>,
    pub deductible: Option<f64>,
    pub agent_name: Option<String>,
    pub agent_phone: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl RenewalQuery {
    /// Builds the pre-fill for renewing an existing policy: cover restarts
    /// the day after the old policy ends, with an explicit one-year end.
    pub fn from_policy(policy: &InsurancePolicy) -> Self {
        let start = policy.end_date + Duration::days(1);
        Self {
            renew: true,
            vehicle_id: Some(policy.vehicle_id),
            insurance_type: Some(policy.insurance_type.to_string()),
            company: Some(policy.company.clone()),
            premium: Some(policy.premium_excl_tax),
            coverage: Some(policy.coverage),
            deductible: Some(policy.deductible),
            agent_name: policy.agent_name.clone(),
            agent_phone: policy.agent_phone.as_ref().map(|p| p.to_string()),
            start_date: Some(start),
            end_date: Some(default_end_date(start)),
        }
    }
}

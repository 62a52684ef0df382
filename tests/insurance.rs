use fleet_admin::domain::insurance::{
    TaxBreakdown, TaxInputs, VatRate, default_end_date, round2,
};
use fleet_admin::forms::insurance::{InsuranceForm, RenewalQuery};
use fleet_admin::repository::{InsuranceReader, PolicyListQuery};
use fleet_admin::services::insurance;
use fleet_admin::services::ServiceError;

mod common;

use common::date;

fn assert_cents(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected {expected}, got {actual}"
    );
}

fn valid_form() -> InsuranceForm {
    let mut form = InsuranceForm::new();
    form.vehicle_id = Some(1);
    form.insurance_type = Some("comprehensive".to_string());
    form.company = "STAR Assurances".to_string();
    form.policy_number = "POL-TEST-0001".to_string();
    form.premium_excl_tax = 2016.0;
    form.coverage = 60_000.0;
    form.deductible = 300.0;
    form.set_start_date(date(2026, 1, 1));
    form
}

#[test]
fn premium_scenario_with_nineteen_percent_vat() {
    let taxes = TaxBreakdown::compute(&TaxInputs {
        premium_excl_tax: 2016.0,
        vat_rate: VatRate::Nineteen,
        fiscal_stamp: 1.0,
        other_taxes: 0.0,
    });
    assert_cents(taxes.vat_amount, 383.04);
    assert_cents(taxes.total_tax, 384.04);
    assert_cents(taxes.premium_incl_tax, 2400.04);
}

#[test]
fn zero_base_premium_still_carries_the_fiscal_stamp() {
    let taxes = TaxBreakdown::compute(&TaxInputs {
        premium_excl_tax: 0.0,
        vat_rate: VatRate::Nineteen,
        fiscal_stamp: 1.0,
        other_taxes: 0.0,
    });
    assert_cents(taxes.premium_incl_tax, 1.0);
}

#[test]
fn tax_invariant_holds_across_the_input_domain() {
    let premiums = [0.0, 0.01, 1.0, 99.99, 1234.56, 20_000.0, 100_000.0];
    let rates = [VatRate::Zero, VatRate::Seven, VatRate::Thirteen, VatRate::Nineteen];
    let stamps = [0.0, 0.5, 1.0, 10.0];
    let others = [0.0, 12.34, 1000.0];

    for &premium in &premiums {
        for &rate in &rates {
            for &stamp in &stamps {
                for &other in &others {
                    let inputs = TaxInputs {
                        premium_excl_tax: premium,
                        vat_rate: rate,
                        fiscal_stamp: stamp,
                        other_taxes: other,
                    };
                    let taxes = TaxBreakdown::compute(&inputs);
                    let expected = round2(premium + taxes.vat_amount + stamp + other);
                    assert!(
                        (taxes.premium_incl_tax - expected).abs() < 0.01,
                        "invariant broke for {inputs:?}: {} vs {expected}",
                        taxes.premium_incl_tax
                    );
                }
            }
        }
    }
}

#[test]
fn recomputing_from_changed_inputs_stays_consistent() {
    let mut inputs = TaxInputs::default();
    inputs.premium_excl_tax = 500.0;
    let first = TaxBreakdown::compute(&inputs);

    // Any single-field change reruns the same reducer over current values.
    inputs.vat_rate = VatRate::Seven;
    let second = TaxBreakdown::compute(&inputs);
    assert_cents(second.vat_amount, 35.0);
    assert!(second.premium_incl_tax < first.premium_incl_tax);

    inputs.other_taxes = 20.0;
    let third = TaxBreakdown::compute(&inputs);
    assert_cents(third.premium_incl_tax, second.premium_incl_tax + 20.0);
}

#[test]
fn empty_form_collects_field_errors_and_blocks_submission() {
    let form = InsuranceForm::new();
    let errors = form.validate_fields().expect_err("form should be invalid");

    for field in [
        "vehicle_id",
        "insurance_type",
        "company",
        "policy_number",
        "start_date",
        "end_date",
        "coverage",
    ] {
        assert!(errors.contains_key(field), "missing error for {field}");
    }
    // Defaults keep the tax fields themselves valid.
    assert!(!errors.contains_key("vat_rate"));
    assert!(!errors.contains_key("premium"));
}

#[test]
fn end_date_must_follow_start_date() {
    let mut form = valid_form();
    form.set_end_date(date(2025, 12, 31));
    let errors = form.validate_fields().expect_err("end before start");
    assert!(errors.contains_key("end_date"));

    let mut form = valid_form();
    form.set_end_date(form.start_date.expect("start set"));
    let errors = form.validate_fields().expect_err("end equals start");
    assert!(errors.contains_key("end_date"));
}

#[test]
fn negative_amounts_are_rejected_per_field() {
    let mut form = valid_form();
    form.deductible = -1.0;
    form.other_taxes = -5.0;
    let errors = form.validate_fields().expect_err("negative amounts");
    assert!(errors.contains_key("deductible"));
    assert!(errors.contains_key("other_taxes"));
}

#[test]
fn unsupported_vat_rate_is_rejected() {
    let mut form = valid_form();
    form.vat_rate = 12;
    let errors = form.validate_fields().expect_err("bad vat rate");
    assert!(errors.contains_key("vat_rate"));
}

#[test]
fn start_date_edit_derives_a_one_year_end() {
    let mut form = InsuranceForm::new();
    form.set_start_date(date(2024, 3, 1));
    assert_eq!(form.end_date, Some(date(2025, 2, 28)));

    // Editing the start again keeps following it while unpinned.
    form.set_start_date(date(2024, 6, 15));
    assert_eq!(form.end_date, Some(date(2025, 6, 14)));

    assert_eq!(default_end_date(date(2024, 2, 29)), date(2025, 2, 27));
}

#[test]
fn renewal_supplied_end_date_survives_start_edits() {
    let query = RenewalQuery {
        renew: true,
        vehicle_id: Some(1),
        insurance_type: Some("third_party".to_string()),
        company: Some("GAT Assurances".to_string()),
        premium: Some(3480.0),
        coverage: Some(120_000.0),
        deductible: Some(1000.0),
        start_date: Some(date(2026, 4, 1)),
        end_date: Some(date(2026, 12, 31)),
        ..RenewalQuery::default()
    };

    let mut form = insurance::prepare_form(&query);
    assert_eq!(form.end_date, Some(date(2026, 12, 31)));

    form.set_start_date(date(2026, 5, 1));
    assert_eq!(form.end_date, Some(date(2026, 12, 31)));
}

#[test]
fn non_renewal_query_yields_a_blank_form() {
    let form = insurance::prepare_form(&RenewalQuery::default());
    assert!(form.vehicle_id.is_none());
    assert!(form.start_date.is_none());
}

#[test]
fn renewal_prefill_restarts_cover_the_day_after_expiry() {
    let repo = common::seeded_repo();
    let (_, policies) = repo
        .list_policies(PolicyListQuery::new())
        .expect("list failed");
    let policy = &policies[0];

    let query = insurance::renewal_prefill(&repo, policy.id).expect("prefill failed");
    assert!(query.renew);
    assert_eq!(query.start_date, Some(date(2026, 1, 1)));
    assert_eq!(query.end_date, Some(date(2026, 12, 31)));
    assert_eq!(query.premium, Some(policy.premium_excl_tax));

    assert!(matches!(
        insurance::renewal_prefill(&repo, 999),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn saving_a_policy_computes_and_mirrors_the_tax_fields() {
    let repo = common::seeded_repo();
    let policy = insurance::save_policy(&repo, &valid_form()).expect("save failed");

    assert_cents(policy.vat_amount, 383.04);
    assert_cents(policy.total_tax, 384.04);
    assert_cents(policy.premium_incl_tax, 2400.04);
    assert_cents(policy.premium, policy.premium_incl_tax);
    assert_eq!(policy.end_date, date(2026, 12, 31));
}

#[test]
fn invalid_form_saves_nothing() {
    let repo = common::seeded_repo();
    let (before, _) = repo
        .list_policies(PolicyListQuery::new())
        .expect("list failed");

    let mut form = valid_form();
    form.company.clear();
    match insurance::save_policy(&repo, &form) {
        Err(ServiceError::Form(errors)) => assert!(errors.contains_key("company")),
        other => panic!("expected form error, got {other:?}"),
    }

    let (after, _) = repo
        .list_policies(PolicyListQuery::new())
        .expect("list failed");
    assert_eq!(before, after);
}

#[test]
fn updating_a_policy_recomputes_the_derived_fields() {
    let repo = common::seeded_repo();
    let created = insurance::save_policy(&repo, &valid_form()).expect("save failed");

    let mut form = valid_form();
    form.policy_number = "POL-TEST-0002".to_string();
    form.vat_rate = 7;
    let updated = insurance::update_policy(&repo, created.id, &form).expect("update failed");

    assert_cents(updated.vat_amount, 141.12);
    assert_cents(updated.total_tax, 142.12);
    assert_cents(updated.premium_incl_tax, 2158.12);
    assert_cents(updated.premium, updated.premium_incl_tax);
}

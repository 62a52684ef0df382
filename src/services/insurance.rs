//! Insurance policy workflows: form preparation, renewal pre-fill, and
//! validated saves.

use crate::domain::insurance::InsurancePolicy;
use crate::forms::insurance::{InsuranceForm, RenewalQuery};
use crate::repository::{InsuranceReader, InsuranceWriter, PolicyListQuery};
use crate::services::{ServiceError, ServiceResult};

/// Prepares the form for the add/renew page. Renewal queries seed the form,
/// pinning any explicit end date they carry.
pub fn prepare_form(query: &RenewalQuery) -> InsuranceForm {
    if query.renew {
        InsuranceForm::from_renewal(query)
    } else {
        InsuranceForm::new()
    }
}

/// Builds the renewal query for an existing policy.
pub fn renewal_prefill<R>(repo: &R, policy_id: i32) -> ServiceResult<RenewalQuery>
where
    R: InsuranceReader + ?Sized,
{
    let policy = repo
        .get_policy_by_id(policy_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;
    Ok(RenewalQuery::from_policy(&policy))
}

pub fn get_policy<R>(repo: &R, policy_id: i32) -> ServiceResult<Option<InsurancePolicy>>
where
    R: InsuranceReader + ?Sized,
{
    repo.get_policy_by_id(policy_id).map_err(ServiceError::from)
}

pub fn list_policies<R>(
    repo: &R,
    query: PolicyListQuery,
) -> ServiceResult<(usize, Vec<InsurancePolicy>)>
where
    R: InsuranceReader + ?Sized,
{
    repo.list_policies(query).map_err(ServiceError::from)
}

/// Validates the form and creates the policy. Validation failures come back
/// as a per-field map; nothing is persisted in that case.
pub fn save_policy<R>(repo: &R, form: &InsuranceForm) -> ServiceResult<InsurancePolicy>
where
    R: InsuranceWriter + ?Sized,
{
    let new_policy = form.to_new_policy().map_err(ServiceError::Form)?;
    repo.create_policy(&new_policy).map_err(|err| {
        log::error!("Failed to create policy: {err}");
        ServiceError::from(err)
    })
}

/// Validates the form and applies it to an existing policy.
pub fn update_policy<R>(
    repo: &R,
    policy_id: i32,
    form: &InsuranceForm,
) -> ServiceResult<InsurancePolicy>
where
    R: InsuranceWriter + ?Sized,
{
    let updates = form.to_updates().map_err(ServiceError::Form)?;
    repo.update_policy(policy_id, &updates).map_err(|err| {
        log::error!("Failed to update policy {policy_id}: {err}");
        ServiceError::from(err)
    })
}

pub fn delete_policy<R>(repo: &R, policy_id: i32) -> ServiceResult<()>
where
    R: InsuranceWriter + ?Sized,
{
    repo.delete_policy(policy_id).map_err(ServiceError::from)
}

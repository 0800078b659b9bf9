use contracts::domain::a005_beneficiary::aggregate::{Beneficiary, BeneficiaryDto};
use contracts::shared::envelope::ApiFailure;

use crate::shared::api_utils::{ApiClient, Identity};

const BASE: &str = "/api/beneficiaries";

pub async fn fetch_list(client: &ApiClient) -> Result<Vec<Beneficiary>, ApiFailure> {
    client.get(BASE, Identity::Bearer).await
}

pub async fn fetch_by_id(client: &ApiClient, id: &str) -> Result<Beneficiary, ApiFailure> {
    client.get(&format!("{}/{}", BASE, id), Identity::Bearer).await
}

pub async fn create(client: &ApiClient, dto: &BeneficiaryDto) -> Result<Beneficiary, ApiFailure> {
    client.post(BASE, dto, Identity::Bearer).await
}

pub async fn update(
    client: &ApiClient,
    id: &str,
    dto: &BeneficiaryDto,
) -> Result<Beneficiary, ApiFailure> {
    client.put(&format!("{}/{}", BASE, id), dto, Identity::Bearer).await
}

pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiFailure> {
    client.delete(&format!("{}/{}", BASE, id), Identity::Bearer).await
}

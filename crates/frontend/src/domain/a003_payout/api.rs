use contracts::domain::a003_payout::aggregate::{MarkPaidRequest, Payout, PayoutQuery};
use contracts::shared::envelope::{ApiFailure, PagedData};

use crate::shared::api_utils::{ApiClient, Identity};

const BASE: &str = "/api/payouts";

/// Server page size used when collecting every payout.
const FETCH_LIMIT: u32 = 100;

pub async fn fetch_page(
    client: &ApiClient,
    query: &PayoutQuery,
) -> Result<PagedData<Payout>, ApiFailure> {
    client
        .get(&format!("{}?{}", BASE, query.to_query_string()), Identity::Bearer)
        .await
}

/// Walks the paginated endpoint until the last page and returns all items.
pub async fn fetch_all(client: &ApiClient) -> Result<Vec<Payout>, ApiFailure> {
    let mut query = PayoutQuery::first(FETCH_LIMIT);
    let mut items = Vec::new();
    loop {
        let page = fetch_page(client, &query).await?;
        let received = page.items.len();
        items.extend(page.items);
        if !has_more(query.page, page.metadata.total_pages, received) {
            break;
        }
        query = query.next();
    }
    log::debug!("loaded {} payouts in {} page(s)", items.len(), query.page);
    Ok(items)
}

/// An empty page ends the walk even if the metadata claims more.
fn has_more(page: u32, total_pages: u32, received: usize) -> bool {
    received > 0 && page < total_pages
}

pub async fn fetch_by_id(client: &ApiClient, id: &str) -> Result<Payout, ApiFailure> {
    client.get(&format!("{}/{}", BASE, id), Identity::Bearer).await
}

pub async fn approve(client: &ApiClient, id: &str) -> Result<Payout, ApiFailure> {
    client
        .post(&format!("{}/{}/approve", BASE, id), &serde_json::json!({}), Identity::Bearer)
        .await
}

pub async fn mark_paid(
    client: &ApiClient,
    id: &str,
    request: &MarkPaidRequest,
) -> Result<Payout, ApiFailure> {
    client
        .post(&format!("{}/{}/mark-paid", BASE, id), request, Identity::Bearer)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more() {
        assert!(has_more(1, 3, 100));
        assert!(!has_more(3, 3, 100));
        assert!(!has_more(1, 3, 0));
        assert!(!has_more(1, 0, 5));
    }
}

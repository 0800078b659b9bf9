//! Tab content registry: the single mapping from tab key to view.

use crate::domain::a001_base_policy::ui::details::BasePolicyDetails;
use crate::domain::a001_base_policy::ui::list::BasePolicyList;
use crate::domain::a002_registered_policy::ui::details::RegisteredPolicyDetails;
use crate::domain::a002_registered_policy::ui::list::RegisteredPolicyList;
use crate::domain::a003_payout::ui::details::PayoutDetails;
use crate::domain::a003_payout::ui::list::PayoutList;
use crate::domain::a004_cancellation_request::ui::create::CancellationRequestCreate;
use crate::domain::a004_cancellation_request::ui::details::CancellationRequestDetails;
use crate::domain::a004_cancellation_request::ui::list::CancellationRequestList;
use crate::domain::a005_beneficiary::ui::details::BeneficiaryDetails;
use crate::domain::a005_beneficiary::ui::list::BeneficiaryList;
use crate::domain::a006_notification::ui::list::NotificationList;
use crate::layout::global_context::AppGlobalContext;
use crate::system::profile::ui::ProfilePage;
use crate::usecases::u501_template_placeholders::TemplatePlaceholdersPage;
use leptos::logging::log;
use leptos::prelude::*;

/// `Some(None)` for `<entity>_detail_new`, `Some(Some(id))` for an existing
/// record, `None` when the key belongs to something else.
fn detail_id(key: &str, entity: &str) -> Option<Option<String>> {
    let rest = key.strip_prefix(entity)?.strip_prefix("_detail_")?;
    Some((rest != "new").then(|| rest.to_string()))
}

pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();
    let on_close = Callback::new(move |_: ()| tabs_store.close_tab(&key_for_close));

    match key {
        "a001_base_policy" => return view! { <BasePolicyList /> }.into_any(),
        "a002_registered_policy" => return view! { <RegisteredPolicyList /> }.into_any(),
        "a003_payout" => return view! { <PayoutList /> }.into_any(),
        "a004_cancellation_request" => return view! { <CancellationRequestList /> }.into_any(),
        "a005_beneficiary" => return view! { <BeneficiaryList /> }.into_any(),
        "a006_notification" => return view! { <NotificationList /> }.into_any(),
        "u501_template_placeholders" => return view! { <TemplatePlaceholdersPage /> }.into_any(),
        "sys_profile" => return view! { <ProfilePage /> }.into_any(),
        _ => {}
    }

    if let Some(id) = detail_id(key, "a001_base_policy") {
        return view! { <BasePolicyDetails id=id on_close=on_close /> }.into_any();
    }
    if let Some(Some(id)) = detail_id(key, "a002_registered_policy") {
        return view! { <RegisteredPolicyDetails id=id on_close=on_close /> }.into_any();
    }
    if let Some(Some(id)) = detail_id(key, "a003_payout") {
        return view! { <PayoutDetails id=id on_close=on_close /> }.into_any();
    }
    match detail_id(key, "a004_cancellation_request") {
        Some(Some(id)) => {
            return view! { <CancellationRequestDetails id=id on_close=on_close /> }.into_any()
        }
        Some(None) => return view! { <CancellationRequestCreate on_close=on_close /> }.into_any(),
        None => {}
    }
    if let Some(id) = detail_id(key, "a005_beneficiary") {
        return view! { <BeneficiaryDetails id=id on_close=on_close /> }.into_any();
    }

    log!("no view registered for tab '{}'", key);
    view! {
        <div class="page">
            <div class="alert alert--warning">{format!("Không tìm thấy trang: {}", key)}</div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::detail_id;

    #[test]
    fn test_detail_id() {
        assert_eq!(
            detail_id("a003_payout_detail_p-1", "a003_payout"),
            Some(Some("p-1".to_string()))
        );
        assert_eq!(detail_id("a005_beneficiary_detail_new", "a005_beneficiary"), Some(None));
        assert_eq!(detail_id("a003_payout", "a003_payout"), None);
        assert_eq!(detail_id("a002_registered_policy_detail_x", "a003_payout"), None);
    }
}

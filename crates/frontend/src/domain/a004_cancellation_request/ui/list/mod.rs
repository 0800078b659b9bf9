use contracts::domain::a004_cancellation_request::aggregate::{
    CancellationRequest, CancellationStatus, RequesterRole, SEARCH_FIELDS,
};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_cancellation_request::hooks::use_cancellation_requests;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::{detail_tab_key, detail_tab_label};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::config::config;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{form_values, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const ENTITY: &str = "a004_cancellation_request";

pub fn status_variant(status: CancellationStatus) -> &'static str {
    match status {
        CancellationStatus::PendingReview => "warning",
        CancellationStatus::Approved | CancellationStatus::Resolved => "success",
        CancellationStatus::Denied => "error",
        CancellationStatus::Disputed => "primary",
        CancellationStatus::Revoked => "neutral",
    }
}

pub fn requester_label(role: RequesterRole) -> &'static str {
    match role {
        RequesterRole::Farmer => "Nông dân",
        RequesterRole::Partner => "Đối tác",
    }
}

#[component]
pub fn CancellationRequestList() -> impl IntoView {
    let tabs_store = use_tabs();
    let requests = use_cancellation_requests();
    let state = RwSignal::new(ListState::<CancellationRequest>::new(SEARCH_FIELDS, &config().list));
    let is_filter_expanded = RwSignal::new(false);

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let requester = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(items) = requests.list.data.get() {
            state.update(|s| s.load(items));
        }
    });

    let apply_filters = move || {
        let values = form_values([
            ("search", search.get_untracked()),
            ("status", status.get_untracked()),
            ("requester_role", requester.get_untracked()),
        ]);
        state.update(|s| s.submit(&values));
    };

    let clear_filters = move || {
        for field in [search, status, requester] {
            field.set(String::new());
        }
        state.update(|s| s.clear_filters());
    };

    let open_detail = move |id: Option<String>, number: Option<String>| {
        tabs_store.open_tab(
            &detail_tab_key(ENTITY, id.as_deref()),
            &detail_tab_label("Yêu cầu hủy", number.as_deref()),
        );
    };

    let toggle_sort = Callback::new(move |field: &'static str| state.update(|s| s.toggle_sort(field)));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a004_cancellation_request--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Yêu cầu hủy hợp đồng"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.with(|s| s.view.total_count()).to_string()}
                    </UiBadge>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| requests.refetch()
                        disabled=Signal::derive(move || requests.list.loading.get())
                    >
                        {icon("refresh")}
                        {move || if requests.list.loading.get() { " Đang tải..." } else { " Làm mới" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_detail(None, None)
                    >
                        {icon("plus")}
                        " Tạo yêu cầu hủy"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.criteria().active_count()))
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.view.current_page()))
                            total_pages=Signal::derive(move || state.with(|s| s.view.total_pages()))
                            total_count=Signal::derive(move || state.with(|s| s.view.total_count()))
                            page_size=Signal::derive(move || state.with(|s| s.view.page_size()))
                            on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
                            on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                            page_size_options=config().list.page_size_options.clone()
                        />
                    }
                    actions=move || view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                            "Lọc"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| clear_filters()>
                            "Xóa lọc"
                        </Button>
                    }
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Tìm kiếm:"</Label>
                            <Input value=search placeholder="Số HĐ, nông dân, lý do..." />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Trạng thái:"</Label>
                            <select
                                class="form-select"
                                prop:value=move || status.get()
                                on:change=move |ev| status.set(event_target_value(&ev))
                            >
                                <option value="">"Tất cả"</option>
                                {CancellationStatus::all().into_iter().map(|s| view! {
                                    <option value=s.code()>{s.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Người yêu cầu:"</Label>
                            <select
                                class="form-select"
                                prop:value=move || requester.get()
                                on:change=move |ev| requester.set(event_target_value(&ev))
                            >
                                <option value="">"Tất cả"</option>
                                <option value="farmer">{requester_label(RequesterRole::Farmer)}</option>
                                <option value="partner">{requester_label(RequesterRole::Partner)}</option>
                            </select>
                        </Flex>
                    </Flex>
                </FilterPanel>

                {move || requests.list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 960px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Số HĐ" sort_field="policy_number"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=120.0 />
                                <SortableHeaderCell label="Nông dân" sort_field="farmer_name"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=160.0 />
                                <TableHeaderCell resizable=false min_width=110.0>"Người yêu cầu"</TableHeaderCell>
                                <SortableHeaderCell label="Lý do" sort_field="reason"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=220.0 />
                                <SortableHeaderCell label="Hoàn trả" sort_field="compensation_amount"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=130.0 />
                                <TableHeaderCell resizable=false min_width=120.0>"Trạng thái"</TableHeaderCell>
                                <SortableHeaderCell label="Ngày tạo" sort_field="created_at"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=130.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.rows())
                                key=|item| item.id.clone()
                                children=move |item: CancellationRequest| {
                                    let id = item.id.clone();
                                    let number = item.policy_number.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(Some(id.clone()), Some(number.clone()));
                                                        }
                                                    >
                                                        {item.policy_number.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{item.farmer_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{requester_label(item.requester_role)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{item.reason.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=item.compensation_amount />
                                            <TableCell>
                                                <UiBadge variant=status_variant(item.status).to_string()>
                                                    {item.status.display_name()}
                                                </UiBadge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&item.created_at)}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

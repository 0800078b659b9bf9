use contracts::domain::a003_payout::aggregate::{Payout, PayoutStatus, SEARCH_FIELDS};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_payout::hooks::use_payouts;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::{detail_tab_key, detail_tab_label};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_vnd, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::config::config;
use crate::shared::date_utils::{format_datetime, format_opt_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::{form_values, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const ENTITY: &str = "a003_payout";

pub fn status_variant(status: PayoutStatus) -> &'static str {
    match status {
        PayoutStatus::Pending => "warning",
        PayoutStatus::Approved | PayoutStatus::Processing => "primary",
        PayoutStatus::Completed => "success",
        PayoutStatus::Failed => "error",
    }
}

#[component]
pub fn PayoutList() -> impl IntoView {
    let tabs_store = use_tabs();
    let payouts = use_payouts();
    let state = RwSignal::new(ListState::<Payout>::new(SEARCH_FIELDS, &config().list));
    let is_filter_expanded = RwSignal::new(false);

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let amount_min = RwSignal::new(String::new());
    let amount_max = RwSignal::new(String::new());
    let created_from = RwSignal::new(String::new());
    let created_to = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(items) = payouts.list.data.get() {
            state.update(|s| s.load(items));
        }
    });

    let apply_filters = move || {
        let values = form_values([
            ("search", search.get_untracked()),
            ("status", status.get_untracked()),
            ("amount_min", amount_min.get_untracked()),
            ("amount_max", amount_max.get_untracked()),
            ("created_at_from", created_from.get_untracked()),
            ("created_at_to", created_to.get_untracked()),
        ]);
        state.update(|s| s.submit(&values));
    };

    let clear_filters = move || {
        for field in [search, status, amount_min, amount_max, created_from, created_to] {
            field.set(String::new());
        }
        state.update(|s| s.clear_filters());
    };

    let open_detail = move |id: String, number: String| {
        tabs_store.open_tab(
            &detail_tab_key(ENTITY, Some(&id)),
            &detail_tab_label("Chi trả", Some(&number)),
        );
    };

    // Sum over every row matching the filters, not just the visible page
    let filtered_total = Signal::derive(move || {
        state.with(|s| s.view.filtered().iter().map(|p| p.amount).sum::<f64>())
    });

    let toggle_sort = Callback::new(move |field: &'static str| state.update(|s| s.toggle_sort(field)));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a003_payout--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Chi trả bồi thường"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.with(|s| s.view.total_count()).to_string()}
                    </UiBadge>
                    <span class="page__header-summary">
                        {move || format!("Tổng: {}", format_vnd(filtered_total.get()))}
                    </span>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| payouts.refetch()
                        disabled=Signal::derive(move || payouts.list.loading.get())
                    >
                        {icon("refresh")}
                        {move || if payouts.list.loading.get() { " Đang tải..." } else { " Làm mới" }}
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
                            <Input value=search placeholder="Số HĐ, nông dân, mã giao dịch..." />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Trạng thái:"</Label>
                            <select
                                class="form-select"
                                prop:value=move || status.get()
                                on:change=move |ev| status.set(event_target_value(&ev))
                            >
                                <option value="">"Tất cả"</option>
                                {PayoutStatus::all().into_iter().map(|s| view! {
                                    <option value=s.code()>{s.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Số tiền từ / đến:"</Label>
                            <Flex gap=FlexGap::Small>
                                <Input value=amount_min placeholder="0" />
                                <Input value=amount_max placeholder="" />
                            </Flex>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Ngày tạo:"</Label>
                            <Flex gap=FlexGap::Small>
                                <input
                                    type="date"
                                    class="form-input"
                                    prop:value=move || created_from.get()
                                    on:change=move |ev| created_from.set(event_target_value(&ev))
                                />
                                <input
                                    type="date"
                                    class="form-input"
                                    prop:value=move || created_to.get()
                                    on:change=move |ev| created_to.set(event_target_value(&ev))
                                />
                            </Flex>
                        </Flex>
                    </Flex>
                </FilterPanel>

                {move || payouts.list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1000px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Số HĐ" sort_field="policy_number"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=120.0 />
                                <SortableHeaderCell label="Nông dân" sort_field="farmer_name"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=160.0 />
                                <SortableHeaderCell label="Lý do" sort_field="reason"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=140.0 />
                                <SortableHeaderCell label="Số tiền" sort_field="amount"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=140.0 />
                                <TableHeaderCell resizable=false min_width=120.0>"Trạng thái"</TableHeaderCell>
                                <SortableHeaderCell label="Mã giao dịch" sort_field="transaction_ref"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=130.0 />
                                <SortableHeaderCell label="Ngày tạo" sort_field="created_at"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=130.0 />
                                <SortableHeaderCell label="Ngày chi" sort_field="paid_at"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=130.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.rows())
                                key=|item| item.id.clone()
                                children=move |item: Payout| {
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
                                                            open_detail(id.clone(), number.clone());
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
                                                <TableCellLayout>{item.reason.display_name()}</TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=Some(item.amount) currency=item.currency.clone() bold=true />
                                            <TableCell>
                                                <UiBadge variant=status_variant(item.status).to_string()>
                                                    {item.status.display_name()}
                                                </UiBadge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.transaction_ref.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&item.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_opt_datetime(item.paid_at)}</TableCellLayout>
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

use contracts::domain::a002_registered_policy::aggregate::{PolicyStatus, RegisteredPolicy, SEARCH_FIELDS};
use contracts::enums::crop_type::CropType;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_registered_policy::hooks::use_registered_policies;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::{detail_tab_key, detail_tab_label};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_number_with_decimals, SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::config::config;
use crate::shared::date_utils::{format_datetime, format_period};
use crate::shared::icons::icon;
use crate::shared::list_utils::{form_values, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const ENTITY: &str = "a002_registered_policy";

pub fn status_variant(status: PolicyStatus) -> &'static str {
    match status {
        PolicyStatus::PendingReview => "warning",
        PolicyStatus::Active => "success",
        PolicyStatus::Rejected => "error",
        PolicyStatus::Cancelled | PolicyStatus::Expired => "neutral",
    }
}

#[component]
pub fn RegisteredPolicyList() -> impl IntoView {
    let tabs_store = use_tabs();
    let policies = use_registered_policies();
    let state = RwSignal::new(ListState::<RegisteredPolicy>::new(SEARCH_FIELDS, &config().list));
    let is_filter_expanded = RwSignal::new(false);

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let crop_type = RwSignal::new(String::new());
    let submitted_from = RwSignal::new(String::new());
    let submitted_to = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(items) = policies.list.data.get() {
            state.update(|s| s.load(items));
        }
    });

    let apply_filters = move || {
        let values = form_values([
            ("search", search.get_untracked()),
            ("status", status.get_untracked()),
            ("crop_type", crop_type.get_untracked()),
            ("submitted_at_from", submitted_from.get_untracked()),
            ("submitted_at_to", submitted_to.get_untracked()),
        ]);
        state.update(|s| s.submit(&values));
    };

    let clear_filters = move || {
        for field in [search, status, crop_type, submitted_from, submitted_to] {
            field.set(String::new());
        }
        state.update(|s| s.clear_filters());
    };

    let open_detail = move |id: String, number: String| {
        tabs_store.open_tab(
            &detail_tab_key(ENTITY, Some(&id)),
            &detail_tab_label("Hợp đồng", Some(&number)),
        );
    };

    let pending_count = Signal::derive(move || {
        state.with(|s| {
            s.view
                .source()
                .iter()
                .filter(|p| p.status.is_reviewable())
                .count()
        })
    });

    let toggle_sort = Callback::new(move |field: &'static str| state.update(|s| s.toggle_sort(field)));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a002_registered_policy--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Hợp đồng đăng ký"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.with(|s| s.view.total_count()).to_string()}
                    </UiBadge>
                    <Show when=move || { pending_count.get() > 0 }>
                        <UiBadge variant="warning".to_string()>
                            {move || format!("{} chờ thẩm định", pending_count.get())}
                        </UiBadge>
                    </Show>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| policies.refetch()
                        disabled=Signal::derive(move || policies.list.loading.get())
                    >
                        {icon("refresh")}
                        {move || if policies.list.loading.get() { " Đang tải..." } else { " Làm mới" }}
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
                            <Input value=search placeholder="Số HĐ, nông dân, trang trại, tỉnh..." />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Trạng thái:"</Label>
                            <select
                                class="form-select"
                                prop:value=move || status.get()
                                on:change=move |ev| status.set(event_target_value(&ev))
                            >
                                <option value="">"Tất cả"</option>
                                {PolicyStatus::all().into_iter().map(|s| view! {
                                    <option value=s.code()>{s.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Cây trồng:"</Label>
                            <select
                                class="form-select"
                                prop:value=move || crop_type.get()
                                on:change=move |ev| crop_type.set(event_target_value(&ev))
                            >
                                <option value="">"Tất cả"</option>
                                {CropType::all().into_iter().map(|c| view! {
                                    <option value=c.code()>{c.display_name()}</option>
                                }).collect_view()}
                            </select>
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Ngày nộp:"</Label>
                            <Flex gap=FlexGap::Small>
                                <input
                                    type="date"
                                    class="form-input"
                                    prop:value=move || submitted_from.get()
                                    on:change=move |ev| submitted_from.set(event_target_value(&ev))
                                />
                                <input
                                    type="date"
                                    class="form-input"
                                    prop:value=move || submitted_to.get()
                                    on:change=move |ev| submitted_to.set(event_target_value(&ev))
                                />
                            </Flex>
                        </Flex>
                    </Flex>
                </FilterPanel>

                {move || policies.list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1100px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Số HĐ" sort_field="policy_number"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=120.0 />
                                <SortableHeaderCell label="Nông dân" sort_field="farmer_name"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=160.0 />
                                <SortableHeaderCell label="Trang trại" sort_field="farm_name"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=160.0 />
                                <SortableHeaderCell label="Tỉnh" sort_field="province"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Diện tích (ha)" sort_field="area_ha"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Số tiền BH" sort_field="sum_insured"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=140.0 />
                                <SortableHeaderCell label="Phí BH" sort_field="premium_amount"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=120.0 />
                                <TableHeaderCell resizable=false min_width=160.0>"Thời hạn"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Trạng thái"</TableHeaderCell>
                                <SortableHeaderCell label="Ngày nộp" sort_field="submitted_at"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=130.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.rows())
                                key=|item| item.id.clone()
                                children=move |item: RegisteredPolicy| {
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
                                                <TableCellLayout truncate=true>{item.farm_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{item.province.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_number_with_decimals(item.area_ha, 2)}</TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=Some(item.sum_insured) />
                                            <TableCellMoney value=Some(item.premium_amount) />
                                            <TableCell>
                                                <TableCellLayout>{format_period(item.coverage_start, item.coverage_end)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <UiBadge variant=status_variant(item.status).to_string()>
                                                    {item.status.display_name()}
                                                </UiBadge>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_datetime(&item.submitted_at)}</TableCellLayout>
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

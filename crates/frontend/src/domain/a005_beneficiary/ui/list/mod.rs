use contracts::domain::a005_beneficiary::aggregate::{Beneficiary, SEARCH_FIELDS};
use contracts::enums::crop_type::CropType;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a005_beneficiary::hooks::use_beneficiaries;
use crate::layout::global_context::use_tabs;
use crate::layout::tabs::{detail_tab_key, detail_tab_label};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_number_with_decimals, SortableHeaderCell};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::config::config;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{form_values, ListState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const ENTITY: &str = "a005_beneficiary";

#[component]
pub fn BeneficiaryList() -> impl IntoView {
    let tabs_store = use_tabs();
    let beneficiaries = use_beneficiaries();
    let state = RwSignal::new(ListState::<Beneficiary>::new(SEARCH_FIELDS, &config().list));
    let is_filter_expanded = RwSignal::new(false);

    let search = RwSignal::new(String::new());
    let crop_type = RwSignal::new(String::new());
    let area_min = RwSignal::new(String::new());
    let area_max = RwSignal::new(String::new());

    Effect::new(move |_| {
        if let Some(items) = beneficiaries.list.data.get() {
            state.update(|s| s.load(items));
        }
    });

    let apply_filters = move || {
        let values = form_values([
            ("search", search.get_untracked()),
            ("crop_type", crop_type.get_untracked()),
            ("farm_area_ha_min", area_min.get_untracked()),
            ("farm_area_ha_max", area_max.get_untracked()),
        ]);
        state.update(|s| s.submit(&values));
    };

    let clear_filters = move || {
        for field in [search, crop_type, area_min, area_max] {
            field.set(String::new());
        }
        state.update(|s| s.clear_filters());
    };

    let open_detail = move |id: Option<String>, name: Option<String>| {
        tabs_store.open_tab(
            &detail_tab_key(ENTITY, id.as_deref()),
            &detail_tab_label("Nông hộ", name.as_deref()),
        );
    };

    let toggle_sort = Callback::new(move |field: &'static str| state.update(|s| s.toggle_sort(field)));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    view! {
        <PageFrame page_id="a005_beneficiary--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Nông hộ thụ hưởng"</h1>
                    <UiBadge variant="primary".to_string()>
                        {move || state.with(|s| s.view.total_count()).to_string()}
                    </UiBadge>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| beneficiaries.refetch()
                        disabled=Signal::derive(move || beneficiaries.list.loading.get())
                    >
                        {icon("refresh")}
                        {move || if beneficiaries.list.loading.get() { " Đang tải..." } else { " Làm mới" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_detail(None, None)
                    >
                        {icon("plus")}
                        " Thêm nông hộ"
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
                            <Input value=search placeholder="Họ tên, SĐT, CCCD, tỉnh..." />
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
                            <Label>"Diện tích (ha) từ / đến:"</Label>
                            <Flex gap=FlexGap::Small>
                                <Input value=area_min placeholder="0" />
                                <Input value=area_max placeholder="" />
                            </Flex>
                        </Flex>
                    </Flex>
                </FilterPanel>

                {move || beneficiaries.list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 960px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Họ tên" sort_field="full_name"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=180.0 />
                                <SortableHeaderCell label="Điện thoại" sort_field="phone"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=120.0 />
                                <SortableHeaderCell label="CCCD" sort_field="national_id"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=130.0 />
                                <SortableHeaderCell label="Tỉnh" sort_field="province"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Cây trồng" sort_field="crop_type_label"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Diện tích (ha)" sort_field="farm_area_ha"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="HĐ hiệu lực" sort_field="active_policies"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Ngày tạo" sort_field="created_at"
                                    current_sort_field=sort_field sort_ascending=sort_ascending on_sort=toggle_sort min_width=130.0 />
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.rows())
                                key=|item| item.id.clone()
                                children=move |item: Beneficiary| {
                                    let id = item.id.clone();
                                    let name = item.full_name.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(Some(id.clone()), Some(name.clone()));
                                                        }
                                                    >
                                                        {item.full_name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.phone.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.national_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{item.province.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{CropType::label_for(&item.crop_type)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_number_with_decimals(item.farm_area_ha, 2)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.active_policies}</TableCellLayout>
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

mod state;

use super::details::InventoryDetails;
use super::orders_modal::ProductOrdersModal;
use crate::domain::a003_inventory::api::{self, InventoryPageData};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::charts::{BarChart, ChartCard, ChartPoint, DonutChart};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatGrid;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::StockStatusBadge;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::icons::icon;
use crate::shared::list_state::{bind_filter_input, clear_filters};
use crate::shared::list_utils::SearchInput;
use crate::shared::load_state::{finish_load, request_failed, LoadGate, LoadStatus};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_cache::{use_query_client, Resource};
use contracts::domain::a003_inventory::aggregate::enrich_inventory;
use contracts::domain::a003_inventory::analytics::{category_stock, critical_stock, stock_levels};
use contracts::domain::a003_inventory::filter::{category_options, PAGE_SIZE};
use contracts::domain::a003_inventory::{
    InventoryFilter, InventoryRow, InventorySort, InventoryStats, StockStatus,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::delete_guard::{guarded_delete, DeleteOutcome};
use contracts::shared::list_query::{ListFilter, SortDirection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::{create_state, InventoryModal};
use thaw::*;

#[component]
pub fn InventoryList() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let client = use_query_client();
    let controls = create_state();

    let data = RwSignal::new(InventoryPageData::default());
    let status = RwSignal::new(LoadStatus::Loading);
    let modal = RwSignal::new(None::<InventoryModal>);
    let filters_expanded = RwSignal::new(true);
    let refreshing = RwSignal::new(false);

    let load = move || {
        status.set(LoadStatus::Loading);
        spawn_local(async move {
            let result = api::load_page(client).await;
            finish_load(status, "inventory", result, |page| data.set(page));
        });
    };
    load();

    // Only the inventory collection is refetched; products and orders stay.
    // Before the page is ready the partial refetch would supersede the
    // running page load, so the whole page is loaded again instead.
    let refresh = move |_: leptos::ev::MouseEvent| {
        if !status.with_untracked(LoadStatus::is_ready) {
            load();
            return;
        }
        refreshing.set(true);
        spawn_local(async move {
            match api::refresh_inventory(client).await {
                Ok(inventory) => data.update(|d| d.inventory = inventory),
                Err(e) if e.is_superseded() => {}
                Err(e) => {
                    log::error!("inventory refresh failed: {}", e);
                    ctx.notify_error(request_failed(&e));
                }
            }
            refreshing.set(false);
        });
    };

    let rows = Memo::new(move |_| {
        data.with(|d| enrich_inventory(&d.inventory, &d.products, &d.categories))
    });
    let list_view = Memo::new(move |_| controls.with(|c| rows.with(|r| c.view(r, PAGE_SIZE))));
    let indicators = Signal::derive(move || rows.with(|r| InventoryStats::build(r).indicators()));
    let categories = Memo::new(move |_| rows.with(|r| category_options(r)));

    let levels = Signal::derive(move || {
        rows.with(|r| {
            stock_levels(r)
                .into_iter()
                .map(|l| ChartPoint::new(format!("{} ({}%)", l.status.label(), l.percent), l.count as f64))
                .collect::<Vec<_>>()
        })
    });
    let critical = Signal::derive(move || {
        rows.with(|r| {
            critical_stock(r)
                .into_iter()
                .map(|c| ChartPoint::new(c.product_name, c.raw_stock as f64))
                .collect::<Vec<_>>()
        })
    });
    let by_category = Signal::derive(move || {
        rows.with(|r| {
            category_stock(r)
                .into_iter()
                .map(|c| ChartPoint::new(format!("{} ({} need attention)", c.name, c.attention), c.total as f64))
                .collect::<Vec<_>>()
        })
    });

    let status_input = RwSignal::new(String::new());
    let category_input = RwSignal::new(String::new());
    let stock_min = RwSignal::new(String::new());
    let stock_max = RwSignal::new(String::new());

    bind_filter_input(controls, status_input, |f: &InventoryFilter| f.status.clone(), |f, v| f.status = v);
    bind_filter_input(controls, category_input, |f: &InventoryFilter| f.category.clone(), |f, v| f.category = v);
    bind_filter_input(controls, stock_min, |f: &InventoryFilter| f.stock_min.clone(), |f, v| f.stock_min = v);
    bind_filter_input(controls, stock_max, |f: &InventoryFilter| f.stock_max.clone(), |f, v| f.stock_max = v);

    let clear_all = Callback::new(move |_| {
        clear_filters(controls, &[status_input, category_input, stock_min, stock_max])
    });

    let current_sort = Signal::derive(move || controls.with(|c| c.filter.sort.key()));
    let on_sort = Callback::new(move |key: &'static str| {
        controls.update(|c| c.edit_filter(|f| f.sort = InventorySort::from_key(key)))
    });
    let sort_header = move |sort: InventorySort, min_width: f64| {
        view! {
            <SortableHeaderCell
                label=sort.label()
                sort_key=sort.key()
                ascending=sort.direction() == SortDirection::Ascending
                current_key=current_sort
                on_sort=on_sort
                min_width=min_width
            />
        }
    };

    let delete_record = move |row: InventoryRow| {
        spawn_local(async move {
            let record = row.record;
            let outcome = guarded_delete(
                &BrowserConfirm,
                &record.delete_prompt(),
                record.id,
                api::delete_record,
            )
            .await;
            match &outcome {
                DeleteOutcome::Cancelled => {}
                DeleteOutcome::Deleted(_) => {
                    data.update(|d| {
                        outcome.apply_to(&mut d.inventory);
                    });
                    client.invalidate(Resource::Inventory);
                    ctx.notify_success(format!("Deleted inventory for '{}'", row.product_name));
                }
                DeleteOutcome::Failed(e) => {
                    log::error!("{}", e);
                    ctx.notify_error("Could not delete the inventory record. Please try again.");
                }
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        modal.set(None);
        client.invalidate(Resource::Inventory);
        ctx.notify_success("Inventory saved");
        load();
    });

    view! {
        <PageFrame page_id="a003_inventory--list" category=PAGE_CAT_LIST>
            <PageHeader title="Inventory" icon_name="inventory" subtitle="Stock levels per product">
                <Button on_click=refresh disabled=Signal::derive(move || refreshing.get() || status.with(LoadStatus::is_loading))>
                    {icon("refresh")}
                    {move || if refreshing.get() { " Refreshing..." } else { " Refresh" }}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.set(Some(InventoryModal::Create))>
                    {icon("plus")}
                    " Add record"
                </Button>
            </PageHeader>

            <div class="page__content">
                <LoadGate status=status on_retry=Callback::new(move |_| load())>
                    <StatGrid indicators=indicators />

                    <div class="chart-grid">
                        <ChartCard title="Stock levels" is_empty=Signal::derive(move || levels.with(Vec::is_empty))>
                            <DonutChart data=levels />
                        </ChartCard>
                        <ChartCard title="Critical stock" is_empty=Signal::derive(move || critical.with(Vec::is_empty))>
                            <BarChart data=critical multicolor=true />
                        </ChartCard>
                        <ChartCard title="Stock by category" is_empty=Signal::derive(move || by_category.with(Vec::is_empty))>
                            <BarChart data=by_category />
                        </ChartCard>
                    </div>

                    <FilterPanel
                        is_expanded=filters_expanded
                        active_filters_count=Signal::derive(move || controls.with(|c| c.filter.active_count()))
                        on_clear=clear_all
                        pagination_controls=move || view! {
                            <PaginationControls
                                current_page=Signal::derive(move || list_view.with(|v| v.page.page))
                                total_pages=Signal::derive(move || list_view.with(|v| v.page.total_pages))
                                showing_from=Signal::derive(move || list_view.with(|v| v.page.showing_from()))
                                showing_to=Signal::derive(move || list_view.with(|v| v.page.showing_to()))
                                total_count=Signal::derive(move || list_view.with(|v| v.page.total_count))
                                on_page_change=Callback::new(move |page| controls.update(|c| c.go_to(page)))
                            />
                        }
                        filter_content=move || view! {
                            <Flex gap=FlexGap::Small align=FlexAlign::End>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Search"</Label>
                                    <SearchInput
                                        value=Signal::derive(move || controls.with(|c| c.filter.search.clone()))
                                        on_change=Callback::new(move |v: String| controls.update(|c| c.edit_filter(|f| f.search = v)))
                                        placeholder="Product or category..."
                                    />
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Status"</Label>
                                    <Select value=status_input>
                                        <option value="">"All statuses"</option>
                                        {StockStatus::KNOWN.iter().map(|s| view! {
                                            <option value=s.as_str().to_string()>{s.label().to_string()}</option>
                                        }).collect_view()}
                                    </Select>
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Category"</Label>
                                    <Select value=category_input>
                                        <option value="">"All categories"</option>
                                        {move || categories.get().into_iter().map(|name| {
                                            let label = name.clone();
                                            view! { <option value=name>{label}</option> }
                                        }).collect_view()}
                                    </Select>
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Stock"</Label>
                                    <Flex gap=FlexGap::Small>
                                        <Input value=stock_min placeholder="Min" />
                                        <Input value=stock_max placeholder="Max" />
                                    </Flex>
                                </Flex>
                            </Flex>
                        }
                        filter_tags=move || view! {
                            {move || list_view.with(|v| v.invalid_fields.clone()).into_iter().map(|field| {
                                let input = if field == "stock_min" { stock_min } else { stock_max };
                                view! {
                                    <FilterTag
                                        label=format!("Ignored {}: not a number", field.replace('_', " "))
                                        on_remove=Callback::new(move |_| input.set(String::new()))
                                    />
                                }
                            }).collect_view()}
                        }
                    />

                    <div class="page-content">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    {sort_header(InventorySort::Name, 200.0)}
                                    <TableHeaderCell resizable=false min_width=140.0>"Category"</TableHeaderCell>
                                    {sort_header(InventorySort::Price, 100.0)}
                                    <TableHeaderCell resizable=false min_width=80.0>"In"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=80.0>"Out"</TableHeaderCell>
                                    {sort_header(InventorySort::Stock, 80.0)}
                                    {sort_header(InventorySort::Status, 110.0)}
                                    <TableHeaderCell resizable=false min_width=120.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    let page = list_view.with(|v| v.page.items.clone());
                                    if page.is_empty() {
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan="8">
                                                    <TableCellLayout>
                                                        <span class="text-muted">"No inventory records match the filters"</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    page.into_iter().map(|row| {
                                        let id = row.record.id;
                                        let name = row.product_name.clone();
                                        let category = row.category_name.clone();
                                        let price = row.price_value();
                                        let (quantity_in, quantity_out) = (row.record.quantity_in, row.record.quantity_out);
                                        let stock = row.stock;
                                        let stock_status = row.status.clone();
                                        let for_delete = row;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <a href="#" on:click=move |ev| {
                                                            ev.prevent_default();
                                                            modal.set(Some(InventoryModal::Orders(id)));
                                                        }>{name}</a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout truncate=true>{category}</TableCellLayout></TableCell>
                                                <TableCellMoney value=Some(price) />
                                                <TableCell><TableCellLayout>{quantity_in}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{quantity_out}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{stock}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <StockStatusBadge status=stock_status />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <button class="button button--icon" title="Orders" on:click=move |_| modal.set(Some(InventoryModal::Orders(id)))>
                                                            {icon("orders")}
                                                        </button>
                                                        <button class="button button--icon" title="Edit" on:click=move |_| modal.set(Some(InventoryModal::Edit(id)))>
                                                            {icon("edit")}
                                                        </button>
                                                        <button class="button button--icon button--danger" title="Delete" on:click=move |_| delete_record(for_delete.clone())>
                                                            {icon("delete")}
                                                        </button>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                </LoadGate>
            </div>

            {move || {
                let close = Callback::new(move |_| modal.set(None));
                match modal.get()? {
                    InventoryModal::Orders(id) => {
                        let row = rows.with(|r| r.iter().find(|r| r.record.id == id).cloned())?;
                        let orders = data.with(|d| d.orders.clone());
                        Some(view! { <ProductOrdersModal row=row orders=orders on_close=close /> }.into_any())
                    }
                    InventoryModal::Edit(id) => {
                        let record = data.with(|d| d.inventory.iter().find(|r| r.id == id).cloned())?;
                        let products = data.with(|d| d.products.clone());
                        Some(view! {
                            <InventoryDetails record=Some(record) products=products on_saved=on_saved on_cancel=close />
                        }.into_any())
                    }
                    InventoryModal::Create => {
                        let products = data.with(|d| d.products.clone());
                        Some(view! {
                            <InventoryDetails record=None products=products on_saved=on_saved on_cancel=close />
                        }.into_any())
                    }
                }
            }}
        </PageFrame>
    }
}

mod state;

use super::details::ProductDetails;
use super::view_modal::ProductViewModal;
use crate::domain::a002_product::api::{self, ProductPageData};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::charts::{BarChart, ChartCard, ChartPoint, DonutChart};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatGrid;
use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::{Badge, StockStatusBadge};
use crate::shared::confirm::BrowserConfirm;
use crate::shared::icons::icon;
use crate::shared::list_state::{bind_filter_input, clear_filters};
use crate::shared::list_utils::SearchInput;
use crate::shared::load_state::{finish_load, LoadGate, LoadStatus};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_cache::{use_query_client, Resource};
use contracts::domain::a002_product::aggregate::enrich_products;
use contracts::domain::a002_product::analytics::{
    category_distribution, price_distribution, price_vs_stock, stock_by_category,
};
use contracts::domain::a002_product::filter::PAGE_SIZE;
use contracts::domain::a002_product::{ProductFilter, ProductRow, ProductStats};
use contracts::domain::a003_inventory::StockStatus;
use contracts::domain::common::AggregateRoot;
use contracts::shared::delete_guard::{guarded_delete, DeleteOutcome};
use contracts::shared::indicators::{format_value, ValueFormat};
use contracts::shared::list_query::ListFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::{create_state, ProductModal};
use thaw::*;

fn money(value: f64) -> String {
    format_value(value, ValueFormat::Money)
}

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let client = use_query_client();
    let controls = create_state();

    let data = RwSignal::new(ProductPageData::default());
    let status = RwSignal::new(LoadStatus::Loading);
    let modal = RwSignal::new(None::<ProductModal>);
    let filters_expanded = RwSignal::new(true);

    let load = move || {
        status.set(LoadStatus::Loading);
        spawn_local(async move {
            let result = api::load_page(client).await;
            finish_load(status, "products", result, |page| data.set(page));
        });
    };
    load();

    let rows = Memo::new(move |_| {
        data.with(|d| enrich_products(&d.products, &d.categories, &d.inventory))
    });
    let list_view = Memo::new(move |_| {
        controls.with(|c| rows.with(|r| c.view(r, PAGE_SIZE)))
    });
    let indicators = Signal::derive(move || {
        rows.with(|r| data.with(|d| ProductStats::build(r, &d.categories).indicators()))
    });

    // Chart series
    let price_buckets = Signal::derive(move || {
        data.with(|d| {
            price_distribution(&d.products)
                .into_iter()
                .map(|b| ChartPoint::new(b.range, b.count as f64))
                .collect::<Vec<_>>()
        })
    });
    let category_counts = Signal::derive(move || {
        data.with(|d| {
            category_distribution(&d.categories, &d.products)
                .into_iter()
                .map(|c| ChartPoint::new(format!("{} (avg {})", c.name, money(c.avg_price)), c.count as f64))
                .collect::<Vec<_>>()
        })
    });
    let category_stock = Signal::derive(move || {
        rows.with(|r| {
            data.with(|d| {
                stock_by_category(&d.categories, r)
                    .into_iter()
                    .map(|c| ChartPoint::new(c.name, c.stock as f64))
                    .collect::<Vec<_>>()
            })
        })
    });
    let price_stock = Signal::derive(move || {
        rows.with(|r| {
            price_vs_stock(r)
                .into_iter()
                .map(|p| ChartPoint::new(format!("{} · {}", p.label, money(p.price)), p.stock as f64))
                .collect::<Vec<_>>()
        })
    });

    // Filter inputs bound to Thaw controls
    let category_input = RwSignal::new(String::new());
    let price_min = RwSignal::new(String::new());
    let price_max = RwSignal::new(String::new());
    let status_input = RwSignal::new(String::new());
    let stock_min = RwSignal::new(String::new());
    let stock_max = RwSignal::new(String::new());

    bind_filter_input(controls, category_input, |f: &ProductFilter| f.category.clone(), |f, v| f.category = v);
    bind_filter_input(controls, price_min, |f: &ProductFilter| f.price_min.clone(), |f, v| f.price_min = v);
    bind_filter_input(controls, price_max, |f: &ProductFilter| f.price_max.clone(), |f, v| f.price_max = v);
    bind_filter_input(controls, status_input, |f: &ProductFilter| f.status.clone(), |f, v| f.status = v);
    bind_filter_input(controls, stock_min, |f: &ProductFilter| f.stock_min.clone(), |f, v| f.stock_min = v);
    bind_filter_input(controls, stock_max, |f: &ProductFilter| f.stock_max.clone(), |f, v| f.stock_max = v);

    let input_for = move |field: &str| match field {
        "price_min" => Some(price_min),
        "price_max" => Some(price_max),
        "stock_min" => Some(stock_min),
        "stock_max" => Some(stock_max),
        _ => None,
    };

    let clear_all = Callback::new(move |_| {
        clear_filters(
            controls,
            &[category_input, price_min, price_max, status_input, stock_min, stock_max],
        )
    });

    let delete_product = move |row: ProductRow| {
        spawn_local(async move {
            let product = row.product;
            let outcome = guarded_delete(
                &BrowserConfirm,
                &product.delete_prompt(),
                product.id,
                api::delete_product,
            )
            .await;
            match &outcome {
                DeleteOutcome::Cancelled => {}
                DeleteOutcome::Deleted(_) => {
                    data.update(|d| {
                        outcome.apply_to(&mut d.products);
                    });
                    // next visit refetches; this page keeps its local copy
                    client.invalidate(Resource::Products);
                    ctx.notify_success(format!("Deleted product '{}'", product.name));
                }
                DeleteOutcome::Failed(e) => {
                    log::error!("{}", e);
                    ctx.notify_error("Could not delete the product. Please try again.");
                }
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        modal.set(None);
        client.invalidate(Resource::Products);
        ctx.notify_success("Product saved");
        load();
    });

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <PageHeader title="Products" icon_name="products" subtitle="Catalog, prices and stock">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.set(Some(ProductModal::Create))>
                    {icon("plus")}
                    " Add product"
                </Button>
            </PageHeader>

            <div class="page__content">
                <LoadGate status=status on_retry=Callback::new(move |_| load())>
                    <StatGrid indicators=indicators />

                    <div class="chart-grid">
                        <ChartCard title="Price distribution" is_empty=Signal::derive(move || price_buckets.with(Vec::is_empty))>
                            <BarChart data=price_buckets />
                        </ChartCard>
                        <ChartCard title="Products by category" is_empty=Signal::derive(move || category_counts.with(Vec::is_empty))>
                            <DonutChart data=category_counts />
                        </ChartCard>
                        <ChartCard title="Stock by category" is_empty=Signal::derive(move || category_stock.with(Vec::is_empty))>
                            <BarChart data=category_stock multicolor=true />
                        </ChartCard>
                        <ChartCard title="Price vs stock" is_empty=Signal::derive(move || price_stock.with(Vec::is_empty))>
                            <BarChart data=price_stock />
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
                                    <Label>"Name"</Label>
                                    <SearchInput
                                        value=Signal::derive(move || controls.with(|c| c.filter.name.clone()))
                                        on_change=Callback::new(move |v: String| controls.update(|c| c.edit_filter(|f| f.name = v)))
                                        placeholder="Search by name..."
                                    />
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Category"</Label>
                                    <Input value=category_input placeholder="Any category" />
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Price"</Label>
                                    <Flex gap=FlexGap::Small>
                                        <Input value=price_min placeholder="Min" />
                                        <Input value=price_max placeholder="Max" />
                                    </Flex>
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
                                    <Label>"Stock"</Label>
                                    <Flex gap=FlexGap::Small>
                                        <Input value=stock_min placeholder="Min" />
                                        <Input value=stock_max placeholder="Max" />
                                    </Flex>
                                </Flex>
                            </Flex>
                        }
                        filter_tags=move || view! {
                            {move || list_view.with(|v| v.invalid_fields.clone()).into_iter().map(|field| view! {
                                <FilterTag
                                    label=format!("Ignored {}: not a number", field.replace('_', " "))
                                    on_remove=Callback::new(move |_| {
                                        if let Some(input) = input_for(field) {
                                            input.set(String::new());
                                        }
                                    })
                                />
                            }).collect_view()}
                        }
                    />

                    <div class="page-content">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=200.0>"Name"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=140.0>"Category"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=100.0>"Price"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=80.0>"Stock"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=110.0>"Status"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    let page = list_view.with(|v| v.page.items.clone());
                                    if page.is_empty() {
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan="6">
                                                    <TableCellLayout>
                                                        <span class="text-muted">"No products match the filters"</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    page.into_iter().map(|row| {
                                        let id = row.product.id;
                                        let name = row.product.name.clone();
                                        let category = row.category_name.clone();
                                        let price = row.product.price_value();
                                        let stock = row.stock_or_zero();
                                        let badge = match row.status.clone() {
                                            Some(s) => view! { <StockStatusBadge status=s /> }.into_any(),
                                            None => view! { <Badge>"Untracked"</Badge> }.into_any(),
                                        };
                                        let for_delete = row;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <a href="#" on:click=move |ev| {
                                                            ev.prevent_default();
                                                            modal.set(Some(ProductModal::View(id)));
                                                        }>{name}</a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout truncate=true>{category}</TableCellLayout></TableCell>
                                                <TableCellMoney value=price />
                                                <TableCell><TableCellLayout>{stock}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{badge}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <button class="button button--icon" title="View" on:click=move |_| modal.set(Some(ProductModal::View(id)))>
                                                            {icon("eye")}
                                                        </button>
                                                        <button class="button button--icon" title="Edit" on:click=move |_| modal.set(Some(ProductModal::Edit(id)))>
                                                            {icon("edit")}
                                                        </button>
                                                        <button class="button button--icon button--danger" title="Delete" on:click=move |_| delete_product(for_delete.clone())>
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
                    ProductModal::View(id) => {
                        let row = rows.with(|r| r.iter().find(|r| r.product.id == id).cloned())?;
                        Some(view! { <ProductViewModal row=row on_close=close /> }.into_any())
                    }
                    ProductModal::Edit(id) => {
                        let product = data.with(|d| d.products.iter().find(|p| p.id == id).cloned())?;
                        let categories = data.with(|d| d.categories.clone());
                        Some(view! {
                            <ProductDetails product=Some(product) categories=categories on_saved=on_saved on_cancel=close />
                        }.into_any())
                    }
                    ProductModal::Create => {
                        let categories = data.with(|d| d.categories.clone());
                        Some(view! {
                            <ProductDetails product=None categories=categories on_saved=on_saved on_cancel=close />
                        }.into_any())
                    }
                }
            }}
        </PageFrame>
    }
}

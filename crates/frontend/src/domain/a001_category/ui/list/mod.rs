mod state;

use crate::domain::a001_category::api::{self, CategoryPageData};
use crate::shared::components::charts::{BarChart, ChartCard, ChartPoint, DonutChart};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatGrid;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::list_state::{bind_filter_input, clear_filters};
use crate::shared::list_utils::SearchInput;
use crate::shared::load_state::{finish_load, LoadGate, LoadStatus};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_cache::use_query_client;
use chrono::Utc;
use contracts::domain::a001_category::analytics::{
    build_category_analytics, market_share, performance, price_analysis,
};
use contracts::domain::a001_category::filter::PAGE_SIZE;
use contracts::domain::a001_category::{CategoryFilter, CategorySort, CategoryStats};
use contracts::shared::indicators::{format_value, ValueFormat};
use contracts::shared::list_query::{ListFilter, SortDirection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::create_state;
use thaw::*;

fn money(value: f64) -> String {
    format_value(value, ValueFormat::Money)
}

#[component]
pub fn CategoryList() -> impl IntoView {
    let client = use_query_client();
    let controls = create_state();

    let data = RwSignal::new(CategoryPageData::default());
    let status = RwSignal::new(LoadStatus::Loading);
    let filters_expanded = RwSignal::new(true);

    let load = move || {
        status.set(LoadStatus::Loading);
        spawn_local(async move {
            let result = api::load_page(client).await;
            finish_load(status, "categories", result, |page| data.set(page));
        });
    };
    load();

    let rows = Memo::new(move |_| {
        data.with(|d| build_category_analytics(&d.categories, &d.products, &d.orders, Utc::now()))
    });
    let list_view = Memo::new(move |_| controls.with(|c| rows.with(|r| c.view(r, PAGE_SIZE))));
    let indicators = Signal::derive(move || rows.with(|r| CategoryStats::build(r).indicators()));

    let revenue = Signal::derive(move || {
        rows.with(|r| {
            performance(r)
                .into_iter()
                .map(|p| ChartPoint::new(format!("{} ({} products)", p.label, p.product_count), p.revenue))
                .collect::<Vec<_>>()
        })
    });
    let shares = Signal::derive(move || {
        rows.with(|r| {
            market_share(r)
                .into_iter()
                .map(|s| ChartPoint::new(format!("{} ({}%)", s.name, s.share), s.revenue))
                .collect::<Vec<_>>()
        })
    });
    let prices = Signal::derive(move || {
        data.with(|d| {
            price_analysis(&d.categories, &d.products)
                .into_iter()
                .map(|p| ChartPoint::new(format!("{} ({} – {})", p.name, money(p.min), money(p.max)), p.avg))
                .collect::<Vec<_>>()
        })
    });

    let products_min = RwSignal::new(String::new());
    let products_max = RwSignal::new(String::new());
    let revenue_min = RwSignal::new(String::new());
    let revenue_max = RwSignal::new(String::new());

    bind_filter_input(controls, products_min, |f: &CategoryFilter| f.products_min.clone(), |f, v| f.products_min = v);
    bind_filter_input(controls, products_max, |f: &CategoryFilter| f.products_max.clone(), |f, v| f.products_max = v);
    bind_filter_input(controls, revenue_min, |f: &CategoryFilter| f.revenue_min.clone(), |f, v| f.revenue_min = v);
    bind_filter_input(controls, revenue_max, |f: &CategoryFilter| f.revenue_max.clone(), |f, v| f.revenue_max = v);

    let input_for = move |field: &str| match field {
        "products_min" => Some(products_min),
        "products_max" => Some(products_max),
        "revenue_min" => Some(revenue_min),
        "revenue_max" => Some(revenue_max),
        _ => None,
    };

    let clear_all = Callback::new(move |_| {
        clear_filters(controls, &[products_min, products_max, revenue_min, revenue_max])
    });

    let current_sort = Signal::derive(move || controls.with(|c| c.filter.sort.key()));
    let on_sort = Callback::new(move |key: &'static str| {
        controls.update(|c| c.edit_filter(|f| f.sort = CategorySort::from_key(key)))
    });
    let sort_header = move |sort: CategorySort, min_width: f64| {
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

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <PageHeader title="Categories" icon_name="categories" subtitle="Revenue and pricing per category" />

            <div class="page__content">
                <LoadGate status=status on_retry=Callback::new(move |_| load())>
                    <StatGrid indicators=indicators />

                    <div class="chart-grid">
                        <ChartCard title="Category performance" is_empty=Signal::derive(move || revenue.with(Vec::is_empty))>
                            <BarChart data=revenue format=money multicolor=true />
                        </ChartCard>
                        <ChartCard title="Market share" is_empty=Signal::derive(move || shares.with(Vec::is_empty))>
                            <DonutChart data=shares />
                        </ChartCard>
                        <ChartCard title="Average price" is_empty=Signal::derive(move || prices.with(Vec::is_empty))>
                            <BarChart data=prices format=money />
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
                                        value=Signal::derive(move || controls.with(|c| c.filter.search.clone()))
                                        on_change=Callback::new(move |v: String| controls.update(|c| c.edit_filter(|f| f.search = v)))
                                        placeholder="Search categories..."
                                    />
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Products"</Label>
                                    <Flex gap=FlexGap::Small>
                                        <Input value=products_min placeholder="Min" />
                                        <Input value=products_max placeholder="Max" />
                                    </Flex>
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Revenue"</Label>
                                    <Flex gap=FlexGap::Small>
                                        <Input value=revenue_min placeholder="Min" />
                                        <Input value=revenue_max placeholder="Max" />
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
                                    {sort_header(CategorySort::Name, 180.0)}
                                    {sort_header(CategorySort::Products, 100.0)}
                                    {sort_header(CategorySort::Revenue, 120.0)}
                                    {sort_header(CategorySort::AvgPrice, 110.0)}
                                    <TableHeaderCell resizable=false min_width=160.0>"Top product"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=100.0>"Sold (30 days)"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=90.0>"Share"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    let page = list_view.with(|v| v.page.items.clone());
                                    if page.is_empty() {
                                        return view! {
                                            <TableRow>
                                                <TableCell attr:colspan="7">
                                                    <TableCellLayout>
                                                        <span class="text-muted">"No categories match the filters"</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    page.into_iter().map(|row| {
                                        let name = row.name.clone();
                                        let description = row.description.clone();
                                        let top_product = row.top_product.clone().unwrap_or_else(|| "—".to_string());
                                        let share = format!("{}%", row.market_share);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <div class="table__primary">{name}</div>
                                                        {description.map(|d| view! {
                                                            <div class="table__secondary text-muted">{d}</div>
                                                        })}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout>{row.product_count}</TableCellLayout></TableCell>
                                                <TableCellMoney value=Some(row.total_revenue) bold=true />
                                                <TableCellMoney value=Some(row.average_price) />
                                                <TableCell><TableCellLayout truncate=true>{top_product}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{row.recent_items}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{share}</TableCellLayout></TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                </LoadGate>
            </div>
        </PageFrame>
    }
}

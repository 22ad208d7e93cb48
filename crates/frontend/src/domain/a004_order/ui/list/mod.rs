mod state;

use super::details::OrderDetails;
use crate::domain::a004_order::api::{self, OrderPageData};
use crate::shared::components::charts::{BarChart, ChartCard, ChartPoint, DonutChart, LineChart};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatGrid;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::OrderStatusBadge;
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::list_state::{bind_filter_input, clear_filters};
use crate::shared::list_utils::SearchInput;
use crate::shared::load_state::{finish_load, LoadGate, LoadStatus};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::query_cache::use_query_client;
use chrono::Utc;
use contracts::domain::a004_order::analytics::{
    category_revenue, daily_trend, monthly_revenue, status_breakdown, top_products,
};
use contracts::domain::a004_order::filter::PAGE_SIZE;
use contracts::domain::a004_order::{OrderFilter, OrderSort, OrderStats, OrderStatus};
use contracts::domain::common::EntityId;
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
pub fn OrderList() -> impl IntoView {
    let client = use_query_client();
    let controls = create_state();

    let data = RwSignal::new(OrderPageData::default());
    let status = RwSignal::new(LoadStatus::Loading);
    let selected = RwSignal::new(None::<EntityId>);
    let filters_expanded = RwSignal::new(true);

    let load = move || {
        status.set(LoadStatus::Loading);
        spawn_local(async move {
            let result = api::load_page(client).await;
            finish_load(status, "orders", result, |page| data.set(page));
        });
    };
    load();

    let list_view = Memo::new(move |_| controls.with(|c| data.with(|d| c.view(&d.orders, PAGE_SIZE))));
    let indicators = Signal::derive(move || data.with(|d| OrderStats::build(&d.orders, Utc::now()).indicators()));

    // Chart series
    let monthly = Memo::new(move |_| data.with(|d| monthly_revenue(&d.orders)));
    let revenue_by_month = Signal::derive(move || {
        monthly.with(|m| {
            m.iter()
                .map(|p| ChartPoint::new(format!("{} ({} orders)", p.label, p.orders), p.revenue))
                .collect::<Vec<_>>()
        })
    });
    let aov_by_month = Signal::derive(move || {
        monthly.with(|m| {
            m.iter()
                .map(|p| ChartPoint::new(p.label.clone(), p.average_order_value))
                .collect::<Vec<_>>()
        })
    });
    let products = Signal::derive(move || {
        data.with(|d| {
            top_products(&d.orders)
                .into_iter()
                .map(|p| ChartPoint::new(format!("{} ×{}", p.label, p.quantity), p.revenue))
                .collect::<Vec<_>>()
        })
    });
    let statuses = Signal::derive(move || {
        data.with(|d| {
            status_breakdown(&d.orders)
                .into_iter()
                .map(|s| ChartPoint::new(format!("{} ({}%)", s.status.label(), s.percent), s.count as f64))
                .collect::<Vec<_>>()
        })
    });
    let categories = Signal::derive(move || {
        data.with(|d| {
            category_revenue(&d.orders, &d.products, &d.categories)
                .into_iter()
                .map(|c| ChartPoint::new(c.name, c.revenue))
                .collect::<Vec<_>>()
        })
    });
    let daily = Signal::derive(move || {
        data.with(|d| {
            daily_trend(&d.orders, Utc::now())
                .into_iter()
                .map(|p| ChartPoint::new(format!("{} · {}", p.label, money(p.revenue)), p.orders as f64))
                .collect::<Vec<_>>()
        })
    });

    let status_input = RwSignal::new(String::new());
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let amount_min = RwSignal::new(String::new());
    let amount_max = RwSignal::new(String::new());

    bind_filter_input(controls, status_input, |f: &OrderFilter| f.status.clone(), |f, v| f.status = v);
    bind_filter_input(controls, amount_min, |f: &OrderFilter| f.amount_min.clone(), |f, v| f.amount_min = v);
    bind_filter_input(controls, amount_max, |f: &OrderFilter| f.amount_max.clone(), |f, v| f.amount_max = v);
    bind_filter_input(controls, date_from, |f: &OrderFilter| f.date_from.clone(), |f, v| f.date_from = v);
    bind_filter_input(controls, date_to, |f: &OrderFilter| f.date_to.clone(), |f, v| f.date_to = v);

    let input_for = move |field: &str| match field {
        "date_from" => Some(date_from),
        "date_to" => Some(date_to),
        "amount_min" => Some(amount_min),
        "amount_max" => Some(amount_max),
        _ => None,
    };

    let clear_all = Callback::new(move |_| {
        clear_filters(controls, &[status_input, date_from, date_to, amount_min, amount_max])
    });

    let current_sort = Signal::derive(move || controls.with(|c| c.filter.sort.key()));
    let on_sort = Callback::new(move |key: &'static str| {
        controls.update(|c| c.edit_filter(|f| f.sort = OrderSort::from_key(key)))
    });
    let sort_header = move |sort: OrderSort, label: &'static str, min_width: f64| {
        view! {
            <SortableHeaderCell
                label=label
                sort_key=sort.key()
                ascending=sort.direction() == SortDirection::Ascending
                current_key=current_sort
                on_sort=on_sort
                min_width=min_width
            />
        }
    };

    view! {
        <PageFrame page_id="a004_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders" icon_name="orders" subtitle="Revenue and order history" />

            <div class="page__content">
                <LoadGate status=status on_retry=Callback::new(move |_| load())>
                    <StatGrid indicators=indicators />

                    <div class="chart-grid">
                        <ChartCard title="Monthly revenue" is_empty=Signal::derive(move || revenue_by_month.with(Vec::is_empty))>
                            <LineChart data=revenue_by_month format=money />
                        </ChartCard>
                        <ChartCard title="Average order value" is_empty=Signal::derive(move || aov_by_month.with(Vec::is_empty))>
                            <LineChart data=aov_by_month format=money series=2 />
                        </ChartCard>
                        <ChartCard title="Top products" is_empty=Signal::derive(move || products.with(Vec::is_empty))>
                            <BarChart data=products format=money />
                        </ChartCard>
                        <ChartCard title="Orders by status" is_empty=Signal::derive(move || statuses.with(Vec::is_empty))>
                            <DonutChart data=statuses />
                        </ChartCard>
                        <ChartCard title="Revenue by category" is_empty=Signal::derive(move || categories.with(Vec::is_empty))>
                            <BarChart data=categories format=money multicolor=true />
                        </ChartCard>
                        <ChartCard title="Daily orders (last 30 days)" is_empty=Signal::derive(move || daily.with(Vec::is_empty))>
                            <LineChart data=daily series=1 />
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
                                        placeholder="Order #, customer or product..."
                                    />
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Status"</Label>
                                    <Select value=status_input>
                                        <option value="">"All statuses"</option>
                                        {OrderStatus::KNOWN.iter().map(|s| view! {
                                            <option value=s.as_str().to_string()>{s.label().to_string()}</option>
                                        }).collect_view()}
                                    </Select>
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Period"</Label>
                                    <Flex gap=FlexGap::Small>
                                        <Input value=date_from input_type=InputType::Date />
                                        <Input value=date_to input_type=InputType::Date />
                                    </Flex>
                                </Flex>
                                <Flex vertical=true gap=FlexGap::Small>
                                    <Label>"Amount"</Label>
                                    <Flex gap=FlexGap::Small>
                                        <Input value=amount_min placeholder="Min" />
                                        <Input value=amount_max placeholder="Max" />
                                    </Flex>
                                </Flex>
                            </Flex>
                        }
                        filter_tags=move || view! {
                            {move || list_view.with(|v| v.invalid_fields.clone()).into_iter().map(|field| {
                                let reason = if field.starts_with("date") { "not a date" } else { "not a number" };
                                view! {
                                    <FilterTag
                                        label=format!("Ignored {}: {}", field.replace('_', " "), reason)
                                        on_remove=Callback::new(move |_| {
                                            if let Some(input) = input_for(field) {
                                                input.set(String::new());
                                            }
                                        })
                                    />
                                }
                            }).collect_view()}
                        }
                    />

                    <div class="page-content">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=90.0>"Order"</TableHeaderCell>
                                    {sort_header(OrderSort::Date, "Date", 110.0)}
                                    <TableHeaderCell resizable=false min_width=160.0>"Customer"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=80.0>"Items"</TableHeaderCell>
                                    {sort_header(OrderSort::Amount, "Total", 110.0)}
                                    {sort_header(OrderSort::Status, "Status", 110.0)}
                                    <TableHeaderCell resizable=false min_width=60.0>""</TableHeaderCell>
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
                                                        <span class="text-muted">"No orders match the filters"</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }.into_any();
                                    }
                                    page.into_iter().map(|order| {
                                        let id = order.id;
                                        let created = format_opt_date(order.time_created.as_ref());
                                        let customer = order.customer().to_string();
                                        let items = order.item_count();
                                        let total = order.total();
                                        let order_status = order.status;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <a href="#" on:click=move |ev| {
                                                            ev.prevent_default();
                                                            selected.set(Some(id));
                                                        }>{format!("#{}", id)}</a>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{customer}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{items}</TableCellLayout></TableCell>
                                                <TableCellMoney value=Some(total) bold=true />
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <OrderStatusBadge status=order_status />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <button class="button button--icon" title="Details" on:click=move |_| selected.set(Some(id))>
                                                            {icon("eye")}
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
                let id = selected.get()?;
                let order = data.with(|d| d.orders.iter().find(|o| o.id == id).cloned())?;
                Some(view! { <OrderDetails order=order on_close=Callback::new(move |_| selected.set(None)) /> })
            }}
        </PageFrame>
    }
}

use dashboard_core::export::orders_report;
use dashboard_core::view_model::{ALL, OrderSummary, STATUS_FACET, URGENCY_FACET};
use payloads::requests::{OrderQuery, OrderStatusUpdate, StatusUpdate};
use payloads::responses::{Order, OrdersPage as OrdersListing};
use payloads::{OrderId, OrderStatus, Urgency};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{State, config};
use crate::components::{
    EmptyState, ErrorPanel, ExportButtons, Facet, FilterBar, PaginationControls,
    StatCard, StatusBadge, StatusModal,
};
use crate::contexts::toast::use_toast;
use crate::download::{ExportFormat, export_report};
use crate::hooks::{use_api, use_api_mutation, use_debounce, use_title};
use crate::utils::time::{format_timestamp, today};
use crate::utils::{format_amount, options};

/// Orders are paginated by the server, so filters go into the request
/// rather than through the client-side list reducer.
#[function_component]
pub fn OrdersPage() -> Html {
    use_title("Orders");
    let (state, _) = use_store::<State>();
    let toast = use_toast();

    let query = use_state(OrderQuery::default);
    let search = {
        let seed = state.global_search.clone();
        use_state(move || seed)
    };
    let selected = use_state(|| None::<Order>);
    let status_mutation = use_api_mutation::<Order>();
    let export_mutation = use_api_mutation::<OrdersListing>();

    // The header search box feeds this page too.
    {
        let search = search.clone();
        use_effect_with(state.global_search.clone(), move |global| {
            search.set(global.clone());
        });
    }

    let debounced = use_debounce((*search).clone(), config().search_debounce_ms);
    {
        let query = query.clone();
        use_effect_with(debounced, move |debounced| {
            let next = query.with_filters(
                query.status,
                query.urgency,
                Some(debounced.clone()),
            );
            if next.search != query.search {
                query.set(next);
            }
        });
    }

    let current = (*query).clone();
    let orders = {
        let current = current.clone();
        use_api(current.clone(), move |client| {
            let query = current.clone();
            async move { client.list_orders(&query).await }
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |value: String| search.set(value))
    };

    let on_facet = {
        let query = query.clone();
        Callback::from(move |(name, value): (String, String)| {
            let mut status = query.status;
            let mut urgency = query.urgency;
            match name.as_str() {
                STATUS_FACET => status = parse_facet(&value),
                URGENCY_FACET => urgency = parse_facet(&value),
                _ => return,
            }
            query.set(query.with_filters(status, urgency, query.search.clone()));
        })
    };

    let on_clear = {
        let query = query.clone();
        let search = search.clone();
        Callback::from(move |_| {
            search.set(String::new());
            query.set(query.with_filters(None, None, None));
        })
    };

    let on_previous = {
        let query = query.clone();
        Callback::from(move |_| query.set(query.previous_page()))
    };
    let on_next = {
        let query = query.clone();
        Callback::from(move |_| query.set(query.next_page()))
    };

    let close = {
        let selected = selected.clone();
        let mutation = status_mutation.clone();
        Callback::from(move |_| {
            mutation.reset();
            selected.set(None);
        })
    };

    let on_status = {
        let mutation = status_mutation.clone();
        let selected = selected.clone();
        let refetch = orders.refetch.clone();
        let toast = toast.clone();
        Callback::from(move |(id, status, note): (OrderId, String, String)| {
            let Ok(status) = status.parse::<OrderStatus>() else {
                return;
            };
            let on_done = {
                let selected = selected.clone();
                let refetch = refetch.clone();
                let toast = toast.clone();
                Callback::from(move |outcome: Result<Order, String>| {
                    if let Ok(order) = outcome {
                        toast.success(format!(
                            "{} is now {}",
                            order.reference,
                            order.status.label()
                        ));
                        selected.set(None);
                        refetch.emit(());
                    }
                })
            };
            let update = StatusUpdate::new(status).with_note(&note);
            mutation.mutate(
                |client, (id, update): (OrderId, OrderStatusUpdate)| async move {
                    client.update_order_status(&id, &update).await
                },
                (id, update),
                on_done,
            );
        })
    };

    // Exports cover every order matching the filters, not just this page.
    let total = orders.data.as_ref().map(|page| page.total);
    let on_export = {
        let mutation = export_mutation.clone();
        let current = current.clone();
        Callback::from(move |format: ExportFormat| {
            let Some(total) = total else {
                return;
            };
            let everything = OrderQuery {
                offset: 0,
                limit: u32::try_from(total.max(1)).unwrap_or(u32::MAX),
                ..current.clone()
            };
            let toast = toast.clone();
            let on_done = Callback::from(
                move |outcome: Result<OrdersListing, String>| {
                    let exported = outcome.and_then(|listing| {
                        let report = orders_report(&listing.orders, today());
                        export_report(&report, "orders-report", format)
                    });
                    match exported {
                        Ok(filename) => toast.success(format!("Downloaded {filename}")),
                        Err(message) => toast.error(message),
                    }
                },
            );
            mutation.mutate(
                |client, query: OrderQuery| async move {
                    client.list_orders(&query).await
                },
                everything,
                on_done,
            );
        })
    };

    let open = |order: Order| {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(Some(order.clone())))
    };

    let facets = vec![
        Facet::new(
            STATUS_FACET,
            "statuses",
            options::<OrderStatus>(),
            current.status.map_or(ALL, |s| s.as_str()),
        ),
        Facet::new(
            URGENCY_FACET,
            "urgencies",
            options::<Urgency>(),
            current.urgency.map_or(ALL, |u| u.as_str()),
        ),
    ];
    let has_filters = current.status.is_some()
        || current.urgency.is_some()
        || current.search.is_some();

    let content = orders.render("orders", |page, is_loading, error| {
        let summary = OrderSummary::from_orders(&page.orders);
        let limit = current.limit.max(1) as usize;
        let total = page.total as usize;
        let total_pages = total.div_ceil(limit).max(1);
        let start = page.offset as usize + 1;
        let range = (!page.orders.is_empty())
            .then(|| (start, start + page.orders.len() - 1));

        html! {
            <>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                    <StatCard label="Matching" value={page.total.to_string()} />
                    <StatCard
                        label="Pending on page"
                        value={summary.count(OrderStatus::Pending).to_string()}
                    />
                    <StatCard
                        label="In transit on page"
                        value={summary.count(OrderStatus::InTransit).to_string()}
                    />
                    <StatCard
                        label="Delivered on page"
                        value={summary.count(OrderStatus::Delivered).to_string()}
                        detail={format!("{} delivered", format_amount(summary.delivered_revenue))}
                    />
                </div>

                if let Some(error) = error {
                    <div class="mb-4">
                        <ErrorPanel
                            message={format!("Showing the last loaded page. Refresh failed: {error}")}
                            on_retry={orders.refetch.clone()}
                        />
                    </div>
                }

                if page.orders.is_empty() {
                    <EmptyState message={if has_filters {
                        "No orders match these filters."
                    } else {
                        "No orders have been placed yet."
                    }} />
                } else {
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-neutral-500 border-b \
                                       border-neutral-200 dark:border-neutral-700">
                                <th class="py-2">{"Order"}</th>
                                <th>{"Hospital"}</th>
                                <th>{"Test"}</th>
                                <th>{"Rider"}</th>
                                <th>{"Urgency"}</th>
                                <th>{"Amount"}</th>
                                <th>{"Status"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for page.orders.iter().map(|order| html! {
                                <tr key={order.id.to_string()}
                                    class="border-b border-neutral-100 dark:border-neutral-800">
                                    <td class="py-2">
                                        <div class="font-medium">{&order.reference}</div>
                                        <div class="text-xs text-neutral-500">
                                            {format_timestamp(order.created_at)}
                                        </div>
                                    </td>
                                    <td>{&order.hospital_name}</td>
                                    <td>
                                        <div>{&order.test_type}</div>
                                        <div class="text-xs text-neutral-500">
                                            {&order.patient_name}
                                        </div>
                                    </td>
                                    <td>{order.rider_name.as_deref().unwrap_or("-")}</td>
                                    <td>
                                        <StatusBadge
                                            status={order.urgency.as_str()}
                                            label={order.urgency.label()}
                                        />
                                    </td>
                                    <td>{format_amount(order.amount)}</td>
                                    <td>
                                        <StatusBadge
                                            status={order.status.as_str()}
                                            label={order.status.label()}
                                        />
                                    </td>
                                    <td class="text-right">
                                        if !order.status.is_terminal() {
                                            <button
                                                onclick={open(order.clone())}
                                                class="hover:underline"
                                            >
                                                {"Update status"}
                                            </button>
                                        }
                                    </td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }

                <PaginationControls
                    page={current.page_number() as usize}
                    {total_pages}
                    {range}
                    {total}
                    on_previous={on_previous.clone()}
                    on_next={on_next.clone()}
                    {is_loading}
                />
            </>
        }
    });

    let modal = match &*selected {
        None => html! {},
        Some(order) => {
            let id = order.id;
            html! {
                <StatusModal
                    title={format!("Update {}", order.reference)}
                    current={order.status.as_str()}
                    options={options::<OrderStatus>()}
                    on_submit={on_status.reform(move |(status, note): (String, String)| {
                        (id, status, note)
                    })}
                    on_close={close}
                    is_loading={status_mutation.is_loading}
                    error_message={status_mutation.error.clone().map(AttrValue::from)}
                />
            }
        }
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-semibold">{"Orders"}</h2>
                <ExportButtons
                    {on_export}
                    disabled={total.is_none() || export_mutation.is_loading}
                />
            </div>
            <FilterBar
                search={(*search).clone()}
                placeholder="Search by reference, patient or hospital"
                {on_search}
                {facets}
                {on_facet}
                {on_clear}
                {has_filters}
            />
            {content}
            {modal}
        </div>
    }
}

/// `None` for the "all" option or anything unrecognised.
fn parse_facet<T: std::str::FromStr>(value: &str) -> Option<T> {
    if value == ALL {
        return None;
    }
    value.parse().ok()
}

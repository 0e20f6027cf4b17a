use dashboard_core::export::dashboard_report;
use dashboard_core::view_model::{
    CenterSummary, HospitalSummary, OrderSummary, RiderSummary,
};
use payloads::requests::{ListFilter, OrderQuery};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ExportButtons, StatCard, StatusBadge};
use crate::contexts::toast::use_toast;
use crate::download::{ExportFormat, export_report};
use crate::hooks::{use_api, use_title};
use crate::utils::format_amount;
use crate::utils::time::{format_timestamp, today};

/// Orders pulled in for the overview and its report.
const OVERVIEW_ORDER_LIMIT: u32 = 100;
const RECENT_ORDERS: usize = 5;

#[function_component]
pub fn DashboardPage() -> Html {
    use_title("Dashboard");
    let toast = use_toast();

    let stats =
        use_api((), |client| async move { client.dashboard_stats().await });
    let hospitals = use_api((), |client| async move {
        client.list_hospitals(&ListFilter::default()).await
    });
    let centers = use_api((), |client| async move {
        client.list_collection_centers(&ListFilter::default()).await
    });
    let riders = use_api((), |client| async move {
        client.list_riders(&ListFilter::default()).await
    });
    let orders = use_api((), |client| async move {
        let query = OrderQuery {
            limit: OVERVIEW_ORDER_LIMIT,
            ..OrderQuery::default()
        };
        client.list_orders(&query).await
    });

    let loaded = (
        stats.data.as_ref(),
        hospitals.data.as_ref(),
        centers.data.as_ref(),
        riders.data.as_ref(),
        orders.data.as_ref(),
    );
    let report = match loaded {
        (Some(s), Some(h), Some(c), Some(r), Some(o)) => {
            Some(dashboard_report(s, h, c, r, &o.orders, today()))
        }
        _ => None,
    };

    let on_export = {
        let report = report.clone();
        Callback::from(move |format: ExportFormat| {
            let Some(report) = &report else {
                return;
            };
            match export_report(report, "operations-report", format) {
                Ok(filename) => toast.success(format!("Downloaded {filename}")),
                Err(message) => toast.error(message),
            }
        })
    };

    let refresh_all = {
        let refetches = [
            stats.refetch.clone(),
            hospitals.refetch.clone(),
            centers.refetch.clone(),
            riders.refetch.clone(),
            orders.refetch.clone(),
        ];
        Callback::from(move |_: MouseEvent| {
            for refetch in &refetches {
                refetch.emit(());
            }
        })
    };
    let any_loading = stats.is_loading
        || hospitals.is_loading
        || centers.is_loading
        || riders.is_loading
        || orders.is_loading;

    html! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-semibold">{"Dashboard"}</h2>
                <div class="flex items-center gap-3">
                    <button
                        onclick={refresh_all}
                        disabled={any_loading}
                        class="text-sm hover:underline disabled:opacity-50"
                    >
                        {if any_loading { "Refreshing..." } else { "Refresh" }}
                    </button>
                    <ExportButtons {on_export} disabled={report.is_none()} />
                </div>
            </div>

            {stats.render("dashboard statistics", |stats, _, _| html! {
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
                    <StatCard
                        label="Hospitals"
                        value={stats.total_hospitals.to_string()}
                        detail={format!("{} pending", stats.pending_hospitals)}
                    />
                    <StatCard
                        label="Collection centers"
                        value={stats.total_collection_centers.to_string()}
                        detail={format!("{} pending", stats.pending_collection_centers)}
                    />
                    <StatCard
                        label="Riders"
                        value={stats.total_riders.to_string()}
                        detail={format!("{} active", stats.active_riders)}
                    />
                    <StatCard
                        label="Orders today"
                        value={stats.orders_today.to_string()}
                    />
                    <StatCard
                        label="Pending orders"
                        value={stats.pending_orders.to_string()}
                        detail={format!("{} delivered", stats.delivered_orders)}
                    />
                    <StatCard
                        label="Revenue today"
                        value={format_amount(stats.revenue_today)}
                    />
                </div>
            })}

            <section>
                <h3 class="text-lg font-semibold mb-3">{"Awaiting review"}</h3>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {hospitals.render("hospitals", |items, _, _| {
                        let summary = HospitalSummary::from_hospitals(items);
                        review_card("Hospitals", summary.pending, summary.total, Route::Hospitals)
                    })}
                    {centers.render("collection centers", |items, _, _| {
                        let summary = CenterSummary::from_centers(items);
                        review_card(
                            "Collection centers",
                            summary.pending,
                            summary.total,
                            Route::CollectionCenters,
                        )
                    })}
                    {riders.render("riders", |items, _, _| {
                        let summary = RiderSummary::from_riders(items);
                        review_card("Riders", summary.pending, summary.total, Route::Riders)
                    })}
                </div>
            </section>

            <section>
                <h3 class="text-lg font-semibold mb-3">{"Recent orders"}</h3>
                {orders.render("orders", |page, _, _| {
                    let summary = OrderSummary::from_orders(&page.orders);
                    html! {
                        <>
                            <p class="text-sm text-neutral-600 dark:text-neutral-400 mb-3">
                                {format!(
                                    "{} urgent orders open. {} delivered revenue across the latest {} orders.",
                                    summary.open_urgent,
                                    format_amount(summary.delivered_revenue),
                                    summary.total,
                                )}
                            </p>
                            <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                                {for page.orders.iter().take(RECENT_ORDERS).map(|order| html! {
                                    <li key={order.id.to_string()}
                                        class="py-2 flex items-center justify-between text-sm">
                                        <span>
                                            <span class="font-mono">{&order.reference}</span>
                                            {format!(" {} for {}", order.test_type, order.hospital_name)}
                                        </span>
                                        <span class="flex items-center gap-3">
                                            <span class="text-neutral-500">
                                                {format_timestamp(order.created_at)}
                                            </span>
                                            <StatusBadge
                                                status={order.status.as_str()}
                                                label={order.status.label()}
                                            />
                                        </span>
                                    </li>
                                })}
                            </ul>
                        </>
                    }
                })}
            </section>
        </div>
    }
}

fn review_card(label: &str, pending: usize, total: usize, route: Route) -> Html {
    html! {
        <Link<Route> to={route} classes="block">
            <StatCard
                label={label.to_string()}
                value={pending.to_string()}
                detail={format!("of {total} registered")}
            />
        </Link<Route>>
    }
}

use dashboard_core::view_model::{
    AVAILABILITY_FACET, CITY_FACET, ListAction, ListView, RiderSummary,
    STATUS_FACET,
};
use payloads::requests::{
    ListFilter, RejectRequest, RiderStatusUpdate, StatusUpdate,
};
use payloads::responses::Rider;
use payloads::{RiderId, RiderStatus};
use yew::prelude::*;

use crate::components::{
    EmptyState, ErrorPanel, Facet, FilterBar, PaginationControls, Review,
    ReviewDecision, ReviewModal, StatCard, StatusBadge, StatusModal,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_api, use_api_mutation, use_list_query, use_title};
use crate::utils::{distinct, options};

#[derive(Clone, PartialEq)]
enum Dialog {
    Review(Rider, Review),
    Status(Rider),
}

fn availability_options() -> Vec<(String, String)> {
    vec![
        ("available".to_string(), "Available".to_string()),
        ("unavailable".to_string(), "Unavailable".to_string()),
    ]
}

#[function_component]
pub fn RidersPage() -> Html {
    use_title("Riders");
    let riders = use_api((), |client| async move {
        client.list_riders(&ListFilter::default()).await
    });
    let list = use_list_query();
    let dialog = use_state(|| None::<Dialog>);
    let mutation = use_api_mutation::<Rider>();
    let toast = use_toast();

    let close = {
        let dialog = dialog.clone();
        let mutation = mutation.clone();
        Callback::from(move |_| {
            mutation.reset();
            dialog.set(None);
        })
    };

    let on_done = {
        let dialog = dialog.clone();
        let refetch = riders.refetch.clone();
        Callback::from(move |outcome: Result<Rider, String>| {
            if let Ok(rider) = outcome {
                toast.success(format!("{} updated", rider.name));
                dialog.set(None);
                refetch.emit(());
            }
        })
    };

    let on_review = {
        let mutation = mutation.clone();
        let on_done = on_done.clone();
        Callback::from(move |(id, decision): (RiderId, ReviewDecision)| {
            match decision {
                ReviewDecision::Approve => mutation.mutate(
                    |client, id: RiderId| async move {
                        client.approve_rider(&id).await
                    },
                    id,
                    on_done.clone(),
                ),
                ReviewDecision::Reject(request) => mutation.mutate(
                    |client, (id, request): (RiderId, RejectRequest)| async move {
                        client.reject_rider(&id, &request).await
                    },
                    (id, request),
                    on_done.clone(),
                ),
            }
        })
    };

    let on_status = {
        let mutation = mutation.clone();
        Callback::from(move |(id, status, note): (RiderId, String, String)| {
            let Ok(status) = status.parse::<RiderStatus>() else {
                return;
            };
            let update = StatusUpdate::new(status).with_note(&note);
            mutation.mutate(
                |client, (id, update): (RiderId, RiderStatusUpdate)| async move {
                    client.update_rider_status(&id, &update).await
                },
                (id, update),
                on_done.clone(),
            );
        })
    };

    let open = |next: Dialog| {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Some(next.clone())))
    };

    let content = riders.render("riders", |items, _, error| {
        let view = ListView::build(items, &list.query);
        let summary = RiderSummary::from_riders(items);
        let facets = vec![
            Facet::new(
                STATUS_FACET,
                "statuses",
                options::<RiderStatus>(),
                list.query.facet(STATUS_FACET),
            ),
            Facet::new(
                AVAILABILITY_FACET,
                "availability",
                availability_options(),
                list.query.facet(AVAILABILITY_FACET),
            ),
            Facet::new(
                CITY_FACET,
                "cities",
                distinct(items, |r| r.city.as_str()),
                list.query.facet(CITY_FACET),
            ),
        ];

        html! {
            <>
                <div class="grid grid-cols-2 md:grid-cols-5 gap-4 mb-6">
                    <StatCard label="Total" value={summary.total.to_string()} />
                    <StatCard
                        label="Active"
                        value={summary.active.to_string()}
                        detail={format!("{} available now", summary.available)}
                    />
                    <StatCard label="Pending" value={summary.pending.to_string()} />
                    <StatCard label="Inactive" value={summary.inactive.to_string()} />
                    <StatCard label="Suspended" value={summary.suspended.to_string()} />
                </div>

                if let Some(error) = error {
                    <div class="mb-4">
                        <ErrorPanel
                            message={format!("Showing the last loaded list. Refresh failed: {error}")}
                            on_retry={riders.refetch.clone()}
                        />
                    </div>
                }

                <FilterBar
                    search={list.query.search.clone()}
                    placeholder="Search by name, phone, vehicle or city"
                    on_search={list.callback(ListAction::SetSearch)}
                    {facets}
                    on_facet={list.callback(|(name, value): (String, String)| {
                        ListAction::SetFacet { name, value }
                    })}
                    on_clear={list.callback(|_: ()| ListAction::ClearFilters)}
                    has_filters={list.query.has_filters()}
                />

                if view.items.is_empty() {
                    <EmptyState message={if items.is_empty() {
                        "No riders have registered yet."
                    } else {
                        "No riders match these filters."
                    }} />
                } else {
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-neutral-500 border-b \
                                       border-neutral-200 dark:border-neutral-700">
                                <th class="py-2">{"Name"}</th>
                                <th>{"Vehicle"}</th>
                                <th>{"City"}</th>
                                <th>{"Deliveries"}</th>
                                <th>{"Rating"}</th>
                                <th>{"Status"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for view.items.iter().map(|rider| html! {
                                <tr key={rider.id.to_string()}
                                    class="border-b border-neutral-100 dark:border-neutral-800">
                                    <td class="py-2">
                                        <div class="font-medium">{&rider.name}</div>
                                        <div class="text-xs text-neutral-500">
                                            {&rider.phone}
                                        </div>
                                    </td>
                                    <td>{&rider.vehicle_number}</td>
                                    <td>{&rider.city}</td>
                                    <td>{rider.completed_deliveries}</td>
                                    <td>
                                        {rider.rating
                                            .map(|rating| format!("{rating:.1}"))
                                            .unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td>
                                        <StatusBadge
                                            status={rider.status.as_str()}
                                            label={rider.status.label()}
                                        />
                                        if rider.status == RiderStatus::Active {
                                            <span class="ml-2 text-xs text-neutral-500">
                                                {if rider.is_available { "available" } else { "busy" }}
                                            </span>
                                        }
                                    </td>
                                    <td class="text-right space-x-2">
                                        if rider.status.is_reviewable() {
                                            <button
                                                onclick={open(Dialog::Review(rider.clone(), Review::Approve))}
                                                class="text-green-700 hover:underline"
                                            >
                                                {"Approve"}
                                            </button>
                                            <button
                                                onclick={open(Dialog::Review(rider.clone(), Review::Reject))}
                                                class="text-red-700 hover:underline"
                                            >
                                                {"Reject"}
                                            </button>
                                        } else {
                                            <button
                                                onclick={open(Dialog::Status(rider.clone()))}
                                                class="hover:underline"
                                            >
                                                {"Change status"}
                                            </button>
                                        }
                                    </td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }

                <PaginationControls
                    page={view.page}
                    total_pages={view.total_pages}
                    range={view.range(list.query.page_size)}
                    total={view.filtered_len}
                    on_previous={list.callback(|_: ()| ListAction::PreviousPage)}
                    on_next={list.callback(move |_: ()| ListAction::NextPage {
                        total_pages: view.total_pages,
                    })}
                />
            </>
        }
    });

    let modal = match &*dialog {
        None => html! {},
        Some(Dialog::Review(rider, review)) => {
            let id = rider.id;
            html! {
                <ReviewModal
                    review={*review}
                    entity_label="rider"
                    entity_name={rider.name.clone()}
                    on_confirm={on_review.reform(move |decision: ReviewDecision| (id, decision))}
                    on_close={close}
                    is_loading={mutation.is_loading}
                    error_message={mutation.error.clone().map(AttrValue::from)}
                />
            }
        }
        Some(Dialog::Status(rider)) => {
            let id = rider.id;
            html! {
                <StatusModal
                    title={format!("Change status of {}", rider.name)}
                    current={rider.status.as_str()}
                    options={options::<RiderStatus>()}
                    on_submit={on_status.reform(move |(status, note): (String, String)| {
                        (id, status, note)
                    })}
                    on_close={close}
                    is_loading={mutation.is_loading}
                    error_message={mutation.error.clone().map(AttrValue::from)}
                />
            }
        }
    };

    html! {
        <div>
            <h2 class="text-2xl font-semibold mb-6">{"Riders"}</h2>
            {content}
            {modal}
        </div>
    }
}

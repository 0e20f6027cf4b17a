use dashboard_core::view_model::{
    CITY_FACET, CenterSummary, ListAction, ListView, STATUS_FACET,
};
use payloads::requests::{
    ApprovalStatusUpdate, ListFilter, RejectRequest, StatusUpdate,
};
use payloads::responses::CollectionCenter;
use payloads::{ApprovalStatus, CollectionCenterId};
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
    Review(CollectionCenter, Review),
    Status(CollectionCenter),
}

#[function_component]
pub fn CollectionCentersPage() -> Html {
    use_title("Collection Centers");
    let centers = use_api((), |client| async move {
        client.list_collection_centers(&ListFilter::default()).await
    });
    let list = use_list_query();
    let dialog = use_state(|| None::<Dialog>);
    let mutation = use_api_mutation::<CollectionCenter>();
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
        let refetch = centers.refetch.clone();
        Callback::from(move |outcome: Result<CollectionCenter, String>| {
            if let Ok(center) = outcome {
                toast.success(format!("{} updated", center.name));
                dialog.set(None);
                refetch.emit(());
            }
        })
    };

    let on_review = {
        let mutation = mutation.clone();
        let on_done = on_done.clone();
        Callback::from(
            move |(id, decision): (CollectionCenterId, ReviewDecision)| {
                match decision {
                    ReviewDecision::Approve => mutation.mutate(
                        |client, id: CollectionCenterId| async move {
                            client.approve_collection_center(&id).await
                        },
                        id,
                        on_done.clone(),
                    ),
                    ReviewDecision::Reject(request) => mutation.mutate(
                        |client,
                         (id, request): (CollectionCenterId, RejectRequest)| async move {
                            client.reject_collection_center(&id, &request).await
                        },
                        (id, request),
                        on_done.clone(),
                    ),
                }
            },
        )
    };

    let on_status = {
        let mutation = mutation.clone();
        Callback::from(
            move |(id, status, note): (CollectionCenterId, String, String)| {
                let Ok(status) = status.parse::<ApprovalStatus>() else {
                    return;
                };
                let update = StatusUpdate::new(status).with_note(&note);
                mutation.mutate(
                    |client,
                     (id, update): (CollectionCenterId, ApprovalStatusUpdate)| async move {
                        client.update_collection_center_status(&id, &update).await
                    },
                    (id, update),
                    on_done.clone(),
                );
            },
        )
    };

    let open = |next: Dialog| {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Some(next.clone())))
    };

    let content = centers.render("collection centers", |items, _, error| {
        let view = ListView::build(items, &list.query);
        let summary = CenterSummary::from_centers(items);
        let facets = vec![
            Facet::new(
                STATUS_FACET,
                "statuses",
                options::<ApprovalStatus>(),
                list.query.facet(STATUS_FACET),
            ),
            Facet::new(
                CITY_FACET,
                "cities",
                distinct(items, |c| c.city.as_str()),
                list.query.facet(CITY_FACET),
            ),
        ];

        html! {
            <>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-6">
                    <StatCard label="Total" value={summary.total.to_string()} />
                    <StatCard label="Pending" value={summary.pending.to_string()} />
                    <StatCard label="Approved" value={summary.approved.to_string()} />
                    <StatCard
                        label="Daily capacity"
                        value={summary.daily_capacity.to_string()}
                        detail="samples per day across approved centers"
                    />
                </div>

                if let Some(error) = error {
                    <div class="mb-4">
                        <ErrorPanel
                            message={format!("Showing the last loaded list. Refresh failed: {error}")}
                            on_retry={centers.refetch.clone()}
                        />
                    </div>
                }

                <FilterBar
                    search={list.query.search.clone()}
                    placeholder="Search by name, city or address"
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
                        "No collection centers have registered yet."
                    } else {
                        "No collection centers match these filters."
                    }} />
                } else {
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-neutral-500 border-b \
                                       border-neutral-200 dark:border-neutral-700">
                                <th class="py-2">{"Name"}</th>
                                <th>{"City"}</th>
                                <th>{"Phone"}</th>
                                <th>{"Capacity"}</th>
                                <th>{"Status"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for view.items.iter().map(|center| html! {
                                <tr key={center.id.to_string()}
                                    class="border-b border-neutral-100 dark:border-neutral-800">
                                    <td class="py-2">
                                        <div class="font-medium">{&center.name}</div>
                                        <div class="text-xs text-neutral-500">
                                            {&center.address}
                                        </div>
                                    </td>
                                    <td>{&center.city}</td>
                                    <td>{&center.contact_phone}</td>
                                    <td>{center.daily_capacity}</td>
                                    <td>
                                        <StatusBadge
                                            status={center.status.as_str()}
                                            label={center.status.label()}
                                        />
                                        if let Some(reason) = &center.rejection_reason {
                                            <div class="text-xs text-neutral-500 mt-1">
                                                {reason}
                                            </div>
                                        }
                                    </td>
                                    <td class="text-right space-x-2">
                                        if center.status.is_reviewable() {
                                            <button
                                                onclick={open(Dialog::Review(center.clone(), Review::Approve))}
                                                class="text-green-700 hover:underline"
                                            >
                                                {"Approve"}
                                            </button>
                                            <button
                                                onclick={open(Dialog::Review(center.clone(), Review::Reject))}
                                                class="text-red-700 hover:underline"
                                            >
                                                {"Reject"}
                                            </button>
                                        } else {
                                            <button
                                                onclick={open(Dialog::Status(center.clone()))}
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
        Some(Dialog::Review(center, review)) => {
            let id = center.id;
            html! {
                <ReviewModal
                    review={*review}
                    entity_label="collection center"
                    entity_name={center.name.clone()}
                    on_confirm={on_review.reform(move |decision: ReviewDecision| (id, decision))}
                    on_close={close}
                    is_loading={mutation.is_loading}
                    error_message={mutation.error.clone().map(AttrValue::from)}
                />
            }
        }
        Some(Dialog::Status(center)) => {
            let id = center.id;
            html! {
                <StatusModal
                    title={format!("Change status of {}", center.name)}
                    current={center.status.as_str()}
                    options={options::<ApprovalStatus>()}
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
            <h2 class="text-2xl font-semibold mb-6">{"Collection Centers"}</h2>
            {content}
            {modal}
        </div>
    }
}

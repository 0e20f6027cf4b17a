use dashboard_core::view_model::{
    CITY_FACET, HospitalSummary, ListAction, ListView, STATUS_FACET,
    TYPE_FACET,
};
use payloads::requests::{
    ApprovalStatusUpdate, ListFilter, RejectRequest, StatusUpdate,
};
use payloads::responses::Hospital;
use payloads::{ApprovalStatus, HospitalId, HospitalType};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{
    EmptyState, ErrorPanel, Facet, FilterBar, PaginationControls, Review,
    ReviewDecision, ReviewModal, StatCard, StatusBadge, StatusModal,
};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_api, use_api_mutation, use_list_query, use_title};
use crate::utils::{distinct, options};

#[derive(Clone, PartialEq)]
enum Dialog {
    Review(Hospital, Review),
    Status(Hospital),
}

#[function_component]
pub fn HospitalsPage() -> Html {
    use_title("Hospitals");
    let hospitals = use_api((), |client| async move {
        client.list_hospitals(&ListFilter::default()).await
    });
    let list = use_list_query();
    let dialog = use_state(|| None::<Dialog>);
    let mutation = use_api_mutation::<Hospital>();
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
        let refetch = hospitals.refetch.clone();
        Callback::from(move |outcome: Result<Hospital, String>| {
            if let Ok(hospital) = outcome {
                toast.success(format!("{} updated", hospital.name));
                dialog.set(None);
                refetch.emit(());
            }
        })
    };

    let on_review = {
        let mutation = mutation.clone();
        let on_done = on_done.clone();
        Callback::from(move |(id, decision): (HospitalId, ReviewDecision)| {
            match decision {
                ReviewDecision::Approve => mutation.mutate(
                    |client, id: HospitalId| async move {
                        client.approve_hospital(&id).await
                    },
                    id,
                    on_done.clone(),
                ),
                ReviewDecision::Reject(request) => mutation.mutate(
                    |client, (id, request): (HospitalId, RejectRequest)| async move {
                        client.reject_hospital(&id, &request).await
                    },
                    (id, request),
                    on_done.clone(),
                ),
            }
        })
    };

    let on_status = {
        let mutation = mutation.clone();
        Callback::from(move |(id, status, note): (HospitalId, String, String)| {
            let Ok(status) = status.parse::<ApprovalStatus>() else {
                return;
            };
            let update = StatusUpdate::new(status).with_note(&note);
            mutation.mutate(
                |client, (id, update): (HospitalId, ApprovalStatusUpdate)| async move {
                    client.update_hospital_status(&id, &update).await
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

    let content = hospitals.render("hospitals", |items, _, error| {
        let view = ListView::build(items, &list.query);
        let summary = HospitalSummary::from_hospitals(items);
        let facets = vec![
            Facet::new(
                STATUS_FACET,
                "statuses",
                options::<ApprovalStatus>(),
                list.query.facet(STATUS_FACET),
            ),
            Facet::new(
                TYPE_FACET,
                "types",
                options::<HospitalType>(),
                list.query.facet(TYPE_FACET),
            ),
            Facet::new(
                CITY_FACET,
                "cities",
                distinct(items, |h| h.city.as_str()),
                list.query.facet(CITY_FACET),
            ),
        ];

        html! {
            <>
                <div class="grid grid-cols-2 md:grid-cols-5 gap-4 mb-6">
                    <StatCard label="Total" value={summary.total.to_string()} />
                    <StatCard label="Pending" value={summary.pending.to_string()} />
                    <StatCard label="Approved" value={summary.approved.to_string()} />
                    <StatCard label="Rejected" value={summary.rejected.to_string()} />
                    <StatCard label="Suspended" value={summary.suspended.to_string()} />
                </div>

                if let Some(error) = error {
                    <div class="mb-4">
                        <ErrorPanel
                            message={format!("Showing the last loaded list. Refresh failed: {error}")}
                            on_retry={hospitals.refetch.clone()}
                        />
                    </div>
                }

                <FilterBar
                    search={list.query.search.clone()}
                    placeholder="Search by name, city or email"
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
                        "No hospitals have registered yet."
                    } else {
                        "No hospitals match these filters."
                    }} />
                } else {
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-neutral-500 border-b \
                                       border-neutral-200 dark:border-neutral-700">
                                <th class="py-2">{"Name"}</th>
                                <th>{"Type"}</th>
                                <th>{"City"}</th>
                                <th>{"Orders"}</th>
                                <th>{"Status"}</th>
                                <th class="text-right">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for view.items.iter().map(|hospital| html! {
                                <tr key={hospital.id.to_string()}
                                    class="border-b border-neutral-100 dark:border-neutral-800">
                                    <td class="py-2">
                                        <Link<Route>
                                            to={Route::HospitalDetail { id: hospital.id }}
                                            classes="font-medium hover:underline"
                                        >
                                            {&hospital.name}
                                        </Link<Route>>
                                        <div class="text-xs text-neutral-500">
                                            {&hospital.contact_email}
                                        </div>
                                    </td>
                                    <td>{hospital.hospital_type.label()}</td>
                                    <td>{&hospital.city}</td>
                                    <td>{hospital.total_orders}</td>
                                    <td>
                                        <StatusBadge
                                            status={hospital.status.as_str()}
                                            label={hospital.status.label()}
                                        />
                                    </td>
                                    <td class="text-right space-x-2">
                                        if hospital.status.is_reviewable() {
                                            <button
                                                onclick={open(Dialog::Review(hospital.clone(), Review::Approve))}
                                                class="text-green-700 hover:underline"
                                            >
                                                {"Approve"}
                                            </button>
                                            <button
                                                onclick={open(Dialog::Review(hospital.clone(), Review::Reject))}
                                                class="text-red-700 hover:underline"
                                            >
                                                {"Reject"}
                                            </button>
                                        } else {
                                            <button
                                                onclick={open(Dialog::Status(hospital.clone()))}
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
        Some(Dialog::Review(hospital, review)) => {
            let id = hospital.id;
            html! {
                <ReviewModal
                    review={*review}
                    entity_label="hospital"
                    entity_name={hospital.name.clone()}
                    on_confirm={on_review.reform(move |decision: ReviewDecision| (id, decision))}
                    on_close={close}
                    is_loading={mutation.is_loading}
                    error_message={mutation.error.clone().map(AttrValue::from)}
                />
            }
        }
        Some(Dialog::Status(hospital)) => {
            let id = hospital.id;
            html! {
                <StatusModal
                    title={format!("Change status of {}", hospital.name)}
                    current={hospital.status.as_str()}
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
            <h2 class="text-2xl font-semibold mb-6">{"Hospitals"}</h2>
            {content}
            {modal}
        </div>
    }
}

use dashboard_core::export::hospital_report;
use payloads::HospitalId;
use payloads::requests::{FeatureToggle, OrderQuery};
use payloads::responses::Hospital;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{
    ErrorPanel, ExportButtons, FeatureToggles, StatusBadge,
};
use crate::contexts::toast::use_toast;
use crate::download::{ExportFormat, export_report};
use crate::hooks::{use_api, use_api_mutation, use_title};
use crate::utils::time::{format_timestamp, today};

/// Orders scanned for this hospital's report.
const REPORT_ORDER_LIMIT: u32 = 100;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub hospital_id: HospitalId,
}

#[function_component]
pub fn HospitalDetailPage(props: &Props) -> Html {
    use_title("Hospital");
    let id = props.hospital_id;
    let toast = use_toast();

    let hospital = use_api(id, move |client| async move {
        client.get_hospital(&id).await
    });
    let orders = use_api(id, |client| async move {
        let query = OrderQuery {
            limit: REPORT_ORDER_LIMIT,
            ..OrderQuery::default()
        };
        client.list_orders(&query).await
    });
    let toggle = use_api_mutation::<Hospital>();

    let on_toggle = {
        let toggle = toggle.clone();
        let toast = toast.clone();
        let refetch = hospital.refetch.clone();
        Callback::from(move |(feature, enabled): (String, bool)| {
            let on_done = {
                let toast = toast.clone();
                let refetch = refetch.clone();
                Callback::from(move |outcome: Result<Hospital, String>| {
                    match outcome {
                        Ok(_) => refetch.emit(()),
                        Err(message) => toast.error(message),
                    }
                })
            };
            toggle.mutate(
                move |client, request: FeatureToggle| async move {
                    client.toggle_hospital_feature(&id, &request).await
                },
                FeatureToggle { feature, enabled },
                on_done,
            );
        })
    };

    let report = match (hospital.data.as_ref(), orders.data.as_ref()) {
        (Some(h), Some(page)) => Some(hospital_report(h, &page.orders, today())),
        _ => None,
    };
    let on_export = {
        let report = report.clone();
        Callback::from(move |format: ExportFormat| {
            let Some(report) = &report else {
                return;
            };
            match export_report(report, "hospital-report", format) {
                Ok(filename) => toast.success(format!("Downloaded {filename}")),
                Err(message) => toast.error(message),
            }
        })
    };

    // Retrying reloads the hospital's orders as well.
    let retry = {
        let hospital = hospital.refetch.clone();
        let orders = orders.refetch.clone();
        Callback::from(move |_| {
            hospital.emit(());
            orders.emit(());
        })
    };

    let content = hospital.render("hospital", |hospital, _, error| {
        let rows = [
            ("Type", hospital.hospital_type.label().to_string()),
            ("City", hospital.city.clone()),
            ("Address", hospital.address.clone()),
            ("Email", hospital.contact_email.clone()),
            ("Phone", hospital.contact_phone.clone()),
            ("Total orders", hospital.total_orders.to_string()),
            ("Joined", format_timestamp(hospital.created_at)),
        ];

        html! {
            <div class="space-y-6">
                if let Some(error) = error {
                    <ErrorPanel
                        message={format!("Refresh failed: {error}")}
                        on_retry={retry.clone()}
                    />
                }
                <div class="flex items-center gap-3">
                    <h2 class="text-2xl font-semibold">{&hospital.name}</h2>
                    <StatusBadge
                        status={hospital.status.as_str()}
                        label={hospital.status.label()}
                    />
                </div>
                <dl class="grid grid-cols-1 md:grid-cols-2 gap-x-8 gap-y-2 text-sm">
                    {for rows.iter().map(|(label, value)| html! {
                        <div class="flex justify-between border-b \
                                    border-neutral-100 dark:border-neutral-800 py-1">
                            <dt class="text-neutral-500">{*label}</dt>
                            <dd>{value}</dd>
                        </div>
                    })}
                </dl>
                if let Some(reason) = &hospital.rejection_reason {
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Rejection reason: {reason}")}
                    </p>
                }
                <section>
                    <h3 class="text-lg font-semibold mb-2">{"Features"}</h3>
                    <FeatureToggles
                        features={hospital.features.clone()}
                        on_toggle={on_toggle.clone()}
                        disabled={toggle.is_loading}
                    />
                </section>
            </div>
        }
    });

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <Link<Route> to={Route::Hospitals} classes="text-sm hover:underline">
                    {"← All hospitals"}
                </Link<Route>>
                <ExportButtons {on_export} disabled={report.is_none()} />
            </div>
            {content}
        </div>
    }
}

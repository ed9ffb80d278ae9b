use crate::{
    app_lib::theme::Theme,
    components::{EmptyState, Loading, PageHeader, Pending, use_toasts},
    features::admin::{client, types::UserFilter},
};
use leptos::prelude::*;

/// Representatives who registered and wait for an admin to approve them.
#[component]
pub fn VerifyRepsPage() -> impl IntoView {
    let toasts = use_toasts();
    let in_flight = Pending::default();
    let pending = LocalResource::new(move || async move {
        client::list_users(&UserFilter::pending_representatives())
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch pending representatives"))
            .unwrap_or_default()
    });

    view! {
        <div>
            <PageHeader title="Verify Representatives" />
            <div class=Theme::CARD>
                <Suspense fallback=|| view! { <Loading /> }>
                    {move || Suspend::new(async move {
                        let reps = pending.await;
                        if reps.is_empty() {
                            return view! {
                                <EmptyState icon="how_to_reg" message="No pending representative verifications" />
                            }
                            .into_any();
                        }
                        reps.into_iter()
                            .map(|rep| {
                                let id = StoredValue::new(rep.id.clone());
                                let busy = in_flight.busy(rep.id.clone());
                                let on_verify = move |_| {
                                    toasts.track(
                                        in_flight,
                                        id.get_value(),
                                        async move { client::verify_representative(&id.get_value()).await },
                                        "Representative verified successfully",
                                        "Failed to verify representative",
                                        move || pending.refetch(),
                                    );
                                };
                                view! {
                                    <div class=format!("{} mb-3", Theme::LIST_ITEM_FLAT)>
                                        <div>
                                            <h3 class="font-semibold text-gray-900 dark:text-white">{rep.name}</h3>
                                            <p class="text-sm text-gray-600 dark:text-gray-300">{rep.email}</p>
                                            <p class="text-xs text-gray-500">
                                                {format!("Department: {}", rep.department.unwrap_or_else(|| "-".to_string()))}
                                            </p>
                                        </div>
                                        <button
                                            type="button"
                                            class="inline-flex items-center gap-2 px-4 py-2 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 disabled:opacity-60"
                                            disabled=move || busy.get()
                                            on:click=on_verify
                                        >
                                            <span class=Theme::ICON_SMALL>"check"</span>
                                            "Verify"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    })}
                </Suspense>
            </div>
        </div>
    }
}

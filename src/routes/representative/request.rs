//! A representative asks a lecturer to book a hall for the class.

use crate::{
    app_lib::theme::Theme,
    components::{Button, ErrorBanner, HallSchedule, PageHeader, SelectField, use_toasts},
    features::{
        bookings::types::{BookingForm, availability_for},
        requests::{
            client,
            types::{NewBookingRequest, RequestForm},
        },
    },
    routes::{
        booking_form::{self, BookingFields, HallFilter, HallFilters, hall_choices},
        options, paths,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

#[component]
pub fn RequestBookingPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();
    let lecturer = RwSignal::new(String::new());
    let form = RwSignal::new(BookingForm::default());
    let filter = RwSignal::new(HallFilter::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let halls = booking_form::active_halls(toasts);
    let availability = booking_form::availability(form, filter);
    let lecturers = LocalResource::new(move || async move {
        client::list_lecturers()
            .await
            .inspect_err(|err| toasts.failure(err, "Failed to fetch lecturers"))
            .unwrap_or_default()
    });

    let submit_action = Action::new_local(|request: &NewBookingRequest| {
        let request = request.clone();
        async move { client::create_booking_request(&request).await }
    });

    Effect::new(move |_| {
        let Some(result) = submit_action.value().get() else {
            return;
        };
        match result {
            Ok(_) => {
                toasts.success("Booking request sent successfully");
                navigate(paths::REP_REQUESTS, Default::default());
            }
            Err(err) => {
                toasts.failure(&err, "Failed to send booking request");
                set_error.set(Some(err.user_message("Failed to send booking request")));
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        let request = RequestForm {
            lecturer: lecturer.get_untracked(),
            booking: form.get_untracked(),
        };
        match request.validate() {
            Ok(request) => {
                submit_action.dispatch(request);
            }
            Err(err) => toasts.error(err.to_string()),
        }
    };

    let lecturer_options = Signal::derive(move || options::lecturers(&lecturers.get().unwrap_or_default()));
    let hall_options = Signal::derive(move || {
        let halls = halls.get().unwrap_or_default();
        let availability = availability.get().unwrap_or_default();
        let date_chosen = form.with(|form| !form.date.is_empty());
        filter.with(|filter| hall_choices(&halls, filter, &availability, date_chosen))
    });
    let schedule = Signal::derive(move || {
        let hall = form.with(|form| form.hall.clone());
        availability
            .get()
            .and_then(|list| availability_for(&list, &hall).cloned())
    });
    let show_schedule = move || form.with(|form| !form.date.is_empty() && !form.hall.is_empty());

    view! {
        <div>
            <PageHeader title="Request Hall Booking" subtitle="Ask a lecturer to book a hall for your class." />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-1">
                    <HallFilters form=form filter=filter />
                </div>
                <div class="lg:col-span-2 space-y-6">
                    <form class=Theme::CARD on:submit=on_submit>
                        <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Request Form"</h2>
                        <ErrorBanner error=error />
                        <div class="space-y-4">
                            <SelectField
                                label="Select Lecturer *"
                                id="request-lecturer"
                                placeholder="Choose a lecturer"
                                options=lecturer_options
                                value=lecturer
                                on_change=move |value: String| lecturer.set(value)
                            />
                            <BookingFields form=form halls=hall_options />
                            <Button button_type="submit" full_width=true disabled=submit_action.pending()>
                                {move || if submit_action.pending().get() { "Sending..." } else { "Send Request" }}
                            </Button>
                        </div>
                    </form>
                    <Show when=show_schedule>
                        <HallSchedule date=Signal::derive(move || form.with(|form| form.date.clone())) availability=schedule />
                    </Show>
                </div>
            </div>
        </div>
    }
}

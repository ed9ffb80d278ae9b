use crate::{
    app_lib::theme::Theme,
    components::{Button, ErrorBanner, HallSchedule, PageHeader, use_toasts},
    features::bookings::{
        client,
        types::{BookingForm, NewBooking, availability_for},
    },
    routes::booking_form::{self, BookingFields, HallFilter, HallFilters, hall_choices},
};
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn BookHallPage() -> impl IntoView {
    let toasts = use_toasts();
    let form = RwSignal::new(BookingForm::default());
    let filter = RwSignal::new(HallFilter::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let halls = booking_form::active_halls(toasts);
    let availability = booking_form::availability(form, filter);

    let book_action = Action::new_local(|booking: &NewBooking| {
        let booking = booking.clone();
        async move { client::create_booking(&booking).await }
    });

    Effect::new(move |_| {
        let Some(result) = book_action.value().get() else {
            return;
        };
        match result {
            Ok(_) => {
                toasts.success("Hall booked successfully!");
                form.set(BookingForm::default());
                availability.refetch();
            }
            Err(err) => {
                toasts.failure(&err, "Failed to book hall");
                set_error.set(Some(err.user_message("Failed to book hall")));
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        match form.with_untracked(BookingForm::validate) {
            Ok(booking) => {
                book_action.dispatch(booking);
            }
            Err(err) => toasts.error(err.to_string()),
        }
    };

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
            <PageHeader title="Book a Hall" />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-1">
                    <HallFilters form=form filter=filter />
                </div>
                <div class="lg:col-span-2 space-y-6">
                    <form class=Theme::CARD on:submit=on_submit>
                        <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-4">"Booking Form"</h2>
                        <ErrorBanner error=error />
                        <div class="space-y-4">
                            <BookingFields form=form halls=hall_options />
                            <Button button_type="submit" full_width=true disabled=book_action.pending()>
                                {move || if book_action.pending().get() { "Booking..." } else { "Book Hall" }}
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

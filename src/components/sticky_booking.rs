use gloo_console::error;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Delayed booking nudge. Appears once, five seconds after the page loads,
/// and stays gone for the session once dismissed.
#[function_component(StickyBooking)]
pub fn sticky_booking() -> Html {
    let visible = use_state(|| false);
    let dismissed = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |dismissed: &bool| {
                let timer = (!dismissed).then(|| {
                    Timeout::new(5_000, move || {
                        visible.set(true);
                    })
                });
                move || drop(timer)
            },
            *dismissed,
        );
    }

    let on_dismiss = {
        let visible = visible.clone();
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| {
            visible.set(false);
            dismissed.set(true);
        })
    };

    let on_book = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            let section = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id("booking"));
            match section {
                Some(section) => section.scroll_into_view(),
                None => error!("booking section missing from the page"),
            }
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div class="sticky-booking">
            <button class="sticky-booking-close" onclick={on_dismiss} aria-label="Close booking popup">
                {"✕"}
            </button>
            <h3>{"Limited Time Offer!"}</h3>
            <p>{"Book your free consultation today and receive 15% off your first treatment."}</p>
            <button class="sticky-booking-cta" onclick={on_book}>
                {"Book Your Free Consultation"}
            </button>
            <style>
                {r#"
                    .sticky-booking {
                        position: fixed;
                        bottom: 1.25rem;
                        right: 1.25rem;
                        z-index: 1050;
                        max-width: 20rem;
                        width: calc(100% - 2.5rem);
                        background: #fff;
                        border: 1px solid #F5E9E2;
                        border-radius: 12px;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                        padding: 1.5rem;
                        text-align: center;
                        animation: sticky-pop 0.3s ease-out;
                    }

                    @keyframes sticky-pop {
                        from { opacity: 0; transform: scale(0.9); }
                        to { opacity: 1; transform: scale(1); }
                    }

                    .sticky-booking-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.6rem;
                        background: none;
                        border: none;
                        color: rgba(26, 60, 52, 0.5);
                        font-size: 0.9rem;
                        cursor: pointer;
                        transition: color 0.3s;
                    }

                    .sticky-booking-close:hover {
                        color: #1A3C34;
                    }

                    .sticky-booking h3 {
                        font-family: 'Montserrat', sans-serif;
                        font-weight: 600;
                        color: #1A3C34;
                        margin: 0 0 0.35rem 0;
                    }

                    .sticky-booking p {
                        font-size: 0.875rem;
                        color: rgba(26, 60, 52, 0.7);
                        margin: 0 0 1rem 0;
                    }

                    .sticky-booking-cta {
                        width: 100%;
                        background: #D4AF37;
                        color: #fff;
                        border: none;
                        padding: 0.75rem 1rem;
                        border-radius: 9999px;
                        font-family: 'Montserrat', sans-serif;
                        font-size: 0.95rem;
                        cursor: pointer;
                        transition: all 0.3s;
                    }

                    .sticky-booking-cta:hover {
                        background: #b89630;
                        transform: scale(1.02);
                    }
                "#}
            </style>
        </div>
    }
}

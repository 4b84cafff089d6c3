use yew::prelude::*;

use crate::cycler::CyclerConfig;
use crate::hooks::use_cycler;

/// "N+ appointments booked today" social-proof line. Every mount runs its own
/// counter from 0 to 10 in 3 second steps and then holds, so sections far
/// down the page start counting only once rendered.
#[function_component(AppointmentCounter)]
pub fn appointment_counter() -> Html {
    let counter = use_cycler(CyclerConfig::count_up(10, 3000));

    html! {
        <div class="appointment-counter">
            <span>{counter.value()}{"+"}</span>
            {" appointments booked today"}
            <style>
                {r#"
                    .appointment-counter {
                        text-align: center;
                        color: #1A3C34;
                        font-size: 0.9rem;
                    }

                    .appointment-counter span {
                        font-weight: 700;
                        font-size: 1.3rem;
                    }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;

use crate::components::appointment_counter::AppointmentCounter;
use crate::components::lead_form::LeadForm;
use crate::components::rating::GoogleRating;
use crate::components::services::SERVICE_TITLES;
use crate::config;

const OPENING_HOURS: &[(&str, &str)] = &[
    ("Monday", "Closed"),
    ("Tuesday", "10:00 AM - 6:00 PM"),
    ("Wednesday", "10:00 AM - 6:00 PM"),
    ("Thursday", "10:00 AM - 6:00 PM"),
    ("Friday", "10:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 5:00 PM"),
    ("Sunday", "Closed"),
];

#[function_component(FindUs)]
pub fn find_us() -> Html {
    let tel_href = format!("tel:{}", config::CLINIC_PHONE.replace(' ', ""));

    html! {
        <section id="find-us" class="find-us">
            <div class="find-us-map">
                <iframe
                    src={config::map_embed_url()}
                    title="Cyra Beauty Clinic location"
                    loading="lazy"
                ></iframe>
                <div class="find-us-map-card">
                    <h3>{"Find Us Here"}</h3>
                    <p>{config::CLINIC_ADDRESS}</p>
                    <a
                        class="find-us-directions"
                        href={config::directions_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Get Directions"}
                    </a>
                </div>
            </div>

            <div class="find-us-body">
                <div class="find-us-heading">
                    <h2>{"Visit Cyra Beauty Clinic"}</h2>
                    <p>{"We're here to help you glow. Find our location, contact us, or book your appointment today."}</p>
                </div>

                <div class="find-us-columns">
                    <div class="find-us-details">
                        <div class="find-us-row">
                            <div class="find-us-row-icon">{"📍"}</div>
                            <div>
                                <h3>{"Address"}</h3>
                                <p>{config::CLINIC_ADDRESS}</p>
                            </div>
                        </div>
                        <div class="find-us-row">
                            <div class="find-us-row-icon">{"📞"}</div>
                            <div>
                                <h3>{"Phone"}</h3>
                                <p><a href={tel_href.clone()}>{config::CLINIC_PHONE}</a></p>
                            </div>
                        </div>
                        <div class="find-us-row">
                            <div class="find-us-row-icon">{"🕐"}</div>
                            <div class="find-us-hours">
                                <h3>{"Hours"}</h3>
                                {
                                    OPENING_HOURS.iter().map(|&(day, hours)| html! {
                                        <div class="find-us-hours-row" key={day}>
                                            <span>{day}</span>
                                            <span class={if hours == "Closed" { "closed" } else { "" }}>{hours}</span>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                        <div class="find-us-getting-here">
                            <h3>{"Getting Here"}</h3>
                            <p>{"We're located near Coquitlam Centre. Free parking is available on-site, and public transit options are just a 5-minute walk away."}</p>
                        </div>
                        <GoogleRating />
                    </div>

                    <div class="find-us-form-card">
                        <h3>{"Book Your Visit"}</h3>
                        <LeadForm services={SERVICE_TITLES} />
                        <div class="find-us-counter">
                            <AppointmentCounter />
                        </div>
                    </div>
                </div>
            </div>

            <a class="find-us-call" href={tel_href} aria-label="Call the clinic">
                {"📞"}
            </a>
            <style>
                {r#"
                    .find-us {
                        background: #FFF8F0;
                        position: relative;
                    }

                    .find-us-map {
                        position: relative;
                        height: 60vh;
                    }

                    .find-us-map iframe {
                        width: 100%;
                        height: 100%;
                        border: none;
                    }

                    .find-us-map-card {
                        position: absolute;
                        bottom: 1.5rem;
                        left: 1.5rem;
                        background: rgba(255, 255, 255, 0.95);
                        border-radius: 12px;
                        padding: 1.25rem 1.5rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                        max-width: 20rem;
                    }

                    .find-us-map-card h3 {
                        font-family: 'Montserrat', sans-serif;
                        font-weight: 600;
                        color: #1A3C34;
                        margin: 0 0 0.5rem 0;
                    }

                    .find-us-map-card p {
                        font-size: 0.875rem;
                        color: rgba(26, 60, 52, 0.7);
                        margin: 0 0 1rem 0;
                    }

                    .find-us-directions {
                        display: inline-block;
                        background: #D4AF37;
                        color: #fff;
                        padding: 0.5rem 1.25rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        text-decoration: none;
                        transition: all 0.3s;
                    }

                    .find-us-directions:hover {
                        background: #b89630;
                        transform: scale(1.05);
                    }

                    .find-us-body {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 4rem 1.5rem 5rem;
                    }

                    .find-us-heading {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .find-us-heading h2 {
                        font-family: 'Montserrat', sans-serif;
                        font-size: 2.25rem;
                        font-weight: 600;
                        color: #1A3C34;
                        margin-bottom: 0.75rem;
                    }

                    .find-us-heading p {
                        color: rgba(26, 60, 52, 0.7);
                        max-width: 34rem;
                        margin: 0 auto;
                    }

                    .find-us-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: start;
                    }

                    .find-us-details {
                        display: flex;
                        flex-direction: column;
                        gap: 1.75rem;
                    }

                    .find-us-row {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                    }

                    .find-us-row-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: rgba(212, 175, 55, 0.15);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                    }

                    .find-us-row h3 {
                        font-family: 'Montserrat', sans-serif;
                        font-weight: 600;
                        color: #1A3C34;
                        margin: 0 0 0.35rem 0;
                        font-size: 1.05rem;
                    }

                    .find-us-row p {
                        color: rgba(26, 60, 52, 0.7);
                        margin: 0;
                    }

                    .find-us-row a {
                        color: rgba(26, 60, 52, 0.7);
                        text-decoration: none;
                    }

                    .find-us-row a:hover {
                        color: #D4AF37;
                    }

                    .find-us-hours {
                        flex: 1;
                    }

                    .find-us-hours-row {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.9rem;
                        color: rgba(26, 60, 52, 0.7);
                        padding: 0.2rem 0;
                        max-width: 18rem;
                    }

                    .find-us-hours-row .closed {
                        color: #b05454;
                    }

                    .find-us-getting-here {
                        background: rgba(212, 175, 55, 0.1);
                        border-radius: 12px;
                        padding: 1.25rem;
                    }

                    .find-us-getting-here h3 {
                        font-family: 'Montserrat', sans-serif;
                        font-weight: 600;
                        color: #1A3C34;
                        margin: 0 0 0.5rem 0;
                    }

                    .find-us-getting-here p {
                        font-size: 0.9rem;
                        color: rgba(26, 60, 52, 0.7);
                        margin: 0;
                    }

                    .find-us-form-card {
                        background: #F5E9E2;
                        border-radius: 16px;
                        padding: 2rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                    }

                    .find-us-form-card h3 {
                        font-family: 'Montserrat', sans-serif;
                        font-weight: 600;
                        font-size: 1.5rem;
                        color: #1A3C34;
                        text-align: center;
                        margin: 0 0 1.5rem 0;
                    }

                    .find-us-counter {
                        margin-top: 1.5rem;
                        text-align: center;
                    }

                    .find-us-call {
                        position: fixed;
                        bottom: 1.5rem;
                        left: 1.5rem;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        background: #D4AF37;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                        text-decoration: none;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.25);
                        z-index: 1000;
                        animation: call-bounce 2s infinite;
                    }

                    @keyframes call-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-8px); }
                    }

                    @media (max-width: 900px) {
                        .find-us-columns {
                            grid-template-columns: 1fr;
                        }

                        .find-us-map {
                            height: 50vh;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

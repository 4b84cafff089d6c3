use yew::prelude::*;

use crate::components::rating::stars;
use crate::config;
use crate::cycler::CyclerConfig;
use crate::hooks::use_cycler;

const OFFER_WINDOW_SECS: u32 = 86_400; // 24 hours

const BOOKING_FEATURES: &[(&str, &str, &str)] = &[
    ("📅", "Choose Your Date", "Available 7 days a week"),
    ("🕐", "Select Your Time", "Flexible scheduling"),
    ("✓", "Instant Confirmation", "No waiting for approval"),
    ("🔒", "Secure Booking", "Your data is protected"),
];

/// "23h 59m 57s" style rendering for the offer countdown.
pub fn format_hms(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}

#[function_component(Booking)]
pub fn booking() -> Html {
    let countdown = use_cycler(CyclerConfig::count_down(OFFER_WINDOW_SECS, 1000));
    let toast_visible = use_state(|| false);

    let on_booking_click = {
        let toast_visible = toast_visible.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(config::get_booking_url(), "_blank");
            }
            toast_visible.set(true);
            let toast_visible = toast_visible.clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(4_000).await;
                toast_visible.set(false);
            });
        })
    };

    html! {
        <section id="booking" class="booking">
            <div class="booking-inner">
                <div class="booking-info">
                    <h2>{"Book Your Free Consultation"}</h2>
                    <p class="booking-lead">
                        {"Take the first step towards enhancing your natural beauty. Schedule a free consultation with our experts to discuss your goals and create a personalized treatment plan."}
                    </p>

                    <div class="booking-offer">
                        <p>
                            {"Limited-Time Offer: Book within 24 hours for a 10% discount! Time left: "}
                            <span class="booking-offer-time">{format_hms(countdown.value())}</span>
                        </p>
                    </div>

                    <div class="booking-contacts">
                        <div class="booking-contact">
                            <div class="booking-contact-icon">{"📞"}</div>
                            <div>
                                <h3>{"Call Us Directly"}</h3>
                                <p>{config::CLINIC_PHONE}</p>
                            </div>
                        </div>
                        <div class="booking-contact">
                            <div class="booking-contact-icon">{"✉"}</div>
                            <div>
                                <h3>{"Email Us"}</h3>
                                <p>{config::CLINIC_EMAIL}</p>
                            </div>
                        </div>
                        <div class="booking-contact">
                            <div class="booking-contact-icon">{"📍"}</div>
                            <div>
                                <h3>{"Visit Us"}</h3>
                                <p>{config::CLINIC_ADDRESS}</p>
                            </div>
                        </div>
                    </div>

                    <div class="booking-socials">
                        <a
                            href="https://www.instagram.com/cyrabeautyclinic/"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Instagram"}
                        </a>
                        <a
                            href="https://www.facebook.com/cyrabeautyclinic"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Facebook"}
                        </a>
                    </div>
                </div>

                <div class="booking-card">
                    <div class="booking-card-header">
                        <span class="booking-badge">{"Easy Online Booking"}</span>
                        <h3>{"Schedule Your Appointment"}</h3>
                        <p>{"Book your free consultation in just a few clicks. Our online booking system is available 24/7."}</p>
                    </div>

                    <div class="booking-features">
                        {
                            BOOKING_FEATURES.iter().map(|&(icon, title, sub)| html! {
                                <div class="booking-feature" key={title}>
                                    <div class="booking-feature-icon">{icon}</div>
                                    <div>
                                        <p class="booking-feature-title">{title}</p>
                                        <p class="booking-feature-sub">{sub}</p>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <button class="booking-cta" onclick={on_booking_click}>
                        {"Book Your Free Consultation →"}
                    </button>

                    <p class="booking-trust">{"🔒 Trusted by 1,500+ Clients | Secure Booking"}</p>

                    <div class="booking-mini-review">
                        <div class="booking-mini-review-head">
                            <img src="https://randomuser.me/api/portraits/women/32.jpg" alt="Client" />
                            <div>
                                <p>{"Sarah M."}</p>
                                <div class="booking-mini-review-stars">{stars(5)}</div>
                            </div>
                        </div>
                        <p class="booking-mini-review-text">
                            {"\"Booking was so easy! The consultation was thorough and I felt heard. Highly recommend their services.\""}
                        </p>
                    </div>
                </div>
            </div>

            {
                if *toast_visible {
                    html! {
                        <div class="booking-toast">
                            <p class="booking-toast-title">{"Opening Booking System"}</p>
                            <p>{"You're being redirected to our online booking system."}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .booking {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, #1A3C34, #2A5C54);
                        position: relative;
                        overflow: hidden;
                    }

                    .booking-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .booking-info {
                        color: #fff;
                        animation: fade-in 0.8s ease-out both;
                    }

                    .booking-info h2 {
                        font-family: 'Montserrat', sans-serif;
                        font-size: 2.25rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }

                    .booking-lead {
                        color: rgba(255, 255, 255, 0.8);
                        max-width: 32rem;
                        margin-bottom: 2rem;
                    }

                    .booking-offer {
                        background: rgba(212, 175, 55, 0.2);
                        border-radius: 8px;
                        padding: 1rem;
                        margin-bottom: 2rem;
                    }

                    .booking-offer p {
                        color: #D4AF37;
                        font-size: 0.9rem;
                        margin: 0;
                    }

                    .booking-offer-time {
                        font-weight: 700;
                    }

                    .booking-contacts {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }

                    .booking-contact {
                        display: flex;
                        gap: 0.75rem;
                        align-items: flex-start;
                    }

                    .booking-contact-icon {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        background: rgba(212, 175, 55, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.9rem;
                        flex-shrink: 0;
                    }

                    .booking-contact h3 {
                        font-weight: 500;
                        margin: 0;
                        font-size: 1rem;
                    }

                    .booking-contact p {
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.875rem;
                        margin: 0.15rem 0 0 0;
                    }

                    .booking-socials {
                        display: flex;
                        gap: 1rem;
                    }

                    .booking-socials a {
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        text-decoration: none;
                        transition: all 0.3s;
                    }

                    .booking-socials a:hover {
                        background: rgba(255, 255, 255, 0.2);
                        transform: scale(1.05);
                    }

                    .booking-card {
                        background: #fff;
                        border-radius: 12px;
                        padding: 2rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                        animation: fade-in 0.8s ease-out 0.2s both;
                    }

                    .booking-card-header {
                        text-align: center;
                        margin-bottom: 2rem;
                    }

                    .booking-badge {
                        display: inline-block;
                        background: rgba(212, 175, 55, 0.1);
                        color: #D4AF37;
                        padding: 0.25rem 0.75rem;
                        border-radius: 6px;
                        font-size: 0.85rem;
                        margin-bottom: 1rem;
                    }

                    .booking-card-header h3 {
                        font-family: 'Montserrat', sans-serif;
                        font-weight: 600;
                        font-size: 1.5rem;
                        color: #1A3C34;
                        margin: 0 0 0.75rem 0;
                    }

                    .booking-card-header p {
                        color: rgba(26, 60, 52, 0.7);
                        font-size: 0.95rem;
                        margin: 0;
                    }

                    .booking-features {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }

                    .booking-feature {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem;
                        border-radius: 8px;
                        background: #F5F5F5;
                    }

                    .booking-feature-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: rgba(26, 60, 52, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                    }

                    .booking-feature-title {
                        font-weight: 500;
                        color: #1A3C34;
                        font-size: 0.9rem;
                        margin: 0;
                    }

                    .booking-feature-sub {
                        font-size: 0.75rem;
                        color: rgba(26, 60, 52, 0.6);
                        margin: 0;
                    }

                    .booking-cta {
                        width: 100%;
                        background: #D4AF37;
                        color: #fff;
                        border: none;
                        padding: 1.25rem;
                        border-radius: 12px;
                        font-family: 'Montserrat', sans-serif;
                        font-size: 1.1rem;
                        cursor: pointer;
                        transition: all 0.3s;
                    }

                    .booking-cta:hover {
                        background: #b89630;
                        transform: scale(1.02);
                    }

                    .booking-trust {
                        text-align: center;
                        font-size: 0.75rem;
                        color: rgba(26, 60, 52, 0.6);
                        margin-top: 1.5rem;
                    }

                    .booking-mini-review {
                        margin-top: 2rem;
                        padding: 1rem;
                        background: #F5F5F5;
                        border-radius: 8px;
                    }

                    .booking-mini-review-head {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                    }

                    .booking-mini-review-head img {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        object-fit: cover;
                    }

                    .booking-mini-review-head p {
                        font-weight: 500;
                        color: #1A3C34;
                        margin: 0;
                    }

                    .booking-mini-review-stars .star-row {
                        display: inline-flex;
                        color: #D4AF37;
                    }

                    .booking-mini-review-stars .star-row svg {
                        width: 0.75rem;
                        height: 0.75rem;
                    }

                    .booking-mini-review-text {
                        font-size: 0.875rem;
                        color: rgba(26, 60, 52, 0.7);
                        font-style: italic;
                        margin: 0;
                    }

                    .booking-toast {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        background: #fff;
                        border-left: 4px solid #D4AF37;
                        border-radius: 8px;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                        padding: 1rem 1.5rem;
                        z-index: 1100;
                        animation: fade-in 0.3s ease-out;
                    }

                    .booking-toast-title {
                        font-weight: 600;
                        color: #1A3C34;
                        margin: 0 0 0.25rem 0;
                    }

                    .booking-toast p {
                        color: rgba(26, 60, 52, 0.7);
                        font-size: 0.875rem;
                        margin: 0;
                    }

                    @media (max-width: 900px) {
                        .booking-inner {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_the_full_offer_window() {
        assert_eq!(format_hms(86_400), "24h 0m 0s");
    }

    #[test]
    fn formats_three_seconds_into_the_window() {
        assert_eq!(format_hms(86_397), "23h 59m 57s");
    }

    #[test]
    fn formats_each_unit_boundary() {
        assert_eq!(format_hms(0), "0h 0m 0s");
        assert_eq!(format_hms(59), "0h 0m 59s");
        assert_eq!(format_hms(60), "0h 1m 0s");
        assert_eq!(format_hms(3_600), "1h 0m 0s");
        assert_eq!(format_hms(3_661), "1h 1m 1s");
    }
}

use yew::prelude::*;

use crate::components::appointment_counter::AppointmentCounter;
use crate::components::rating::GoogleRating;
use crate::config;

#[function_component(Banner)]
pub fn banner() -> Html {
    html! {
        <div class="banner-wrap">
            <section class="banner">
                <div class="banner-text">
                    <p class="banner-tagline">{"Coquitlam's Premier Beauty Clinic"}</p>
                    <h1>{"Beauty Begins Here"}</h1>
                    <p class="banner-sub">
                        {"Transform your skin with personalized facials, laser treatments, and more."}
                    </p>
                    <a
                        class="banner-cta"
                        href={config::get_booking_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Book Your Free Consultation"}
                    </a>
                    <div class="banner-counter">
                        <AppointmentCounter />
                    </div>
                </div>
                <div class="banner-image">
                    <img src="/Group-67.png" alt="Cyra Beauty Clinic Team" />
                </div>
            </section>
            <div class="banner-rating">
                <GoogleRating />
            </div>
            <style>
                {r#"
                    .banner {
                        min-height: 90vh;
                        background: #F5E9E2;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .banner-text {
                        width: 50%;
                        padding: 4rem;
                        color: #1A3C34;
                    }

                    .banner-tagline {
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        font-size: 0.85rem;
                        margin-bottom: 1rem;
                        animation: fade-in 0.8s ease-out 0.2s both;
                    }

                    .banner-text h1 {
                        font-family: 'Montserrat', sans-serif;
                        font-size: 4rem;
                        font-weight: 700;
                        line-height: 1.1;
                        margin: 0 0 1.5rem 0;
                        animation: fade-in 0.8s ease-out 0.4s both;
                    }

                    .banner-sub {
                        font-size: 1.2rem;
                        max-width: 28rem;
                        margin-bottom: 1.5rem;
                        animation: fade-in 0.8s ease-out 0.6s both;
                    }

                    .banner-cta {
                        display: inline-block;
                        background: #D4AF37;
                        color: #fff;
                        padding: 0.8rem 1.5rem;
                        border-radius: 9999px;
                        text-decoration: none;
                        font-size: 1.1rem;
                        transition: transform 0.2s;
                        animation: fade-in 0.8s ease-out 0.8s both;
                    }

                    .banner-cta:hover {
                        transform: scale(1.05);
                    }

                    .banner-counter {
                        margin-top: 1.5rem;
                        animation: fade-in 0.8s ease-out 1s both;
                    }

                    .banner-counter .appointment-counter {
                        text-align: left;
                    }

                    .banner-image {
                        width: 50%;
                        height: 100vh;
                    }

                    .banner-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(100%);
                    }

                    .banner-rating {
                        background: #F5E9E2;
                        padding: 1rem 0;
                    }

                    @media (max-width: 768px) {
                        .banner {
                            flex-direction: column;
                            min-height: 80vh;
                        }

                        .banner-text {
                            width: 100%;
                            padding: 2rem 1.5rem;
                            text-align: center;
                        }

                        .banner-tagline {
                            display: none;
                        }

                        .banner-text h1 {
                            font-size: 2.25rem;
                        }

                        .banner-counter .appointment-counter {
                            text-align: center;
                        }

                        .banner-image {
                            width: 100%;
                            height: 45vh;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

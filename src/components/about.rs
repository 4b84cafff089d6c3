use yew::prelude::*;

use crate::components::appointment_counter::AppointmentCounter;
use crate::components::rating::GoogleRating;
use crate::config;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "✦",
        "Advanced Technology",
        "We invest in state-of-the-art equipment to ensure safe, effective, and comfortable treatments.",
    ),
    (
        "👥",
        "Expert Team",
        "Our licensed professionals receive ongoing training to stay at the forefront of aesthetic treatments.",
    ),
    (
        "♥",
        "Personalized Care",
        "We develop customized treatment plans tailored to your unique skin type and concerns.",
    ),
];

const STATS: &[(&str, &str)] = &[
    ("1,500+", "Happy Clients"),
    ("5", "Years Experience"),
    ("3", "Specialized Services"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="about-inner">
                <div class="about-grid">
                    <div class="about-content">
                        <h2>{"The Cyra Beauty Experience"}</h2>
                        <p class="about-lead">
                            {"At Cyra Beauty Clinic, we combine cutting-edge technology with personalized care to deliver exceptional results. Led by Jaspreet Grewal, our CIDESCO-certified team is dedicated to enhancing your natural beauty."}
                        </p>

                        <div class="about-features">
                            {
                                FEATURES.iter().map(|&(icon, title, text)| html! {
                                    <div class="about-feature" key={title}>
                                        <div class="about-feature-icon">{icon}</div>
                                        <div>
                                            <h3>{title}</h3>
                                            <p>{text}</p>
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>

                        <div class="about-stats">
                            {
                                STATS.iter().map(|&(number, label)| html! {
                                    <div class="about-stat" key={label}>
                                        <p class="about-stat-number">{number}</p>
                                        <p class="about-stat-label">{label}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>

                        <div class="about-ctas">
                            <a
                                class="about-cta-gold"
                                href={config::get_booking_url()}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Book Your Free Consultation"}
                            </a>
                            <a class="about-cta-teal" href="#gallery">{"See Our Clinic"}</a>
                        </div>
                    </div>

                    <div class="about-visual">
                        <div class="about-photo">
                            <img src="/G5.jpg" alt="Cyra Beauty Clinic Interior" />
                            <div class="about-photo-overlay">
                                <p>{"Discover Our Space"}</p>
                            </div>
                        </div>
                        <div class="about-quote">
                            <p class="about-quote-text">
                                {"\"We believe in enhancing your natural beauty, not changing who you are.\""}
                            </p>
                            <p class="about-quote-author">{"— Dr. Sepideh Modir, Founder"}</p>
                        </div>
                    </div>
                </div>

                <div class="about-rating">
                    <GoogleRating />
                </div>
                <div class="about-counter">
                    <AppointmentCounter />
                </div>
            </div>
            <style>
                {r#"
                    .about {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, #F5E9E2, #E8D5C4);
                    }

                    .about-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .about-content h2 {
                        font-family: 'Montserrat', sans-serif;
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: #1A3C34;
                        margin-bottom: 1.5rem;
                    }

                    .about-lead {
                        color: rgba(26, 60, 52, 0.8);
                        font-size: 1.05rem;
                        margin-bottom: 2rem;
                    }

                    .about-features {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        margin-bottom: 2.5rem;
                    }

                    .about-feature {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                    }

                    .about-feature-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #1A3C34;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.2rem;
                        flex-shrink: 0;
                        transition: transform 0.3s;
                    }

                    .about-feature:hover .about-feature-icon {
                        transform: scale(1.1);
                    }

                    .about-feature h3 {
                        color: #1A3C34;
                        font-size: 1.15rem;
                        font-weight: 500;
                        margin: 0 0 0.25rem 0;
                        transition: color 0.3s;
                    }

                    .about-feature:hover h3 {
                        color: #D4AF37;
                    }

                    .about-feature p {
                        color: rgba(26, 60, 52, 0.7);
                        font-size: 0.95rem;
                        margin: 0;
                    }

                    .about-stats {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        margin-bottom: 2.5rem;
                    }

                    .about-stat {
                        background: #fff;
                        border-radius: 8px;
                        padding: 1.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }

                    .about-stat-number {
                        font-weight: 700;
                        font-size: 1.8rem;
                        color: #D4AF37;
                        margin: 0;
                    }

                    .about-stat-label {
                        font-size: 0.85rem;
                        color: rgba(26, 60, 52, 0.7);
                        margin: 0;
                    }

                    .about-ctas {
                        display: flex;
                        gap: 1rem;
                    }

                    .about-cta-gold, .about-cta-teal {
                        color: #fff;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        text-decoration: none;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: all 0.2s;
                        text-align: center;
                    }

                    .about-cta-gold {
                        background: #D4AF37;
                    }

                    .about-cta-gold:hover {
                        background: #b89630;
                        transform: scale(1.05);
                    }

                    .about-cta-teal {
                        background: #1A3C34;
                    }

                    .about-cta-teal:hover {
                        background: #2A4C44;
                        transform: scale(1.05);
                    }

                    .about-visual {
                        position: relative;
                    }

                    .about-photo {
                        height: 500px;
                        border-radius: 16px;
                        overflow: hidden;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        position: relative;
                    }

                    .about-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }

                    .about-photo:hover img {
                        transform: scale(1.05);
                    }

                    .about-photo-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(26, 60, 52, 0.5);
                        opacity: 0;
                        transition: opacity 0.5s;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .about-photo:hover .about-photo-overlay {
                        opacity: 1;
                    }

                    .about-photo-overlay p {
                        color: #fff;
                        font-size: 1.1rem;
                        font-weight: 500;
                    }

                    .about-quote {
                        position: absolute;
                        bottom: -1.5rem;
                        right: -1rem;
                        background: #fff;
                        border-radius: 8px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 1.5rem;
                        max-width: 250px;
                    }

                    .about-quote-text {
                        font-style: italic;
                        font-weight: 500;
                        color: #1A3C34;
                        margin: 0;
                    }

                    .about-quote-author {
                        font-size: 0.85rem;
                        color: #D4AF37;
                        font-weight: 500;
                        margin: 0.5rem 0 0 0;
                    }

                    .about-rating {
                        margin-top: 4rem;
                        background: #fff;
                        padding: 1.5rem;
                        border-radius: 8px;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        max-width: 48rem;
                        margin-left: auto;
                        margin-right: auto;
                    }

                    .about-counter {
                        margin-top: 2rem;
                    }

                    @media (max-width: 900px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }

                        .about-visual {
                            margin-top: 2rem;
                        }

                        .about-quote {
                            right: 0;
                        }

                        .about-ctas {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

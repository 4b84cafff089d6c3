use yew::prelude::*;

use crate::components::rating::stars;
use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll_to_services = Callback::from(|_: MouseEvent| {
        if let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("services"))
        {
            element.scroll_into_view();
        }
    });

    html! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-content">
                    <span class="hero-badge">{"Advanced Beauty Treatments"}</span>
                    <h1>
                        {"Reveal Your Natural "}
                        <span class="hero-accent">{"Radiance"}</span>
                    </h1>
                    <p class="hero-sub">
                        {"Experience transformative, non-invasive beauty treatments with cutting-edge technology and personalized care."}
                    </p>

                    <div class="hero-trust">
                        {stars(5)}
                        <span>{"5.0 from 1,500+ happy clients"}</span>
                    </div>

                    <div class="hero-ctas">
                        <a
                            class="hero-cta-primary"
                            href={config::get_booking_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {"Book Free Consultation ›"}
                        </a>
                        <button class="hero-cta-secondary" onclick={scroll_to_services}>
                            {"Explore Services"}
                        </button>
                    </div>

                    <div class="hero-certification">
                        <div class="hero-cert-icon">{"✓"}</div>
                        <div>
                            <p class="hero-cert-title">{"CIDESCO Certified Experts"}</p>
                            <p class="hero-cert-sub">{"Internationally recognized standards of excellence"}</p>
                        </div>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-photo">
                        <img
                            src="https://images.unsplash.com/photo-1570172619644-dfd03ed5d881?q=80&w=1887&auto=format&fit=crop"
                            alt="Beauty treatment at Cyra Beauty Clinic"
                        />
                    </div>
                    <div class="hero-booked-card">
                        <div class="hero-booked-faces">
                            {
                                (1..=3).map(|i| html! {
                                    <img
                                        key={i}
                                        src={format!("https://randomuser.me/api/portraits/women/{}.jpg", i + 20)}
                                        alt={format!("Client {}", i)}
                                    />
                                }).collect::<Html>()
                            }
                        </div>
                        <p>
                            <span>{"This Week"}</span>
                            {"12 people booked"}
                        </p>
                    </div>
                    <div class="hero-offer-badge">{"20% OFF First Visit"}</div>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        background: linear-gradient(135deg, #ffffff, #f8f5f0);
                        overflow: hidden;
                        padding: 3rem 1.5rem;
                    }

                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .hero-badge {
                        display: inline-block;
                        background: rgba(38, 96, 74, 0.1);
                        color: #26604a;
                        padding: 0.35rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        margin-bottom: 0.5rem;
                    }

                    .hero-content h1 {
                        font-family: 'Montserrat', sans-serif;
                        font-size: 3.5rem;
                        font-weight: 700;
                        color: #26604a;
                        line-height: 1.1;
                        margin: 0.5rem 0;
                    }

                    .hero-accent {
                        color: #d4af37;
                    }

                    .hero-sub {
                        font-size: 1.1rem;
                        color: rgba(38, 96, 74, 0.8);
                        font-weight: 300;
                        line-height: 1.6;
                    }

                    .hero-trust {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: rgba(38, 96, 74, 0.7);
                        font-size: 0.9rem;
                        margin: 1.5rem 0;
                    }

                    .hero-trust .star-row {
                        display: inline-flex;
                        color: #d4af37;
                    }

                    .hero-trust .star-row svg {
                        width: 1rem;
                        height: 1rem;
                    }

                    .hero-ctas {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }

                    .hero-cta-primary {
                        background: #26604a;
                        color: #fff;
                        border-radius: 9999px;
                        padding: 0.75rem 2rem;
                        text-decoration: none;
                        font-weight: 500;
                        transition: background 0.2s;
                    }

                    .hero-cta-primary:hover {
                        background: rgba(38, 96, 74, 0.9);
                    }

                    .hero-cta-secondary {
                        background: transparent;
                        border: 1px solid #26604a;
                        color: #26604a;
                        border-radius: 9999px;
                        padding: 0.75rem 2rem;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background 0.2s;
                    }

                    .hero-cta-secondary:hover {
                        background: rgba(38, 96, 74, 0.05);
                    }

                    .hero-certification {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        background: rgba(255, 255, 255, 0.8);
                        border: 1px solid #e9e1d6;
                        border-radius: 12px;
                        padding: 1rem;
                        max-width: 26rem;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.05);
                    }

                    .hero-cert-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #f8f5f0;
                        color: #d4af37;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.4rem;
                        flex-shrink: 0;
                    }

                    .hero-cert-title {
                        font-weight: 500;
                        color: #26604a;
                        margin: 0;
                    }

                    .hero-cert-sub {
                        font-size: 0.85rem;
                        color: rgba(38, 96, 74, 0.6);
                        margin: 0;
                    }

                    .hero-visual {
                        position: relative;
                        display: flex;
                        justify-content: flex-end;
                    }

                    .hero-photo {
                        width: 100%;
                        max-width: 26rem;
                        aspect-ratio: 3 / 4;
                        border-radius: 16px;
                        overflow: hidden;
                        border: 4px solid #fff;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        position: relative;
                        z-index: 1;
                    }

                    .hero-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }

                    .hero-booked-card {
                        position: absolute;
                        bottom: -1.5rem;
                        left: 0;
                        z-index: 2;
                        background: #fff;
                        border-radius: 12px;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                        padding: 0.75rem 1rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }

                    .hero-booked-faces {
                        display: flex;
                    }

                    .hero-booked-faces img {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        border: 2px solid #fff;
                        object-fit: cover;
                        margin-left: -0.5rem;
                    }

                    .hero-booked-faces img:first-child {
                        margin-left: 0;
                    }

                    .hero-booked-card p {
                        font-size: 0.75rem;
                        font-weight: 500;
                        color: #26604a;
                        margin: 0;
                    }

                    .hero-booked-card p span {
                        display: block;
                        color: #d4af37;
                        font-weight: 700;
                    }

                    .hero-offer-badge {
                        position: absolute;
                        top: 1rem;
                        right: -1.5rem;
                        z-index: 2;
                        background: #d4af37;
                        color: #fff;
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                        transform: rotate(12deg);
                        font-size: 0.85rem;
                        font-weight: 700;
                    }

                    @media (max-width: 1024px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                        }

                        .hero-content {
                            text-align: center;
                        }

                        .hero-content h1 {
                            font-size: 2.5rem;
                        }

                        .hero-trust, .hero-ctas {
                            justify-content: center;
                        }

                        .hero-certification {
                            margin: 0 auto;
                        }

                        .hero-visual {
                            justify-content: center;
                            margin-top: 2rem;
                        }

                        .hero-offer-badge {
                            right: 0;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

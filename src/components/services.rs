use yew::prelude::*;

use crate::components::appointment_counter::AppointmentCounter;
use crate::components::lead_form::LeadFormModal;
use crate::components::rating::GoogleRating;
use crate::config;

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: [&'static str; 4],
    pub details: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "laser-hair-removal",
        title: "Laser Hair Removal",
        description: "Achieve smooth, hair-free skin with our advanced 755nm Alexandrite and 1064nm Nd:YAG laser technology. Safe for all skin types.",
        image: "https://images.unsplash.com/photo-1544161515-4ab6ce6db874?q=80&w=2070&auto=format&fit=crop",
        features: ["Permanent reduction", "All skin types", "Fast & effective", "Minimal discomfort"],
        details: "Our laser hair removal treatment uses state-of-the-art technology to target hair follicles, ensuring long-lasting results with minimal discomfort. Suitable for all skin types, this treatment is perfect for those seeking a permanent solution to unwanted hair.",
    },
    Service {
        id: "cyra-facial",
        title: "CYRA Facial",
        description: "Our signature facial combines cutting-edge technology with customized treatments to address your unique skin concerns.",
        image: "https://images.unsplash.com/photo-1570172619644-dfd03ed5d881?q=80&w=1887&auto=format&fit=crop",
        features: ["Custom approach", "Deep cleansing", "Enhanced hydration", "Visible results"],
        details: "The CYRA Facial is a bespoke treatment tailored to your skin's needs. Using advanced techniques, we deeply cleanse, hydrate, and rejuvenate your skin, leaving you with a radiant, youthful glow.",
    },
    Service {
        id: "scars-stretch-marks",
        title: "Scars & Stretch Marks",
        description: "Advanced treatments to reduce the appearance of scars and stretch marks, promoting smoother, more even skin texture.",
        image: "https://images.unsplash.com/photo-1498842812179-c81beecf902c?q=80&w=2066&auto=format&fit=crop",
        features: ["Texture improvement", "Collagen stimulation", "Non-invasive", "Minimal downtime"],
        details: "Our scars and stretch marks treatment uses non-invasive methods to stimulate collagen production, improving skin texture and reducing the visibility of imperfections with minimal downtime.",
    },
];

pub const SERVICE_TITLES: &[&str] = &["Laser Hair Removal", "CYRA Facial", "Scars & Stretch Marks"];

fn feature_grid(features: &[&'static str]) -> Html {
    html! {
        <div class="service-features">
            {
                features.iter().map(|&feature| html! {
                    <div class="service-feature">
                        <span class="service-feature-check">{"✓"}</span>
                        <span>{feature}</span>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let quick_view = use_state(|| None::<usize>);
    let lead_service = use_state(|| None::<&'static str>);

    let close_quick_view = {
        let quick_view = quick_view.clone();
        Callback::from(move |_: MouseEvent| quick_view.set(None))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_lead = {
        let lead_service = lead_service.clone();
        Callback::from(move |_| lead_service.set(None))
    };

    html! {
        <section id="services" class="services">
            <div class="services-inner">
                <div class="services-header">
                    <h2>{"Our Premium Services"}</h2>
                    <p>{"Discover our range of non-invasive, effective treatments designed to enhance your natural beauty."}</p>
                </div>

                <div class="services-grid">
                    {
                        SERVICES.iter().enumerate().map(|(index, service)| {
                            let open_quick_view = {
                                let quick_view = quick_view.clone();
                                Callback::from(move |_: MouseEvent| quick_view.set(Some(index)))
                            };
                            let open_lead = {
                                let lead_service = lead_service.clone();
                                let title = service.title;
                                Callback::from(move |_: MouseEvent| lead_service.set(Some(title)))
                            };
                            html! {
                                <div class="service-card" key={service.id}>
                                    <div class="service-image">
                                        <img src={service.image} alt={service.title} />
                                        <h3>{service.title}</h3>
                                    </div>
                                    <div class="service-body">
                                        <p class="service-description">{service.description}</p>
                                        {feature_grid(&service.features)}
                                        <p class="service-urgency">{"3 slots left this week"}</p>
                                        <button class="service-quick-view" onclick={open_quick_view}>
                                            <span>{"Quick View"}</span>
                                            <span>{"→"}</span>
                                        </button>
                                        <button class="service-book" onclick={open_lead}>
                                            {"Book Now"}
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="services-rating">
                    <GoogleRating />
                </div>
                <div class="services-counter">
                    <AppointmentCounter />
                </div>

                <div class="services-banner">
                    <p>{"Ready to Transform Your Skin? Book Your Appointment Now!"}</p>
                    <a
                        href={config::get_booking_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Book Now"}
                    </a>
                </div>
            </div>

            {
                if let Some(index) = *quick_view {
                    let service = &SERVICES[index];
                    html! {
                        <div class="service-modal-overlay" onclick={close_quick_view.clone()}>
                            <div class="service-modal" onclick={swallow.clone()}>
                                <button class="service-modal-close" onclick={close_quick_view.clone()}>{"✕"}</button>
                                <h2>{service.title}</h2>
                                <img src={service.image} alt={service.title} />
                                <p>{service.details}</p>
                                {feature_grid(&service.features)}
                                <a
                                    class="service-modal-book"
                                    href={config::get_booking_url()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"Book This Service"}
                                </a>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if let Some(service) = *lead_service {
                    html! {
                        <LeadFormModal
                            services={SERVICE_TITLES}
                            preselected={service}
                            on_close={close_lead}
                        />
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .services {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, #F5E9E2, #E8D5C4);
                        position: relative;
                        overflow: hidden;
                    }

                    .services-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .services-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .services-header h2 {
                        font-family: 'Montserrat', sans-serif;
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #1A3C34;
                        margin-bottom: 1rem;
                    }

                    .services-header p {
                        color: rgba(26, 60, 52, 0.8);
                        max-width: 42rem;
                        margin: 0 auto;
                    }

                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    .service-card {
                        background: #fff;
                        border-radius: 8px;
                        overflow: hidden;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.3s;
                    }

                    .service-card:hover {
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                    }

                    .service-image {
                        position: relative;
                        height: 16rem;
                        overflow: hidden;
                    }

                    .service-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }

                    .service-image:hover img {
                        transform: scale(1.1);
                    }

                    .service-image::after {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(26, 60, 52, 0.8), transparent);
                    }

                    .service-image h3 {
                        position: absolute;
                        bottom: 1rem;
                        left: 1rem;
                        right: 1rem;
                        color: #fff;
                        font-size: 1.5rem;
                        font-weight: 500;
                        margin: 0;
                        z-index: 1;
                    }

                    .service-body {
                        padding: 1.5rem;
                    }

                    .service-description {
                        color: rgba(26, 60, 52, 0.8);
                        font-size: 0.95rem;
                        margin-bottom: 1rem;
                    }

                    .service-features {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 0.6rem;
                        margin-bottom: 1.25rem;
                    }

                    .service-feature {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.85rem;
                        color: rgba(26, 60, 52, 0.7);
                    }

                    .service-feature-check {
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 50%;
                        background: #F5E9E2;
                        color: #D4AF37;
                        font-size: 0.7rem;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                    }

                    .service-urgency {
                        color: #ef4444;
                        font-size: 0.85rem;
                        font-weight: 500;
                        margin-bottom: 1rem;
                    }

                    .service-quick-view {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        background: none;
                        border: none;
                        color: #1A3C34;
                        font-size: 0.9rem;
                        padding: 0.5rem;
                        border-radius: 6px;
                        cursor: pointer;
                        transition: all 0.3s;
                        margin-bottom: 0.75rem;
                    }

                    .service-quick-view:hover {
                        color: #D4AF37;
                        background: #F5E9E2;
                    }

                    .service-book {
                        display: block;
                        width: 100%;
                        background: #D4AF37;
                        color: #fff;
                        text-align: center;
                        border: none;
                        padding: 0.6rem 1rem;
                        border-radius: 6px;
                        font-size: 0.9rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: background 0.2s;
                    }

                    .service-book:hover {
                        background: rgba(212, 175, 55, 0.9);
                    }

                    .services-rating {
                        margin-top: 4rem;
                        background: #fff;
                        padding: 1.5rem;
                        border-radius: 8px;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        max-width: 48rem;
                        margin-left: auto;
                        margin-right: auto;
                    }

                    .services-counter {
                        margin-top: 2rem;
                    }

                    .services-banner {
                        margin-top: 3rem;
                        background: #1A3C34;
                        color: #fff;
                        padding: 1.5rem;
                        border-radius: 8px;
                        text-align: center;
                    }

                    .services-banner p {
                        font-weight: 500;
                        margin: 0 0 1rem 0;
                    }

                    .services-banner a {
                        display: inline-block;
                        background: #D4AF37;
                        color: #fff;
                        padding: 0.6rem 1.5rem;
                        border-radius: 6px;
                        font-size: 0.9rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: background 0.2s;
                    }

                    .services-banner a:hover {
                        background: rgba(212, 175, 55, 0.9);
                    }

                    .service-modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 1000;
                        padding: 1rem;
                    }

                    .service-modal {
                        background: #fff;
                        border-radius: 8px;
                        padding: 2rem;
                        max-width: 32rem;
                        width: 100%;
                        position: relative;
                        max-height: 90vh;
                        overflow-y: auto;
                    }

                    .service-modal h2 {
                        color: #1A3C34;
                        margin: 0 0 1rem 0;
                        padding-right: 2rem;
                    }

                    .service-modal img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        border-radius: 8px;
                        margin-bottom: 1rem;
                    }

                    .service-modal p {
                        color: rgba(26, 60, 52, 0.8);
                        margin-bottom: 1rem;
                    }

                    .service-modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #1A3C34;
                        cursor: pointer;
                        padding: 0.25rem;
                        border-radius: 50%;
                        font-size: 1.1rem;
                    }

                    .service-modal-close:hover {
                        background: #f0f0f0;
                    }

                    .service-modal-book {
                        display: block;
                        background: #D4AF37;
                        color: #fff;
                        text-align: center;
                        padding: 0.75rem 1rem;
                        border-radius: 6px;
                        font-weight: 500;
                        text-decoration: none;
                        transition: background 0.2s;
                    }

                    .service-modal-book:hover {
                        background: rgba(212, 175, 55, 0.9);
                    }

                    @media (max-width: 1024px) {
                        .services-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    @media (max-width: 640px) {
                        .services-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

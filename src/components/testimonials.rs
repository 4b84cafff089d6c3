use yew::prelude::*;

use crate::components::lead_form::{LeadFormModal, BOOKABLE_TREATMENTS};
use crate::components::rating::stars;
use crate::config;
use crate::cycler::{CyclerConfig, Direction};
use crate::hooks::use_cycler;

struct Testimonial {
    name: &'static str,
    service: &'static str,
    image: &'static str,
    text: &'static str,
    rating: u32,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        service: "Laser Hair Removal",
        image: "https://randomuser.me/api/portraits/women/32.jpg",
        text: "Dr. Modir is one of the best and most skilled doctors who truly possesses a beautiful and unique range of skills in his field. The laser hair removal was quick and effective.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Chen",
        service: "HydraFacial",
        image: "https://randomuser.me/api/portraits/women/44.jpg",
        text: "I had an amazing experience with the HydraFacial at Dr Modir. My skin felt refreshed and glowing for days afterward.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Rodriguez",
        service: "Scar Treatment",
        image: "https://randomuser.me/api/portraits/men/67.jpg",
        text: "The scar treatment exceeded my expectations! The doctors are so knowledgeable and professional.",
        rating: 5,
    },
    Testimonial {
        name: "Priya Patel",
        service: "Wrinkle Treatment",
        image: "https://randomuser.me/api/portraits/women/91.jpg",
        text: "The wrinkle treatment was fantastic! The team was incredibly knowledgeable and the results were natural-looking.",
        rating: 5,
    },
    Testimonial {
        name: "James Carter",
        service: "PRP Treatment",
        image: "https://randomuser.me/api/portraits/men/23.jpg",
        text: "The PRP treatment was a game-changer for my skin. The staff made me feel at ease, and the results are incredible!",
        rating: 5,
    },
    Testimonial {
        name: "Lisa Nguyen",
        service: "Laser Hair Removal",
        image: "https://randomuser.me/api/portraits/women/58.jpg",
        text: "I'm so impressed with the laser hair removal service! The clinic is spotless, and the team is super professional.",
        rating: 5,
    },
];

/// Testimonial carousel. The rotation pauses while the pointer is anywhere
/// over the section and picks up again on leave; the arrows and dots work
/// either way.
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_cycler(CyclerConfig::looping(TESTIMONIALS.len() as u32, 5000));
    let lead_service = use_state(|| None::<&'static str>);

    let on_mouse_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.pause())
    };
    let on_mouse_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.resume())
    };
    let go_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.step(Direction::Backward))
    };
    let go_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.step(Direction::Forward))
    };
    let close_lead = {
        let lead_service = lead_service.clone();
        Callback::from(move |_| lead_service.set(None))
    };

    let active = carousel.value() as usize;
    let track_style = format!("transform: translateX(-{}%);", active * 100);

    html! {
        <section
            id="testimonials"
            class="testimonials"
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
        >
            <div class="testimonials-inner">
                <div class="testimonials-header">
                    <h2>{"What Our Clients Say"}</h2>
                    <p>{"Real stories from real clients who have experienced our transformative treatments."}</p>
                </div>

                <div class="testimonials-carousel">
                    <button class="testimonials-arrow testimonials-arrow-left" onclick={go_previous}>
                        {"‹"}
                    </button>
                    <button class="testimonials-arrow testimonials-arrow-right" onclick={go_next}>
                        {"›"}
                    </button>

                    <div class="testimonials-viewport">
                        <div class="testimonials-track" style={track_style}>
                            {
                                TESTIMONIALS.iter().map(|testimonial| {
                                    let open_lead = {
                                        let lead_service = lead_service.clone();
                                        let service = testimonial.service;
                                        Callback::from(move |_: MouseEvent| lead_service.set(Some(service)))
                                    };
                                    html! {
                                        <div class="testimonial-slide" key={testimonial.name}>
                                            <div class="testimonial-card">
                                                <span class="testimonial-quote-mark">{"”"}</span>
                                                <span class="testimonial-verified">{"Verified Client"}</span>
                                                <div class="testimonial-layout">
                                                    <img class="testimonial-photo" src={testimonial.image} alt={testimonial.name} />
                                                    <div class="testimonial-content">
                                                        <div class="testimonial-stars">{stars(testimonial.rating)}</div>
                                                        <p class="testimonial-text">{format!("\"{}\"", testimonial.text)}</p>
                                                        <p class="testimonial-name">{testimonial.name}</p>
                                                        <p class="testimonial-service">{testimonial.service}</p>
                                                        <button class="testimonial-book" onclick={open_lead}>
                                                            {"Book This Service"}
                                                        </button>
                                                    </div>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="testimonials-dots">
                        {
                            (0..TESTIMONIALS.len()).map(|index| {
                                let jump = {
                                    let carousel = carousel.clone();
                                    Callback::from(move |_: MouseEvent| carousel.jump(index as u32))
                                };
                                let class = if index == active {
                                    "testimonials-dot active"
                                } else {
                                    "testimonials-dot"
                                };
                                html! {
                                    <button key={index} class={class} onclick={jump} />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="testimonials-reviews-link">
                    <a href={config::get_reviews_url()} target="_blank" rel="noopener noreferrer">
                        {"See All Reviews on Google"}
                    </a>
                </div>
            </div>

            {
                if let Some(service) = *lead_service {
                    html! {
                        <LeadFormModal
                            services={BOOKABLE_TREATMENTS}
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
                    .testimonials {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(135deg, #F5E9E2, #E8D5C4);
                        overflow: hidden;
                    }

                    .testimonials-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .testimonials-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .testimonials-header h2 {
                        font-family: 'Montserrat', sans-serif;
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #1A3C34;
                        margin-bottom: 1rem;
                    }

                    .testimonials-header p {
                        color: rgba(26, 60, 52, 0.7);
                        max-width: 42rem;
                        margin: 0 auto;
                    }

                    .testimonials-carousel {
                        position: relative;
                        max-width: 64rem;
                        margin: 0 auto;
                    }

                    .testimonials-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        background: #1A3C34;
                        color: #fff;
                        border: none;
                        border-radius: 50%;
                        width: 2.75rem;
                        height: 2.75rem;
                        font-size: 1.5rem;
                        line-height: 1;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: background 0.3s;
                        z-index: 2;
                    }

                    .testimonials-arrow:hover {
                        background: #D4AF37;
                    }

                    .testimonials-arrow-left {
                        left: -3rem;
                    }

                    .testimonials-arrow-right {
                        right: -3rem;
                    }

                    .testimonials-viewport {
                        overflow: hidden;
                    }

                    .testimonials-track {
                        display: flex;
                        transition: transform 0.5s ease-in-out;
                    }

                    .testimonial-slide {
                        min-width: 100%;
                        padding: 0 1rem;
                        box-sizing: border-box;
                    }

                    .testimonial-card {
                        background: #fff;
                        border-radius: 16px;
                        padding: 2.5rem;
                        position: relative;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }

                    .testimonial-quote-mark {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        font-size: 3rem;
                        color: #D4AF37;
                        opacity: 0.2;
                        line-height: 1;
                    }

                    .testimonial-verified {
                        position: absolute;
                        top: 1rem;
                        left: 1rem;
                        background: #D4AF37;
                        color: #fff;
                        font-size: 0.7rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                    }

                    .testimonial-layout {
                        display: flex;
                        gap: 1.5rem;
                        align-items: flex-start;
                        padding-top: 1rem;
                    }

                    .testimonial-photo {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 50%;
                        object-fit: cover;
                        flex-shrink: 0;
                    }

                    .testimonial-stars .star-row {
                        display: inline-flex;
                        color: #D4AF37;
                        margin-bottom: 0.75rem;
                    }

                    .testimonial-stars .star-row svg {
                        width: 1rem;
                        height: 1rem;
                    }

                    .testimonial-text {
                        color: #1A3C34;
                        font-size: 1.05rem;
                        margin: 0 0 1rem 0;
                    }

                    .testimonial-name {
                        font-weight: 500;
                        color: #1A3C34;
                        font-size: 1.05rem;
                        margin: 0;
                    }

                    .testimonial-service {
                        font-size: 0.85rem;
                        color: rgba(26, 60, 52, 0.7);
                        margin: 0 0 1rem 0;
                    }

                    .testimonial-book {
                        background: #1A3C34;
                        color: #fff;
                        border: none;
                        font-size: 0.85rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        cursor: pointer;
                        transition: background 0.2s;
                    }

                    .testimonial-book:hover {
                        background: rgba(26, 60, 52, 0.9);
                    }

                    .testimonials-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 2rem;
                    }

                    .testimonials-dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                        border: none;
                        background: #F5E9E2;
                        cursor: pointer;
                        padding: 0;
                        transition: background 0.3s;
                    }

                    .testimonials-dot.active {
                        background: #D4AF37;
                    }

                    .testimonials-reviews-link {
                        text-align: center;
                        margin-top: 3rem;
                    }

                    .testimonials-reviews-link a {
                        color: #1A3C34;
                        text-decoration: none;
                        transition: color 0.3s;
                    }

                    .testimonials-reviews-link a:hover {
                        color: #D4AF37;
                    }

                    @media (max-width: 900px) {
                        .testimonials-arrow-left {
                            left: -0.5rem;
                        }

                        .testimonials-arrow-right {
                            right: -0.5rem;
                        }

                        .testimonial-layout {
                            flex-direction: column;
                            align-items: center;
                            text-align: center;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

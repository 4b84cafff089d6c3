use yew::prelude::*;

use crate::components::appointment_counter::AppointmentCounter;
use crate::components::rating::GoogleRating;
use crate::config;

const CLINIC_IMAGES: &[(&str, &str, &str)] = &[
    ("/G1.jpg", "Clinic Interior", "Our Welcoming Reception Area"),
    ("/G2.jpg", "Treatment Room", "Relax in Our Modern Treatment Rooms"),
    ("/G3.jpg", "Team at Work", "Our Expert Team in Action"),
    ("/G4.jpg", "Equipment", "State-of-the-Art Technology"),
];

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_state(|| None::<&'static str>);

    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.set(None))
    };

    html! {
        <section id="gallery" class="gallery">
            <div class="gallery-inner">
                <h2>{"Explore Cyra Beauty Clinic"}</h2>
                <p class="gallery-sub">
                    {"Step inside our clinic and see the spaces where beauty transformations happen."}
                </p>

                <div class="gallery-grid">
                    {
                        CLINIC_IMAGES.iter().map(|&(src, alt, caption)| {
                            let open = {
                                let lightbox = lightbox.clone();
                                Callback::from(move |_: MouseEvent| lightbox.set(Some(src)))
                            };
                            html! {
                                <div class="gallery-item" key={src} onclick={open}>
                                    <img src={src} alt={alt} />
                                    <div class="gallery-caption">
                                        <p>{caption}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div class="gallery-rating">
                    <GoogleRating />
                </div>
                <div class="gallery-counter">
                    <AppointmentCounter />
                </div>

                <div class="gallery-cta">
                    <a
                        href={config::get_booking_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Book Your Visit"}
                    </a>
                </div>
            </div>

            {
                if let Some(src) = *lightbox {
                    html! {
                        <div class="gallery-lightbox" onclick={close_lightbox.clone()}>
                            <div class="gallery-lightbox-frame">
                                <img src={src} alt="Selected Clinic Image" />
                                <button onclick={close_lightbox}>{"✕"}</button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .gallery {
                        padding: 5rem 1.5rem;
                        background: #F5E9E2;
                    }

                    .gallery-inner {
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .gallery h2 {
                        font-family: 'Montserrat', sans-serif;
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: #1A3C34;
                        text-align: center;
                        margin-bottom: 1rem;
                    }

                    .gallery-sub {
                        color: rgba(26, 60, 52, 0.8);
                        text-align: center;
                        max-width: 48rem;
                        margin: 0 auto 3rem auto;
                    }

                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }

                    .gallery-item {
                        position: relative;
                        border-radius: 8px;
                        overflow: hidden;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        cursor: pointer;
                    }

                    .gallery-item img {
                        width: 100%;
                        height: 16rem;
                        object-fit: cover;
                        transition: transform 0.5s;
                        display: block;
                    }

                    .gallery-item:hover img {
                        transform: scale(1.05);
                    }

                    .gallery-caption {
                        position: absolute;
                        inset: 0;
                        background: rgba(26, 60, 52, 0.5);
                        opacity: 0;
                        transition: opacity 0.5s;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .gallery-item:hover .gallery-caption {
                        opacity: 1;
                    }

                    .gallery-caption p {
                        color: #fff;
                        text-align: center;
                        padding: 0 1rem;
                    }

                    .gallery-rating {
                        margin-top: 4rem;
                        background: #fff;
                        padding: 1.5rem;
                        border-radius: 8px;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        max-width: 48rem;
                        margin-left: auto;
                        margin-right: auto;
                    }

                    .gallery-counter {
                        margin-top: 2rem;
                    }

                    .gallery-cta {
                        text-align: center;
                        margin-top: 3rem;
                    }

                    .gallery-cta a {
                        display: inline-block;
                        background: #D4AF37;
                        color: #fff;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.05rem;
                        font-weight: 500;
                        text-decoration: none;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: all 0.2s;
                    }

                    .gallery-cta a:hover {
                        background: #b89630;
                        transform: scale(1.05);
                    }

                    .gallery-lightbox {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.9);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 1000;
                        padding: 1rem;
                    }

                    .gallery-lightbox-frame {
                        position: relative;
                        max-width: 56rem;
                        width: 100%;
                    }

                    .gallery-lightbox-frame img {
                        width: 100%;
                        height: auto;
                        border-radius: 8px;
                    }

                    .gallery-lightbox-frame button {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        color: #fff;
                        background: rgba(0, 0, 0, 0.5);
                        border: none;
                        border-radius: 50%;
                        width: 2rem;
                        height: 2rem;
                        cursor: pointer;
                        transition: background 0.2s;
                    }

                    .gallery-lightbox-frame button:hover {
                        background: rgba(0, 0, 0, 0.7);
                    }

                    @media (max-width: 1024px) {
                        .gallery-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    @media (max-width: 640px) {
                        .gallery-grid {
                            grid-template-columns: 1fr;
                        }

                        .gallery h2 {
                            font-size: 1.9rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

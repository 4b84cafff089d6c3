use yew::prelude::*;

use crate::config;
use crate::cycler::CyclerConfig;
use crate::hooks::use_cycler;

const LEFT_WORDS: &[&str] = &["Glow", "Radiance", "Beauty", "Elegance", "Serenity"];
const RIGHT_WORDS: &[&str] = &["Transform", "Confidence", "Skin", "Wellness", "Luxury"];

/// Tagline strip with two word carousels flanking the headline. Each side
/// rotates on its own schedule, so a re-render of one never disturbs the
/// other.
#[function_component(Tagline)]
pub fn tagline() -> Html {
    let left = use_cycler(CyclerConfig::looping(LEFT_WORDS.len() as u32, 2500));
    let right = use_cycler(CyclerConfig::looping(RIGHT_WORDS.len() as u32, 2500));

    let left_word = LEFT_WORDS[left.value() as usize];
    let right_word = RIGHT_WORDS[right.value() as usize];

    html! {
        <section class="tagline">
            <div class="tagline-words">
                <span class="tagline-word" key={left_word}>{left_word}</span>
                <span class="tagline-word" key={right_word}>{right_word}</span>
            </div>
            <h2>{"Transform Your Beauty Journey"}</h2>
            <p>{"Experience world-class beauty treatments that transform your skin and confidence."}</p>
            <a
                class="tagline-cta"
                href={config::get_booking_url()}
                target="_blank"
                rel="noopener noreferrer"
            >
                {"Book Your Appointment"}
            </a>
            <style>
                {r#"
                    .tagline {
                        background: linear-gradient(135deg, #FFF8F0, #FFECD6);
                        padding: 4rem 1.5rem;
                        text-align: center;
                    }

                    .tagline-words {
                        display: flex;
                        justify-content: space-around;
                        max-width: 60rem;
                        margin: 0 auto 1.5rem auto;
                    }

                    .tagline-word {
                        font-family: 'Lora', serif;
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #2C5F5B;
                        animation: tagline-morph 0.6s ease-out;
                    }

                    .tagline h2 {
                        font-family: 'Lora', serif;
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #2C5F5B;
                        margin: 0;
                    }

                    .tagline p {
                        color: #7D7D7D;
                        max-width: 32rem;
                        margin: 1.25rem auto;
                    }

                    .tagline-cta {
                        display: inline-block;
                        background: #2C5F5B;
                        color: #fff;
                        font-weight: 600;
                        padding: 0.9rem 2rem;
                        border-radius: 9999px;
                        text-decoration: none;
                        transition: all 0.3s;
                        margin-top: 0.5rem;
                    }

                    .tagline-cta:hover {
                        background: #C9AD7F;
                        transform: scale(1.05);
                    }

                    @keyframes tagline-morph {
                        from { opacity: 0; filter: blur(4px); }
                        to { opacity: 1; filter: blur(0); }
                    }

                    @media (max-width: 768px) {
                        .tagline-words {
                            display: none;
                        }

                        .tagline h2 {
                            font-size: 1.75rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

use yew::prelude::*;

use crate::config;

/// A row of `count` filled stars, colored by the surrounding `color` CSS.
pub fn stars(count: u32) -> Html {
    html! {
        <span class="star-row">
            {
                (0..count).map(|i| html! {
                    <svg key={i} viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg">
                        <path d="M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z" />
                    </svg>
                }).collect::<Html>()
            }
        </span>
    }
}

/// The Google rating strip that several sections repeat.
#[function_component(GoogleRating)]
pub fn google_rating() -> Html {
    html! {
        <a class="google-rating" href={config::get_reviews_url()} target="_blank" rel="noopener noreferrer">
            <img
                src="https://upload.wikimedia.org/wikipedia/commons/2/2f/Google_2015_logo.svg"
                alt="Google Logo"
            />
            {stars(5)}
            <p>{"We're rated 5/5 (97 reviews)"}</p>
            <style>
                {r#"
                    .google-rating {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        text-decoration: none;
                        color: #1A3C34;
                    }

                    .google-rating img {
                        height: 1.5rem;
                    }

                    .google-rating .star-row {
                        display: inline-flex;
                        gap: 0.15rem;
                        color: #FBBF24;
                    }

                    .google-rating .star-row svg {
                        width: 1rem;
                        height: 1rem;
                    }

                    .google-rating p {
                        margin: 0;
                        font-size: 0.85rem;
                    }
                "#}
            </style>
        </a>
    }
}

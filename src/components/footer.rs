use chrono::Datelike;
use yew::prelude::*;

use crate::components::services::SERVICE_TITLES;
use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span class="footer-logo-main">{"CYRA"}</span>
                            <span class="footer-logo-accent">{"Beauty"}</span>
                        </div>
                        <p class="footer-blurb">
                            {"Enhancing your natural beauty with advanced non-invasive treatments and personalized care."}
                        </p>
                        <div class="footer-socials">
                            <a
                                href="https://www.instagram.com/cyrabeautyclinic/"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="Instagram"
                            >
                                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <rect x="2" y="2" width="20" height="20" rx="5" ry="5"></rect>
                                    <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
                                    <line x1="17.5" y1="6.5" x2="17.51" y2="6.5"></line>
                                </svg>
                            </a>
                            <a
                                href="https://www.facebook.com/cyrabeautyclinic"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="Facebook"
                            >
                                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path>
                                </svg>
                            </a>
                            <a href={format!("mailto:{}", config::CLINIC_EMAIL)} aria-label="Email">
                                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path>
                                    <polyline points="22,6 12,13 2,6"></polyline>
                                </svg>
                            </a>
                        </div>
                    </div>

                    <div>
                        <h3 class="footer-heading">{"Our Services"}</h3>
                        <ul class="footer-links">
                            {
                                SERVICE_TITLES.iter().map(|&title| html! {
                                    <li key={title}><a href="#services">{title}</a></li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>

                    <div>
                        <h3 class="footer-heading">{"Contact Us"}</h3>
                        <ul class="footer-contacts">
                            <li>
                                <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"></path>
                                    <circle cx="12" cy="10" r="3"></circle>
                                </svg>
                                <span>{config::CLINIC_ADDRESS}</span>
                            </li>
                            <li>
                                <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"></path>
                                </svg>
                                <span>{config::CLINIC_PHONE}</span>
                            </li>
                            <li>
                                <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path>
                                    <polyline points="22,6 12,13 2,6"></polyline>
                                </svg>
                                <span>{config::CLINIC_EMAIL}</span>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, config::CLINIC_NAME)}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .footer {
                        background: #F5E9E2;
                        padding: 3rem 1.5rem 2rem;
                    }

                    .footer-inner {
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1.5fr 1fr 1fr;
                        gap: 2.5rem;
                    }

                    .footer-logo {
                        margin-bottom: 1rem;
                    }

                    .footer-logo-main {
                        font-family: 'Montserrat', sans-serif;
                        font-weight: 700;
                        font-size: 1.5rem;
                        color: #1A3C34;
                    }

                    .footer-logo-accent {
                        font-family: 'Lora', serif;
                        font-style: italic;
                        color: #D4AF37;
                        margin-left: 0.25rem;
                    }

                    .footer-blurb {
                        color: rgba(26, 60, 52, 0.7);
                        max-width: 20rem;
                        margin-bottom: 1.5rem;
                        font-size: 0.95rem;
                    }

                    .footer-socials {
                        display: flex;
                        gap: 1rem;
                    }

                    .footer-socials a {
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 50%;
                        background: rgba(26, 60, 52, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #1A3C34;
                        transition: background 0.3s;
                    }

                    .footer-socials a:hover {
                        background: rgba(26, 60, 52, 0.2);
                    }

                    .footer-heading {
                        font-family: 'Montserrat', sans-serif;
                        font-weight: 600;
                        color: #1A3C34;
                        margin: 0 0 1rem 0;
                        font-size: 1.05rem;
                    }

                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .footer-links a {
                        color: rgba(26, 60, 52, 0.7);
                        text-decoration: none;
                        transition: color 0.3s;
                    }

                    .footer-links a:hover {
                        color: #D4AF37;
                    }

                    .footer-contacts {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        color: rgba(26, 60, 52, 0.7);
                        font-size: 0.9rem;
                    }

                    .footer-contacts li {
                        display: flex;
                        gap: 0.75rem;
                        align-items: flex-start;
                    }

                    .footer-contacts svg {
                        color: #D4AF37;
                        flex-shrink: 0;
                        margin-top: 0.15rem;
                    }

                    .footer-bottom {
                        border-top: 1px solid rgba(26, 60, 52, 0.1);
                        margin-top: 2.5rem;
                        padding-top: 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        color: rgba(26, 60, 52, 0.6);
                        font-size: 0.85rem;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }

                    .footer-legal {
                        display: flex;
                        gap: 1rem;
                    }

                    .footer-legal a {
                        color: rgba(26, 60, 52, 0.6);
                        text-decoration: none;
                        transition: color 0.3s;
                    }

                    .footer-legal a:hover {
                        color: #1A3C34;
                    }

                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

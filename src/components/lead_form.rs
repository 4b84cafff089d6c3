use log::info;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Names a visitor can pick in the booking form. The treatment list is wider
/// than the three headline services because past clients book follow-ups too.
pub const BOOKABLE_TREATMENTS: &[&str] = &[
    "Laser Hair Removal",
    "HydraFacial",
    "Wrinkle Treatment",
    "PRP Treatment",
    "Scar Treatment",
];

#[derive(Serialize)]
struct LeadSubmission {
    name: String,
    email: String,
    phone: String,
    service: String,
}

impl LeadSubmission {
    // Service values come from the caller's list, so only the placeholder
    // option submits an empty service.
    fn missing_fields(&self) -> bool {
        self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
            || self.service.is_empty()
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub services: &'static [&'static str],
    #[prop_or_default]
    pub preselected: Option<AttrValue>,
    #[prop_or_default]
    pub on_submitted: Option<Callback<()>>,
}

/// Lead capture form. There is no backend for this site; a submission is
/// validated, logged to the console and cleared.
#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let service = use_state(|| {
        props
            .preselected
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_default()
    });
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let select_ref = use_node_ref();

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let service = service.clone();
        let error_setter = error.clone();
        let success_setter = success.clone();
        let select_ref = select_ref.clone();
        let on_submitted = props.on_submitted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = LeadSubmission {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                service: (*service).clone(),
            };

            if submission.missing_fields() {
                error_setter.set(Some(
                    "Please fill in every field and pick a service.".to_string(),
                ));
                return;
            }

            if let Ok(json) = serde_json::to_string(&submission) {
                info!("new consultation lead: {}", json);
            }

            name.set(String::new());
            email.set(String::new());
            phone.set(String::new());
            service.set(String::new());
            // The select is uncontrolled: clearing the state alone leaves
            // the old choice on screen.
            if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                select.set_value("");
            }
            error_setter.set(None);
            success_setter.set(Some(
                "Thank you! We'll reach out to confirm your visit.".to_string(),
            ));
            if let Some(on_submitted) = on_submitted.as_ref() {
                on_submitted.emit(());
            }
        })
    };

    let preselected = props.preselected.as_deref().unwrap_or("");

    html! {
        <form class="lead-form" onsubmit={onsubmit}>
            {
                if let Some(error_message) = (*error).as_ref() {
                    html! { <div class="lead-form-error">{error_message}</div> }
                } else if let Some(success_message) = (*success).as_ref() {
                    html! { <div class="lead-form-success">{success_message}</div> }
                } else {
                    html! {}
                }
            }
            <div class="lead-form-grid">
                <input
                    type="text"
                    placeholder="Name"
                    required={true}
                    value={(*name).clone()}
                    onchange={let name = name.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        name.set(input.value());
                    }}
                />
                <input
                    type="email"
                    placeholder="Email"
                    required={true}
                    value={(*email).clone()}
                    onchange={let email = email.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
                <input
                    type="tel"
                    placeholder="Phone"
                    required={true}
                    value={(*phone).clone()}
                    onchange={let phone = phone.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        phone.set(input.value());
                    }}
                />
                <select
                    ref={select_ref}
                    required={true}
                    onchange={let service = service.clone(); move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        service.set(select.value());
                    }}
                >
                    <option value="" selected={preselected.is_empty()}>{"Select a Service"}</option>
                    {
                        props.services.iter().map(|&option| html! {
                            <option value={option} selected={option == preselected}>{option}</option>
                        }).collect::<Html>()
                    }
                </select>
            </div>
            <button type="submit" class="lead-form-submit">{"Book Appointment"}</button>
            <style>
                {r#"
                    .lead-form-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        margin-bottom: 1rem;
                    }

                    .lead-form input,
                    .lead-form select {
                        width: 100%;
                        padding: 0.75rem;
                        border: 1px solid #1A3C34;
                        border-radius: 8px;
                        background: #fff;
                        font-family: inherit;
                        font-size: 0.95rem;
                        color: #1A3C34;
                        box-sizing: border-box;
                    }

                    .lead-form input:focus,
                    .lead-form select:focus {
                        outline: none;
                        box-shadow: 0 0 0 2px #D4AF37;
                    }

                    .lead-form-submit {
                        width: 100%;
                        background: #D4AF37;
                        color: #fff;
                        border: none;
                        padding: 0.85rem;
                        border-radius: 8px;
                        font-size: 1.05rem;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.2s;
                    }

                    .lead-form-submit:hover {
                        background: #b89630;
                        transform: scale(1.02);
                    }

                    .lead-form-error {
                        color: #c0392b;
                        margin-bottom: 0.75rem;
                        font-size: 0.9rem;
                    }

                    .lead-form-success {
                        color: #1A3C34;
                        background: rgba(212, 175, 55, 0.15);
                        border-radius: 6px;
                        padding: 0.5rem 0.75rem;
                        margin-bottom: 0.75rem;
                        font-size: 0.9rem;
                    }

                    @media (max-width: 640px) {
                        .lead-form-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct LeadFormModalProps {
    pub services: &'static [&'static str],
    #[prop_or_default]
    pub preselected: Option<AttrValue>,
    pub on_close: Callback<()>,
}

#[function_component(LeadFormModal)]
pub fn lead_form_modal(props: &LeadFormModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the card must not fall through to the overlay.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_submitted = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="lead-modal-overlay" onclick={close.clone()}>
            <div class="lead-modal-card" onclick={swallow}>
                <button class="lead-modal-close" onclick={close}>{"✕"}</button>
                <h2>{"Book Your Appointment"}</h2>
                <LeadForm
                    services={props.services}
                    preselected={props.preselected.clone()}
                    on_submitted={on_submitted}
                />
            </div>
            <style>
                {r#"
                    .lead-modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 1000;
                        padding: 1rem;
                    }

                    .lead-modal-card {
                        background: #fff;
                        border-radius: 12px;
                        padding: 2rem;
                        max-width: 28rem;
                        width: 100%;
                        position: relative;
                        animation: lead-modal-in 0.25s ease-out;
                    }

                    .lead-modal-card h2 {
                        font-family: 'Montserrat', sans-serif;
                        color: #1A3C34;
                        margin: 0 0 1rem 0;
                        padding-right: 2rem;
                    }

                    .lead-modal-close {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        color: #1A3C34;
                        font-size: 1.25rem;
                        cursor: pointer;
                        padding: 0.25rem;
                        border-radius: 50%;
                    }

                    .lead-modal-close:hover {
                        background: #f0f0f0;
                    }

                    @keyframes lead-modal-in {
                        from { opacity: 0; transform: translateY(12px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadSubmission {
        LeadSubmission {
            name: "Ava Chen".to_string(),
            email: "ava@example.com".to_string(),
            phone: "604-555-0101".to_string(),
            service: "HydraFacial".to_string(),
        }
    }

    #[test]
    fn a_filled_submission_passes_the_field_check() {
        assert!(!filled().missing_fields());
    }

    #[test]
    fn a_cleared_service_blocks_resubmission() {
        // Submitting resets the service to the placeholder's empty value,
        // in the state and in the select element alike, so the next submit
        // has to pick a service again.
        let cleared = LeadSubmission {
            service: String::new(),
            ..filled()
        };
        assert!(cleared.missing_fields());
    }

    #[test]
    fn whitespace_only_contact_fields_do_not_count() {
        let blank = LeadSubmission {
            name: "   ".to_string(),
            ..filled()
        };
        assert!(blank.missing_fields());
    }

    #[test]
    fn no_treatment_shares_the_placeholder_value() {
        // set_value("") may only ever land on the placeholder option.
        assert!(BOOKABLE_TREATMENTS.iter().all(|t| !t.is_empty()));
    }
}

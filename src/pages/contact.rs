use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::cms::queries::get_contact_info;
use crate::cms::types::ContactInfoData;
use crate::config;

const TOAST_MS: u32 = 4_000;

/// The POST body for the forms processor. `website` is the honeypot: hidden
/// from humans, so anything in it marks the submission for server-side spam
/// filtering. It ships with the payload either way.
#[derive(Serialize, Clone, PartialEq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub website: String,
}

/// Basic shape check, not RFC validation. The forms processor validates again
/// server-side.
fn looks_like_email(value: &str) -> bool {
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

fn validate(message: &ContactMessage) -> Option<&'static str> {
    if message.name.trim().is_empty() {
        return Some("Please enter your name.");
    }
    if !looks_like_email(&message.email) {
        return Some("Please enter a valid email address.");
    }
    if message.message.trim().is_empty() {
        return Some("Please enter a message.");
    }
    None
}

#[derive(Clone, PartialEq)]
enum Toast {
    Success,
    Failure,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let info = use_state(|| None::<ContactInfoData>);
    let form = use_state(ContactMessage::default);
    let sending = use_state(|| false);
    let toast = use_state(|| None::<Toast>);
    let field_error = use_state(|| None::<&'static str>);

    {
        let info = info.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let alive_for_cleanup = alive.clone();

                spawn_local(async move {
                    match get_contact_info().await {
                        Ok(data) => {
                            if alive.get() {
                                info.set(Some(data));
                            }
                        }
                        // The sidebar just stays empty; the form is the point.
                        Err(e) => log::error!("failed to load contact info: {e}"),
                    }
                });

                move || alive_for_cleanup.set(false)
            },
            (),
        );
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactMessage {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactMessage {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactMessage {
                message: input.value(),
                ..(*form).clone()
            });
        })
    };
    let on_honeypot = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactMessage {
                website: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let sending = sending.clone();
        let toast = toast.clone();
        let field_error = field_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let message = (*form).clone();
            if let Some(problem) = validate(&message) {
                field_error.set(Some(problem));
                return;
            }
            field_error.set(None);

            sending.set(true);
            let form = form.clone();
            let sending = sending.clone();
            let toast = toast.clone();
            spawn_local(async move {
                let sent = match Request::post(config::get_forms_url()).json(&message) {
                    Ok(request) => match request.send().await {
                        Ok(response) if response.ok() => true,
                        Ok(response) => {
                            log::error!("forms endpoint returned {}", response.status());
                            false
                        }
                        Err(e) => {
                            log::error!("failed to send contact message: {e}");
                            false
                        }
                    },
                    Err(e) => {
                        log::error!("failed to encode contact message: {e}");
                        false
                    }
                };

                sending.set(false);
                if sent {
                    form.set(ContactMessage::default());
                    show_toast(&toast, Toast::Success);
                } else {
                    show_toast(&toast, Toast::Failure);
                }
            });
        })
    };

    html! {
        <div class="contact-page">
            <aside class="contact-info">
                <h1>{"Contact"}</h1>
                if let Some(info) = &*info {
                    <ul>
                        <li><a href={format!("mailto:{}", info.email)}>{ info.email.clone() }</a></li>
                        if let Some(phone) = &info.phone {
                            <li>{ phone.clone() }</li>
                        }
                        if let Some(linkedin) = &info.linkedin_url {
                            <li><a href={linkedin.clone()} target="_blank" rel="noopener">{"LinkedIn"}</a></li>
                        }
                        if let Some(github) = &info.github_url {
                            <li><a href={github.clone()} target="_blank" rel="noopener">{"GitHub"}</a></li>
                        }
                        if let Some(location) = &info.location {
                            <li>{ location.clone() }</li>
                        }
                        if let Some(availability) = &info.availability {
                            <li class="contact-availability">{ availability.clone() }</li>
                        }
                    </ul>
                }
            </aside>

            <form class="contact-form" onsubmit={on_submit}>
                <label>
                    {"Name"}
                    <input
                        type="text"
                        name="name"
                        value={form.name.clone()}
                        oninput={on_name}
                        disabled={*sending}
                    />
                </label>
                <label>
                    {"Email"}
                    <input
                        type="email"
                        name="email"
                        value={form.email.clone()}
                        oninput={on_email}
                        disabled={*sending}
                    />
                </label>
                <label>
                    {"Message"}
                    <textarea
                        name="message"
                        rows="6"
                        value={form.message.clone()}
                        oninput={on_message}
                        disabled={*sending}
                    />
                </label>
                <label class="contact-website" aria-hidden="true">
                    {"Website"}
                    <input
                        type="text"
                        name="website"
                        tabindex="-1"
                        autocomplete="off"
                        value={form.website.clone()}
                        oninput={on_honeypot}
                    />
                </label>
                if let Some(problem) = *field_error {
                    <p class="contact-error">{ problem }</p>
                }
                <button type="submit" disabled={*sending}>
                    { if *sending { "Sending\u{2026}" } else { "Send message" } }
                </button>
            </form>

            if let Some(toast) = &*toast {
                <div class={classes!("contact-toast", matches!(toast, Toast::Failure).then_some("failure"))}>
                    { match toast {
                        Toast::Success => "Thanks! Your message is on its way.",
                        Toast::Failure => "Something went wrong. Please try again.",
                    } }
                </div>
            }

            <style>
                {r#"
                .contact-page {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 7rem 2rem 4rem;
                    display: grid;
                    grid-template-columns: 1fr 1.5fr;
                    gap: 3rem;
                }
                @media (max-width: 720px) {
                    .contact-page { grid-template-columns: 1fr; }
                }
                .contact-info ul { list-style: none; padding: 0; margin-top: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; }
                .contact-info a { color: #7EB2FF; text-decoration: none; }
                .contact-availability { color: #999; }
                .contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
                .contact-form label { display: flex; flex-direction: column; gap: 0.4rem; font-size: 0.9rem; }
                .contact-form input, .contact-form textarea {
                    padding: 0.75rem;
                    border: 1px solid rgba(128, 128, 128, 0.35);
                    border-radius: 8px;
                    background: transparent;
                    color: inherit;
                    font: inherit;
                }
                .contact-website { position: absolute; left: -9999px; }
                .contact-error { color: #e05252; font-size: 0.9rem; }
                .contact-form button {
                    align-self: flex-start;
                    padding: 0.9rem 2rem;
                    border: none;
                    border-radius: 8px;
                    background: #7EB2FF;
                    color: #1a1a1a;
                    font-weight: 600;
                    cursor: pointer;
                }
                .contact-form button:disabled { opacity: 0.6; cursor: default; }
                .contact-toast {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    padding: 1rem 1.5rem;
                    border-radius: 8px;
                    background: #2e7d32;
                    color: #fff;
                    z-index: 30;
                }
                .contact-toast.failure { background: #c62828; }
                "#}
            </style>
        </div>
    }
}

fn show_toast(toast: &UseStateHandle<Option<Toast>>, kind: Toast) {
    toast.set(Some(kind));
    let toast = toast.clone();
    Timeout::new(TOAST_MS, move || toast.set(None)).forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(name: &str, email: &str, body: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            message: body.into(),
            website: String::new(),
        }
    }

    #[test]
    fn complete_message_passes_validation() {
        assert_eq!(validate(&message("Ada", "ada@example.com", "Hello")), None);
    }

    #[test]
    fn blank_fields_are_rejected_in_order() {
        assert_eq!(
            validate(&message("  ", "ada@example.com", "Hello")),
            Some("Please enter your name.")
        );
        assert_eq!(
            validate(&message("Ada", "not-an-email", "Hello")),
            Some("Please enter a valid email address.")
        );
        assert_eq!(
            validate(&message("Ada", "ada@example.com", "")),
            Some("Please enter a message.")
        );
    }

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("ada@example.com"));
        assert!(looks_like_email("  ada@example.co.uk "));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("ada@example"));
        assert!(!looks_like_email("ada@.com"));
    }

    #[test]
    fn honeypot_field_always_ships_with_the_payload() {
        let encoded =
            serde_json::to_string(&message("Ada", "ada@example.com", "Hello")).unwrap();
        assert!(encoded.contains("\"website\":\"\""));
        assert!(encoded.contains("\"name\":\"Ada\""));

        let tripped = ContactMessage {
            website: "https://spam.example".into(),
            ..message("Bot", "bot@example.com", "Buy now")
        };
        let encoded = serde_json::to_string(&tripped).unwrap();
        assert!(encoded.contains("\"website\":\"https://spam.example\""));
    }

    #[test]
    fn honeypot_content_never_blocks_validation() {
        let tripped = ContactMessage {
            website: "filled".into(),
            ..message("Ada", "ada@example.com", "Hello")
        };
        assert_eq!(validate(&tripped), None);
    }
}

use gloo_console::log;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{SUBMIT_LATENCY_MS, SUCCESS_NOTICE_MS};
use crate::theme::palette;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("please fill in your {0}")]
    MissingField(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

fn validate(inquiry: &Inquiry) -> Result<(), SubmitError> {
    if inquiry.name.trim().is_empty() {
        return Err(SubmitError::MissingField("name"));
    }
    if inquiry.email.trim().is_empty() {
        return Err(SubmitError::MissingField("email"));
    }
    if !inquiry.email.contains('@') {
        return Err(SubmitError::InvalidEmail);
    }
    if inquiry.message.trim().is_empty() {
        return Err(SubmitError::MissingField("message"));
    }
    Ok(())
}

// There is no inbox behind this form. The payload is serialized and
// logged, and the latency of a real submission is simulated; callers
// still get a Result so the failure path stays modelled.
async fn send_inquiry(inquiry: Inquiry) -> Result<(), SubmitError> {
    validate(&inquiry)?;
    if let Ok(payload) = serde_json::to_string(&inquiry) {
        log!("submitting inquiry", payload);
    }
    TimeoutFuture::new(SUBMIT_LATENCY_MS).await;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_state(Inquiry::default);
    let is_submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let colors = palette(props.dark);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);
            error.set(None);
            success.set(None);

            let inquiry = (*form).clone();
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match send_inquiry(inquiry).await {
                    Ok(()) => {
                        form.set(Inquiry::default());
                        success.set(Some(
                            "🎉 Thank you! Your message has been sent successfully. \
                             We'll get back to you soon!"
                                .to_string(),
                        ));
                        is_submitting.set(false);
                        // Clear the notice after a while
                        let success = success.clone();
                        let timeout = Timeout::new(SUCCESS_NOTICE_MS, move || {
                            success.set(None);
                        });
                        timeout.forget();
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <>
            <style>
                {r#"
                    @keyframes orbDrift {
                        from {
                            transform: translate(-50px, -50px);
                            opacity: 0;
                        }
                        to {
                            transform: translate(0, 0);
                            opacity: 0.6;
                        }
                    }
                    @keyframes borderSweep {
                        from { transform: translate(-100%, -100%) rotate(-45deg); }
                        to { transform: translate(100%, 100%) rotate(-45deg); }
                    }
                    @keyframes dropIn {
                        from {
                            opacity: 0;
                            transform: translateY(-30px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                    @keyframes riseIn {
                        from {
                            opacity: 0;
                            transform: translateY(40px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                    @keyframes spinGlyph {
                        to { transform: rotate(360deg); }
                    }
                    .contact-page {
                        min-height: 100vh;
                        padding: 60px 20px;
                        font-family: 'Inter', sans-serif;
                        position: relative;
                        overflow: hidden;
                    }
                    .contact-orb {
                        position: absolute;
                        border-radius: 50%;
                        animation: orbDrift 1.5s ease-in-out infinite alternate;
                        z-index: 0;
                    }
                    .contact-body {
                        position: relative;
                        z-index: 1;
                    }
                    .contact-header {
                        text-align: center;
                        max-width: 800px;
                        margin: 0 auto 60px;
                        animation: dropIn 0.6s ease-out;
                    }
                    .contact-header h1 {
                        font-size: clamp(2rem, 5vw, 3.5rem);
                        font-weight: 800;
                        margin-bottom: 20px;
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        line-height: 1.2;
                    }
                    .contact-header p {
                        font-size: clamp(1rem, 2vw, 1.2rem);
                        max-width: 600px;
                        margin: 0 auto;
                        opacity: 0.9;
                        line-height: 1.6;
                    }
                    .contact-form {
                        max-width: 600px;
                        margin: 0 auto;
                        border-radius: 24px;
                        padding: 40px;
                        box-shadow: 0 20px 50px rgba(0,0,0,0.15);
                        backdrop-filter: blur(10px);
                        position: relative;
                        overflow: hidden;
                        animation: riseIn 0.6s ease-out;
                    }
                    .border-sweep {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 200%;
                        height: 2px;
                        animation: borderSweep 8s linear infinite;
                        z-index: 2;
                    }
                    .contact-field {
                        margin-bottom: 25px;
                        text-align: left;
                    }
                    .contact-field label {
                        display: block;
                        margin-bottom: 10px;
                        font-weight: 600;
                        font-size: 0.95rem;
                    }
                    .contact-field input,
                    .contact-field textarea {
                        width: 100%;
                        padding: 15px 20px;
                        border-radius: 12px;
                        outline: none;
                        font-size: 16px;
                        box-sizing: border-box;
                        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .contact-field textarea {
                        resize: vertical;
                        min-height: 150px;
                    }
                    .contact-submit {
                        width: 100%;
                        padding: 18px;
                        color: #fff;
                        border: none;
                        border-radius: 12px;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .contact-submit:disabled {
                        cursor: wait;
                        opacity: 0.8;
                    }
                    .sending-glyph {
                        display: inline-block;
                        margin-right: 8px;
                        animation: spinGlyph 1s linear infinite;
                    }
                    .contact-notice {
                        max-width: 600px;
                        margin: 30px auto 0;
                        padding: 20px;
                        border-radius: 12px;
                        text-align: center;
                        backdrop-filter: blur(10px);
                    }
                    .contact-notice p {
                        margin: 0;
                        font-weight: 500;
                    }
                "#}
            </style>
            <div
                class="contact-page"
                style={format!("background: {}; color: {};", colors.background, colors.text)}
            >
                // Floating decorative orbs
                <div
                    class="contact-orb"
                    style={format!(
                        "width: 300px; height: 300px; top: 10%; left: 5%; filter: blur(40px); \
                         background: radial-gradient(circle, {} 0%, transparent 70%);",
                        colors.primary,
                    )}
                ></div>
                <div
                    class="contact-orb"
                    style={format!(
                        "width: 400px; height: 400px; bottom: 5%; right: 5%; filter: blur(50px); \
                         animation-delay: 0.5s; \
                         background: radial-gradient(circle, {} 0%, transparent 70%);",
                        colors.accent,
                    )}
                ></div>

                <div class="contact-body">
                    <div class="contact-header">
                        <h1 style={format!("background: linear-gradient(90deg, {}, {});", colors.primary, colors.accent)}>
                            {"Let's Create Something Amazing Together"}
                        </h1>
                        <p>
                            {"Whether you have a project in mind or just want to chat about \
                              possibilities, we'd love to hear from you. Our team typically \
                              responds within 24 hours."}
                        </p>
                    </div>

                    <form
                        class="contact-form"
                        style={format!("background: {}; border: 1px solid {};", colors.card_bg, colors.input_border)}
                        {onsubmit}
                    >
                        <div
                            class="border-sweep"
                            style={format!("background: linear-gradient(90deg, transparent, {}, transparent);", colors.primary)}
                        ></div>

                        <div class="contact-field">
                            <label>{"Name"}</label>
                            <input
                                type="text"
                                placeholder="Enter your name"
                                value={form.name.clone()}
                                oninput={on_name}
                                style={format!(
                                    "background: {}; color: {}; border: 1px solid {};",
                                    colors.input_bg, colors.text, colors.input_border,
                                )}
                            />
                        </div>

                        <div class="contact-field">
                            <label>{"Email"}</label>
                            <input
                                type="email"
                                placeholder="Enter your email"
                                value={form.email.clone()}
                                oninput={on_email}
                                style={format!(
                                    "background: {}; color: {}; border: 1px solid {};",
                                    colors.input_bg, colors.text, colors.input_border,
                                )}
                            />
                        </div>

                        <div class="contact-field">
                            <label>{"Your Message"}</label>
                            <textarea
                                placeholder="Tell us about your case..."
                                value={form.message.clone()}
                                oninput={on_message}
                                style={format!(
                                    "background: {}; color: {}; border: 1px solid {};",
                                    colors.input_bg, colors.text, colors.input_border,
                                )}
                            ></textarea>
                        </div>

                        <button
                            type="submit"
                            class="contact-submit"
                            disabled={*is_submitting}
                            style={format!(
                                "background: linear-gradient(45deg, {}, {}); box-shadow: 0 4px 15px {}40;",
                                colors.primary, colors.accent, colors.primary,
                            )}
                        >
                            if *is_submitting {
                                <span><span class="sending-glyph">{"⏳"}</span>{"Sending..."}</span>
                            } else {
                                <span>{"📨 Send Message"}</span>
                            }
                        </button>
                    </form>

                    if let Some(notice) = (*success).as_ref() {
                        <div
                            class="contact-notice"
                            style={format!(
                                "background: {}; border: 1px solid {};",
                                if props.dark { "rgba(76, 201, 240, 0.1)" } else { "rgba(67, 97, 238, 0.1)" },
                                colors.primary,
                            )}
                        >
                            <p style={format!("color: {};", colors.primary)}>{ notice }</p>
                        </div>
                    }

                    if let Some(message) = (*error).as_ref() {
                        <div
                            class="contact-notice"
                            style="background: rgba(239, 68, 68, 0.1); border: 1px solid #ef4444;"
                        >
                            <p style="color: #ef4444;">{ message }</p>
                        </div>
                    }
                </div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> Inquiry {
        Inquiry {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            message: "I need help reviewing a rental agreement.".to_string(),
        }
    }

    #[test]
    fn complete_inquiry_passes_validation() {
        assert_eq!(validate(&inquiry()), Ok(()));
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut missing_name = inquiry();
        missing_name.name = "  ".to_string();
        assert_eq!(
            validate(&missing_name),
            Err(SubmitError::MissingField("name"))
        );

        let mut missing_message = inquiry();
        missing_message.message.clear();
        assert_eq!(
            validate(&missing_message),
            Err(SubmitError::MissingField("message"))
        );
    }

    #[test]
    fn mail_address_needs_an_at_sign() {
        let mut bad_email = inquiry();
        bad_email.email = "asha.example.com".to_string();
        assert_eq!(validate(&bad_email), Err(SubmitError::InvalidEmail));
    }

    #[test]
    fn errors_read_like_form_feedback() {
        assert_eq!(
            SubmitError::MissingField("email").to_string(),
            "please fill in your email"
        );
        assert_eq!(
            SubmitError::InvalidEmail.to_string(),
            "please enter a valid email address"
        );
    }
}

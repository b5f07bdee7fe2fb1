//! Patient portal login: phone number first, then the OTP sent by SMS.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::patient_auth::PatientAuthState;
use crate::state::session::PatientSession;
use crate::util::phone::{PHONE_PREFIX, is_valid_phone, sanitize_phone};
use crate::util::spawn_ui;

#[component]
pub fn PatientLoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<PatientAuthState>>();
    let navigate = use_navigate();

    let otp_sent = RwSignal::new(false);
    let phone = RwSignal::new(PHONE_PREFIX.to_owned());
    let otp = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let request_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        if !is_valid_phone(&phone.get_untracked()) {
            error.set("Mobile number must be 10 digits long, following +91.".to_owned());
            return;
        }
        loading.set(true);
        spawn_ui(async move {
            match api::request_otp(&phone.get_untracked()).await {
                Ok(()) => otp_sent.set(true),
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
    };

    let verify_otp = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        loading.set(true);
        let navigate = navigate.clone();
        spawn_ui(async move {
            match api::verify_otp(&phone.get_untracked(), &otp.get_untracked()).await {
                Ok(payload) => {
                    auth.update(|state| state.login(&PatientSession::browser(), payload));
                    navigate("/patient", NavigateOptions::default());
                }
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="login-page patient-login">
            <h2>"Patient Portal"</h2>
            <Show when=move || !error.get().is_empty()>
                <p class="error-message">{move || error.get()}</p>
            </Show>

            <Show
                when=move || otp_sent.get()
                fallback=move || {
                    view! {
                        <form on:submit=request_otp>
                            <p>"Enter your registered mobile number to receive a login OTP."</p>
                            <label>
                                "Mobile Number"
                                <input
                                    type="tel"
                                    placeholder="+911234567890"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| {
                                        phone
                                            .update(|p| {
                                                *p = sanitize_phone(p, &event_target_value(&ev));
                                            });
                                    }
                                    required
                                />
                            </label>
                            <button type="submit" class="btn btn--primary" prop:disabled=move || loading.get()>
                                {move || if loading.get() { "Sending..." } else { "Send OTP" }}
                            </button>
                        </form>
                    }
                }
            >
                <form on:submit=verify_otp.clone()>
                    <p>{move || format!("Enter the OTP sent to {}.", phone.get())}</p>
                    <label>
                        "One-Time Password"
                        <input
                            type="text"
                            inputmode="numeric"
                            prop:value=move || otp.get()
                            on:input=move |ev| otp.set(event_target_value(&ev))
                            required
                        />
                    </label>
                    <button type="submit" class="btn btn--primary" prop:disabled=move || loading.get()>
                        {move || if loading.get() { "Verifying..." } else { "Verify & Login" }}
                    </button>
                    <button type="button" class="btn" on:click=move |_| otp_sent.set(false)>
                        "Change Number"
                    </button>
                </form>
            </Show>

            <p class="staff-login-link">
                "Hospital staff? " <A href="/login">"Login Here"</A>
            </p>
        </div>
    }
}

use dioxus::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use glowclass_core::autocomplete::{filter_areas, suggestions_visible};
use glowclass_core::form::{FormState, SubmitState};
use glowclass_core::lookup::{triggers_lookup, LookupOutcome, PincodeClient};
use glowclass_core::store::{RegistrationRow, StoreClient};

use super::toast::{push_toast, Toast, ToastKind};

#[component]
pub fn RegistrationForm() -> Element {
    let toasts = use_context::<Signal<Vec<Toast>>>();
    let mut form = use_signal(FormState::default);
    let mut suggestions = use_signal(Vec::<&'static str>::new);
    let mut submit_state = use_signal(|| SubmitState::Idle);

    let on_pincode_input = move |evt: Event<FormData>| {
        let value = evt.value();
        form.write().pincode = value.clone();
        if !triggers_lookup(&value) {
            return;
        }
        spawn_local(async move {
            let outcome = PincodeClient::new().lookup(&value).await;
            // A slow response must not clobber the city of a pincode typed
            // after this request went out.
            if form.read().pincode != value {
                return;
            }
            match outcome {
                Ok(LookupOutcome::Found(city)) => {
                    form.write().city = city.clone();
                    suggestions.set(Vec::new());
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        "City found",
                        &format!("We set your city to {city}."),
                    );
                }
                Ok(LookupOutcome::NotFound) => {
                    form.write().city = String::new();
                    push_toast(
                        toasts,
                        ToastKind::Warning,
                        "Pincode not found",
                        "We couldn't find a city for that pincode. Please enter it yourself.",
                    );
                }
                Err(err) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "pincode lookup failed: {err}"
                    )));
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        "Lookup failed",
                        "Something went wrong looking up that pincode. Please try again.",
                    );
                }
            }
        });
    };

    let on_city_input = move |evt: Event<FormData>| {
        let value = evt.value();
        suggestions.set(filter_areas(&value));
        form.write().city = value;
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        // Native required/pattern constraints have already passed by the
        // time this fires.
        if submit_state.read().is_disabled() {
            return;
        }
        submit_state.set(SubmitState::Submitting);
        spawn_local(async move {
            let row = RegistrationRow::from(&*form.read());
            match StoreClient::new().insert(&row).await {
                Ok(()) => {
                    form.write().reset();
                    suggestions.set(Vec::new());
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        "Successfully registered!",
                        "We'll contact you with more details soon.",
                    );
                }
                Err(err) => {
                    web_sys::console::error_1(&JsValue::from_str(&format!(
                        "registration insert failed: {err}"
                    )));
                    push_toast(
                        toasts,
                        ToastKind::Error,
                        "Registration failed",
                        "We couldn't save your registration. Please try again.",
                    );
                }
            }
            submit_state.set(SubmitState::Idle);
        });
    };

    let state = form.read().clone();
    let matched = suggestions.read().clone();
    let submit = *submit_state.read();
    let submit_label = submit.label();

    rsx! {
        div { class: "glass-card",
            h2 { class: "card-title", "Reserve Your Spot" }
            form { class: "registration-form", onsubmit: on_submit,
                div { class: "form-field",
                    label { "Full Name" }
                    input {
                        r#type: "text",
                        required: true,
                        class: "form-input",
                        value: "{state.name}",
                        oninput: move |evt| form.write().name = evt.value(),
                    }
                }
                div { class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        required: true,
                        class: "form-input",
                        value: "{state.email}",
                        oninput: move |evt| form.write().email = evt.value(),
                    }
                }
                div { class: "form-field",
                    label { "Phone Number" }
                    input {
                        r#type: "tel",
                        required: true,
                        class: "form-input",
                        value: "{state.phone}",
                        oninput: move |evt| form.write().phone = evt.value(),
                    }
                }
                div { class: "form-field",
                    label { "Pincode" }
                    input {
                        r#type: "text",
                        required: true,
                        pattern: "[0-9]{{6}}",
                        maxlength: "6",
                        class: "form-input",
                        value: "{state.pincode}",
                        oninput: on_pincode_input,
                    }
                }
                div { class: "form-field form-field-suggest",
                    label { "City" }
                    input {
                        r#type: "text",
                        class: "form-input",
                        value: "{state.city}",
                        oninput: on_city_input,
                    }
                    if suggestions_visible(&state.city, &matched) {
                        ul { class: "suggestion-panel",
                            for area in matched {
                                li {
                                    class: "suggestion-item",
                                    onclick: move |_| {
                                        form.write().city = area.to_string();
                                        suggestions.set(Vec::new());
                                        push_toast(
                                            toasts,
                                            ToastKind::Info,
                                            "Area selected",
                                            &format!("You picked {area}."),
                                        );
                                    },
                                    "{area}"
                                }
                            }
                        }
                    }
                }
                div { class: "form-field",
                    label { "Experience Level" }
                    select {
                        class: "form-input",
                        value: "{state.experience}",
                        onchange: move |evt| form.write().experience = evt.value(),
                        option { value: "beginner", "Beginner" }
                        option { value: "intermediate", "Intermediate" }
                        option { value: "advanced", "Advanced" }
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn-primary",
                    disabled: submit.is_disabled(),
                    "{submit_label}"
                }
            }
        }
    }
}

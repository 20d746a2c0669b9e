//! Signup page: the GymBook registration form.

use api::{Gender, HttpSubmitter, Prefix, Settings, Submitter};
use dioxus::prelude::*;

use crate::form::{Field, ResetPolicy, SignupForm, SubmitOutcome};

/// Registration form component.
#[component]
pub fn Signup() -> Element {
    // Keep the draft when the server rejects it so the user can try again.
    let mut form = use_signal(|| SignupForm::new().with_reset_policy(ResetPolicy::OnSuccess));
    let mut failure = use_signal(|| Option::<String>::None);
    let mut created = use_signal(|| false);

    let submitter = use_hook(|| {
        let settings = Settings::load().unwrap_or_else(|e| {
            tracing::warn!("Using default signup settings: {}", e);
            Settings::default()
        });
        HttpSubmitter::from_settings(&settings)
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitter = submitter.clone();
        spawn(async move {
            // Refused while a request is in flight or the draft is invalid.
            let begun = form.write().begin_submit();
            let Ok(record) = begun else {
                return;
            };
            failure.set(None);
            created.set(false);

            let result = submitter.submit(&record).await;
            match form.write().finish_submit(result) {
                SubmitOutcome::Sent(_) => created.set(true),
                SubmitOutcome::Failed(e) => failure.set(Some(e.to_string())),
                SubmitOutcome::Invalid(_) | SubmitOutcome::InFlight => {}
            }
        });
    };

    let submitting = form.read().is_submitting();
    let prefix = form.read().value(Field::Prefix).to_string();
    let gender = form.read().value(Field::Gender).to_string();

    rsx! {
        div {
            class: "signup",

            h1 { class: "signup-brand", "GymBook" }

            form {
                class: "signup-card",
                onsubmit: handle_submit,

                h2 { "Create a new account" }

                if let Some(err) = failure() {
                    div { class: "signup-banner signup-banner-error", "{err}" }
                }
                if created() {
                    div { class: "signup-banner signup-banner-ok", "Account created" }
                }

                div {
                    class: "field",
                    label { r#for: "prefix", "Prefix" }
                    select {
                        id: "prefix",
                        name: "prefix",
                        value: "{prefix}",
                        onchange: move |evt| form.write().set_field(Field::Prefix, evt.value()),
                        onblur: move |_| form.write().mark_touched(Field::Prefix),
                        option { value: "", disabled: true, "Select a prefix" }
                        for p in Prefix::ALL {
                            option { key: "{p}", value: p.as_str(), "{p}" }
                        }
                    }
                    FieldError { form, field: Field::Prefix }
                }

                TextField { form, field: Field::FirstName }
                TextField { form, field: Field::MiddleName }
                TextField { form, field: Field::LastName }
                TextField { form, field: Field::Email, input_type: "email" }
                TextField { form, field: Field::Phone, input_type: "tel" }

                div {
                    class: "field",
                    span { class: "field-label", "Gender" }
                    div {
                        class: "radio-row",
                        for g in Gender::ALL {
                            label {
                                key: "{g}",
                                class: "radio",
                                input {
                                    r#type: "radio",
                                    name: "gender",
                                    value: g.as_str(),
                                    checked: gender == g.as_str(),
                                    onchange: move |_| {
                                        let mut form = form.write();
                                        form.set_field(Field::Gender, g.as_str());
                                        form.mark_touched(Field::Gender);
                                    },
                                }
                                "{g}"
                            }
                        }
                    }
                    FieldError { form, field: Field::Gender }
                }

                TextField { form, field: Field::Password, input_type: "password" }
                TextField { form, field: Field::DateOfBirth, placeholder: "YYYY-MM-DD" }

                button {
                    class: "signup-submit",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Signing up..." } else { "Signup" }
                }
            }
        }
    }
}

/// Labelled text input bound to one field of the form.
#[component]
fn TextField(
    form: Signal<SignupForm>,
    field: Field,
    #[props(default = "text".to_string(), into)] input_type: String,
    #[props(default, into)] placeholder: String,
) -> Element {
    let mut form = form;
    let name = field.name();
    let label = field.label();
    let value = form.read().value(field).to_string();

    rsx! {
        div {
            class: "field",
            label { r#for: name, "{label}" }
            input {
                id: name,
                name: name,
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt: FormEvent| form.write().set_field(field, evt.value()),
                onblur: move |_| form.write().mark_touched(field),
            }
            FieldError { form, field }
        }
    }
}

/// Error text under a field, shown once the field is touched.
#[component]
fn FieldError(form: Signal<SignupForm>, field: Field) -> Element {
    let error = form.read().visible_error(field);

    rsx! {
        if let Some(error) = error {
            p { class: "field-error", "{error}" }
        }
    }
}

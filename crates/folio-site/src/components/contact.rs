//! Contact section: channels on the left, the message form on the right.

use dioxus::prelude::*;
use folio_core::{
    run_submission, ContactFormState, FormField, FormStore, FormTimings, Motion, MotionState,
    Profile, Section, SimulatedTransport, ViewLifetime,
};

use crate::bridge::use_entrance;

use super::SectionHeader;

/// Lets the submission flow write into the component's signal.
struct SignalForm(Signal<ContactFormState>);

impl FormStore for SignalForm {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactFormState) -> R) -> R {
        f(&mut self.0.write())
    }
}

#[component]
pub fn Contact(profile: Profile, timings: FormTimings) -> Element {
    let form = use_signal(ContactFormState::new);
    let entered = use_entrance(Section::Contact);
    let visible = entered();
    let state = MotionState::from_visible(visible);

    // Pending timers check this before touching the form
    let lifetime = use_hook(ViewLifetime::new);
    use_drop({
        let lifetime = lifetime.clone();
        move || lifetime.detach()
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if form.peek().submitting {
            return;
        }
        let lifetime = lifetime.clone();
        spawn(async move {
            let mut store = SignalForm(form);
            let transport = SimulatedTransport::from_timings(&timings);
            if let Err(err) = run_submission(&mut store, &transport, timings, &lifetime).await {
                tracing::debug!(error = %err, "Contact submission ended early");
            }
        });
    };

    let snapshot = form.read().clone();

    rsx! {
        section {
            id: Section::Contact.anchor_id(),
            class: "section contact-section",

            div { class: "background-decoration" }

            div {
                class: "container",

                SectionHeader {
                    title: "Get In Touch",
                    description: "Have a project in mind or want to collaborate? Feel free to reach out through any of the channels below.",
                    entered: visible,
                }

                div {
                    class: "contact-layout",

                    ContactInfo { profile, entered: visible }

                    div {
                        class: "form-container",
                        style: Motion::FADE_UP.with_delay(300).style(state, 0),

                        form {
                            class: "contact-form",
                            onsubmit: on_submit,

                            div {
                                class: "form-row",
                                FormInput { field: FormField::Name, value: snapshot.fields.name.clone(), form }
                                FormInput { field: FormField::Email, value: snapshot.fields.email.clone(), form }
                            }
                            FormInput { field: FormField::Subject, value: snapshot.fields.subject.clone(), form }
                            FormInput { field: FormField::Message, value: snapshot.fields.message.clone(), form }

                            button {
                                class: "submit-button",
                                r#type: "submit",
                                disabled: snapshot.submitting,
                                "{snapshot.submit_label()} ➤"
                            }

                            if snapshot.submitted {
                                div {
                                    class: "form-banner form-banner-success",
                                    style: Motion::FADE_UP.mount_style(0),
                                    span { "✓" }
                                    span { "Your message has been sent successfully!" }
                                }
                            }

                            if let Some(ref err) = snapshot.error {
                                div {
                                    class: "form-banner form-banner-error",
                                    span { "!" }
                                    span { "{err}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One labelled input bound to a form field.
#[component]
fn FormInput(field: FormField, value: String, form: Signal<ContactFormState>) -> Element {
    let mut form_write = form;
    let name = field.name();

    rsx! {
        div {
            class: "form-group",
            label { r#for: "{name}", "{field.label()}" }
            if field == FormField::Message {
                textarea {
                    id: "{name}",
                    name: "{name}",
                    required: true,
                    value: "{value}",
                    oninput: move |evt| form_write.write().update_field(field, evt.value()),
                }
            } else {
                input {
                    id: "{name}",
                    name: "{name}",
                    r#type: field.input_type(),
                    required: true,
                    value: "{value}",
                    oninput: move |evt| form_write.write().update_field(field, evt.value()),
                }
            }
        }
    }
}

/// Email, address, phone and social links.
#[component]
fn ContactInfo(profile: Profile, entered: bool) -> Element {
    let state = MotionState::from_visible(entered);
    let item = Motion::SLIDE_LEFT;

    rsx! {
        div {
            class: "contact-info",

            div {
                class: "info-item",
                style: item.style(state, 0),
                div { class: "icon-box", "✉" }
                div {
                    class: "info-content",
                    h3 { "Email Address" }
                    for email in profile.emails.iter() {
                        a { key: "{email}", href: "mailto:{email}", "{email}" }
                    }
                }
            }

            div {
                class: "info-item",
                style: item.style(state, 1),
                div { class: "icon-box", "⌂" }
                div {
                    class: "info-content",
                    h3 { "Location" }
                    for line in profile.location.iter() {
                        p { key: "{line}", "{line}" }
                    }
                }
            }

            div {
                class: "info-item",
                style: item.style(state, 2),
                div { class: "icon-box", "☏" }
                div {
                    class: "info-content",
                    h3 { "Phone Number" }
                    a { href: "tel:{profile.phone}", "{profile.phone}" }
                    p { "{profile.hours}" }
                }
            }

            div {
                class: "social-links",
                style: Motion::FADE_UP.with_delay(300).style(state, 3),
                for social in profile.socials.iter() {
                    a {
                        key: "{social.url}",
                        class: "social-link",
                        href: "{social.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{social.label}"
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use quiz_core::model::Identity;

#[component]
pub fn AuthView(
    gate_pending: bool,
    total_questions: usize,
    total_minutes: u32,
    question_secs: u32,
    on_start: EventHandler<Identity>,
) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);

    let incomplete = name.read().trim().is_empty() || email.read().trim().is_empty();
    let start_label = if gate_pending {
        "Checking eligibility..."
    } else {
        "Begin Assessment"
    };

    rsx! {
        div { class: "page auth-page",
            header { class: "auth-header",
                h1 { class: "auth-title", "Physics Quiz Pro" }
                p { class: "auth-subtitle", "Department of Advanced Mechanics" }
            }
            div { class: "card auth-card",
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        if gate_pending {
                            return;
                        }
                        let identity = Identity {
                            name: name.read().trim().to_string(),
                            email: email.read().trim().to_string(),
                        };
                        if identity.name.is_empty() || identity.email.is_empty() {
                            return;
                        }
                        on_start.call(identity);
                    },
                    h2 { class: "auth-form-title", "Enter Your Details to Start" }
                    label { class: "field-label", "Full Name" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        placeholder: "Enter your name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    label { class: "field-label", "Email Address" }
                    input {
                        class: "field-input",
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    div { class: "auth-warning",
                        strong { "Security protocol: " }
                        "leaving this window or switching away will immediately "
                        "submit your current progress. Each question allows "
                        "{question_secs} seconds."
                    }
                    button {
                        class: "btn btn-primary auth-start",
                        r#type: "submit",
                        disabled: gate_pending || incomplete,
                        "{start_label}"
                    }
                }
            }
            footer { class: "auth-footer",
                "{total_questions} Questions • {total_minutes} Minutes • Strictly Monitored Session"
            }
        }
    }
}

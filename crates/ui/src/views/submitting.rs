use dioxus::prelude::*;

#[component]
pub fn SubmittingView() -> Element {
    rsx! {
        div { class: "page submitting-page",
            div { class: "spinner" }
            h2 { class: "submitting-title", "Securely submitting..." }
            p { class: "submitting-body", "Uploading your assessment results." }
        }
    }
}

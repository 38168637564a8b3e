use dioxus::prelude::*;

#[component]
pub fn FinishedView(
    score: u32,
    total: usize,
    percentage: u32,
    name: String,
    email: String,
    finished_label: String,
    identifier: String,
    lockout_mins: u32,
    on_restart: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "page finished-page",
            div { class: "card finished-card",
                h1 { class: "finished-title", "Quiz Completed" }
                p { class: "finished-subtitle", "Submission Finalized" }
                div { class: "finished-stats",
                    div { class: "finished-stat",
                        p { class: "finished-stat-label", "Total Score" }
                        p { class: "finished-stat-value", "{score} / {total}" }
                    }
                    div { class: "finished-stat",
                        p { class: "finished-stat-label", "Percentage" }
                        p { class: "finished-stat-value", "{percentage}%" }
                    }
                }
                dl { class: "finished-details",
                    dt { "Candidate" }
                    dd { "{name}" }
                    dt { "Email" }
                    dd { "{email}" }
                    dt { "Timestamp" }
                    dd { "{finished_label}" }
                    dt { "Identifier" }
                    dd { class: "finished-identifier", "{identifier}" }
                }
                p { class: "finished-note",
                    "Retakes from this identifier are locked for {lockout_mins} "
                    "minutes to maintain testing integrity."
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_restart.call(()),
                    "Close Session"
                }
            }
        }
    }
}

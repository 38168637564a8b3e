use dioxus::prelude::*;

/// Everything the quiz screen renders, snapshotted from the view-model so the
/// component itself stays a pure function of its props.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizViewData {
    pub candidate: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
    pub index: usize,
    pub total: usize,
    pub progress_percent: u32,
    pub question_timer: String,
    pub global_timer: String,
    pub question_timer_urgent: bool,
    pub global_timer_urgent: bool,
    pub is_last: bool,
}

#[component]
pub fn QuizView(
    data: QuizViewData,
    on_select: EventHandler<usize>,
    on_next: EventHandler<()>,
    on_force_submit: EventHandler<()>,
) -> Element {
    let number = data.index + 1;
    let next_label = if data.is_last { "Finish Test" } else { "Next Question" };
    let global_class = if data.global_timer_urgent {
        "timer-value timer-value--urgent"
    } else {
        "timer-value"
    };
    let question_class = if data.question_timer_urgent {
        "timer-value timer-value--urgent"
    } else {
        "timer-value"
    };

    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                div { class: "quiz-heading",
                    span { class: "quiz-number-badge", "{number}" }
                    div {
                        p { class: "quiz-kicker", "Physics Assessment" }
                        p { class: "quiz-candidate", "{data.candidate}" }
                    }
                }
                div { class: "quiz-timers",
                    div { class: "timer",
                        p { class: "timer-label", "Global Time" }
                        p { class: "{global_class}", "{data.global_timer}" }
                    }
                    div { class: "timer",
                        p { class: "timer-label", "Question Time" }
                        p { class: "{question_class}", "{data.question_timer}" }
                    }
                }
            }
            div { class: "quiz-progress",
                div {
                    class: "quiz-progress-fill",
                    style: "width: {data.progress_percent}%",
                }
            }
            div { class: "card quiz-card",
                h2 { class: "quiz-prompt", "{data.prompt}" }
                div { class: "quiz-options",
                    for (idx, option) in data.options.iter().enumerate() {
                        OptionButton {
                            key: "{idx}",
                            index: idx,
                            label: option.clone(),
                            selected: data.selected == Some(idx),
                            on_select,
                        }
                    }
                }
                div { class: "quiz-footer",
                    p { class: "quiz-position", "Question {number} of {data.total}" }
                    button {
                        class: "btn btn-primary",
                        id: "quiz-next",
                        onclick: move |_| on_next.call(()),
                        "{next_label}"
                    }
                }
            }
            // Target for the integrity monitor script; never visible.
            button {
                class: "hidden-control",
                id: "quiz-force-submit",
                tabindex: "-1",
                onclick: move |_| on_force_submit.call(()),
            }
        }
    }
}

#[component]
fn OptionButton(
    index: usize,
    label: String,
    selected: bool,
    on_select: EventHandler<usize>,
) -> Element {
    let class = if selected {
        "quiz-option quiz-option--selected"
    } else {
        "quiz-option"
    };
    let letter = char::from(b'A' + (index as u8 % 26));

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(index),
            span { class: "quiz-option-letter", "{letter}" }
            span { class: "quiz-option-text", "{label}" }
        }
    }
}

use dioxus::document::eval;
use dioxus::prelude::*;

use quiz_core::model::{AdvanceOutcome, Identity, Phase, TickOutcome};
use quiz_core::scoring::percentage;
use services::UNKNOWN_IDENTIFIER;

use crate::context::AppContext;
use crate::views::{
    AuthView, FinishedView, LockedView, QuizView, QuizViewData, SubmittingView,
    integrity_monitor_script,
};
use crate::vm::{QuizVm, format_datetime};

/// Root component: owns the one session state container and dispatches the
/// full-screen view on the lifecycle phase.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let limits = ctx.limits();

    // One owned state container. Timer loop, gate, integrity monitor, and
    // input handlers all go through this handle, so there are never two
    // diverging copies of the session.
    let mut vm = {
        let bank = ctx.bank();
        use_signal(move || QuizVm::new(&bank, limits))
    };
    let mut identifier = use_signal(|| None::<String>);

    // Identity/lockout gate: resolves the identifier and the admit/deny
    // decision before the entry form will accept a start.
    let mut gate = {
        let ctx = ctx.clone();
        use_resource(move || {
            let ctx = ctx.clone();
            async move {
                let id = ctx.identifier().resolve().await;
                let locked = ctx
                    .lockout()
                    .is_locked_out(&id, ctx.limits().lockout_window())
                    .await;
                (id, locked)
            }
        })
    };

    use_effect(move || {
        if let Some((id, locked)) = gate.value().read().clone() {
            identifier.set(Some(id));
            if locked {
                if let Ok(vm) = vm.write().as_mut() {
                    vm.lock();
                }
            }
        }
    });

    // Single submission funnel. The phase guard inside `begin_submission`
    // means a same-tick double trigger (global timer + anti-cheat, or a
    // second Finish click) claims the slot exactly once.
    let dispatch_submit = {
        let ctx = ctx.clone();
        use_callback(move |forced: bool| {
            let claimed = match vm.write().as_mut() {
                Ok(vm) => vm.begin_submission(),
                Err(_) => false,
            };
            if !claimed {
                return;
            }

            let (identity, answers) = {
                let guard = vm.read();
                let Ok(vm) = guard.as_ref() else { return };
                (vm.identity().clone(), vm.answers().to_vec())
            };
            let resolved = identifier
                .read()
                .clone()
                .unwrap_or_else(|| UNKNOWN_IDENTIFIER.to_string());

            let ctx = ctx.clone();
            spawn(async move {
                let outcome = ctx
                    .submissions()
                    .submit(&identity, &answers, &resolved, forced)
                    .await;
                if let Ok(vm) = vm.write().as_mut() {
                    vm.finish(outcome.score, outcome.submitted_at);
                }
            });
        })
    };

    // One-second driver for both countdown timers. Ticks are inert outside
    // `Quiz`, so the loop can run for the lifetime of the app.
    use_future(move || async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        loop {
            interval.tick().await;
            let outcome = match vm.write().as_mut() {
                Ok(vm) => vm.tick(),
                Err(_) => TickOutcome::Idle,
            };
            if let TickOutcome::SubmitDue { forced } = outcome {
                dispatch_submit.call(forced);
            }
        }
    });

    // Keep the JS integrity monitor in step with the phase.
    use_effect(move || {
        let active = vm
            .read()
            .as_ref()
            .is_ok_and(|vm| vm.phase() == Phase::Quiz);
        let _ = eval(&integrity_monitor_script(active));
    });

    let on_start = {
        let ctx = ctx.clone();
        use_callback(move |identity: Identity| {
            let now = ctx.clock().now();
            if let Ok(vm) = vm.write().as_mut() {
                // Rejected outside Auth; a race with the gate stays inert.
                let _ = vm.start(identity, now);
            }
        })
    };

    let on_select = use_callback(move |option: usize| {
        if let Ok(vm) = vm.write().as_mut() {
            let _ = vm.select_answer(option);
        }
    });

    let on_next = use_callback(move |()| {
        let due = match vm.write().as_mut() {
            Ok(vm) => vm.advance() == AdvanceOutcome::SubmitDue,
            Err(_) => false,
        };
        if due {
            dispatch_submit.call(false);
        }
    });

    let on_force_submit = use_callback(move |()| dispatch_submit.call(true));

    let on_restart = {
        let ctx = ctx.clone();
        use_callback(move |()| {
            vm.set(QuizVm::new(&ctx.bank(), ctx.limits()));
            identifier.set(None);
            // Fresh session, fresh gate decision.
            gate.restart();
        })
    };

    let gate_pending = gate.value().read().is_none();
    let shown_identifier = identifier
        .read()
        .clone()
        .unwrap_or_else(|| UNKNOWN_IDENTIFIER.to_string());

    let guard = vm.read();
    let body = match guard.as_ref() {
        Err(err) => rsx! {
            div { class: "fatal",
                h1 { "Unable to start the assessment" }
                p { "{err}" }
            }
        },
        Ok(vm) => match vm.phase() {
            Phase::Auth => rsx! {
                AuthView {
                    gate_pending,
                    total_questions: vm.total_questions(),
                    total_minutes: limits.total_secs / 60,
                    question_secs: limits.question_secs,
                    on_start,
                }
            },
            Phase::Locked => rsx! {
                LockedView {
                    identifier: shown_identifier,
                    lockout_mins: limits.lockout_mins,
                }
            },
            Phase::Quiz => {
                let data = QuizViewData {
                    candidate: vm.identity().name.clone(),
                    prompt: vm.current_prompt().to_string(),
                    options: vm.current_options().to_vec(),
                    selected: vm.selected_option(),
                    index: vm.current_index(),
                    total: vm.total_questions(),
                    progress_percent: vm.progress_percent(),
                    question_timer: vm.question_timer_label(),
                    global_timer: vm.global_timer_label(),
                    question_timer_urgent: vm.question_timer_urgent(),
                    global_timer_urgent: vm.global_timer_urgent(),
                    is_last: vm.is_last_question(),
                };
                rsx! {
                    QuizView { data, on_select, on_next, on_force_submit }
                }
            }
            Phase::Submitting => rsx! {
                SubmittingView {}
            },
            Phase::Finished => rsx! {
                FinishedView {
                    score: vm.score().unwrap_or(0),
                    total: vm.total_questions(),
                    percentage: percentage(vm.score().unwrap_or(0), vm.total_questions()),
                    name: vm.identity().name.clone(),
                    email: vm.identity().email.clone(),
                    finished_label: vm.finished_at().map(format_datetime).unwrap_or_default(),
                    identifier: shown_identifier,
                    lockout_mins: limits.lockout_mins,
                    on_restart,
                }
            },
        },
    };

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Physics Quiz Pro" }

        div { class: "app-root", {body} }
    }
}

use dioxus::prelude::*;

#[component]
pub fn LockedView(identifier: String, lockout_mins: u32) -> Element {
    rsx! {
        div { class: "page locked-page",
            div { class: "card locked-card",
                h1 { class: "locked-title", "Access Restricted" }
                p { class: "locked-body",
                    "A submission was already recorded from this network address. "
                    "Please wait at least {lockout_mins} minutes between attempts."
                }
                div { class: "locked-identifier", "Tracked identifier: {identifier}" }
            }
        }
    }
}

/// JS for the integrity monitor.
///
/// Listeners are registered once behind a window-level singleton; the
/// `active` flag follows the session phase, so a tab switch outside `Quiz`
/// is a no-op. On a violation the script raises the blocking notice and
/// clicks the hidden forced-submit button, which lands in the Rust dispatch
/// path (where the phase guard makes a stray second trigger harmless).
pub(crate) fn integrity_monitor_script(active: bool) -> String {
    format!(
        r#"(function() {{
                    const state = window.__quizIntegrityMonitor || (window.__quizIntegrityMonitor = {{
                        active: false,
                        installed: false,
                    }});
                    state.active = {active};
                    if (state.installed) return;
                    state.installed = true;
                    const fire = (reason) => {{
                        if (!state.active) return;
                        state.active = false;
                        alert("Integrity violation: the test was auto-submitted (" + reason + ").");
                        const btn = document.getElementById("quiz-force-submit");
                        if (btn) btn.click();
                    }};
                    document.addEventListener("visibilitychange", () => {{
                        if (document.visibilityState === "hidden") fire("tab switch or exit");
                    }});
                    window.addEventListener("blur", () => fire("window focus loss"));
                    document.addEventListener("contextmenu", (e) => {{
                        if (state.active) e.preventDefault();
                    }});
                }})();"#,
        active = active,
    )
}

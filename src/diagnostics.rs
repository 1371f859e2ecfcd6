//! Diagnostic sink: the `warn`/`error` collaborator the spec assumes the
//! interpreter front end provides. Callbacks never return a status; the
//! library always continues after a warning and lets the operation's own
//! return value carry the outcome.

/// Non-fatal anomalies (`warn`) and fatal domain errors (`error`) observed
/// while evaluating an operation. Implement this to route diagnostics to
/// wherever the embedding application wants them (a REPL's status line, a
/// log file, ...).
pub trait Diagnostics {
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Default sink: forwards to `tracing`, so diagnostics show up in whatever
/// subscriber the host process has installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, msg: &str) {
        tracing::warn!(target: "bc_number", "{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!(target: "bc_number", "{msg}");
    }
}

/// Sink that discards every diagnostic. Useful in tests that intentionally
/// trigger a `ScaleIgnored` warning and don't want it to reach a
/// subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}

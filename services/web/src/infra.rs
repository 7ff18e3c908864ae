use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Largest request body accepted by the application upload. Kept well above
/// the resume ceiling so oversized files still reach the form flow and get
/// its error message instead of a bare 413.
pub(crate) const UPLOAD_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

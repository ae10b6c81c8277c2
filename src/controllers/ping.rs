use actix_web::{web, HttpResponse};
use tracing::{error, info, warn};

use crate::errors::Result;
use crate::models::report::ProbeReport;
use crate::state::AppState;

/// Probe every configured target and report.
///
/// Answers 500 when any target failed so a scheduler can treat the route as a
/// single pass/fail signal; the body carries the per-target detail either way.
pub async fn ping(data: web::Data<AppState>) -> Result<HttpResponse> {
    let targets = data.registry.load_targets().inspect_err(|e| {
        error!("Refusing to probe: {}", e);
    })?;

    info!("Probing {} targets", targets.len());
    let results = data.prober.probe_all(&targets).await;
    let report = ProbeReport::new(results);

    if report.all_ok() {
        info!("All {} targets healthy", report.results.len());
        Ok(HttpResponse::Ok().json(report))
    } else {
        warn!(
            "{} of {} targets failed",
            report.failed_count(),
            report.results.len()
        );
        Ok(HttpResponse::InternalServerError().json(report))
    }
}

use crate::dto::drivers::ReloadOutcome;
use crate::repository::DriverWriter;
use crate::services::ServiceResult;
use crate::sources::DriverSource;

/// Shown to users whenever a load fails; details go to the log.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load driver data.";

/// Loads a fresh collection from `source` and hands it to the store.
///
/// A failed load leaves the store empty with [`LOAD_FAILURE_MESSAGE`]. If
/// another reload started while this one was in flight, the result is
/// discarded and `applied` is `false`.
pub async fn reload_drivers<S, W>(source: &S, repo: &W) -> ServiceResult<ReloadOutcome>
where
    S: DriverSource,
    W: DriverWriter + ?Sized,
{
    let ticket = repo.begin_load()?;

    let outcome = match source.load().await {
        Ok(drivers) => {
            log::info!("Loaded {} drivers (load #{})", drivers.len(), ticket.get());
            Ok(drivers)
        }
        Err(err) => {
            log::error!("Failed to load drivers (load #{}): {err}", ticket.get());
            Err(LOAD_FAILURE_MESSAGE.to_string())
        }
    };

    let loaded = outcome.as_ref().map_or(0, Vec::len);
    let error = outcome.as_ref().err().cloned();

    let applied = repo.complete_load(ticket, outcome)?;
    if !applied {
        log::warn!("Discarded result of superseded load #{}", ticket.get());
    }

    Ok(ReloadOutcome {
        applied,
        loaded,
        error,
    })
}

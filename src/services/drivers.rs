use crate::domain::driver::Driver;
use crate::domain::filter::{FILTER_DEFINITIONS, FilterState, filter_drivers};
use crate::dto::drivers::{DriversResponse, ExportFile, IndexPageData};
use crate::export::ExportFormat;
use crate::forms::filters::FilterForm;
use crate::pagination::Paginated;
use crate::repository::DriverReader;
use crate::services::{ServiceError, ServiceResult};

fn parse_filters(form: &FilterForm) -> ServiceResult<FilterState> {
    form.to_state().map_err(|err| {
        log::warn!("Rejected filter parameters: {err}");
        ServiceError::Form(format!("Invalid filter: {err}"))
    })
}

fn visible_drivers<R>(repo: &R, state: &FilterState) -> ServiceResult<Vec<Driver>>
where
    R: DriverReader + ?Sized,
{
    let drivers = repo.list_drivers()?;
    Ok(filter_drivers(&drivers, state))
}

/// Loads the filtered, paginated driver table for the index page.
pub fn load_index_page<R>(
    repo: &R,
    form: FilterForm,
    items_per_page: usize,
) -> ServiceResult<IndexPageData>
where
    R: DriverReader + ?Sized,
{
    let state = parse_filters(&form)?;
    let visible = visible_drivers(repo, &state)?;
    let load_state = repo.load_state()?;

    let total = visible.len();
    let drivers = Paginated::from_items(visible, form.page.unwrap_or(1), items_per_page);

    Ok(IndexPageData {
        drivers,
        total,
        active_filters: state.active_filters().len(),
        definitions: FILTER_DEFINITIONS,
        filter_values: form.values(),
        query: form.query_string(),
        load_state,
    })
}

/// Returns the filtered drivers for the JSON API.
///
/// Without a `page` every match is returned.
pub fn list_drivers<R>(
    repo: &R,
    form: FilterForm,
    items_per_page: usize,
) -> ServiceResult<DriversResponse>
where
    R: DriverReader + ?Sized,
{
    let state = parse_filters(&form)?;
    let visible = visible_drivers(repo, &state)?;
    let error = repo.load_state()?.error().map(str::to_string);

    let total = visible.len();
    let drivers = match form.page {
        Some(page) => Paginated::from_items(visible, page, items_per_page).items,
        None => visible,
    };

    Ok(DriversResponse {
        total,
        drivers,
        error,
    })
}

/// Encodes every driver matching the filters as a downloadable file.
pub fn export_drivers<R>(
    repo: &R,
    form: &FilterForm,
    format: ExportFormat,
    file_name: &str,
) -> ServiceResult<ExportFile>
where
    R: DriverReader + ?Sized,
{
    let state = parse_filters(form)?;
    let visible = visible_drivers(repo, &state)?;

    let body = format.encode(&visible, file_name).map_err(|err| {
        log::error!("Failed to export drivers as {format}: {err}");
        err
    })?;

    Ok(ExportFile {
        file_name: format!("{file_name}.{}", format.extension()),
        content_type: format.content_type(),
        body,
    })
}

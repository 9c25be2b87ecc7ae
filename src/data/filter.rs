use super::model::{LaunchRecord, PayloadRange, SiteSelection};

/// Rows of the dataset that pass the current selection, in dataset order.
pub type FilteredView<'a> = Vec<&'a LaunchRecord>;

/// Return the records whose payload lies in `range` (inclusive on both ends)
/// and, unless `site` is [`SiteSelection::All`], whose launch site equals the
/// selected one.
///
/// An empty result is a valid view; it renders as empty charts.
pub fn filter<'a>(
    records: &'a [LaunchRecord],
    site: &SiteSelection,
    range: &PayloadRange,
) -> FilteredView<'a> {
    records
        .iter()
        .filter(|rec| range.contains(rec.payload_mass_kg) && site.matches(&rec.launch_site))
        .collect()
}

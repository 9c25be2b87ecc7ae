use std::fmt;

/// Lower bound of the payload slider domain, in kg.
pub const PAYLOAD_DOMAIN_MIN: f64 = 0.0;
/// Upper bound of the payload slider domain, in kg.
pub const PAYLOAD_DOMAIN_MAX: f64 = 10_000.0;
/// Slider step and mark spacing, in kg.
pub const PAYLOAD_STEP: f64 = 1_000.0;

/// Wire value of the "every site" sentinel.
pub const ALL_SITES_VALUE: &str = "ALL";
/// Display label of the "every site" sentinel.
pub const ALL_SITES_LABEL: &str = "All Sites";

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Landing outcome of a first stage, stored as `class` (1 / 0) in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class as it appears in the source file.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
    /// `Booster Version`, when the file carries it.
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
            booster_version: None,
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed summaries.
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches, in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    pub sites: Vec<String>,
    /// Distinct booster categories in order of first appearance.
    pub booster_categories: Vec<String>,
    pub min_payload: f64,
    pub max_payload: f64,
}

impl LaunchDataset {
    /// Build summaries from the loaded records. Returns `None` for an empty
    /// table, which has no payload bounds.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        let first = records.first()?;
        let mut min_payload = first.payload_mass_kg;
        let mut max_payload = first.payload_mass_kg;
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();

        for rec in &records {
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            if !booster_categories.contains(&rec.booster_version_category) {
                booster_categories.push(rec.booster_version_category.clone());
            }
        }

        Some(LaunchDataset {
            records,
            sites,
            booster_categories,
            min_payload,
            max_payload,
        })
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed payload bounds, used as the initial slider selection.
    pub fn payload_bounds(&self) -> PayloadRange {
        PayloadRange {
            low: self.min_payload,
            high: self.max_payload,
        }
    }

    /// Dropdown options: the sentinel first, then every site.
    pub fn site_options(&self) -> Vec<SiteOption> {
        std::iter::once(SiteOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES_VALUE.to_string(),
        })
        .chain(self.sites.iter().map(|s| SiteOption {
            label: s.clone(),
            value: s.clone(),
        }))
        .collect()
    }
}

// ---------------------------------------------------------------------------
// Selection values
// ---------------------------------------------------------------------------

/// An entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Value of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value. Only the exact sentinel `"ALL"` selects every
    /// site; anything else, including an empty value, names a site verbatim.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES_VALUE,
            SiteSelection::Site(s) => s,
        }
    }

    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == launch_site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Inclusive payload interval `[low, high]` in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    /// Normalize a user-supplied interval: order the ends, then clamp both to
    /// the slider domain. Non-finite ends fall back to the domain bound.
    pub fn from_user(low: f64, high: f64) -> Self {
        let low = if low.is_finite() { low } else { PAYLOAD_DOMAIN_MIN };
        let high = if high.is_finite() { high } else { PAYLOAD_DOMAIN_MAX };
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        PayloadRange {
            low: low.clamp(PAYLOAD_DOMAIN_MIN, PAYLOAD_DOMAIN_MAX),
            high: high.clamp(PAYLOAD_DOMAIN_MIN, PAYLOAD_DOMAIN_MAX),
        }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 2500.0, Outcome::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("KSC LC-39A", 9600.0, Outcome::Failure, "B5"),
        ])
        .unwrap()
    }

    #[test]
    fn summaries_keep_first_appearance_order() {
        let ds = sample();
        assert_eq!(ds.sites, vec!["KSC LC-39A", "CCAFS LC-40"]);
        assert_eq!(ds.booster_categories, vec!["FT", "v1.0", "B5"]);
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 9600.0);
    }

    #[test]
    fn empty_table_has_no_dataset() {
        assert!(LaunchDataset::from_records(Vec::new()).is_none());
    }

    #[test]
    fn site_options_start_with_all_sites() {
        let opts = sample().site_options();
        assert_eq!(opts.len(), 3);
        assert_eq!(opts[0].label, "All Sites");
        assert_eq!(opts[0].value, "ALL");
        assert_eq!(opts[2].value, "CCAFS LC-40");
    }

    #[test]
    fn site_selection_parse() {
        assert_eq!(SiteSelection::parse("ALL"), SiteSelection::All);
        assert_eq!(SiteSelection::parse(""), SiteSelection::Site(String::new()));
        assert_eq!(SiteSelection::parse(" ALL"), SiteSelection::Site(" ALL".into()));
        assert_eq!(
            SiteSelection::parse("VAFB SLC-4E"),
            SiteSelection::Site("VAFB SLC-4E".into())
        );
        assert!(SiteSelection::All.matches("anything"));
        assert!(!SiteSelection::parse("KSC LC-39A").matches("CCAFS LC-40"));
    }

    #[test]
    fn user_range_is_ordered_and_clamped() {
        let r = PayloadRange::from_user(12_000.0, -5.0);
        assert_eq!(r, PayloadRange { low: 0.0, high: 10_000.0 });

        let r = PayloadRange::from_user(f64::NAN, 4000.0);
        assert_eq!(r.low, 0.0);
        assert!(r.contains(4000.0));
        assert!(!r.contains(4000.5));
    }

    #[test]
    fn outcome_class_mapping() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
    }
}

//! Wire types for the catalog response.

use hilo_core::Entity;
use serde::Deserialize;

/// Entries with a metric below this are filtered out of play.
///
/// Matches the catalog's long tail of micro-entries that make rounds
/// degenerate (a population under 100k is unguessable noise).
pub const MIN_METRIC: u64 = 100_000;

/// One record as served by the catalog endpoint.
///
/// Field shape follows the restcountries v3.1 `all` response restricted to
/// `name,population,flags`.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogRecord {
    name: RecordName,
    #[serde(default)]
    population: u64,
    flags: RecordFlags,
}

#[derive(Debug, Deserialize)]
struct RecordName {
    common: String,
}

#[derive(Debug, Deserialize)]
struct RecordFlags {
    png: String,
}

impl From<CatalogRecord> for Entity {
    fn from(record: CatalogRecord) -> Self {
        Entity::new(record.name.common, record.population, record.flags.png)
    }
}

/// Converts decoded records into playable entities, dropping sub-threshold
/// entries.
pub(crate) fn playable(records: Vec<CatalogRecord>) -> Vec<Entity> {
    records
        .into_iter()
        .filter(|record| record.population >= MIN_METRIC)
        .map(Entity::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"[
        {
            "name": { "common": "Atlantis", "official": "Kingdom of Atlantis" },
            "population": 2500000,
            "flags": { "png": "https://flags.example/atlantis.png", "svg": "https://flags.example/atlantis.svg" }
        },
        {
            "name": { "common": "Borduria" },
            "population": 99999,
            "flags": { "png": "https://flags.example/borduria.png" }
        },
        {
            "name": { "common": "Carpathia" },
            "population": 100000,
            "flags": { "png": "https://flags.example/carpathia.png" }
        }
    ]"#;

    #[test]
    fn decodes_and_filters_below_threshold() {
        let records: Vec<CatalogRecord> = serde_json::from_str(FIXTURE).unwrap();
        let entities = playable(records);

        let names: Vec<_> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Atlantis", "Carpathia"]);
        assert_eq!(entities[0].metric, 2_500_000);
        assert_eq!(entities[0].image_ref, "https://flags.example/atlantis.png");
    }

    #[test]
    fn threshold_is_inclusive() {
        let records: Vec<CatalogRecord> = serde_json::from_str(FIXTURE).unwrap();
        let entities = playable(records);
        assert!(entities.iter().any(|e| e.metric == MIN_METRIC));
    }

    #[test]
    fn missing_population_defaults_to_zero_and_is_filtered() {
        let raw = r#"[{ "name": { "common": "Nowhere" }, "flags": { "png": "n.png" } }]"#;
        let records: Vec<CatalogRecord> = serde_json::from_str(raw).unwrap();
        assert!(playable(records).is_empty());
    }
}

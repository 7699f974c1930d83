// Marine report binary entry point
//
// Purpose: Score one set of measurements and print every assessment as JSON
// Usage: cargo run --features cli --bin marine_report [request.json]
//
// Request file (every section optional, defaults are the input-domain defaults):
//   {"water": {"dissolved_oxygen": 7.0, ...}, "hab": {"water_temperature": 25.0, ...},
//    "species_scores": [0.7, 0.6]}

use anyhow::Context;
use marine_scorer_rust::scorer::{
    CoralReport, HabAssessment, MarineHealthAssessment, OilSpillReport, PlasticReport,
};
use marine_scorer_rust::{HabConditions, MarineScorer, WaterSample};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Request {
    water: Option<WaterSample>,
    hab: Option<HabConditions>,
    species_scores: Option<Vec<f64>>,
}

#[derive(Serialize)]
struct Report {
    marine_health: MarineHealthAssessment,
    hab: HabAssessment,
    plastic: PlasticReport,
    coral: CoralReport,
    oil_spill: OilSpillReport,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marine_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Optional table override
    let scorer = match std::env::var("MARINE_TABLES") {
        Ok(path) => {
            tracing::info!("Using category tables from {}", path);
            MarineScorer::from_config(Path::new(&path))?
        }
        Err(_) => MarineScorer::new(),
    };

    let request = match std::env::args().nth(1) {
        Some(path) => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read request file: {}", path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse request JSON")?
        }
        None => Request::default(),
    };

    let water = request.water.unwrap_or_default();
    let hab = request.hab.unwrap_or_default();

    let marine_health = match &request.species_scores {
        Some(scores) => scorer.assess_marine_health_with(&water, scores)?,
        None => scorer.assess_marine_health(&water)?,
    };

    let report = Report {
        marine_health,
        hab: scorer.assess_hab(&hab),
        plastic: scorer.plastic_report(),
        coral: scorer.coral_report()?,
        oil_spill: scorer.oil_spill_report(),
    };

    tracing::info!(
        "Water quality {:.1}%, HAB risk {} ({:.1}%)",
        report.marine_health.water_quality.score * 100.0,
        report.hab.level,
        report.hab.risk.score * 100.0
    );

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

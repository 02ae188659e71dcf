use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use brandrec_core::category;
use brandrec_core::config::BrandrecConfig;
use brandrec_core::models::RawRecommendationRequest;
use brandrec_core::{BrandrecResult, Recommendation};
use brandrec_engine::RecommendationEngine;
use tracing::error;

use crate::output;
use crate::{RecommendArgs, EXIT_FAILURE, EXIT_INPUT_ERROR};

pub fn recommend(config: &BrandrecConfig, args: RecommendArgs) -> anyhow::Result<ExitCode> {
    let engine = RecommendationEngine::from_config(config).context("loading model artifacts")?;
    let raw = RawRecommendationRequest {
        stars: args.stars,
        price: args.price,
        operating_system: args.os,
        speaker: args.speaker,
        refresh_rate: args.frequency,
        picture_quality: args.picture_quality,
    };

    match engine.recommend_raw(&raw) {
        Ok(rec) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                print!("{}", output::render_table(&rec));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_input_error() => {
            eprintln!("input error: {e}");
            Ok(ExitCode::from(EXIT_INPUT_ERROR))
        }
        Err(e) => {
            eprintln!("unexpected error: {}", e.coded_message());
            Ok(ExitCode::from(EXIT_FAILURE))
        }
    }
}

pub fn categories() -> anyhow::Result<ExitCode> {
    print!("{}", output::render_categories(&category::all_tables()));
    Ok(ExitCode::SUCCESS)
}

pub fn batch(config: &BrandrecConfig, file: &Path) -> anyhow::Result<ExitCode> {
    let contents =
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let raws: Vec<RawRecommendationRequest> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", file.display()))?;
    let engine = RecommendationEngine::from_config(config).context("loading model artifacts")?;

    let results = recommend_all(&engine, &raws);
    let mut model_failure = false;
    for (index, result) in results.iter().enumerate() {
        if let Err(e) = result {
            model_failure |= !e.is_input_error();
        }
        println!("{}", serde_json::to_string(&output::BatchLine::new(index, result))?);
    }

    if model_failure {
        error!("batch finished with inference failures");
        return Ok(ExitCode::from(EXIT_FAILURE));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse every raw request, rank the valid ones in one parallel batch, and
/// merge the results back into input order.
fn recommend_all(
    engine: &RecommendationEngine,
    raws: &[RawRecommendationRequest],
) -> Vec<BrandrecResult<Recommendation>> {
    let mut results: Vec<Option<BrandrecResult<Recommendation>>> = Vec::with_capacity(raws.len());
    let mut valid = Vec::new();
    let mut slots = Vec::new();
    for raw in raws {
        match raw.parse() {
            Ok(request) => {
                slots.push(results.len());
                valid.push(request);
                results.push(None);
            }
            Err(e) => results.push(Some(Err(e))),
        }
    }

    for (slot, result) in slots.into_iter().zip(engine.recommend_batch(&valid)) {
        results[slot] = Some(result);
    }
    results.into_iter().flatten().collect()
}

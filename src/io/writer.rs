//! CSV table writers.
//!
//! Headers are written unconditionally so an empty mining result still
//! produces a well-formed table.
use std::fs::File;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::aggregate::{GlobalSeed, LocalSeed};
use crate::error::Error;
use crate::lexicon::title_case;
use crate::nlp::Polarity;
use crate::sources::PartitionId;

/// Serialize a weight with exactly four fractional digits.
fn fixed4<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!("{value:.4}"))
}

#[derive(Debug, Serialize)]
struct SeedRow<'a> {
    feature_name: String,
    seed_phrase: &'a str,
    #[serde(serialize_with = "fixed4")]
    weight: f64,
}

#[derive(Debug, Serialize)]
struct PartitionSeedRow<'a> {
    source: &'a str,
    group: &'a str,
    feature_name: String,
    seed_phrase: &'a str,
    #[serde(serialize_with = "fixed4")]
    weight: f64,
}

/// Write the global seed table `feature_name,seed_phrase,weight`: aspects
/// title-cased, weights at four fractional digits, rows in the given order.
pub fn write_seed_table(path: &Path, seeds: &[GlobalSeed]) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["feature_name", "seed_phrase", "weight"])?;
    for seed in seeds {
        writer.serialize(SeedRow {
            feature_name: title_case(&seed.aspect),
            seed_phrase: &seed.phrase,
            weight: seed.weight,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the per-partition seed table
/// `source,group,feature_name,seed_phrase,weight` in the given partition
/// order, each partition's rows in their given order.
pub fn write_partition_seed_table(
    path: &Path,
    partitions: &[(PartitionId, Vec<LocalSeed>)],
) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["source", "group", "feature_name", "seed_phrase", "weight"])?;
    for (id, seeds) in partitions {
        for seed in seeds {
            writer.serialize(PartitionSeedRow {
                source: &id.source,
                group: &id.group,
                feature_name: title_case(&seed.aspect),
                seed_phrase: &seed.phrase,
                weight: seed.average,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// One review-table row; `aspect_scores` runs parallel to the writer's
/// aspect columns, `None` for aspects the review never touched.
#[derive(Debug, Clone)]
pub struct ReviewRecord {
    pub source: String,
    pub group: String,
    pub date: String,
    pub subject: String,
    pub body: String,
    pub compound: f64,
    pub aspect_scores: Vec<Option<f64>>,
}

/// Writer for the per-review score table. Columns depend on the lexicon, so
/// the header is assembled at construction from the aspect list.
pub struct ReviewTableWriter {
    writer: csv::Writer<File>,
    aspect_count: usize,
}

impl ReviewTableWriter {
    /// Create the table at `path` with one `{aspect}_score,{aspect}_label`
    /// column pair per aspect, in the given aspect order.
    pub fn create(path: &Path, aspects: &[String]) -> Result<Self, Error> {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
        let mut header: Vec<String> = [
            "source",
            "group",
            "date",
            "subject",
            "review",
            "sentiment",
            "compound",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        for aspect in aspects {
            header.push(format!("{aspect}_score"));
            header.push(format!("{aspect}_label"));
        }
        writer.write_record(&header)?;
        Ok(Self {
            writer,
            aspect_count: aspects.len(),
        })
    }

    pub fn write(&mut self, record: &ReviewRecord) -> Result<(), Error> {
        if record.aspect_scores.len() != self.aspect_count {
            return Err(Error::Custom(format!(
                "record carries {} aspect scores, table has {} aspect columns",
                record.aspect_scores.len(),
                self.aspect_count
            )));
        }
        let mut fields: Vec<String> = vec![
            record.source.clone(),
            record.group.clone(),
            record.date.clone(),
            record.subject.clone(),
            record.body.clone(),
            Polarity::from_compound(record.compound).as_str().to_string(),
            format!("{:.4}", record.compound),
        ];
        for score in &record.aspect_scores {
            match score {
                Some(value) => {
                    fields.push(format!("{value:.4}"));
                    fields.push(Polarity::from_compound(*value).as_str().to_string());
                }
                None => {
                    fields.push(String::new());
                    fields.push(String::new());
                }
            }
        }
        self.writer.write_record(&fields)?;
        Ok(())
    }

    /// Flush and close the table.
    pub fn finish(mut self) -> Result<(), Error> {
        self.writer.flush()?;
        Ok(())
    }
}

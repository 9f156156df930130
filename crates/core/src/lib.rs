//! Core types for the PIVOT interview insight pipeline
//!
//! This crate provides the foundational types shared by every stage of the
//! pipeline (morphology, classification, parsing, engine orchestration):
//! - The PIVOT voice taxonomy and target-layer/temperature tags
//! - Utterance and interview document types
//! - Morphology feature bundles
//! - Classified insights and classification results
//! - Mart record types (the serialization boundary)
//! - The `Lexicon` trait seam for calibration data
//! - The crate-wide error type

pub mod classification;
pub mod error;
pub mod insight;
pub mod layer;
pub mod lexicon;
pub mod mart;
pub mod metadata;
pub mod morphology_types;
pub mod temperature;
pub mod utterance;
pub mod voice;

pub use classification::{ClassificationResult, ClassificationStats};
pub use error::{Error, Result};
pub use insight::{ExtractionMethod, PIVOTInsight};
pub use layer::{Layer, TargetLayers};
pub use lexicon::Lexicon;
pub use mart::{
    InsightRecord, KeywordsField, MartRecord, PeriodRef, PivotDistributionEntry, PriorityMatrix,
    ProcessBucket, SourceRef, SourceTime, SummaryRecord,
};
pub use metadata::{InterviewMetadata, QASection};
pub use morphology_types::{
    AdjectiveInfo, AdjectiveSentiment, AdverbInfo, MorphologyFeatures, TailInfo, TailType,
    VerbCategory, VerbInfo,
};
pub use temperature::Temperature;
pub use utterance::{Provenance, Utterance};
pub use voice::{Voice, SCORES};

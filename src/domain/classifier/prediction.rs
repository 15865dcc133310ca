//! Prediction result and logit ranking

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::ClassifierError;

/// Probability assigned to a single class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub class: String,
    pub probability: f32,
}

/// Ranked output of one forward pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_class: String,
    pub confidence: String,
    pub probabilities: Vec<ClassProbability>,
}

impl PredictionResult {
    /// Build a ranked prediction from raw logits.
    ///
    /// `labels` and `logits` must have the same length; the logits are turned
    /// into a distribution with softmax and stably sorted in descending
    /// order, so equal probabilities keep the label order.
    pub fn from_logits(labels: &[&str], logits: &[f32]) -> Result<Self, ClassifierError> {
        if labels.is_empty() || labels.len() != logits.len() {
            return Err(ClassifierError::OutputArity {
                expected: labels.len(),
                actual: logits.len(),
            });
        }

        let mut probabilities: Vec<ClassProbability> = labels
            .iter()
            .zip(softmax(logits))
            .map(|(label, probability)| ClassProbability {
                class: (*label).to_string(),
                probability,
            })
            .collect();

        probabilities.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(Ordering::Equal)
        });

        let top = &probabilities[0];

        Ok(Self {
            predicted_class: top.class.clone(),
            confidence: format_confidence(top.probability),
            probabilities,
        })
    }
}

/// Numerically stable softmax
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f32 = exps.iter().sum();

    exps.into_iter().map(|e| e / sum).collect()
}

fn format_confidence(probability: f32) -> String {
    format!("{:.2}%", probability * 100.0)
}

//! YAML schema definitions for the fine-tuning run specification

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::generate::GenerationConfig;
use crate::lora::LoraConfig;

/// Complete fine-tuning run specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinetuneSpec {
    /// Model configuration
    pub model: ModelRef,

    /// Data configuration
    pub data: DataConfig,

    /// Optimizer configuration
    pub optimizer: OptimSpec,

    /// Optional LoRA configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lora: Option<LoraSpec>,

    /// Training hyperparameters
    #[serde(default)]
    pub training: TrainingParams,

    /// Optional sampling settings for evaluation generations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<GenerationParams>,
}

/// Base model reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRef {
    /// Model identifier or local path
    pub name: String,

    /// Token budget per rendered example
    #[serde(default = "default_max_seq_len")]
    pub max_seq_len: usize,
}

/// Data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Dataset identifier or local path
    pub dataset: String,

    /// Fraction of examples held out for testing
    #[serde(default = "default_test_size")]
    pub test_size: f64,

    /// Shuffle seed for the split
    #[serde(default)]
    pub seed: u64,

    /// Per-device train batch size
    pub batch_size: usize,

    /// Per-device eval batch size (defaults to `batch_size`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_batch_size: Option<usize>,
}

impl DataConfig {
    /// Effective eval batch size
    pub fn eval_batch_size(&self) -> usize {
        self.eval_batch_size.unwrap_or(self.batch_size)
    }
}

/// Optimizer specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimSpec {
    /// Optimizer name: "adamw" | "adam" | "sgd"
    pub name: String,

    /// Learning rate
    pub lr: f32,

    /// Optimizer-specific parameters (weight_decay, beta1, momentum, etc.)
    #[serde(flatten)]
    pub params: HashMap<String, serde_json::Value>,
}

/// LoRA adapter settings as written in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoraSpec {
    /// Rank of the low-rank decomposition
    pub rank: usize,

    /// Scaling factor (alpha)
    pub alpha: f32,

    /// Dropout probability
    #[serde(default)]
    pub dropout: f32,

    /// Target modules (e.g., [q_proj, v_proj])
    pub target_modules: Vec<String>,

    /// Modules trained and saved in full
    #[serde(default)]
    pub modules_to_save: Vec<String>,
}

impl LoraSpec {
    /// Bridge into the runtime adapter configuration
    pub fn to_config(&self) -> LoraConfig {
        let targets: Vec<&str> = self.target_modules.iter().map(String::as_str).collect();
        let saved: Vec<&str> = self.modules_to_save.iter().map(String::as_str).collect();
        LoraConfig::new(self.rank, self.alpha)
            .target_modules(&targets)
            .save_modules(&saved)
            .with_dropout(self.dropout)
    }
}

/// Training hyperparameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingParams {
    /// Number of epochs
    #[serde(default = "default_epochs")]
    pub epochs: usize,

    /// Hard cap on optimizer steps (overrides epochs when set)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,

    /// Gradient accumulation steps (1 = no accumulation)
    #[serde(default = "default_grad_accum")]
    pub gradient_accumulation_steps: usize,

    /// Gradient clipping threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_grad_norm: Option<f32>,

    /// Learning rate scheduler: "cosine" | "linear" | "constant"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lr_scheduler: Option<String>,

    /// Fraction of steps spent warming up
    #[serde(default)]
    pub warmup_ratio: f32,

    /// Recompute activations in the backward pass to save memory
    #[serde(default)]
    pub gradient_checkpointing: bool,

    /// Pack short examples into full-length sequences
    #[serde(default)]
    pub packing: bool,

    /// Log metrics every N steps
    #[serde(default = "default_logging_steps")]
    pub logging_steps: usize,

    /// Keep at most N checkpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_total_limit: Option<usize>,

    /// Output directory for checkpoints
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            epochs: default_epochs(),
            max_steps: None,
            gradient_accumulation_steps: default_grad_accum(),
            max_grad_norm: None,
            lr_scheduler: None,
            warmup_ratio: 0.0,
            gradient_checkpointing: false,
            packing: false,
            logging_steps: default_logging_steps(),
            save_total_limit: None,
            output_dir: default_output_dir(),
        }
    }
}

/// Sampling settings as written in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: usize,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_top_p")]
    pub top_p: f32,

    #[serde(default = "default_repetition_penalty")]
    pub repetition_penalty: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            repetition_penalty: default_repetition_penalty(),
        }
    }
}

impl GenerationParams {
    /// Bridge into the runtime generation configuration
    pub fn to_config(&self) -> GenerationConfig {
        GenerationConfig::new()
            .with_max_new_tokens(self.max_new_tokens)
            .with_temperature(self.temperature)
            .with_top_p(self.top_p)
            .with_repetition_penalty(self.repetition_penalty)
    }
}

fn default_max_seq_len() -> usize {
    2048
}

fn default_test_size() -> f64 {
    0.2
}

fn default_epochs() -> usize {
    1
}

fn default_grad_accum() -> usize {
    1
}

fn default_logging_steps() -> usize {
    10
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./outputs")
}

fn default_max_new_tokens() -> usize {
    256
}

fn default_temperature() -> f32 {
    0.01
}

fn default_top_p() -> f32 {
    0.95
}

fn default_repetition_penalty() -> f32 {
    1.0
}

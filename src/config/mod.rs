//! Declarative YAML run specification
//!
//! A fine-tuning run is described in one YAML file: which model, which
//! dataset, the optimizer, the adapter, the training schedule, and how
//! evaluation generations are sampled.
//!
//! # Example
//!
//! ```yaml
//! model:
//!   name: gemma-3n-E2B-it
//!   max_seq_len: 2048
//!
//! data:
//!   dataset: hermes-function-calling-v1
//!   test_size: 0.2
//!   batch_size: 1
//!
//! optimizer:
//!   name: adamw
//!   lr: 1e-4
//!   weight_decay: 0.1
//!
//! lora:
//!   rank: 16
//!   alpha: 64
//!   dropout: 0.05
//!   target_modules: [q_proj, k_proj, v_proj, o_proj]
//! ```

mod cli;
mod load;
mod schema;
mod validate;


pub use cli::{
    apply_overrides, parse_args, Cli, Command, EvalArgs, InfoArgs, OutputFormat, PrepareArgs,
    ValidateArgs,
};
pub use load::{load_config, parse_config};
pub use schema::{
    DataConfig, FinetuneSpec, GenerationParams, LoraSpec, ModelRef, OptimSpec, TrainingParams,
};
pub use validate::{validate_config, ValidationError};

//! Configuration validation

use super::schema::FinetuneSpec;

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Model name must not be empty")]
    EmptyModelName,

    #[error("Dataset must not be empty")]
    EmptyDataset,

    #[error("Invalid max_seq_len: {0} (must be > 0)")]
    InvalidMaxSeqLen(usize),

    #[error("Invalid batch size: {0} (must be > 0)")]
    InvalidBatchSize(usize),

    #[error("Invalid test_size: {0} (must be in (0, 1))")]
    InvalidTestSize(f64),

    #[error("Invalid learning rate: {0} (must be > 0.0)")]
    InvalidLearningRate(f32),

    #[error("Invalid optimizer: {0} (must be one of: adamw, adam, sgd)")]
    InvalidOptimizer(String),

    #[error("Invalid epochs: {0} (must be > 0)")]
    InvalidEpochs(usize),

    #[error("Invalid gradient clip value: {0} (must be > 0.0)")]
    InvalidGradClip(f32),

    #[error("Invalid lr scheduler: {0} (must be one of: cosine, linear, constant)")]
    InvalidScheduler(String),

    #[error("Invalid warmup_ratio: {0} (must be in [0, 1))")]
    InvalidWarmupRatio(f32),

    #[error("Invalid LoRA rank: {0} (must be > 0)")]
    InvalidLoraRank(usize),

    #[error("Invalid LoRA dropout: {0} (must be in [0, 1))")]
    InvalidLoraDropout(f32),

    #[error("LoRA target_modules must not be empty")]
    EmptyLoraTargets,

    #[error("Invalid max_new_tokens: {0} (must be > 0)")]
    InvalidMaxNewTokens(usize),

    #[error("Invalid temperature: {0} (must be > 0.0)")]
    InvalidTemperature(f32),

    #[error("Invalid top_p: {0} (must be in (0, 1])")]
    InvalidTopP(f32),
}

/// Validate a fine-tuning run specification
///
/// Checks:
/// - Identifiers are present
/// - Numeric values are in valid ranges
/// - Enumerated names match allowed values
pub fn validate_config(spec: &FinetuneSpec) -> Result<(), ValidationError> {
    if spec.model.name.trim().is_empty() {
        return Err(ValidationError::EmptyModelName);
    }

    if spec.model.max_seq_len == 0 {
        return Err(ValidationError::InvalidMaxSeqLen(spec.model.max_seq_len));
    }

    if spec.data.dataset.trim().is_empty() {
        return Err(ValidationError::EmptyDataset);
    }

    if spec.data.batch_size == 0 {
        return Err(ValidationError::InvalidBatchSize(spec.data.batch_size));
    }

    if !(spec.data.test_size > 0.0 && spec.data.test_size < 1.0) {
        return Err(ValidationError::InvalidTestSize(spec.data.test_size));
    }

    if spec.optimizer.lr <= 0.0 {
        return Err(ValidationError::InvalidLearningRate(spec.optimizer.lr));
    }

    let valid_optimizers = ["adamw", "adam", "sgd"];
    if !valid_optimizers.contains(&spec.optimizer.name.as_str()) {
        return Err(ValidationError::InvalidOptimizer(
            spec.optimizer.name.clone(),
        ));
    }

    if spec.training.epochs == 0 {
        return Err(ValidationError::InvalidEpochs(spec.training.epochs));
    }

    if let Some(max_grad_norm) = spec.training.max_grad_norm {
        if max_grad_norm <= 0.0 {
            return Err(ValidationError::InvalidGradClip(max_grad_norm));
        }
    }

    if let Some(scheduler) = &spec.training.lr_scheduler {
        let valid_schedulers = ["cosine", "linear", "constant"];
        if !valid_schedulers.contains(&scheduler.as_str()) {
            return Err(ValidationError::InvalidScheduler(scheduler.clone()));
        }
    }

    if !(0.0..1.0).contains(&spec.training.warmup_ratio) {
        return Err(ValidationError::InvalidWarmupRatio(
            spec.training.warmup_ratio,
        ));
    }

    if let Some(lora) = &spec.lora {
        if lora.rank == 0 {
            return Err(ValidationError::InvalidLoraRank(lora.rank));
        }
        if !(0.0..1.0).contains(&lora.dropout) {
            return Err(ValidationError::InvalidLoraDropout(lora.dropout));
        }
        if lora.target_modules.is_empty() {
            return Err(ValidationError::EmptyLoraTargets);
        }
    }

    if let Some(generation) = &spec.generation {
        if generation.max_new_tokens == 0 {
            return Err(ValidationError::InvalidMaxNewTokens(
                generation.max_new_tokens,
            ));
        }
        if generation.temperature <= 0.0 {
            return Err(ValidationError::InvalidTemperature(generation.temperature));
        }
        if !(generation.top_p > 0.0 && generation.top_p <= 1.0) {
            return Err(ValidationError::InvalidTopP(generation.top_p));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::*;
    use std::collections::HashMap;

    fn create_valid_spec() -> FinetuneSpec {
        FinetuneSpec {
            model: ModelRef {
                name: "gemma-3n-E2B-it".to_string(),
                max_seq_len: 2048,
            },
            data: DataConfig {
                dataset: "hermes-function-calling-v1".to_string(),
                test_size: 0.2,
                seed: 0,
                batch_size: 1,
                eval_batch_size: None,
            },
            optimizer: OptimSpec {
                name: "adamw".to_string(),
                lr: 1e-4,
                params: HashMap::new(),
            },
            lora: None,
            training: TrainingParams::default(),
            generation: None,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&create_valid_spec()).is_ok());
    }

    #[test]
    fn test_empty_model_name() {
        let mut spec = create_valid_spec();
        spec.model.name = "  ".to_string();
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyModelName));
    }

    #[test]
    fn test_invalid_batch_size() {
        let mut spec = create_valid_spec();
        spec.data.batch_size = 0;
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidBatchSize(0)));
    }

    #[test]
    fn test_invalid_test_size() {
        let mut spec = create_valid_spec();
        spec.data.test_size = 1.0;
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTestSize(_)));
    }

    #[test]
    fn test_invalid_learning_rate() {
        let mut spec = create_valid_spec();
        spec.optimizer.lr = 0.0;
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidLearningRate(_)));
    }

    #[test]
    fn test_invalid_optimizer() {
        let mut spec = create_valid_spec();
        spec.optimizer.name = "adamw_torch_fused".to_string();
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidOptimizer(_)));
    }

    #[test]
    fn test_invalid_scheduler() {
        let mut spec = create_valid_spec();
        spec.training.lr_scheduler = Some("polynomial".to_string());
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidScheduler(_)));
    }

    #[test]
    fn test_invalid_warmup_ratio() {
        let mut spec = create_valid_spec();
        spec.training.warmup_ratio = 1.0;
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidWarmupRatio(_)));
    }

    #[test]
    fn test_invalid_lora_rank() {
        let mut spec = create_valid_spec();
        spec.lora = Some(LoraSpec {
            rank: 0,
            alpha: 16.0,
            dropout: 0.0,
            target_modules: vec!["q_proj".to_string()],
            modules_to_save: vec![],
        });
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidLoraRank(0)));
    }

    #[test]
    fn test_empty_lora_targets() {
        let mut spec = create_valid_spec();
        spec.lora = Some(LoraSpec {
            rank: 16,
            alpha: 16.0,
            dropout: 0.0,
            target_modules: vec![],
            modules_to_save: vec![],
        });
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyLoraTargets));
    }

    #[test]
    fn test_invalid_generation_settings() {
        let mut spec = create_valid_spec();
        spec.generation = Some(GenerationParams {
            temperature: 0.0,
            ..GenerationParams::default()
        });
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTemperature(_)));

        spec.generation = Some(GenerationParams {
            top_p: 1.5,
            ..GenerationParams::default()
        });
        let err = validate_config(&spec).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTopP(_)));
    }
}

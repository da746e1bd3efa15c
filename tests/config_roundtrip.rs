//! Integration tests for loading run specifications from disk

use std::io::Write;

use tempfile::NamedTempFile;

use afinar::config::{load_config, validate_config};

const FUNCTION_CALLING_RUN: &str = r#"
model:
  name: gemma-3n-E4B-it
  max_seq_len: 2048

data:
  dataset: hermes-function-calling-v1
  test_size: 0.2
  seed: 0
  batch_size: 1
  eval_batch_size: 24

optimizer:
  name: adamw
  lr: 0.0001
  weight_decay: 0.1

lora:
  rank: 16
  alpha: 64
  dropout: 0.05
  target_modules:
    - embed_tokens
    - q_proj
    - k_proj
    - v_proj
    - gate_proj
    - up_proj
    - down_proj
    - o_proj
    - lm_head
  modules_to_save: [embed_tokens, lm_head]

training:
  epochs: 1
  gradient_accumulation_steps: 4
  max_grad_norm: 1.0
  lr_scheduler: cosine
  warmup_ratio: 0.1
  gradient_checkpointing: true
  packing: true
  logging_steps: 5
  save_total_limit: 2
  output_dir: ./gemma-3n-function-calling

generation:
  max_new_tokens: 256
  temperature: 0.01
  top_p: 0.95
  repetition_penalty: 1.0
"#;

#[test]
fn load_full_function_calling_run() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FUNCTION_CALLING_RUN.as_bytes()).unwrap();

    let spec = load_config(file.path()).unwrap();
    assert!(validate_config(&spec).is_ok());

    let lora = spec.lora.as_ref().unwrap();
    assert_eq!(lora.target_modules.len(), 9);

    let adapter = lora.to_config();
    assert!(adapter.should_apply("embed_tokens"));
    assert!(adapter.should_apply("lm_head"));
    assert!((adapter.scaling() - 4.0).abs() < 1e-6);

    let generation = spec.generation.as_ref().unwrap().to_config();
    assert!(generation.validate().is_ok());
}

#[test]
fn reject_run_with_bad_scheduler() {
    let yaml = FUNCTION_CALLING_RUN.replace("lr_scheduler: cosine", "lr_scheduler: cyclic");

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    assert!(load_config(file.path()).is_err());
}

#[test]
fn reject_run_with_zero_rank() {
    let yaml = FUNCTION_CALLING_RUN.replace("rank: 16", "rank: 0");

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    assert!(load_config(file.path()).is_err());
}

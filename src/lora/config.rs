//! LoRA configuration for target module selection.

use std::collections::HashSet;

/// Configuration for LoRA adapter targeting
///
/// Selects which modules receive low-rank adapters, commonly the
/// transformer attention projections (q/k/v/o_proj), and optionally which
/// full modules (embeddings, output head) are trained and saved whole.
#[derive(Clone, Debug, PartialEq)]
pub struct LoraConfig {
    /// Rank of the low-rank decomposition
    pub rank: usize,
    /// Alpha scaling parameter
    pub alpha: f32,
    /// Dropout probability applied to adapter inputs
    pub dropout: f32,
    /// Target module names (e.g., "q_proj", "v_proj")
    pub target_modules: HashSet<String>,
    /// Modules trained and saved in full rather than adapted
    pub modules_to_save: Vec<String>,
    /// Whether to adapt every linear layer regardless of name
    pub all_linear: bool,
}

impl LoraConfig {
    /// Create a new LoRA configuration
    ///
    /// # Arguments
    /// * `rank` - rank of the decomposition (typically 4, 8, 16, 32, or 64)
    /// * `alpha` - scaling parameter (often equal to or a multiple of rank)
    pub fn new(rank: usize, alpha: f32) -> Self {
        Self {
            rank,
            alpha,
            dropout: 0.0,
            target_modules: HashSet::new(),
            modules_to_save: Vec::new(),
            all_linear: false,
        }
    }

    /// Target specific modules by name
    pub fn target_modules(mut self, modules: &[&str]) -> Self {
        self.target_modules = modules.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Target the attention projections (q, k, v, o)
    pub fn target_attention_projections(mut self) -> Self {
        self.target_modules = ["q_proj", "k_proj", "v_proj", "o_proj"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        self
    }

    /// Target embeddings, attention, MLP, and the output head
    ///
    /// The widest selection, used when new special tokens must be learned
    /// along with the task.
    pub fn target_full_stack(mut self) -> Self {
        self.target_modules = [
            "embed_tokens",
            "q_proj",
            "k_proj",
            "v_proj",
            "gate_proj",
            "up_proj",
            "down_proj",
            "o_proj",
            "lm_head",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        self
    }

    /// Adapt every linear layer
    pub fn all_linear_layers(mut self) -> Self {
        self.all_linear = true;
        self
    }

    /// Set adapter dropout
    pub fn with_dropout(mut self, dropout: f32) -> Self {
        self.dropout = dropout;
        self
    }

    /// Train and save these modules in full alongside the adapters
    pub fn save_modules(mut self, modules: &[&str]) -> Self {
        self.modules_to_save = modules.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Check whether a module should have an adapter applied
    pub fn should_apply(&self, module_name: &str) -> bool {
        if self.all_linear {
            module_name.ends_with("proj") || module_name.ends_with("linear")
        } else {
            self.target_modules.contains(module_name)
        }
    }

    /// Adapter output scaling, `alpha / rank`
    pub fn scaling(&self) -> f32 {
        self.alpha / self.rank as f32
    }

    /// Number of explicitly targeted modules
    pub fn num_target_modules(&self) -> usize {
        self.target_modules.len()
    }
}

impl Default for LoraConfig {
    /// Default configuration: rank=16, alpha=16, attention projections
    fn default() -> Self {
        Self::new(16, 16.0).target_attention_projections()
    }
}

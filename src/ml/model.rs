use burn::{
    nn::{
        Embedding, EmbeddingConfig, Initializer,
        Linear, LinearConfig,
    },
    prelude::*,
    tensor::backend::AutodiffBackend,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct SkipGramConfig {
    /// Rows of the embedding table: the context-side vocabulary.
    /// Equals the ingredient vocabulary for the co-occurrence model
    /// and the recipe vocabulary for the membership model.
    pub input_vocab_size: usize,
    /// Classes of the softmax projection: the target-side vocabulary.
    /// The ingredient vocabulary for both models.
    pub output_vocab_size: usize,
    pub emb_dim: usize,
}

impl SkipGramConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SkipGramModel<B> {
        let embeddings = EmbeddingConfig::new(self.input_vocab_size, self.emb_dim)
            .with_initializer(Initializer::Uniform { min: -1.0, max: 1.0 })
            .init(device);
        let output = LinearConfig::new(self.emb_dim, self.output_vocab_size)
            .with_initializer(Initializer::Normal {
                mean: 0.0,
                std: 1.0 / (self.emb_dim as f64).sqrt(),
            })
            .init(device);
        SkipGramModel {
            embeddings,
            output,
            emb_dim: self.emb_dim,
        }
    }
}

#[derive(Module, Debug)]
pub struct SkipGramModel<B: Backend> {
    pub embeddings: Embedding<B>,
    pub output: Linear<B>,
    pub emb_dim: usize,
}

impl<B: Backend> SkipGramModel<B> {
    /// contexts: [batch] → logits over the target vocabulary: [batch, output_vocab]
    pub fn forward(&self, contexts: Tensor<B, 1, Int>) -> Tensor<B, 2> {
        let [batch_size] = contexts.dims();

        // Embedding expects [batch, seq]; a skip-gram context is a
        // single token, so seq is 1.
        let embedded = self
            .embeddings
            .forward(contexts.reshape([batch_size, 1]))
            .reshape([batch_size, self.emb_dim]);

        self.output.forward(embedded)
    }

    /// Cross-entropy over the full target vocabulary. Targets arrive
    /// as the [batch, 1] column the batch cursor contract specifies
    /// and are flattened for the loss.
    pub fn forward_loss(
        &self,
        contexts: Tensor<B, 1, Int>,
        targets: Tensor<B, 2, Int>,
    ) -> Tensor<B, 1>
    where
        B: AutodiffBackend,
    {
        let logits = self.forward(contexts);
        let [batch_size, _] = logits.dims();
        let targets = targets.reshape([batch_size]);

        let ce = burn::nn::loss::CrossEntropyLossConfig::new().init(&logits.device());
        ce.forward(logits, targets)
    }

    /// The embedding table with each row scaled to unit L2 norm,
    /// for cosine-comparable vectors in the visualisation step.
    pub fn normalized_embeddings(&self) -> Tensor<B, 2> {
        let table = self.embeddings.weight.val();
        let norm = table.clone().powf_scalar(2.0).sum_dim(1).sqrt();
        table / norm
    }
}

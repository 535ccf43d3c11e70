//! Two-layer MLP with manual backpropagation.
//!
//! Architecture: input → hidden (ReLU) → output (softmax). Training runs
//! per-sample gradient descent with a learning rate that decays linearly to
//! zero across the epoch range.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;
use crate::error::{EngineError, EngineResult};

use super::params::NetworkParameters;

/// Floor for predicted probabilities inside the log term, preventing
/// cross-entropy underflow to -inf.
const LOG_CLAMP: f32 = 1e-10;

/// Per-epoch loss and accuracy history returned by [`MoodNetwork::train`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingHistory {
    pub losses: Vec<f32>,
    pub accuracies: Vec<f32>,
}

impl TrainingHistory {
    /// A single zeroed entry, used when there was nothing to train on.
    pub fn degenerate() -> Self {
        Self {
            losses: vec![0.0],
            accuracies: vec![0.0],
        }
    }

    pub fn final_loss(&self) -> f32 {
        self.losses.last().copied().unwrap_or(0.0)
    }

    pub fn final_accuracy(&self) -> f32 {
        self.accuracies.last().copied().unwrap_or(0.0)
    }
}

/// Simple MLP: Input → Hidden (ReLU) → Output (Softmax)
pub struct MoodNetwork {
    config: NetworkConfig,
    seed: u64,
    initialized: bool,
    // Layer 1: input → hidden
    w1: Array2<f32>, // [hidden_size, input_size]
    b1: Array1<f32>, // [hidden_size]
    // Layer 2: hidden → output
    w2: Array2<f32>, // [output_size, hidden_size]
    b2: Array1<f32>, // [output_size]
}

impl MoodNetwork {
    /// Create a network with zeroed weights. Weights are drawn on the first
    /// call to [`initialize`](Self::initialize) or [`train`](Self::train);
    /// the prediction model constructor initializes eagerly.
    pub fn new(config: NetworkConfig, seed: u64) -> Self {
        Self {
            w1: Array2::zeros((config.hidden_size, config.input_size)),
            b1: Array1::zeros(config.hidden_size),
            w2: Array2::zeros((config.output_size, config.hidden_size)),
            b2: Array1::zeros(config.output_size),
            config,
            seed,
            initialized: false,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Xavier/Glorot initialization: weights drawn from
    /// `Normal(0, sqrt(2 / (fan_in + fan_out)))`, biases zero.
    ///
    /// Idempotent: a second call leaves already-initialized weights alone.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);

        let std1 = (2.0 / (self.config.input_size + self.config.hidden_size) as f32).sqrt();
        let normal1 = Normal::new(0.0f32, std1).expect("std dev is finite and positive");
        self.w1 = Array2::from_shape_fn((self.config.hidden_size, self.config.input_size), |_| {
            normal1.sample(&mut rng)
        });
        self.b1 = Array1::zeros(self.config.hidden_size);

        let std2 = (2.0 / (self.config.hidden_size + self.config.output_size) as f32).sqrt();
        let normal2 = Normal::new(0.0f32, std2).expect("std dev is finite and positive");
        self.w2 = Array2::from_shape_fn((self.config.output_size, self.config.hidden_size), |_| {
            normal2.sample(&mut rng)
        });
        self.b2 = Array1::zeros(self.config.output_size);

        self.initialized = true;
    }

    /// ReLU activation
    fn relu(x: &Array1<f32>) -> Array1<f32> {
        x.mapv(|v| v.max(0.0))
    }

    /// ReLU derivative
    fn relu_derivative(x: &Array1<f32>) -> Array1<f32> {
        x.mapv(|v| if v > 0.0 { 1.0 } else { 0.0 })
    }

    /// Softmax with row-max subtraction for numerical stability.
    fn softmax(x: &Array1<f32>) -> Array1<f32> {
        let max = x.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let exp: Array1<f32> = x.mapv(|v| (v - max).exp());
        let sum: f32 = exp.sum();
        exp / sum
    }

    /// Forward pass with intermediate activations cached for backprop.
    fn forward_with_cache(&self, input: &Array1<f32>) -> (Array1<f32>, Array1<f32>, Array1<f32>) {
        // Hidden layer: z1 = W1 * x + b1
        let z1 = self.w1.dot(input) + &self.b1;
        let h1 = Self::relu(&z1);

        // Output layer: z2 = W2 * h1 + b2
        let z2 = self.w2.dot(&h1) + &self.b2;
        let output = Self::softmax(&z2);

        (output, h1, z1)
    }

    /// Forward pass - class probability vector for one input.
    ///
    /// Pure with respect to network state; callers must have initialized the
    /// network (construction through the facade, `initialize`, or `train`).
    pub fn forward(&self, input: &Array1<f32>) -> Array1<f32> {
        let (output, _, _) = self.forward_with_cache(input);
        output
    }

    /// Index of the most probable class for one input.
    pub fn predict_class(&self, input: &Array1<f32>) -> usize {
        let probs = self.forward(input);
        argmax(&probs)
    }

    /// Train on `(input, one-hot target)` pairs for `epochs` full passes.
    ///
    /// Per sample: forward pass, cross-entropy loss with a `1e-10` clamp in
    /// the log term, then an in-place gradient update of both layers. The
    /// learning rate decays linearly: `lr * (1 - epoch / epochs)`.
    ///
    /// Zero samples is not an error; it returns a single zeroed history entry.
    pub fn train(
        &mut self,
        inputs: &[Array1<f32>],
        targets: &[Array1<f32>],
        epochs: usize,
    ) -> TrainingHistory {
        self.initialize();

        if inputs.is_empty() || epochs == 0 {
            return TrainingHistory::degenerate();
        }

        let sample_count = inputs.len().min(targets.len());
        let mut losses = Vec::with_capacity(epochs);
        let mut accuracies = Vec::with_capacity(epochs);

        for epoch in 0..epochs {
            let lr = self.config.learning_rate * (1.0 - epoch as f32 / epochs as f32);
            let mut epoch_loss = 0.0;
            let mut correct = 0usize;

            for (input, target) in inputs.iter().zip(targets.iter()).take(sample_count) {
                let (output, h1, z1) = self.forward_with_cache(input);

                let label_idx = argmax(target);
                epoch_loss += cross_entropy(&output, target);
                if argmax(&output) == label_idx {
                    correct += 1;
                }

                // Backward pass: dz2 is the softmax + cross-entropy gradient
                let mut dz2 = output;
                dz2[label_idx] -= 1.0;

                // Hidden layer gradient before W2 is touched
                let dh1 = self.w2.t().dot(&dz2);
                let dz1 = &dh1 * &Self::relu_derivative(&z1);

                // Layer 2 update
                for i in 0..self.config.output_size {
                    for j in 0..self.config.hidden_size {
                        self.w2[[i, j]] -= lr * dz2[i] * h1[j];
                    }
                    self.b2[i] -= lr * dz2[i];
                }

                // Layer 1 update
                for i in 0..self.config.hidden_size {
                    for j in 0..self.config.input_size {
                        self.w1[[i, j]] -= lr * dz1[i] * input[j];
                    }
                    self.b1[i] -= lr * dz1[i];
                }
            }

            losses.push(epoch_loss / sample_count as f32);
            accuracies.push(correct as f32 / sample_count as f32);
        }

        TrainingHistory { losses, accuracies }
    }

    /// Export the full trainable state for persistence.
    pub fn parameters(&self) -> NetworkParameters {
        NetworkParameters {
            weights1: self.w1.iter().cloned().collect(),
            weights2: self.w2.iter().cloned().collect(),
            bias1: self.b1.iter().cloned().collect(),
            bias2: self.b2.iter().cloned().collect(),
            config: self.config.clone(),
        }
    }

    /// Replace all weights and biases from an exported snapshot.
    ///
    /// Every shape is validated against the current config before any state
    /// is touched, so a failed import leaves the network unchanged.
    pub fn load_parameters(&mut self, params: &NetworkParameters) -> EngineResult<()> {
        let w1_len = self.config.hidden_size * self.config.input_size;
        let w2_len = self.config.output_size * self.config.hidden_size;

        if params.weights1.len() != w1_len {
            return Err(EngineError::shape_mismatch(
                w1_len,
                params.weights1.len(),
                "weights1",
            ));
        }
        if params.weights2.len() != w2_len {
            return Err(EngineError::shape_mismatch(
                w2_len,
                params.weights2.len(),
                "weights2",
            ));
        }
        if params.bias1.len() != self.config.hidden_size {
            return Err(EngineError::shape_mismatch(
                self.config.hidden_size,
                params.bias1.len(),
                "bias1",
            ));
        }
        if params.bias2.len() != self.config.output_size {
            return Err(EngineError::shape_mismatch(
                self.config.output_size,
                params.bias2.len(),
                "bias2",
            ));
        }

        self.w1 = Array2::from_shape_vec(
            (self.config.hidden_size, self.config.input_size),
            params.weights1.clone(),
        )
        .map_err(|_| EngineError::shape_mismatch(w1_len, params.weights1.len(), "weights1"))?;
        self.w2 = Array2::from_shape_vec(
            (self.config.output_size, self.config.hidden_size),
            params.weights2.clone(),
        )
        .map_err(|_| EngineError::shape_mismatch(w2_len, params.weights2.len(), "weights2"))?;
        self.b1 = Array1::from_vec(params.bias1.clone());
        self.b2 = Array1::from_vec(params.bias2.clone());
        self.initialized = true;

        Ok(())
    }
}

/// Cross-entropy loss: `-Σ target·log(clamp(output, 1e-10))`.
fn cross_entropy(output: &Array1<f32>, target: &Array1<f32>) -> f32 {
    -output
        .iter()
        .zip(target.iter())
        .map(|(&p, &t)| t * p.max(LOG_CLAMP).ln())
        .sum::<f32>()
}

fn argmax(values: &Array1<f32>) -> usize {
    values
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> NetworkConfig {
        NetworkConfig {
            input_size: 4,
            hidden_size: 6,
            output_size: 3,
            learning_rate: 0.1,
            epochs: 30,
        }
    }

    fn one_hot(idx: usize, classes: usize) -> Array1<f32> {
        let mut target = Array1::zeros(classes);
        target[idx] = 1.0;
        target
    }

    #[test]
    fn test_network_creation() {
        let mut network = MoodNetwork::new(NetworkConfig::default(), 42);
        network.initialize();

        assert_eq!(network.w1.dim(), (32, 48));
        assert_eq!(network.b1.dim(), 32);
        assert_eq!(network.w2.dim(), (10, 32));
        assert_eq!(network.b2.dim(), 10);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let mut network = MoodNetwork::new(small_config(), 42);
        network.initialize();
        let before = network.w1.clone();
        network.initialize();
        assert_eq!(network.w1, before);
    }

    #[test]
    fn test_forward_is_probability_vector() {
        let mut network = MoodNetwork::new(NetworkConfig::default(), 42);
        network.initialize();

        let input = Array1::from_shape_fn(48, |i| (i as f32 * 0.37).sin());
        let output = network.forward(&input);

        assert_eq!(output.len(), 10);
        let sum: f32 = output.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(output.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn test_forward_is_deterministic() {
        let mut network = MoodNetwork::new(small_config(), 7);
        network.initialize();

        let input = Array1::from_vec(vec![0.2, -0.4, 0.6, 0.1]);
        let a = network.forward(&input);
        let b = network.forward(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn test_same_seed_same_weights() {
        let mut a = MoodNetwork::new(small_config(), 99);
        let mut b = MoodNetwork::new(small_config(), 99);
        a.initialize();
        b.initialize();
        assert_eq!(a.w1, b.w1);
        assert_eq!(a.w2, b.w2);
    }

    #[test]
    fn test_training_reduces_loss_on_separable_data() {
        let config = small_config();
        let mut network = MoodNetwork::new(config.clone(), 42);

        // Three trivially separable one-hot-ish inputs
        let inputs: Vec<Array1<f32>> = (0..30)
            .map(|i| {
                let class = i % 3;
                Array1::from_shape_fn(4, |j| if j == class { 1.0 } else { 0.05 })
            })
            .collect();
        let targets: Vec<Array1<f32>> = (0..30).map(|i| one_hot(i % 3, 3)).collect();

        let history = network.train(&inputs, &targets, config.epochs);

        assert_eq!(history.losses.len(), config.epochs);
        assert_eq!(history.accuracies.len(), config.epochs);
        assert!(history.final_loss() < history.losses[0]);
        assert!(history.final_accuracy() > 0.9);
    }

    #[test]
    fn test_training_with_zero_samples_does_not_crash() {
        let mut network = MoodNetwork::new(small_config(), 42);
        let history = network.train(&[], &[], 10);
        assert_eq!(history.losses, vec![0.0]);
        assert_eq!(history.accuracies, vec![0.0]);
    }

    #[test]
    fn test_parameter_round_trip_reproduces_forward() {
        let config = small_config();
        let mut network = MoodNetwork::new(config.clone(), 42);

        let inputs: Vec<Array1<f32>> =
            (0..12).map(|i| Array1::from_shape_fn(4, |j| ((i + j) as f32 * 0.31).cos())).collect();
        let targets: Vec<Array1<f32>> = (0..12).map(|i| one_hot(i % 3, 3)).collect();
        network.train(&inputs, &targets, 5);

        let params = network.parameters();
        let mut restored = MoodNetwork::new(config, 0);
        restored.load_parameters(&params).unwrap();

        let probe = Array1::from_vec(vec![0.3, 0.1, -0.2, 0.9]);
        assert_eq!(network.forward(&probe), restored.forward(&probe));
    }

    #[test]
    fn test_load_parameters_rejects_bad_shapes() {
        let mut network = MoodNetwork::new(small_config(), 42);
        network.initialize();
        let before = network.parameters();

        let mut bad = before.clone();
        bad.weights1.pop();
        let err = network.load_parameters(&bad).unwrap_err();
        assert!(matches!(err, EngineError::ShapeMismatch { .. }));

        // Failed import leaves prior state untouched
        assert_eq!(network.parameters().weights1, before.weights1);
    }

    #[test]
    fn test_cross_entropy_clamps_underflow() {
        let output = Array1::from_vec(vec![0.0, 1.0]);
        let target = Array1::from_vec(vec![1.0, 0.0]);
        let loss = cross_entropy(&output, &target);
        assert!(loss.is_finite());
        assert!(loss > 0.0);
    }
}

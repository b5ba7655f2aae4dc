//! Fixed-count propagation schedule and the public inference entry points

use crate::algorithm::belief::BeliefEngine;
use crate::algorithm::domain::MessageDomain;
use crate::io::configuration::{DEFAULT_POTENTIAL_CAPACITY, DEFAULT_SWEEP_COUNT};
use crate::io::error::{Result, invalid_parameter};
use crate::math::potential::PairwisePotential;
use crate::spatial::{GridGraph, HoleRect, NodeId};
use ndarray::{Array2, ArrayView2};
use num_traits::PrimInt;
use std::fmt::Display;

/// Inference parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InferenceConfig {
    /// Number of full update sweeps over the unobserved nodes
    pub sweep_count: usize,
    /// Clipping bound of the pairwise potential
    pub potential_capacity: f64,
    /// Arithmetic used for messages
    pub domain: MessageDomain,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sweep_count: DEFAULT_SWEEP_COUNT,
            potential_capacity: DEFAULT_POTENTIAL_CAPACITY,
            domain: MessageDomain::Mixed,
        }
    }
}

impl InferenceConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if the potential capacity is negative, NaN or infinite
    pub fn validate(&self) -> Result<()> {
        if !self.potential_capacity.is_finite() || self.potential_capacity < 0.0 {
            return Err(invalid_parameter(
                "potential_capacity",
                &self.potential_capacity,
                &"must be a finite, non-negative number",
            ));
        }
        Ok(())
    }

    /// Belief engine configured by these parameters
    pub const fn engine(&self) -> BeliefEngine {
        BeliefEngine::new(PairwisePotential::new(self.potential_capacity), self.domain)
    }
}

/// Receives progress notifications from a running driver
///
/// All methods default to doing nothing.
pub trait SweepObserver {
    /// Messages of all unobserved nodes have been seeded
    fn initialized(&mut self, _unobserved: usize) {}

    /// Sweep number `completed` out of `total` has finished
    fn sweep_completed(&mut self, _completed: usize, _total: usize) {}

    /// Every unobserved node has been assigned a label
    fn decoded(&mut self, _unobserved: usize) {}
}

/// Observer that ignores every notification
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}

/// Adapts a `(completed, total)` closure into a sweep observer
pub struct SweepCallback<F>(pub F);

impl<F: FnMut(usize, usize)> SweepObserver for SweepCallback<F> {
    fn sweep_completed(&mut self, completed: usize, total: usize) {
        (self.0)(completed, total);
    }
}

/// Lifecycle of a propagation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Messages not yet seeded
    Initializing,
    /// Seeded; `completed` sweeps have run so far
    Sweeping {
        /// Number of finished sweeps
        completed: usize,
    },
    /// Labels assigned to every unobserved node
    Decoded,
}

/// Runs initialization, a fixed number of sweeps and decoding over a grid
///
/// Nodes are visited in row-major order and messages are updated in place,
/// so within a sweep a node sees the already refreshed messages of nodes
/// visited before it. There is no convergence test: exactly `sweep_count`
/// sweeps run.
#[derive(Debug, Clone)]
pub struct PropagationDriver {
    graph: GridGraph,
    engine: BeliefEngine,
    sweep_count: usize,
    schedule: Vec<NodeId>,
    state: DriverState,
    decoded: usize,
}

impl PropagationDriver {
    /// Prepare a run over `graph`
    pub fn new(graph: GridGraph, config: &InferenceConfig) -> Self {
        let schedule = graph.unobserved().collect();
        Self {
            graph,
            engine: config.engine(),
            sweep_count: config.sweep_count,
            schedule,
            state: DriverState::Initializing,
            decoded: 0,
        }
    }

    /// Current lifecycle state
    pub const fn state(&self) -> DriverState {
        self.state
    }

    /// The graph being propagated over
    pub const fn graph(&self) -> &GridGraph {
        &self.graph
    }

    /// Consume the driver and return its graph
    pub fn into_graph(self) -> GridGraph {
        self.graph
    }

    /// Unobserved nodes in visit order
    pub fn schedule(&self) -> &[NodeId] {
        &self.schedule
    }

    /// Number of `decode` calls performed
    pub const fn decoded_count(&self) -> usize {
        self.decoded
    }

    /// Seed the messages of every unobserved node
    ///
    /// Only acts in the `Initializing` state.
    pub fn initialize(&mut self) -> DriverState {
        if self.state == DriverState::Initializing {
            for &node in &self.schedule {
                self.engine.init(&mut self.graph, node);
            }
            self.state = DriverState::Sweeping { completed: 0 };
        }
        self.state
    }

    /// Run one update sweep over all unobserved nodes
    ///
    /// Only acts while fewer than `sweep_count` sweeps have completed.
    pub fn sweep(&mut self) -> DriverState {
        if let DriverState::Sweeping { completed } = self.state
            && completed < self.sweep_count
        {
            for &node in &self.schedule {
                self.engine.update(&mut self.graph, node);
            }
            self.state = DriverState::Sweeping {
                completed: completed + 1,
            };
        }
        self.state
    }

    /// Assign the belief-maximizing label to every unobserved node
    ///
    /// Only acts once all sweeps have completed.
    pub fn decode(&mut self) -> DriverState {
        if self.state
            == (DriverState::Sweeping {
                completed: self.sweep_count,
            })
        {
            for &node in &self.schedule {
                let label = self.engine.decode(&self.graph, node);
                self.graph.set_decoded(node, label);
                self.decoded += 1;
            }
            self.state = DriverState::Decoded;
        }
        self.state
    }

    /// Run the remaining lifecycle to completion, reporting to `observer`
    pub fn run(&mut self, observer: &mut dyn SweepObserver) -> DriverState {
        if self.state == DriverState::Initializing {
            self.initialize();
            observer.initialized(self.schedule.len());
        }

        while let DriverState::Sweeping { completed } = self.state {
            if completed >= self.sweep_count {
                break;
            }
            self.sweep();
            observer.sweep_completed(completed + 1, self.sweep_count);
        }

        if self.state != DriverState::Decoded {
            self.decode();
            observer.decoded(self.schedule.len());
        }
        self.state
    }
}

/// Infer the unobserved cells of an intensity matrix
///
/// Observed cells are copied to the output unchanged; unobserved cells hold
/// the decoded labels.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the grid cannot be
/// built from the inputs (shape mismatch, empty grid, out-of-range
/// observed intensity)
pub fn run_inference<T>(
    intensities: ArrayView2<'_, T>,
    observed: ArrayView2<'_, bool>,
    config: &InferenceConfig,
) -> Result<Array2<u8>>
where
    T: PrimInt + Display,
{
    run_inference_with_observer(intensities, observed, config, &mut NoopObserver)
}

/// `run_inference` with progress reported to `observer`
///
/// # Errors
///
/// Same conditions as `run_inference`
pub fn run_inference_with_observer<T>(
    intensities: ArrayView2<'_, T>,
    observed: ArrayView2<'_, bool>,
    config: &InferenceConfig,
    observer: &mut dyn SweepObserver,
) -> Result<Array2<u8>>
where
    T: PrimInt + Display,
{
    config.validate()?;
    let graph = GridGraph::from_matrix(intensities, observed)?;
    let mut driver = PropagationDriver::new(graph, config);
    driver.run(observer);
    Ok(driver.graph().to_matrix())
}

/// Fill a rectangular hole of a grayscale image
///
/// Inference runs on the hole plus its observed border only; the result is
/// pasted back into a copy of `image`, leaving every pixel outside the hole
/// untouched.
///
/// # Errors
///
/// Returns an error if the hole does not fit inside the image or the
/// configuration is invalid
pub fn inpaint_hole(
    image: ArrayView2<'_, u8>,
    hole: &HoleRect,
    config: &InferenceConfig,
    observer: &mut dyn SweepObserver,
) -> Result<Array2<u8>> {
    let (rows, cols) = image.dim();
    hole.validate(rows, cols)?;

    let window = hole.padded_window(rows, cols);
    let mask = hole.observed_mask(&window);
    let segment = image.slice_each_axis(|axis| window.axis_slice(axis.axis));
    let filled = run_inference_with_observer(segment, mask.view(), config, observer)?;

    let mut output = image.to_owned();
    output
        .slice_each_axis_mut(|axis| window.axis_slice(axis.axis))
        .assign(&filled);
    Ok(output)
}

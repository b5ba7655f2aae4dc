/// Message initialization, update rule and belief readout
pub mod belief;
/// Message arithmetic (reference mixed domain or consistent log domain)
pub mod domain;
/// Fixed-count propagation driver and inference entry points
pub mod driver;
/// Per-node message inbox
pub mod messages;

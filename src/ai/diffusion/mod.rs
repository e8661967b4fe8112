//! Local diffusion inference service.
//!
//! The service wraps a pretrained text-to-image pipeline. We pick a device,
//! load the pipeline once, then request one image per prompt.

pub mod client;
pub mod device;
pub mod types;

pub use client::DiffusionImageClient;
pub use device::{select_device, Device, DevicePreference, Precision};

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Cuda,
    Cpu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Float16,
    Float32,
}

/// Which device the operator asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevicePreference {
    #[default]
    Auto,
    Cuda,
    Cpu,
}

impl FromStr for DevicePreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "cuda" | "gpu" => Ok(Self::Cuda),
            "cpu" => Ok(Self::Cpu),
            other => Err(format!("expected auto, cuda or cpu, got '{}'", other)),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cuda => write!(f, "cuda"),
            Device::Cpu => write!(f, "cpu"),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Float16 => write!(f, "float16"),
            Precision::Float32 => write!(f, "float32"),
        }
    }
}

impl Device {
    /// Half precision on the accelerator, full precision everywhere else.
    pub fn precision(self) -> Precision {
        match self {
            Device::Cuda => Precision::Float16,
            Device::Cpu => Precision::Float32,
        }
    }
}

/// Resolve the operator's preference against what the service reports.
pub fn select_device(
    preference: DevicePreference,
    accelerator_available: bool,
) -> Result<(Device, Precision)> {
    let device = match preference {
        DevicePreference::Auto if accelerator_available => Device::Cuda,
        DevicePreference::Auto | DevicePreference::Cpu => Device::Cpu,
        DevicePreference::Cuda if accelerator_available => Device::Cuda,
        DevicePreference::Cuda => {
            return Err(Error::Config(
                "DIFFUSION_DEVICE=cuda but the diffusion service reports no CUDA device"
                    .to_string(),
            ))
        }
    };
    Ok((device, device.precision()))
}

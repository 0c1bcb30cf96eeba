//! Compute device detection
//!
//! Provides CUDA detection with automatic fallback to CPU. Device
//! placement itself is a data-movement concern owned by the model
//! runtime; the runner only threads the device through.

use std::fmt;

/// Compute device for inference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeDevice {
    /// CPU-only execution
    Cpu,
    /// CUDA GPU with device ID
    Cuda { device_id: usize },
}

impl ComputeDevice {
    /// Auto-detect the best available device, preferring CUDA.
    #[must_use]
    pub fn auto_detect() -> Self {
        if Self::cuda_available() {
            Self::Cuda { device_id: 0 }
        } else {
            Self::Cpu
        }
    }

    /// Check if CUDA is available
    #[must_use]
    pub fn cuda_available() -> bool {
        if std::env::var("CUDA_VISIBLE_DEVICES").is_ok() {
            return true;
        }

        std::process::Command::new("nvidia-smi")
            .arg("--query-gpu=name")
            .arg("--format=csv,noheader")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Check if this device is CUDA
    #[must_use]
    pub const fn is_cuda(&self) -> bool {
        matches!(self, Self::Cuda { .. })
    }

    /// Check if this device is CPU
    #[must_use]
    pub const fn is_cpu(&self) -> bool {
        matches!(self, Self::Cpu)
    }

    /// Get device ID for CUDA devices
    #[must_use]
    pub const fn device_id(&self) -> Option<usize> {
        match self {
            Self::Cuda { device_id } => Some(*device_id),
            Self::Cpu => None,
        }
    }
}

impl Default for ComputeDevice {
    fn default() -> Self {
        Self::auto_detect()
    }
}

impl fmt::Display for ComputeDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "CPU"),
            Self::Cuda { device_id } => write!(f, "CUDA:{device_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_device_cpu() {
        let device = ComputeDevice::Cpu;
        assert!(device.is_cpu());
        assert!(!device.is_cuda());
        assert_eq!(device.device_id(), None);
        assert_eq!(device.to_string(), "CPU");
    }

    #[test]
    fn test_compute_device_cuda() {
        let device = ComputeDevice::Cuda { device_id: 1 };
        assert!(device.is_cuda());
        assert!(!device.is_cpu());
        assert_eq!(device.device_id(), Some(1));
        assert_eq!(device.to_string(), "CUDA:1");
    }

    #[test]
    fn test_auto_detect_returns_valid_device() {
        let device = ComputeDevice::auto_detect();
        assert!(device.is_cpu() || device.is_cuda());
    }
}

// SPDX-License-Identifier: MPL-2.0
pub mod size_probe;

pub use size_probe::SizeProbe;

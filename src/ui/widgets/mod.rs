// SPDX-License-Identifier: MPL-2.0
pub mod particle_field;

pub use particle_field::ParticleField;

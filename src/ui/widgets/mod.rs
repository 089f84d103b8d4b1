// SPDX-License-Identifier: MPL-2.0
pub mod translate;

pub use translate::{translate, Translate};

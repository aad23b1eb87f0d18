//! Entropy and information-gain statistics over a labelled dataset.
//!
//! This module provides the four-step pipeline an ID3-style tree builder
//! uses to rank splitting attributes:
//! - `entropy`: Shannon entropy of the label column, in bits
//! - `average_info`: weighted entropy after partitioning by an attribute
//! - `information_gain`: entropy reduction achieved by an attribute
//! - `select_best_attribute`: gain for every attribute plus the argmax
//!
//! # Examples
//!
//! ```rust
//! use splitgain::{Dataset, average_info, information_gain};
//! use ndarray::array;
//!
//! let data = Dataset::new(array![
//!     ["Sunny", "Hot", "High", "Weak", "No"],
//!     ["Sunny", "Hot", "High", "Strong", "No"],
//!     ["Overcast", "Hot", "High", "Weak", "Yes"],
//!     ["Rain", "Mild", "High", "Weak", "Yes"],
//! ]).unwrap();
//!
//! // Humidity is constant, so splitting on it tells us nothing.
//! assert_eq!(average_info(&data, 2).unwrap(), 1.0);
//! assert_eq!(information_gain(&data, 2).unwrap(), 0.0);
//!
//! // Outlook separates the labels perfectly.
//! assert_eq!(information_gain(&data, 0).unwrap(), 1.0);
//! ```

mod entropy;
mod selection;

pub use entropy::{average_info, entropy};
pub use selection::{information_gain, select_best_attribute};

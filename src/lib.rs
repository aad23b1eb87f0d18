//! Information-theoretic split statistics for decision-tree induction.
//!
//! This crate computes the statistics an ID3-style tree builder needs to pick
//! a splitting attribute from a tabular dataset: class-label entropy, weighted
//! average information (conditional entropy) of a candidate attribute,
//! information gain, and the best-attribute argmax over all candidates.
//!
//! The dataset is an [`ndarray::Array2`] whose last column holds the class
//! labels; every other column is a candidate attribute. Values can be any
//! `Eq + Hash` type, so categorical (`&str`) and integer columns both work.
//!
//! # Examples
//!
//! ```rust
//! use splitgain::{Dataset, entropy, select_best_attribute};
//! use ndarray::array;
//!
//! let data = Dataset::new(array![
//!     ["Sunny", "Hot", "No"],
//!     ["Sunny", "Mild", "No"],
//!     ["Rain", "Mild", "Yes"],
//!     ["Rain", "Cool", "Yes"],
//! ]).unwrap();
//!
//! // Two "Yes", two "No": maximal impurity for a binary label.
//! assert_eq!(entropy(&data), 1.0);
//!
//! // The outlook column separates the labels perfectly.
//! let (gains, best) = select_best_attribute(&data);
//! assert_eq!(best, 0);
//! assert_eq!(gains[0], 1.0);
//! ```

pub use ndarray::{Array2, ArrayView1};

pub mod dataset;
pub mod error;
pub mod information;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use information::{average_info, entropy, information_gain, select_best_attribute};

//! Segmentation tasks and their model bundles.

use strum_macros::{Display, EnumString, VariantNames};

/// Segmentation objectives the tool can run.
///
/// The set is a fixed table compiled into the binary so that resolution
/// stays a pure function; the model hub is never consulted to enumerate
/// tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantNames)]
pub enum Task {
    /// Whole-body segmentation of CT volumes.
    #[strum(serialize = "total")]
    Total,
    /// Whole-body segmentation of MR volumes.
    #[strum(serialize = "total_mr")]
    TotalMr,
}

/// Ordered model artifacts plus the inference configuration for one
/// task/mode combination.
///
/// Ensemble order is significant to the prediction engine and is preserved
/// from resolution through fetching to the final command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSet {
    /// Model artifact filenames, in ensemble order.
    pub models: Vec<&'static str>,
    /// Inference configuration filename.
    pub config: &'static str,
}

impl Task {
    /// All task names accepted on the command line.
    #[must_use]
    pub fn names() -> &'static [&'static str] {
        <Self as strum::VariantNames>::VARIANTS
    }

    /// Resolve the model ensemble and inference configuration for this task.
    ///
    /// `fast` selects the low-resolution single-model variant where the
    /// default is a full-resolution ensemble.
    #[must_use]
    pub fn resolve(self, fast: bool) -> ModelSet {
        match (self, fast) {
            (Self::Total, false) => ModelSet {
                models: vec!["M291.pt", "M292.pt", "M293.pt", "M294.pt", "M295.pt"],
                config: "Prediction_CT.yml",
            },
            (Self::Total, true) => ModelSet {
                models: vec!["M297.pt"],
                config: "Prediction_CT_Fast.yml",
            },
            (Self::TotalMr, false) => ModelSet {
                models: vec!["M850.pt", "M851.pt"],
                config: "Prediction_MR.yml",
            },
            (Self::TotalMr, true) => ModelSet {
                models: vec!["M852.pt"],
                config: "Prediction_MR_Fast.yml",
            },
        }
    }
}

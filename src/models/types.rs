//! Categorical column types
//!
//! Every categorical column of the patient table is a closed set of labels.
//! The enums below serialise as their display label so the CSV file and the
//! Arrow record batch carry the same text (`"No Change"`, `"XAI Model"`, ...).

use std::fmt;
use std::str::FromStr;

use crate::error::SynthError;

/// Define a categorical enum with a fixed display label per variant.
///
/// Generates `as_str`, `VARIANTS`, `Display`, `FromStr`, `TryFrom<String>` and
/// `From<Self> for String`, which are what the serde attributes rely on.
macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(into = "String", try_from = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// All variants in declaration order
            pub const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            /// Label used in files and printed output
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SynthError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($label => Ok(Self::$variant),)+
                    other => Err(SynthError::validation(format!(
                        "Unknown {} value: '{other}'",
                        stringify!($name)
                    ))),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = SynthError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

categorical! {
    /// Gender of a synthetic patient
    Gender {
        /// Male gender
        Male => "Male",
        /// Female gender
        Female => "Female",
        /// Any other gender
        Other => "Other",
    }
}

categorical! {
    /// Action suggested by the threshold rule
    PredictedAction {
        /// Risk clearly above the decision threshold
        Treat => "Treat",
        /// Risk within 0.1 of the decision threshold
        Monitor => "Monitor",
        /// Everything else
        Discharge => "Discharge",
    }
}

categorical! {
    /// Recorded clinical outcome
    Outcome {
        Improved => "Improved",
        NoChange => "No Change",
        Worsened => "Worsened",
    }
}

categorical! {
    /// Decision-support approach that produced the record.
    ///
    /// Variants are declared in label order so the derived `Ord` sorts
    /// groups the same way the labels sort.
    ModelType {
        /// Classical decision-theoretic model
        DecisionTheory => "Decision Theory Model",
        /// Decision theory combined with explanations
        Hybrid => "Hybrid Model",
        /// Explainable AI model
        Xai => "XAI Model",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for outcome in Outcome::VARIANTS {
            assert_eq!(outcome.as_str().parse::<Outcome>().unwrap(), *outcome);
        }
        assert_eq!("No Change".parse::<Outcome>().unwrap(), Outcome::NoChange);
        assert_eq!(
            " XAI Model ".parse::<ModelType>().unwrap(),
            ModelType::Xai
        );
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "Unknown".parse::<Gender>().unwrap_err();
        assert!(matches!(err, SynthError::Validation(_)));
        assert!(err.to_string().contains("Gender"));
    }

    #[test]
    fn test_model_type_order_matches_label_order() {
        let mut labels: Vec<&str> = ModelType::VARIANTS.iter().map(|m| m.as_str()).collect();
        let declared = labels.clone();
        labels.sort_unstable();
        assert_eq!(labels, declared);

        let mut types = vec![ModelType::Xai, ModelType::DecisionTheory, ModelType::Hybrid];
        types.sort();
        assert_eq!(
            types,
            vec![ModelType::DecisionTheory, ModelType::Hybrid, ModelType::Xai]
        );
    }

    #[test]
    fn test_string_conversion() {
        let label: String = PredictedAction::Discharge.into();
        assert_eq!(label, "Discharge");
        assert_eq!(
            PredictedAction::try_from("Monitor".to_string()).unwrap(),
            PredictedAction::Monitor
        );
        assert_eq!(Gender::Other.to_string(), "Other");
    }
}

#[derive(Clone)]
pub enum SweepError {
    /// A constructor received zero records (or an empty temperature vector).
    EmptyInput { context: String },
    /// A numeric input left the domain of the computation: non-positive
    /// temperature or gap energy, non-finite parameter, mismatched vector
    /// lengths, zero uncertainty.
    NumericDomain { context: String },
}

impl SweepError {
    pub fn empty_input(context: impl Into<String>) -> Self {
        Self::EmptyInput {
            context: context.into(),
        }
    }

    pub fn numeric_domain(context: impl Into<String>) -> Self {
        Self::NumericDomain {
            context: context.into(),
        }
    }
}

impl std::fmt::Display for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput { context } => write!(f, "empty input: {context}"),
            Self::NumericDomain { context } => write!(f, "numeric domain error: {context}"),
        }
    }
}

impl std::fmt::Debug for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput { context } => f
                .debug_struct("EmptyInput")
                .field("context", context)
                .finish(),
            Self::NumericDomain { context } => f
                .debug_struct("NumericDomain")
                .field("context", context)
                .finish(),
        }
    }
}

impl std::error::Error for SweepError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    DuplicateSystem {
        index: usize,
    },
    EmptyModel,
    IndexOutOfRange {
        position: usize,
        len: usize,
    },
    OutOfRange {
        index: usize,
        num_systems: usize,
    },
    RouteLengthMismatch {
        expected: usize,
        actual: usize,
    },
    UnsupportedFitnessMode {
        mode: String,
    },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DuplicateSystem { index } => {
                write!(f, "System '{}' appears more than once in the route", index)
            }
            ModelError::EmptyModel => write!(f, "At least one system is required"),
            ModelError::IndexOutOfRange { position, len } => write!(
                f,
                "Route position '{}' is out of range for a route of length {}",
                position, len
            ),
            ModelError::OutOfRange { index, num_systems } => write!(
                f,
                "System index '{}' is out of range ({} systems loaded)",
                index, num_systems
            ),
            ModelError::RouteLengthMismatch { expected, actual } => write!(
                f,
                "Incorrect number of systems: {} given but {} required",
                actual, expected
            ),
            ModelError::UnsupportedFitnessMode { mode } => write!(
                f,
                "Fitness mode '{}' is currently unsupported. It needs a better way to target the source of the largest hop and ensure that each mutation tries to address it",
                mode
            ),
        }
    }
}

impl std::error::Error for ModelError {}

pub type ModelResult<T> = std::result::Result<T, ModelError>;

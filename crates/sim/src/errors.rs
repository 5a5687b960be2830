use parasim_codec::{CodecError, GenotypeId};
use std::error;
use std::fmt;

/// Errors raised by genotype construction, resistance queries and mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum GenotypeError {
    /// Genotype id outside `[0, total)`.
    OutOfRange { id: GenotypeId, total: usize },

    /// A locus index or vector length disagrees with the genotype table.
    DimensionMismatch(String),

    /// Allele index not below the allele count of its locus.
    AlleleOutOfRange {
        locus: usize,
        allele: usize,
        radix: usize,
    },

    /// A table entry that must exist by construction is missing.
    LookupMiss(String),

    /// The expressed allele declares no mutation targets.
    NoMutationTarget { locus: usize, allele: usize },

    /// Lower-level codec failure.
    Codec(CodecError),
}

impl fmt::Display for GenotypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { id, total } => {
                write!(f, "Genotype id {id} out of range (total = {total})")
            }
            Self::DimensionMismatch(msg) => write!(f, "Dimension mismatch: {msg}"),
            Self::AlleleOutOfRange {
                locus,
                allele,
                radix,
            } => write!(f, "Allele {allele} at locus {locus} out of range (radix = {radix})"),
            Self::LookupMiss(msg) => write!(f, "Lookup miss: {msg}"),
            Self::NoMutationTarget { locus, allele } => {
                write!(f, "Allele {allele} at locus {locus} has no mutation targets")
            }
            Self::Codec(e) => write!(f, "Codec error: {e}"),
        }
    }
}

impl error::Error for GenotypeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CodecError> for GenotypeError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::OutOfRange { id, total } => Self::OutOfRange { id, total },
            CodecError::DimensionMismatch { expected, found } => Self::DimensionMismatch(format!(
                "expected {expected} loci, found {found}"
            )),
            CodecError::AlleleOutOfRange {
                locus,
                allele,
                radix,
            } => Self::AlleleOutOfRange {
                locus,
                allele,
                radix,
            },
            other => Self::Codec(other),
        }
    }
}

/// Errors raised while loading or validating a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error
    Io(std::io::Error),
    /// Parse error
    Parse(String),
    /// Validation error
    Validation(String),
    /// Genotype table error
    Genotype(GenotypeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Genotype(e) => write!(f, "Genotype error: {e}"),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Genotype(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

impl From<GenotypeError> for ConfigError {
    fn from(e: GenotypeError) -> Self {
        Self::Genotype(e)
    }
}

impl From<CodecError> for ConfigError {
    fn from(e: CodecError) -> Self {
        Self::Genotype(e.into())
    }
}

#![deny(missing_docs)]
#![doc = "Core types for truncated Fourier series evaluation: parameters, sample domains, coefficient contracts and structured errors."]

pub mod coefficients;
/// Sample domains and approximation results.
pub mod domain;
pub mod errors;
/// Content hashing of serializable payloads.
pub mod hash;
/// Truncation order and period validation.
pub mod params;
/// Canonical JSON and YAML helpers.
pub mod serde;

pub use coefficients::{query, CoefficientFunction, Scalar, TryCoefficients};
pub use domain::{ApproximationResult, SampleDomain};
pub use errors::{ErrorInfo, FourierError};
pub use hash::stable_hash_string;
pub use num_complex::Complex64;
pub use params::{SeriesParameters, ValidatedParameters};
pub use self::serde::{from_json_slice, from_yaml_slice, to_canonical_json_bytes};

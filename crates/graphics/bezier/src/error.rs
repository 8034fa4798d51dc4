use error_derive::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[msg = "no quadratic approximation within the segment limit"]
    ApproximationNotFound,

    #[msg = "tolerance must be finite and not negative"]
    InvalidTolerance,

    #[msg = "curve has a control point that is not finite"]
    NonFiniteCurve,

    #[msg = "expected exactly one tolerance per curve"]
    MismatchedTolerances,
}

use core::fmt;

/// Errors returned by [`Button::poll`](crate::Button::poll).
///
/// The gesture logic itself can't fail; the only fault is a level sampler that couldn't
/// read the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The level sampler failed to read the input
    Sampler(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sampler(e) => write!(f, "failed to sample button level: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e: Error<u8> = Error::Sampler(3);
        assert_eq!(e.to_string(), "failed to sample button level: 3");
    }
}

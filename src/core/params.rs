// Copyright @yucwang 2026

use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::RGBSpectrum;

#[derive(Debug, PartialEq)]
pub enum ParamError {
    Parse(String),
    Missing(&'static str),
    Invalid(String),
    Unsupported(String),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::Parse(token) => write!(f, "cannot parse '{}' as a number", token),
            ParamError::Missing(what) => write!(f, "missing {} parameter", what),
            ParamError::Invalid(msg) => write!(f, "invalid parameter: {}", msg),
            ParamError::Unsupported(kind) => write!(f, "unsupported bsdf type: {}", kind),
        }
    }
}

impl Error for ParamError {}

/// Ordered numeric parameters, consumed front to back by the material
/// factories.
#[derive(Debug, Clone, Default)]
pub struct ParamList {
    values: VecDeque<Float>,
}

impl ParamList {
    pub fn new(values: Vec<Float>) -> Self {
        Self { values: values.into() }
    }

    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ParamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = VecDeque::new();
        for token in tokens {
            let token = token.as_ref();
            let value = token
                .parse::<Float>()
                .map_err(|_| ParamError::Parse(token.to_string()))?;
            if !value.is_finite() {
                return Err(ParamError::Invalid(format!("non-finite value '{}'", token)));
            }
            values.push_back(value);
        }
        Ok(Self { values })
    }

    /// Whitespace separated numbers.
    pub fn parse(text: &str) -> Result<Self, ParamError> {
        Self::from_tokens(text.split_whitespace())
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn next_float(&mut self) -> Result<Float, ParamError> {
        self.values.pop_front().ok_or(ParamError::Missing("float"))
    }

    pub fn next_vector(&mut self) -> Result<Vector3f, ParamError> {
        if self.values.len() < 3 {
            return Err(ParamError::Missing("vector"));
        }
        let x = self.next_float()?;
        let y = self.next_float()?;
        let z = self.next_float()?;
        Ok(Vector3f::new(x, y, z))
    }

    pub fn next_reflectance(&mut self) -> Result<RGBSpectrum, ParamError> {
        let rgb = self.next_vector()?;
        if rgb.iter().any(|&c| !c.is_finite() || c < 0.0) {
            return Err(ParamError::Invalid(format!(
                "reflectance ({}, {}, {}) needs finite, non-negative channels", rgb.x, rgb.y, rgb.z)));
        }
        Ok(RGBSpectrum::from(rgb))
    }

    pub fn next_ior(&mut self) -> Result<Float, ParamError> {
        let eta = self.next_float()?;
        if !eta.is_finite() || eta <= 0.0 {
            return Err(ParamError::Invalid(format!("index of refraction {} must be finite and positive", eta)));
        }
        Ok(eta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_in_order() {
        let mut params = ParamList::parse("0.5 0.25 1  1.0\t1.5").unwrap();
        assert_eq!(params.remaining(), 5);
        assert_eq!(params.next_vector().unwrap(), Vector3f::new(0.5, 0.25, 1.0));
        assert_eq!(params.next_float().unwrap(), 1.0);
        assert_eq!(params.next_float().unwrap(), 1.5);
        assert!(params.is_empty());
        assert_eq!(params.next_float(), Err(ParamError::Missing("float")));
    }

    #[test]
    fn test_short_vector_consumes_nothing() {
        let mut params = ParamList::new(vec![1.0, 2.0]);
        assert_eq!(params.next_vector(), Err(ParamError::Missing("vector")));
        assert_eq!(params.remaining(), 2);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(ParamList::parse("1 two 3").unwrap_err(), ParamError::Parse("two".to_string()));
        assert!(matches!(ParamList::parse("1 inf"), Err(ParamError::Invalid(_))));
        assert!(matches!(ParamList::parse("NaN"), Err(ParamError::Invalid(_))));
    }

    #[test]
    fn test_validation() {
        let mut params = ParamList::new(vec![0.5, -0.1, 0.5]);
        assert!(matches!(params.next_reflectance(), Err(ParamError::Invalid(_))));

        let mut params = ParamList::new(vec![0.0]);
        assert!(matches!(params.next_ior(), Err(ParamError::Invalid(_))));

        for &bad in &[Float::NAN, Float::INFINITY, Float::NEG_INFINITY] {
            let mut params = ParamList::new(vec![bad, 1.0, 1.0]);
            assert!(matches!(params.next_reflectance(), Err(ParamError::Invalid(_))));

            let mut params = ParamList::new(vec![1.0, 1.0, 1.0, bad, 1.5]);
            assert!(params.next_reflectance().is_ok());
            assert!(matches!(params.next_ior(), Err(ParamError::Invalid(_))));
        }

        let mut params = ParamList::new(vec![0.2, 0.4, 0.6, 1.33]);
        assert_eq!(params.next_reflectance().unwrap(), RGBSpectrum::new(0.2, 0.4, 0.6));
        assert_eq!(params.next_ior().unwrap(), 1.33);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParamError::Missing("vector").to_string(), "missing vector parameter");
        assert_eq!(ParamError::Unsupported("glossy".into()).to_string(), "unsupported bsdf type: glossy");
    }
}

/// Source channel selection for scalar field extraction
use std::fmt;

/// Image component used as the elevation source.
///
/// Grayscale is the plain average of the red, green and blue samples, not a
/// perceptual luminance weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Grayscale,
}

impl Channel {
    /// Parse a user-facing channel token.
    /// Unrecognized tokens select grayscale extraction rather than failing.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Channel::Red,
            "g" | "green" => Channel::Green,
            "b" | "blue" => Channel::Blue,
            "a" | "alpha" => Channel::Alpha,
            _ => Channel::Grayscale,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
            Channel::Grayscale => "grayscale",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_resolve() {
        assert_eq!(Channel::from_token("r"), Channel::Red);
        assert_eq!(Channel::from_token("green"), Channel::Green);
        assert_eq!(Channel::from_token("B"), Channel::Blue);
        assert_eq!(Channel::from_token(" alpha "), Channel::Alpha);
        assert_eq!(Channel::from_token("grayscale"), Channel::Grayscale);
    }

    #[test]
    fn unknown_tokens_fall_back_to_grayscale() {
        assert_eq!(Channel::from_token("luminance"), Channel::Grayscale);
        assert_eq!(Channel::from_token(""), Channel::Grayscale);
        assert_eq!(Channel::from_token("42"), Channel::Grayscale);
    }
}

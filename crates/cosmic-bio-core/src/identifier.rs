//! Identifier provider.
//!
//! A session is labelled either by a persisted sequential counter (`#0042`)
//! or by a one-shot random code (`ZEO-7KQM-X3PA`). Both are carried by the
//! single [`Identifier`] type so the card renders them the same way.

use std::fmt;
use std::time::Duration;

use rand::Rng;

/// Number of distinct counter values; the counter wraps modulo this.
pub const COUNTER_MODULUS: u16 = 10_000;

/// Symbols used for random codes. Excludes `0`, `1`, `I` and `O`.
pub const CODE_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Prefix of every random code.
pub const CODE_PREFIX: &str = "ZEO";

/// Format a counter as `#` followed by four zero-padded digits.
///
/// Callers keep `n` below [`COUNTER_MODULUS`] through [`increment_counter`]
/// and [`decrement_counter`].
pub fn format_counter(n: u16) -> String {
    format!("#{:04}", n)
}

/// Next counter value, wrapping `9999 -> 0`.
pub fn increment_counter(n: u16) -> u16 {
    (n % COUNTER_MODULUS + 1) % COUNTER_MODULUS
}

/// Previous counter value, wrapping `0 -> 9999`.
pub fn decrement_counter(n: u16) -> u16 {
    (n % COUNTER_MODULUS + COUNTER_MODULUS - 1) % COUNTER_MODULUS
}

/// Generate a fresh `ZEO-XXXX-XXXX` code from the thread RNG.
pub fn generate_random_code() -> String {
    generate_random_code_with(&mut rand::rng())
}

/// Generate a `ZEO-XXXX-XXXX` code from the given RNG.
pub fn generate_random_code_with<R: Rng>(rng: &mut R) -> String {
    let mut symbol = || CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char;
    let first: String = (0..4).map(|_| symbol()).collect();
    let second: String = (0..4).map(|_| symbol()).collect();
    format!("{}-{}-{}", CODE_PREFIX, first, second)
}

/// Check that `code` has the `ZEO-XXXX-XXXX` shape over [`CODE_ALPHABET`].
pub fn is_valid_code(code: &str) -> bool {
    let mut parts = code.split('-');
    let (Some(prefix), Some(first), Some(second), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    prefix == CODE_PREFIX
        && [first, second].iter().all(|group| {
            group.len() == 4 && group.bytes().all(|b| CODE_ALPHABET.contains(&b))
        })
}

/// Which kind of identifier a session uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdentifierMode {
    /// Persisted counter that can be stepped and auto-advanced
    #[default]
    Sequential,
    /// Random code generated once per session
    Random,
}

impl IdentifierMode {
    /// How long the "copied" indicator stays up after a successful copy.
    pub fn copy_feedback_duration(&self) -> Duration {
        match self {
            IdentifierMode::Sequential => Duration::from_millis(1000),
            IdentifierMode::Random => Duration::from_millis(1200),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierMode::Sequential => "sequential",
            IdentifierMode::Random => "random",
        }
    }
}

/// The displayed session identifier (UID).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identifier {
    /// Counter in `0..10000`
    Sequential(u16),
    /// Immutable `ZEO-XXXX-XXXX` code
    Random(String),
}

impl Identifier {
    /// Start a new random identifier.
    pub fn random() -> Self {
        Identifier::Random(generate_random_code())
    }

    pub fn mode(&self) -> IdentifierMode {
        match self {
            Identifier::Sequential(_) => IdentifierMode::Sequential,
            Identifier::Random(_) => IdentifierMode::Random,
        }
    }

    /// Formatted display string, also used as the clipboard payload.
    pub fn display(&self) -> String {
        match self {
            Identifier::Sequential(n) => format_counter(*n),
            Identifier::Random(code) => code.clone(),
        }
    }

    /// Counter value, if sequential.
    pub fn counter(&self) -> Option<u16> {
        match self {
            Identifier::Sequential(n) => Some(*n),
            Identifier::Random(_) => None,
        }
    }

    /// Step the counter forward. Returns `false` for random codes.
    pub fn increment(&mut self) -> bool {
        match self {
            Identifier::Sequential(n) => {
                *n = increment_counter(*n);
                true
            }
            Identifier::Random(_) => false,
        }
    }

    /// Step the counter backward. Returns `false` for random codes.
    pub fn decrement(&mut self) -> bool {
        match self {
            Identifier::Sequential(n) => {
                *n = decrement_counter(*n);
                true
            }
            Identifier::Random(_) => false,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Sequential(n) => write!(f, "#{:04}", n),
            Identifier::Random(code) => f.write_str(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_format_counter_padding() {
        assert_eq!(format_counter(0), "#0000");
        assert_eq!(format_counter(7), "#0007");
        assert_eq!(format_counter(42), "#0042");
        assert_eq!(format_counter(9999), "#9999");
    }

    #[test]
    fn test_counter_wraps() {
        assert_eq!(increment_counter(9999), 0);
        assert_eq!(decrement_counter(0), 9999);
        assert_eq!(increment_counter(41), 42);
        assert_eq!(decrement_counter(42), 41);
    }

    #[test]
    fn test_alphabet_excludes_ambiguous() {
        for ambiguous in [b'0', b'1', b'I', b'O'] {
            assert!(!CODE_ALPHABET.contains(&ambiguous));
        }
        let mut sorted = CODE_ALPHABET.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 32);
    }

    #[test]
    fn test_random_code_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = generate_random_code_with(&mut rng);
            assert_eq!(code.len(), 13);
            assert!(is_valid_code(&code), "bad code {}", code);
        }
    }

    #[test]
    fn test_is_valid_code_rejects() {
        assert!(!is_valid_code("ZEO-ABCD"));
        assert!(!is_valid_code("ZEO-ABCD-EFG0"));
        assert!(!is_valid_code("ZEA-ABCD-EFGH"));
        assert!(!is_valid_code("ZEO-ABCD-EFGH-JKLM"));
        assert!(!is_valid_code("ZEO-abcd-EFGH"));
        assert!(is_valid_code("ZEO-ABCD-EFGH"));
    }

    #[test]
    fn test_identifier_display() {
        assert_eq!(Identifier::Sequential(3).display(), "#0003");
        assert_eq!(Identifier::Sequential(3).to_string(), "#0003");
        let code = Identifier::Random("ZEO-ABCD-EFGH".to_string());
        assert_eq!(code.display(), "ZEO-ABCD-EFGH");
        assert_eq!(code.to_string(), "ZEO-ABCD-EFGH");
    }

    #[test]
    fn test_random_identifier_is_immutable() {
        let mut id = Identifier::random();
        let before = id.clone();
        assert!(!id.increment());
        assert!(!id.decrement());
        assert_eq!(id, before);
        assert_eq!(id.counter(), None);
        assert_eq!(id.mode(), IdentifierMode::Random);
    }

    #[test]
    fn test_sequential_steps() {
        let mut id = Identifier::Sequential(9999);
        assert!(id.increment());
        assert_eq!(id.counter(), Some(0));
        assert!(id.decrement());
        assert_eq!(id.counter(), Some(9999));
    }

    #[test]
    fn test_feedback_durations() {
        assert_eq!(
            IdentifierMode::Sequential.copy_feedback_duration(),
            Duration::from_millis(1000)
        );
        assert_eq!(
            IdentifierMode::Random.copy_feedback_duration(),
            Duration::from_millis(1200)
        );
    }
}

/// Character sequence every analysis pass works on: trimmed, uppercased and
/// split into individual chars.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens(Vec<char>);

impl Tokens {
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, char> {
        self.0.iter()
    }

    /// Number of plain space characters (tabs and newlines are not counted).
    pub fn space_count(&self) -> usize {
        self.0.iter().filter(|&&c| c == ' ').count()
    }
}

/// Trim, uppercase, split. Uppercasing is per-char ASCII so the token count
/// never exceeds the trimmed input's char count.
pub fn normalize(raw: &str) -> Tokens {
    Tokens(raw.trim().chars().map(|c| c.to_ascii_uppercase()).collect())
}

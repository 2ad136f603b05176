/// Ordered table of printable characters indexed by pixel coverage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    pub fn new(chars: impl Into<String>) -> Self {
        let chars: Vec<char> = chars.into().chars().collect();
        assert!(chars.len() >= 2, "ramp must contain at least two characters");
        Self { chars }
    }

    /// The ten-level shading table used for terminal output.
    pub fn shaded() -> Self {
        Self::new(" .:-=+*#%@")
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Character used for zero coverage (the canvas background).
    pub fn blank(&self) -> char {
        self.chars[0]
    }

    /// Maps an 8-bit coverage sample to its ramp character.
    ///
    /// Buckets are picked by truncating integer division, so 0 always maps
    /// to the first entry and 255 to the last.
    pub fn shade(&self, coverage: u8) -> char {
        let index = coverage as usize * (self.chars.len() - 1) / 255;
        self.chars[index]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::shaded()
    }
}

/// Engine configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// How many cells along each axis the scanner looks for opponents.
    /// This is also the range of a shot.
    pub scan_range: u32,
}

impl EngineConfig {
    pub const DEFAULT_SCAN_RANGE: u32 = 3;

    /// Upper bound on the scan range. Arenas are small grids, so anything
    /// beyond this only inflates the distances reported for empty axes.
    pub const MAX_SCAN_RANGE: u32 = 64;

    pub const fn new() -> Self {
        Self {
            scan_range: Self::DEFAULT_SCAN_RANGE,
        }
    }

    /// Clamps `scan_range` into `1..=MAX_SCAN_RANGE`. A range of zero would
    /// make every direction trivially empty.
    pub fn with_scan_range(scan_range: u32) -> Self {
        Self {
            scan_range: scan_range.clamp(1, Self::MAX_SCAN_RANGE),
        }
    }

    /// The scan range actually used, clamped like [`Self::with_scan_range`]
    /// since the field is public.
    pub fn range(&self) -> u32 {
        self.scan_range.clamp(1, Self::MAX_SCAN_RANGE)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

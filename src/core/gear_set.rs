use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered tooth counts for one side of the drivetrain.
///
/// Order is display order, exactly as entered; duplicates are preserved.
/// Inline storage covers every real cassette and crankset without a heap
/// allocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GearSet {
    teeth: SmallVec<[u32; 12]>,
}

impl GearSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_teeth(teeth: impl IntoIterator<Item = u32>) -> Self {
        Self {
            teeth: teeth.into_iter().collect(),
        }
    }

    pub fn push(&mut self, tooth_count: u32) {
        self.teeth.push(tooth_count);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teeth.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teeth.is_empty()
    }

    #[must_use]
    pub fn teeth(&self) -> &[u32] {
        &self.teeth
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.teeth.iter().copied()
    }

    /// Axis tick text, positionally aligned with the sequence.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.teeth.iter().map(u32::to_string).collect()
    }
}

impl FromIterator<u32> for GearSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::from_teeth(iter)
    }
}

/// The rank of a generated value, recorded at generation time and used to
/// decide which of two failing values is the better counterexample.
///
/// The `magnitude` approximates the distance of a draw from its domain's
/// simplest value (zero for numbers, the range start for bounded draws, the
/// element count for collections) and `parts` holds the sizes of structural
/// sub-draws in generation order. The derived ordering compares magnitudes
/// first and children lexicographically on a tie, with a shorter prefix
/// ranking below its extensions, so the all-zero leaf is the unique minimum
/// and shrinking any component never increases the rank.
///
/// Field order matters: `magnitude` before `parts` is what the derived
/// `Ord` implementation relies on.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Size {
    magnitude: u64,
    parts: Vec<Size>,
}

impl Size {
    /// A leaf with no structural children.
    pub const fn new(magnitude: u64) -> Self {
        Self {
            magnitude,
            parts: Vec::new(),
        }
    }

    /// A node over the sizes of sub-draws, in generation order.
    pub const fn with(magnitude: u64, parts: Vec<Size>) -> Self {
        Self { magnitude, parts }
    }

    pub const fn magnitude(&self) -> u64 {
        self.magnitude
    }

    pub fn parts(&self) -> &[Size] {
        &self.parts
    }
}

use std::fmt;

/// Opaque label for jump targets and merge points
///
/// The checker never looks inside labels (it is generic over any hashable label type), so this
/// is only a convenient default for callers that don't already have their own.
#[derive(Copy, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct SynLabel(usize);

impl SynLabel {
    /// Label for the very start of the method
    pub const START: SynLabel = SynLabel(0);

    /// Label following this one
    pub const fn next(&self) -> SynLabel {
        SynLabel(self.0 + 1)
    }

    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for SynLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}", self.0)
    }
}

/// Source of fresh labels
pub trait LabelGenerator<L> {
    fn fresh_label(&mut self) -> L;
}

/// Hands out [`SynLabel`]s in increasing order
///
/// Cloning copies the position: both generators will produce the same labels from then on.
#[derive(Clone, Debug)]
pub struct SynLabelGenerator(SynLabel);

impl SynLabelGenerator {
    pub const fn new(start: SynLabel) -> SynLabelGenerator {
        SynLabelGenerator(start)
    }
}

impl Default for SynLabelGenerator {
    fn default() -> SynLabelGenerator {
        SynLabelGenerator::new(SynLabel::START.next())
    }
}

impl LabelGenerator<SynLabel> for SynLabelGenerator {
    fn fresh_label(&mut self) -> SynLabel {
        let label = self.0;
        self.0 = label.next();
        label
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fresh_labels_are_distinct() {
        let mut labels = SynLabelGenerator::default();
        let first = labels.fresh_label();
        let second = labels.fresh_label();
        assert_ne!(first, SynLabel::START);
        assert_ne!(first, second);
        assert_eq!(second.index(), first.index() + 1);
        assert_eq!(format!("{:?}", second), "l2");
    }
}

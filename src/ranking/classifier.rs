//! Regular / upsolve classification

use crate::constants::UPSOLVE_MARKER;
use crate::models::{Assignment, AssignmentKind};

/// Classify an assignment by its title
///
/// A regular assignment whose title happens to contain the marker is
/// misclassified; there is no other signal to go on.
pub fn classify(name: &str) -> AssignmentKind {
    if name.to_lowercase().contains(UPSOLVE_MARKER) {
        AssignmentKind::Upsolve
    } else {
        AssignmentKind::Regular
    }
}

/// Assignments split by kind, each side in the original order
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub regular: Vec<&'a Assignment>,
    pub upsolve: Vec<&'a Assignment>,
}

pub fn partition(assignments: &[Assignment]) -> Partition<'_> {
    let (upsolve, regular): (Vec<_>, Vec<_>) = assignments
        .iter()
        .partition(|assignment| assignment.kind.is_upsolve());

    Partition { regular, upsolve }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::testing::assignment;

    #[test]
    fn test_classify() {
        assert_eq!(classify("HW1 UPSOLVE"), AssignmentKind::Upsolve);
        assert_eq!(classify("Week 2 - upsolve"), AssignmentKind::Upsolve);
        assert_eq!(classify("Upsolving practice"), AssignmentKind::Upsolve);
        assert_eq!(classify("HW1"), AssignmentKind::Regular);
    }

    #[test]
    fn test_partition_preserves_order() {
        let assignments = vec![
            assignment("HW1", &[]),
            assignment("HW1 Upsolve", &[]),
            assignment("HW2", &[]),
            assignment("HW2 UPSOLVE", &[]),
        ];

        let split = partition(&assignments);
        let regular: Vec<_> = split.regular.iter().map(|a| a.name.as_str()).collect();
        let upsolve: Vec<_> = split.upsolve.iter().map(|a| a.name.as_str()).collect();

        assert_eq!(regular, vec!["HW1", "HW2"]);
        assert_eq!(upsolve, vec!["HW1 Upsolve", "HW2 UPSOLVE"]);
    }
}

//! Course records and their prerequisite lists.
//!
//! Courses are constructed by the caller and treated as immutable values
//! during validation. Two courses are the same course iff their ids match.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A course in the catalogue.
///
/// Equality, ordering and hashing use only the `id`, so a course recorded in a
/// transcript matches the course referenced by an offering even when the
/// two values were built separately.
///
/// # Example
///
/// ```rust
/// use enrollment::core::Course;
///
/// let math1 = Course::new("m1", "Math1", 3, vec![]);
/// let math2 = Course::new("m2", "Math2", 3, vec![math1.clone()]);
///
/// assert_eq!(math2.prerequisites().len(), 1);
/// assert!(math2.is_prerequisite(&math1));
/// assert_eq!(math1, Course::new("m1", "Renamed", 4, vec![]));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    id: String,
    name: String,
    units: u32,
    #[serde(default)]
    prerequisites: Vec<Course>,
}

impl Course {
    /// Create a course.
    ///
    /// Prerequisites keep the order given here; the prerequisite rule
    /// reports missing ones in that order.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        units: u32,
        prerequisites: Vec<Course>,
    ) -> Self {
        let id = id.into();
        debug_assert!(units > 0, "course {id} must carry at least one unit");
        debug_assert!(
            prerequisites.iter().all(|p| p.id != id),
            "course {id} cannot be its own prerequisite"
        );
        Self {
            id,
            name: name.into(),
            units,
            prerequisites,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit weight used for load limits and GPA weighting.
    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn prerequisites(&self) -> &[Course] {
        &self.prerequisites
    }

    /// Whether `other` is a direct prerequisite of this course.
    pub fn is_prerequisite(&self, other: &Course) -> bool {
        self.prerequisites.iter().any(|p| p == other)
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Course {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Course {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

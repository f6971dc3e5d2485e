#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Beginner => "badge badge-beginner",
            Difficulty::Intermediate => "badge badge-intermediate",
            Difficulty::Advanced => "badge badge-advanced",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Course {
    pub name: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
}

pub const COURSES: &[Course] = &[
    Course {
        name: "Digital Literacy Basics",
        description: "Fundamental computer and internet skills",
        difficulty: Difficulty::Beginner,
        estimated_minutes: 120,
    },
    Course {
        name: "Computer Fundamentals",
        description: "Basic computer operations and file management",
        difficulty: Difficulty::Beginner,
        estimated_minutes: 90,
    },
    Course {
        name: "Internet & Email Skills",
        description: "Web browsing and email communication",
        difficulty: Difficulty::Beginner,
        estimated_minutes: 60,
    },
    Course {
        name: "Digital Marketing Essentials",
        description: "Social media and online marketing basics",
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 150,
    },
    Course {
        name: "Data Entry & Analysis",
        description: "Spreadsheet skills and data management",
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 100,
    },
    Course {
        name: "Online Business Skills",
        description: "E-commerce and digital entrepreneurship",
        difficulty: Difficulty::Advanced,
        estimated_minutes: 180,
    },
];

/// A 10-15 minute lesson shown as a card.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillSnap {
    pub title: &'static str,
    pub duration_minutes: u32,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub category: &'static str,
    pub is_completed: bool,
    pub is_offline_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_orders_easiest_first() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
    }

    #[test]
    fn catalog_keeps_login_selector_order() {
        let names: Vec<&str> = COURSES.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Digital Literacy Basics",
                "Computer Fundamentals",
                "Internet & Email Skills",
                "Digital Marketing Essentials",
                "Data Entry & Analysis",
                "Online Business Skills",
            ]
        );
    }

    #[test]
    fn badge_classes_are_distinct() {
        let classes = [
            Difficulty::Beginner.badge_class(),
            Difficulty::Intermediate.badge_class(),
            Difficulty::Advanced.badge_class(),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
    }
}

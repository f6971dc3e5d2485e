use crate::catalog::{Course, Difficulty, COURSES};

use super::summary::ResultSummary;

const MAX_RECOMMENDATIONS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub course: &'static Course,
    pub reason: String,
}

/// Picks the first courses of a learning path for the quiz results.
pub fn recommend(summary: &ResultSummary) -> Vec<Recommendation> {
    let entry_level = summary.level.is_entry_level();

    let mut courses: Vec<&'static Course> = COURSES
        .iter()
        .filter(|course| !entry_level || course.difficulty == Difficulty::Beginner)
        .collect();
    if entry_level {
        courses.sort_by_key(|course| course.name);
    } else {
        // Stable, so equal difficulties keep catalog order.
        courses.sort_by_key(|course| course.difficulty);
    }

    courses
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|course| Recommendation {
            course,
            reason: reason_for(course, summary),
        })
        .collect()
}

fn reason_for(course: &Course, summary: &ResultSummary) -> String {
    let name = course.name.to_lowercase();
    let mut reasons = Vec::new();

    if summary.level.is_entry_level() {
        reasons.push("Perfect for your current skill level");
    }

    if let Some(interest) = &summary.interest {
        let interest = interest.to_lowercase();
        if interest.split_whitespace().any(|word| name.contains(word)) {
            reasons.push("Matches your interests");
        }
    }

    if let Some(goal) = &summary.goal {
        let goal = goal.to_lowercase();
        if goal.contains("employment") && name.contains("literacy") {
            reasons.push("Essential for job applications");
        } else if goal.contains("business") && name.contains("marketing") {
            reasons.push("Great for starting a business");
        }
    }

    if reasons.is_empty() {
        "Recommended for skill development".to_string()
    } else {
        reasons.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::summary::ExperienceLevel;

    fn summary(level: ExperienceLevel, interest: &str, goal: &str) -> ResultSummary {
        ResultSummary {
            level,
            interest: Some(interest.to_string()),
            time_commitment: Some("30 minutes".to_string()),
            goal: Some(goal.to_string()),
        }
    }

    fn names(recs: &[Recommendation]) -> Vec<&'static str> {
        recs.iter().map(|r| r.course.name).collect()
    }

    #[test]
    fn beginners_get_beginner_courses_by_name() {
        let recs = recommend(&summary(ExperienceLevel::Beginner, "Digital marketing", "Start a business"));
        assert_eq!(
            names(&recs),
            vec!["Computer Fundamentals", "Digital Literacy Basics", "Internet & Email Skills"]
        );
        assert_eq!(recs[0].reason, "Perfect for your current skill level");
        assert_eq!(recs[1].reason, "Perfect for your current skill level; Matches your interests");
    }

    #[test]
    fn job_seekers_are_pointed_at_literacy() {
        let recs = recommend(&summary(ExperienceLevel::Basic, "Basic computer literacy", "Find employment"));
        let literacy = recs
            .iter()
            .find(|r| r.course.name == "Digital Literacy Basics")
            .unwrap();
        assert_eq!(
            literacy.reason,
            "Perfect for your current skill level; Matches your interests; Essential for job applications"
        );
    }

    #[test]
    fn experienced_learners_see_easiest_courses_first() {
        let recs = recommend(&summary(
            ExperienceLevel::Intermediate,
            "Online business skills",
            "Improve current job",
        ));
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert_eq!(recs[0].course.name, "Digital Literacy Basics");
        assert_eq!(recs[0].reason, "Recommended for skill development");
        assert_eq!(recs[2].course.name, "Internet & Email Skills");
        assert_eq!(recs[2].reason, "Matches your interests");
    }

    #[test]
    fn equal_difficulty_keeps_catalog_order() {
        let recs = recommend(&summary(ExperienceLevel::Intermediate, "Data skills", "Improve current job"));
        assert_eq!(
            names(&recs),
            vec!["Digital Literacy Basics", "Computer Fundamentals", "Internet & Email Skills"]
        );
    }

    #[test]
    fn partial_summary_still_recommends() {
        let partial = ResultSummary {
            level: ExperienceLevel::Intermediate,
            interest: None,
            time_commitment: None,
            goal: None,
        };
        let recs = recommend(&partial);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert!(recs.iter().all(|r| r.reason == "Recommended for skill development"));
    }
}

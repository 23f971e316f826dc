use crate::models::Activity;

// Catalog the service starts with on every boot.
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Basketball Team",
            "Competitive basketball team for intramural and regional games",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            15,
        ),
        Activity::new(
            "Soccer Club",
            "Practice soccer skills and compete in friendly matches",
            "Wednesdays and Saturdays, 3:00 PM - 5:00 PM",
            22,
        ),
        Activity::new(
            "Art Club",
            "Explore painting, drawing, and other visual arts",
            "Mondays, 3:30 PM - 5:00 PM",
            18,
        ),
        Activity::new(
            "Drama Club",
            "Act, direct, and produce school plays and performances",
            "Thursdays, 4:00 PM - 6:00 PM",
            20,
        ),
        Activity::new(
            "Math Club",
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            16,
        ),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_names_are_unique() {
        let seed = seed_activities();
        let names: HashSet<&str> = seed.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names.len(), seed.len());
    }

    #[test]
    fn seed_contains_required_activities() {
        let seed = seed_activities();
        for name in [
            "Basketball Team",
            "Soccer Club",
            "Chess Club",
            "Art Club",
            "Programming Class",
        ] {
            assert!(seed.iter().any(|a| a.name == name), "missing {}", name);
        }
    }

    #[test]
    fn seed_rosters_fit_capacity() {
        for a in seed_activities() {
            assert!(a.max_participants > 0);
            assert!(a.participants.len() <= a.max_participants as usize);
        }
    }
}

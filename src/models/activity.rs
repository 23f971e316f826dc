use serde::{ser::Serializer, Serialize};

use super::ParticipantEmail;

// One extracurricular offering. `name` is the directory key and is not part of
// the JSON record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip_serializing)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for p in participants {
            let p = p.into();
            if !self.participants.contains(&p) {
                self.participants.push(p);
            }
        }
        self
    }

    pub fn has_participant(&self, email: &ParticipantEmail) -> bool {
        self.participants.iter().any(|p| p == email.as_str())
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Appends `email` to the roster. Returns false if it was already present.
    pub fn add_participant(&mut self, email: &ParticipantEmail) -> bool {
        if self.has_participant(email) {
            return false;
        }
        self.participants.push(email.as_str().to_string());
        true
    }

    /// Removes `email`, keeping the order of the remaining roster. Returns
    /// false if it was not present.
    pub fn remove_participant(&mut self, email: &ParticipantEmail) -> bool {
        let Some(idx) = self.participants.iter().position(|p| p == email.as_str()) else {
            return false;
        };
        self.participants.remove(idx);
        true
    }
}

/// Listing of the whole directory, serialized as a JSON object keyed by
/// activity name in directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog(pub Vec<Activity>);

#[cfg(test)]
impl ActivityCatalog {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|a| (a.name.as_str(), a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new("Chess Club", "Chess", "Fridays", 2)
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"])
    }

    #[test]
    fn with_participants_drops_duplicates() {
        let a = Activity::new("Art Club", "Art", "Mondays", 5).with_participants([
            "a@mergington.edu",
            "b@mergington.edu",
            "a@mergington.edu",
        ]);
        assert_eq!(a.participants, vec!["a@mergington.edu", "b@mergington.edu"]);
    }

    #[test]
    fn add_and_remove_keep_roster_order() {
        let mut a = chess();
        let new = ParticipantEmail::from("new@mergington.edu");
        assert!(a.add_participant(&new));
        assert!(!a.add_participant(&new));

        let michael = ParticipantEmail::from("michael@mergington.edu");
        assert!(a.remove_participant(&michael));
        assert!(!a.remove_participant(&michael));
        assert_eq!(
            a.participants,
            vec!["daniel@mergington.edu", "new@mergington.edu"]
        );
    }

    #[test]
    fn full_once_roster_reaches_capacity() {
        let mut a = chess();
        assert!(a.is_full());
        a.remove_participant(&ParticipantEmail::from("daniel@mergington.edu"));
        assert!(!a.is_full());
    }

    #[test]
    fn catalog_serializes_as_object_in_directory_order() {
        let catalog = ActivityCatalog(vec![
            chess(),
            Activity::new("Art Club", "Paint", "Mondays", 18),
        ]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(
            json,
            r#"{"Chess Club":{"description":"Chess","schedule":"Fridays","max_participants":2,"participants":["michael@mergington.edu","daniel@mergington.edu"]},"Art Club":{"description":"Paint","schedule":"Mondays","max_participants":18,"participants":[]}}"#
        );
    }
}

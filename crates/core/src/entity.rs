use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Type tag carried by row actions and detail views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Activity,
    Project,
    User,
    Testimonial,
}

impl EntityKind {
    /// Tag used in action dispatch and in the placeholder messages.
    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Activity => "activity",
            EntityKind::Project => "project",
            EntityKind::User => "user",
            EntityKind::Testimonial => "testimonial",
        }
    }

    /// French title prefix of the detail modal.
    pub fn display_name(self) -> &'static str {
        match self {
            EntityKind::Activity => "Activité",
            EntityKind::Project => "Projet",
            EntityKind::User => "Utilisateur",
            EntityKind::Testimonial => "Témoignage",
        }
    }

    /// Activities are read-only; everything else offers an edit action.
    pub fn is_editable(self) -> bool {
        !matches!(self, EntityKind::Activity)
    }

    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Activity,
            EntityKind::Project,
            EntityKind::User,
            EntityKind::Testimonial,
        ]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::all()
            .iter()
            .copied()
            .find(|k| k.tag() == s)
            .ok_or_else(|| Error::UnknownEntity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for &k in EntityKind::all() {
            assert_eq!(k.tag().parse::<EntityKind>().unwrap(), k);
        }
        assert!(matches!(
            "projet".parse::<EntityKind>(),
            Err(Error::UnknownEntity(tag)) if tag == "projet"
        ));
    }

    #[test]
    fn only_activity_is_read_only() {
        let read_only: Vec<_> = EntityKind::all()
            .iter()
            .filter(|k| !k.is_editable())
            .collect();
        assert_eq!(read_only, vec![&EntityKind::Activity]);
    }
}

//! Hardcoded sample data. Each loader reads its own slice; nothing mutates it.

use crate::records::{Activity, Goal, Project, Status, Testimonial, User};

pub const ACTIVITIES: &[Activity] = &[
    Activity {
        id: 1,
        kind: "Projet",
        description: "Nouveau projet créé: Éducation pour tous",
        user: "Admin",
        date: "2025-01-10 14:30",
    },
    Activity {
        id: 2,
        kind: "Utilisateur",
        description: "Nouvel utilisateur inscrit",
        user: "Système",
        date: "2025-01-10 13:15",
    },
    Activity {
        id: 3,
        kind: "Témoignage",
        description: "Témoignage approuvé",
        user: "Modérateur",
        date: "2025-01-10 12:00",
    },
    Activity {
        id: 4,
        kind: "Projet",
        description: "Projet mis à jour: Projet Vert",
        user: "Admin",
        date: "2025-01-10 11:45",
    },
    Activity {
        id: 5,
        kind: "Utilisateur",
        description: "Profil utilisateur modifié",
        user: "Admin",
        date: "2025-01-10 10:20",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        name: "Éducation pour tous",
        category: "Éducation",
        status: Status::Active,
        budget: "€15,000",
        date: "2025-01-01",
    },
    Project {
        id: 2,
        name: "Projet Vert",
        category: "Durabilité",
        status: Status::Active,
        budget: "€25,000",
        date: "2024-12-15",
    },
    Project {
        id: 3,
        name: "Aide Humanitaire",
        category: "Humanitaire",
        status: Status::Pending,
        budget: "€30,000",
        date: "2025-01-05",
    },
    Project {
        id: 4,
        name: "Réseau Communautaire",
        category: "Communauté",
        status: Status::Active,
        budget: "€10,000",
        date: "2024-11-20",
    },
];

pub const USERS: &[User] = &[
    User {
        id: 1,
        name: "Jean Dupont",
        email: "jean@example.com",
        role: "Admin",
        status: Status::Active,
        date: "2024-01-15",
    },
    User {
        id: 2,
        name: "Marie Martin",
        email: "marie@example.com",
        role: "Modérateur",
        status: Status::Active,
        date: "2024-03-20",
    },
    User {
        id: 3,
        name: "Pierre Durand",
        email: "pierre@example.com",
        role: "Utilisateur",
        status: Status::Active,
        date: "2024-06-10",
    },
    User {
        id: 4,
        name: "Sophie Bernard",
        email: "sophie@example.com",
        role: "Utilisateur",
        status: Status::Inactive,
        date: "2024-08-05",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        author: "Amina Mohamed",
        role: "Directrice",
        content: "PeaceConnect a transformé...",
        status: Status::Approved,
        date: "2025-01-08",
    },
    Testimonial {
        id: 2,
        author: "Jean Dupont",
        role: "Coordinateur",
        content: "L'approche collaborative...",
        status: Status::Approved,
        date: "2025-01-05",
    },
    Testimonial {
        id: 3,
        author: "Sarah Kim",
        role: "Responsable",
        content: "Les projets durables...",
        status: Status::Pending,
        date: "2025-01-10",
    },
];

pub const GOAL_COUNT: usize = 17;

pub const GOALS: [Goal; GOAL_COUNT] = [
    Goal { number: 1, title: "Pas de pauvreté" },
    Goal { number: 2, title: "Faim « zéro »" },
    Goal { number: 3, title: "Bonne santé et bien-être" },
    Goal { number: 4, title: "Éducation de qualité" },
    Goal { number: 5, title: "Égalité entre les sexes" },
    Goal { number: 6, title: "Eau propre et assainissement" },
    Goal { number: 7, title: "Énergie propre et d'un coût abordable" },
    Goal { number: 8, title: "Travail décent et croissance économique" },
    Goal { number: 9, title: "Industrie, innovation et infrastructure" },
    Goal { number: 10, title: "Inégalités réduites" },
    Goal { number: 11, title: "Villes et communautés durables" },
    Goal { number: 12, title: "Consommation et production responsables" },
    Goal { number: 13, title: "Mesures relatives à la lutte contre les changements climatiques" },
    Goal { number: 14, title: "Vie aquatique" },
    Goal { number: 15, title: "Vie terrestre" },
    Goal { number: 16, title: "Paix, justice et institutions efficaces" },
    Goal { number: 17, title: "Partenariats pour la réalisation des objectifs" },
];

pub fn goal(number: u8) -> Option<&'static Goal> {
    GOALS.iter().find(|g| g.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goals_are_numbered_one_to_seventeen() {
        for (i, g) in GOALS.iter().enumerate() {
            assert_eq!(g.number as usize, i + 1);
            assert!(!g.title.trim().is_empty());
        }
        assert_eq!(goal(16).map(|g| g.title), Some("Paix, justice et institutions efficaces"));
        assert!(goal(18).is_none());
    }

    #[test]
    fn ids_are_unique_per_dataset() {
        fn unique(ids: Vec<u32>) -> bool {
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            sorted.len() == ids.len()
        }
        assert!(unique(ACTIVITIES.iter().map(|a| a.id).collect()));
        assert!(unique(PROJECTS.iter().map(|p| p.id).collect()));
        assert!(unique(USERS.iter().map(|u| u.id).collect()));
        assert!(unique(TESTIMONIALS.iter().map(|t| t.id).collect()));
    }

    #[test]
    fn testimonial_contents_are_the_short_table_texts() {
        assert_eq!(TESTIMONIALS[1].content, "L'approche collaborative...");
        assert!(TESTIMONIALS.iter().all(|t| t.content.chars().count() <= 50));
    }
}

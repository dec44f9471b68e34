// Static project records and slug lookup.
//
// Defined at build time, immutable at runtime. Cross-component references
// carry the slug by value, never a live reference to another widget.

use fnv::FnvHashMap;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub full_description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub category: &'static str,
    pub images: &'static [&'static str],
    pub features: &'static [&'static str],
}

pub static PROJECTS: &[Project] = &[
    Project {
        slug: "tijara-pos",
        title: "Tijara-POS",
        description: "A comprehensive Point-of-Sale system built for modern retail. \
            Features real-time inventory tracking, multi-payment support, and \
            intelligent analytics dashboard.",
        full_description: "Tijara-POS is a complete Point-of-Sale solution designed \
            for modern retail businesses. It provides real-time inventory management, \
            supports multiple payment methods, and includes a powerful analytics \
            dashboard for business insights.",
        tech_stack: &["Python", "Flask", "SQLite", "JavaScript"],
        category: "System Design",
        images: &[
            "/projects/tijara-pos/1.png",
            "/projects/tijara-pos/2.png",
            "/projects/tijara-pos/3.png",
            "/projects/tijara-pos/4.png",
        ],
        features: &[
            "Real-time inventory tracking",
            "Multi-payment support",
            "Analytics dashboard",
            "Invoice generation",
        ],
    },
    Project {
        slug: "suraya",
        title: "Suraya",
        description: "Premium e-commerce platform with seamless checkout experience, \
            personalized recommendations, and an elegant UI designed for conversion.",
        full_description: "Suraya is a premium e-commerce platform specializing in \
            luxury products. It features a seamless checkout experience, personalized \
            product recommendations, and an elegant user interface optimized for high \
            conversion rates.",
        tech_stack: &["React", "Node.js", "MongoDB", "Tailwind"],
        category: "E-Commerce",
        images: &[
            "/projects/suraya/1.png",
            "/projects/suraya/2.png",
            "/projects/suraya/3.png",
        ],
        features: &[
            "Seamless checkout",
            "Personalized recommendations",
            "Elegant UI design",
            "Inventory management",
        ],
    },
    Project {
        slug: "school-transit",
        title: "School Transit",
        description: "Smart transportation management system for schools. Real-time \
            GPS tracking, route optimization, and parent notification system.",
        full_description: "School Transit is an intelligent transportation management \
            system designed for educational institutions. It provides real-time GPS \
            tracking of school buses, route optimization algorithms, and an automated \
            parent notification system for safety and convenience.",
        tech_stack: &["Python", "C", "PostgreSQL", "React Native"],
        category: "IoT / Tracking",
        images: &[
            "/projects/school-transit/1.png",
            "/projects/school-transit/2.png",
            "/projects/school-transit/3.png",
            "/projects/school-transit/4.png",
            "/projects/school-transit/5.png",
            "/projects/school-transit/6.png",
            "/projects/school-transit/7.png",
            "/projects/school-transit/8.png",
        ],
        features: &[
            "Real-time GPS tracking",
            "Route optimization",
            "Parent notifications",
            "Driver management",
            "Safety monitoring",
        ],
    },
];

fn slug_index() -> &'static FnvHashMap<&'static str, usize> {
    static INDEX: OnceLock<FnvHashMap<&'static str, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        PROJECTS
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug, i))
            .collect()
    })
}

/// Look up a project by slug; `None` routes to the not-found presentation.
pub fn project_by_slug(slug: &str) -> Option<&'static Project> {
    slug_index().get(slug).map(|&i| &PROJECTS[i])
}

/// Every slug exactly once, in declared order.
pub fn all_slugs() -> Vec<&'static str> {
    PROJECTS.iter().map(|p| p.slug).collect()
}

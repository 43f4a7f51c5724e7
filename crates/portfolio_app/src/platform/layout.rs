use portfolio_core::{ElementId, ElementKind};

/// Height of the simulated browser window, in CSS pixels.
pub const VIEWPORT_HEIGHT: f64 = 800.0;

/// A watched element and where it sits on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
    pub id: ElementId,
    pub label: &'static str,
    pub kind: ElementKind,
    pub top: f64,
    pub height: f64,
}

const ELEMENTS: [(&str, ElementKind, f64, f64); 17] = [
    ("Years Experience", ElementKind::Counter { target: 5 }, 700.0, 80.0),
    ("Projects Delivered", ElementKind::Counter { target: 50 }, 700.0, 80.0),
    ("Deployments", ElementKind::Counter { target: 1200 }, 700.0, 80.0),
    ("Cloud & Infrastructure", ElementKind::Reveal, 1100.0, 320.0),
    ("Automation & CI/CD", ElementKind::Reveal, 1100.0, 320.0),
    ("Monitoring & ML", ElementKind::Reveal, 1100.0, 320.0),
    ("Kubernetes", ElementKind::SkillBar { width_pct: 90 }, 1180.0, 12.0),
    ("Terraform", ElementKind::SkillBar { width_pct: 85 }, 1230.0, 12.0),
    ("AWS", ElementKind::SkillBar { width_pct: 88 }, 1280.0, 12.0),
    ("Python", ElementKind::SkillBar { width_pct: 80 }, 1330.0, 12.0),
    ("Multi-Cloud Infrastructure", ElementKind::Reveal, 1700.0, 420.0),
    ("CI/CD Pipeline Automation", ElementKind::Reveal, 1700.0, 420.0),
    ("Monitoring & Observability", ElementKind::Reveal, 2200.0, 420.0),
    ("Senior DevOps Engineer", ElementKind::Reveal, 2900.0, 220.0),
    ("Cloud Engineer", ElementKind::Reveal, 3160.0, 220.0),
    ("AWS Solutions Architect", ElementKind::Reveal, 3700.0, 140.0),
    ("Certified Kubernetes Administrator", ElementKind::Reveal, 3700.0, 140.0),
];

/// Total scrollable height of the page.
pub const PAGE_HEIGHT: f64 = 4600.0;

pub fn page_elements() -> Vec<PageElement> {
    ELEMENTS
        .iter()
        .zip(1u32..)
        .map(|((label, kind, top, height), id)| PageElement {
            id: ElementId(id),
            label: *label,
            kind: *kind,
            top: *top,
            height: *height,
        })
        .collect()
}

pub fn label_of(elements: &[PageElement], id: ElementId) -> &'static str {
    elements
        .iter()
        .find(|element| element.id == id)
        .map_or("?", |element| element.label)
}

use portfolio_core::{AppViewModel, ContactStatus, ElementKind, Severity};

use crate::platform::layout::{label_of, PageElement};

const BAR_CELLS: usize = 20;

/// Renders the whole view model as plain text lines.
pub fn render(view: &AppViewModel, elements: &[PageElement]) -> Vec<String> {
    let mut lines = Vec::new();

    let clock = view.clock.as_deref().unwrap_or("--:--:-- UTC");
    let year = view
        .footer_year
        .map_or_else(String::new, |year| format!(" | (c) {year}"));
    lines.push(format!("== theme: {} | {}{}", view.theme, clock, year));

    lines.push("live logs:".to_string());
    if view.log_lines.is_empty() {
        lines.push("  (waiting)".to_string());
    }
    for line in &view.log_lines {
        let tag = match line.severity {
            Severity::Success => "ok",
            Severity::Info => "..",
        };
        lines.push(format!("  [{tag}] {}", line.text));
    }

    for counter in &view.counters {
        let target = elements
            .iter()
            .find(|element| element.id == counter.element)
            .and_then(|element| match element.kind {
                ElementKind::Counter { target } => Some(target),
                _ => None,
            });
        let suffix = if counter.finished { "" } else { " ..." };
        match target {
            Some(target) => lines.push(format!(
                "stat {}: {}/{}{}",
                label_of(elements, counter.element),
                counter.value,
                target,
                suffix
            )),
            None => lines.push(format!(
                "stat {}: {}{}",
                label_of(elements, counter.element),
                counter.value,
                suffix
            )),
        }
    }

    for bar in &view.skill_bars {
        lines.push(format!(
            "skill {:<12} {} {:>3}%",
            label_of(elements, bar.element),
            bar_cells(bar.width_pct),
            bar.width_pct
        ));
    }

    let reveal_total = elements
        .iter()
        .filter(|element| element.kind == ElementKind::Reveal)
        .count();
    lines.push(format!(
        "revealed {}/{}: {}",
        view.revealed.len(),
        reveal_total,
        view.revealed
            .iter()
            .map(|id| label_of(elements, *id))
            .collect::<Vec<_>>()
            .join(", ")
    ));

    if let Some(modal) = &view.modal {
        lines.push(format!("+-- {} --+", modal.title));
        lines.push(format!("| {}", modal.description));
        lines.push("| Key Features".to_string());
        for feature in &modal.features {
            lines.push(format!("|   - {feature}"));
        }
        lines.push(format!("| Technologies: {}", modal.technologies.join(", ")));
        lines.push("| Project Metrics".to_string());
        for metric in &modal.metrics {
            lines.push(format!("|   {:>8}  {}", metric.value, metric.label));
        }
        lines.push(format!(
            "| [View Code]({}) [Live Demo]({})",
            modal.github, modal.demo
        ));
        lines.push("+-- close | backdrop --+".to_string());
    }

    let button = match &view.contact.status {
        ContactStatus::Idle => "[Send Message]".to_string(),
        ContactStatus::Sending => "[Sending...]".to_string(),
        ContactStatus::Sent => "[Message Sent!]".to_string(),
        ContactStatus::Failed { message } => format!("[Send Failed] {message}"),
    };
    let fields = &view.contact.fields;
    lines.push(format!(
        "contact: name={:?} email={:?} subject={:?} message={} chars {}",
        fields.name,
        fields.email,
        fields.subject,
        fields.message.chars().count(),
        button
    ));

    lines
}

fn bar_cells(width_pct: u8) -> String {
    let filled = usize::from(width_pct.min(100)) * BAR_CELLS / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_CELLS - filled))
}

#[cfg(test)]
mod tests {
    use portfolio_core::{
        update, AppState, ContactField, ElementId, Msg, ProjectId, Theme,
    };

    use super::*;
    use crate::platform::layout::page_elements;

    #[test]
    fn renders_modal_and_contact_state() {
        let (state, _) = update(
            AppState::default(),
            Msg::PageLoaded {
                theme: Theme::Dark,
                year: 2026,
            },
        );
        let (state, _) = update(
            state,
            Msg::ProjectOpened {
                project: ProjectId(2),
            },
        );
        let (state, _) = update(
            state,
            Msg::ContactFieldEdited {
                field: ContactField::Name,
                value: "Ada".to_string(),
            },
        );

        let lines = render(&state.view(), &page_elements());
        assert_eq!(lines[0], "== theme: dark | --:--:-- UTC | (c) 2026");
        assert!(lines.contains(&"+-- CI/CD Pipeline Automation --+".to_string()));
        assert!(lines.iter().any(|line| line.contains("time saved")));
        assert!(lines
            .last()
            .unwrap()
            .starts_with("contact: name=\"Ada\""));
    }

    #[test]
    fn skill_bars_fill_proportionally() {
        assert_eq!(bar_cells(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(bar_cells(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(bar_cells(100), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn counters_show_progress_against_target() {
        let elements = page_elements();
        let deployments = elements
            .iter()
            .find(|element| element.label == "Deployments")
            .unwrap();
        let (state, _) = update(
            AppState::default(),
            Msg::WatchElement {
                element: deployments.id,
                kind: deployments.kind,
            },
        );
        let (state, _) = update(
            state,
            Msg::ElementVisibility {
                element: deployments.id,
                ratio: 1.0,
            },
        );
        let lines = render(&state.view(), &elements);
        assert!(lines.contains(&"stat Deployments: 12/1200 ...".to_string()));
        assert_eq!(label_of(&elements, ElementId(999)), "?");
    }
}

use crate::content::{Project, PORTFOLIO_CATEGORIES};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterSelection {
    #[default]
    All,
    Category(&'static str),
}

impl FilterSelection {
    pub const ALL_LABEL: &'static str = "Все";

    pub fn from_label(label: &'static str) -> Self {
        if label == Self::ALL_LABEL {
            FilterSelection::All
        } else {
            FilterSelection::Category(label)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterSelection::All => Self::ALL_LABEL,
            FilterSelection::Category(label) => label,
        }
    }

    /// Tabs rendered above the grid, in order.
    pub fn tabs() -> impl Iterator<Item = FilterSelection> {
        PORTFOLIO_CATEGORIES.iter().copied().map(FilterSelection::from_label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Either label contains the other. Lets the short "Коммерческая" tab
    /// pick up "Коммерческая недвижимость", but can over-match.
    #[default]
    Substring,
    Exact,
}

impl MatchPolicy {
    pub fn matches(self, selection: &str, category: &str) -> bool {
        match self {
            MatchPolicy::Substring => category.contains(selection) || selection.contains(category),
            MatchPolicy::Exact => category == selection,
        }
    }
}

pub fn filter_projects(projects: &[Project], selection: FilterSelection) -> Vec<&Project> {
    filter_projects_with(projects, selection, MatchPolicy::default())
}

pub fn filter_projects_with(
    projects: &[Project],
    selection: FilterSelection,
    policy: MatchPolicy,
) -> Vec<&Project> {
    match selection {
        FilterSelection::All => projects.iter().collect(),
        FilterSelection::Category(label) => projects
            .iter()
            .filter(|project| policy.matches(label, project.category))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn all_returns_every_project_in_order() {
        let visible = filter_projects(PROJECTS, FilterSelection::All);
        assert_eq!(ids(&visible), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn short_tab_label_matches_longer_category() {
        let visible = filter_projects(PROJECTS, FilterSelection::Category("Коммерческая"));
        assert_eq!(ids(&visible), [1]);
    }

    #[test]
    fn exact_policy_rejects_partial_labels() {
        let selection = FilterSelection::Category("Коммерческая");
        assert!(filter_projects_with(PROJECTS, selection, MatchPolicy::Exact).is_empty());
    }

    #[test]
    fn tabs_start_with_all() {
        let tabs: Vec<_> = FilterSelection::tabs().collect();
        assert_eq!(tabs.len(), 4);
        assert_eq!(tabs[0], FilterSelection::All);
        assert_eq!(tabs[3].label(), "Культурные объекты");
    }
}

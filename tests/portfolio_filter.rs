use architectura::content::{Project, PROJECTS};
use architectura::filter::{filter_projects, FilterSelection};

fn project(id: u32, category: &'static str) -> Project {
    Project {
        id,
        title: "Тест",
        category,
        year: 2024,
        image: "",
        description: "",
    }
}

#[test]
fn all_is_identity_and_idempotent() {
    let once: Vec<Project> = filter_projects(PROJECTS, FilterSelection::All)
        .into_iter()
        .copied()
        .collect();
    assert_eq!(once, PROJECTS);

    let twice: Vec<Project> = filter_projects(&once, FilterSelection::All)
        .into_iter()
        .copied()
        .collect();
    assert_eq!(twice, once);
}

#[test]
fn residential_tab_keeps_only_residential_projects() {
    let items = [
        project(1, "Жилые комплексы"),
        project(2, "Коммерческая недвижимость"),
    ];
    let visible = filter_projects(&items, FilterSelection::Category("Жилые комплексы"));
    assert_eq!(visible, [&items[0]]);
}

#[test]
fn filtering_preserves_order() {
    let items = [
        project(3, "Культурные объекты"),
        project(1, "Жилые комплексы"),
        project(2, "Культурные объекты"),
    ];
    let visible: Vec<u32> = filter_projects(&items, FilterSelection::from_label("Культурные объекты"))
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(visible, [3, 2]);
}

#[test]
fn category_shorter_than_selection_still_matches() {
    // "Жилые" is contained in the selected label, so it is shown too.
    let items = [project(1, "Жилые")];
    let visible = filter_projects(&items, FilterSelection::Category("Жилые комплексы"));
    assert_eq!(visible.len(), 1);
}

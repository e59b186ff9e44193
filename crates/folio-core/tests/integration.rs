//! End-to-end walkthroughs of the page model.

use std::sync::Arc;
use std::time::Duration;

use folio_core::{
    run_submission, ContactFormState, FormField, FormTimings, ModalTarget, NavState,
    PortfolioContent, ProjectsView, Section, SimulatedTransport, ThemeStore, ViewLifetime,
    NAV_LINKS,
};
use parking_lot::Mutex;

#[test]
fn browse_projects_and_open_details() {
    let content = PortfolioContent::builtin().unwrap();
    let mut view = ProjectsView::new();

    // Initial render shows the preview only
    assert_eq!(content.projects.len(), 6);
    let shown: Vec<_> = view.visible(&content.projects).iter().map(|p| p.id).collect();
    assert_eq!(shown, vec![1, 2, 3]);
    assert!(ProjectsView::has_more(content.projects.len()));

    // Show more reveals every card
    view.toggle_show_more();
    assert_eq!(view.visible(&content.projects).len(), 6);

    // Open project 4
    view.open(4);
    let selected = view.selected_project(&content.projects).unwrap();
    assert_eq!(selected.id, 4);
    assert!(selected.full_description.starts_with("This personal portfolio website"));
    assert_eq!(selected.demo_link.as_deref(), Some("https://example.com/portfolio"));
    assert_eq!(
        selected.github_link.as_deref(),
        Some("https://github.com/myusername/portfolio")
    );

    // Clicking inside the dialog keeps it open, the backdrop closes it
    view.modal_click(ModalTarget::Content);
    assert!(view.selected.is_some());
    view.modal_click(ModalTarget::Backdrop);
    assert!(view.selected.is_none());
}

#[test]
fn mobile_navigation_round_trip() {
    let mut theme = ThemeStore::default();
    let mut nav = NavState::new();

    nav.on_scroll(120.0);
    nav.open_menu();
    theme.toggle();

    let anchor = nav.follow_link(&NAV_LINKS[2]);
    assert_eq!(anchor, "#projects");
    assert!(!nav.menu_open);
    assert!(nav.scrolled);
    assert!(theme.is_dark());
    assert!(Section::all().iter().any(|s| s.anchor_id() == "projects"));
}

#[tokio::test(start_paused = true)]
async fn contact_form_lifecycle() {
    let store = Arc::new(Mutex::new(ContactFormState::new()));
    {
        let mut form = store.lock();
        form.update_field(FormField::Name, "Grace");
        form.update_field(FormField::Email, "grace@example.com");
        form.update_field(FormField::Subject, "Compilers");
        form.update_field(FormField::Message, "Coffee?");
    }

    let timings = FormTimings {
        submit_delay: Duration::from_millis(200),
        banner_duration: Duration::from_millis(800),
    };
    let lifetime = ViewLifetime::new();

    let task = tokio::spawn({
        let mut store = store.clone();
        let lifetime = lifetime.clone();
        async move {
            let transport = SimulatedTransport::from_timings(&timings);
            run_submission(&mut store, &transport, timings, &lifetime).await
        }
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(store.lock().submitting);

    tokio::time::sleep(Duration::from_millis(200)).await;
    {
        let form = store.lock();
        assert!(form.submitted);
        assert!(form.fields.is_empty());
    }

    tokio::time::sleep(Duration::from_millis(800)).await;
    assert!(!store.lock().submitted);
    assert!(task.await.unwrap().is_ok());
}

// crates/wayfarer-core/tests/reconcile.rs
mod common;

use common::{country, japan, ms, united, StubApi};
use std::sync::Arc;
use tokio::time::Instant;
use wayfarer_core::api::{ApiError, Lookup};
use wayfarer_core::notice::NoticeKind;
use wayfarer_core::prelude::*;
use wayfarer_core::reconcile::NETWORK_ERROR_MESSAGE;

struct Harness {
    api: Arc<StubApi>,
    coord: RequestCoordinator<StubApi>,
    reconciler: ResultReconciler<RecordingMap>,
}

impl Harness {
    fn new(api: StubApi, config: &WayfarerConfig) -> Self {
        let api = Arc::new(api);
        Self {
            coord: RequestCoordinator::new(api.clone(), config),
            reconciler: ResultReconciler::new(RecordingMap::default(), RecordingMap::default(), config),
            api,
        }
    }

    async fn search(&mut self, raw: &str) -> CommitDecision {
        let query = validate(raw).unwrap();
        let resolved = self.coord.search(Surface::Home, &query).await;
        self.apply(&resolved)
    }

    fn apply(&mut self, resolved: &Resolved) -> CommitDecision {
        self.reconciler
            .reconcile(self.coord.tokens(), resolved, Instant::now())
    }

    fn home(&self) -> &ViewState {
        self.reconciler.view(Surface::Home)
    }

    fn notices(&mut self) -> Vec<Notice> {
        self.reconciler.notices_mut().visible(Instant::now()).to_vec()
    }
}

fn world() -> StubApi {
    StubApi::new()
        .ok("Japan", vec![japan()])
        .ok("United", united())
        .err("Broken", ApiError::Status(503))
}

// ---- COMMITS ----

#[tokio::test]
async fn japan_renders_one_card_and_one_marker() {
    let mut h = Harness::new(world(), &WayfarerConfig::default());

    let decision = h.search("Japan").await;
    assert!(decision.is_commit());

    let view = h.home();
    assert_eq!(view.records().len(), 1);
    let record = &view.records()[0];
    assert_eq!(record.name(), "Japan");
    assert_eq!(record.capital_label(), "Tokyo");
    assert_eq!(record.population_label(), "125.7M");

    assert_eq!(view.markers().len(), 1);
    assert_eq!(view.markers()[0].popup, "Japan\nCapital: Tokyo");
    assert_eq!(h.reconciler.map(Surface::Home).markers().len(), 1);
    assert_eq!(h.api.calls(), 1);
}

#[tokio::test]
async fn viewport_covers_every_marker() {
    let mut h = Harness::new(world(), &WayfarerConfig::default());

    h.search("United").await;

    let view = h.home();
    assert!(view.records().len() >= 3);
    assert_eq!(view.markers().len(), view.records().len());

    let viewport = view.viewport().expect("map was fitted");
    for marker in view.markers() {
        assert!(viewport.contains(&marker.position), "{:?} outside {:?}", marker.position, viewport);
    }
    let map = h.reconciler.map(Surface::Home);
    assert_eq!(map.viewport(), Some(viewport));
    assert_eq!(map.fit_calls(), 1);
}

#[tokio::test]
async fn records_without_coordinates_get_no_marker() {
    let api = StubApi::new().ok(
        "Island",
        vec![
            country("North Island", "A", 10, Some((10.0, 10.0))),
            country("Lost Island", "B", 20, None),
            country("South Island", "C", 30, Some((-10.0, 20.0))),
        ],
    );
    let mut h = Harness::new(api, &WayfarerConfig::default());

    h.search("Island").await;

    let view = h.home();
    assert_eq!(view.records().len(), 3);
    let indices: Vec<usize> = view.markers().iter().map(|m| m.record).collect();
    assert_eq!(indices, [0, 2]);
    assert_eq!(view.stats(), ViewStats { records: 3, markers: 2 });
}

#[tokio::test]
async fn no_coordinates_at_all_leaves_the_map_where_it_was() {
    let api = StubApi::new()
        .ok("Japan", vec![japan()])
        .ok("Nowhere", vec![country("Nowhere", "None", 1, None)]);
    let mut h = Harness::new(api, &WayfarerConfig::default());

    h.search("Japan").await;
    let before = h.reconciler.map(Surface::Home).viewport();
    h.search("Nowhere").await;

    assert_eq!(h.home().records().len(), 1);
    assert!(h.home().markers().is_empty());
    assert!(h.reconciler.map(Surface::Home).markers().is_empty());
    assert_eq!(h.reconciler.map(Surface::Home).viewport(), before);
    assert_eq!(h.reconciler.map(Surface::Home).fit_calls(), 1);
}

#[tokio::test]
async fn reconciling_twice_is_a_no_op() {
    let mut h = Harness::new(world(), &WayfarerConfig::default());
    let query = validate("Japan").unwrap();
    let resolved = h.coord.search(Surface::Home, &query).await;

    assert!(h.apply(&resolved).is_commit());
    assert_eq!(
        h.apply(&resolved),
        CommitDecision::Discard(DiscardReason::AlreadyCommitted)
    );
    assert_eq!(h.reconciler.map(Surface::Home).fit_calls(), 1);
    assert_eq!(h.reconciler.map(Surface::Home).markers().len(), 1);
}

#[tokio::test]
async fn reconciling_a_failure_twice_posts_one_notice() {
    let mut h = Harness::new(world(), &WayfarerConfig::default());
    let query = validate("Broken").unwrap();
    let resolved = h.coord.search(Surface::Home, &query).await;

    assert_eq!(h.apply(&resolved), CommitDecision::Discard(DiscardReason::NetworkError));
    assert_eq!(
        h.apply(&resolved),
        CommitDecision::Discard(DiscardReason::AlreadyCommitted)
    );
    assert_eq!(h.notices().len(), 1);
}

#[tokio::test]
async fn reconciling_an_empty_result_twice_posts_one_notice() {
    let mut h = Harness::new(world(), &WayfarerConfig::default());
    let query = validate("Xyzzyland").unwrap();
    let resolved = h.coord.search(Surface::Home, &query).await;

    assert_eq!(h.apply(&resolved), CommitDecision::Discard(DiscardReason::Empty));
    assert_eq!(
        h.apply(&resolved),
        CommitDecision::Discard(DiscardReason::AlreadyCommitted)
    );
    assert_eq!(h.notices().len(), 1);
}

// ---- NOTHING FOUND / FAILURES ----

#[tokio::test]
async fn nothing_found_keeps_cards_and_posts_info() {
    let mut h = Harness::new(world(), &WayfarerConfig::default());
    h.search("Japan").await;

    let decision = h.search("Xyzzyland").await;

    assert_eq!(decision, CommitDecision::Discard(DiscardReason::Empty));
    assert_eq!(h.home().records()[0].name(), "Japan");
    let notices = h.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Info);
    assert_eq!(notices[0].message, "No countries found matching \"Xyzzyland\"");
}

#[tokio::test]
async fn clear_policy_empties_the_view() {
    let config = WayfarerConfig {
        empty_policy: EmptyPolicy::ClearResults,
        ..WayfarerConfig::default()
    };
    let mut h = Harness::new(world(), &config);
    h.search("United").await;

    let decision = h.search("Xyzzyland").await;

    assert!(decision.is_commit());
    assert!(h.home().records().is_empty());
    assert!(h.home().markers().is_empty());
    assert!(h.reconciler.map(Surface::Home).markers().is_empty());
    assert_eq!(h.notices()[0].kind, NoticeKind::Info);
}

#[tokio::test(start_paused = true)]
async fn network_error_keeps_view_and_auto_dismisses() {
    let config = WayfarerConfig::default();
    let mut h = Harness::new(world(), &config);
    h.search("United").await;
    let before = h.home().clone();

    let decision = h.search("Broken").await;

    assert_eq!(decision, CommitDecision::Discard(DiscardReason::NetworkError));
    assert_eq!(h.home(), &before);
    let notices = h.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Error);
    assert_eq!(notices[0].message, NETWORK_ERROR_MESSAGE);

    tokio::time::advance(config.error_notice_ttl() - ms(1)).await;
    assert_eq!(h.notices().len(), 1);
    tokio::time::advance(ms(1)).await;
    assert!(h.notices().is_empty());
}

#[tokio::test]
async fn cancelled_outcome_posts_nothing() {
    let mut h = Harness::new(world(), &WayfarerConfig::default());
    let ticket = h.coord.tokens().supersede(Surface::Home, false);
    let resolved = Resolved {
        token: ticket.token,
        lookup: Lookup::exact("Japan"),
        outcome: LookupOutcome::Cancelled,
    };

    assert_eq!(h.apply(&resolved), CommitDecision::Discard(DiscardReason::Cancelled));
    assert!(h.notices().is_empty());
    assert!(h.home().records().is_empty());
}

// ---- SUPERSESSION ----

#[tokio::test(start_paused = true)]
async fn stale_success_never_commits() {
    let config = WayfarerConfig {
        abort_superseded: false,
        ..WayfarerConfig::default()
    };
    let api = StubApi::new()
        .ok_after("France", vec![country("France", "Paris", 67_000_000, Some((46.0, 2.0)))], ms(200))
        .ok_after("Germany", vec![country("Germany", "Berlin", 83_000_000, Some((51.0, 9.0)))], ms(50));
    let mut h = Harness::new(api, &config);
    let (q1, q2) = (validate("France").unwrap(), validate("Germany").unwrap());

    let (first, second) = tokio::join!(h.coord.search(Surface::Home, &q1), async {
        tokio::time::sleep(ms(10)).await;
        h.coord.search(Surface::Home, &q2).await
    });

    // Germany arrives first and commits; France lands afterwards.
    assert!(h.apply(&second).is_commit());
    assert!(matches!(first.outcome, LookupOutcome::Success(_)));
    assert_eq!(h.apply(&first), CommitDecision::Discard(DiscardReason::Stale));

    assert_eq!(h.home().records()[0].name(), "Germany");
    assert_eq!(h.home().committed(), Some(second.token));
    assert_eq!(h.reconciler.map(Surface::Home).fit_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn stale_failure_posts_no_notice() {
    let config = WayfarerConfig {
        abort_superseded: false,
        ..WayfarerConfig::default()
    };
    let api = StubApi::new()
        .err_after("Broken", ApiError::Status(500), ms(100))
        .ok_after("Japan", vec![japan()], ms(10));
    let mut h = Harness::new(api, &config);
    let (q1, q2) = (validate("Broken").unwrap(), validate("Japan").unwrap());

    let (first, second) = tokio::join!(h.coord.search(Surface::Home, &q1), async {
        tokio::time::sleep(ms(5)).await;
        h.coord.search(Surface::Home, &q2).await
    });

    assert!(h.apply(&second).is_commit());
    assert_eq!(first.outcome, LookupOutcome::NetworkError);
    assert_eq!(h.apply(&first), CommitDecision::Discard(DiscardReason::Stale));
    assert!(h.notices().is_empty());
}

#[tokio::test]
async fn surfaces_keep_separate_views() {
    let api = world().ok("Europe", vec![country("France", "Paris", 67_000_000, Some((46.0, 2.0)))]);
    let mut h = Harness::new(api, &WayfarerConfig::default());

    h.search("Japan").await;
    let region = h.coord.browse(Surface::RegionBrowse, RegionFilter::Europe).await;
    assert!(h.apply(&region).is_commit());

    assert_eq!(h.home().records()[0].name(), "Japan");
    assert_eq!(h.reconciler.view(Surface::RegionBrowse).records()[0].name(), "France");
    assert_eq!(h.reconciler.map(Surface::RegionBrowse).markers().len(), 1);
}

// ---- VIEW OPERATIONS ----

#[tokio::test]
async fn sorting_keeps_markers_pointing_at_their_records() {
    let mut h = Harness::new(world(), &WayfarerConfig::default());
    h.search("United").await;

    h.reconciler.sort(Surface::Home, SortKey::PopulationDesc);

    let view = h.home();
    let names: Vec<&str> = view.records().iter().map(|r| r.name()).collect();
    assert_eq!(names, ["United States", "United Kingdom", "United Arab Emirates"]);
    for marker in view.markers() {
        let record = &view.records()[marker.record];
        assert_eq!(Some(marker.position), record.coordinates);
        assert_eq!(marker.popup, record.popup_text());
    }
    assert_eq!(h.reconciler.map(Surface::Home).markers().len(), 3);
    assert_eq!(h.reconciler.map(Surface::Home).fit_calls(), 1);
}

#[tokio::test]
async fn focus_flies_to_the_record() {
    let api = world().ok(
        "Island",
        vec![country("Lost Island", "B", 20, None), country("Iceland", "Reykjavik", 370_000, Some((65.0, -18.0)))],
    );
    let mut h = Harness::new(api, &WayfarerConfig::default());
    h.search("Island").await;

    assert!(!h.reconciler.focus(Surface::Home, 0).unwrap());
    assert!(h.reconciler.map(Surface::Home).focus().is_none());

    assert!(h.reconciler.focus(Surface::Home, 1).unwrap());
    assert_eq!(
        h.reconciler.map(Surface::Home).focus(),
        Some((LatLng::new(65.0, -18.0), wayfarer_core::reconcile::FOCUS_ZOOM))
    );

    let err = h.reconciler.focus(Surface::Home, 7).unwrap_err();
    assert!(matches!(err, WayfarerError::OutOfRange { index: 7, len: 2, .. }));
}

#[tokio::test]
async fn showing_a_surface_resizes_only_its_map() {
    let mut h = Harness::new(world(), &WayfarerConfig::default());

    h.reconciler.surface_shown(Surface::RegionBrowse);
    h.reconciler.surface_shown(Surface::RegionBrowse);

    assert_eq!(h.reconciler.map(Surface::RegionBrowse).resize_calls(), 2);
    assert_eq!(h.reconciler.map(Surface::Home).resize_calls(), 0);
}

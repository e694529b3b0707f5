//! Tests for the plant catalogue service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockCommentRepository, MockPlantRepository};
use crate::domain::{seed_comments, seed_plants};
use crate::domain::{DEFAULT_PLANT_IMAGE_URL, ErrorCode, TagInput};
use crate::outbound::memory::{InMemoryCommentRepository, InMemoryPlantRepository};
use crate::outbound::option_store::MemoryOptionStore;

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_timestamp(),
    })
}

async fn empty_registry() -> Arc<DynamicOptionRegistry> {
    let registry = DynamicOptionRegistry::load(Arc::new(MemoryOptionStore::new()))
        .await
        .expect("load registry");
    Arc::new(registry)
}

#[fixture]
async fn service() -> PlantCatalogueService {
    let seeded_at = fixture_timestamp() - TimeDelta::days(1);
    PlantCatalogueService::new(
        Arc::new(InMemoryPlantRepository::with_plants(seed_plants(seeded_at))),
        Arc::new(InMemoryCommentRepository::with_comments(seed_comments(
            fixture_timestamp(),
        ))),
        empty_registry().await,
        fixture_clock(),
    )
}

async fn mocked_service(
    plants: MockPlantRepository,
    comments: MockCommentRepository,
) -> PlantCatalogueService {
    PlantCatalogueService::new(
        Arc::new(plants),
        Arc::new(comments),
        empty_registry().await,
        fixture_clock(),
    )
}

fn draft(name: &str) -> PlantDraft {
    PlantDraft {
        name: name.to_owned(),
        scientific_name: None,
        description: "Hierba de prueba".to_owned(),
        location: vec!["Patagonia".to_owned()],
        climate: "Árido".to_owned(),
        season: "Verano".to_owned(),
        uses: vec!["textil".to_owned()],
    }
}

fn comment_draft(text: &str) -> CommentDraft {
    CommentDraft {
        user_id: "user2".to_owned(),
        user_name: "Rosa Q.".to_owned(),
        text: text.to_owned(),
    }
}

fn ids(plants: &[Plant]) -> Vec<&str> {
    plants.iter().map(|plant| plant.id.as_str()).collect()
}

#[rstest]
#[tokio::test]
async fn created_plant_round_trips(#[future] service: PlantCatalogueService) {
    let service = service.await;

    let created = service.create_plant(draft("Chilca")).await.expect("create");
    let fetched = service.get_plant(&created.id).await.expect("get");

    assert_eq!(fetched.as_ref(), Some(&created));
    assert_eq!(
        created.id.as_str(),
        fixture_timestamp().timestamp_millis().to_string()
    );
    assert_eq!(created.image_url, DEFAULT_PLANT_IMAGE_URL);
    assert_eq!(created.created_at, created.updated_at);
}

#[rstest]
#[tokio::test]
async fn creations_in_the_same_instant_get_distinct_ids(
    #[future] service: PlantCatalogueService,
) {
    let service = service.await;

    let first = service.create_plant(draft("Chilca")).await.expect("first");
    let second = service.create_plant(draft("Retama")).await.expect("second");

    let first_id: i64 = first.id.as_str().parse().expect("numeric id");
    let second_id: i64 = second.id.as_str().parse().expect("numeric id");
    assert!(second_id > first_id);
}

#[rstest]
#[case(PlantFilter::default().with_location("Andes"), vec!["1", "3"])]
#[case(PlantFilter::default().with_location("all"), vec!["1", "2", "3", "4", "5"])]
#[case(PlantFilter::default(), vec!["1", "2", "3", "4", "5"])]
#[case(PlantFilter::default().with_search_term("MEYENII"), vec!["3"])]
#[case(PlantFilter::default().with_uses("aromático").with_climate("Cálido"), vec!["4"])]
#[tokio::test]
async fn list_applies_filters_in_repository_order(
    #[future] service: PlantCatalogueService,
    #[case] filter: PlantFilter,
    #[case] expected: Vec<&str>,
) {
    let service = service.await;

    let plants = service.list_plants(&filter).await.expect("list");

    assert_eq!(ids(&plants), expected);
}

#[rstest]
#[tokio::test]
async fn update_merges_fields_and_coerces_scalar_tags(#[future] service: PlantCatalogueService) {
    let service = service.await;
    let id = PlantId::new("1");
    let before = service
        .get_plant(&id)
        .await
        .expect("get")
        .expect("seeded plant");
    let patch = PlantPatch {
        uses: Some(TagInput::from("culinario")),
        location: Some(TagInput::from("Sierra")),
        ..PlantPatch::default()
    };

    let updated = service.update_plant(&id, patch).await.expect("update");

    assert_eq!(updated.uses, vec!["culinario"]);
    assert_eq!(updated.location, vec!["Sierra"]);
    assert_eq!(updated.name, before.name);
    assert_eq!(updated.image_url, before.image_url);
    assert_eq!(updated.created_at, before.created_at);
    assert_eq!(updated.updated_at, fixture_timestamp());
    assert_eq!(
        service.get_plant(&id).await.expect("get"),
        Some(updated)
    );
}

#[rstest]
#[tokio::test]
async fn update_of_missing_plant_fails_without_writing() {
    let mut plants = MockPlantRepository::new();
    plants
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));
    plants.expect_replace().times(0);
    let service = mocked_service(plants, MockCommentRepository::new()).await;

    let error = service
        .update_plant(&PlantId::new("404"), PlantPatch::default())
        .await
        .expect_err("missing plant");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_reports_plant_removed_mid_flight() {
    let existing = seed_plants(fixture_timestamp())
        .into_iter()
        .next()
        .expect("seed plant");
    let mut plants = MockPlantRepository::new();
    plants
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    plants.expect_replace().times(1).return_once(|_| Ok(false));
    let service = mocked_service(plants, MockCommentRepository::new()).await;

    let error = service
        .update_plant(&PlantId::new("1"), PlantPatch::default())
        .await
        .expect_err("plant vanished");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_cascades_to_that_plants_comments_only(#[future] service: PlantCatalogueService) {
    let service = service.await;
    let other = PlantId::new("2");
    service
        .add_comment(&other, comment_draft("La corteza es amarga"))
        .await
        .expect("comment");

    service
        .delete_plant(&PlantId::new("1"))
        .await
        .expect("delete");

    assert!(service.get_plant(&PlantId::new("1")).await.expect("get").is_none());
    assert!(
        service
            .list_comments(&PlantId::new("1"))
            .await
            .expect("comments")
            .is_empty()
    );
    assert_eq!(service.list_comments(&other).await.expect("comments").len(), 1);
}

#[rstest]
#[tokio::test]
async fn deleting_unknown_plant_is_a_no_op(#[future] service: PlantCatalogueService) {
    let service = service.await;

    service
        .delete_plant(&PlantId::new("missing"))
        .await
        .expect("delete");

    let plants = service
        .list_plants(&PlantFilter::default())
        .await
        .expect("list");
    assert_eq!(plants.len(), 5);
}

#[rstest]
#[tokio::test]
async fn new_comment_is_listed_before_seed_comments(#[future] service: PlantCatalogueService) {
    let service = service.await;
    let plant_id = PlantId::new("1");

    let added = service
        .add_comment(&plant_id, comment_draft("¿Se puede sembrar en maceta?"))
        .await
        .expect("comment");
    let comments = service.list_comments(&plant_id).await.expect("comments");

    let order: Vec<_> = comments.iter().map(|comment| comment.id.as_str()).collect();
    assert_eq!(order, vec![added.id.as_str(), "c2", "c1"]);
    assert!(added.id.as_str().starts_with('c'));
}

#[rstest]
#[tokio::test]
async fn comments_may_target_unknown_plants(#[future] service: PlantCatalogueService) {
    let service = service.await;

    let comment = service
        .add_comment(&PlantId::new("ghost"), comment_draft("Hola"))
        .await
        .expect("comment");

    assert_eq!(comment.plant_id.as_str(), "ghost");
}

#[rstest]
#[case(FilterCategory::Dynamic(OptionCategory::Locations))]
#[case(FilterCategory::Dynamic(OptionCategory::Climates))]
#[case(FilterCategory::Dynamic(OptionCategory::Uses))]
#[case(FilterCategory::Seasons)]
#[tokio::test]
async fn filter_options_are_unique_and_sorted(
    #[future] service: PlantCatalogueService,
    #[case] category: FilterCategory,
) {
    let service = service.await;

    let options = service.filter_options(category).await.expect("options");

    let mut expected = options.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(options, expected);
    assert!(!options.is_empty());
}

#[rstest]
#[tokio::test]
async fn seasons_are_the_static_list(#[future] service: PlantCatalogueService) {
    let service = service.await;

    let seasons = service
        .filter_options(FilterCategory::Seasons)
        .await
        .expect("seasons");

    assert_eq!(seasons, SEASONS);
}

#[rstest]
#[tokio::test]
async fn dynamic_location_added_twice_is_listed_once(#[future] service: PlantCatalogueService) {
    let service = service.await;

    for _ in 0..2 {
        service
            .add_option(OptionCategory::Locations, "Patagonia")
            .await
            .expect("add option");
    }
    let locations = service
        .filter_options(FilterCategory::Dynamic(OptionCategory::Locations))
        .await
        .expect("locations");

    let occurrences = locations
        .iter()
        .filter(|location| location.as_str() == "Patagonia")
        .count();
    assert_eq!(occurrences, 1);
}

#[rstest]
#[tokio::test]
async fn filter_options_include_values_from_created_plants(
    #[future] service: PlantCatalogueService,
) {
    let service = service.await;
    service.create_plant(draft("Chilca")).await.expect("create");

    let climates = service
        .filter_options(FilterCategory::Dynamic(OptionCategory::Climates))
        .await
        .expect("climates");

    assert!(climates.iter().any(|climate| climate == "Árido"));
}

#[rstest]
#[tokio::test]
async fn deleted_option_leaves_base_and_plant_values(#[future] service: PlantCatalogueService) {
    let service = service.await;
    service
        .add_option(OptionCategory::Uses, "medicinal")
        .await
        .expect("add");

    service
        .delete_option(OptionCategory::Uses, "medicinal")
        .await
        .expect("delete");
    let uses = service
        .filter_options(FilterCategory::Dynamic(OptionCategory::Uses))
        .await
        .expect("uses");

    assert!(uses.iter().any(|value| value == "medicinal"));
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn blank_option_values_are_rejected(
    #[future] service: PlantCatalogueService,
    #[case] value: &str,
) {
    let service = service.await;

    let error = service
        .add_option(OptionCategory::Climates, value)
        .await
        .expect_err("blank value");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[case(PlantRepositoryError::connection("pool closed"), ErrorCode::ServiceUnavailable)]
#[case(PlantRepositoryError::query("bad filter"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_failures_map_to_domain_errors(
    #[case] failure: PlantRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut plants = MockPlantRepository::new();
    plants.expect_list().times(1).return_once(move |_| Err(failure));
    let service = mocked_service(plants, MockCommentRepository::new()).await;

    let error = service
        .list_plants(&PlantFilter::default())
        .await
        .expect_err("repository failure");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn failed_plant_delete_skips_cascade() {
    let mut plants = MockPlantRepository::new();
    plants
        .expect_delete()
        .times(1)
        .return_once(|_| Err(PlantRepositoryError::connection("offline")));
    let mut comments = MockCommentRepository::new();
    comments.expect_delete_for_plant().times(0);
    let service = mocked_service(plants, comments).await;

    let error = service
        .delete_plant(&PlantId::new("1"))
        .await
        .expect_err("delete fails");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[test]
fn id_sequence_never_repeats_or_goes_backwards() {
    let sequence = IdSequence::default();

    assert_eq!(sequence.next(1_000), 1_000);
    assert_eq!(sequence.next(1_000), 1_001);
    assert_eq!(sequence.next(900), 1_002);
    assert_eq!(sequence.next(2_000), 2_000);
}

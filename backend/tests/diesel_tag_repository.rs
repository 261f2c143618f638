//! Integration tests for `DieselTagRepository` against embedded PostgreSQL.
//!
//! Each test gets a fresh temporary database with the embedded migrations
//! applied. Tests stay synchronous and drive the repository through a
//! dedicated Tokio runtime, since the cluster bootstrap blocks.

use pg_embedded_setup_unpriv::TemporaryDatabase;
use recipe_backend::domain::ports::TagRepository;
use recipe_backend::domain::{TagChanges, TagId, TagName, UserId};
use recipe_backend::outbound::persistence::{
    DbPool, DieselTagRepository, PoolConfig, run_migrations,
};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

#[path = "support/pg_embed.rs"]
mod pg_embed;

use pg_embed::{handle_cluster_setup_failure, shared_cluster};

struct Harness {
    runtime: Runtime,
    repository: DieselTagRepository,
    _database: TemporaryDatabase,
}

fn setup_harness() -> Result<Harness, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster()?;
    let database_name = format!("tag_repo_{}", uuid::Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(database_name.as_str())
        .map_err(|err| format!("{err:?}"))?;
    let database_url = database.url().to_owned();

    let pool = runtime
        .block_on(async {
            run_migrations(&database_url).await.map_err(|err| err.to_string())?;
            DbPool::new(PoolConfig::new(&database_url).with_max_size(2))
                .await
                .map_err(|err| err.to_string())
        })?;

    Ok(Harness {
        runtime,
        repository: DieselTagRepository::new(pool),
        _database: database,
    })
}

#[fixture]
fn harness() -> Option<Harness> {
    match setup_harness() {
        Ok(harness) => Some(harness),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn alice() -> UserId {
    UserId::new("11111111-1111-1111-1111-111111111111").expect("fixture user id is valid")
}

fn bob() -> UserId {
    UserId::new("22222222-2222-2222-2222-222222222222").expect("fixture user id is valid")
}

fn name(value: &str) -> TagName {
    TagName::new(value).expect("fixture tag name is valid")
}

#[rstest]
fn listing_is_scoped_and_ordered(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    let repo = &harness.repository;
    harness.runtime.block_on(async {
        let first_lunch = repo.create(&alice(), &name("Lunch")).await.expect("create");
        let dessert = repo.create(&alice(), &name("Dessert")).await.expect("create");
        let second_lunch = repo.create(&alice(), &name("Lunch")).await.expect("create");
        repo.create(&bob(), &name("Zucchini")).await.expect("create");

        let listed = repo.list_owned(&alice()).await.expect("list");
        let ids: Vec<TagId> = listed.iter().map(|tag| tag.id()).collect();
        assert_eq!(ids, vec![second_lunch.id(), first_lunch.id(), dessert.id()]);
        assert!(listed.iter().all(|tag| tag.owner() == &alice()));
    });
}

#[rstest]
fn names_order_by_code_point(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    let repo = &harness.repository;
    harness.runtime.block_on(async {
        repo.create(&alice(), &name("apple")).await.expect("create");
        repo.create(&alice(), &name("Banana")).await.expect("create");

        let listed = repo.list_owned(&alice()).await.expect("list");
        let names: Vec<&str> = listed.iter().map(|tag| tag.name().as_ref()).collect();
        assert_eq!(names, vec!["apple", "Banana"]);
    });
}

#[rstest]
fn foreign_tags_are_invisible(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    let repo = &harness.repository;
    harness.runtime.block_on(async {
        let tag = repo.create(&alice(), &name("Dinner")).await.expect("create");

        assert!(repo.find_owned(&bob(), tag.id()).await.expect("find").is_none());
        let updated = repo
            .update_owned(&bob(), tag.id(), &TagChanges::rename(name("Stolen")))
            .await
            .expect("update");
        assert!(updated.is_none());
        assert!(!repo.delete_owned(&bob(), tag.id()).await.expect("delete"));

        let stored = repo
            .find_owned(&alice(), tag.id())
            .await
            .expect("find")
            .expect("tag survives foreign writes");
        assert_eq!(stored, tag);
    });
}

#[rstest]
fn owner_updates_and_deletes(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    let repo = &harness.repository;
    harness.runtime.block_on(async {
        let tag = repo.create(&alice(), &name("Dinner")).await.expect("create");

        let unchanged = repo
            .update_owned(&alice(), tag.id(), &TagChanges::default())
            .await
            .expect("empty update")
            .expect("owned tag");
        assert_eq!(unchanged, tag);

        let renamed = repo
            .update_owned(&alice(), tag.id(), &TagChanges::rename(name("Supper")))
            .await
            .expect("rename")
            .expect("owned tag");
        assert_eq!(renamed.name().as_ref(), "Supper");
        assert_eq!(renamed.id(), tag.id());

        assert!(repo.delete_owned(&alice(), tag.id()).await.expect("delete"));
        assert!(!repo.delete_owned(&alice(), tag.id()).await.expect("second delete"));
        assert!(repo.list_owned(&alice()).await.expect("list").is_empty());
    });
}

#[rstest]
fn missing_ids_report_absence(harness: Option<Harness>) {
    let Some(harness) = harness else { return };
    let repo = &harness.repository;
    harness.runtime.block_on(async {
        let missing = TagId::new(i64::MAX);
        assert!(repo.find_owned(&alice(), missing).await.expect("find").is_none());
        let updated = repo
            .update_owned(&alice(), missing, &TagChanges::default())
            .await
            .expect("update");
        assert!(updated.is_none());
    });
}

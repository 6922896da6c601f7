mod common;

use entity::director;
use movie_catalog_service::sea_orm::{ActiveValue::Set, DbErr};
use movie_catalog_service::{ActorService, CrudService, DirectorService};
use pretty_assertions::assert_eq;

use common::{insert_actor, insert_director, setup};

#[tokio::test]
async fn director_lifecycle() {
    let db = &setup().await;

    let nolan = insert_director(db, "Christopher", "Nolan").await;
    let gerwig = insert_director(db, "Greta", "Gerwig").await;
    assert_eq!(nolan.id, 1);
    assert_eq!(gerwig.id, 2);

    {
        let found = DirectorService::find_by_id(db, nolan.id).await.unwrap().unwrap();
        assert_eq!(found.first_name, "Christopher");
        assert_eq!(found.last_name, "Nolan");
        assert_eq!(found.birth_date, None);
    }

    {
        let all = DirectorService::find_all(db).await.unwrap();
        let names: Vec<_> = all.iter().map(|d| d.last_name.as_str()).collect();
        assert_eq!(names, vec!["Gerwig", "Nolan"]);
        assert_eq!(DirectorService::count(db).await.unwrap(), 2);
    }

    {
        let renamed = DirectorService::update(
            db,
            director::Model {
                first_name: "Chris".to_owned(),
                ..nolan.clone()
            },
        )
        .await
        .unwrap();
        assert_eq!(renamed.first_name, "Chris");

        let stored = DirectorService::find_by_id(db, nolan.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Chris");
    }

    {
        DirectorService::delete(db, gerwig.clone()).await.unwrap();
        assert!(DirectorService::find_by_id(db, gerwig.id).await.unwrap().is_none());
        assert_eq!(DirectorService::count(db).await.unwrap(), 1);

        let err = DirectorService::delete(db, gerwig).await.unwrap_err();
        assert!(matches!(err, DbErr::RecordNotFound(_)));
    }
}

#[tokio::test]
async fn find_by_id_misses_are_none() {
    let db = &setup().await;

    assert!(DirectorService::find_by_id(db, 42).await.unwrap().is_none());
    assert!(ActorService::find_by_id(db, 42).await.unwrap().is_none());
}

#[tokio::test]
async fn update_of_unknown_row_fails() {
    let db = &setup().await;

    let ghost = director::Model {
        id: 99,
        first_name: "No".to_owned(),
        last_name: "Body".to_owned(),
        birth_date: None,
    };
    assert!(DirectorService::update(db, ghost).await.is_err());
}

#[tokio::test]
async fn create_assigns_fresh_ids() {
    let db = &setup().await;

    let first = DirectorService::create(
        db,
        director::ActiveModel {
            first_name: Set("Sofia".to_owned()),
            last_name: Set("Coppola".to_owned()),
            birth_date: Set(None),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let second = insert_director(db, "Sofia", "Coppola").await;

    assert_ne!(first.id, second.id);
    assert_ne!(first, second);
}

#[tokio::test]
async fn actors_by_ids() {
    let db = &setup().await;

    let pitt = insert_actor(db, "Brad", "Pitt").await;
    let jolie = insert_actor(db, "Angelina", "Jolie").await;
    let dicaprio = insert_actor(db, "Leonardo", "DiCaprio").await;

    let found = ActorService::find_by_ids(db, &[pitt.id, dicaprio.id, 404])
        .await
        .unwrap();
    assert_eq!(found, vec![dicaprio.clone(), pitt.clone()]);

    assert!(ActorService::find_by_ids(db, &[]).await.unwrap().is_empty());

    let all = ActorService::find_all(db).await.unwrap();
    assert_eq!(all, vec![dicaprio, jolie, pitt]);
}

#[tokio::test]
async fn dev_seed_runs_once() {
    let db = &setup().await;

    movie_catalog_service::ensure_dev_seed(db).await.unwrap();
    movie_catalog_service::ensure_dev_seed(db).await.unwrap();

    assert_eq!(DirectorService::count(db).await.unwrap(), 2);
    assert_eq!(ActorService::count(db).await.unwrap(), 3);

    let actors = ActorService::find_all(db).await.unwrap();
    let names: Vec<_> = actors.iter().map(|a| a.full_name()).collect();
    assert_eq!(names, vec!["Leonardo DiCaprio", "Angelina Jolie", "Brad Pitt"]);
}

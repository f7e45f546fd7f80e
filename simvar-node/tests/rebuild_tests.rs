use std::sync::Arc;

use simvar_node::{BindError, Binder};
use simvar_space::memory::MemorySpace;
use simvar_types::{DataType, VariableDefinition, Waveform};
use uuid::Uuid;

fn definition(name: &str) -> VariableDefinition {
    VariableDefinition {
        id: Uuid::new_v4(),
        browse_name: name.to_string(),
        node_id: format!("ns=1;s={name}"),
        data_type: DataType::Double,
        minimum_sampling_interval: 100,
        minimum: 0.0,
        maximum: 100.0,
        value_type: Waveform::Sinusoid,
    }
}

#[tokio::test]
async fn rebuilding_an_empty_catalogue_is_idempotent() {
    let space = MemorySpace::new();
    let binder = Binder::new();

    binder.rebuild(&space, vec![]).await.unwrap();
    binder.rebuild(&space, vec![]).await.unwrap();

    assert_eq!(space.installed_count(), 0);
    assert_eq!(binder.installed_count().await, 0);
}

#[tokio::test]
async fn rebuild_replaces_the_installed_set() {
    let space = MemorySpace::new();
    let binder = Binder::new();

    let a = definition("A");
    let b = definition("B");
    binder.rebuild(&space, vec![a.clone(), b]).await.unwrap();
    assert_eq!(space.installed_count(), 2);

    binder.rebuild(&space, vec![a.clone()]).await.unwrap();
    assert_eq!(space.installed_count(), 1);
    assert!(space.contains_node_id(&a.node_id));
    assert!(!space.contains_node_id("ns=1;s=B"));
}

#[tokio::test]
async fn installed_sources_answer_reads() {
    let space = MemorySpace::new();
    let binder = Binder::new();

    let mut status = definition("Status");
    status.data_type = DataType::Boolean;
    binder
        .rebuild(&space, vec![definition("Level"), status])
        .await
        .unwrap();

    let level = space.read("ns=1;s=Level").unwrap().as_f64().unwrap();
    assert!((0.0..=100.0).contains(&level));
    assert_eq!(
        space.read("ns=1;s=Status").unwrap().data_type(),
        DataType::Boolean
    );

    let spec = space.spec("ns=1;s=Level").unwrap();
    assert_eq!(spec.display_name, "Level");
    assert_eq!(spec.sampling_interval, 100);
}

#[tokio::test]
async fn duplicate_node_ids_abort_the_install_pass() {
    let space = MemorySpace::new();
    let binder = Binder::new();

    let previous = definition("Previous");
    binder.rebuild(&space, vec![previous.clone()]).await.unwrap();

    let first = definition("First");
    let mut collides = definition("Second");
    collides.node_id = first.node_id.clone();

    let err = binder
        .rebuild(&space, vec![first.clone(), collides])
        .await
        .unwrap_err();
    assert!(matches!(err, BindError::Duplicate(_)));

    // the removal pass already ran: the previous source is gone and stays
    // gone until a later rebuild converges the set
    assert!(!space.contains_node_id(&previous.node_id));
    assert_eq!(space.node_ids(), vec![first.node_id.clone()]);

    binder.rebuild(&space, vec![previous.clone()]).await.unwrap();
    assert_eq!(space.node_ids(), vec![previous.node_id]);
}

#[tokio::test]
async fn an_unavailable_space_fails_the_rebuild() {
    let space = MemorySpace::new();
    let binder = Binder::new();

    space.set_available(false);
    let err = binder
        .rebuild(&space, vec![definition("A")])
        .await
        .unwrap_err();
    assert!(matches!(err, BindError::Unavailable));
    assert_eq!(space.installed_count(), 0);
}

#[tokio::test]
async fn concurrent_rebuilds_never_interleave() {
    let space = MemorySpace::new();
    let binder = Arc::new(Binder::new());

    let a = definition("A");
    let b = definition("B");

    let mut tasks = Vec::new();
    for _ in 0..20 {
        for def in [a.clone(), b.clone()] {
            let space = space.clone();
            let binder = binder.clone();
            tasks.push(tokio::spawn(async move {
                binder.rebuild(&space, vec![def]).await.unwrap();
            }));
        }
    }
    futures::future::join_all(tasks).await;

    // whichever snapshot applied last, the result is one whole catalogue,
    // never a mix of both
    let ids = space.node_ids();
    assert!(
        ids == vec![a.node_id.clone()] || ids == vec![b.node_id.clone()],
        "exposed set matches neither catalogue: {ids:?}"
    );
}

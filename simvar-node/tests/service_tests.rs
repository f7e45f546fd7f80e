use simvar_catalog::{Catalog, NewVariable, StoreError, VariableUpdate};
use simvar_node::{ServiceError, Simulator, SimulatorBuilder};
use simvar_space::memory::MemorySpace;
use simvar_types::{DataType, Waveform};

fn new_variable(name: &str) -> NewVariable {
    NewVariable {
        browse_name: name.to_string(),
        node_id: None,
        data_type: DataType::Double,
        minimum_sampling_interval: 100,
        minimum: 0.0,
        maximum: 100.0,
        value_type: Waveform::Triangle,
    }
}

fn simulator() -> (Simulator, MemorySpace) {
    let space = MemorySpace::new();
    let simulator = SimulatorBuilder::new(space.clone()).build();
    (simulator, space)
}

#[tokio::test]
async fn mutations_keep_the_space_consistent_with_the_catalogue() {
    let (simulator, space) = simulator();

    let temp = simulator
        .create_variable(new_variable("Temperature"))
        .await
        .unwrap();
    simulator
        .create_variable(new_variable("Pressure"))
        .await
        .unwrap();
    assert_eq!(space.installed_count(), 2);
    assert!(space.contains_node_id("ns=1;s=Temperature"));

    simulator
        .update_variable(
            temp.id,
            VariableUpdate {
                node_id: Some("ns=1;s=Temp01".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(space.contains_node_id("ns=1;s=Temp01"));
    assert!(!space.contains_node_id("ns=1;s=Temperature"));

    simulator.delete_variable(temp.id).await.unwrap();
    assert_eq!(space.node_ids(), vec!["ns=1;s=Pressure".to_string()]);

    simulator.clear().await.unwrap();
    assert_eq!(space.installed_count(), 0);
    assert!(simulator.variables().is_empty());
}

#[tokio::test]
async fn conflicting_creates_are_rejected_before_the_space_changes() {
    let (simulator, space) = simulator();

    simulator
        .create_variable(new_variable("Temperature"))
        .await
        .unwrap();
    let err = simulator
        .create_variable(new_variable("Temperature"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Store(StoreError::BrowseNameTaken(_))
    ));
    assert_eq!(space.installed_count(), 1);
}

#[tokio::test]
async fn import_replaces_the_exposed_set() {
    let (simulator, space) = simulator();
    simulator
        .create_variable(new_variable("Old"))
        .await
        .unwrap();

    let incoming = {
        let staging = Catalog::new();
        staging.create(new_variable("A")).unwrap();
        staging.create(new_variable("B")).unwrap();
        staging.list_all()
    };
    assert_eq!(simulator.import(incoming).await.unwrap(), 2);
    assert_eq!(
        space.node_ids(),
        vec!["ns=1;s=A".to_string(), "ns=1;s=B".to_string()]
    );
}

#[tokio::test]
async fn export_matches_the_catalogue() {
    let (simulator, _space) = simulator();
    simulator
        .create_variable(new_variable("Temperature"))
        .await
        .unwrap();

    let (filename, definitions) = simulator.export();
    assert!(filename.starts_with("backup-") && filename.ends_with(".json"));
    assert_eq!(definitions, simulator.variables());
}

#[tokio::test]
async fn seeding_exposes_the_default_set_once() {
    let (simulator, space) = simulator();

    let inserted = simulator.seed().await.unwrap();
    assert_eq!(inserted, 20);
    assert_eq!(space.installed_count(), 20);
    assert!(space.contains_node_id("ns=1;s=MotorSpeed"));

    assert_eq!(simulator.seed().await.unwrap(), 0);
    assert_eq!(space.installed_count(), 20);
}

#[tokio::test]
async fn a_failed_rebuild_reports_stale_exposure_and_resync_converges() {
    let (simulator, space) = simulator();

    space.set_available(false);
    let err = simulator
        .create_variable(new_variable("Temperature"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::StaleExposure(_)));

    // the catalogue write committed; only the exposure is stale
    assert_eq!(simulator.variables().len(), 1);
    assert_eq!(space.installed_count(), 0);

    space.set_available(true);
    simulator.resync().await.unwrap();
    assert_eq!(space.node_ids(), vec!["ns=1;s=Temperature".to_string()]);
}
